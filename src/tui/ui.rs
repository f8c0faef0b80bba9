//! UI rendering using ratatui
//!
//! Draws the board, the score (upper text), the word being built (lower
//! text), the found-words panel and the Reset/Exit buttons. Text and tile
//! highlights come from the game's display surface.

use super::layout::BoardLayout;
use crate::app::{Game, Panels, Surface};
use crate::game::grid::{Coord, Highlight};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render one frame of the game
pub fn render(frame: &mut Frame, game: &Game<Panels>, layout: &BoardLayout) {
    let surface = game.surface();

    let title = Paragraph::new("BOGGLE")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let score = Paragraph::new(format!("Score: {}", format_score(surface.score_text())))
        .style(Style::default().fg(Color::Magenta).bold());
    frame.render_widget(score, layout.score);

    for coord in Coord::all() {
        render_tile(frame, layout.tile(coord), game.grid().letter(coord), surface.highlight(coord));
    }

    let partial = Paragraph::new(format!("> {}_", surface.partial_word()))
        .style(Style::default().fg(Color::White));
    frame.render_widget(partial, layout.partial_word);

    render_found_words(frame, layout.found_words, surface.found_words_text());
    render_buttons(frame, layout);

    let footer = Paragraph::new("Click tiles to spell, click the last one again to submit | r Reset | Esc Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, layout.footer);
}

/// Render a single lettered tile
fn render_tile(frame: &mut Frame, area: Rect, letter: &str, highlight: Highlight) {
    let style = tile_style(highlight);
    let tile = Paragraph::new(letter.to_string())
        .style(style.bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(style));
    frame.render_widget(tile, area);
}

/// Render the found-words panel (right side)
fn render_found_words(frame: &mut Frame, area: Rect, text: &str) {
    let items: Vec<ListItem> = text
        .lines()
        .map(|word| ListItem::new(word.to_string()).style(Style::default().fg(Color::Green)))
        .collect();
    let count = items.len();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!("Found ({})", count)),
    );
    frame.render_widget(list, area);
}

fn render_buttons(frame: &mut Frame, layout: &BoardLayout) {
    let reset = Paragraph::new("[ Reset ]")
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(reset, layout.reset);

    let exit = Paragraph::new("[ Exit ]")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(exit, layout.exit);
}

/// Colours for each highlight state
fn tile_style(highlight: Highlight) -> Style {
    match highlight {
        Highlight::Neutral => Style::default().fg(Color::Black).bg(Color::White),
        Highlight::Active => Style::default().fg(Color::Blue).bg(Color::LightBlue),
        Highlight::Previous => Style::default().fg(Color::Green).bg(Color::LightGreen),
    }
}

/// The score text is blank until the first word is found
fn format_score(text: &str) -> &str {
    if text.is_empty() {
        "0"
    } else {
        text
    }
}
