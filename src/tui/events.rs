//! Translating terminal events into game activations

use super::layout::BoardLayout;
use crate::app::Activation;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

/// Map a terminal event to an activation, if it is one the game reacts to.
///
/// Left-button presses are hit-tested against the layout of the last frame.
/// Esc/q exit and r resets.
pub fn activation_for(event: &Event, layout: &BoardLayout) -> Option<Activation> {
    match event {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(layout.hit(mouse.column, mouse.row)),
            _ => None,
        },
        // Only handle key press events (not release)
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Activation::Exit),
            KeyCode::Char('r') => Some(Activation::Reset),
            _ => None,
        },
        _ => None,
    }
}
