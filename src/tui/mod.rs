//! Terminal UI components using ratatui

mod events;
mod layout;
mod terminal;
mod ui;

pub use events::activation_for;
pub use layout::BoardLayout;
pub use terminal::Tui;
