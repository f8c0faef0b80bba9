//! Game session state and the interfaces it talks through

pub mod input;
pub mod state;
pub mod surface;

pub use input::Activation;
pub use state::{FoundWord, Game};
pub use surface::{Panels, Surface};
