pub mod actions;
mod app_state;
pub mod clipboard;
mod downloads;
pub mod events;
mod generation;
mod highlighter;
mod preferences;
mod scroll;
#[cfg(test)]
mod testing;

pub use app_state::*;
pub use downloads::*;
pub use generation::*;
pub use highlighter::*;
pub use preferences::*;
pub use scroll::*;
