mod action;
mod backend;
mod event;
mod generation;
mod history;
mod language;
mod notice;
mod speech;
mod textarea;
mod theme;

pub use action::*;
pub use backend::*;
pub use event::*;
pub use generation::*;
pub use history::*;
pub use language::*;
pub use notice::*;
pub use speech::*;
pub use textarea::*;
pub use theme::*;
