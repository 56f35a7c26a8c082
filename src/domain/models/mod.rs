mod action;
mod backend;
mod content;
mod event;
mod language;
mod speaker;
mod transcript;
mod turn;

pub use action::*;
pub use backend::*;
pub use content::*;
pub use event::*;
pub use language::*;
pub use speaker::*;
pub use transcript::*;
pub use turn::*;
