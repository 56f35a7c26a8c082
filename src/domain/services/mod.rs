pub mod actions;
mod chat_widget;
mod content;
pub mod events;
mod portfolio;
mod session;

pub use chat_widget::*;
pub use content::*;
pub use portfolio::*;
pub use session::*;
