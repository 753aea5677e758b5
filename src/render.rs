//! Rendering layer: UI panels composited onto the character-grid surface.

pub mod bar;
pub mod message_log;
pub mod names;
pub mod theme;

pub use bar::render_bar;
pub use message_log::{Message, MessageLog};
pub use names::render_names_at;
