/// Services module - logic shared by screens, kept free of egui
pub mod lyrics;
pub mod session;
pub mod social;

pub use lyrics::{active_line, LyricsView};
pub use session::{route_for, Route};
pub use social::toggle_like;
