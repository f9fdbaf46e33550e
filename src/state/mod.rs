pub mod audio_state;
pub mod auth_state;
pub mod background_tasks;
pub mod content_state;
pub mod ui_state;

pub use audio_state::AudioState;
pub use auth_state::AuthState;
pub use background_tasks::{ActionOutcome, BackgroundTasks};
pub use content_state::ContentState;
pub use ui_state::UIState;
