pub mod artwork;
pub mod async_helper;
pub mod audio_controller;
pub mod clipboard;
pub mod error_handling;
pub mod formatting;
pub mod http;
pub mod mediaplay;
pub mod token_store;
