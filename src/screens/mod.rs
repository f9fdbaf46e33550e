pub mod admin;
pub mod developer;
pub mod friends;
pub mod history;
pub mod liked;
pub mod login;
pub mod now_playing;
pub mod pending;
pub mod playlists;
pub mod profile;
pub mod search;
pub mod splash;
