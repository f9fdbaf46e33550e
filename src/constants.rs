//! Application constants and configuration values

// === Backend ===
pub const DEFAULT_API_URL: &str = "http://localhost:4000";
pub const API_URL_ENV: &str = "SOULMATE_API_URL";
pub const DATA_DIR_ENV: &str = "SOULMATE_DATA_DIR";
pub const DATA_DIR_NAME: &str = "soulmate";

// === UI & Layout ===
pub const APP_WIDTH: f32 = 1400.0;
pub const APP_HEIGHT: f32 = 880.0;
pub const SIDEBAR_WIDTH: f32 = 280.0;
pub const LYRICS_PANEL_WIDTH: f32 = 320.0;
pub const PLAYER_BAR_HEIGHT: f32 = 84.0;

// Repaint while audio plays or requests are in flight
pub const REPAINT_INTERVAL_ACTIVE_MILLIS: u64 = 100;

// === Audio Playback ===
pub const VOLUME_STEP: f32 = 0.1;
pub const SEEK_STEP_SECS: f64 = 10.0;
// Pressing previous this far into a track restarts it instead
pub const RESTART_THRESHOLD_SECS: f64 = 3.0;

// === Content ===
pub const HISTORY_LIMIT: usize = 100;
pub const FEEDBACK_NAME_MAX: usize = 100;
pub const FEEDBACK_MESSAGE_MAX: usize = 1000;
pub const DEVELOPER_UPI_ID: &str = "8849561649@upi";
pub const SUPPORT_URL: &str = "https://buymeacoffee.com/alokmahapatra";
pub const DEVELOPER_GITHUB_URL: &str = "https://github.com/AlokMahapatra26";
