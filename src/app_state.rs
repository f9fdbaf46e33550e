use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    None,
    All,
    One,
}

impl RepeatMode {
    /// Off -> All -> One -> Off, matching the repeat button
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::None => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::None => "Repeat off",
            RepeatMode::All => "Repeat all",
            RepeatMode::One => "Repeat one",
        }
    }
}

/// Playback preferences persisted between launches
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub volume: f32,
    pub muted: bool,
    pub shuffle: bool,
    pub repeat_mode: RepeatMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            volume: 0.7,
            muted: false,
            shuffle: false,
            repeat_mode: RepeatMode::None,
        }
    }
}

impl Preferences {
    /// Load from `dir`, falling back to defaults when missing or unreadable
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<Preferences>(&text) {
            Ok(mut prefs) => {
                prefs.volume = if prefs.volume.is_finite() {
                    prefs.volume.clamp(0.0, 1.0)
                } else {
                    Self::default().volume
                };
                prefs
            }
            Err(e) => {
                log::warn!("[Settings] Ignoring unreadable {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) -> Result<(), String> {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create data dir: {}", e))?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        fs::write(dir.join(SETTINGS_FILE), json)
            .map_err(|e| format!("Failed to write settings: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_cycle() {
        assert_eq!(RepeatMode::None.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::None);
    }

    #[test]
    fn test_preferences_persist() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Preferences::load(dir.path()), Preferences::default());

        let prefs = Preferences {
            volume: 0.25,
            muted: true,
            shuffle: true,
            repeat_mode: RepeatMode::One,
        };
        prefs.save(dir.path()).unwrap();
        assert_eq!(Preferences::load(dir.path()), prefs);
    }

    #[test]
    fn test_partial_and_out_of_range_settings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), r#"{"volume": 3.5, "repeat_mode": "all"}"#).unwrap();
        let prefs = Preferences::load(dir.path());
        assert_eq!(prefs.volume, 1.0);
        assert_eq!(prefs.repeat_mode, RepeatMode::All);
        assert!(!prefs.muted);
    }

    #[test]
    fn test_corrupt_settings_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{not json").unwrap();
        assert_eq!(Preferences::load(dir.path()), Preferences::default());
    }
}
