use crate::app::queue::PlaybackQueue;
use crate::app_state::Preferences;
use crate::models::Track;
use crate::utils::audio_controller::AudioController;

pub struct AudioState {
    // Audio Engine & Queue
    pub audio_controller: AudioController,
    pub playback_queue: PlaybackQueue,

    // Current Track
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub loading_stream: bool, // Stream URL is being resolved
    pub last_error: Option<String>,

    // Controls (persisted in settings.json)
    pub volume: f32,
    pub muted: bool,
}

impl AudioState {
    pub fn new(preferences: &Preferences) -> Self {
        let mut playback_queue = PlaybackQueue::new();
        playback_queue.set_shuffle(preferences.shuffle);
        playback_queue.set_repeat_mode(preferences.repeat_mode);

        let volume = preferences.volume.clamp(0.0, 1.0);
        let muted = preferences.muted;
        let initial = if muted { 0.0 } else { volume };

        Self {
            audio_controller: AudioController::new(initial),
            playback_queue,
            current_track: None,
            is_playing: false,
            loading_stream: false,
            last_error: None,
            volume,
            muted,
        }
    }

    pub fn current_track_id(&self) -> Option<&str> {
        self.current_track.as_ref().map(|t| t.id.as_str())
    }

    /// Volume actually sent to the sink
    pub fn output_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            volume: self.volume,
            muted: self.muted,
            shuffle: self.playback_queue.shuffle_enabled(),
            repeat_mode: self.playback_queue.repeat_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::RepeatMode;

    #[test]
    fn test_preferences_round_trip_through_state() {
        let prefs = Preferences {
            volume: 0.4,
            muted: true,
            shuffle: true,
            repeat_mode: RepeatMode::All,
        };
        let audio = AudioState::new(&prefs);
        assert_eq!(audio.output_volume(), 0.0);
        assert_eq!(audio.to_preferences(), prefs);
    }
}
