use crate::models::{LyricLine, LyricsResult};

pub const LYRICS_NOT_FOUND: &str = "Lyrics not found";
pub const LYRICS_LOAD_FAILED: &str = "Failed to load lyrics";
pub const INSTRUMENTAL: &str = "Instrumental track";

/// Index of the line being sung at `time`: the last line starting at or
/// before it. `lines` must be sorted by time.
pub fn active_line(lines: &[LyricLine], time: f64) -> Option<usize> {
    let passed = lines.partition_point(|line| line.time <= time);
    passed.checked_sub(1)
}

/// What the lyrics panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum LyricsContent {
    Idle,
    Loading,
    Synced(Vec<LyricLine>),
    Plain(Vec<String>),
    /// Instrumental, not found, or failed
    Message(&'static str),
}

/// Lyrics for the current track plus the scroll bookkeeping of the panel
#[derive(Debug)]
pub struct LyricsView {
    track_id: Option<String>,
    content: LyricsContent,
    active: Option<usize>,
    scroll_pending: bool,
}

impl Default for LyricsView {
    fn default() -> Self {
        Self {
            track_id: None,
            content: LyricsContent::Idle,
            active: None,
            scroll_pending: false,
        }
    }
}

impl LyricsView {
    pub fn track_id(&self) -> Option<&str> {
        self.track_id.as_deref()
    }

    pub fn content(&self) -> &LyricsContent {
        &self.content
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Start loading for a new track. Returns false when it is already loaded
    /// or loading; a failed load is retried.
    pub fn begin(&mut self, track_id: &str) -> bool {
        let failed = self.content == LyricsContent::Message(LYRICS_LOAD_FAILED);
        if self.track_id.as_deref() == Some(track_id) && !failed {
            return false;
        }
        self.track_id = Some(track_id.to_string());
        self.content = LyricsContent::Loading;
        self.active = None;
        self.scroll_pending = false;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a fetch result. Responses for a track other than the one
    /// requested last are dropped; returns whether it was applied.
    pub fn apply(&mut self, track_id: &str, result: Result<Option<LyricsResult>, String>) -> bool {
        if self.track_id.as_deref() != Some(track_id) {
            log::debug!("[Lyrics] Dropping stale lyrics for {}", track_id);
            return false;
        }

        self.content = match result {
            Ok(Some(lyrics)) => {
                if let Some(lines) = lyrics.synced_lines() {
                    LyricsContent::Synced(lines.to_vec())
                } else if lyrics.instrumental {
                    LyricsContent::Message(INSTRUMENTAL)
                } else if lyrics.plain_lyrics.as_deref().is_some_and(|t| !t.trim().is_empty()) {
                    LyricsContent::Plain(lyrics.plain_lines().into_iter().map(str::to_string).collect())
                } else {
                    LyricsContent::Message(LYRICS_NOT_FOUND)
                }
            }
            Ok(None) => LyricsContent::Message(LYRICS_NOT_FOUND),
            Err(e) => {
                log::warn!("[Lyrics] Failed to load lyrics for {}: {}", track_id, e);
                LyricsContent::Message(LYRICS_LOAD_FAILED)
            }
        };
        self.active = None;
        true
    }

    /// Update the active line for the playback position. Returns true when it
    /// moved, which is when the panel should scroll.
    pub fn update_time(&mut self, time: f64) -> bool {
        let LyricsContent::Synced(lines) = &self.content else {
            return false;
        };
        let active = active_line(lines, time);
        if active != self.active {
            self.active = active;
            self.scroll_pending = active.is_some();
            return true;
        }
        false
    }

    /// Consume the pending scroll request for the active line
    pub fn take_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}
