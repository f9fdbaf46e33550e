use crate::app_state::RepeatMode;
use crate::models::Track;
use rand::seq::SliceRandom;

/// Tracks queued for playback
///
/// `tracks` keeps list order; `order` is the play order as indices into
/// `tracks` (identity unless shuffled); `current` indexes into `order`.
#[derive(Debug, Clone, Default)]
pub struct PlaybackQueue {
    tracks: Vec<Track>,
    order: Vec<usize>,
    current: Option<usize>,
    shuffle_enabled: bool,
    repeat_mode: RepeatMode,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle_enabled
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat_mode = mode;
    }

    fn index_of(&self, track_id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track_id)
    }

    fn order_position(&self, track_idx: usize) -> Option<usize> {
        self.order.iter().position(|&i| i == track_idx)
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.index_of(track_id).is_some()
    }

    pub fn current_track(&self) -> Option<&Track> {
        let pos = self.current?;
        self.tracks.get(*self.order.get(pos)?)
    }

    /// Make `track` current. A track already queued is jumped to; a new one
    /// is inserted right after the current track.
    pub fn play_track(&mut self, track: Track) -> &Track {
        let track_idx = match self.index_of(&track.id) {
            Some(idx) => idx,
            None => self.insert_after_current(track),
        };
        self.current = self.order_position(track_idx);
        log::info!("[Queue] Playing position {:?} of {}", self.current, self.order.len());
        &self.tracks[track_idx]
    }

    fn insert_after_current(&mut self, track: Track) -> usize {
        let (list_at, order_at) = match self.current {
            Some(pos) => (self.order[pos] + 1, pos + 1),
            None => (self.tracks.len(), self.order.len()),
        };

        self.tracks.insert(list_at, track);
        for idx in self.order.iter_mut() {
            if *idx >= list_at {
                *idx += 1;
            }
        }
        self.order.insert(order_at, list_at);
        list_at
    }

    /// Append to the end of the queue. Returns false if already queued.
    pub fn add_to_queue(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            log::debug!("[Queue] '{}' already queued", track.title);
            return false;
        }
        log::info!("[Queue] Added '{}'", track.title);
        self.tracks.push(track);
        self.order.push(self.tracks.len() - 1);
        true
    }

    /// Remove a track by id. The current track stays current unless it is
    /// the one removed, in which case the queue points just before the gap so
    /// `next()` continues with the track that followed it.
    pub fn remove_from_queue(&mut self, track_id: &str) -> bool {
        let Some(track_idx) = self.index_of(track_id) else {
            return false;
        };
        let Some(pos) = self.order_position(track_idx) else {
            return false;
        };

        self.tracks.remove(track_idx);
        self.order.remove(pos);
        for idx in self.order.iter_mut() {
            if *idx > track_idx {
                *idx -= 1;
            }
        }

        self.current = match self.current {
            Some(cur) if pos < cur => Some(cur - 1),
            Some(cur) if pos == cur => cur.checked_sub(1),
            other => other,
        };
        if self.order.is_empty() {
            self.current = None;
        }
        true
    }

    /// Replace the queue (e.g. playing a playlist). Duplicates are dropped;
    /// `start_id` becomes current when present.
    pub fn set_queue(&mut self, tracks: Vec<Track>, start_id: Option<&str>) -> Option<&Track> {
        let mut seen = std::collections::HashSet::new();
        self.tracks = tracks
            .into_iter()
            .filter(|t| seen.insert(t.id.clone()))
            .collect();

        let start = start_id
            .and_then(|id| self.index_of(id))
            .or(if self.tracks.is_empty() { None } else { Some(0) });
        self.rebuild_order(start);
        log::info!("[Queue] Loaded {} tracks", self.tracks.len());
        self.current_track()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.order.clear();
        self.current = None;
    }

    /// Rebuild `order` for the shuffle state, keeping `keep` (a list index) current
    fn rebuild_order(&mut self, keep: Option<usize>) {
        let len = self.tracks.len();
        if self.shuffle_enabled {
            let mut rest: Vec<usize> = (0..len).filter(|&i| Some(i) != keep).collect();
            rest.shuffle(&mut rand::rng());
            self.order = keep.into_iter().chain(rest).collect();
            self.current = keep.map(|_| 0);
        } else {
            self.order = (0..len).collect();
            self.current = keep;
        }
    }

    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle_enabled == enabled {
            return;
        }
        self.shuffle_enabled = enabled;
        let keep = self.current.map(|pos| self.order[pos]);
        self.rebuild_order(keep);
        log::info!("[Queue] Shuffle {}", if enabled { "on" } else { "off" });
    }

    /// Advance when a track finishes: repeat-one replays, repeat-all wraps
    pub fn next(&mut self) -> Option<&Track> {
        if self.repeat_mode == RepeatMode::One && self.current.is_some() {
            return self.current_track();
        }
        self.skip_forward()
    }

    /// Next button: moves even in repeat-one mode
    pub fn skip_forward(&mut self) -> Option<&Track> {
        if self.order.is_empty() {
            return None;
        }
        let next = match self.current {
            None => 0,
            Some(pos) if pos + 1 < self.order.len() => pos + 1,
            Some(_) if self.repeat_mode != RepeatMode::None => 0,
            Some(_) => return None,
        };
        self.current = Some(next);
        self.current_track()
    }

    pub fn previous(&mut self) -> Option<&Track> {
        let pos = self.current?;
        if pos > 0 {
            self.current = Some(pos - 1);
        } else if self.repeat_mode == RepeatMode::All && !self.order.is_empty() {
            self.current = Some(self.order.len() - 1);
        } else {
            return None;
        }
        self.current_track()
    }

    pub fn has_next(&self) -> bool {
        match self.current {
            Some(pos) => pos + 1 < self.order.len() || self.repeat_mode != RepeatMode::None,
            None => !self.order.is_empty(),
        }
    }

    /// Tracks after the current one, in play order
    pub fn upcoming(&self) -> Vec<&Track> {
        let start = self.current.map_or(0, |pos| pos + 1);
        self.order
            .iter()
            .skip(start)
            .filter_map(|&i| self.tracks.get(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Title {}", id),
            artist: "Artist".to_string(),
            duration: "3:00".to_string(),
            thumbnail: String::new(),
            thumbnail_hd: String::new(),
        }
    }

    fn ids(tracks: Vec<&Track>) -> Vec<String> {
        tracks.into_iter().map(|t| t.id.clone()).collect()
    }

    fn current_id(queue: &PlaybackQueue) -> Option<String> {
        queue.current_track().map(|t| t.id.clone())
    }

    fn queue_of(list: &[&str]) -> PlaybackQueue {
        let mut queue = PlaybackQueue::new();
        queue.set_queue(list.iter().map(|id| track(id)).collect(), None);
        queue
    }

    #[test]
    fn test_play_track_inserts_after_current() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.play_track(track("x"));
        assert_eq!(current_id(&queue).as_deref(), Some("x"));
        assert_eq!(ids(queue.upcoming()), vec!["b", "c"]);

        // Already queued: jump, no duplicate
        queue.play_track(track("c"));
        assert_eq!(queue.len(), 4);
        assert_eq!(current_id(&queue).as_deref(), Some("c"));
    }

    #[test]
    fn test_play_track_on_empty_queue() {
        let mut queue = PlaybackQueue::new();
        let played = queue.play_track(track("a")).id.clone();
        assert_eq!(played, "a");
        assert!(queue.upcoming().is_empty());
    }

    #[test]
    fn test_add_to_queue_dedups() {
        let mut queue = queue_of(&["a"]);
        assert!(queue.add_to_queue(track("b")));
        assert!(!queue.add_to_queue(track("a")));
        assert!(!queue.add_to_queue(track("b")));
        assert_eq!(queue.len(), 2);
        assert_eq!(ids(queue.upcoming()), vec!["b"]);
    }

    #[test]
    fn test_remove_before_current_keeps_current() {
        let mut queue = queue_of(&["a", "b", "c", "d"]);
        queue.play_track(track("c"));
        assert!(queue.remove_from_queue("a"));
        assert_eq!(current_id(&queue).as_deref(), Some("c"));
        assert_eq!(ids(queue.upcoming()), vec!["d"]);

        assert!(queue.remove_from_queue("d"));
        assert_eq!(current_id(&queue).as_deref(), Some("c"));
        assert!(!queue.remove_from_queue("missing"));
    }

    #[test]
    fn test_remove_current_continues_with_following_track() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.play_track(track("b"));
        queue.remove_from_queue("b");
        assert_eq!(current_id(&queue).as_deref(), Some("a"));
        assert_eq!(queue.next().map(|t| t.id.clone()).as_deref(), Some("c"));
    }

    #[test]
    fn test_next_and_previous_bounds() {
        let mut queue = queue_of(&["a", "b"]);
        assert_eq!(current_id(&queue).as_deref(), Some("a"));
        assert!(queue.previous().is_none());
        assert_eq!(queue.next().map(|t| t.id.clone()).as_deref(), Some("b"));
        assert!(queue.next().is_none());
        assert_eq!(current_id(&queue).as_deref(), Some("b"));
        assert_eq!(queue.previous().map(|t| t.id.clone()).as_deref(), Some("a"));
    }

    #[test]
    fn test_repeat_modes() {
        let mut queue = queue_of(&["a", "b"]);
        queue.set_repeat_mode(RepeatMode::All);
        queue.next();
        assert_eq!(queue.next().map(|t| t.id.clone()).as_deref(), Some("a"));
        assert_eq!(queue.previous().map(|t| t.id.clone()).as_deref(), Some("b"));

        queue.set_repeat_mode(RepeatMode::One);
        assert_eq!(queue.next().map(|t| t.id.clone()).as_deref(), Some("b"));
        assert_eq!(queue.next().map(|t| t.id.clone()).as_deref(), Some("b"));
        // The next button still moves on
        assert_eq!(queue.skip_forward().map(|t| t.id.clone()).as_deref(), Some("a"));
    }

    #[test]
    fn test_shuffle_keeps_current_first() {
        let list: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = list.iter().map(String::as_str).collect();
        let mut queue = queue_of(&refs);
        queue.play_track(track("7"));

        queue.set_shuffle(true);
        assert_eq!(current_id(&queue).as_deref(), Some("7"));
        let upcoming = ids(queue.upcoming());
        assert_eq!(upcoming.len(), 19);
        assert!(!upcoming.contains(&"7".to_string()));

        queue.set_shuffle(false);
        assert_eq!(current_id(&queue).as_deref(), Some("7"));
        let expected: Vec<String> = (8..20).map(|i| i.to_string()).collect();
        assert_eq!(ids(queue.upcoming()), expected);
    }

    #[test]
    fn test_set_queue_starts_at_requested_track() {
        let mut queue = PlaybackQueue::new();
        let current = queue
            .set_queue(vec![track("a"), track("b"), track("a"), track("c")], Some("b"))
            .map(|t| t.id.clone());
        assert_eq!(current.as_deref(), Some("b"));
        assert_eq!(queue.len(), 3);
        assert_eq!(ids(queue.upcoming()), vec!["c"]);
    }

    #[test]
    fn test_clear() {
        let mut queue = queue_of(&["a", "b"]);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.current_track().is_none());
        assert!(queue.next().is_none());
    }
}
