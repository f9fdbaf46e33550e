use crate::api::ApiClient;
use crate::app_state::Preferences;
use crate::config::AppConfig;
use crate::constants::*;
use crate::models::Track;
use crate::services::session::is_authenticated;
use crate::services::Route;
use crate::state::{AudioState, AuthState, BackgroundTasks, ContentState, UIState};
use crate::utils::token_store::TokenStore;
use eframe::egui;
use log::{info, warn};
use std::time::Duration;

pub use crate::state::ui_state::MainTab;

pub struct MusicPlayerApp {
    pub config: AppConfig,
    pub api: ApiClient,
    pub token_store: TokenStore,

    // Audio state (controller, queue, current track, controls)
    pub audio: AudioState,

    // Auth state (session user, landing and pending forms)
    pub auth: AuthState,

    // UI state (navigation, toasts, artwork, lyrics panel)
    pub ui: UIState,

    // Content state (one struct per screen, lyrics)
    pub content: ContentState,

    // Background tasks (receivers for async operations)
    pub tasks: BackgroundTasks,
}

impl MusicPlayerApp {
    pub fn new(config: AppConfig, api: ApiClient) -> Self {
        let preferences = Preferences::load(&config.data_dir);
        info!(
            "[App] Preferences: volume {:.2}, muted {}, shuffle {}, {}",
            preferences.volume,
            preferences.muted,
            preferences.shuffle,
            preferences.repeat_mode.label()
        );

        let mut app = Self {
            token_store: TokenStore::new(&config.data_dir),
            config,
            api,
            audio: AudioState::new(&preferences),
            auth: AuthState::default(),
            ui: UIState::default(),
            content: ContentState::default(),
            tasks: BackgroundTasks::default(),
        };
        app.restore_session();
        app
    }

    /// Persist volume, mute, shuffle and repeat
    pub fn save_preferences(&self) {
        if let Err(e) = self.audio.to_preferences().save(&self.config.data_dir) {
            warn!("[App] Failed to save preferences: {}", e);
        }
    }

    /// Play `track`, queueing it after the current one if it is not queued yet
    pub fn play_track(&mut self, track: Track) {
        info!("[Play] play_track({}) '{}'", track.id, track.title);
        self.audio.playback_queue.play_track(track);
        self.start_current_track();
    }

    /// Replace the queue (playlist or list playback) and start at `start_id`
    pub fn play_list(&mut self, tracks: Vec<Track>, start_id: &str) {
        info!("[Play] Queueing {} tracks, starting at {}", tracks.len(), start_id);
        if self.audio.playback_queue.set_queue(tracks, Some(start_id)).is_some() {
            self.start_current_track();
        }
    }

    /// Resolve the stream for the queue's current track and start it
    fn start_current_track(&mut self) {
        let Some(track) = self.audio.playback_queue.current_track().cloned() else {
            warn!("[Play] Queue has no current track");
            return;
        };

        self.audio.is_playing = false;
        self.audio.loading_stream = true;
        self.audio.last_error = None;
        self.audio.current_track = Some(track.clone());
        self.ui.seek_preview = None;

        self.fetch_stream(&track);
        self.record_history(&track);
        self.fetch_lyrics(&track);
        self.fetch_artwork(&track);
    }

    /// Stream URL arrived: hand it to the audio thread
    pub(crate) fn start_stream(&mut self, stream_url: &str) {
        let Some(track) = self.audio.current_track.clone() else {
            return;
        };
        let url = self.api.media_url(stream_url);
        let hint = track.duration_secs().map(Duration::from_secs);
        info!("[Play] Playing: {} by {} (hint {:?})", track.title, track.artist, hint);

        self.audio
            .audio_controller
            .play(url, track.id.clone(), hint);
        self.audio.audio_controller.set_volume(self.audio.output_volume());
        self.audio.loading_stream = false;
        self.audio.is_playing = true;
    }

    /// Toggle play/pause
    pub fn toggle_playback(&mut self) {
        if self.audio.current_track.is_none() || self.audio.loading_stream {
            return;
        }

        if self.audio.is_playing {
            info!("[Toggle] Pausing playback");
            self.audio.audio_controller.pause();
            self.audio.is_playing = false;
        } else if self.audio.audio_controller.is_finished() {
            info!("[Toggle] Track finished, restarting from beginning");
            self.start_current_track();
        } else {
            info!("[Toggle] Resuming playback");
            self.audio.audio_controller.resume();
            self.audio.is_playing = true;
        }
    }

    pub fn stop_playback(&mut self) {
        info!("[Stop] Stopping playback");
        self.audio.audio_controller.stop();
        self.audio.is_playing = false;
        self.audio.loading_stream = false;
        self.audio.current_track = None;
        self.tasks.stream_rx = None;
        self.content.lyrics.reset();
        self.ui.artwork_texture = None;
        self.ui.artwork_track_id = None;
    }

    /// Next button. Moves on even under repeat-one.
    pub fn play_next(&mut self) {
        if self.audio.playback_queue.skip_forward().is_some() {
            self.start_current_track();
        } else {
            self.ui.toast_manager.show_info("End of queue");
        }
    }

    /// Previous button. Restarts the track when it is past the first seconds.
    pub fn play_previous(&mut self) {
        if self.position_secs() > RESTART_THRESHOLD_SECS {
            self.seek_to(0.0);
            return;
        }
        if self.audio.playback_queue.previous().is_some() {
            self.start_current_track();
        } else {
            self.seek_to(0.0);
        }
    }

    /// Auto-advance when the audio thread reports the end of the track
    fn on_track_finished(&mut self) {
        info!("[Play] Track finished, advancing");
        if self.audio.playback_queue.next().is_some() {
            self.start_current_track();
        } else {
            self.audio.is_playing = false;
        }
    }

    pub fn toggle_shuffle(&mut self) {
        let enabled = !self.audio.playback_queue.shuffle_enabled();
        self.audio.playback_queue.set_shuffle(enabled);
        self.save_preferences();
        self.ui
            .toast_manager
            .show_info(if enabled { "Shuffle on" } else { "Shuffle off" });
    }

    pub fn cycle_repeat_mode(&mut self) {
        let mode = self.audio.playback_queue.repeat_mode().cycle();
        self.audio.playback_queue.set_repeat_mode(mode);
        self.save_preferences();
        self.ui.toast_manager.show_info(mode.label());
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.audio.volume = volume.clamp(0.0, 1.0);
        if self.audio.volume > 0.0 {
            self.audio.muted = false;
        }
        self.audio.audio_controller.set_volume(self.audio.output_volume());
        self.save_preferences();
    }

    pub fn toggle_mute(&mut self) {
        self.audio.muted = !self.audio.muted;
        self.audio.audio_controller.set_volume(self.audio.output_volume());
        self.save_preferences();
    }

    pub fn seek_to(&mut self, seconds: f64) {
        let mut target = seconds.max(0.0);
        if let Some(duration) = self.duration_secs() {
            target = target.min(duration);
        }
        self.audio
            .audio_controller
            .seek(Duration::from_secs_f64(target));
    }

    pub fn position_secs(&self) -> f64 {
        self.audio.audio_controller.get_position().as_secs_f64()
    }

    /// Decoder duration, else the one parsed from the track's display string
    pub fn duration_secs(&self) -> Option<f64> {
        self.audio
            .audio_controller
            .get_duration()
            .map(|d| d.as_secs_f64())
            .or_else(|| {
                self.audio
                    .current_track
                    .as_ref()
                    .and_then(Track::duration_secs)
                    .map(|s| s as f64)
            })
            .filter(|d| *d > 0.0)
    }

    pub fn add_to_queue(&mut self, track: Track) {
        let title = track.title.clone();
        if self.audio.playback_queue.add_to_queue(track) {
            self.ui.toast_manager.show_success(format!("Added \"{}\" to queue", title));
        } else {
            self.ui.toast_manager.show_info("Already in queue");
        }
    }

    pub fn remove_from_queue(&mut self, track_id: &str) {
        if !self.audio.playback_queue.remove_from_queue(track_id) {
            return;
        }
        if self.audio.current_track_id() == Some(track_id) {
            self.stop_playback();
        }
    }

    pub fn is_liked(&self, track_id: &str) -> bool {
        self.content.liked.ids.contains(track_id)
    }

    /// Heart button on any track row
    pub fn toggle_like(&mut self, track: &Track) {
        let signed_in = self.api.has_token() && is_authenticated(self.auth.user.as_ref());
        let result = crate::services::toggle_like(track, &mut self.content.liked.ids, signed_in);
        if !result.success {
            self.ui.toast_manager.show_error(result.message);
            return;
        }
        self.send_like(track, result.is_liked);
        // The liked list is rebuilt from the server next time it is opened
        self.content.liked.loaded = false;
        if result.is_liked {
            self.ui.toast_manager.show_success(result.message);
        } else {
            self.ui.toast_manager.show_info(result.message);
        }
    }

    pub fn open_download(&mut self, track: &Track) {
        let url = self.api.download_url(track);
        info!("[Download] Opening {}", url);
        if let Err(e) = webbrowser::open(&url) {
            warn!("[Download] Failed to open browser: {}", e);
            self.ui.toast_manager.show_error("Could not open the browser");
        }
    }

    pub fn open_link(&mut self, url: &str) {
        if let Err(e) = webbrowser::open(url) {
            warn!("[App] Failed to open {}: {}", url, e);
            self.ui.toast_manager.show_error("Could not open the browser");
        }
    }

    /// Clear the session and everything loaded for it
    pub fn logout(&mut self) {
        info!("[Auth] Signing out");
        if let Err(e) = self.token_store.delete() {
            warn!("[Auth] Failed to delete stored session: {}", e);
        }
        self.api.set_token(None);

        self.stop_playback();
        self.audio.playback_queue.clear();
        self.audio.last_error = None;
        self.content.clear();
        self.tasks = BackgroundTasks::default();
        self.auth.clear_session();
        self.ui.selected_tab = MainTab::Player;
        self.ui.lyrics_expanded = false;
    }

    /// Handle keyboard shortcuts (all require Ctrl so text fields keep working)
    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (play_pause, next, previous, like, shuffle, repeat, vol_up, vol_down, seek_fwd, seek_back, mute) =
            ctx.input(|i| {
                let ctrl = i.modifiers.ctrl;
                let shift = i.modifiers.shift;
                (
                    ctrl && i.key_pressed(egui::Key::Space),
                    ctrl && shift && i.key_pressed(egui::Key::ArrowRight),
                    ctrl && shift && i.key_pressed(egui::Key::ArrowLeft),
                    ctrl && shift && i.key_pressed(egui::Key::L),
                    ctrl && shift && i.key_pressed(egui::Key::S),
                    ctrl && shift && i.key_pressed(egui::Key::R),
                    ctrl && i.key_pressed(egui::Key::ArrowUp),
                    ctrl && i.key_pressed(egui::Key::ArrowDown),
                    ctrl && !shift && i.key_pressed(egui::Key::ArrowRight),
                    ctrl && !shift && i.key_pressed(egui::Key::ArrowLeft),
                    ctrl && i.key_pressed(egui::Key::M),
                )
            });

        if play_pause {
            self.toggle_playback();
        }
        if next {
            self.play_next();
        }
        if previous {
            self.play_previous();
        }
        if like {
            self.handle_like_shortcut();
        }
        if shuffle {
            self.toggle_shuffle();
        }
        if repeat {
            self.cycle_repeat_mode();
        }
        if vol_up {
            self.set_volume(self.audio.volume + VOLUME_STEP);
        }
        if vol_down {
            self.set_volume(self.audio.volume - VOLUME_STEP);
        }
        if mute {
            self.toggle_mute();
        }
        if self.audio.current_track.is_some() {
            if seek_fwd {
                self.seek_to(self.position_secs() + SEEK_STEP_SECS);
            }
            if seek_back {
                self.seek_to(self.position_secs() - SEEK_STEP_SECS);
            }
        }
    }

    /// Ctrl+Shift+L: like the current track
    fn handle_like_shortcut(&mut self) {
        match self.audio.current_track.clone() {
            Some(track) => self.toggle_like(&track),
            None => warn!("[Like] No track currently playing"),
        }
    }

    /// Audio thread errors, end of track, lyric line sync
    fn check_playback(&mut self) {
        if let Some(err) = self.audio.audio_controller.take_error() {
            warn!("[Play] {}", err);
            self.audio.last_error = Some(err);
            self.audio.is_playing = false;
        }

        if self.audio.is_playing
            && !self.audio.loading_stream
            && !self.audio.audio_controller.is_loading()
            && self.audio.audio_controller.is_finished()
        {
            self.on_track_finished();
        }

        if self.audio.current_track.is_some() {
            let position = self.position_secs();
            self.content.lyrics.update_time(position);
        }
    }

    fn apply_visuals(ctx: &egui::Context) {
        use crate::ui_components::colors::*;
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(TEXT_PRIMARY);
        visuals.panel_fill = BG_MAIN;
        visuals.window_fill = BG_CARD;
        visuals.extreme_bg_color = BG_CARD;
        visuals.widgets.inactive.weak_bg_fill = BG_BUTTON;
        visuals.widgets.hovered.weak_bg_fill = BG_BUTTON_HOVER;
        visuals.selection.bg_fill = BG_BUTTON_HOVER;
        ctx.set_visuals(visuals);
    }
}

impl eframe::App for MusicPlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        Self::apply_visuals(ctx);

        if ctx.input(|i| i.viewport().close_requested()) && !self.ui.is_shutting_down {
            self.ui.is_shutting_down = true;
            info!("[App] Shutting down");
            self.audio.audio_controller.stop();
            self.save_preferences();
        }

        // Background results
        self.check_session_tasks();
        self.check_playback_tasks(ctx);
        self.check_content_tasks();
        self.check_actions();

        let route = self.auth.route();
        if route == Route::Main {
            self.check_playback();
            self.handle_keyboard_shortcuts(ctx);
        }

        match route {
            Route::Splash => crate::screens::splash::render_splash_screen(ctx),
            Route::Login { notice } => {
                crate::screens::login::render_login_screen(self, ctx, notice.as_deref())
            }
            Route::Pending => crate::screens::pending::render_pending_screen(self, ctx),
            Route::Main => crate::ui_components::layout::render_with_layout(self, ctx),
        }

        // Toasts on top of everything
        self.ui.toast_manager.render(ctx);

        if self.audio.is_playing
            || self.audio.loading_stream
            || self.tasks.any_pending()
            || !self.ui.toast_manager.is_empty()
        {
            ctx.request_repaint_after(Duration::from_millis(REPAINT_INTERVAL_ACTIVE_MILLIS));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::{app_for, approved_user, track};

    #[test]
    fn test_logout_clears_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for("http://127.0.0.1:9", dir.path());
        assert!(!app.auth.restoring);

        app.token_store.save("session-token").unwrap();
        app.api.set_token(Some("session-token".into()));
        app.auth.user = Some(approved_user());
        app.content.liked.ids.insert("t1".to_string());
        app.add_to_queue(track("t1"));
        app.add_to_queue(track("t2"));
        assert_eq!(app.audio.playback_queue.len(), 2);

        app.logout();

        assert!(app.token_store.load().is_none());
        assert!(!app.api.has_token());
        assert!(app.audio.playback_queue.is_empty());
        assert!(app.audio.current_track.is_none());
        assert!(app.auth.user.is_none());
        assert!(app.content.liked.ids.is_empty());
    }

    #[test]
    fn test_logout_without_session_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for("http://127.0.0.1:9", dir.path());

        app.logout();

        assert!(app.token_store.load().is_none());
        assert!(app.auth.user.is_none());
    }
}
