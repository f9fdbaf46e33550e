// Background requests: fetch_* launchers, mutation actions and the per-frame check_* pollers
use super::MusicPlayerApp;
use crate::constants::HISTORY_LIMIT;
use crate::models::{Playlist, PlaylistInput, Track, UserStatus};
use crate::services::session::{classify_login_error, LoginFailure};
use crate::state::background_tasks::{ActionOutcome, DeveloperData};
use crate::state::content_state::{DeveloperTab, SEARCH_FAILED};
use crate::utils::async_helper::{poll_task, spawn_and_send, spawn_fire_and_forget, spawn_task, AsyncTask};
use eframe::egui;
use log::{error, info, warn};
use std::sync::mpsc::TryRecvError;

pub const REGISTERED_NOTICE: &str =
    "Registration submitted! Your account is awaiting administrator approval.";
pub const APPROVED_NOTICE: &str = "Your account has been approved. Please sign in.";
pub const STILL_PENDING: &str = "Still awaiting approval. Please check back later.";

impl MusicPlayerApp {
    // ---------------------------------------------------------------
    // Session
    // ---------------------------------------------------------------

    /// Use the stored token, if any, to fetch the current user
    pub(crate) fn restore_session(&mut self) {
        match self.token_store.load() {
            Some(token) => {
                info!("[Auth] Stored session found, validating");
                self.api.set_token(Some(token));
                self.auth.restoring = true;
                self.fetch_me();
            }
            None => info!("[Auth] No stored session"),
        }
    }

    fn fetch_me(&mut self) {
        let api = self.api.clone();
        self.tasks.session_rx = Some(spawn_task(move || {
            Box::pin(async move { api.me().await.map_err(|e| e.to_string()) })
        }));
    }

    pub fn login(&mut self) {
        let email = self.auth.email.trim().to_string();
        let password = self.auth.password.clone();
        if email.is_empty() || password.is_empty() {
            self.auth.login_error = Some("Please enter your email and password.".to_string());
            return;
        }

        info!("[Auth] Logging in as {}", email);
        self.auth.submitting = true;
        self.auth.login_error = None;
        self.auth.notice = None;

        let api = self.api.clone();
        self.tasks.login_rx = Some(spawn_task(move || {
            Box::pin(async move {
                let outcome = api
                    .login(&email, &password)
                    .await
                    .map_err(|e| classify_login_error(&e));
                Ok::<_, String>(outcome)
            })
        }));
    }

    pub fn register(&mut self) {
        let email = self.auth.email.trim().to_string();
        let name = self.auth.name.trim().to_string();
        let password = self.auth.password.clone();
        if email.is_empty() || password.is_empty() || name.is_empty() {
            self.auth.login_error = Some("Please fill in all fields.".to_string());
            return;
        }

        info!("[Auth] Registering {}", email);
        self.auth.submitting = true;
        self.auth.login_error = None;

        let api = self.api.clone();
        self.tasks.register_rx = Some(spawn_task(move || {
            Box::pin(async move {
                api.register(&email, &password, &name)
                    .await
                    .map_err(|e| e.to_string())
            })
        }));
    }

    /// "Check again" on the pending screen
    pub fn check_account_status(&mut self) {
        let email = match &self.auth.user {
            Some(user) => user.email.clone(),
            None => self.auth.pending_email.clone(),
        };
        if email.is_empty() {
            return;
        }

        self.auth.checking_status = true;
        self.auth.status_message = None;
        let api = self.api.clone();
        self.tasks.status_rx = Some(spawn_task(move || {
            Box::pin(async move { api.check_status(&email).await.map_err(|e| e.to_string()) })
        }));
    }

    /// Called once a user is known (login or restored session)
    fn on_signed_in(&mut self) {
        let Some(user) = &self.auth.user else {
            return;
        };
        info!("[Auth] Signed in as {} ({})", user.email, user.status.label());
        let status = user.status;
        match status {
            // Heart buttons need the liked ids right away
            UserStatus::Approved => self.fetch_liked(),
            UserStatus::Rejected => {
                self.logout();
                self.auth.login_error = Some(crate::api::ApiError::AccountRejected.to_string());
            }
            UserStatus::Pending => {}
        }
    }

    pub(crate) fn check_session_tasks(&mut self) {
        if let Some(result) = poll_task(&mut self.tasks.session_rx) {
            self.auth.restoring = false;
            match result {
                Ok(user) => {
                    self.auth.user = Some(user);
                    self.auth.awaiting_approval = false;
                    self.on_signed_in();
                }
                Err(e) => {
                    warn!("[Auth] Stored session rejected: {}", e);
                    if let Err(e) = self.token_store.delete() {
                        warn!("[Auth] Failed to delete stored session: {}", e);
                    }
                    self.api.set_token(None);
                    self.auth.user = None;
                }
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.login_rx) {
            self.auth.submitting = false;
            match result {
                Ok(Ok(auth)) => {
                    if let Err(e) = self.token_store.save(&auth.token) {
                        error!("[Auth] Failed to persist session: {}", e);
                    }
                    self.api.set_token(Some(auth.token));
                    self.auth.password.clear();
                    self.auth.login_error = None;
                    self.auth.awaiting_approval = false;
                    self.auth.user = Some(auth.user);
                    self.on_signed_in();
                }
                Ok(Err(LoginFailure::Pending)) => {
                    let email = self.auth.email.trim().to_string();
                    self.auth.enter_pending(&email, "");
                }
                Ok(Err(LoginFailure::Message(message))) => {
                    self.auth.login_error = Some(message);
                }
                Err(e) => {
                    error!("[Auth] Login task failed: {}", e);
                    self.auth.login_error = Some(crate::services::session::LOGIN_FAILED.to_string());
                }
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.register_rx) {
            self.auth.submitting = false;
            match result {
                Ok(()) => {
                    let email = self.auth.email.trim().to_string();
                    let name = self.auth.name.trim().to_string();
                    self.auth.register_mode = false;
                    self.auth.enter_pending(&email, &name);
                    self.auth.status_message = Some(REGISTERED_NOTICE.to_string());
                }
                Err(e) => self.auth.login_error = Some(e),
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.status_rx) {
            self.auth.checking_status = false;
            match result {
                Ok(status) => match status.status {
                    UserStatus::Approved if self.api.has_token() => self.fetch_me(),
                    UserStatus::Approved => {
                        self.auth.awaiting_approval = false;
                        self.auth.notice = Some(APPROVED_NOTICE.to_string());
                    }
                    UserStatus::Rejected => {
                        self.logout();
                        self.auth.login_error =
                            Some(crate::api::ApiError::AccountRejected.to_string());
                    }
                    UserStatus::Pending => {
                        self.auth.status_message = Some(STILL_PENDING.to_string());
                    }
                },
                Err(e) => self.auth.status_message = Some(e),
            }
        }
    }

    // ---------------------------------------------------------------
    // Playback
    // ---------------------------------------------------------------

    pub(crate) fn fetch_stream(&mut self, track: &Track) {
        let api = self.api.clone();
        let track_id = track.id.clone();
        // Replacing the slot drops any stream still resolving for the previous track
        self.tasks.stream_rx = Some(spawn_task(move || {
            Box::pin(async move { api.stream_info(&track_id).await.map_err(|e| e.to_string()) })
        }));
    }

    pub(crate) fn record_history(&self, track: &Track) {
        if !self.api.has_token() {
            return;
        }
        let api = self.api.clone();
        let track = track.clone();
        spawn_fire_and_forget("History", move || {
            Box::pin(async move {
                api.add_to_history(&track).await.map_err(|e| e.to_string())?;
                log::debug!("[History] Recorded {}", track.id);
                Ok::<(), String>(())
            })
        });
    }

    pub(crate) fn fetch_lyrics(&mut self, track: &Track) {
        if !self.content.lyrics.begin(&track.id) {
            return;
        }
        let api = self.api.clone();
        let track = track.clone();
        self.tasks.lyrics_rx = Some(spawn_task(move || {
            Box::pin(async move {
                let result = api
                    .lyrics(&track.title, &track.artist, None)
                    .await
                    .map_err(|e| e.to_string());
                Ok::<_, String>((track.id, result))
            })
        }));
    }

    pub(crate) fn fetch_artwork(&mut self, track: &Track) {
        if self.ui.artwork_track_id.as_deref() == Some(track.id.as_str()) {
            return;
        }
        self.ui.artwork_texture = None;
        self.ui.artwork_track_id = Some(track.id.clone());
        self.tasks.artwork_rx = track
            .artwork_url()
            .map(|url| crate::utils::artwork::fetch_artwork(track.id.clone(), url.to_string()));
    }

    pub fn fetch_video_details(&mut self, track: &Track) {
        self.content.video.loading_id = Some(track.id.clone());
        self.content.video.error = None;
        let api = self.api.clone();
        let track_id = track.id.clone();
        self.tasks.video_rx = Some(spawn_task(move || {
            Box::pin(async move { api.video_details(&track_id).await.map_err(|e| e.to_string()) })
        }));
    }

    pub(crate) fn check_playback_tasks(&mut self, ctx: &egui::Context) {
        if let Some(result) = poll_task(&mut self.tasks.stream_rx) {
            match result {
                Ok(info) => {
                    log::debug!("[Play] Stream resolved ({}, {} bps)", info.mime_type, info.bitrate);
                    self.start_stream(&info.url);
                }
                Err(e) => {
                    warn!("[Play] Failed to resolve stream: {}", e);
                    self.audio.loading_stream = false;
                    self.audio.is_playing = false;
                    self.audio.last_error = Some(format!("Failed to load stream: {}", e));
                }
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.lyrics_rx) {
            match result {
                Ok((track_id, lyrics)) => {
                    if !self.content.lyrics.apply(&track_id, lyrics) {
                        log::debug!("[Lyrics] Dropped stale lyrics for {}", track_id);
                    }
                }
                Err(e) => warn!("[Lyrics] Task failed: {}", e),
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.artwork_rx) {
            match result {
                Ok((track_id, image)) => {
                    if self.ui.artwork_track_id.as_deref() == Some(track_id.as_str()) {
                        self.ui.artwork_texture =
                            Some(ctx.load_texture("artwork", image, egui::TextureOptions::LINEAR));
                    }
                }
                Err(e) => log::debug!("[Artwork] {}", e),
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.video_rx) {
            self.content.video.loading_id = None;
            match result {
                Ok(details) => self.content.video.details = Some(details),
                Err(e) => self.content.video.error = Some(e),
            }
        }
    }

    // ---------------------------------------------------------------
    // Screen content
    // ---------------------------------------------------------------

    pub fn search(&mut self) {
        let Some(query) = self.content.search.normalized_query() else {
            return;
        };
        let search_type = self.content.search.search_type;
        self.content.search.loading = true;
        self.content.search.error = None;

        let api = self.api.clone();
        self.tasks.search_rx = Some(spawn_task(move || {
            Box::pin(async move { api.search(&query, search_type).await.map_err(|e| e.to_string()) })
        }));
    }

    pub fn fetch_playlists(&mut self) {
        self.content.playlists.loading = true;
        let api = self.api.clone();
        self.tasks.playlists_rx = Some(spawn_task(move || {
            Box::pin(async move { api.playlists().await.map_err(|e| e.to_string()) })
        }));
    }

    pub fn fetch_playlist_tracks(&mut self, playlist_id: &str) {
        self.content
            .playlists
            .tracks_loading
            .insert(playlist_id.to_string());
        let api = self.api.clone();
        let playlist_id = playlist_id.to_string();
        self.tasks.playlist_tracks_rx.push(spawn_task(move || {
            Box::pin(async move {
                let tracks = api.playlist_tracks(&playlist_id).await.map_err(|e| e.to_string());
                Ok::<_, String>((playlist_id, tracks))
            })
        }));
    }

    pub fn fetch_liked(&mut self) {
        self.content.liked.loading = true;
        let api = self.api.clone();
        self.tasks.liked_rx = Some(spawn_task(move || {
            Box::pin(async move { api.liked_songs().await.map_err(|e| e.to_string()) })
        }));
    }

    pub fn fetch_history(&mut self) {
        self.content.history.loading = true;
        let api = self.api.clone();
        self.tasks.history_rx = Some(spawn_task(move || {
            Box::pin(async move { api.history(Some(HISTORY_LIMIT)).await.map_err(|e| e.to_string()) })
        }));
    }

    pub fn fetch_friends(&mut self) {
        self.content.friends.loading = true;
        let api = self.api.clone();
        self.tasks.friends_rx = Some(spawn_task(move || {
            Box::pin(async move {
                let friends = api.friends().await.map_err(|e| e.to_string())?;
                let requests = api.friend_requests().await.map_err(|e| e.to_string())?;
                Ok::<_, String>((friends, requests))
            })
        }));
    }

    pub fn search_users(&mut self) {
        let query = self.content.friends.search_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.content.friends.searching = true;
        let api = self.api.clone();
        self.tasks.user_search_rx = Some(spawn_task(move || {
            Box::pin(async move { api.search_users(&query).await.map_err(|e| e.to_string()) })
        }));
    }

    pub fn fetch_developer_tab(&mut self, tab: DeveloperTab) {
        self.content.developer.loading = true;
        let api = self.api.clone();
        self.tasks.developer_rx = Some(spawn_task(move || {
            Box::pin(async move {
                let data = match tab.feedback_kind() {
                    None => DeveloperData::Supporters(api.supporters().await.map_err(|e| e.to_string())?),
                    Some(kind) => DeveloperData::Feedback(api.feedback(kind).await.map_err(|e| e.to_string())?),
                };
                Ok::<_, String>((tab, data))
            })
        }));
    }

    pub fn fetch_pending_users(&mut self) {
        self.content.admin.loading = true;
        self.content.admin.error = None;
        let api = self.api.clone();
        self.tasks.pending_users_rx = Some(spawn_task(move || {
            Box::pin(async move { api.pending_users().await.map_err(|e| e.to_string()) })
        }));
    }

    pub(crate) fn check_content_tasks(&mut self) {
        if let Some(result) = poll_task(&mut self.tasks.search_rx) {
            let search = &mut self.content.search;
            search.loading = false;
            search.searched = true;
            match result {
                Ok(tracks) => search.results = tracks,
                Err(e) => {
                    warn!("[Search] Failed: {}", e);
                    search.results.clear();
                    search.error = Some(SEARCH_FAILED.to_string());
                }
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.playlists_rx) {
            let playlists = &mut self.content.playlists;
            playlists.loading = false;
            playlists.loaded = true;
            match result {
                Ok(list) => {
                    playlists.playlists = list;
                    playlists.error = None;
                }
                Err(e) => {
                    warn!("[Playlists] Failed to load: {}", e);
                    playlists.error = Some(e);
                }
            }
        }

        // Several playlists may be loading at once
        let mut still_loading = Vec::new();
        for rx in std::mem::take(&mut self.tasks.playlist_tracks_rx) {
            match rx.try_recv() {
                Ok(Ok((playlist_id, result))) => {
                    self.content.playlists.tracks_loading.remove(&playlist_id);
                    match result {
                        Ok(tracks) => {
                            self.content.playlists.tracks.insert(playlist_id, tracks);
                        }
                        Err(e) => {
                            warn!("[Playlists] Failed to load tracks for {}: {}", playlist_id, e);
                            self.ui.toast_manager.show_error("Failed to load playlist tracks");
                        }
                    }
                }
                Ok(Err(e)) => warn!("[Playlists] Track task failed: {}", e),
                Err(TryRecvError::Empty) => still_loading.push(rx),
                Err(TryRecvError::Disconnected) => {}
            }
        }
        self.tasks.playlist_tracks_rx = still_loading;

        if let Some(result) = poll_task(&mut self.tasks.liked_rx) {
            self.content.liked.loading = false;
            match result {
                Ok(songs) => {
                    self.content.liked.replace(songs);
                    self.content.liked.error = None;
                }
                Err(e) => {
                    warn!("[Liked] Failed to load: {}", e);
                    self.content.liked.error = Some(e);
                    self.content.liked.loaded = true;
                }
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.history_rx) {
            let history = &mut self.content.history;
            history.loading = false;
            history.loaded = true;
            match result {
                Ok(entries) => {
                    history.entries = entries;
                    history.error = None;
                }
                Err(e) => history.error = Some(e),
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.friends_rx) {
            let friends = &mut self.content.friends;
            friends.loading = false;
            friends.loaded = true;
            match result {
                Ok((list, requests)) => {
                    friends.friends = list;
                    friends.requests = requests;
                }
                Err(e) => {
                    warn!("[Friends] Failed to load: {}", e);
                    self.ui.toast_manager.show_error("Failed to load friends");
                }
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.user_search_rx) {
            self.content.friends.searching = false;
            match result {
                Ok(users) => self.content.friends.search_results = users,
                Err(e) => {
                    warn!("[Friends] User search failed: {}", e);
                    self.content.friends.search_results.clear();
                }
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.developer_rx) {
            let developer = &mut self.content.developer;
            developer.loading = false;
            match result {
                Ok((tab, data)) => {
                    developer.loaded_tab = Some(tab);
                    match data {
                        DeveloperData::Supporters(list) => developer.supporters = list,
                        DeveloperData::Feedback(list) => developer.feedback = list,
                    }
                }
                Err(e) => warn!("[Developer] Failed to load data: {}", e),
            }
        }

        if let Some(result) = poll_task(&mut self.tasks.pending_users_rx) {
            let admin = &mut self.content.admin;
            admin.loading = false;
            admin.loaded = true;
            match result {
                Ok(users) => admin.pending = users,
                Err(e) => {
                    warn!("[Admin] Failed to load pending users: {}", e);
                    admin.error = Some("Failed to load pending users".to_string());
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------

    fn spawn_action<F>(&mut self, task_factory: F)
    where
        F: FnOnce() -> AsyncTask<ActionOutcome> + Send + 'static,
    {
        self.tasks.actions_in_flight += 1;
        spawn_and_send(task_factory, self.tasks.action_tx.clone());
    }

    pub fn create_playlist(&mut self) {
        let name = self.content.playlists.new_name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let description = self.content.playlists.new_description.trim().to_string();
        self.content.playlists.creating = true;

        let api = self.api.clone();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api
                    .create_playlist(&name, Some(description.as_str()))
                    .await
                    .map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::PlaylistCreated(result))
            })
        });
    }

    /// Save the inline edit form
    pub fn update_playlist(&mut self) {
        let playlists = &self.content.playlists;
        let Some(playlist_id) = playlists.editing.clone() else {
            return;
        };
        let name = playlists.edit_name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let input = PlaylistInput {
            name: Some(name),
            description: Some(playlists.edit_description.trim().to_string()),
            is_public: None,
        };

        let api = self.api.clone();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api
                    .update_playlist(&playlist_id, &input)
                    .await
                    .map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::PlaylistUpdated(result))
            })
        });
    }

    pub fn delete_playlist(&mut self, playlist_id: &str) {
        let api = self.api.clone();
        let playlist_id = playlist_id.to_string();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api.delete_playlist(&playlist_id).await.map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::PlaylistDeleted { playlist_id, result })
            })
        });
    }

    pub fn remove_from_playlist(&mut self, playlist_id: &str, track_id: &str) {
        let api = self.api.clone();
        let playlist_id = playlist_id.to_string();
        let track_id = track_id.to_string();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api
                    .remove_track_from_playlist(&playlist_id, &track_id)
                    .await
                    .map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::PlaylistTrackRemoved { playlist_id, result })
            })
        });
    }

    pub fn add_to_playlist(&mut self, playlist: &Playlist, track: &Track) {
        let api = self.api.clone();
        let playlist_id = playlist.id.clone();
        let playlist_name = playlist.name.clone();
        let track = track.clone();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api
                    .add_track_to_playlist(&playlist_id, &track)
                    .await
                    .map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::AddedToPlaylist {
                    playlist_id,
                    playlist_name,
                    result,
                })
            })
        });
    }

    /// Send a heart toggle already applied to `content.liked.ids`
    pub(crate) fn send_like(&mut self, track: &Track, liked: bool) {
        let api = self.api.clone();
        let track = track.clone();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = if liked {
                    api.like_track(&track).await
                } else {
                    api.unlike_track(&track.id).await
                }
                .map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::LikeToggled {
                    track_id: track.id,
                    liked,
                    result,
                })
            })
        });
    }

    /// Unlike from the liked list; the row goes away once the server agrees
    pub fn unlike_song(&mut self, track_id: &str) {
        let api = self.api.clone();
        let track_id = track_id.to_string();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api.unlike_track(&track_id).await.map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::Unliked { track_id, result })
            })
        });
    }

    pub fn moderate_user(&mut self, user_id: &str, approve: bool) {
        self.content.admin.busy.insert(user_id.to_string());
        self.content.admin.error = None;
        let api = self.api.clone();
        let user_id = user_id.to_string();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = if approve {
                    api.approve_user(&user_id).await
                } else {
                    api.reject_user(&user_id).await
                }
                .map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::UserModerated {
                    user_id,
                    approved: approve,
                    result,
                })
            })
        });
    }

    pub fn send_friend_request(&mut self, receiver_id: &str) {
        let api = self.api.clone();
        let receiver_id = receiver_id.to_string();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api
                    .send_friend_request(&receiver_id)
                    .await
                    .map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::Friends {
                    success_message: "Friend request sent!",
                    result,
                })
            })
        });
    }

    pub fn respond_to_friend_request(&mut self, request_id: &str, accept: bool) {
        let api = self.api.clone();
        let request_id = request_id.to_string();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = if accept {
                    api.accept_friend_request(&request_id).await
                } else {
                    api.reject_friend_request(&request_id).await
                }
                .map_err(|e| e.to_string());
                let success_message = if accept {
                    "Friend request accepted"
                } else {
                    "Friend request rejected"
                };
                Ok::<_, String>(ActionOutcome::Friends {
                    success_message,
                    result,
                })
            })
        });
    }

    pub fn remove_friend(&mut self, friend_id: &str) {
        let api = self.api.clone();
        let friend_id = friend_id.to_string();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api.remove_friend(&friend_id).await.map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::Friends {
                    success_message: "Friend removed",
                    result,
                })
            })
        });
    }

    pub fn submit_feedback(&mut self) {
        let Some(feedback) = self.content.developer.submission() else {
            return;
        };
        self.content.developer.submitting = true;
        let api = self.api.clone();
        self.spawn_action(move || {
            Box::pin(async move {
                let result = api.submit_feedback(&feedback).await.map_err(|e| e.to_string());
                Ok::<_, String>(ActionOutcome::FeedbackSubmitted(result))
            })
        });
    }

    pub(crate) fn check_actions(&mut self) {
        while let Ok(outcome) = self.tasks.action_rx.try_recv() {
            self.tasks.actions_in_flight = self.tasks.actions_in_flight.saturating_sub(1);
            match outcome {
                Ok(outcome) => self.apply_action(outcome),
                Err(e) => {
                    error!("[Action] Task failed: {}", e);
                    self.ui.toast_manager.show_error("Something went wrong");
                }
            }
        }
    }

    fn apply_action(&mut self, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::PlaylistCreated(result) => {
                let playlists = &mut self.content.playlists;
                playlists.creating = false;
                match result {
                    Ok(playlist) => {
                        info!("[Playlists] Created '{}'", playlist.name);
                        playlists.new_name.clear();
                        playlists.new_description.clear();
                        playlists.show_create = false;
                        self.ui.toast_manager.show_success("Playlist created");
                        self.fetch_playlists();
                    }
                    Err(e) => self.ui.toast_manager.show_error(e),
                }
            }
            ActionOutcome::PlaylistUpdated(result) => match result {
                Ok(playlist) => {
                    info!("[Playlists] Updated '{}'", playlist.name);
                    self.content.playlists.apply_update(playlist);
                    self.ui.toast_manager.show_success("Playlist updated");
                }
                Err(e) => self.ui.toast_manager.show_error(e),
            },
            ActionOutcome::PlaylistDeleted { playlist_id, result } => match result {
                Ok(()) => {
                    self.content.playlists.remove_playlist(&playlist_id);
                    self.ui.toast_manager.show_info("Playlist deleted");
                }
                Err(e) => self.ui.toast_manager.show_error(e),
            },
            ActionOutcome::PlaylistTrackRemoved { playlist_id, result } => match result {
                Ok(()) => self.fetch_playlist_tracks(&playlist_id),
                Err(e) => self.ui.toast_manager.show_error(e),
            },
            ActionOutcome::AddedToPlaylist {
                playlist_id,
                playlist_name,
                result,
            } => match result {
                Ok(()) => {
                    // Cached tracks for that playlist are now stale
                    self.content.playlists.tracks.remove(&playlist_id);
                    self.ui
                        .toast_manager
                        .show_success(format!("Added to {}", playlist_name));
                }
                Err(e) => self.ui.toast_manager.show_error(e),
            },
            ActionOutcome::LikeToggled {
                track_id,
                liked,
                result,
            } => match result {
                Ok(()) => info!("[Like] Saved liked={} for {}", liked, track_id),
                Err(e) => {
                    warn!("[Like] Failed to update {}: {}", track_id, e);
                    let ids = &mut self.content.liked.ids;
                    crate::services::social::rollback_like(ids, &track_id, liked);
                    self.ui.toast_manager.show_error(e);
                }
            },
            ActionOutcome::Unliked { track_id, result } => match result {
                Ok(()) => {
                    self.content.liked.remove(&track_id);
                    self.ui
                        .toast_manager
                        .show_info(crate::services::social::UNLIKED_MESSAGE);
                }
                Err(e) => {
                    warn!("[Liked] Failed to unlike {}: {}", track_id, e);
                    self.ui.toast_manager.show_error(e);
                }
            },
            ActionOutcome::UserModerated {
                user_id,
                approved,
                result,
            } => {
                let admin = &mut self.content.admin;
                admin.busy.remove(&user_id);
                match result {
                    Ok(()) => admin.pending.retain(|u| u.id != user_id),
                    Err(e) => {
                        warn!("[Admin] Moderation failed for {}: {}", user_id, e);
                        admin.error = Some(if approved {
                            "Failed to approve user".to_string()
                        } else {
                            "Failed to reject user".to_string()
                        });
                    }
                }
            }
            ActionOutcome::Friends {
                success_message,
                result,
            } => {
                match result {
                    Ok(()) => self.ui.toast_manager.show_success(success_message),
                    Err(e) => self.ui.toast_manager.show_error(e),
                }
                self.fetch_friends();
            }
            ActionOutcome::FeedbackSubmitted(result) => {
                self.content.developer.submitting = false;
                match result {
                    Ok(()) => {
                        self.content.developer.name.clear();
                        self.content.developer.message.clear();
                        self.ui.toast_manager.show_success("Thanks for the feedback!");
                        let tab = self.content.developer.tab;
                        self.fetch_developer_tab(tab);
                    }
                    Err(e) => self.ui.toast_manager.show_error(e),
                }
            }
        }
    }
}
