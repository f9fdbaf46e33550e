use crate::app::player_app::MusicPlayerApp;
use crate::models::Track;
use crate::ui_components::colors::*;
use crate::ui_components::track_row::{empty_state, error_text, render_track_row, screen_heading, RowOptions, TrackAction};
use eframe::egui;

enum PlaylistClick {
    Toggle(String),
    PlayAll(String),
    Edit(String),
    SaveEdit,
    CancelEdit,
    AskDelete(String),
    ConfirmDelete(String),
    CancelDelete,
    Track { playlist_id: String, index: usize, action: TrackAction },
}

pub fn render_playlists_view(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        screen_heading(ui, "Your Playlists");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if app.content.playlists.show_create { "Cancel" } else { "+ New Playlist" };
            if ui.button(label).clicked() {
                app.content.playlists.show_create = !app.content.playlists.show_create;
            }
        });
    });

    if app.content.playlists.show_create {
        render_create_form(app, ui);
        ui.add_space(12.0);
    }

    if app.content.playlists.editing.is_some() {
        render_edit_form(app, ui);
        ui.add_space(12.0);
    }

    let state = &app.content.playlists;
    if state.loading && state.playlists.is_empty() {
        ui.spinner();
        return;
    }
    if let Some(error) = &state.error {
        error_text(ui, error);
        return;
    }
    if state.loaded && state.playlists.is_empty() {
        empty_state(ui, "No playlists yet. Create one to get started.");
        return;
    }

    let current_id = app.audio.current_track_id().map(str::to_string);
    let mut click = None;

    egui::ScrollArea::vertical()
        .id_salt("playlists")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for playlist in &state.playlists {
                let expanded = state.expanded.as_deref() == Some(playlist.id.as_str());
                egui::Frame::NONE
                    .fill(BG_CARD)
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let arrow = if expanded { "▼" } else { "▶" };
                            let header = ui
                                .vertical(|ui| {
                                    ui.label(egui::RichText::new(format!("{} {}", arrow, playlist.name)).size(16.0).strong());
                                    let mut sub = playlist
                                        .track_count()
                                        .map(|n| format!("{} tracks", n))
                                        .unwrap_or_default();
                                    if let Some(description) = playlist.description.as_deref().filter(|d| !d.is_empty()) {
                                        if !sub.is_empty() {
                                            sub.push_str(" · ");
                                        }
                                        sub.push_str(description);
                                    }
                                    if !sub.is_empty() {
                                        ui.label(egui::RichText::new(sub).size(12.0).color(TEXT_SECONDARY));
                                    }
                                })
                                .response
                                .interact(egui::Sense::click());
                            if header.clicked() {
                                click = Some(PlaylistClick::Toggle(playlist.id.clone()));
                            }

                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if state.confirm_delete.as_deref() == Some(playlist.id.as_str()) {
                                    if ui.button("Cancel").clicked() {
                                        click = Some(PlaylistClick::CancelDelete);
                                    }
                                    if ui
                                        .button(egui::RichText::new("Delete").color(ERROR))
                                        .clicked()
                                    {
                                        click = Some(PlaylistClick::ConfirmDelete(playlist.id.clone()));
                                    }
                                    ui.label(egui::RichText::new("Delete this playlist?").color(TEXT_SECONDARY));
                                } else {
                                    if ui.button("🗑").on_hover_text("Delete playlist").clicked() {
                                        click = Some(PlaylistClick::AskDelete(playlist.id.clone()));
                                    }
                                    if ui.button("✏").on_hover_text("Edit playlist").clicked() {
                                        click = Some(PlaylistClick::Edit(playlist.id.clone()));
                                    }
                                    if ui.button("▶ Play").clicked() {
                                        click = Some(PlaylistClick::PlayAll(playlist.id.clone()));
                                    }
                                }
                            });
                        });

                        if expanded {
                            ui.add_space(8.0);
                            if state.tracks_loading.contains(&playlist.id) {
                                ui.spinner();
                            }
                            match state.tracks.get(&playlist.id) {
                                Some(tracks) if tracks.is_empty() => {
                                    ui.label(egui::RichText::new("This playlist is empty").color(TEXT_TERTIARY));
                                }
                                Some(tracks) => {
                                    for (i, saved) in tracks.iter().enumerate() {
                                        let track = saved.to_track();
                                        let options = RowOptions {
                                            is_current: current_id.as_deref() == Some(track.id.as_str()),
                                            liked: Some(app.content.liked.ids.contains(&track.id)),
                                            queue_button: true,
                                            download_button: true,
                                            remove_button: true,
                                            ..RowOptions::default()
                                        };
                                        if let Some(action) = render_track_row(ui, &track, i, &options) {
                                            click = Some(PlaylistClick::Track {
                                                playlist_id: playlist.id.clone(),
                                                index: i,
                                                action,
                                            });
                                        }
                                    }
                                }
                                None => {}
                            }
                        }
                    });
                ui.add_space(8.0);
            }
        });

    if let Some(click) = click {
        handle_click(app, click);
    }
}

fn playlist_tracks(app: &MusicPlayerApp, playlist_id: &str) -> Vec<Track> {
    app.content
        .playlists
        .tracks
        .get(playlist_id)
        .map(|tracks| tracks.iter().map(|t| t.to_track()).collect())
        .unwrap_or_default()
}

fn handle_click(app: &mut MusicPlayerApp, click: PlaylistClick) {
    match click {
        PlaylistClick::Toggle(id) => {
            if app.content.playlists.toggle_expanded(&id) {
                app.fetch_playlist_tracks(&id);
            }
        }
        PlaylistClick::PlayAll(id) => {
            let tracks = playlist_tracks(app, &id);
            match tracks.first().map(|t| t.id.clone()) {
                Some(first) => app.play_list(tracks, &first),
                None => {
                    // Load and expand first; play is available once tracks arrive
                    if app.content.playlists.expanded.as_deref() != Some(id.as_str())
                        && app.content.playlists.toggle_expanded(&id)
                    {
                        app.fetch_playlist_tracks(&id);
                    }
                    app.ui.toast_manager.show_info("Loading playlist...");
                }
            }
        }
        PlaylistClick::Edit(id) => {
            if let Some(playlist) = app.content.playlists.playlists.iter().find(|p| p.id == id).cloned() {
                app.content.playlists.start_editing(&playlist);
            }
        }
        PlaylistClick::SaveEdit => app.update_playlist(),
        PlaylistClick::CancelEdit => app.content.playlists.editing = None,
        PlaylistClick::AskDelete(id) => app.content.playlists.confirm_delete = Some(id),
        PlaylistClick::CancelDelete => app.content.playlists.confirm_delete = None,
        PlaylistClick::ConfirmDelete(id) => {
            app.content.playlists.confirm_delete = None;
            app.delete_playlist(&id);
        }
        PlaylistClick::Track { playlist_id, index, action } => {
            let tracks = playlist_tracks(app, &playlist_id);
            let Some(track) = tracks.get(index).cloned() else {
                return;
            };
            match action {
                TrackAction::Play => app.play_list(tracks, &track.id),
                TrackAction::AddToQueue => app.add_to_queue(track),
                TrackAction::ToggleLike => app.toggle_like(&track),
                TrackAction::Download => app.open_download(&track),
                TrackAction::Remove => app.remove_from_playlist(&playlist_id, &track.id),
                TrackAction::AddToPlaylist(_) | TrackAction::Details => {}
            }
        }
    }
}

fn render_create_form(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let mut submit = false;
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let name = ui.add(
                egui::TextEdit::singleline(&mut app.content.playlists.new_name)
                    .hint_text("Playlist name")
                    .desired_width(f32::INFINITY),
            );
            if name.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::singleline(&mut app.content.playlists.new_description)
                    .hint_text("Description (optional)")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            let creating = app.content.playlists.creating;
            let can_create = !creating && !app.content.playlists.new_name.trim().is_empty();
            let label = if creating { "Creating..." } else { "Create" };
            if ui.add_enabled(can_create, egui::Button::new(label)).clicked() {
                submit = true;
            }
        });

    if submit && !app.content.playlists.creating {
        app.create_playlist();
    }
}

fn render_edit_form(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let mut click = None;
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Edit Playlist").strong());
            ui.add_space(6.0);
            let playlists = &mut app.content.playlists;
            ui.add(
                egui::TextEdit::singleline(&mut playlists.edit_name)
                    .hint_text("Playlist name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::singleline(&mut playlists.edit_description)
                    .hint_text("Description (optional)")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let can_save = !playlists.edit_name.trim().is_empty();
                if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                    click = Some(PlaylistClick::SaveEdit);
                }
                if ui.button("Cancel").clicked() {
                    click = Some(PlaylistClick::CancelEdit);
                }
            });
        });

    if let Some(click) = click {
        handle_click(app, click);
    }
}
