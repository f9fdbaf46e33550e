use crate::app::player_app::MusicPlayerApp;
use crate::models::{SearchType, VideoDetails};
use crate::ui_components::colors::*;
use crate::ui_components::track_row::{empty_state, error_text, render_track_row, screen_heading, RowOptions, TrackAction};
use eframe::egui;

/// Player tab: search box, results and the video details card
pub fn render_search_view(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    if !app.content.playlists.loaded && !app.content.playlists.loading {
        app.fetch_playlists();
    }

    screen_heading(ui, "Search");
    render_search_bar(app, ui);
    ui.add_space(12.0);

    render_video_card(app, ui);

    let search = &app.content.search;
    if search.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Searching...").color(TEXT_SECONDARY));
        });
        return;
    }
    if let Some(message) = search.empty_message() {
        if search.error.is_some() {
            error_text(ui, message);
        } else {
            empty_state(ui, message);
        }
        return;
    }
    if search.results.is_empty() {
        empty_state(ui, "Search for songs, artists or videos");
        return;
    }

    let is_video = search.search_type == SearchType::Video;
    let current_id = app.audio.current_track_id().map(str::to_string);
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .id_salt("search_results")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, track) in app.content.search.results.iter().enumerate() {
                let options = RowOptions {
                    is_current: current_id.as_deref() == Some(track.id.as_str()),
                    liked: Some(app.content.liked.ids.contains(&track.id)),
                    playlists: Some(app.content.playlists.playlists.as_slice()),
                    queue_button: true,
                    download_button: !is_video,
                    details_button: is_video,
                    ..RowOptions::default()
                };
                if let Some(action) = render_track_row(ui, track, i, &options) {
                    clicked = Some((i, action));
                }
            }
        });

    if let Some((i, action)) = clicked {
        let Some(track) = app.content.search.results.get(i).cloned() else {
            return;
        };
        match action {
            TrackAction::Play => app.play_track(track),
            TrackAction::AddToQueue => app.add_to_queue(track),
            TrackAction::ToggleLike => app.toggle_like(&track),
            TrackAction::AddToPlaylist(p) => {
                if let Some(playlist) = app.content.playlists.playlists.get(p).cloned() {
                    app.add_to_playlist(&playlist, &track);
                }
            }
            TrackAction::Download => app.open_download(&track),
            TrackAction::Details => app.fetch_video_details(&track),
            TrackAction::Remove => {}
        }
    }
}

fn render_search_bar(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let mut submit = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.content.search.query)
                .hint_text("What do you want to listen to?")
                .desired_width((ui.available_width() - 240.0).max(200.0)),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        for kind in [SearchType::Music, SearchType::Video] {
            let label = match kind {
                SearchType::Music => "Music",
                SearchType::Video => "Video",
            };
            let selected = app.content.search.search_type == kind;
            if ui.selectable_label(selected, label).clicked() && !selected {
                app.content.search.search_type = kind;
                app.content.video.details = None;
                // Results belong to the previous mode
                submit = app.content.search.normalized_query().is_some();
            }
        }

        let searching = app.content.search.loading;
        if ui
            .add_enabled(!searching, egui::Button::new("Search").corner_radius(8.0))
            .clicked()
        {
            submit = true;
        }
    });

    if submit {
        app.search();
    }
}

fn render_video_card(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    if app.content.video.loading_id.is_some() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading video details...").color(TEXT_SECONDARY));
        });
        ui.add_space(8.0);
        return;
    }
    if let Some(error) = app.content.video.error.clone() {
        error_text(ui, &format!("Failed to load video details: {}", error));
        ui.add_space(8.0);
        return;
    }
    let Some(details) = app.content.video.details.clone() else {
        return;
    };

    let mut close = false;
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(10.0)
        .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&details.title).size(17.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        close = true;
                    }
                });
            });
            ui.label(egui::RichText::new(&details.channel_name).color(TEXT_SECONDARY));
            ui.add_space(6.0);
            ui.label(egui::RichText::new(stats_line(&details)).size(12.0).color(TEXT_TERTIARY));
            if let Some(description) = details.description.as_deref().filter(|d| !d.trim().is_empty()) {
                ui.add_space(8.0);
                egui::ScrollArea::vertical()
                    .id_salt("video_description")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(description).size(12.0).color(TEXT_SECONDARY));
                    });
            }
        });
    ui.add_space(12.0);

    if close {
        app.content.video.details = None;
    }
}

fn stats_line(details: &VideoDetails) -> String {
    let mut parts = Vec::new();
    if let Some(views) = &details.view_count {
        parts.push(format!("{} views", views));
    }
    if let Some(likes) = &details.like_count {
        parts.push(format!("{} likes", likes));
    }
    if let Some(subs) = &details.subscriber_count {
        parts.push(format!("{} subscribers", subs));
    }
    if let Some(date) = &details.upload_date {
        parts.push(date.clone());
    }
    if let Some(duration) = &details.duration {
        parts.push(duration.clone());
    }
    parts.join(" · ")
}
