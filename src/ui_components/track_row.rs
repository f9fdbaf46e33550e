use crate::models::{Playlist, Track};
use crate::ui_components::colors::*;
use eframe::egui;

/// What the user clicked on a track row
#[derive(Debug, Clone, PartialEq)]
pub enum TrackAction {
    Play,
    AddToQueue,
    ToggleLike,
    AddToPlaylist(usize), // Index into the playlists passed in
    Download,
    Details,
    Remove,
}

/// Which buttons a row shows; screens differ
#[derive(Default)]
pub struct RowOptions<'a> {
    pub is_current: bool,
    pub liked: Option<bool>,
    pub playlists: Option<&'a [Playlist]>,
    pub queue_button: bool,
    pub download_button: bool,
    pub details_button: bool,
    pub remove_button: bool,
    pub subtitle: Option<String>, // Replaces the duration column, e.g. "played at"
}

pub fn render_track_row(
    ui: &mut egui::Ui,
    track: &Track,
    index: usize,
    options: &RowOptions<'_>,
) -> Option<TrackAction> {
    let mut action = None;
    let fill = if options.is_current { BG_HOVER } else { egui::Color32::TRANSPARENT };

    egui::Frame::NONE
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let number_color = if options.is_current { ACCENT } else { TEXT_TERTIARY };
                ui.add_sized(
                    [28.0, 20.0],
                    egui::Label::new(egui::RichText::new(format!("{}", index + 1)).color(number_color)),
                );

                let title_color = if options.is_current { ACCENT } else { TEXT_PRIMARY };
                let info = ui
                    .vertical(|ui| {
                        ui.set_max_width((ui.available_width() - 260.0).max(120.0));
                        ui.add(
                            egui::Label::new(egui::RichText::new(&track.title).color(title_color).strong())
                                .truncate(),
                        );
                        ui.add(
                            egui::Label::new(egui::RichText::new(&track.artist).size(12.0).color(TEXT_SECONDARY))
                                .truncate(),
                        );
                    })
                    .response
                    .interact(egui::Sense::click());
                if info.clicked() {
                    action = Some(TrackAction::Play);
                }
                if info.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 6.0;

                    if options.remove_button && icon_button(ui, "✕", "Remove").clicked() {
                        action = Some(TrackAction::Remove);
                    }
                    if options.download_button && icon_button(ui, "⬇", "Download").clicked() {
                        action = Some(TrackAction::Download);
                    }
                    if options.details_button && icon_button(ui, "ℹ", "Video details").clicked() {
                        action = Some(TrackAction::Details);
                    }
                    if let Some(playlists) = options.playlists {
                        egui::ComboBox::from_id_salt(("add_to_playlist", index, &track.id))
                            .selected_text("＋♫")
                            .width(44.0)
                            .show_ui(ui, |ui| {
                                if playlists.is_empty() {
                                    ui.label(egui::RichText::new("No playlists yet").color(TEXT_TERTIARY));
                                }
                                for (i, playlist) in playlists.iter().enumerate() {
                                    if ui.selectable_label(false, &playlist.name).clicked() {
                                        action = Some(TrackAction::AddToPlaylist(i));
                                    }
                                }
                            })
                            .response
                            .on_hover_text("Add to playlist");
                    }
                    if let Some(liked) = options.liked {
                        let (icon, color) = if liked { ("♥", LIKED) } else { ("♡", TEXT_SECONDARY) };
                        let heart = ui.add(
                            egui::Button::new(egui::RichText::new(icon).color(color))
                                .fill(egui::Color32::TRANSPARENT),
                        );
                        if heart.clicked() {
                            action = Some(TrackAction::ToggleLike);
                        }
                    }
                    if options.queue_button && icon_button(ui, "+", "Add to queue").clicked() {
                        action = Some(TrackAction::AddToQueue);
                    }
                    if icon_button(ui, "▶", "Play").clicked() {
                        action = Some(TrackAction::Play);
                    }

                    let right_text = options.subtitle.clone().unwrap_or_else(|| track.duration.clone());
                    ui.label(egui::RichText::new(right_text).size(12.0).color(TEXT_TERTIARY));
                });
            });
        });

    action
}

fn icon_button(ui: &mut egui::Ui, icon: &str, hover: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(icon).color(TEXT_SECONDARY))
            .fill(egui::Color32::TRANSPARENT)
            .min_size(egui::vec2(26.0, 26.0)),
    )
    .on_hover_text(hover)
}

/// Section title used at the top of every screen
pub fn screen_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(title).size(24.0).strong().color(TEXT_PRIMARY));
    ui.add_space(12.0);
}

/// Centered muted message for empty or failed lists
pub fn empty_state(ui: &mut egui::Ui, message: &str) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(message).color(TEXT_SECONDARY));
    });
}

pub fn error_text(ui: &mut egui::Ui, message: &str) {
    ui.label(egui::RichText::new(message).color(ERROR));
}
