use crate::app::player_app::{MainTab, MusicPlayerApp};
use crate::constants::{LYRICS_PANEL_WIDTH, PLAYER_BAR_HEIGHT, SIDEBAR_WIDTH};
use crate::ui_components::colors::*;
use eframe::egui;

/// Main layout: sidebar, content, lyrics panel and the player bar
pub fn render_with_layout(app: &mut MusicPlayerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("player_bar")
        .exact_height(PLAYER_BAR_HEIGHT)
        .frame(
            egui::Frame::NONE
                .fill(BG_CARD)
                .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT)),
        )
        .show(ctx, |ui| {
            crate::ui_components::player_bar::render_player_bar(app, ui);
        });

    egui::SidePanel::left("sidebar")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(BG_MAIN)
                .inner_margin(egui::Margin::symmetric(12, 12))
                .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT)),
        )
        .show(ctx, |ui| {
            render_sidebar(app, ui);
        });

    let has_track = app.audio.current_track.is_some();
    if !has_track {
        app.ui.lyrics_expanded = false;
    }

    if has_track && !app.ui.lyrics_expanded {
        egui::SidePanel::right("lyrics_panel")
            .exact_width(LYRICS_PANEL_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::NONE
                    .fill(BG_MAIN)
                    .inner_margin(egui::Margin::symmetric(12, 12))
                    .stroke(egui::Stroke::new(1.0, BORDER_DEFAULT)),
            )
            .show(ctx, |ui| {
                crate::ui_components::lyrics_panel::render_lyrics_panel(app, ui);
            });
    }

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(BG_MAIN)
                .inner_margin(egui::Margin::symmetric(24, 16)),
        )
        .show(ctx, |ui| {
            if app.ui.lyrics_expanded {
                crate::ui_components::lyrics_panel::render_lyrics_panel(app, ui);
                return;
            }
            render_selected_tab(app, ui);
        });
}

fn render_selected_tab(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    let is_admin = app.auth.user.as_ref().is_some_and(|u| u.is_admin());
    if app.ui.selected_tab == MainTab::Admin && !is_admin {
        app.ui.selected_tab = MainTab::Player;
    }

    match app.ui.selected_tab {
        MainTab::Player => crate::screens::search::render_search_view(app, ui),
        MainTab::Playlists => crate::screens::playlists::render_playlists_view(app, ui),
        MainTab::Liked => crate::screens::liked::render_liked_view(app, ui),
        MainTab::History => crate::screens::history::render_history_view(app, ui),
        MainTab::Friends => crate::screens::friends::render_friends_view(app, ui),
        MainTab::Developer => crate::screens::developer::render_developer_view(app, ui),
        MainTab::Profile => crate::screens::profile::render_profile_view(app, ui),
        MainTab::Admin => crate::screens::admin::render_admin_view(app, ui),
    }
}

/// Switch tabs and reload what the screen shows, as opening a page would
pub fn select_tab(app: &mut MusicPlayerApp, tab: MainTab) {
    log::debug!("[Nav] {:?}", tab);
    app.ui.selected_tab = tab;
    app.ui.lyrics_expanded = false;

    match tab {
        MainTab::Player => {
            if !app.content.playlists.loaded && !app.content.playlists.loading {
                app.fetch_playlists();
            }
        }
        MainTab::Playlists => app.fetch_playlists(),
        MainTab::Liked => app.fetch_liked(),
        MainTab::History => app.fetch_history(),
        MainTab::Friends => app.fetch_friends(),
        MainTab::Developer => {
            let tab = app.content.developer.tab;
            app.fetch_developer_tab(tab);
        }
        MainTab::Admin => app.fetch_pending_users(),
        MainTab::Profile => {}
    }
}

fn render_sidebar(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("SoulMate").size(22.0).strong().color(TEXT_PRIMARY));
    });
    ui.add_space(12.0);

    if let Some(user) = &app.auth.user {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 16.0, BG_BUTTON_HOVER);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                user.initial(),
                egui::FontId::proportional(15.0),
                TEXT_PRIMARY,
            );
            ui.vertical(|ui| {
                ui.add(egui::Label::new(egui::RichText::new(&user.name).strong()).truncate());
                ui.add(
                    egui::Label::new(egui::RichText::new(&user.email).size(11.0).color(TEXT_TERTIARY))
                        .truncate(),
                );
            });
        });
        ui.add_space(12.0);
    }

    let is_admin = app.auth.user.as_ref().is_some_and(|u| u.is_admin());
    let tabs = MainTab::NAV
        .into_iter()
        .chain(is_admin.then_some(MainTab::Admin));

    let mut clicked = None;
    for tab in tabs {
        let selected = app.ui.selected_tab == tab;
        let text_color = if selected { TEXT_PRIMARY } else { TEXT_SECONDARY };
        let fill = if selected { BG_HOVER } else { egui::Color32::TRANSPARENT };
        let button = egui::Button::new(egui::RichText::new(tab.label()).size(14.0).color(text_color))
            .fill(fill)
            .corner_radius(6.0)
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add(button).clicked() {
            clicked = Some(tab);
        }
    }
    if let Some(tab) = clicked {
        select_tab(app, tab);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    crate::screens::now_playing::render_now_playing_sidebar(app, ui);
}
