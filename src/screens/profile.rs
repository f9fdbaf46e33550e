use crate::app::player_app::MusicPlayerApp;
use crate::ui_components::colors::*;
use crate::ui_components::track_row::screen_heading;
use crate::utils::formatting::format_month_year;
use eframe::egui;

pub fn render_profile_view(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    screen_heading(ui, "Profile");
    let Some(user) = app.auth.user.clone() else {
        return;
    };

    let mut sign_out = false;
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width().min(520.0));
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(64.0, 64.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 32.0, BG_BUTTON_HOVER);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    user.initial(),
                    egui::FontId::proportional(28.0),
                    TEXT_PRIMARY,
                );
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&user.name).size(20.0).strong());
                    ui.label(egui::RichText::new(&user.email).color(TEXT_SECONDARY));
                    if user.is_admin() {
                        ui.label(egui::RichText::new("Admin").size(12.0).color(GOLD));
                    }
                });
            });
            ui.add_space(16.0);

            let role = if user.is_admin() { "Admin" } else { "User" };
            ui.label(egui::RichText::new(format!("Role: {}", role)).color(TEXT_SECONDARY));
            ui.label(egui::RichText::new(format!("Account status: {}", user.status.label())).color(TEXT_SECONDARY));
            if let Some(created) = user.created_at.as_deref() {
                ui.label(
                    egui::RichText::new(format!("Member since {}", format_month_year(created)))
                        .color(TEXT_SECONDARY),
                );
            }
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!(
                    "{} liked songs · {} playlists",
                    app.content.liked.ids.len(),
                    app.content.playlists.playlists.len()
                ))
                .color(TEXT_TERTIARY),
            );
            ui.add_space(16.0);

            if ui
                .add(egui::Button::new(egui::RichText::new("Sign Out").color(ERROR)).corner_radius(8.0))
                .clicked()
            {
                sign_out = true;
            }
        });

    if sign_out {
        app.logout();
    }
}
