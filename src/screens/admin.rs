use crate::app::player_app::MusicPlayerApp;
use crate::ui_components::colors::*;
use crate::ui_components::track_row::{empty_state, error_text, screen_heading};
use crate::utils::formatting::format_date;
use eframe::egui;

/// Pending registrations awaiting approval
pub fn render_admin_view(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        screen_heading(ui, "Admin Panel");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!app.content.admin.loading, egui::Button::new("Refresh")).clicked() {
                app.fetch_pending_users();
            }
        });
    });

    let admin = &app.content.admin;
    if let Some(error) = &admin.error {
        error_text(ui, error);
        ui.add_space(8.0);
    }
    if admin.loading && admin.pending.is_empty() {
        ui.spinner();
        return;
    }
    if admin.loaded && admin.pending.is_empty() {
        empty_state(ui, "No pending users");
        return;
    }

    ui.label(egui::RichText::new(format!("Pending Users ({})", admin.pending.len())).color(TEXT_SECONDARY));
    ui.add_space(8.0);

    let mut decision = None;
    egui::ScrollArea::vertical()
        .id_salt("pending_users")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for user in &admin.pending {
                let busy = admin.busy.contains(&user.id);
                egui::Frame::NONE
                    .fill(BG_CARD)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&user.name).strong());
                                ui.label(egui::RichText::new(&user.email).size(12.0).color(TEXT_SECONDARY));
                                ui.label(
                                    egui::RichText::new(format!("Registered {}", format_date(&user.created_at)))
                                        .size(11.0)
                                        .color(TEXT_TERTIARY),
                                );
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if busy {
                                    ui.spinner();
                                    return;
                                }
                                if ui.button(egui::RichText::new("Reject").color(ERROR)).clicked() {
                                    decision = Some((user.id.clone(), false));
                                }
                                if ui.button(egui::RichText::new("Approve").color(SUCCESS)).clicked() {
                                    decision = Some((user.id.clone(), true));
                                }
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some((user_id, approve)) = decision {
        app.moderate_user(&user_id, approve);
    }
}
