use crate::app::player_app::MusicPlayerApp;
use crate::constants::{
    DEVELOPER_GITHUB_URL, DEVELOPER_UPI_ID, FEEDBACK_MESSAGE_MAX, FEEDBACK_NAME_MAX, SUPPORT_URL,
};
use crate::state::content_state::DeveloperTab;
use crate::ui_components::colors::*;
use crate::ui_components::track_row::{empty_state, screen_heading};
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::formatting::format_date;
use eframe::egui;
use std::time::{Duration, Instant};

const COPIED_FOR: Duration = Duration::from_secs(2);

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("GitHub", DEVELOPER_GITHUB_URL),
    ("LinkedIn", "https://www.linkedin.com/in/alok-mahapatra/"),
    ("X", "https://x.com/aloktwts"),
    ("Instagram", "https://www.instagram.com/alok.torrent/"),
];

/// About the developer, supporters and the feedback board
pub fn render_developer_view(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    egui::ScrollArea::vertical()
        .id_salt("developer")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            screen_heading(ui, "Meet the Developer");
            render_about(app, ui);
            ui.add_space(20.0);

            let mut selected = None;
            ui.horizontal(|ui| {
                for tab in DeveloperTab::ALL {
                    if ui
                        .selectable_label(app.content.developer.tab == tab, tab.label())
                        .clicked()
                    {
                        selected = Some(tab);
                    }
                }
            });
            if let Some(tab) = selected {
                if app.content.developer.select_tab(tab) {
                    app.fetch_developer_tab(tab);
                }
            }
            ui.add_space(12.0);

            match app.content.developer.tab {
                DeveloperTab::Supporters => render_supporters(app, ui),
                tab => {
                    render_feedback_form(app, ui, tab);
                    ui.add_space(16.0);
                    render_feedback_list(app, ui);
                }
            }
        });
}

fn render_about(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("Alok Mahapatra").size(18.0).strong());
    ui.label(
        egui::RichText::new("SoulMate is built and maintained by one developer. Thanks for listening!")
            .color(TEXT_SECONDARY),
    );
    ui.add_space(8.0);

    let mut open = None;
    ui.horizontal(|ui| {
        for (label, url) in SOCIAL_LINKS {
            if ui.link(label).clicked() {
                open = Some(url);
            }
        }
    });
    ui.add_space(12.0);

    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Support the project").strong().color(GOLD));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("☕ Buy me a coffee").clicked() {
                    open = Some(SUPPORT_URL);
                }
                ui.label(egui::RichText::new(format!("UPI: {}", DEVELOPER_UPI_ID)).color(TEXT_SECONDARY));

                let copied = app
                    .content
                    .developer
                    .copied_at
                    .is_some_and(|at| at.elapsed() < COPIED_FOR);
                let label = if copied { "Copied!" } else { "Copy" };
                if ui.button(label).clicked() && copy_to_clipboard(DEVELOPER_UPI_ID, "UPI ID") {
                    app.content.developer.copied_at = Some(Instant::now());
                }
                if copied {
                    ui.ctx().request_repaint_after(COPIED_FOR);
                }
            });
        });

    if let Some(url) = open {
        app.open_link(url);
    }
}

fn render_supporters(app: &MusicPlayerApp, ui: &mut egui::Ui) {
    let developer = &app.content.developer;
    if developer.loading {
        ui.spinner();
        return;
    }
    if developer.supporters.is_empty() {
        empty_state(ui, "No supporters yet. Be the first!");
        return;
    }
    for supporter in &developer.supporters {
        egui::Frame::NONE
            .fill(BG_CARD)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&supporter.name).strong());
                    if let Some(amount) = &supporter.amount {
                        ui.label(egui::RichText::new(amount).color(GOLD));
                    }
                });
                if let Some(message) = supporter.message.as_deref().filter(|m| !m.is_empty()) {
                    ui.label(egui::RichText::new(message).size(12.0).color(TEXT_SECONDARY));
                }
            });
        ui.add_space(6.0);
    }
}

fn render_feedback_form(app: &mut MusicPlayerApp, ui: &mut egui::Ui, tab: DeveloperTab) {
    let placeholder = match tab {
        DeveloperTab::Suggestions => "Share your feature idea...",
        _ => "Say thank you or share feedback...",
    };

    let mut submit = false;
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let developer = &mut app.content.developer;
            ui.add(
                egui::TextEdit::singleline(&mut developer.name)
                    .hint_text("Your name")
                    .char_limit(FEEDBACK_NAME_MAX)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::multiline(&mut developer.message)
                    .hint_text(placeholder)
                    .char_limit(FEEDBACK_MESSAGE_MAX)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}/{}",
                        developer.message.chars().count(),
                        FEEDBACK_MESSAGE_MAX
                    ))
                    .size(11.0)
                    .color(TEXT_TERTIARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let ready = developer.submission().is_some() && !developer.submitting;
                    let label = if developer.submitting { "Sending..." } else { "Send" };
                    if ui.add_enabled(ready, egui::Button::new(label)).clicked() {
                        submit = true;
                    }
                });
            });
        });

    if submit {
        app.submit_feedback();
    }
}

fn render_feedback_list(app: &MusicPlayerApp, ui: &mut egui::Ui) {
    let developer = &app.content.developer;
    if developer.loading {
        ui.spinner();
        return;
    }
    if developer.feedback.is_empty() {
        empty_state(ui, "Nothing here yet");
        return;
    }
    for item in &developer.feedback {
        egui::Frame::NONE
            .fill(BG_CARD)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&item.name).strong());
                    if !item.created_at.is_empty() {
                        ui.label(
                            egui::RichText::new(format_date(&item.created_at))
                                .size(11.0)
                                .color(TEXT_TERTIARY),
                        );
                    }
                });
                ui.label(egui::RichText::new(&item.message).color(TEXT_SECONDARY));
            });
        ui.add_space(6.0);
    }
}
