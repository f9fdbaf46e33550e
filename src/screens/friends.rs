use crate::app::player_app::MusicPlayerApp;
use crate::models::Friend;
use crate::ui_components::colors::*;
use crate::ui_components::track_row::{empty_state, screen_heading};
use eframe::egui;

enum FriendClick {
    Search,
    SendRequest(String),
    Respond { request_id: String, accept: bool },
    AskRemove(String),
    ConfirmRemove(String),
    CancelRemove,
}

pub fn render_friends_view(app: &mut MusicPlayerApp, ui: &mut egui::Ui) {
    screen_heading(ui, "Friends");
    let mut click = None;

    egui::ScrollArea::vertical()
        .id_salt("friends")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_user_search(app, ui, &mut click);
            ui.add_space(16.0);

            let state = &app.content.friends;
            if state.loading && !state.loaded {
                ui.spinner();
                return;
            }

            if !state.requests.received.is_empty() {
                section_title(ui, &format!("Friend Requests ({})", state.requests.received.len()));
                for request in &state.requests.received {
                    person_card(ui, &request.sender, |ui| {
                        if ui.button(egui::RichText::new("Reject").color(ERROR)).clicked() {
                            click = Some(FriendClick::Respond {
                                request_id: request.id.clone(),
                                accept: false,
                            });
                        }
                        if ui.button(egui::RichText::new("Accept").color(SUCCESS)).clicked() {
                            click = Some(FriendClick::Respond {
                                request_id: request.id.clone(),
                                accept: true,
                            });
                        }
                    });
                }
                ui.add_space(12.0);
            }

            if !state.requests.sent.is_empty() {
                section_title(ui, "Sent Requests");
                for request in &state.requests.sent {
                    if let Some(receiver) = &request.receiver {
                        person_card(ui, receiver, |ui| {
                            ui.label(egui::RichText::new("Pending").color(TEXT_TERTIARY));
                        });
                    }
                }
                ui.add_space(12.0);
            }

            section_title(ui, &format!("Your Friends ({})", state.friends.len()));
            if state.friends.is_empty() {
                empty_state(ui, "No friends yet. Search for people to connect with.");
            }
            for friend in &state.friends {
                let confirming = state.confirm_remove.as_deref() == Some(friend.id.as_str());
                person_card(ui, friend, |ui| {
                    if confirming {
                        if ui.button("Cancel").clicked() {
                            click = Some(FriendClick::CancelRemove);
                        }
                        if ui.button(egui::RichText::new("Remove").color(ERROR)).clicked() {
                            click = Some(FriendClick::ConfirmRemove(friend.id.clone()));
                        }
                    } else if ui.button("Remove").clicked() {
                        click = Some(FriendClick::AskRemove(friend.id.clone()));
                    }
                });
            }
        });

    let Some(click) = click else {
        return;
    };
    match click {
        FriendClick::Search => app.search_users(),
        FriendClick::SendRequest(user_id) => app.send_friend_request(&user_id),
        FriendClick::Respond { request_id, accept } => app.respond_to_friend_request(&request_id, accept),
        FriendClick::AskRemove(id) => app.content.friends.confirm_remove = Some(id),
        FriendClick::CancelRemove => app.content.friends.confirm_remove = None,
        FriendClick::ConfirmRemove(id) => {
            app.content.friends.confirm_remove = None;
            app.remove_friend(&id);
        }
    }
}

fn render_user_search(app: &mut MusicPlayerApp, ui: &mut egui::Ui, click: &mut Option<FriendClick>) {
    section_title(ui, "Find People");
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.content.friends.search_query)
                .hint_text("Search by name or email")
                .desired_width((ui.available_width() - 100.0).max(160.0)),
        );
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Search").clicked() || entered {
            *click = Some(FriendClick::Search);
        }
    });

    let state = &app.content.friends;
    if state.searching {
        ui.spinner();
        return;
    }

    let my_id = app.auth.user.as_ref().map(|u| u.id.as_str());
    for user in &state.search_results {
        if Some(user.id.as_str()) == my_id {
            continue;
        }
        let is_friend = state.friends.iter().any(|f| f.id == user.id);
        let requested = state
            .requests
            .sent
            .iter()
            .any(|r| r.receiver.as_ref().is_some_and(|rcv| rcv.id == user.id));
        person_card(ui, user, |ui| {
            if is_friend {
                ui.label(egui::RichText::new("Friends").color(SUCCESS));
            } else if requested {
                ui.label(egui::RichText::new("Requested").color(TEXT_TERTIARY));
            } else if ui.button("Add Friend").clicked() {
                *click = Some(FriendClick::SendRequest(user.id.clone()));
            }
        });
    }
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).size(16.0).strong().color(TEXT_PRIMARY));
    ui.add_space(6.0);
}

fn person_card(ui: &mut egui::Ui, person: &Friend, actions: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&person.name).strong());
                    if !person.email.is_empty() {
                        ui.label(egui::RichText::new(&person.email).size(12.0).color(TEXT_SECONDARY));
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), actions);
            });
        });
    ui.add_space(6.0);
}
