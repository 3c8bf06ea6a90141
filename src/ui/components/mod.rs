// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Screen components structured for MVU-style updates, plus a few shared widgets.

pub mod audio_capture;
pub mod forgot_password;
pub mod join_room;
pub mod leaderboard;
pub mod loader;
pub mod login;
pub mod overview;
pub mod participants;
pub mod question_feed;
pub mod register;
pub mod settings;
pub mod sidebar;
pub mod student_dashboard;
pub mod toggle;

use eframe::egui;

use crate::models::user::Role;

pub use toggle::setting_switch;

/// Accent used for primary highlights across screens.
pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

/// Centered card used by the signed-out screens.
pub(crate) fn auth_card(
    ui: &mut egui::Ui,
    title: &str,
    subtitle: &str,
    body: impl FnOnce(&mut egui::Ui),
) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(400.0);
        ui.add_space(48.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::CHART_BAR)
                        .size(28.0)
                        .color(ACCENT),
                );
                ui.heading(title);
                ui.label(subtitle);
            });
            ui.add_space(12.0);
            body(ui);
        });
    });
}

/// Two-button role selector. Returns the newly chosen role, if any.
pub(crate) fn role_picker(ui: &mut egui::Ui, current: Role) -> Option<Role> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for (role, icon) in [
            (Role::Student, egui_phosphor::regular::STUDENT),
            (Role::Host, egui_phosphor::regular::CHALKBOARD_TEACHER),
        ] {
            let button = egui::Button::new(format!("{icon} {}", role.label()))
                .selected(current == role);
            if ui.add(button).clicked() && current != role {
                picked = Some(role);
            }
        }
    });
    picked
}

/// Grid of statistic cards: icon, label, value.
pub(crate) fn stat_cards(ui: &mut egui::Ui, id: &str, cards: &[(&str, &str, String)]) {
    egui::Grid::new(id)
        .num_columns(cards.len())
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (icon, label, value) in cards {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_min_width(150.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(*icon).size(22.0).color(ACCENT));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(*label).small());
                            ui.label(egui::RichText::new(value).size(20.0).strong());
                        });
                    });
                });
            }
            ui.end_row();
        });
}
