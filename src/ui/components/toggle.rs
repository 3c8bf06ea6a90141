// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! On/off switch row used on the settings screen.

use eframe::egui;

/// Draw a labelled switch row with a hint line underneath.
///
/// Returns the flipped value when the switch was clicked.
pub fn setting_switch(ui: &mut egui::Ui, label: &str, hint: &str, on: bool) -> Option<bool> {
    let clicked = ui
        .horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(label).strong());
                ui.label(egui::RichText::new(hint).small().weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                switch(ui, on).clicked()
            })
            .inner
        })
        .inner;
    clicked.then_some(!on)
}

fn switch(ui: &mut egui::Ui, on: bool) -> egui::Response {
    let size = egui::vec2(36.0, 20.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let t = ui.ctx().animate_bool(response.id, on);
        let track = if on {
            super::ACCENT
        } else {
            ui.visuals().widgets.inactive.bg_fill
        };
        let painter = ui.painter();
        painter.rect_filled(rect, rect.height() * 0.5, track);
        let knob_x = egui::lerp((rect.left() + 10.0)..=(rect.right() - 10.0), t);
        painter.circle_filled(
            egui::pos2(knob_x, rect.center().y),
            7.0,
            egui::Color32::WHITE,
        );
    }

    response
}
