//! Points leaderboard with a global/meeting toggle.

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::models::leaderboard::{
    Badge, LeaderboardEntry, RankedEntry, ViewMode, rank_entries, sample_entries,
};
use crate::models::participant::AccuracyTier;
use crate::utils::{format_percent, format_secs};

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardModel {
    entries: Vec<LeaderboardEntry>,
    mode: ViewMode,
}

impl Default for LeaderboardModel {
    fn default() -> Self {
        Self {
            entries: sample_entries(),
            mode: ViewMode::default(),
        }
    }
}

impl LeaderboardModel {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn ranked(&self) -> Vec<RankedEntry<'_>> {
        rank_entries(&self.entries, self.mode)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderboardMsg {
    SetMode(ViewMode),
}

pub fn update(model: &mut LeaderboardModel, msg: LeaderboardMsg) {
    match msg {
        LeaderboardMsg::SetMode(mode) => model.mode = mode,
    }
}

fn badge_icon(badge: Badge) -> egui::RichText {
    let color = match badge {
        Badge::Gold => egui::Color32::from_rgb(250, 204, 21),
        Badge::Silver => egui::Color32::from_rgb(203, 213, 225),
        Badge::Bronze => egui::Color32::from_rgb(217, 119, 6),
    };
    egui::RichText::new(icons::MEDAL).size(18.0).color(color)
}

pub fn view(ui: &mut egui::Ui, model: &LeaderboardModel) -> Vec<LeaderboardMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.heading("Leaderboard");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for (mode, label) in [(ViewMode::Meeting, "This Meeting"), (ViewMode::Global, "Global")] {
                if ui
                    .add(egui::Button::new(label).selected(model.mode == mode))
                    .clicked()
                {
                    msgs.push(LeaderboardMsg::SetMode(mode));
                }
            }
        });
    });
    ui.add_space(8.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("leaderboard_grid")
            .num_columns(6)
            .striped(true)
            .spacing([18.0, 8.0])
            .show(ui, |ui| {
                for header in ["Rank", "Name", "Points", "Accuracy", "Avg Time", "Polls"] {
                    ui.label(egui::RichText::new(header).strong());
                }
                ui.end_row();

                for row in model.ranked() {
                    ui.horizontal(|ui| {
                        ui.label(format!("#{}", row.rank));
                        if let Some(badge) = row.badge {
                            ui.label(badge_icon(badge));
                        }
                    });
                    ui.label(row.entry.name.as_str());
                    ui.label(egui::RichText::new(row.entry.total_points.to_string()).strong());
                    let color = match AccuracyTier::from_percent(row.entry.accuracy) {
                        AccuracyTier::High => egui::Color32::from_rgb(34, 197, 94),
                        AccuracyTier::Medium => egui::Color32::from_rgb(234, 179, 8),
                        AccuracyTier::Low => egui::Color32::from_rgb(239, 68, 68),
                    };
                    ui.colored_label(color, format_percent(row.entry.accuracy));
                    ui.label(format_secs(row.entry.avg_time_secs));
                    ui.label(row.entry.polls_attempted.to_string());
                    ui.end_row();
                }
            });
    });

    msgs
}
