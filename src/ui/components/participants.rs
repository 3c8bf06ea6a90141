// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Participant roster with search, sorting, a detail panel, and JSON report export.

use std::path::PathBuf;

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::logic::report::suggested_report_name;
use crate::models::participant::{
    AccuracyTier, Participant, ParticipantStatus, SortKey, SortOrder, sample_participants,
    visible_participants,
};
use crate::utils::{ensure_extension, format_percent, format_secs};

#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantsModel {
    participants: Vec<Participant>,
    search: String,
    sort_key: SortKey,
    sort_order: SortOrder,
    selected: Option<String>,
}

impl Default for ParticipantsModel {
    fn default() -> Self {
        Self {
            participants: sample_participants(),
            search: String::new(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            selected: None,
        }
    }
}

impl ParticipantsModel {
    pub fn visible(&self) -> Vec<&Participant> {
        visible_participants(&self.participants, &self.search, self.sort_key, self.sort_order)
    }

    pub fn selected(&self) -> Option<&Participant> {
        let id = self.selected.as_deref()?;
        self.participants.iter().find(|p| p.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParticipantsMsg {
    SearchChanged(String),
    /// Choosing the active column again flips the order.
    SortBy(SortKey),
    ToggleOrder,
    ShowDetail(String),
    CloseDetail,
    ExportRequested { id: String, output: PathBuf },
    ExportCancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParticipantsCommand {
    ExportReport {
        participant: Participant,
        output: PathBuf,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantsEvent {
    Notice(String),
}

pub fn update(
    model: &mut ParticipantsModel,
    msg: ParticipantsMsg,
    cmds: &mut Vec<ParticipantsCommand>,
) -> Option<ParticipantsEvent> {
    match msg {
        ParticipantsMsg::SearchChanged(text) => model.search = text,
        ParticipantsMsg::SortBy(key) => {
            if key == model.sort_key {
                model.sort_order = model.sort_order.flipped();
            } else {
                model.sort_key = key;
                model.sort_order = SortOrder::Descending;
            }
        }
        ParticipantsMsg::ToggleOrder => model.sort_order = model.sort_order.flipped(),
        ParticipantsMsg::ShowDetail(id) => model.selected = Some(id),
        ParticipantsMsg::CloseDetail => model.selected = None,
        ParticipantsMsg::ExportRequested { id, output } => {
            let participant = model.participants.iter().find(|p| p.id == id)?;
            cmds.push(ParticipantsCommand::ExportReport {
                participant: participant.clone(),
                output,
            });
        }
        ParticipantsMsg::ExportCancelled => {
            return Some(ParticipantsEvent::Notice("Export cancelled.".into()));
        }
    }
    None
}

fn tier_color(accuracy: u8) -> egui::Color32 {
    match AccuracyTier::from_percent(accuracy) {
        AccuracyTier::High => egui::Color32::from_rgb(34, 197, 94),
        AccuracyTier::Medium => egui::Color32::from_rgb(234, 179, 8),
        AccuracyTier::Low => egui::Color32::from_rgb(239, 68, 68),
    }
}

pub fn view(ui: &mut egui::Ui, model: &ParticipantsModel) -> Vec<ParticipantsMsg> {
    let mut msgs = Vec::new();

    ui.heading("Participants");
    ui.label(format!("{} participants in this session", model.participants.len()));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label(icons::MAGNIFYING_GLASS);
        let mut search = model.search.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text("Search by name or email")
                    .desired_width(240.0),
            )
            .changed()
        {
            msgs.push(ParticipantsMsg::SearchChanged(search));
        }
        ui.separator();
        ui.label("Sort by");
        egui::ComboBox::from_id_salt("participant_sort")
            .selected_text(model.sort_key.label())
            .show_ui(ui, |ui| {
                for key in SortKey::ALL {
                    if ui
                        .selectable_label(model.sort_key == key, key.label())
                        .clicked()
                    {
                        msgs.push(ParticipantsMsg::SortBy(key));
                    }
                }
            });
        let arrow = match model.sort_order {
            SortOrder::Ascending => icons::SORT_ASCENDING,
            SortOrder::Descending => icons::SORT_DESCENDING,
        };
        if ui.button(arrow).on_hover_text("Flip order").clicked() {
            msgs.push(ParticipantsMsg::ToggleOrder);
        }
    });
    ui.add_space(8.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("participants_grid")
            .num_columns(6)
            .striped(true)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for header in ["Name", "Email", "Accuracy", "Avg Time", "Polls", "Status"] {
                    ui.label(egui::RichText::new(header).strong());
                }
                ui.end_row();

                for p in model.visible() {
                    if ui.link(p.name.as_str()).clicked() {
                        msgs.push(ParticipantsMsg::ShowDetail(p.id.clone()));
                    }
                    ui.label(p.email.as_str());
                    ui.colored_label(tier_color(p.accuracy), format_percent(p.accuracy));
                    ui.label(format_secs(p.avg_time_secs));
                    ui.label(p.polls_attempted.to_string());
                    let status_color = match p.status {
                        ParticipantStatus::Active => egui::Color32::from_rgb(34, 197, 94),
                        ParticipantStatus::Inactive => egui::Color32::from_gray(140),
                    };
                    ui.colored_label(status_color, p.status.label());
                    ui.end_row();
                }
            });
    });

    if let Some(p) = model.selected() {
        render_detail(ui, p, &mut msgs);
    }

    msgs
}

fn render_detail(ui: &mut egui::Ui, p: &Participant, msgs: &mut Vec<ParticipantsMsg>) {
    let mut open = true;
    egui::Window::new(p.name.as_str())
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ui.ctx(), |ui| {
            egui::Grid::new("participant_detail")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Email");
                    ui.label(p.email.as_str());
                    ui.end_row();
                    ui.label("Joined");
                    ui.label(p.joined_at.to_string());
                    ui.end_row();
                    ui.label("Last active");
                    ui.label(p.last_active.as_str());
                    ui.end_row();
                    ui.label("Accuracy");
                    ui.colored_label(tier_color(p.accuracy), format_percent(p.accuracy));
                    ui.end_row();
                    ui.label("Avg response");
                    ui.label(format_secs(p.avg_time_secs));
                    ui.end_row();
                    ui.label("Polls attempted");
                    ui.label(p.polls_attempted.to_string());
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui
                .button(format!("{} Export report", icons::EXPORT))
                .clicked()
            {
                let dialog = rfd::FileDialog::new()
                    .set_title("Export participant report")
                    .add_filter("JSON", &["json"])
                    .set_file_name(suggested_report_name(p));
                match dialog.save_file() {
                    Some(path) => msgs.push(ParticipantsMsg::ExportRequested {
                        id: p.id.clone(),
                        output: ensure_extension(path, "json"),
                    }),
                    None => msgs.push(ParticipantsMsg::ExportCancelled),
                }
            }
        });
    if !open {
        msgs.push(ParticipantsMsg::CloseDetail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(model: &ParticipantsModel) -> Vec<&str> {
        model.visible().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn reselecting_sort_key_flips_order() {
        let mut model = ParticipantsModel::default();
        let mut cmds = Vec::new();

        update(&mut model, ParticipantsMsg::SortBy(SortKey::Name), &mut cmds);
        assert_eq!(names(&model)[0], "David Wilson");

        update(&mut model, ParticipantsMsg::SortBy(SortKey::Name), &mut cmds);
        assert_eq!(names(&model)[0], "Alice Johnson");
    }

    #[test]
    fn export_request_carries_participant_and_path() {
        let mut model = ParticipantsModel::default();
        let mut cmds = Vec::new();
        let output = PathBuf::from("out/alice.json");

        update(
            &mut model,
            ParticipantsMsg::ExportRequested {
                id: "1".into(),
                output: output.clone(),
            },
            &mut cmds,
        );

        match cmds.as_slice() {
            [ParticipantsCommand::ExportReport { participant, output: o }] => {
                assert_eq!(participant.name, "Alice Johnson");
                assert_eq!(o, &output);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn detail_selection_round_trip() {
        let mut model = ParticipantsModel::default();
        let mut cmds = Vec::new();
        update(&mut model, ParticipantsMsg::ShowDetail("2".into()), &mut cmds);
        assert_eq!(model.selected().map(|p| p.name.as_str()), Some("Bob Smith"));
        update(&mut model, ParticipantsMsg::CloseDetail, &mut cmds);
        assert!(model.selected().is_none());
    }
}
