// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Host review queue for generated and manual questions.

use eframe::egui;
use egui_phosphor::regular as icons;
use uuid::Uuid;

use crate::models::question::{Difficulty, Question, QuestionStatus, sample_questions, strings};

/// Narrowing applied to the question list. `None` means "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionFilters {
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub status: Option<QuestionStatus>,
}

impl QuestionFilters {
    pub fn accepts(&self, question: &Question) -> bool {
        self.difficulty.is_none_or(|d| d == question.difficulty)
            && self
                .category
                .as_deref()
                .is_none_or(|c| c == question.category)
            && self.status.is_none_or(|s| s == question.status)
    }
}

/// In-progress edit of one question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionFeedModel {
    questions: Vec<Question>,
    filters: QuestionFilters,
    editing: Option<EditDraft>,
    default_timer_secs: u32,
}

impl Default for QuestionFeedModel {
    fn default() -> Self {
        Self {
            questions: sample_questions(),
            filters: QuestionFilters::default(),
            editing: None,
            default_timer_secs: 30,
        }
    }
}

impl QuestionFeedModel {
    pub fn with_default_timer(secs: u32) -> Self {
        Self {
            default_timer_secs: secs,
            ..Default::default()
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn visible(&self) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| self.filters.accepts(q))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for q in &self.questions {
            if !out.contains(&q.category.as_str()) {
                out.push(&q.category);
            }
        }
        out
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionMsg {
    FilterDifficulty(Option<Difficulty>),
    FilterCategory(Option<String>),
    FilterStatus(Option<QuestionStatus>),
    Approve(String),
    Reject(String),
    ToggleAutoLaunch(String),
    StartEdit(String),
    EditText(String),
    EditOption(usize, String),
    SaveEdit,
    CancelEdit,
    Delete(String),
    AddQuestion,
    Launch(String),
    Generated(Vec<Question>),
    DefaultTimerChanged(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionEvent {
    Launched(String),
    Notice(String),
    Error(String),
}

pub fn update(model: &mut QuestionFeedModel, msg: QuestionMsg) -> Option<QuestionEvent> {
    match msg {
        QuestionMsg::FilterDifficulty(value) => model.filters.difficulty = value,
        QuestionMsg::FilterCategory(value) => model.filters.category = value,
        QuestionMsg::FilterStatus(value) => model.filters.status = value,
        QuestionMsg::Approve(id) => set_status(model, &id, QuestionStatus::Approved),
        QuestionMsg::Reject(id) => set_status(model, &id, QuestionStatus::Rejected),
        QuestionMsg::ToggleAutoLaunch(id) => {
            if let Some(q) = model.find_mut(&id) {
                q.auto_launch = !q.auto_launch;
            }
        }
        QuestionMsg::StartEdit(id) => {
            if model.editing.as_ref().is_some_and(|d| d.id == id) {
                model.editing = None;
            } else if let Some(q) = model.questions.iter().find(|q| q.id == id) {
                model.editing = Some(EditDraft {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    options: q.options.clone(),
                });
            }
        }
        QuestionMsg::EditText(text) => {
            if let Some(draft) = &mut model.editing {
                draft.text = text;
            }
        }
        QuestionMsg::EditOption(index, text) => {
            if let Some(slot) = model
                .editing
                .as_mut()
                .and_then(|d| d.options.get_mut(index))
            {
                *slot = text;
            }
        }
        QuestionMsg::SaveEdit => return save_edit(model),
        QuestionMsg::CancelEdit => model.editing = None,
        QuestionMsg::Delete(id) => {
            model.questions.retain(|q| q.id != id);
            if model.editing.as_ref().is_some_and(|d| d.id == id) {
                model.editing = None;
            }
        }
        QuestionMsg::AddQuestion => {
            let question = Question {
                id: Uuid::new_v4().to_string(),
                text: "New question".into(),
                options: strings(&["Option A", "Option B", "Option C", "Option D"]),
                difficulty: Difficulty::Medium,
                category: "General".into(),
                confidence: 100,
                status: QuestionStatus::Pending,
                auto_launch: false,
                timer_secs: model.default_timer_secs,
            };
            model.editing = Some(EditDraft {
                id: question.id.clone(),
                text: question.text.clone(),
                options: question.options.clone(),
            });
            model.questions.insert(0, question);
        }
        QuestionMsg::Launch(id) => {
            let question = model.questions.iter().find(|q| q.id == id)?;
            if question.status != QuestionStatus::Approved {
                return Some(QuestionEvent::Error(
                    "Only approved questions can be launched".into(),
                ));
            }
            log::info!("Launching poll {}: {}", question.id, question.text);
            return Some(QuestionEvent::Launched(question.text.clone()));
        }
        QuestionMsg::Generated(questions) => {
            let count = questions.len();
            model.questions.extend(questions);
            return Some(QuestionEvent::Notice(format!(
                "{count} new question(s) ready for review"
            )));
        }
        QuestionMsg::DefaultTimerChanged(secs) => model.default_timer_secs = secs,
    }
    None
}

fn set_status(model: &mut QuestionFeedModel, id: &str, status: QuestionStatus) {
    if let Some(q) = model.find_mut(id) {
        q.status = status;
    }
}

fn save_edit(model: &mut QuestionFeedModel) -> Option<QuestionEvent> {
    let draft = model.editing.as_ref()?;
    let text = draft.text.trim();
    if text.is_empty() {
        return Some(QuestionEvent::Error("Question text cannot be empty".into()));
    }
    if draft.options.iter().any(|o| o.trim().is_empty()) {
        return Some(QuestionEvent::Error(
            "Every answer option needs text".into(),
        ));
    }
    let options: Vec<String> = draft.options.iter().map(|o| o.trim().to_string()).collect();

    let text = text.to_string();
    let id = draft.id.clone();
    if let Some(q) = model.find_mut(&id) {
        q.text = text;
        q.options = options;
    }
    model.editing = None;
    None
}

pub fn view(ui: &mut egui::Ui, model: &QuestionFeedModel) -> Vec<QuestionMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("AI Question Feed");
            ui.label("Review, edit, and launch generated questions");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Add Question", icons::PLUS)).clicked() {
                msgs.push(QuestionMsg::AddQuestion);
            }
        });
    });
    ui.add_space(8.0);
    render_filters(ui, model, &mut msgs);
    ui.add_space(8.0);

    let visible = model.visible();
    if visible.is_empty() {
        ui.label(egui::RichText::new("No questions match the current filters.").weak());
    }
    egui::ScrollArea::vertical().show(ui, |ui| {
        for question in visible {
            render_question(ui, model, question, &mut msgs);
            ui.add_space(8.0);
        }
    });

    msgs
}

fn render_filters(ui: &mut egui::Ui, model: &QuestionFeedModel, msgs: &mut Vec<QuestionMsg>) {
    ui.horizontal(|ui| {
        ui.label(icons::FUNNEL);
        let difficulty = model.filters.difficulty.map_or("All", Difficulty::label);
        egui::ComboBox::from_id_salt("filter_difficulty")
            .selected_text(difficulty)
            .show_ui(ui, |ui| {
                if ui.selectable_label(model.filters.difficulty.is_none(), "All").clicked() {
                    msgs.push(QuestionMsg::FilterDifficulty(None));
                }
                for d in Difficulty::ALL {
                    if ui
                        .selectable_label(model.filters.difficulty == Some(d), d.label())
                        .clicked()
                    {
                        msgs.push(QuestionMsg::FilterDifficulty(Some(d)));
                    }
                }
            });

        let category = model.filters.category.as_deref().unwrap_or("All");
        egui::ComboBox::from_id_salt("filter_category")
            .selected_text(category)
            .show_ui(ui, |ui| {
                if ui.selectable_label(model.filters.category.is_none(), "All").clicked() {
                    msgs.push(QuestionMsg::FilterCategory(None));
                }
                for c in model.categories() {
                    if ui
                        .selectable_label(model.filters.category.as_deref() == Some(c), c)
                        .clicked()
                    {
                        msgs.push(QuestionMsg::FilterCategory(Some(c.to_string())));
                    }
                }
            });

        let status = model.filters.status.map_or("All", QuestionStatus::label);
        egui::ComboBox::from_id_salt("filter_status")
            .selected_text(status)
            .show_ui(ui, |ui| {
                if ui.selectable_label(model.filters.status.is_none(), "All").clicked() {
                    msgs.push(QuestionMsg::FilterStatus(None));
                }
                for s in QuestionStatus::ALL {
                    if ui
                        .selectable_label(model.filters.status == Some(s), s.label())
                        .clicked()
                    {
                        msgs.push(QuestionMsg::FilterStatus(Some(s)));
                    }
                }
            });
    });
}

fn status_color(status: QuestionStatus) -> egui::Color32 {
    match status {
        QuestionStatus::Pending => egui::Color32::from_rgb(234, 179, 8),
        QuestionStatus::Approved => egui::Color32::from_rgb(34, 197, 94),
        QuestionStatus::Rejected => egui::Color32::from_rgb(239, 68, 68),
    }
}

fn render_question(
    ui: &mut egui::Ui,
    model: &QuestionFeedModel,
    question: &Question,
    msgs: &mut Vec<QuestionMsg>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(question.status.label())
                    .small()
                    .color(status_color(question.status)),
            );
            ui.label(egui::RichText::new(question.difficulty.label()).small());
            ui.label(egui::RichText::new(&question.category).small().weak());
            ui.label(
                egui::RichText::new(format!("{}% confidence", question.confidence))
                    .small()
                    .weak(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let id = || question.id.clone();
                if question.status == QuestionStatus::Approved
                    && ui.button(icons::PLAY).on_hover_text("Launch poll").clicked()
                {
                    msgs.push(QuestionMsg::Launch(id()));
                }
                if ui.button(icons::PENCIL_SIMPLE).on_hover_text("Edit").clicked() {
                    msgs.push(QuestionMsg::StartEdit(id()));
                }
                if question.status == QuestionStatus::Pending {
                    if ui.button(icons::X).on_hover_text("Reject").clicked() {
                        msgs.push(QuestionMsg::Reject(id()));
                    }
                    if ui.button(icons::CHECK).on_hover_text("Approve").clicked() {
                        msgs.push(QuestionMsg::Approve(id()));
                    }
                }
            });
        });

        ui.label(egui::RichText::new(&question.text).size(16.0).strong());
        for (i, option) in question.options.iter().enumerate() {
            let letter = char::from(b'A' + (i % 26) as u8);
            ui.label(format!("{letter}. {option}"));
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("{} Timer: {}s", icons::CLOCK, question.timer_secs));
            let mut auto = question.auto_launch;
            if ui.checkbox(&mut auto, "Auto-launch").changed() {
                msgs.push(QuestionMsg::ToggleAutoLaunch(question.id.clone()));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(icons::TRASH_SIMPLE).on_hover_text("Delete").clicked() {
                    msgs.push(QuestionMsg::Delete(question.id.clone()));
                }
            });
        });

        if let Some(draft) = &model.editing
            && draft.id == question.id
        {
            render_editor(ui, draft, msgs);
        }
    });
}

fn render_editor(ui: &mut egui::Ui, draft: &EditDraft, msgs: &mut Vec<QuestionMsg>) {
    ui.separator();
    ui.label("Question Text");
    let mut text = draft.text.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut text)
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(QuestionMsg::EditText(text));
    }
    ui.label("Answer Options");
    for (i, option) in draft.options.iter().enumerate() {
        let mut value = option.clone();
        let letter = char::from(b'A' + (i % 26) as u8);
        if ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(format!("Option {letter}"))
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            msgs.push(QuestionMsg::EditOption(i, value));
        }
    }
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            msgs.push(QuestionMsg::CancelEdit);
        }
        if ui
            .button(format!("{} Save Changes", icons::FLOPPY_DISK))
            .clicked()
        {
            msgs.push(QuestionMsg::SaveEdit);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_combine_and_all_means_unfiltered() {
        let mut model = QuestionFeedModel::default();
        assert_eq!(model.visible().len(), 3);

        update(&mut model, QuestionMsg::FilterStatus(Some(QuestionStatus::Pending)));
        assert_eq!(model.visible().len(), 2);

        update(&mut model, QuestionMsg::FilterDifficulty(Some(Difficulty::Hard)));
        let ids: Vec<&str> = model.visible().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        update(&mut model, QuestionMsg::FilterCategory(Some("Programming".into())));
        assert!(model.visible().is_empty());

        update(&mut model, QuestionMsg::FilterStatus(None));
        update(&mut model, QuestionMsg::FilterDifficulty(None));
        assert_eq!(model.visible().len(), 1);
    }

    #[test]
    fn only_approved_questions_launch() {
        let mut model = QuestionFeedModel::default();

        let pending = update(&mut model, QuestionMsg::Launch("1".into()));
        assert!(matches!(pending, Some(QuestionEvent::Error(_))));

        update(&mut model, QuestionMsg::Approve("1".into()));
        let launched = update(&mut model, QuestionMsg::Launch("1".into()));
        assert_eq!(
            launched,
            Some(QuestionEvent::Launched(
                "What is the primary purpose of machine learning?".into()
            ))
        );

        update(&mut model, QuestionMsg::Reject("1".into()));
        assert!(matches!(
            update(&mut model, QuestionMsg::Launch("1".into())),
            Some(QuestionEvent::Error(_))
        ));
    }

    #[test]
    fn edit_replaces_text_and_trims_options() {
        let mut model = QuestionFeedModel::default();
        update(&mut model, QuestionMsg::StartEdit("3".into()));
        update(&mut model, QuestionMsg::EditText("  What is an API?  ".into()));
        update(&mut model, QuestionMsg::EditOption(3, "  A wire format  ".into()));

        assert_eq!(update(&mut model, QuestionMsg::SaveEdit), None);

        let q = &model.questions()[2];
        assert_eq!(q.text, "What is an API?");
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.options[3], "A wire format");
        assert!(model.editing.is_none());
    }

    #[test]
    fn blank_option_keeps_editor_open_and_question_unchanged() {
        let mut model = QuestionFeedModel::default();
        let before = model.questions()[2].clone();
        update(&mut model, QuestionMsg::StartEdit("3".into()));
        update(&mut model, QuestionMsg::EditOption(3, "   ".into()));

        let event = update(&mut model, QuestionMsg::SaveEdit);

        assert!(matches!(event, Some(QuestionEvent::Error(_))));
        assert!(model.editing.is_some());
        assert_eq!(model.questions()[2], before);
    }

    #[test]
    fn blank_text_keeps_editor_open() {
        let mut model = QuestionFeedModel::default();
        update(&mut model, QuestionMsg::StartEdit("1".into()));
        update(&mut model, QuestionMsg::EditText(" ".into()));

        let event = update(&mut model, QuestionMsg::SaveEdit);

        assert!(matches!(event, Some(QuestionEvent::Error(_))));
        assert!(model.editing.is_some());
        assert_eq!(
            model.questions()[0].text,
            "What is the primary purpose of machine learning?"
        );
    }

    #[test]
    fn added_question_uses_default_timer_and_opens_editor() {
        let mut model = QuestionFeedModel::with_default_timer(45);

        update(&mut model, QuestionMsg::AddQuestion);

        let first = &model.questions()[0];
        assert_eq!(first.timer_secs, 45);
        assert_eq!(first.status, QuestionStatus::Pending);
        assert_eq!(model.editing.as_ref().map(|d| d.id.as_str()), Some(first.id.as_str()));
    }

    #[test]
    fn delete_and_generated_questions_update_the_list() {
        let mut model = QuestionFeedModel::default();
        update(&mut model, QuestionMsg::Delete("2".into()));
        assert_eq!(model.questions().len(), 2);

        let generated = crate::logic::generator::generate_questions("supervised learning", 30);
        let event = update(&mut model, QuestionMsg::Generated(generated));

        assert_eq!(model.questions().len(), 3);
        assert!(matches!(event, Some(QuestionEvent::Notice(_))));
    }
}
