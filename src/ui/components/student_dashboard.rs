// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Student view: session info, personal stats, and the live question with its countdown.

use std::time::Duration;

use eframe::egui;

use crate::models::join::JoinRequest;
use crate::models::question::LiveQuestion;
use crate::utils::format_clock;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// How the submitted answer turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    NoAnswer,
}

impl Outcome {
    fn judge(question: &LiveQuestion, selected: Option<usize>) -> Self {
        match (selected, question.correct_answer) {
            (None, _) => Outcome::NoAnswer,
            (Some(choice), Some(correct)) if choice == correct => Outcome::Correct,
            (Some(_), _) => Outcome::Incorrect,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Outcome::Correct => "Correct! Well done.",
            Outcome::Incorrect => "Incorrect. Better luck next time!",
            Outcome::NoAnswer => "Time's up! No answer submitted.",
        }
    }
}

/// Lifecycle of the live question on the student's screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuestionPhase {
    #[default]
    Waiting,
    Answering,
    Submitted,
    Revealed(Outcome),
}

/// Colour band of the countdown bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressTier {
    High,
    Medium,
    Low,
}

impl ProgressTier {
    /// Above 60 % remaining is high, above 30 % medium, anything else low.
    pub fn for_remaining(remaining_secs: u32, limit_secs: u32) -> Self {
        if limit_secs == 0 {
            return ProgressTier::Low;
        }
        let percent = remaining_secs as f32 * 100.0 / limit_secs as f32;
        if percent > 60.0 {
            ProgressTier::High
        } else if percent > 30.0 {
            ProgressTier::Medium
        } else {
            ProgressTier::Low
        }
    }

    fn color(self) -> egui::Color32 {
        match self {
            ProgressTier::High => egui::Color32::from_rgb(34, 197, 94),
            ProgressTier::Medium => egui::Color32::from_rgb(234, 179, 8),
            ProgressTier::Low => egui::Color32::from_rgb(239, 68, 68),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDashboardModel {
    user_name: String,
    session: Option<JoinRequest>,
    /// Bumped on every entry so results from an earlier visit are dropped.
    visit: u64,
    question: Option<LiveQuestion>,
    phase: QuestionPhase,
    remaining_secs: u32,
    since_last_second: Duration,
    selected: Option<usize>,
}

impl StudentDashboardModel {
    pub fn phase(&self) -> QuestionPhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn session(&self) -> Option<&JoinRequest> {
        self.session.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudentMsg {
    /// The student was admitted to a session.
    Enter {
        user_name: String,
        session: JoinRequest,
    },
    QuestionDelivered {
        visit: u64,
        question: LiveQuestion,
    },
    Tick(Duration),
    SelectAnswer(usize),
    Submit,
    ResultRevealed {
        visit: u64,
    },
    OpenMeeting,
    Logout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudentCommand {
    DeliverQuestion { visit: u64 },
    RevealResult { visit: u64 },
    OpenMeeting(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentEvent {
    LoggedOut,
}

pub fn update(
    model: &mut StudentDashboardModel,
    msg: StudentMsg,
    cmds: &mut Vec<StudentCommand>,
) -> Option<StudentEvent> {
    match msg {
        StudentMsg::Enter { user_name, session } => {
            let visit = model.visit + 1;
            *model = StudentDashboardModel {
                user_name,
                session: Some(session),
                visit,
                ..Default::default()
            };
            cmds.push(StudentCommand::DeliverQuestion { visit });
        }
        StudentMsg::QuestionDelivered { visit, question } => {
            if visit != model.visit || model.phase != QuestionPhase::Waiting {
                return None;
            }
            log::debug!("Question {} delivered ({}s)", question.id, question.time_limit_secs);
            model.remaining_secs = question.time_limit_secs;
            model.since_last_second = Duration::ZERO;
            model.selected = None;
            model.question = Some(question);
            model.phase = QuestionPhase::Answering;
            if model.remaining_secs == 0 {
                submit(model, cmds);
            }
        }
        StudentMsg::Tick(dt) => {
            if model.phase != QuestionPhase::Answering {
                return None;
            }
            model.since_last_second += dt;
            while model.since_last_second >= ONE_SECOND && model.remaining_secs > 0 {
                model.since_last_second -= ONE_SECOND;
                model.remaining_secs -= 1;
            }
            if model.remaining_secs == 0 {
                submit(model, cmds);
            }
        }
        StudentMsg::SelectAnswer(index) => {
            let in_range = model
                .question
                .as_ref()
                .is_some_and(|q| index < q.options.len());
            if model.phase == QuestionPhase::Answering && in_range {
                model.selected = Some(index);
            }
        }
        StudentMsg::Submit => {
            if model.phase == QuestionPhase::Answering {
                submit(model, cmds);
            }
        }
        StudentMsg::ResultRevealed { visit } => {
            if visit != model.visit || model.phase != QuestionPhase::Submitted {
                return None;
            }
            if let Some(question) = &model.question {
                let outcome = Outcome::judge(question, model.selected);
                log::info!("Answer to question {} judged {outcome:?}", question.id);
                model.phase = QuestionPhase::Revealed(outcome);
            }
        }
        StudentMsg::OpenMeeting => {
            if let Some(session) = &model.session {
                cmds.push(StudentCommand::OpenMeeting(session.meeting_link.clone()));
            }
        }
        StudentMsg::Logout => {
            // Keep the visit counter so late results from this visit stay stale.
            let visit = model.visit;
            *model = StudentDashboardModel {
                visit,
                ..Default::default()
            };
            return Some(StudentEvent::LoggedOut);
        }
    }
    None
}

fn submit(model: &mut StudentDashboardModel, cmds: &mut Vec<StudentCommand>) {
    model.phase = QuestionPhase::Submitted;
    cmds.push(StudentCommand::RevealResult { visit: model.visit });
}

pub fn view(ui: &mut egui::Ui, model: &StudentDashboardModel) -> Vec<StudentMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.heading(format!("Welcome back, {}!", model.user_name));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(format!("{} Logout", egui_phosphor::regular::SIGN_OUT))
                .clicked()
            {
                msgs.push(StudentMsg::Logout);
            }
        });
    });
    ui.label("Ready to participate in today's session?");
    ui.add_space(12.0);

    use egui_phosphor::regular as icons;
    super::stat_cards(
        ui,
        "student_stats",
        &[
            (icons::CHECK_CIRCLE, "Questions Answered", "12".into()),
            (icons::TARGET, "Accuracy Rate", "87%".into()),
            (icons::TIMER, "Avg Response Time", "2.3s".into()),
            (icons::TROPHY, "Class Rank", "#5".into()),
        ],
    );
    ui.add_space(12.0);

    if let Some(session) = &model.session {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Current Session").strong());
            egui::Grid::new("session_info").num_columns(2).show(ui, |ui| {
                ui.label("Room Code");
                ui.monospace(session.room_code.as_str());
                ui.end_row();
                ui.label("Meeting");
                ui.horizontal(|ui| {
                    ui.label(session.meeting_link.as_str());
                    if ui
                        .button(format!("{} Open meeting", icons::VIDEO_CAMERA))
                        .clicked()
                    {
                        msgs.push(StudentMsg::OpenMeeting);
                    }
                });
                ui.end_row();
            });
        });
        ui.add_space(12.0);
    }

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        match (&model.question, model.phase) {
            (None, _) | (_, QuestionPhase::Waiting) => {
                ui.vertical_centered(|ui| {
                    ui.add(egui::Spinner::new().size(28.0));
                    ui.label("Waiting for the next question...");
                });
            }
            (Some(question), phase) => render_question(ui, model, question, phase, &mut msgs),
        }
    });

    msgs
}

fn render_question(
    ui: &mut egui::Ui,
    model: &StudentDashboardModel,
    question: &LiveQuestion,
    phase: QuestionPhase,
    msgs: &mut Vec<StudentMsg>,
) {
    let limit = question.time_limit_secs;
    let tier = ProgressTier::for_remaining(model.remaining_secs, limit);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Live Question").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format_clock(model.remaining_secs.into()))
                    .monospace()
                    .color(tier.color()),
            );
            ui.label(egui_phosphor::regular::CLOCK);
        });
    });
    let fraction = if limit == 0 {
        0.0
    } else {
        model.remaining_secs as f32 / limit as f32
    };
    ui.add(egui::ProgressBar::new(fraction).fill(tier.color()));
    ui.add_space(8.0);
    ui.label(egui::RichText::new(&question.text).size(17.0));
    ui.add_space(6.0);

    let answering = phase == QuestionPhase::Answering;
    for (index, option) in question.options.iter().enumerate() {
        let letter = char::from(b'A' + (index % 26) as u8);
        let mut text = egui::RichText::new(format!("{letter}. {option}"));
        if let QuestionPhase::Revealed(_) = phase
            && question.correct_answer == Some(index)
        {
            text = text.color(ProgressTier::High.color()).strong();
        }
        let button = egui::Button::new(text)
            .selected(model.selected == Some(index))
            .min_size(egui::vec2(ui.available_width(), 30.0));
        if ui.add_enabled(answering, button).clicked() {
            msgs.push(StudentMsg::SelectAnswer(index));
        }
    }

    ui.add_space(8.0);
    match phase {
        QuestionPhase::Answering => {
            if ui
                .add_enabled(
                    model.selected.is_some(),
                    egui::Button::new("Submit Answer").min_size(egui::vec2(160.0, 30.0)),
                )
                .clicked()
            {
                msgs.push(StudentMsg::Submit);
            }
        }
        QuestionPhase::Submitted => {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Answer submitted, checking...");
            });
        }
        QuestionPhase::Revealed(outcome) => {
            let color = match outcome {
                Outcome::Correct => ProgressTier::High.color(),
                Outcome::Incorrect => ProgressTier::Low.color(),
                Outcome::NoAnswer => ProgressTier::Medium.color(),
            };
            ui.colored_label(color, outcome.message());
        }
        QuestionPhase::Waiting => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::sample_live_question;

    fn session() -> JoinRequest {
        JoinRequest {
            email: "ada@student.edu".into(),
            meeting_link: "https://meet.google.com/abc-defg-hij".into(),
            room_code: "742193".into(),
        }
    }

    /// Enter the dashboard and deliver the sample question.
    fn answering() -> (StudentDashboardModel, u64) {
        let mut model = StudentDashboardModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            StudentMsg::Enter {
                user_name: "Ada".into(),
                session: session(),
            },
            &mut cmds,
        );
        let visit = match cmds.pop() {
            Some(StudentCommand::DeliverQuestion { visit }) => visit,
            other => panic!("expected delivery command, got {other:?}"),
        };
        update(
            &mut model,
            StudentMsg::QuestionDelivered {
                visit,
                question: sample_live_question(),
            },
            &mut cmds,
        );
        assert_eq!(model.phase(), QuestionPhase::Answering);
        (model, visit)
    }

    #[test]
    fn countdown_advances_whole_seconds_from_ticks() {
        let (mut model, _) = answering();
        let mut cmds = Vec::new();

        update(&mut model, StudentMsg::Tick(Duration::from_millis(600)), &mut cmds);
        assert_eq!(model.remaining_secs(), 30);
        update(&mut model, StudentMsg::Tick(Duration::from_millis(600)), &mut cmds);
        assert_eq!(model.remaining_secs(), 29);
        update(&mut model, StudentMsg::Tick(Duration::from_millis(2800)), &mut cmds);
        assert_eq!(model.remaining_secs(), 26);
        assert!(cmds.is_empty());
    }

    #[test]
    fn reaching_zero_auto_submits_and_reveals_no_answer() {
        let (mut model, visit) = answering();
        let mut cmds = Vec::new();

        update(&mut model, StudentMsg::Tick(Duration::from_secs(31)), &mut cmds);

        assert_eq!(model.phase(), QuestionPhase::Submitted);
        assert_eq!(cmds, vec![StudentCommand::RevealResult { visit }]);

        update(&mut model, StudentMsg::ResultRevealed { visit }, &mut cmds);
        assert_eq!(model.phase(), QuestionPhase::Revealed(Outcome::NoAnswer));
    }

    #[test]
    fn manual_submit_judges_selection() {
        let (mut model, visit) = answering();
        let mut cmds = Vec::new();

        update(&mut model, StudentMsg::SelectAnswer(1), &mut cmds);
        update(&mut model, StudentMsg::Submit, &mut cmds);
        update(&mut model, StudentMsg::SelectAnswer(2), &mut cmds);
        update(&mut model, StudentMsg::ResultRevealed { visit }, &mut cmds);

        assert_eq!(model.selected(), Some(1), "selection is locked after submit");
        assert_eq!(model.phase(), QuestionPhase::Revealed(Outcome::Correct));
    }

    #[test]
    fn wrong_choice_is_incorrect() {
        let (mut model, visit) = answering();
        let mut cmds = Vec::new();

        update(&mut model, StudentMsg::SelectAnswer(3), &mut cmds);
        update(&mut model, StudentMsg::Submit, &mut cmds);
        update(&mut model, StudentMsg::ResultRevealed { visit }, &mut cmds);

        assert_eq!(model.phase(), QuestionPhase::Revealed(Outcome::Incorrect));
    }

    #[test]
    fn results_from_an_earlier_visit_are_ignored() {
        let (mut model, old_visit) = answering();
        let mut cmds = Vec::new();
        update(&mut model, StudentMsg::Logout, &mut cmds);
        update(
            &mut model,
            StudentMsg::Enter {
                user_name: "Ada".into(),
                session: session(),
            },
            &mut cmds,
        );

        update(
            &mut model,
            StudentMsg::QuestionDelivered {
                visit: old_visit,
                question: sample_live_question(),
            },
            &mut cmds,
        );

        assert_eq!(model.phase(), QuestionPhase::Waiting);
    }

    #[test]
    fn open_meeting_uses_session_link() {
        let (mut model, _) = answering();
        let mut cmds = Vec::new();

        update(&mut model, StudentMsg::OpenMeeting, &mut cmds);

        assert_eq!(
            cmds,
            vec![StudentCommand::OpenMeeting(session().meeting_link)]
        );
    }

    #[test]
    fn progress_tiers_follow_remaining_share() {
        assert_eq!(ProgressTier::for_remaining(30, 30), ProgressTier::High);
        assert_eq!(ProgressTier::for_remaining(18, 30), ProgressTier::Medium);
        assert_eq!(ProgressTier::for_remaining(10, 30), ProgressTier::Medium);
        assert_eq!(ProgressTier::for_remaining(9, 30), ProgressTier::Low);
        assert_eq!(ProgressTier::for_remaining(0, 0), ProgressTier::Low);
    }
}
