// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Student join flow: form → validating → success | denied, in MVU shape.
//!
//! Submitting runs the local field guard first; only a clean form moves to
//! `Validating` and enqueues a verification command. A grant is handed to the
//! parent exactly once, after the success screen has been shown.

use eframe::egui;

use crate::models::join::{
    self, DenialReason, FieldErrors, JoinField, JoinRequest, ROOM_CODE_LEN, Verdict,
};

/// Where the join flow currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinStep {
    #[default]
    Form,
    Validating,
    Success,
    Denied(DenialReason),
}

/// UI model for the join screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinRoomModel {
    email: String,
    meeting_link: String,
    room_code: String,
    errors: FieldErrors,
    step: JoinStep,
    /// Incremented on every submit; stale verification results are dropped.
    attempt: u64,
    /// Request under verification, or the granted one.
    submitted: Option<JoinRequest>,
    handed_off: bool,
}

/// Messages emitted by the join view or returned by join commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinMsg {
    EmailChanged(String),
    MeetingLinkChanged(String),
    RoomCodeChanged(String),
    Submit,
    VerificationFinished { attempt: u64, verdict: Verdict },
    SuccessShown { attempt: u64 },
    Retry,
    BackToHome,
}

/// Side effects requested by the join flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinCommand {
    /// Verify the request after the simulated network delay.
    Verify { attempt: u64, request: JoinRequest },
    /// Keep the success screen up for a moment, then report back.
    HoldSuccess { attempt: u64 },
}

/// Outcomes the parent must act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinEvent {
    Granted(JoinRequest),
    Left,
}

impl JoinRoomModel {
    /// Start with the room code field pre-filled (e.g. from a deep link).
    pub fn with_room_code(code: &str) -> Self {
        Self {
            room_code: join::sanitize_room_code_input(code),
            ..Default::default()
        }
    }

    pub fn step(&self) -> JoinStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn meeting_link(&self) -> &str {
        &self.meeting_link
    }

    pub fn room_code(&self) -> &str {
        &self.room_code
    }

    fn current_request(&self) -> JoinRequest {
        JoinRequest {
            email: self.email.clone(),
            meeting_link: self.meeting_link.clone(),
            room_code: self.room_code.clone(),
        }
    }
}

/// Apply a message to the join model, enqueue commands, and report outcomes to the parent.
pub fn update(
    model: &mut JoinRoomModel,
    msg: JoinMsg,
    cmds: &mut Vec<JoinCommand>,
) -> Option<JoinEvent> {
    match msg {
        JoinMsg::EmailChanged(text) => {
            if model.step == JoinStep::Form {
                model.email = text;
            }
            None
        }
        JoinMsg::MeetingLinkChanged(text) => {
            if model.step == JoinStep::Form {
                model.meeting_link = text;
            }
            None
        }
        JoinMsg::RoomCodeChanged(text) => {
            if model.step == JoinStep::Form {
                model.room_code = join::sanitize_room_code_input(&text);
            }
            None
        }
        JoinMsg::Submit => {
            submit(model, cmds);
            None
        }
        JoinMsg::VerificationFinished { attempt, verdict } => {
            if attempt != model.attempt || model.step != JoinStep::Validating {
                log::debug!("Dropping stale verification result for attempt {attempt}");
                return None;
            }
            match verdict {
                Verdict::Granted => {
                    log::info!("Join attempt {attempt} granted");
                    model.step = JoinStep::Success;
                    cmds.push(JoinCommand::HoldSuccess { attempt });
                }
                Verdict::Denied(reason) => {
                    log::info!("Join attempt {attempt} denied: {reason}");
                    model.step = JoinStep::Denied(reason);
                    model.submitted = None;
                }
            }
            None
        }
        JoinMsg::SuccessShown { attempt } => {
            if attempt != model.attempt || model.step != JoinStep::Success || model.handed_off {
                return None;
            }
            model.handed_off = true;
            model.submitted.clone().map(JoinEvent::Granted)
        }
        JoinMsg::Retry => {
            if matches!(model.step, JoinStep::Denied(_)) {
                model.step = JoinStep::Form;
                model.errors.clear();
                model.submitted = None;
            }
            None
        }
        JoinMsg::BackToHome => Some(JoinEvent::Left),
    }
}

/// Run the local guard and, when it passes, start verification.
fn submit(model: &mut JoinRoomModel, cmds: &mut Vec<JoinCommand>) {
    if model.step != JoinStep::Form {
        return;
    }

    let request = model.current_request();
    if let Err(errors) = join::check_form(&request) {
        model.errors = errors;
        return;
    }

    model.errors.clear();
    model.attempt += 1;
    model.step = JoinStep::Validating;
    model.submitted = Some(request.clone());
    log::info!("Join attempt {} submitted for room {}", model.attempt, request.room_code);
    cmds.push(JoinCommand::Verify {
        attempt: model.attempt,
        request,
    });
}

/// Render the join flow and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &JoinRoomModel) -> Vec<JoinMsg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.set_max_width(420.0);
        ui.add_space(40.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            match model.step {
                JoinStep::Form => render_form(ui, model, &mut msgs),
                JoinStep::Validating => render_validating(ui),
                JoinStep::Success => render_success(ui),
                JoinStep::Denied(reason) => render_denied(ui, reason, &mut msgs),
            }
        });
    });

    msgs
}

fn render_form(ui: &mut egui::Ui, model: &JoinRoomModel, msgs: &mut Vec<JoinMsg>) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(egui_phosphor::regular::KEY).size(32.0));
        ui.heading("Join PollPulse");
        ui.label("Enter your details to access the poll session");
    });
    ui.add_space(12.0);

    let mut email = model.email.clone();
    if labelled_input(ui, "Email Address", egui_phosphor::regular::ENVELOPE, |ui| {
        ui.add(
            egui::TextEdit::singleline(&mut email)
                .hint_text("your.email@student.edu")
                .desired_width(f32::INFINITY),
        )
    }) {
        msgs.push(JoinMsg::EmailChanged(email));
    }
    render_field_error(ui, model, JoinField::Email);

    let mut link = model.meeting_link.clone();
    if labelled_input(ui, "Meeting Link", egui_phosphor::regular::GLOBE, |ui| {
        ui.add(
            egui::TextEdit::singleline(&mut link)
                .hint_text("https://meet.google.com/xxx-xxxx-xxx")
                .desired_width(f32::INFINITY),
        )
    }) {
        msgs.push(JoinMsg::MeetingLinkChanged(link));
    }
    render_field_error(ui, model, JoinField::MeetingLink);

    let mut code = model.room_code.clone();
    if labelled_input(ui, "Room Code", egui_phosphor::regular::KEY, |ui| {
        ui.add(
            egui::TextEdit::singleline(&mut code)
                .hint_text("000000")
                .char_limit(ROOM_CODE_LEN)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        )
    }) {
        msgs.push(JoinMsg::RoomCodeChanged(code));
    }
    render_field_error(ui, model, JoinField::RoomCode);

    ui.add_space(12.0);
    let submit = ui.add_sized(
        [ui.available_width(), 32.0],
        egui::Button::new("Join Session"),
    );
    let enter = ui.input(|inp| inp.key_pressed(egui::Key::Enter));
    if submit.clicked() || enter {
        msgs.push(JoinMsg::Submit);
    }

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Need help? Contact your instructor")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    });
}

/// Label plus icon-prefixed input row. Returns whether the input changed.
fn labelled_input(
    ui: &mut egui::Ui,
    label: &str,
    icon: &str,
    add: impl FnOnce(&mut egui::Ui) -> egui::Response,
) -> bool {
    ui.label(label);
    ui.horizontal(|ui| {
        ui.label(icon);
        add(ui).changed()
    })
    .inner
}

fn render_field_error(ui: &mut egui::Ui, model: &JoinRoomModel, field: JoinField) {
    if let Some(err) = model.errors.get(field) {
        ui.colored_label(egui::Color32::from_rgb(248, 113, 113), err.to_string());
    }
    ui.add_space(6.0);
}

fn render_validating(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add(egui::Spinner::new().size(32.0));
        ui.heading("Validating Access");
        ui.label("Checking email registration");
        ui.label("Verifying room code");
        ui.label("Validating meeting link");
    });
}

fn render_success(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                .size(36.0)
                .color(egui::Color32::from_rgb(34, 197, 94)),
        );
        ui.heading("Access Granted!");
        ui.label("Welcome to the poll session. Redirecting...");
        ui.add(egui::Spinner::new());
    });
}

fn render_denied(ui: &mut egui::Ui, reason: DenialReason, msgs: &mut Vec<JoinMsg>) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                .size(36.0)
                .color(egui::Color32::from_rgb(239, 68, 68)),
        );
        ui.heading("Access Denied");
        ui.label(reason.to_string());
        ui.add_space(10.0);
        if ui
            .add_sized([ui.available_width(), 30.0], egui::Button::new("Try Again"))
            .clicked()
        {
            msgs.push(JoinMsg::Retry);
        }
        if ui
            .add_sized(
                [ui.available_width(), 30.0],
                egui::Button::new(format!("{} Back to Home", egui_phosphor::regular::ARROW_LEFT)),
            )
            .clicked()
        {
            msgs.push(JoinMsg::BackToHome);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::join::FieldError;

    const GOOD_LINK: &str = "https://meet.google.com/abc-defg-hij";

    fn filled(email: &str, link: &str, code: &str) -> JoinRoomModel {
        let mut model = JoinRoomModel::default();
        let mut cmds = Vec::new();
        update(&mut model, JoinMsg::EmailChanged(email.into()), &mut cmds);
        update(&mut model, JoinMsg::MeetingLinkChanged(link.into()), &mut cmds);
        update(&mut model, JoinMsg::RoomCodeChanged(code.into()), &mut cmds);
        assert!(cmds.is_empty());
        model
    }

    /// Submit and return the verification command's attempt and request.
    fn submit_ok(model: &mut JoinRoomModel) -> (u64, JoinRequest) {
        let mut cmds = Vec::new();
        assert_eq!(update(model, JoinMsg::Submit, &mut cmds), None);
        assert_eq!(model.step(), JoinStep::Validating);
        match cmds.pop() {
            Some(JoinCommand::Verify { attempt, request }) => (attempt, request),
            other => panic!("expected verify command, got {other:?}"),
        }
    }

    #[test]
    fn malformed_fields_stay_on_form_without_commands() {
        let cases = [
            ("ada.student.edu", GOOD_LINK, "742193", JoinField::Email),
            ("ada@student.edu", "", "742193", JoinField::MeetingLink),
            ("ada@student.edu", GOOD_LINK, "74219", JoinField::RoomCode),
        ];

        for (email, link, code, field) in cases {
            let mut model = filled(email, link, code);
            let mut cmds = Vec::new();

            update(&mut model, JoinMsg::Submit, &mut cmds);

            assert!(cmds.is_empty(), "guard must not enqueue work");
            assert_eq!(model.step(), JoinStep::Form);
            assert!(model.errors().get(field).is_some(), "expected error on {field:?}");
        }
    }

    #[test]
    fn grant_is_handed_off_exactly_once_with_original_values() {
        let mut model = filled("ada@student.edu", GOOD_LINK, "742193");
        let (attempt, request) = submit_ok(&mut model);

        let mut cmds = Vec::new();
        update(
            &mut model,
            JoinMsg::VerificationFinished {
                attempt,
                verdict: Verdict::Granted,
            },
            &mut cmds,
        );
        assert_eq!(model.step(), JoinStep::Success);
        assert_eq!(cmds, vec![JoinCommand::HoldSuccess { attempt }]);

        let first = update(&mut model, JoinMsg::SuccessShown { attempt }, &mut cmds);
        let second = update(&mut model, JoinMsg::SuccessShown { attempt }, &mut cmds);

        assert_eq!(
            first,
            Some(JoinEvent::Granted(JoinRequest {
                email: "ada@student.edu".into(),
                meeting_link: GOOD_LINK.into(),
                room_code: "742193".into(),
            }))
        );
        assert_eq!(first, Some(JoinEvent::Granted(request)));
        assert_eq!(second, None);
    }

    #[test]
    fn denial_then_retry_returns_to_form_with_values_kept() {
        let mut model = filled("ada@student.edu", GOOD_LINK, "111111");
        let (attempt, _) = submit_ok(&mut model);
        let mut cmds = Vec::new();

        update(
            &mut model,
            JoinMsg::VerificationFinished {
                attempt,
                verdict: Verdict::Denied(DenialReason::InvalidRoomCode),
            },
            &mut cmds,
        );
        assert_eq!(model.step(), JoinStep::Denied(DenialReason::InvalidRoomCode));
        assert!(cmds.is_empty());

        update(&mut model, JoinMsg::Retry, &mut cmds);

        assert_eq!(model.step(), JoinStep::Form);
        assert!(model.errors().is_empty());
        assert_eq!(model.email(), "ada@student.edu");
        assert_eq!(model.meeting_link(), GOOD_LINK);
        assert_eq!(model.room_code(), "111111");
    }

    #[test]
    fn retry_clears_previous_field_errors() {
        let mut model = filled("bad", GOOD_LINK, "742193");
        let mut cmds = Vec::new();
        update(&mut model, JoinMsg::Submit, &mut cmds);
        assert_eq!(model.errors().get(JoinField::Email), Some(FieldError::EmailInvalid));

        update(&mut model, JoinMsg::EmailChanged("ada@student.edu".into()), &mut cmds);
        let (attempt, _) = submit_ok(&mut model);
        assert!(model.errors().is_empty());

        update(
            &mut model,
            JoinMsg::VerificationFinished {
                attempt,
                verdict: Verdict::Denied(DenialReason::InvalidMeetingLink),
            },
            &mut cmds,
        );
        update(&mut model, JoinMsg::Retry, &mut cmds);
        assert!(model.errors().is_empty());
        assert_eq!(model.step(), JoinStep::Form);
    }

    #[test]
    fn stale_verification_results_are_ignored() {
        let mut model = filled("ada@student.edu", GOOD_LINK, "742193");
        let (attempt, _) = submit_ok(&mut model);
        let mut cmds = Vec::new();

        update(
            &mut model,
            JoinMsg::VerificationFinished {
                attempt: attempt + 7,
                verdict: Verdict::Granted,
            },
            &mut cmds,
        );

        assert_eq!(model.step(), JoinStep::Validating);
        assert!(cmds.is_empty());
    }

    #[test]
    fn fields_are_locked_while_validating() {
        let mut model = filled("ada@student.edu", GOOD_LINK, "742193");
        submit_ok(&mut model);
        let mut cmds = Vec::new();

        update(&mut model, JoinMsg::EmailChanged("x@y.z".into()), &mut cmds);
        update(&mut model, JoinMsg::Submit, &mut cmds);

        assert_eq!(model.email(), "ada@student.edu");
        assert!(cmds.is_empty(), "double submit must not enqueue a second verification");
    }

    #[test]
    fn room_code_input_keeps_digits_only() {
        let model = filled("ada@student.edu", GOOD_LINK, "74 21-93 77");
        assert_eq!(model.room_code(), "742193");
    }

    #[test]
    fn prefilled_room_code_is_sanitized() {
        let model = JoinRoomModel::with_room_code("742193abc");
        assert_eq!(model.room_code(), "742193");
        assert_eq!(model.step(), JoinStep::Form);
    }

    #[test]
    fn back_to_home_leaves_the_flow() {
        let mut model = JoinRoomModel::default();
        let mut cmds = Vec::new();
        assert_eq!(
            update(&mut model, JoinMsg::BackToHome, &mut cmds),
            Some(JoinEvent::Left)
        );
    }
}
