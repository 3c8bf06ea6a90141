//! Password reset request screen.

use eframe::egui;

use crate::models::join::is_email;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordModel {
    email: String,
    in_flight: bool,
    error: Option<String>,
    sent: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForgotPasswordMsg {
    EmailChanged(String),
    Submit,
    LinkSent(String),
    BackToLogin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForgotPasswordCommand {
    SendResetLink(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForgotPasswordEvent {
    BackToLogin,
}

pub fn update(
    model: &mut ForgotPasswordModel,
    msg: ForgotPasswordMsg,
    cmds: &mut Vec<ForgotPasswordCommand>,
) -> Option<ForgotPasswordEvent> {
    match msg {
        ForgotPasswordMsg::EmailChanged(text) => model.email = text,
        ForgotPasswordMsg::Submit => {
            if model.in_flight {
                return None;
            }
            let email = model.email.trim();
            if !is_email(email) {
                model.error = Some("Please enter a valid email address.".into());
                return None;
            }
            model.error = None;
            model.in_flight = true;
            cmds.push(ForgotPasswordCommand::SendResetLink(email.to_string()));
        }
        ForgotPasswordMsg::LinkSent(message) => {
            model.in_flight = false;
            model.sent = Some(message);
        }
        ForgotPasswordMsg::BackToLogin => {
            *model = ForgotPasswordModel::default();
            return Some(ForgotPasswordEvent::BackToLogin);
        }
    }
    None
}

pub fn view(ui: &mut egui::Ui, model: &ForgotPasswordModel) -> Vec<ForgotPasswordMsg> {
    let mut msgs = Vec::new();

    if let Some(message) = &model.sent {
        super::auth_card(ui, "Check Your Email", message, |ui| {
            ui.label("Didn't receive the email? Check your spam folder or try again.");
            ui.add_space(8.0);
            if ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new("Back to Login"))
                .clicked()
            {
                msgs.push(ForgotPasswordMsg::BackToLogin);
            }
        });
        return msgs;
    }

    super::auth_card(
        ui,
        "Reset Password",
        "Enter your email and we'll send you a reset link",
        |ui| {
            ui.label("Email");
            let mut email = model.email.clone();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut email)
                        .hint_text("Enter your email")
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                msgs.push(ForgotPasswordMsg::EmailChanged(email));
            }
            if let Some(err) = &model.error {
                ui.colored_label(egui::Color32::from_rgb(248, 113, 113), err);
            }
            ui.add_space(8.0);
            let label = if model.in_flight {
                "Sending..."
            } else {
                "Send Reset Link"
            };
            if ui
                .add_enabled(
                    !model.in_flight,
                    egui::Button::new(format!("{} {label}", egui_phosphor::regular::ENVELOPE))
                        .min_size(egui::vec2(ui.available_width(), 32.0)),
                )
                .clicked()
            {
                msgs.push(ForgotPasswordMsg::Submit);
            }
            ui.vertical_centered(|ui| {
                if ui
                    .link(format!("{} Back to Login", egui_phosphor::regular::ARROW_LEFT))
                    .clicked()
                {
                    msgs.push(ForgotPasswordMsg::BackToLogin);
                }
            });
        },
    );

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::auth;

    #[test]
    fn invalid_email_is_rejected_locally() {
        let mut model = ForgotPasswordModel::default();
        let mut cmds = Vec::new();
        update(&mut model, ForgotPasswordMsg::EmailChanged("nope".into()), &mut cmds);

        update(&mut model, ForgotPasswordMsg::Submit, &mut cmds);

        assert!(cmds.is_empty());
        assert!(model.error.is_some());
    }

    #[test]
    fn sent_link_switches_to_confirmation() {
        let mut model = ForgotPasswordModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            ForgotPasswordMsg::EmailChanged(" ada@student.edu ".into()),
            &mut cmds,
        );
        update(&mut model, ForgotPasswordMsg::Submit, &mut cmds);
        assert_eq!(
            cmds,
            vec![ForgotPasswordCommand::SendResetLink("ada@student.edu".into())]
        );

        let text = auth::send_reset_link("ada@student.edu");
        update(&mut model, ForgotPasswordMsg::LinkSent(text.clone()), &mut cmds);

        assert_eq!(model.sent, Some(text));
        assert!(!model.in_flight);
    }
}
