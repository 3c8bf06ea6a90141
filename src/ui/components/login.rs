// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Sign-in screen with role selection.

use eframe::egui;

use crate::logic::auth;
use crate::models::user::{Role, User};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginModel {
    email: String,
    password: String,
    role: Role,
    show_password: bool,
    in_flight: bool,
    error: Option<String>,
}

impl LoginModel {
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginMsg {
    EmailChanged(String),
    PasswordChanged(String),
    RoleSelected(Role),
    TogglePasswordVisibility,
    Submit,
    SignedIn(User),
    OpenRegister,
    OpenForgotPassword,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginCommand {
    SignIn { email: String, role: Role },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    LoggedIn(User),
    ShowRegister,
    ShowForgotPassword,
}

pub fn update(
    model: &mut LoginModel,
    msg: LoginMsg,
    cmds: &mut Vec<LoginCommand>,
) -> Option<LoginEvent> {
    match msg {
        LoginMsg::EmailChanged(text) => model.email = text,
        LoginMsg::PasswordChanged(text) => model.password = text,
        LoginMsg::RoleSelected(role) => model.role = role,
        LoginMsg::TogglePasswordVisibility => model.show_password = !model.show_password,
        LoginMsg::Submit => {
            if model.in_flight {
                return None;
            }
            match auth::validate_login(&model.email, &model.password) {
                Ok(()) => {
                    model.error = None;
                    model.in_flight = true;
                    cmds.push(LoginCommand::SignIn {
                        email: model.email.trim().to_string(),
                        role: model.role,
                    });
                }
                Err(err) => model.error = Some(err),
            }
        }
        LoginMsg::SignedIn(user) => {
            // Reset the form so a later logout shows an empty screen.
            *model = LoginModel {
                role: user.role,
                ..Default::default()
            };
            return Some(LoginEvent::LoggedIn(user));
        }
        LoginMsg::OpenRegister => return Some(LoginEvent::ShowRegister),
        LoginMsg::OpenForgotPassword => return Some(LoginEvent::ShowForgotPassword),
    }
    None
}

pub fn view(ui: &mut egui::Ui, model: &LoginModel) -> Vec<LoginMsg> {
    let mut msgs = Vec::new();

    super::auth_card(ui, "Welcome Back", "Sign in to your PollPulse account", |ui| {
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
            msgs.push(LoginMsg::EmailChanged(email));
        }

        ui.label("Password");
        ui.horizontal(|ui| {
            let mut password = model.password.clone();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut password)
                        .password(!model.show_password)
                        .hint_text("Enter your password")
                        .desired_width(ui.available_width() - 36.0),
                )
                .changed()
            {
                msgs.push(LoginMsg::PasswordChanged(password));
            }
            let icon = if model.show_password {
                egui_phosphor::regular::EYE_SLASH
            } else {
                egui_phosphor::regular::EYE
            };
            if ui.button(icon).on_hover_text("Show/hide password").clicked() {
                msgs.push(LoginMsg::TogglePasswordVisibility);
            }
        });

        ui.label("Role");
        if let Some(role) = super::role_picker(ui, model.role) {
            msgs.push(LoginMsg::RoleSelected(role));
        }

        if let Some(err) = &model.error {
            ui.colored_label(egui::Color32::from_rgb(248, 113, 113), err);
        }

        ui.add_space(8.0);
        let label = if model.in_flight { "Signing In..." } else { "Sign In" };
        if ui
            .add_enabled(
                !model.in_flight,
                egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 32.0)),
            )
            .clicked()
        {
            msgs.push(LoginMsg::Submit);
        }

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if ui.link("Forgot your password?").clicked() {
                msgs.push(LoginMsg::OpenForgotPassword);
            }
            ui.horizontal(|ui| {
                ui.label("Don't have an account?");
                if ui.link("Sign up").clicked() {
                    msgs.push(LoginMsg::OpenRegister);
                }
            });
        });
    });

    msgs
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use super::*;

    #[test]
    fn submit_with_valid_input_enqueues_sign_in() {
        let mut model = LoginModel::default();
        let mut cmds = Vec::new();
        update(&mut model, LoginMsg::EmailChanged("host@school.edu".into()), &mut cmds);
        update(&mut model, LoginMsg::PasswordChanged("secret".into()), &mut cmds);
        update(&mut model, LoginMsg::RoleSelected(Role::Host), &mut cmds);

        update(&mut model, LoginMsg::Submit, &mut cmds);

        assert!(model.is_loading());
        assert_eq!(
            cmds,
            vec![LoginCommand::SignIn {
                email: "host@school.edu".into(),
                role: Role::Host,
            }]
        );
    }

    #[test]
    fn submit_without_password_shows_error() {
        let mut model = LoginModel::default();
        model.email = "ada@student.edu".into();
        let mut cmds = Vec::new();

        update(&mut model, LoginMsg::Submit, &mut cmds);

        assert!(cmds.is_empty());
        assert!(model.error.is_some());
        assert!(!model.is_loading());
    }

    #[test]
    fn signed_in_resets_form_and_reports_user() {
        let mut model = LoginModel::default();
        model.password = "secret".into();
        model.in_flight = true;
        let user = auth::sign_in("ada@student.edu", Role::Student);
        let mut cmds = Vec::new();

        let event = update(&mut model, LoginMsg::SignedIn(user.clone()), &mut cmds);

        assert_eq!(event, Some(LoginEvent::LoggedIn(user)));
        assert!(model.password.is_empty());
        assert!(!model.is_loading());
    }
}
