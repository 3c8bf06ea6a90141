// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Account registration screen.

use eframe::egui;

use crate::logic::auth::{self, Registration};
use crate::models::user::Role;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterModel {
    form: Registration,
    show_password: bool,
    in_flight: bool,
    error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterMsg {
    FullNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    RoleSelected(Role),
    TogglePasswordVisibility,
    Submit,
    Completed(String),
    BackToLogin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterCommand {
    Register(Registration),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterEvent {
    /// Registration went through; carries the confirmation text.
    Registered(String),
    BackToLogin,
}

pub fn update(
    model: &mut RegisterModel,
    msg: RegisterMsg,
    cmds: &mut Vec<RegisterCommand>,
) -> Option<RegisterEvent> {
    match msg {
        RegisterMsg::FullNameChanged(text) => model.form.full_name = text,
        RegisterMsg::EmailChanged(text) => model.form.email = text,
        RegisterMsg::PasswordChanged(text) => model.form.password = text,
        RegisterMsg::ConfirmPasswordChanged(text) => model.form.confirm_password = text,
        RegisterMsg::RoleSelected(role) => model.form.role = role,
        RegisterMsg::TogglePasswordVisibility => model.show_password = !model.show_password,
        RegisterMsg::Submit => {
            if model.in_flight {
                return None;
            }
            match auth::validate_registration(&model.form) {
                Ok(()) => {
                    model.error = None;
                    model.in_flight = true;
                    cmds.push(RegisterCommand::Register(model.form.clone()));
                }
                Err(err) => model.error = Some(err),
            }
        }
        RegisterMsg::Completed(message) => {
            *model = RegisterModel::default();
            return Some(RegisterEvent::Registered(message));
        }
        RegisterMsg::BackToLogin => return Some(RegisterEvent::BackToLogin),
    }
    None
}

pub fn view(ui: &mut egui::Ui, model: &RegisterModel) -> Vec<RegisterMsg> {
    let mut msgs = Vec::new();
    let form = &model.form;

    super::auth_card(ui, "Create Account", "Join PollPulse as a host or student", |ui| {
        if let Some(text) = text_row(ui, "Full Name", &form.full_name, "Enter your full name", false) {
            msgs.push(RegisterMsg::FullNameChanged(text));
        }
        if let Some(text) = text_row(ui, "Email", &form.email, "Enter your email", false) {
            msgs.push(RegisterMsg::EmailChanged(text));
        }

        ui.label("Role");
        if let Some(role) = super::role_picker(ui, form.role) {
            msgs.push(RegisterMsg::RoleSelected(role));
        }

        let hidden = !model.show_password;
        if let Some(text) = text_row(ui, "Password", &form.password, "Create a password", hidden) {
            msgs.push(RegisterMsg::PasswordChanged(text));
        }
        if let Some(text) = text_row(
            ui,
            "Confirm Password",
            &form.confirm_password,
            "Confirm your password",
            hidden,
        ) {
            msgs.push(RegisterMsg::ConfirmPasswordChanged(text));
        }
        let mut show = model.show_password;
        if ui.checkbox(&mut show, "Show passwords").changed() {
            msgs.push(RegisterMsg::TogglePasswordVisibility);
        }

        if let Some(err) = &model.error {
            ui.colored_label(egui::Color32::from_rgb(248, 113, 113), err);
        }

        ui.add_space(8.0);
        let label = if model.in_flight {
            "Creating Account..."
        } else {
            "Create Account"
        };
        if ui
            .add_enabled(
                !model.in_flight,
                egui::Button::new(format!("{} {label}", egui_phosphor::regular::USER_PLUS))
                    .min_size(egui::vec2(ui.available_width(), 32.0)),
            )
            .clicked()
        {
            msgs.push(RegisterMsg::Submit);
        }

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label("Already have an account?");
                if ui.link("Sign in").clicked() {
                    msgs.push(RegisterMsg::BackToLogin);
                }
            });
        });
    });

    msgs
}

/// Labelled single-line input; returns the new text when edited.
fn text_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    hint: &str,
    password: bool,
) -> Option<String> {
    ui.label(label);
    let mut text = value.to_string();
    ui.add(
        egui::TextEdit::singleline(&mut text)
            .password(password)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
    .changed()
    .then_some(text)
}
