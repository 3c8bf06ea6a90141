// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Simulated account service: sign-in, registration, and password reset.
//!
//! There is no backend; every call succeeds with canned data once the
//! caller-side checks have passed.

use crate::models::join::is_email;
use crate::models::user::{Role, User};

/// Registration form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Sign a user in. The mock account always resolves to the same profile.
pub fn sign_in(email: &str, role: Role) -> User {
    log::info!("Signed in {email} as {}", role.label());
    User {
        id: "1".into(),
        name: "John Doe".into(),
        email: email.trim().to_string(),
        role,
    }
}

/// Validate login input before the simulated request.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter your email and password.".into());
    }
    if !is_email(email) {
        return Err("Please enter a valid email address.".into());
    }
    Ok(())
}

/// Validate a registration form before the simulated request.
pub fn validate_registration(form: &Registration) -> Result<(), String> {
    if form.full_name.trim().is_empty() {
        return Err("Please enter your full name.".into());
    }
    if !is_email(form.email.trim()) {
        return Err("Please enter a valid email address.".into());
    }
    if form.password.is_empty() || form.confirm_password.is_empty() {
        return Err("Please enter and confirm your password.".into());
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

/// Register an account and return the confirmation shown to the user.
pub fn register(form: &Registration) -> String {
    log::info!(
        "Registered {} as {}",
        form.email.trim(),
        form.role.label()
    );
    "Registration successful! Please check your email to verify your account.".into()
}

/// Request a password reset link and return the confirmation text.
pub fn send_reset_link(email: &str) -> String {
    log::info!("Password reset requested for {}", email.trim());
    format!("We've sent a password reset link to {}", email.trim())
}
