// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Business logic behind the screens: access verification, simulated services, and file export.

pub mod auth;
pub mod generator;
pub mod report;
pub mod room;
pub mod settings_store;
pub mod verifier;
