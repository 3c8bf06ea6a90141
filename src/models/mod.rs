// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Domain layer: pure data types and validation helpers shared between UI and logic.

pub mod join;
pub mod leaderboard;
pub mod participant;
pub mod question;
pub mod settings;
pub mod user;
