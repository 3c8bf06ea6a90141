// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Top-level egui application shell for the PollPulse client.
//! Handles screen layout, the worker pool, frame ticks, and user feedback.

pub mod components;

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::AppConfig;
use crate::models::settings::HostSettings;
use crate::mvu::{self, AppModel, Command, CommandEnv, Msg, Screen};
use crate::ui::components::sidebar::HostSection;
use crate::ui::components::{
    audio_capture, forgot_password, join_room, leaderboard, loader, login, overview, participants,
    question_feed, register, settings, sidebar, student_dashboard,
};

/// Longest frame gap fed into timers; keeps countdowns sane after a stall.
const MAX_TICK: Duration = Duration::from_millis(250);
/// Repaint cadence while something time-driven is on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Stateful egui application driving the MVU kernel.
pub struct PollPulseApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
    last_frame: Instant,
    dark_mode: Option<bool>,
}

impl PollPulseApp {
    pub fn new(ctx: &egui::Context, config: &AppConfig, settings: HostSettings) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();
        let env = Arc::new(CommandEnv::new(config));

        // Commands mostly sleep, so a few more workers than cores is fine.
        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(4))
            .unwrap_or(4);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let env = Arc::clone(&env);
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    log::debug!("Running {cmd:?}");
                    let msg = mvu::run_command(cmd, &env);
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                    ctx.request_repaint();
                }
            });
        }
        log::info!("Started {threads} command workers");

        Self {
            model: AppModel::new(config, settings),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
            last_frame: Instant::now(),
            dark_mode: None,
        }
    }
}

impl eframe::App for PollPulseApp {
    /// Feeds elapsed time and worker results into the model and dispatches
    /// resulting commands. Runs before every `ui` call.
    fn logic(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).min(MAX_TICK);
        self.last_frame = now;
        self.inbox.insert(0, Msg::Tick(dt));

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        if self.needs_ticks() {
            ctx.request_repaint_after(TICK_INTERVAL);
        }
    }

    /// Renders the active screen. Messages produced by views are handled on
    /// the next pass, which is requested right away.
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        self.render_error_modal(&ctx);

        if self.model.user.is_some() || self.model.status.is_some() {
            egui::Panel::bottom("status_panel")
                .resizable(false)
                .show_inside(ui, |ui| self.render_status(ui));
        }

        match self.model.screen {
            Screen::HostDashboard => self.render_host(ui),
            screen => {
                egui::CentralPanel::default().show_inside(ui, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| self.render_screen(ui, screen));
                });
            }
        }

        wake_for_queued(&ctx, &self.inbox);
    }
}

/// Messages queued by views are folded in on the next pass; ask for it now
/// instead of waiting for input.
fn wake_for_queued(ctx: &egui::Context, inbox: &[Msg]) {
    if !inbox.is_empty() {
        ctx.request_repaint();
    }
}

impl PollPulseApp {
    fn apply_theme(&mut self, ctx: &egui::Context) {
        let dark = self.model.settings.applied().dark_mode;
        if self.dark_mode != Some(dark) {
            ctx.set_visuals(if dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            ctx.style_mut(|style| {
                style.spacing.item_spacing = egui::vec2(6.0, 6.0);
            });
            self.dark_mode = Some(dark);
        }
    }

    /// Whether a countdown, recorder, or loader is advancing on screen.
    fn needs_ticks(&self) -> bool {
        match self.model.screen {
            Screen::Loading | Screen::StudentDashboard => true,
            Screen::HostDashboard => {
                self.model.audio.state() == audio_capture::RecorderState::Recording
            }
            _ => self.model.pending_commands > 0,
        }
    }

    fn render_screen(&mut self, ui: &mut egui::Ui, screen: Screen) {
        let model = &self.model;
        match screen {
            Screen::Loading => loader::view(ui, &model.loader),
            Screen::Login => {
                let msgs = login::view(ui, &model.login);
                self.inbox.extend(msgs.into_iter().map(Msg::Login));
            }
            Screen::Register => {
                let msgs = register::view(ui, &model.register);
                self.inbox.extend(msgs.into_iter().map(Msg::Register));
            }
            Screen::ForgotPassword => {
                let msgs = forgot_password::view(ui, &model.forgot_password);
                self.inbox.extend(msgs.into_iter().map(Msg::ForgotPassword));
            }
            Screen::JoinRoom => {
                let msgs = join_room::view(ui, &model.join);
                self.inbox.extend(msgs.into_iter().map(Msg::Join));
            }
            Screen::StudentDashboard => {
                let msgs = student_dashboard::view(ui, &model.student);
                self.inbox.extend(msgs.into_iter().map(Msg::Student));
            }
            Screen::HostDashboard => {}
        }
    }

    /// Sidebar plus the active host section.
    fn render_host(&mut self, ui: &mut egui::Ui) {
        let width = if self.model.sidebar.collapsed {
            56.0
        } else {
            210.0
        };
        egui::Panel::left("host_sidebar")
            .resizable(false)
            .exact_size(width)
            .show_inside(ui, |ui| {
                let msgs = sidebar::view(ui, &self.model.sidebar, self.model.user.as_ref());
                self.inbox.extend(msgs.into_iter().map(Msg::Sidebar));
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let model = &self.model;
                match model.sidebar.active {
                    HostSection::Dashboard => {
                        let msgs = overview::view(ui, &model.overview);
                        self.inbox.extend(msgs.into_iter().map(Msg::Overview));
                    }
                    HostSection::AudioCapture => {
                        let msgs = audio_capture::view(ui, &model.audio);
                        self.inbox.extend(msgs.into_iter().map(Msg::Audio));
                    }
                    HostSection::Questions => {
                        let msgs = question_feed::view(ui, &model.questions);
                        self.inbox.extend(msgs.into_iter().map(Msg::Questions));
                    }
                    HostSection::Participants => {
                        let msgs = participants::view(ui, &model.participants);
                        self.inbox.extend(msgs.into_iter().map(Msg::Participants));
                    }
                    HostSection::Leaderboard => {
                        let msgs = leaderboard::view(ui, &model.leaderboard);
                        self.inbox.extend(msgs.into_iter().map(Msg::Leaderboard));
                    }
                    HostSection::Settings => {
                        let msgs = settings::view(ui, &model.settings);
                        self.inbox.extend(msgs.into_iter().map(Msg::Settings));
                    }
                }
            });
        });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Something went wrong")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message and background work indicator.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(user) = &self.model.user {
                ui.label(
                    egui::RichText::new(format!(
                        "{} {} ({})",
                        egui_phosphor::regular::USER_CIRCLE,
                        user.name,
                        user.role.label()
                    ))
                    .small(),
                );
                ui.separator();
            }
            if let Some(text) = &self.model.status {
                ui.label(egui::RichText::new(text.as_str()).color(egui::Color32::from_gray(120)));
            }
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_view_messages_request_another_pass() {
        let idle = egui::Context::default();
        wake_for_queued(&idle, &[]);
        assert!(!idle.has_requested_repaint());

        let busy = egui::Context::default();
        wake_for_queued(&busy, &[Msg::DismissError]);
        assert!(busy.has_requested_repaint());
    }
}
