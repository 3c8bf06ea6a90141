// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Collapsible host navigation.

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::models::user::User;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HostSection {
    #[default]
    Dashboard,
    AudioCapture,
    Questions,
    Participants,
    Leaderboard,
    Settings,
}

impl HostSection {
    pub const ALL: [HostSection; 6] = [
        HostSection::Dashboard,
        HostSection::AudioCapture,
        HostSection::Questions,
        HostSection::Participants,
        HostSection::Leaderboard,
        HostSection::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HostSection::Dashboard => "Dashboard",
            HostSection::AudioCapture => "Audio Capture",
            HostSection::Questions => "AI Questions",
            HostSection::Participants => "Participants",
            HostSection::Leaderboard => "Leaderboard",
            HostSection::Settings => "Settings",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            HostSection::Dashboard => icons::SQUARES_FOUR,
            HostSection::AudioCapture => icons::MICROPHONE,
            HostSection::Questions => icons::SPARKLE,
            HostSection::Participants => icons::USERS,
            HostSection::Leaderboard => icons::TROPHY,
            HostSection::Settings => icons::GEAR,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarModel {
    pub active: HostSection,
    pub collapsed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarMsg {
    Select(HostSection),
    ToggleCollapsed,
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarEvent {
    LoggedOut,
}

pub fn update(model: &mut SidebarModel, msg: SidebarMsg) -> Option<SidebarEvent> {
    match msg {
        SidebarMsg::Select(section) => model.active = section,
        SidebarMsg::ToggleCollapsed => model.collapsed = !model.collapsed,
        SidebarMsg::Logout => {
            *model = SidebarModel::default();
            return Some(SidebarEvent::LoggedOut);
        }
    }
    None
}

pub fn view(ui: &mut egui::Ui, model: &SidebarModel, user: Option<&User>) -> Vec<SidebarMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        if !model.collapsed {
            ui.label(
                egui::RichText::new(format!("{} PollPulse", icons::CHART_BAR))
                    .strong()
                    .color(super::ACCENT),
            );
        }
        let caret = if model.collapsed {
            icons::CARET_RIGHT
        } else {
            icons::CARET_LEFT
        };
        if ui.small_button(caret).clicked() {
            msgs.push(SidebarMsg::ToggleCollapsed);
        }
    });
    ui.separator();

    for section in HostSection::ALL {
        let text = if model.collapsed {
            section.icon().to_string()
        } else {
            format!("{} {}", section.icon(), section.label())
        };
        let button = egui::Button::new(text)
            .selected(model.active == section)
            .min_size(egui::vec2(ui.available_width(), 28.0));
        let response = ui.add(button).on_hover_text(section.label());
        if response.clicked() {
            msgs.push(SidebarMsg::Select(section));
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        let logout = if model.collapsed {
            icons::SIGN_OUT.to_string()
        } else {
            format!("{} Logout", icons::SIGN_OUT)
        };
        if ui.button(logout).clicked() {
            msgs.push(SidebarMsg::Logout);
        }
        if !model.collapsed
            && let Some(user) = user
        {
            ui.label(egui::RichText::new(&user.email).small().weak());
            ui.label(egui::RichText::new(&user.name).strong());
        }
        ui.separator();
    });

    msgs
}
