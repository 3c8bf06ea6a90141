// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Host preferences form with save and reset.

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::models::settings::{AUDIO_INPUTS, HostSettings, LANGUAGES, THEMES, TIMER_RANGE};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsModel {
    /// Values being edited.
    draft: HostSettings,
    /// Values last written to disk.
    saved: HostSettings,
    saving: bool,
}

impl SettingsModel {
    pub fn new(saved: HostSettings) -> Self {
        Self {
            draft: saved.clone(),
            saved,
            saving: false,
        }
    }

    pub fn draft(&self) -> &HostSettings {
        &self.draft
    }

    /// Settings currently in effect.
    pub fn applied(&self) -> &HostSettings {
        &self.saved
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsMsg {
    DarkMode(bool),
    DefaultTimer(u32),
    AutoLaunch(bool),
    ScreenshotDetection(bool),
    AudioInput(String),
    Theme(String),
    Notifications(bool),
    AutoSave(bool),
    Language(String),
    Save,
    Saved(Result<(), String>),
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsCommand {
    Persist(HostSettings),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEvent {
    /// New settings were written and are now in effect.
    Applied(HostSettings),
    Notice(String),
    Error(String),
}

pub fn update(
    model: &mut SettingsModel,
    msg: SettingsMsg,
    cmds: &mut Vec<SettingsCommand>,
) -> Option<SettingsEvent> {
    match msg {
        SettingsMsg::DarkMode(on) => model.draft.dark_mode = on,
        SettingsMsg::DefaultTimer(secs) => {
            model.draft.default_timer_secs = secs.clamp(*TIMER_RANGE.start(), *TIMER_RANGE.end());
        }
        SettingsMsg::AutoLaunch(on) => model.draft.auto_launch = on,
        SettingsMsg::ScreenshotDetection(on) => model.draft.screenshot_detection = on,
        SettingsMsg::AudioInput(name) => model.draft.audio_input = name,
        SettingsMsg::Theme(name) => model.draft.theme = name,
        SettingsMsg::Notifications(on) => model.draft.notifications = on,
        SettingsMsg::AutoSave(on) => model.draft.auto_save = on,
        SettingsMsg::Language(name) => model.draft.language = name,
        SettingsMsg::Save => {
            if model.saving {
                return None;
            }
            model.saving = true;
            cmds.push(SettingsCommand::Persist(model.draft.clone()));
        }
        SettingsMsg::Saved(result) => {
            model.saving = false;
            return match result {
                Ok(()) => {
                    model.saved = model.draft.clone();
                    Some(SettingsEvent::Applied(model.saved.clone()))
                }
                Err(err) => Some(SettingsEvent::Error(format!(
                    "Failed to save settings:\n\n{err}"
                ))),
            };
        }
        SettingsMsg::Reset => {
            model.draft = HostSettings::default();
            return Some(SettingsEvent::Notice(
                "Settings reset to defaults. Save to keep them.".into(),
            ));
        }
    }
    None
}

pub fn view(ui: &mut egui::Ui, model: &SettingsModel) -> Vec<SettingsMsg> {
    let mut msgs = Vec::new();
    let s = &model.draft;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Settings");
            ui.label("Customize your PollPulse experience");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let save = egui::Button::new(format!("{} Save Changes", icons::FLOPPY_DISK));
            if ui
                .add_enabled(!model.saving, save)
                .on_disabled_hover_text("Saving...")
                .clicked()
            {
                msgs.push(SettingsMsg::Save);
            }
            if ui
                .button(format!("{} Reset", icons::ARROW_COUNTER_CLOCKWISE))
                .clicked()
            {
                msgs.push(SettingsMsg::Reset);
            }
            if model.is_dirty() {
                ui.label(egui::RichText::new("Unsaved changes").small().weak());
            }
        });
    });
    ui.add_space(8.0);

    section(ui, "Appearance", |ui| {
        if let Some(on) = super::setting_switch(ui, "Dark Mode", "Use the dark color scheme", s.dark_mode) {
            msgs.push(SettingsMsg::DarkMode(on));
        }
        ui.horizontal(|ui| {
            ui.label("Theme color");
            for theme in THEMES {
                if ui
                    .add(egui::Button::new(theme).selected(s.theme == theme))
                    .clicked()
                {
                    msgs.push(SettingsMsg::Theme(theme.to_string()));
                }
            }
        });
    });

    section(ui, "Polls", |ui| {
        ui.horizontal(|ui| {
            ui.label("Default question timer");
            let mut secs = s.default_timer_secs;
            if ui
                .add(egui::Slider::new(&mut secs, TIMER_RANGE).suffix("s"))
                .changed()
            {
                msgs.push(SettingsMsg::DefaultTimer(secs));
            }
        });
        if let Some(on) = super::setting_switch(
            ui,
            "Auto-launch Questions",
            "Launch approved questions automatically",
            s.auto_launch,
        ) {
            msgs.push(SettingsMsg::AutoLaunch(on));
        }
        if let Some(on) = super::setting_switch(
            ui,
            "Screenshot Detection",
            "Flag participants who capture the screen",
            s.screenshot_detection,
        ) {
            msgs.push(SettingsMsg::ScreenshotDetection(on));
        }
    });

    section(ui, "Audio", |ui| {
        ui.horizontal(|ui| {
            ui.label("Input device");
            egui::ComboBox::from_id_salt("settings_audio_input")
                .selected_text(s.audio_input.as_str())
                .show_ui(ui, |ui| {
                    for input in AUDIO_INPUTS {
                        if ui.selectable_label(s.audio_input == input, input).clicked() {
                            msgs.push(SettingsMsg::AudioInput(input.to_string()));
                        }
                    }
                });
        });
    });

    section(ui, "General", |ui| {
        if let Some(on) = super::setting_switch(
            ui,
            "Notifications",
            "Show alerts for poll activity",
            s.notifications,
        ) {
            msgs.push(SettingsMsg::Notifications(on));
        }
        if let Some(on) =
            super::setting_switch(ui, "Auto-save", "Save drafts as you work", s.auto_save)
        {
            msgs.push(SettingsMsg::AutoSave(on));
        }
        ui.horizontal(|ui| {
            ui.label("Language");
            egui::ComboBox::from_id_salt("settings_language")
                .selected_text(s.language.as_str())
                .show_ui(ui, |ui| {
                    for language in LANGUAGES {
                        if ui.selectable_label(s.language == language, language).clicked() {
                            msgs.push(SettingsMsg::Language(language.to_string()));
                        }
                    }
                });
        });
    });

    msgs
}

fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).strong());
        ui.add_space(4.0);
        body(ui);
    });
    ui.add_space(8.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_is_clamped_into_range() {
        let mut model = SettingsModel::default();
        let mut cmds = Vec::new();

        update(&mut model, SettingsMsg::DefaultTimer(5), &mut cmds);
        assert_eq!(model.draft().default_timer_secs, 10);
        update(&mut model, SettingsMsg::DefaultTimer(500), &mut cmds);
        assert_eq!(model.draft().default_timer_secs, 120);
    }

    #[test]
    fn save_applies_only_after_success() {
        let mut model = SettingsModel::default();
        let mut cmds = Vec::new();
        update(&mut model, SettingsMsg::Language("German".into()), &mut cmds);
        assert!(model.is_dirty());

        update(&mut model, SettingsMsg::Save, &mut cmds);
        assert_eq!(cmds.len(), 1);
        assert_eq!(model.applied().language, "English");

        let failed = update(&mut model, SettingsMsg::Saved(Err("disk full".into())), &mut cmds);
        assert!(matches!(failed, Some(SettingsEvent::Error(_))));
        assert!(model.is_dirty());

        update(&mut model, SettingsMsg::Save, &mut cmds);
        let applied = update(&mut model, SettingsMsg::Saved(Ok(())), &mut cmds);
        assert!(matches!(applied, Some(SettingsEvent::Applied(ref s)) if s.language == "German"));
        assert!(!model.is_dirty());
    }

    #[test]
    fn reset_restores_defaults_in_draft() {
        let saved = HostSettings {
            default_timer_secs: 90,
            ..Default::default()
        };
        let mut model = SettingsModel::new(saved);
        let mut cmds = Vec::new();

        update(&mut model, SettingsMsg::Reset, &mut cmds);

        assert_eq!(model.draft(), &HostSettings::default());
        assert_eq!(model.applied().default_timer_secs, 90);
        assert!(cmds.is_empty());
    }
}
