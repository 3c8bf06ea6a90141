// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Lecture recorder with a simulated live transcript feeding the question generator.

use std::time::Duration;

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::logic::generator::transcript_sample;
use crate::models::settings::AUDIO_INPUTS;
use crate::utils::format_clock;

/// Recording time between two transcribed sentences.
pub const SAMPLE_INTERVAL_SECS: u64 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
    Paused,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioCaptureModel {
    state: RecorderState,
    elapsed: Duration,
    transcript: Vec<String>,
    microphone: String,
    generating: bool,
}

impl Default for AudioCaptureModel {
    fn default() -> Self {
        Self::with_microphone(AUDIO_INPUTS[0])
    }
}

impl AudioCaptureModel {
    pub fn with_microphone(name: &str) -> Self {
        Self {
            state: RecorderState::Idle,
            elapsed: Duration::ZERO,
            transcript: Vec::new(),
            microphone: name.to_string(),
            generating: false,
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    pub fn transcript(&self) -> String {
        self.transcript.join(" ")
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioMsg {
    Start,
    Pause,
    Resume,
    Stop,
    Tick(Duration),
    MicrophoneSelected(String),
    Generate,
    GenerationFinished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    GenerateQuestions { transcript: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioEvent {
    Notice(String),
}

pub fn update(
    model: &mut AudioCaptureModel,
    msg: AudioMsg,
    cmds: &mut Vec<AudioCommand>,
) -> Option<AudioEvent> {
    match msg {
        AudioMsg::Start => {
            if model.state == RecorderState::Idle {
                model.state = RecorderState::Recording;
                model.elapsed = Duration::ZERO;
                model.transcript.clear();
                log::info!("Recording started on {}", model.microphone);
            }
        }
        AudioMsg::Pause => {
            if model.state == RecorderState::Recording {
                model.state = RecorderState::Paused;
            }
        }
        AudioMsg::Resume => {
            if model.state == RecorderState::Paused {
                model.state = RecorderState::Recording;
            }
        }
        AudioMsg::Stop => {
            if model.state != RecorderState::Idle {
                model.state = RecorderState::Idle;
                log::info!("Recording stopped after {}s", model.elapsed.as_secs());
            }
        }
        AudioMsg::Tick(dt) => {
            if model.state != RecorderState::Recording {
                return None;
            }
            model.elapsed += dt;
            let due = (model.elapsed.as_secs() / SAMPLE_INTERVAL_SECS) as usize;
            while model.transcript.len() < due {
                let next = transcript_sample(model.transcript.len());
                model.transcript.push(next.to_string());
            }
        }
        AudioMsg::MicrophoneSelected(name) => model.microphone = name,
        AudioMsg::Generate => {
            if model.generating {
                return None;
            }
            let transcript = model.transcript();
            if transcript.is_empty() {
                return Some(AudioEvent::Notice(
                    "Record some audio before generating questions".into(),
                ));
            }
            model.generating = true;
            cmds.push(AudioCommand::GenerateQuestions { transcript });
        }
        AudioMsg::GenerationFinished => model.generating = false,
    }
    None
}

pub fn view(ui: &mut egui::Ui, model: &AudioCaptureModel) -> Vec<AudioMsg> {
    let mut msgs = Vec::new();

    ui.heading("Audio Capture");
    ui.label("Record your lecture and let AI turn it into poll questions");
    ui.add_space(12.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label("Microphone");
            egui::ComboBox::from_id_salt("audio_input")
                .selected_text(model.microphone.as_str())
                .show_ui(ui, |ui| {
                    for input in AUDIO_INPUTS {
                        if ui
                            .selectable_label(model.microphone == input, input)
                            .clicked()
                        {
                            msgs.push(AudioMsg::MicrophoneSelected(input.to_string()));
                        }
                    }
                });
        });
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            let (icon, color) = match model.state {
                RecorderState::Recording => (icons::RECORD, egui::Color32::from_rgb(239, 68, 68)),
                RecorderState::Paused => (icons::PAUSE_CIRCLE, egui::Color32::from_rgb(234, 179, 8)),
                RecorderState::Idle => (icons::MICROPHONE, super::ACCENT),
            };
            ui.label(egui::RichText::new(icon).size(40.0).color(color));
            ui.label(
                egui::RichText::new(format_clock(model.elapsed_secs()))
                    .monospace()
                    .size(26.0),
            );
            ui.add_space(6.0);
            ui.horizontal(|ui| match model.state {
                RecorderState::Idle => {
                    if ui.button(format!("{} Start Recording", icons::PLAY)).clicked() {
                        msgs.push(AudioMsg::Start);
                    }
                }
                RecorderState::Recording | RecorderState::Paused => {
                    let (label, msg) = if model.state == RecorderState::Paused {
                        (format!("{} Resume", icons::PLAY), AudioMsg::Resume)
                    } else {
                        (format!("{} Pause", icons::PAUSE), AudioMsg::Pause)
                    };
                    if ui.button(label).clicked() {
                        msgs.push(msg);
                    }
                    if ui.button(format!("{} Stop", icons::STOP)).clicked() {
                        msgs.push(AudioMsg::Stop);
                    }
                }
            });
        });
    });
    ui.add_space(12.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Live Transcript").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if model.generating {
                    "Generating...".to_string()
                } else {
                    format!("{} Generate Questions", icons::SPARKLE)
                };
                if ui
                    .add_enabled(!model.generating, egui::Button::new(label))
                    .clicked()
                {
                    msgs.push(AudioMsg::Generate);
                }
            });
        });
        egui::ScrollArea::vertical()
            .max_height(220.0)
            .show(ui, |ui| {
                if model.transcript.is_empty() {
                    ui.label(
                        egui::RichText::new("Transcript will appear here while recording.").weak(),
                    );
                }
                for line in &model.transcript {
                    ui.label(line.as_str());
                }
            });
    });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::generator::TRANSCRIPT_SAMPLES;

    fn tick(model: &mut AudioCaptureModel, secs: u64) {
        let mut cmds = Vec::new();
        update(model, AudioMsg::Tick(Duration::from_secs(secs)), &mut cmds);
    }

    fn send(model: &mut AudioCaptureModel, msg: AudioMsg) {
        let mut cmds = Vec::new();
        update(model, msg, &mut cmds);
    }

    #[test]
    fn elapsed_time_only_advances_while_recording() {
        let mut model = AudioCaptureModel::default();
        tick(&mut model, 5);
        assert_eq!(model.elapsed_secs(), 0);

        send(&mut model, AudioMsg::Start);
        tick(&mut model, 4);
        send(&mut model, AudioMsg::Pause);
        tick(&mut model, 10);
        assert_eq!(model.elapsed_secs(), 4);

        send(&mut model, AudioMsg::Resume);
        tick(&mut model, 2);
        assert_eq!(model.elapsed_secs(), 6);
    }

    #[test]
    fn a_sentence_is_appended_every_three_seconds() {
        let mut model = AudioCaptureModel::default();
        send(&mut model, AudioMsg::Start);

        tick(&mut model, 2);
        assert!(model.transcript().is_empty());
        tick(&mut model, 1);
        assert_eq!(model.transcript(), TRANSCRIPT_SAMPLES[0]);
        tick(&mut model, 6);
        assert_eq!(model.transcript.len(), 3);
        assert_eq!(model.transcript[2], TRANSCRIPT_SAMPLES[2]);
    }

    #[test]
    fn start_after_stop_clears_previous_take() {
        let mut model = AudioCaptureModel::default();
        send(&mut model, AudioMsg::Start);
        tick(&mut model, 7);
        send(&mut model, AudioMsg::Stop);
        assert_eq!(model.state(), RecorderState::Idle);
        assert_eq!(model.elapsed_secs(), 7, "stop keeps the take visible");

        send(&mut model, AudioMsg::Start);

        assert_eq!(model.elapsed_secs(), 0);
        assert!(model.transcript().is_empty());
    }

    #[test]
    fn generate_needs_a_transcript_and_runs_once() {
        let mut model = AudioCaptureModel::default();
        let mut cmds = Vec::new();

        let event = update(&mut model, AudioMsg::Generate, &mut cmds);
        assert!(matches!(event, Some(AudioEvent::Notice(_))));
        assert!(cmds.is_empty());

        send(&mut model, AudioMsg::Start);
        tick(&mut model, 3);
        update(&mut model, AudioMsg::Generate, &mut cmds);
        update(&mut model, AudioMsg::Generate, &mut cmds);

        assert_eq!(
            cmds,
            vec![AudioCommand::GenerateQuestions {
                transcript: TRANSCRIPT_SAMPLES[0].to_string(),
            }]
        );
        assert!(model.is_generating());
        send(&mut model, AudioMsg::GenerationFinished);
        assert!(!model.is_generating());
    }
}
