//! Launch screen shown while the client "boots".

use std::f32::consts::TAU;
use std::time::Duration;

use eframe::egui;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderModel {
    elapsed: Duration,
    duration: Duration,
    finished: bool,
}

impl LoaderModel {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
            finished: false,
        }
    }

    /// Fraction of the launch duration that has passed, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderMsg {
    Tick(Duration),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderEvent {
    Finished,
}

pub fn update(model: &mut LoaderModel, msg: LoaderMsg) -> Option<LoaderEvent> {
    match msg {
        LoaderMsg::Tick(dt) => {
            if model.finished {
                return None;
            }
            model.elapsed += dt;
            if model.elapsed >= model.duration {
                model.finished = true;
                return Some(LoaderEvent::Finished);
            }
            None
        }
    }
}

pub fn view(ui: &mut egui::Ui, model: &LoaderModel) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(140.0, 140.0), egui::Sense::hover());
        paint_orbit(ui.painter(), rect, model.elapsed.as_secs_f32());
        ui.add_space(16.0);
        ui.heading("PollPulse");
        ui.label("Real-time classroom polling");
        ui.add_space(12.0);
        ui.add(
            egui::ProgressBar::new(model.progress())
                .desired_width(220.0)
                .show_percentage(),
        );
    });
}

/// Three dots circling a pulsing core; position depends only on `t` seconds.
fn paint_orbit(painter: &egui::Painter, rect: egui::Rect, t: f32) {
    let center = rect.center();
    let pulse = 1.0 + 0.08 * (t * TAU).sin();
    painter.circle_filled(center, 22.0 * pulse, super::ACCENT);
    painter.circle_stroke(
        center,
        56.0,
        egui::Stroke::new(1.0, super::ACCENT.gamma_multiply(0.35)),
    );

    let colors = [
        egui::Color32::from_rgb(168, 85, 247),
        egui::Color32::from_rgb(34, 197, 94),
        egui::Color32::from_rgb(250, 204, 21),
    ];
    for (i, color) in colors.into_iter().enumerate() {
        let angle = t * 1.6 + i as f32 * TAU / 3.0;
        let pos = center + 56.0 * egui::vec2(angle.cos(), angle.sin());
        painter.circle_filled(pos, 7.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_once_after_duration() {
        let mut model = LoaderModel::new(Duration::from_millis(3000));

        assert_eq!(update(&mut model, LoaderMsg::Tick(Duration::from_millis(1000))), None);
        assert_eq!(update(&mut model, LoaderMsg::Tick(Duration::from_millis(1999))), None);
        assert_eq!(
            update(&mut model, LoaderMsg::Tick(Duration::from_millis(1))),
            Some(LoaderEvent::Finished)
        );
        assert_eq!(update(&mut model, LoaderMsg::Tick(Duration::from_millis(500))), None);
        assert_eq!(model.progress(), 1.0);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut model = LoaderModel::new(Duration::ZERO);
        assert_eq!(
            update(&mut model, LoaderMsg::Tick(Duration::ZERO)),
            Some(LoaderEvent::Finished)
        );
    }
}
