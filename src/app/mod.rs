//! Application entry point wiring egui/eframe to launch the PollPulse UI.

use eframe::egui;
use egui_phosphor::Variant;

use crate::config::AppConfig;
use crate::logic::settings_store;
use crate::ui::PollPulseApp;

/// Load configuration and saved settings, then run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    let config = AppConfig::load();
    let settings = settings_store::load_or_default(&config.settings_path);

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PollPulse")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PollPulse",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(PollPulseApp::new(&cc.egui_ctx, &config, settings)))
        }),
    )
}
