// Decision Countdown Application
// Main entry point

use anyhow::Result;
use decision_countdown::config::CountdownConfig;
use decision_countdown::services::settings::SettingsService;
use decision_countdown::ui_egui::CountdownApp;

const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 360.0;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Decision Countdown");

    let config = CountdownConfig::from_constants()?;
    let settings_service = SettingsService::new(SettingsService::resolve_default_path());
    let settings = settings_service.load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Decision Countdown")
            .with_inner_size(egui::vec2(settings.window_width, settings.window_height))
            .with_min_inner_size(egui::vec2(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..Default::default()
    };

    eframe::run_native(
        "Decision Countdown",
        native_options,
        Box::new(move |cc| {
            let app = CountdownApp::new(cc, config, settings)?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|err| anyhow::anyhow!("countdown window failed: {err}"))
}
