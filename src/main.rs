use anyhow::anyhow;
use eframe::egui;
use video_text_overlay::gui::{OverlayEditorApp, APP_TITLE};
use video_text_overlay::logging;
use video_text_overlay::settings::{Settings, SETTINGS_FILE};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging, settings.log_file_path());
    tracing::info!(path = SETTINGS_FILE, "settings loaded");

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| Box::new(OverlayEditorApp::new(cc, settings))),
    )
    .map_err(|e| anyhow!("failed to run {APP_TITLE}: {e}"))
}
