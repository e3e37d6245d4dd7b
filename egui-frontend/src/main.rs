use eframe::egui;
use log::{error, info};

use milk_tracker_egui::ui::{MilkTrackerApp, APP_TITLE};

fn main() -> Result<(), eframe::Error> {
    // Initialize logging, `info` unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting Milk Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 800.0])
            .with_min_inner_size([600.0, 500.0])
            .with_title(APP_TITLE)
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| match MilkTrackerApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Milk Tracker app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                // Convert anyhow::Error to eframe::Error
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
