#![warn(clippy::all, rust_2018_idioms)]

use digit_canvas::{DigitApp, PredictionClient, ServiceConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::from_env()?;
    log::info!("Using classification service at {}", config.base_url);
    let client = PredictionClient::new(&config)?;

    // Requests run here while eframe owns the main thread
    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_min_inner_size([640.0, 380.0])
            .with_title("Digit Canvas"),
        ..Default::default()
    };

    eframe::run_native(
        "Digit Canvas",
        native_options,
        Box::new(move |cc| Ok(Box::new(DigitApp::new(cc, client, handle)))),
    )?;

    Ok(())
}
