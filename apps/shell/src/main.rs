#![windows_subsystem = "windows"]

mod app;
mod components;
mod events;
mod state;

use arkiv::domain::config::MotionConfig;
use arkiv::domain::sample;
use arkiv::events::EventBus;
use arkiv::kernel::config::load_config;
use arkiv_logger::Logger;
use tracing::{info, warn};

use crate::app::{App, AppState, DesktopApp};

#[arkiv_runtime::main(memory_efficient)]
async fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    let motion: MotionConfig = load_config(None::<&str>).unwrap_or_else(|err| {
        warn!(%err, "No motion config found, using defaults");
        MotionConfig::default()
    });

    let shared = state::shared_motion(motion, sample::artifacts().len(), sample::writings().len())?;
    shared.write().set_viewport_height(800.0);

    let bus = EventBus::new();
    info!("Launching the identity archive window");

    DesktopApp::new().with_title("Arkiv").launch(App, AppState { motion: shared, bus });

    Ok(())
}
