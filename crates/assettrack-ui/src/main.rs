//! AssetTrack dashboard chrome
//!
//! Headless entry point: opens preference storage, builds the dashboard
//! chrome, and walks it through one interaction round so the wiring can be
//! exercised (and inspected) without a browser attached.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use assettrack_core::chrome::AncestryTarget;
use assettrack_core::Storage;
use assettrack_ui::dashboard::ids;
use assettrack_ui::AppState;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("AssetTrack chrome v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = Storage::default_data_dir();
    let storage =
        Arc::new(Storage::new_with_path(&data_dir).context("open preference storage")?);

    let mut state = AppState::new(storage)?;
    info!("Theme: {}", state.dashboard.theme_mode().as_str());

    // One interaction round: open the user menu, then click elsewhere.
    state
        .dashboard
        .pointer_event(&AncestryTarget::new([ids::USER_MENU_BTN]))?;
    info!(
        "User dropdown open: {}",
        state.dashboard.is_open(ids::USER_DROPDOWN)?
    );

    state
        .dashboard
        .pointer_event(&AncestryTarget::page_surface())?;
    info!(
        "User dropdown open after outside click: {}",
        state.dashboard.is_open(ids::USER_DROPDOWN)?
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&state.dashboard.presenter().snapshot())?
    );

    Ok(())
}
