// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Live terminal dashboard for the simulated sensors.
//!
//! Environment:
//! - `AIRWELL_CONFIG`: path to a TOML configuration; the embedded one is used when unset.
//! - `AIRWELL_TICKS`: stop after this many frames; runs until Ctrl-C when unset.
//! - `RUST_LOG`: tracing filter.

use airwell_core::AirwellConfig;
use airwell_dashboard::{DashboardView, TerminalSink};
use airwell_monitor::SensorDataManager;
use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "airwell_monitor=info,airwell_dashboard=info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let manager = Arc::new(SensorDataManager::from_config(config)?);
    let interval = manager.settings().update_interval();
    let limit = frame_limit()?;

    let mut view = DashboardView::mount(Arc::clone(&manager), interval);
    view.toggle_real_time()?;

    let mut updates = manager.updates();
    let mut sink = TerminalSink::stdout();

    tokio::select! {
        frames = view.drive(&mut updates, &mut sink, limit) => {
            let frames = frames.context("failed to write dashboard frame")?;
            info!("presented {} frames", frames);
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            info!("interrupted");
        }
    }

    updates.close();
    view.unmount();
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Result<AirwellConfig> {
    match env::var_os("AIRWELL_CONFIG") {
        Some(path) => {
            info!("loading configuration from {}", path.to_string_lossy());
            AirwellConfig::from_path(&path)
                .with_context(|| format!("cannot load {}", path.to_string_lossy()))
        }
        None => AirwellConfig::embedded().context("embedded configuration is invalid"),
    }
}

fn frame_limit() -> Result<Option<u64>> {
    env::var("AIRWELL_TICKS")
        .ok()
        .map(|ticks| ticks.parse::<u64>())
        .transpose()
        .context("AIRWELL_TICKS must be a non-negative integer")
}
