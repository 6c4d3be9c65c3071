//! IE Cup Leaderboard - live top-four standings from a published spreadsheet
//!
//! Fetches the scoring sheet as CSV, ranks teams by points and shows the
//! leaders with a manual refresh.

mod board;
mod config;
mod data;
mod gui;

use anyhow::Context;
use clap::Parser;
use config::LeaderboardConfig;
use data::HttpSheetSource;
use eframe::egui;
use gui::LeaderboardApp;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ie-cup-leaderboard", version, about)]
struct Cli {
    /// JSON file overriding the built-in sheet/report settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => LeaderboardConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LeaderboardConfig::default(),
    };
    info!(sheet = %config.sheet_url, limit = config.display_limit, "starting leaderboard");

    let source = Arc::new(
        HttpSheetSource::new(&config.sheet_url, config.cache_bust, config.request_timeout())
            .context("building HTTP client")?,
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 820.0])
            .with_min_inner_size([420.0, 600.0])
            .with_title("IE Cup Leaderboard"),
        ..Default::default()
    };

    eframe::run_native(
        "IE Cup Leaderboard",
        options,
        Box::new(move |cc| Ok(Box::new(LeaderboardApp::new(cc, config, source)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {e}"))
}
