use std::path::PathBuf;

mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use game_core::{load_settings, Settings};
use tracing_subscriber::EnvFilter;

use crate::ui::YutApp;

#[derive(Parser, Debug)]
#[command(name = "yut-gui", about = "Yut nomination party game")]
struct Args {
    /// Settings file; defaults to ./yut.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(error = %err, "failed to load settings, using defaults");
            Settings::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.title.clone())
            .with_inner_size([960.0, 860.0])
            .with_min_inner_size([640.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "yut-gui",
        options,
        Box::new(move |cc| Ok(Box::new(YutApp::new(cc, settings)))),
    )
}
