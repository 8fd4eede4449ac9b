use anyhow::{Context, Result};
use automaton::config::Args;
use clap::Parser;

mod app;

use app::App;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config()?;
    log::info!("rule {} starting from {:?}", config.rule, config.initial);
    let grid = config
        .initial
        .build()
        .context("failed to build the initial board")?;

    let (height, width) = grid.dimensions();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            (width * config.magnification) as f32 + 16.0,
            (height * config.magnification) as f32 + 48.0,
        ]),
        ..Default::default()
    };
    eframe::run_native(
        "sim",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &config, grid)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
