use anyhow::{Context, Result};
use atmo_renderer::{render, render_parallel, Atmosphere, SceneFile};
use clap::Parser;

mod cli;

use cli::CliArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();

    let mut scene = match &args.config {
        Some(path) => SceneFile::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => SceneFile::default(),
    };
    args.apply_overrides(&mut scene);
    scene.render.validate().context("Invalid render settings")?;

    let atmosphere = Atmosphere::new(scene.atmosphere).context("Invalid atmosphere settings")?;
    let config = scene.render;

    log::info!(
        "Using {} view / {} light samples",
        atmosphere.config().view_samples,
        atmosphere.config().light_samples
    );

    let image = if args.sequential {
        render(&atmosphere, &config)
    } else {
        render_parallel(&atmosphere, &config)
    };

    image
        .save(&args.output, config.gamma)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
