use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use whitted_core::{demo_scene, load_scene, SceneDescription};
use whitted_renderer::{render, render_parallel, RenderContext};

mod cli;
mod output;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::from(args.log_level))
        .init();

    let mut desc = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, rendering the demo scene");
            demo_scene()
        }
    };
    apply_overrides(&mut desc, &args);

    let ctx = RenderContext::from_description(&desc).context("invalid scene")?;

    let image = if args.sequential {
        render(&ctx)
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build()
            .context("failed to build thread pool")?;
        pool.install(|| render_parallel(&ctx))
    };

    output::save_png(&image, &args.output)
}

fn apply_overrides(desc: &mut SceneDescription, args: &Args) {
    let settings = &mut desc.settings;
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(max_depth) = args.max_depth {
        settings.max_depth = max_depth;
    }
}
