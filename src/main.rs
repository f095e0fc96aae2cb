//! N-body GIF renderer - main entry point
//!
//! Usage: `nbody_gif_renderer <num_particles> <num_iters> <exec_type>`
//!
//! Reads `output/particles_<exec_type>.dat` and writes `output/nbody.gif`.

use anyhow::Context;
use nbody_gif_renderer::config::{RenderConfig, USAGE};
use nbody_gif_renderer::pipeline;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nbody_gif_renderer=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match RenderConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &RenderConfig) -> anyhow::Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        num_particles = config.num_particles,
        num_iters = config.num_iters,
        exec_type = %config.exec_type,
        "N-body GIF renderer"
    );
    debug!(
        width = config.width,
        height = config.height,
        fps = config.fps,
        frame_interval_ms = config.frame_interval_ms,
        repeat = config.repeat,
        palette = %config.palette,
        "Render settings"
    );

    let summary = pipeline::render_animation(config).with_context(|| {
        format!(
            "failed to render {} from {}",
            config.output_path().display(),
            config.input_path().display()
        )
    })?;

    info!(
        frames = summary.frames,
        min_limit = summary.bounds.min_limit,
        max_limit = summary.bounds.max_limit,
        path = %summary.output.display(),
        "Done"
    );
    Ok(())
}
