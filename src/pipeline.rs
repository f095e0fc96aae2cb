//! Render pipeline
//!
//! 1. Load the dump and check it against the requested counts
//! 2. Compute the shared axis bounds
//! 3. Draw every iteration as one frame, in order
//! 4. Move the finished GIF into place
//!
//! The GIF is encoded into `nbody.gif.partial` and renamed only once every
//! frame has been written, so a failed run never leaves a truncated
//! animation at the output path.

use crate::config::RenderConfig;
use crate::particles::{frames, AxisBounds, Dataset, ParticleError, Result};
use crate::render::palettes::PALETTE_REGISTRY;
use crate::render::{FrameSink, GifSink, PlotStyle, PlotSurface};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub frames: usize,
    pub bounds: AxisBounds,
    pub output: PathBuf,
}

/// Load the dump named by the config and validate its shape
pub fn load_dataset(config: &RenderConfig) -> Result<Dataset> {
    let dataset = Dataset::load(config.input_path())?;

    if let Some(header) = dataset.header() {
        if !header.agrees_with(config.num_particles, config.num_iters) {
            warn!(
                header_particles = header.num_particles,
                header_iters = header.num_iters,
                num_particles = config.num_particles,
                num_iters = config.num_iters,
                "Dump header disagrees with requested counts, using requested counts"
            );
        }
    }

    dataset.validate_shape(config.num_particles, config.num_iters)?;
    Ok(dataset)
}

/// Feed every frame of a validated dataset to `sink`
pub fn render_frames<S: FrameSink>(
    dataset: &Dataset,
    config: &RenderConfig,
    sink: &mut S,
) -> Result<AxisBounds> {
    let bounds = AxisBounds::from_dataset(dataset).ok_or(ParticleError::EmptyDataset)?;
    debug!(
        min_limit = bounds.min_limit,
        max_limit = bounds.max_limit,
        "Axis bounds"
    );

    sink.begin(&bounds, config.num_iters)?;

    let mut drawn = 0usize;
    for frame in frames(dataset, config.num_particles, config.num_iters) {
        debug!(frame = frame.index, of = config.num_iters, "Drawing frame");
        sink.draw_frame(&frame)?;
        drawn += 1;
    }

    if drawn != config.num_iters {
        return Err(ParticleError::RowCountMismatch {
            expected: config.expected_rows().unwrap_or(usize::MAX),
            found: dataset.rows(),
            num_particles: config.num_particles,
            num_iters: config.num_iters,
        });
    }

    sink.finish()?;
    Ok(bounds)
}

/// Full run: dump on disk in, GIF on disk out
pub fn render_animation(config: &RenderConfig) -> Result<RenderSummary> {
    let t0 = Instant::now();

    info!(path = %config.input_path().display(), "Loading particle dump");
    let dataset = load_dataset(config)?;
    info!(
        rows = dataset.rows(),
        num_particles = config.num_particles,
        num_iters = config.num_iters,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Dump loaded"
    );

    let output = config.output_path();
    let bounds = write_atomically(&output, |partial| encode_gif(&dataset, config, partial))?;

    info!(
        path = %output.display(),
        frames = config.num_iters,
        fps = config.fps,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Animation written"
    );

    Ok(RenderSummary {
        frames: config.num_iters,
        bounds,
        output,
    })
}

/// Surface configured from the run settings
pub fn build_surface(config: &RenderConfig) -> Result<PlotSurface> {
    let palette = PALETTE_REGISTRY
        .resolve(&config.palette)
        .cloned()
        .ok_or_else(|| ParticleError::Render("no palette available".to_string()))?;

    let style = PlotStyle {
        title: (!config.title.is_empty()).then(|| config.title.clone()),
        axes: config.axes,
        point_radius: config.point_radius,
    };

    PlotSurface::new(config.width, config.height, style, palette)
}

fn encode_gif(dataset: &Dataset, config: &RenderConfig, path: &Path) -> Result<AxisBounds> {
    let surface = build_surface(config)?;
    let mut sink = GifSink::create(path, surface, config.fps, config.repeat)?;
    render_frames(dataset, config, &mut sink)
}

/// Run `write` against `<output>.partial`, then move the result over `output`.
///
/// The partial file is removed when `write` fails.
fn write_atomically<T>(output: &Path, write: impl FnOnce(&Path) -> Result<T>) -> Result<T> {
    let partial = partial_path(output);

    let value = match write(&partial) {
        Ok(value) => value,
        Err(e) => {
            if let Err(rm) = fs::remove_file(&partial) {
                debug!(path = %partial.display(), error = %rm, "No partial file to remove");
            }
            return Err(e);
        }
    };

    fs::rename(&partial, output).map_err(|e| ParticleError::io(output, e))?;
    Ok(value)
}

fn partial_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    output.with_file_name(name)
}
