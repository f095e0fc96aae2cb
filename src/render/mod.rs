//! Frame output
//!
//! - `palettes.rs`: Marker colors
//! - `plot.rs`: Rasterizing one frame with plotters
//! - `gif.rs`: Encoding rasterized frames into a GIF file
//!
//! The pipeline only talks to a `FrameSink`, so the logical frame sequence
//! can be checked without decoding images (`RecordingSink`).

pub mod gif;
pub mod palettes;
pub mod plot;

pub use gif::GifSink;
pub use plot::{PlotStyle, PlotSurface};

use crate::particles::{AxisBounds, Frame, ParticleError, Result};

/// Consumer of the animation frames, called strictly in order:
/// `begin`, `draw_frame` for each frame, `finish`.
pub trait FrameSink {
    fn begin(&mut self, bounds: &AxisBounds, total_frames: usize) -> Result<()>;
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

/// Keeps the logical content of every frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub bounds: Option<AxisBounds>,
    pub expected_frames: usize,
    pub frames: Vec<Vec<(f64, f64)>>,
    pub finished: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for RecordingSink {
    fn begin(&mut self, bounds: &AxisBounds, total_frames: usize) -> Result<()> {
        self.bounds = Some(*bounds);
        self.expected_frames = total_frames;
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        if frame.index != self.frames.len() {
            return Err(ParticleError::Render(format!(
                "frame {} drawn out of order (expected {})",
                frame.index,
                self.frames.len()
            )));
        }
        self.frames.push(frame.to_points());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
