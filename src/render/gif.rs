//! GIF output
//!
//! Frames are rasterized on a `PlotSurface` and handed to `image`'s GIF
//! encoder one by one, so only a single frame is held in memory at a time.

use super::plot::PlotSurface;
use super::FrameSink;
use crate::particles::{AxisBounds, Frame, ParticleError, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Quantization speed handed to the encoder (1 = best, 30 = fastest)
const ENCODER_SPEED: i32 = 10;

const GIF_TRAILER: u8 = 0x3B;

/// Streams rendered frames into a GIF file
pub struct GifSink {
    surface: PlotSurface,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    path: PathBuf,
    delay: Delay,
    bounds: Option<AxisBounds>,
    frames_written: usize,
}

impl GifSink {
    /// Create the output file and encoder
    ///
    /// `fps` sets the per-frame delay; `repeat = false` writes no loop
    /// extension, so viewers play the animation once.
    pub fn create(
        path: impl AsRef<Path>,
        surface: PlotSurface,
        fps: u32,
        repeat: bool,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if fps == 0 {
            return Err(ParticleError::Encode("fps must be positive".to_string()));
        }

        let file = File::create(&path).map_err(|e| ParticleError::io(&path, e))?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), ENCODER_SPEED);
        if repeat {
            encoder.set_repeat(Repeat::Infinite).map_err(encode_error)?;
        }

        Ok(Self {
            surface,
            encoder: Some(encoder),
            path,
            delay: Delay::from_numer_denom_ms(1000, fps),
            bounds: None,
            frames_written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, bounds: &AxisBounds, total_frames: usize) -> Result<()> {
        debug!(
            path = %self.path.display(),
            total_frames,
            width = self.surface.width(),
            height = self.surface.height(),
            "Starting GIF"
        );
        self.bounds = Some(*bounds);
        Ok(())
    }

    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        let bounds = self
            .bounds
            .ok_or_else(|| ParticleError::Render("draw_frame called before begin".to_string()))?;
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| ParticleError::Encode("GIF already finished".to_string()))?;

        self.surface.draw(frame, &bounds)?;

        let rgb = RgbImage::from_raw(
            self.surface.width(),
            self.surface.height(),
            self.surface.pixels().to_vec(),
        )
        .ok_or_else(|| ParticleError::Render("surface buffer has wrong size".to_string()))?;
        let rgba = DynamicImage::ImageRgb8(rgb).into_rgba8();

        encoder
            .encode_frame(image::Frame::from_parts(rgba, 0, 0, self.delay))
            .map_err(encode_error)?;
        self.frames_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| ParticleError::Encode("GIF already finished".to_string()))?;

        if self.frames_written == 0 {
            return Err(ParticleError::Encode("no frames were encoded".to_string()));
        }

        // Dropping the encoder writes the trailer and flushes the BufWriter,
        // both of which swallow I/O errors; check the file end instead.
        drop(encoder);
        verify_trailer(&self.path)?;

        debug!(path = %self.path.display(), frames = self.frames_written, "GIF written");
        Ok(())
    }
}

/// A complete GIF ends with the trailer byte `0x3B`
fn verify_trailer(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| ParticleError::io(path, e))?;
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .and_then(|_| file.read_exact(&mut last))
        .map_err(|e| ParticleError::io(path, e))?;

    if last[0] != GIF_TRAILER {
        return Err(ParticleError::Encode(format!(
            "'{}' is truncated (missing GIF trailer)",
            path.display()
        )));
    }
    Ok(())
}

fn encode_error(e: impl std::fmt::Display) -> ParticleError {
    ParticleError::Encode(e.to_string())
}
