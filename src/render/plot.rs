//! Frame rasterization with plotters
//!
//! A `PlotSurface` owns one RGB buffer for the whole run. Every frame
//! clears it, redraws title and axes, then draws one filled circle per
//! particle, so nothing from the previous frame bleeds through.

use super::palettes::Palette;
use crate::particles::{AxisBounds, Frame, ParticleError, Result};
use plotters::prelude::*;

/// What gets drawn around the markers
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Caption above the plotting area
    pub title: Option<String>,
    /// Axis lines with tick labels
    pub axes: bool,
    pub point_radius: u32,
}

impl PlotStyle {
    /// Markers only, no text at all
    pub fn bare(point_radius: u32) -> Self {
        Self {
            title: None,
            axes: false,
            point_radius,
        }
    }
}

/// Reusable drawing surface (RGB, 3 bytes per pixel)
pub struct PlotSurface {
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    style: PlotStyle,
    palette: Palette,
}

impl PlotSurface {
    pub fn new(width: u32, height: u32, style: PlotStyle, palette: Palette) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ParticleError::Render(format!(
                "surface size must be non-zero, got {}x{}",
                width, height
            )));
        }

        Ok(Self {
            buffer: vec![255; width as usize * height as usize * 3],
            width,
            height,
            style,
            palette,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels of the last drawn frame
    pub fn pixels(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the surface and draw one frame
    ///
    /// Markers outside the axis range are clipped.
    pub fn draw(&mut self, frame: &Frame<'_>, bounds: &AxisBounds) -> Result<()> {
        let (lo, hi) = bounds.plot_range();
        let style = &self.style;
        let palette = &self.palette;

        let root =
            BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if let Some(title) = &style.title {
            builder.caption(title, ("sans-serif", 22));
        }
        if style.axes {
            builder.x_label_area_size(30).y_label_area_size(40);
        }
        let mut chart = builder
            .build_cartesian_2d(lo..hi, lo..hi)
            .map_err(render_error)?;

        if style.axes {
            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(6)
                .y_labels(6)
                .draw()
                .map_err(render_error)?;
        }

        // One draw call per particle; particle i cycles through the palette
        for (i, row) in frame.points.outer_iter().enumerate() {
            let (x, y) = (row[0], row[1]);
            if !(lo..=hi).contains(&x) || !(lo..=hi).contains(&y) {
                continue;
            }
            let [r, g, b] = palette.color(i);
            chart
                .draw_series(std::iter::once(Circle::new(
                    (x, y),
                    style.point_radius,
                    RGBColor(r, g, b).filled(),
                )))
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
        Ok(())
    }
}

fn render_error(e: impl std::fmt::Display) -> ParticleError {
    ParticleError::Render(e.to_string())
}
