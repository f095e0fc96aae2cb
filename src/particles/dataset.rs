//! Particle dump parsing
//!
//! A dump is a text file with one header line followed by one `x y` row per
//! particle per iteration, iteration-major:
//!
//! ```text
//! 3 2 0
//! 0.500000 1.250000
//! ...
//! ```
//!
//! The whole file is loaded into a `(rows, 2)` table up front and never
//! mutated afterwards.

use super::error::{ParticleError, Result};
use super::header::DatasetHeader;
use ndarray::{Array2, ArrayView2};
use std::fs;
use std::path::Path;
use tracing::debug;

/// All particle positions of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Array2<f64>,
    header: Option<DatasetHeader>,
}

impl Dataset {
    /// Read and parse a dump from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ParticleError::io(path, e))?;
        let dataset = Self::parse(&text)?;

        debug!(
            path = %path.display(),
            rows = dataset.rows(),
            bytes = text.len(),
            "Loaded particle dump"
        );
        Ok(dataset)
    }

    /// Parse dump text
    ///
    /// The first line is the header and is never parsed as data. Blank lines
    /// and `#` comments are skipped. Every other line must hold exactly two
    /// finite numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let header = lines.next().and_then(DatasetHeader::parse);

        let mut rows: Vec<[f64; 2]> = Vec::new();
        for (offset, raw) in lines.enumerate() {
            // +2: 1-based numbering and the skipped header
            let line = offset + 2;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            rows.push(parse_row(trimmed, line)?);
        }

        Ok(Self {
            points: Array2::from(rows),
            header,
        })
    }

    /// Number of data rows
    pub fn rows(&self) -> usize {
        self.points.nrows()
    }

    /// View of the full `(rows, 2)` table
    pub fn points(&self) -> ArrayView2<'_, f64> {
        self.points.view()
    }

    /// Header counts, when the first line was recognised
    pub fn header(&self) -> Option<DatasetHeader> {
        self.header
    }

    /// Require exactly `num_particles * num_iters` rows.
    ///
    /// Surplus rows are rejected as well as missing ones; a dump that does not
    /// line up with the requested counts would otherwise be sliced into
    /// frames mixing particles from different iterations.
    pub fn validate_shape(&self, num_particles: usize, num_iters: usize) -> Result<()> {
        let found = self.rows();
        let mismatch = |expected| ParticleError::RowCountMismatch {
            expected,
            found,
            num_particles,
            num_iters,
        };

        match num_particles.checked_mul(num_iters) {
            Some(expected) if expected == found => Ok(()),
            Some(expected) => Err(mismatch(expected)),
            None => Err(mismatch(usize::MAX)),
        }
    }
}

fn parse_row(line_text: &str, line: usize) -> Result<[f64; 2]> {
    let tokens: Vec<&str> = line_text.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParticleError::MalformedRow {
            line,
            found: tokens.len(),
        });
    }

    let mut row = [0.0; 2];
    for (slot, token) in row.iter_mut().zip(&tokens) {
        let value = token.parse::<f64>().map_err(|_| ParticleError::Parse {
            line,
            token: token.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ParticleError::NonFinite { line, value });
        }
        *slot = value;
    }
    Ok(row)
}
