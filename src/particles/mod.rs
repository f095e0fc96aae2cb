//! Particle dump loading
//!
//! Structure:
//! - `error.rs`: Error types
//! - `header.rs`: The informational first line written by the simulator
//! - `dataset.rs`: The `(rows, 2)` coordinate table
//! - `frames.rs`: Axis bounds and per-iteration frame slicing

pub mod dataset;
pub mod error;
pub mod frames;
pub mod header;

pub use dataset::Dataset;
pub use error::{ParticleError, Result};
pub use frames::{frame, frames, AxisBounds, Frame};
pub use header::DatasetHeader;
