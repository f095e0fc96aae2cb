//! N-body GIF renderer library
//!
//! Turns a particle position dump written by the N-body simulator into an
//! animated scatter plot, one frame per simulation iteration.

pub mod config;
pub mod particles;
pub mod pipeline;
pub mod render;
