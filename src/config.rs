//! Run configuration
//!
//! Built from the three positional arguments `num_particles num_iters exec_type`.
//! Everything else (title, frame rate, surface size) is a fixed rendering
//! default kept here so there is a single place to change it.

use crate::particles::{ParticleError, Result};
use std::path::PathBuf;

pub const USAGE: &str = "usage: nbody_gif_renderer <num_particles> <num_iters> <exec_type>";

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Particles per iteration (rows per frame)
    pub num_particles: usize,

    /// Iterations in the dump (frames in the animation)
    pub num_iters: usize,

    /// Execution label chosen by the simulator run ("s", "p", "w", ...)
    /// Selects `particles_<exec_type>.dat`
    pub exec_type: String,

    /// Directory holding the dump and receiving the GIF
    pub output_dir: PathBuf,

    /// Title drawn on every frame
    pub title: String,

    /// Playback rate of the encoded animation
    pub fps: u32,

    /// Scheduling interval used while building frames.
    /// Not part of the encoded animation; playback speed comes from `fps`.
    pub frame_interval_ms: u64,

    /// Loop the animation (false = play once)
    pub repeat: bool,

    /// Surface size in pixels
    pub width: u32,
    pub height: u32,

    /// Draw axis lines and tick labels
    pub axes: bool,

    /// Marker radius in pixels
    pub point_radius: u32,

    /// Categorical palette cycled across particles
    pub palette: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            num_particles: 1,
            num_iters: 1,
            exec_type: "s".to_string(),
            output_dir: PathBuf::from("output"),
            title: "Particle Positions".to_string(),
            fps: 15,
            frame_interval_ms: 10,
            repeat: false,
            width: 640,
            height: 480,
            axes: true,
            point_radius: 3,
            palette: crate::render::palettes::DEFAULT_PALETTE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse `argv` (including the program name at index 0)
    pub fn from_args(args: &[String]) -> Result<Self> {
        let positional = args.get(1..).unwrap_or_default();
        if positional.len() != 3 {
            return Err(ParticleError::InvalidArgument(format!(
                "expected 3 arguments, got {}",
                positional.len()
            )));
        }

        let num_particles = parse_count("num_particles", &positional[0])?;
        let num_iters = parse_count("num_iters", &positional[1])?;
        let exec_type = parse_exec_type(&positional[2])?;

        Ok(Self {
            num_particles,
            num_iters,
            exec_type,
            ..Self::default()
        })
    }

    /// `<output_dir>/particles_<exec_type>.dat`
    pub fn input_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("particles_{}.dat", self.exec_type))
    }

    /// `<output_dir>/nbody.gif`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join("nbody.gif")
    }

    /// Rows the dump must contain
    pub fn expected_rows(&self) -> Option<usize> {
        self.num_particles.checked_mul(self.num_iters)
    }
}

fn parse_count(name: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err(ParticleError::InvalidArgument(format!(
            "{} must be positive, got 0",
            name
        ))),
        Ok(n) => Ok(n),
        Err(_) => Err(ParticleError::InvalidArgument(format!(
            "{} must be a positive integer, got '{}'",
            name, value
        ))),
    }
}

fn parse_exec_type(value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(ParticleError::InvalidArgument(
            "exec_type must not be empty".to_string(),
        ));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(ParticleError::InvalidArgument(format!(
            "exec_type must be a plain label, got '{}'",
            value
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("nbody_gif_renderer")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_from_args() {
        let config = RenderConfig::from_args(&args(&["3000", "200", "p"])).unwrap();
        assert_eq!(config.num_particles, 3000);
        assert_eq!(config.num_iters, 200);
        assert_eq!(config.exec_type, "p");
        assert_eq!(config.fps, 15);
        assert!(!config.repeat);
        assert_eq!(config.title, "Particle Positions");
        assert_eq!(config.expected_rows(), Some(600_000));
    }

    #[test]
    fn test_paths() {
        let config = RenderConfig::from_args(&args(&["1", "1", "w"])).unwrap();
        assert_eq!(config.input_path(), Path::new("output/particles_w.dat"));
        assert_eq!(config.output_path(), Path::new("output/nbody.gif"));
    }

    #[test]
    fn test_wrong_arity() {
        assert!(RenderConfig::from_args(&args(&[])).is_err());
        assert!(RenderConfig::from_args(&args(&["1", "2"])).is_err());
        assert!(RenderConfig::from_args(&args(&["1", "2", "s", "4"])).is_err());
        assert!(RenderConfig::from_args(&[]).is_err());
    }

    #[test]
    fn test_non_numeric_counts() {
        let err = RenderConfig::from_args(&args(&["ten", "5", "s"])).unwrap_err();
        assert!(err.to_string().contains("num_particles"));

        let err = RenderConfig::from_args(&args(&["10", "-5", "s"])).unwrap_err();
        assert!(err.to_string().contains("num_iters"));

        assert!(RenderConfig::from_args(&args(&["1.5", "5", "s"])).is_err());
    }

    #[test]
    fn test_zero_counts() {
        assert!(RenderConfig::from_args(&args(&["0", "5", "s"])).is_err());
        assert!(RenderConfig::from_args(&args(&["5", "0", "s"])).is_err());
    }

    #[test]
    fn test_exec_type_validation() {
        assert!(RenderConfig::from_args(&args(&["1", "1", ""])).is_err());
        assert!(RenderConfig::from_args(&args(&["1", "1", "../etc"])).is_err());
        assert!(RenderConfig::from_args(&args(&["1", "1", ".."])).is_err());
        assert!(RenderConfig::from_args(&args(&["1", "1", "worksteal"])).is_ok());
    }
}
