use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading particle dumps or rendering them
#[derive(Debug, Error)]
pub enum ParticleError {
    /// Input or output file could not be read/written
    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token that is not a floating-point number
    #[error("line {line}: cannot parse '{token}' as a number")]
    Parse { line: usize, token: String },

    /// A data row that does not hold exactly two values
    #[error("line {line}: expected 2 values (x y), found {found}")]
    MalformedRow { line: usize, found: usize },

    /// NaN or infinite coordinate
    #[error("line {line}: coordinate '{value}' is not finite")]
    NonFinite { line: usize, value: f64 },

    /// Data rows do not match num_particles * num_iters
    #[error(
        "expected {expected} data rows ({num_particles} particles x {num_iters} iterations), found {found}"
    )]
    RowCountMismatch {
        expected: usize,
        found: usize,
        num_particles: usize,
        num_iters: usize,
    },

    /// Dump with no data rows at all
    #[error("particle dump contains no data rows")]
    EmptyDataset,

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Plot rasterization failure
    #[error("Render error: {0}")]
    Render(String),

    /// GIF encoding failure
    #[error("Encode error: {0}")]
    Encode(String),
}

impl ParticleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ParticleError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Results using ParticleError
pub type Result<T> = std::result::Result<T, ParticleError>;
