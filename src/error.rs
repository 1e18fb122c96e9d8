//! Error types for the timer

use thiserror::Error;

/// Failures that stop the timer. A user interrupt is not one of them: it
/// ends a countdown or session through the normal return path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not install the Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
