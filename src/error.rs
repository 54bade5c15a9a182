use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied parameter is malformed or out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required input series is missing or empty
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Visualization error: {0}")]
    Visualization(String),

    #[error("IO error")]
    Io(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

// Conversion for Plotters errors
#[cfg(feature = "visualization")]
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(format!("Plot drawing error: {}", err))
    }
}
