use thiserror::Error;

pub type Result<T> = std::result::Result<T, WaveError>;

/// Everything that can stop a solve.
///
/// All variants are terminal for the current invocation; nothing is retried.
/// Refinement of the time step by the stability guard is not an error.
#[derive(Error, Debug)]
pub enum WaveError {
    /// The seabed reaches the still-water level somewhere in the domain.
    #[error(
        "not enough water in the sea: seabed reaches {seabed_max} but the still-water level is {still_water}"
    )]
    InsufficientDepth { seabed_max: f64, still_water: f64 },

    /// A field was given as something other than a constant or a profile.
    #[error("unsupported specification for `{field}`: {found}")]
    UnsupportedSpecType { field: String, found: String },

    #[error("unsupported output mode `{0}`, expected `data` or `plot`")]
    UnsupportedMode(String),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
