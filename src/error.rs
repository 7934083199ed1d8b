//! Error types for runner construction.
//!
//! The simulation itself cannot fail once a session exists; every error here
//! is raised while building or loading a [`crate::RunnerConfig`].

/// Invalid or unreadable runner configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// A dimension that must be strictly positive was not.
    #[error("{field} must be positive (got {value})")]
    NonPositive {
        /// Offending field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },

    /// A magnitude that must not be negative was.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Offending field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },

    /// A `min..=max` range has `min > max`.
    #[error("{field} range is inverted ({min} > {max})")]
    InvertedRange {
        /// Offending field.
        field: &'static str,
        /// Lower bound supplied.
        min: f32,
        /// Upper bound supplied.
        max: f32,
    },

    /// A probability lies outside `[0, 1]`.
    #[error("{field} must be a probability in [0, 1] (got {value})")]
    Probability {
        /// Offending field.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },

    /// Generated platforms could not fit inside one chunk.
    #[error("platform width up to {max_width} does not fit a chunk of width {chunk_width}")]
    PlatformTooWide {
        /// Widest platform the generator may place.
        max_width: f32,
        /// Chunk (viewport) width.
        chunk_width: f32,
    },

    /// The scroll threshold must sit inside the viewport.
    #[error("scroll threshold {threshold} is outside the viewport (width {width})")]
    ScrollThreshold {
        /// Threshold supplied.
        threshold: f32,
        /// Viewport width.
        width: f32,
    },

    /// Hazards on the narrowest platform would get a negative patrol range.
    #[error("hazard patrol trim {trim} leaves no patrol room on a {min_width}-wide platform")]
    PatrolTrim {
        /// Patrol trim supplied.
        trim: f32,
        /// Narrowest platform width.
        min_width: f32,
    },
}
