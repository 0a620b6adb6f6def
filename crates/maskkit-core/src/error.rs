//! Error handling for the MaskKit geometry engine.
//!
//! All failures are deterministic: the same inputs reproduce the same
//! error, so there is no retry policy anywhere in the engine. Builders
//! never return a partial polygon alongside an error.

use thiserror::Error;

/// Errors produced by the geometry builders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A count, order, or length parameter is outside the supported range.
    #[error("invalid parameter `{name}`: got {value}, expected {expected}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was supplied.
        value: f64,
        /// Description of the accepted range.
        expected: &'static str,
    },

    /// A shape configuration violates a geometric precondition.
    #[error("{what}: requested {requested} exceeds limit {limit}")]
    Configuration {
        /// What was being configured.
        what: &'static str,
        /// The requested size or value.
        requested: f64,
        /// The computed limit it violated.
        limit: f64,
    },

    /// A construction degenerated and no valid polygon could be produced.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Two non-adjacent centerline segments cross.
    ///
    /// Raised only by the centerline validator; production builders assume
    /// already-validated parameter ranges.
    #[error("self-intersection between segment {first} and segment {second}")]
    SelfIntersection {
        /// Index of the earlier segment.
        first: usize,
        /// Index of the later segment.
        second: usize,
    },
}

impl LayoutError {
    /// Create a geometry error from a message.
    pub fn geometry(msg: impl Into<String>) -> Self {
        LayoutError::Geometry(msg.into())
    }
}

/// Result type using [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;
