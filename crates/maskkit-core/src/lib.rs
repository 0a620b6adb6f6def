//! # MaskKit Core
//!
//! Shared foundation for the MaskKit geometry engine:
//!
//! - **Geometry primitives**: [`Point`] and [`Polygon`] with the small set
//!   of operations the builders need (signed area, bounding box, centroid,
//!   translation, reversal).
//! - **Error taxonomy**: [`LayoutError`] covering parameter validation,
//!   shape configuration, degenerate geometry, and self-intersection
//!   detection. Every error carries the offending value and the limit it
//!   violated.
//! - **Units**: the process-wide, write-once scale factor that converts
//!   floating-point length units to the integer coordinate grid of the
//!   consuming design database, plus [`GridPoint`] conversions.
//!
//! All types are plain values owned by the caller. The unit scale is the
//! only process-wide state and becomes read-only after the first use.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{LayoutError, Result};
pub use geometry::{rotate_quarter_turns, Point, Polygon};
pub use units::{set_unit_scale, unit_scale, GridPoint, DEFAULT_UNIT_SCALE};
