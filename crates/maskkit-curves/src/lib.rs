//! # MaskKit Curves
//!
//! Procedural fill-curve generation for mask layouts: space-filling and
//! fractal curves produced from recursive rewrite rules, interpreted as
//! directional ("turtle") motion, and widened into filled trace polygons.
//!
//! ## Pipeline
//!
//! ```text
//! rewrite rules (lsystem)
//!   └── symbol sequence of moves and turns
//!         └── turtle interpretation (turtle)
//!               └── Centerline
//!                     ├── validation (validate, test support)
//!                     └── path widening (widen)
//!                           └── closed trace Polygon
//! ```
//!
//! Two curve families are supported:
//!
//! - **Grid**: 90° turns on a square lattice, 4 moves per rewrite, so
//!   order *n* yields exactly 4ⁿ segments.
//! - **Hex**: the Gosper flowsnake, 60° turns on a hexagonal lattice,
//!   7 moves per rewrite, 7ⁿ segments.
//!
//! The [`fill_curve`] helper runs the whole pipeline from a [`CurveSpec`]
//! parameter record. The [`serpentine`] module provides the non-fractal
//! boustrophedon meander used for large-area fills.
//!
//! All operations are pure functions of their inputs; memoization of
//! repeated identical shapes belongs to the calling assembly layer, keyed
//! by the full parameter record (every record here is serde-serializable
//! for exactly that purpose).

pub mod centerline;
pub mod fill;
pub mod lsystem;
pub mod serpentine;
pub mod turtle;
pub mod validate;
pub mod widen;

pub use centerline::Centerline;
pub use fill::{fill_curve, CurveSpec};
pub use lsystem::{generate, CurveFamily, Symbol, MAX_ORDER};
pub use turtle::interpret;
pub use widen::{arc_between, widen, JoinStyle, DEFAULT_MITER_LIMIT};
