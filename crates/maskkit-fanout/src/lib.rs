//! # MaskKit Fanout
//!
//! Electrode geometry and routing for mask layouts:
//!
//! - **Pads** ([`pad`]): axis-aligned rectangular pads with straight or
//!   round corner chamfers.
//! - **Edge selection** ([`edge`]): picks the facing edges of two pads by
//!   dominant displacement axis, with explicit overrides.
//! - **Bridges** ([`bridge`]): a single trapezoid joining two facing
//!   edges.
//! - **Leads** ([`lead`]): a bent multi-segment connector with selectable
//!   corner treatment, widened into a filled trace.
//! - **Spacing** ([`spacing`]): monotonic or centered electrode spacing
//!   sequences under four distribution laws.
//! - **Marks** ([`marks`]): boolean-free alignment-mark primitives for
//!   external compositing.
//!
//! Every builder is a pure function of its parameter record; repeated
//! identical shapes should be memoized by the calling assembly layer,
//! keyed by the record (all records serialize with serde).

pub mod bridge;
pub mod edge;
pub mod lead;
pub mod marks;
pub mod pad;
pub mod spacing;

pub use bridge::trapezoidal_bridge;
pub use edge::{edge_span, facing_edges, EdgeSpan, PadEdge};
pub use lead::{lead_route, CornerStyle, LeadRoute, LeadStyle};
pub use pad::{Chamfer, ChamferKind, Pad};
pub use spacing::{plan_spacing, ArrangementMode, DistributionLaw, SpacingPlan};
