//! Rewrite-rule expansion for the supported curve families.
//!
//! A curve is described by a symbol sequence over two move symbols and two
//! turn symbols. Expansion substitutes each move symbol by the family's
//! rule table and passes turn symbols through unchanged, so the move count
//! after `order` iterations is exactly `branching_factor ^ order`.
//!
//! Sequences are explicit symbol lists, not strings; growth is bounded by
//! [`MAX_ORDER`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use maskkit_core::{LayoutError, Result};

/// One instruction of a curve description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// Advance one step (primary rewrite symbol).
    MoveA,
    /// Advance one step (secondary rewrite symbol).
    MoveB,
    /// Rotate the heading counter-clockwise by the family's angular unit.
    TurnLeft,
    /// Rotate the heading clockwise by the family's angular unit.
    TurnRight,
}

impl Symbol {
    /// Whether this symbol advances the turtle.
    pub fn is_move(&self) -> bool {
        matches!(self, Symbol::MoveA | Symbol::MoveB)
    }
}

use Symbol::{MoveA, MoveB, TurnLeft, TurnRight};

/// Grid family, rule A: `B + A - A - A +`
const GRID_RULE_A: &[Symbol] = &[
    MoveB, TurnLeft, MoveA, TurnRight, MoveA, TurnRight, MoveA, TurnLeft,
];

/// Grid family, rule B: `- B + A B + A -`
const GRID_RULE_B: &[Symbol] = &[
    TurnRight, MoveB, TurnLeft, MoveA, MoveB, TurnLeft, MoveA, TurnRight,
];

/// Hex family (Gosper), rule A: `A - B - - B + A + + A A + B -`
const HEX_RULE_A: &[Symbol] = &[
    MoveA, TurnRight, MoveB, TurnRight, TurnRight, MoveB, TurnLeft, MoveA, TurnLeft, TurnLeft,
    MoveA, MoveA, TurnLeft, MoveB, TurnRight,
];

/// Hex family (Gosper), rule B: `+ A - B B - - B - A + + A + B`
const HEX_RULE_B: &[Symbol] = &[
    TurnLeft, MoveA, TurnRight, MoveB, MoveB, TurnRight, TurnRight, MoveB, TurnRight, MoveA,
    TurnLeft, TurnLeft, MoveA, TurnLeft, MoveB,
];

/// Highest supported expansion order.
///
/// Order 7 of the hex family is already ~824k segments; rejecting higher
/// orders keeps rewrite growth bounded.
pub const MAX_ORDER: u32 = 7;

/// The two supported curve families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveFamily {
    /// Square-lattice fractal meander: 90° turns, 4 moves per rewrite.
    Grid,
    /// Gosper flowsnake: 60° turns, 7 moves per rewrite.
    Hex,
}

impl CurveFamily {
    /// Moves produced per rewritten move symbol.
    pub fn branching_factor(&self) -> usize {
        match self {
            CurveFamily::Grid => 4,
            CurveFamily::Hex => 7,
        }
    }

    /// The turn quantum in degrees.
    pub fn angular_unit_degrees(&self) -> f64 {
        match self {
            CurveFamily::Grid => 90.0,
            CurveFamily::Hex => 60.0,
        }
    }

    /// Number of distinct headings on the family's lattice.
    pub fn heading_count(&self) -> usize {
        match self {
            CurveFamily::Grid => 4,
            CurveFamily::Hex => 6,
        }
    }

    /// Display name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            CurveFamily::Grid => "grid",
            CurveFamily::Hex => "hex",
        }
    }

    fn rule(&self, symbol: Symbol) -> &'static [Symbol] {
        match (self, symbol) {
            (CurveFamily::Grid, MoveA) => GRID_RULE_A,
            (CurveFamily::Grid, MoveB) => GRID_RULE_B,
            (CurveFamily::Hex, MoveA) => HEX_RULE_A,
            (CurveFamily::Hex, MoveB) => HEX_RULE_B,
            _ => unreachable!("turn symbols are never rewritten"),
        }
    }
}

/// Expand the family's start symbol `order` times.
///
/// Order 0 returns the start symbol itself. Deterministic.
///
/// # Errors
///
/// `InvalidParameter` if `order > MAX_ORDER`.
pub fn generate(family: CurveFamily, order: u32) -> Result<Vec<Symbol>> {
    if order > MAX_ORDER {
        return Err(LayoutError::InvalidParameter {
            name: "order",
            value: order as f64,
            expected: "<= 7",
        });
    }

    let mut sequence = vec![MoveA];
    for _ in 0..order {
        // Each move symbol expands to one rule's worth of symbols.
        let rule_len = family.rule(MoveA).len();
        let mut next = Vec::with_capacity(sequence.len() * rule_len);
        for &symbol in &sequence {
            if symbol.is_move() {
                next.extend_from_slice(family.rule(symbol));
            } else {
                next.push(symbol);
            }
        }
        sequence = next;
    }

    debug!(
        family = family.name(),
        order,
        symbols = sequence.len(),
        "expanded curve sequence"
    );
    Ok(sequence)
}
