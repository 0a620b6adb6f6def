//! The zero-width path a trace or curve follows.

use maskkit_core::Point;

/// Tolerance below which two consecutive points count as duplicates.
const DUPLICATE_TOL: f64 = 1e-6;

/// An ordered, open polyline with no duplicate consecutive points.
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    points: Vec<Point>,
}

impl Centerline {
    /// Wrap a point list that is already free of consecutive duplicates.
    pub fn new(points: Vec<Point>) -> Self {
        debug_assert!(
            points
                .windows(2)
                .all(|w| w[0].distance_to(&w[1]) > DUPLICATE_TOL),
            "centerline contains duplicate consecutive points"
        );
        Self { points }
    }

    /// Build a centerline from raw points, removing duplicate consecutive
    /// points.
    pub fn dedup(points: Vec<Point>) -> Self {
        let mut filtered: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            match filtered.last() {
                Some(last) if last.distance_to(&p) <= DUPLICATE_TOL => {}
                _ => filtered.push(p),
            }
        }
        Self { points: filtered }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of segments (one less than the point count).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The same path walked in the opposite direction.
    pub fn reversed(&self) -> Centerline {
        Centerline {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Total path length.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }
}
