//! Planar geometry primitives shared by all builders.

use serde::{Deserialize, Serialize};

/// A 2D point in floating-point length units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A simple closed polygon given as an ordered vertex list.
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area by the shoelace formula: positive for counter-clockwise
    /// winding, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.vertices[i].x * self.vertices[j].y;
            area -= self.vertices[j].x * self.vertices[i].y;
        }
        area / 2.0
    }

    /// Absolute enclosed area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        if self.vertices.is_empty() {
            return None;
        }
        let min_x = self.vertices.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = self.vertices.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = self.vertices.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = self.vertices.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Some((min_x, min_y, max_x, max_y))
    }

    /// Area-weighted centroid, falling back to the vertex mean for
    /// near-degenerate polygons.
    pub fn centroid(&self) -> Option<Point> {
        let n = self.vertices.len();
        if n == 0 {
            return None;
        }
        let area = self.signed_area();
        if area.abs() < 1e-12 {
            let (sx, sy) = self
                .vertices
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            return Some(Point::new(sx / n as f64, sy / n as f64));
        }
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let cross = self.vertices[i].x * self.vertices[j].y
                - self.vertices[j].x * self.vertices[i].y;
            cx += (self.vertices[i].x + self.vertices[j].x) * cross;
            cy += (self.vertices[i].y + self.vertices[j].y) * cross;
        }
        Some(Point::new(cx / (6.0 * area), cy / (6.0 * area)))
    }

    /// The same polygon translated by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Polygon {
        Polygon::new(
            self.vertices
                .iter()
                .map(|p| Point::new(p.x + dx, p.y + dy))
                .collect(),
        )
    }

    /// The same polygon with reversed vertex order (opposite winding).
    pub fn reversed(&self) -> Polygon {
        Polygon::new(self.vertices.iter().rev().copied().collect())
    }
}

/// Rotate a polygon by `quarter_turns` * 90 degrees counter-clockwise about
/// its own centroid.
///
/// Rigid rotation is an explicit post-processing step requested by the
/// calling assembly layer; no builder applies it internally.
pub fn rotate_quarter_turns(polygon: &Polygon, quarter_turns: i32) -> Polygon {
    let Some(c) = polygon.centroid() else {
        return polygon.clone();
    };
    let k = quarter_turns.rem_euclid(4);
    let rotate = |p: &Point| -> Point {
        let dx = p.x - c.x;
        let dy = p.y - c.y;
        let (rx, ry) = match k {
            0 => (dx, dy),
            1 => (-dy, dx),
            2 => (-dx, -dy),
            _ => (dy, -dx),
        };
        Point::new(c.x + rx, c.y + ry)
    };
    Polygon::new(polygon.vertices().iter().map(rotate).collect())
}
