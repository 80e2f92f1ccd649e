use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};

use super::{Figure, FrameRect, Point};

/// A simple polygon given as an ordered vertex list.
///
/// Insertion order is winding order; at least three vertices are required.
/// The centroid is computed once at construction via the signed-area
/// weighted (shoelace) formula and then maintained incrementally: moves
/// translate it together with the vertices and `scale` uses it as the
/// fixed projection center without recomputing it.
///
/// The vertex storage is exclusively owned; `clone` deep-copies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
    centroid: Point,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeomError::InvalidGeometry {
                reason: format!(
                    "a polygon needs at least 3 vertices, got {}",
                    vertices.len()
                ),
            });
        }
        let centroid = centroid_of(&vertices);
        Ok(Self { vertices, centroid })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }
}

/// Signed shoelace area; positive for counter-clockwise winding.
fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

fn centroid_of(vertices: &[Point]) -> Point {
    let area = signed_area(vertices);
    if area.abs() < f64::EPSILON {
        // Degenerate (collinear) input: fall back to the vertex mean.
        let n = vertices.len() as f64;
        let (sx, sy) = vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        return Point::new(sx / n, sy / n);
    }

    let n = vertices.len();
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    Point::new(cx / (6.0 * area), cy / (6.0 * area))
}

impl Figure for Polygon {
    fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    fn frame_rect(&self) -> FrameRect {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for v in &self.vertices {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }

        FrameRect::from_edges(min_x, min_y, max_x, max_y)
    }

    /// Translates every vertex so the centroid lands on `pos`.
    fn move_to(&mut self, pos: Point) {
        let dx = pos.x - self.centroid.x;
        let dy = pos.y - self.centroid.y;
        self.move_by(dx, dy);
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            v.x += dx;
            v.y += dy;
        }
        self.centroid.x += dx;
        self.centroid.y += dy;
    }

    /// Re-projects every vertex radially from the centroid. The centroid
    /// is a fixed point of this map and is reused exactly, not recomputed.
    fn scale(&mut self, factor: f64) -> Result<()> {
        if factor <= 0.0 {
            return Err(GeomError::InvalidScaleFactor { factor });
        }
        for v in &mut self.vertices {
            v.x = self.centroid.x + factor * (v.x - self.centroid.x);
            v.y = self.centroid.y + factor * (v.y - self.centroid.y);
        }
        Ok(())
    }
}
