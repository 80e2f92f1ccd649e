use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};

use super::{Figure, FrameRect, Point};

/// An annulus: an outer circle with a smaller circle cut out of it.
///
/// The two centers need not coincide, but the inner circle must lie fully
/// inside the outer one: `distance(outer_center, inner_center) +
/// inner_radius <= outer_radius`. Concentric rings are valid; the
/// containment inequality already covers that case.
///
/// The inner-circle center is the ring's anchor: `move_to` places it and
/// `scale` keeps it fixed, scaling both radii and the offset of the outer
/// center along with the rest of the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    outer_radius: f64,
    inner_radius: f64,
    outer_center: Point,
    inner_center: Point,
}

impl Ring {
    pub fn new(
        outer_radius: f64,
        outer_center: Point,
        inner_radius: f64,
        inner_center: Point,
    ) -> Result<Self> {
        if outer_radius <= 0.0 {
            return Err(GeomError::InvalidDimension {
                name: "outer radius",
                value: outer_radius,
            });
        }
        if inner_radius <= 0.0 {
            return Err(GeomError::InvalidDimension {
                name: "inner radius",
                value: inner_radius,
            });
        }
        if outer_center.distance_to(&inner_center) + inner_radius > outer_radius {
            return Err(GeomError::InvalidGeometry {
                reason: format!(
                    "inner circle (radius {} at ({}, {})) is not contained in outer circle (radius {} at ({}, {}))",
                    inner_radius,
                    inner_center.x,
                    inner_center.y,
                    outer_radius,
                    outer_center.x,
                    outer_center.y
                ),
            });
        }
        Ok(Self {
            outer_radius,
            inner_radius,
            outer_center,
            inner_center,
        })
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_center(&self) -> Point {
        self.outer_center
    }

    pub fn inner_center(&self) -> Point {
        self.inner_center
    }
}

impl Figure for Ring {
    fn area(&self) -> f64 {
        std::f64::consts::PI * (self.outer_radius * self.outer_radius
            - self.inner_radius * self.inner_radius)
    }

    /// The outer circle's bounding square.
    fn frame_rect(&self) -> FrameRect {
        FrameRect::new(
            2.0 * self.outer_radius,
            2.0 * self.outer_radius,
            self.outer_center,
        )
    }

    /// Places the inner-circle center at `pos`, preserving the offset
    /// between the two centers.
    fn move_to(&mut self, pos: Point) {
        let dx = self.outer_center.x - self.inner_center.x;
        let dy = self.outer_center.y - self.inner_center.y;
        self.inner_center = pos;
        self.outer_center = Point::new(pos.x + dx, pos.y + dy);
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.inner_center.x += dx;
        self.inner_center.y += dy;
        self.outer_center.x += dx;
        self.outer_center.y += dy;
    }

    /// Scales about the inner-circle center. Both radii and the
    /// center-to-center offset scale by the same factor, so containment
    /// is preserved by construction.
    fn scale(&mut self, factor: f64) -> Result<()> {
        if factor <= 0.0 {
            return Err(GeomError::InvalidScaleFactor { factor });
        }
        self.outer_center = Point::new(
            self.inner_center.x + factor * (self.outer_center.x - self.inner_center.x),
            self.inner_center.y + factor * (self.outer_center.y - self.inner_center.y),
        );
        self.outer_radius *= factor;
        self.inner_radius *= factor;
        Ok(())
    }
}
