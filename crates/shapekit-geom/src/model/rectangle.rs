use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};

use super::{Figure, FrameRect, Point};

/// An axis-aligned rectangle defined by its center and dimensions.
///
/// Width and height are strictly positive for the lifetime of the value:
/// the constructor rejects non-positive dimensions and `scale` rejects
/// non-positive factors, so no other code path can break the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
    center: Point,
}

impl Rectangle {
    pub fn new(width: f64, height: f64, center: Point) -> Result<Self> {
        if width <= 0.0 {
            return Err(GeomError::InvalidDimension {
                name: "width",
                value: width,
            });
        }
        if height <= 0.0 {
            return Err(GeomError::InvalidDimension {
                name: "height",
                value: height,
            });
        }
        Ok(Self {
            width,
            height,
            center,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

impl Figure for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn frame_rect(&self) -> FrameRect {
        FrameRect::new(self.width, self.height, self.center)
    }

    fn move_to(&mut self, pos: Point) {
        self.center = pos;
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    /// Grows or shrinks the rectangle about its own center.
    fn scale(&mut self, factor: f64) -> Result<()> {
        if factor <= 0.0 {
            return Err(GeomError::InvalidScaleFactor { factor });
        }
        self.width *= factor;
        self.height *= factor;
        Ok(())
    }
}
