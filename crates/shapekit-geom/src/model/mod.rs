use serde::{Deserialize, Serialize};

use crate::error::Result;

mod polygon;
mod rectangle;
mod ring;

pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use ring::Ring;

/// A 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned bounding frame, stored as center plus extents.
///
/// This is the universal return type of [`Figure::frame_rect`]; its
/// `center` is the box's own geometric center, which is not necessarily
/// the anchor point of the shape it encloses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    pub width: f64,
    pub height: f64,
    pub center: Point,
}

impl FrameRect {
    pub fn new(width: f64, height: f64, center: Point) -> Self {
        Self {
            width,
            height,
            center,
        }
    }

    /// Builds a frame from its edge coordinates.
    pub fn from_edges(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            width: right - left,
            height: top - bottom,
            center: Point::new((left + right) / 2.0, (bottom + top) / 2.0),
        }
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    /// The smallest frame enclosing both `self` and `other`.
    pub fn union(&self, other: &FrameRect) -> FrameRect {
        FrameRect::from_edges(
            self.left().min(other.left()),
            self.bottom().min(other.bottom()),
            self.right().max(other.right()),
            self.top().max(other.top()),
        )
    }
}

/// The capability contract every concrete shape implements.
///
/// `move_to` relocates the shape so that its anchor lands on the given
/// point; which point serves as the anchor differs per variant (stored
/// center, inner-circle center, centroid), but the operation is always a
/// pure translation of all geometry. `scale` is a uniform scale about that
/// same anchor and rejects non-positive factors before mutating anything.
pub trait Figure {
    fn area(&self) -> f64;
    fn frame_rect(&self) -> FrameRect;
    fn move_to(&mut self, pos: Point);
    fn move_by(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, factor: f64) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Ring,
    Polygon,
}

/// Enum wrapper for all shapes in the model.
///
/// The variant set is closed and small, so aggregate code holds a
/// `Vec<Shape>` and dispatches through the [`Figure`] impl below rather
/// than through boxed trait objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Ring(Ring),
    Polygon(Polygon),
}

impl Figure for Shape {
    fn area(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.area(),
            Shape::Ring(s) => s.area(),
            Shape::Polygon(s) => s.area(),
        }
    }

    fn frame_rect(&self) -> FrameRect {
        match self {
            Shape::Rectangle(s) => s.frame_rect(),
            Shape::Ring(s) => s.frame_rect(),
            Shape::Polygon(s) => s.frame_rect(),
        }
    }

    fn move_to(&mut self, pos: Point) {
        match self {
            Shape::Rectangle(s) => s.move_to(pos),
            Shape::Ring(s) => s.move_to(pos),
            Shape::Polygon(s) => s.move_to(pos),
        }
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.move_by(dx, dy),
            Shape::Ring(s) => s.move_by(dx, dy),
            Shape::Polygon(s) => s.move_by(dx, dy),
        }
    }

    fn scale(&mut self, factor: f64) -> Result<()> {
        match self {
            Shape::Rectangle(s) => s.scale(factor),
            Shape::Ring(s) => s.scale(factor),
            Shape::Polygon(s) => s.scale(factor),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ring(_) => ShapeType::Ring,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// Human-readable variant name for reports.
    pub fn name(&self) -> &'static str {
        match self.shape_type() {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ring => "Ring",
            ShapeType::Polygon => "Polygon",
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Ring> for Shape {
    fn from(s: Ring) -> Self {
        Shape::Ring(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}
