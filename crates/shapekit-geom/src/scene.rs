//! An ordered collection of shapes with aggregate queries.

use tracing::debug;

use crate::error::Result;
use crate::model::{Figure, FrameRect, Point, Shape};
use crate::ops::scale_about;

/// Owns a heterogeneous set of shapes in insertion order.
///
/// All aggregate results (area totals, union frames, reports) follow that
/// order. The empty scene is a valid state: aggregate queries return
/// `None`/zero rather than assuming a first element exists.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        debug!(kind = shape.name(), "added shape to scene");
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Mutable access for applying transforms. The shape methods guard
    /// their own invariants, so handing out `&mut Shape` is safe.
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Sum of all shape areas, added in insertion order.
    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(|s| s.area()).sum()
    }

    /// The smallest axis-aligned frame enclosing every shape, or `None`
    /// for an empty scene.
    pub fn union_frame(&self) -> Option<FrameRect> {
        let mut frames = self.shapes.iter().map(|s| s.frame_rect());
        let first = frames.next()?;
        Some(frames.fold(first, |acc, f| acc.union(&f)))
    }

    /// Applies [`scale_about`] to every shape with a shared pivot.
    ///
    /// The factor is validated by the first per-shape call before any
    /// mutation, so a rejected factor leaves the whole scene unchanged.
    pub fn scale_about_all(&mut self, pivot: Point, factor: f64) -> Result<()> {
        for shape in &mut self.shapes {
            scale_about(shape, pivot, factor)?;
        }
        Ok(())
    }
}
