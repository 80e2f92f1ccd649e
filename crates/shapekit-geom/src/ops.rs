//! Composite operations built purely on the [`Figure`] interface.

use tracing::debug;

use crate::error::{GeomError, Result};
use crate::model::{Figure, Point};

/// Scales a shape by `factor` with `pivot` as the fixed center, even
/// though each shape's own `scale` is anchored to that shape.
///
/// The shape's anchor is temporarily relocated to the pivot, the native
/// scale is applied there, and a corrective translation restores the
/// final placement. After the move-then-scale steps the shape differs
/// from the desired result by a pure translation, so matching up the
/// frame centers fixes all of its geometry at once:
/// the frame center starts at `p1`, ends up at `p2`, and must land at
/// `pivot + factor * (p1 - pivot)`.
///
/// No variant-specific code is involved; the four movement/scale
/// primitives are jointly sufficient.
pub fn scale_about<S: Figure + ?Sized>(shape: &mut S, pivot: Point, factor: f64) -> Result<()> {
    // Validate up front so a rejected call leaves the shape untouched.
    if factor <= 0.0 {
        return Err(GeomError::InvalidScaleFactor { factor });
    }

    let p1 = shape.frame_rect().center;
    shape.move_to(pivot);
    shape.scale(factor)?;
    let p2 = shape.frame_rect().center;
    shape.move_by(
        factor * (p1.x - pivot.x) - (p2.x - pivot.x),
        factor * (p1.y - pivot.y) - (p2.y - pivot.y),
    );

    debug!(
        factor,
        pivot.x,
        pivot.y,
        "scaled shape about external pivot"
    );
    Ok(())
}
