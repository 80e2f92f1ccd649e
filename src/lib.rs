//! # ShapeKit
//!
//! A small 2D shape-algebra toolkit. Rectangles, rings (annuli), and
//! polygons live behind one polymorphic interface supporting area
//! computation, bounding-frame queries, translation, and uniform scaling
//! about an arbitrary reference point.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace:
//!
//! 1. **shapekit-geom** - Shape model, transforms, scene aggregation
//! 2. **shapekit** - Driver binary that builds a scene, reports it, and
//!    applies interactive scale-about-a-point transforms
//!
//! All geometry is exact closed-form; there is no rendering, persistence,
//! or concurrency in this workspace.

pub use shapekit_geom::{
    scale_about, Figure, FrameRect, GeomError, Point, Polygon, Rectangle, Ring, Scene, Shape,
    ShapeType,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
