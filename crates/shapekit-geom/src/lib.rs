//! # ShapeKit Geometry
//!
//! Core 2D shape model for ShapeKit.
//!
//! ## Core Components
//!
//! - **Model**: [`Point`] and [`FrameRect`] value types, the [`Figure`]
//!   capability trait, and the concrete shapes [`Rectangle`], [`Ring`]
//!   (annulus), and [`Polygon`], wrapped in the closed [`Shape`] enum
//! - **Ops**: [`scale_about`] — uniform scaling about an arbitrary pivot,
//!   expressed entirely through the [`Figure`] interface
//! - **Scene**: [`Scene`] — an ordered shape collection with aggregate
//!   area and union-frame queries
//!
//! ## Usage
//!
//! ```
//! use shapekit_geom::{Point, Rectangle, Scene};
//!
//! let mut scene = Scene::new();
//! scene.add(Rectangle::new(4.0, 5.0, Point::new(2.0, 3.0))?);
//! scene.scale_about_all(Point::new(0.0, 0.0), 2.0)?;
//! assert!((scene.total_area() - 80.0).abs() < 1e-9);
//! # Ok::<(), shapekit_geom::GeomError>(())
//! ```
//!
//! Every constructor is a fallible factory: a shape that would violate
//! its invariants (non-positive dimensions, an inner circle escaping its
//! outer circle, a polygon with fewer than three vertices) is never
//! produced. See [`GeomError`] for the failure taxonomy.

pub mod error;
pub mod model;
pub mod ops;
pub mod scene;

pub use error::{GeomError, Result};
pub use model::{Figure, FrameRect, Point, Polygon, Rectangle, Ring, Shape, ShapeType};
pub use ops::scale_about;
pub use scene::Scene;
