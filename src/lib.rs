//! Continuous-curvature rounded-rectangle outlines.
//!
//! Classic rounded rectangles join straight edges to circular arcs, which
//! leaves a visible curvature jump at the join. This crate instead builds
//! each corner from three cubic Bezier segments solved in closed form so
//! that curvature ramps smoothly from zero on the straight edge up through
//! the corner and back down again. The output is a plain command list
//! ([`Path`]) ready to feed into any renderer.
//!
//! The one-call entry point takes a size, per-corner radii and a corner
//! style:
//!
//! ```
//! use squircle::{outline, CornerRadii, CornerStyle, Size};
//!
//! let size = Size::new(100.0, 60.0)?;
//! let path = outline(size, CornerRadii::uniform(12.0), CornerStyle::Continuous);
//! assert!(path.is_closed());
//! assert_eq!(path.first_point(), path.last_point());
//! # Ok::<(), squircle::NumericError>(())
//! ```
//!
//! Size-independent [`Shape`] descriptors layer radii, corner style,
//! layout direction and interpolation on top of the same geometry:
//!
//! ```
//! use squircle::{LayoutDirection, Shape, Size};
//!
//! let capsule = Shape::capsule();
//! let path = capsule.outline(Size::new(80.0, 40.0)?, LayoutDirection::Ltr);
//! assert!(path.is_closed());
//! # Ok::<(), squircle::NumericError>(())
//! ```
//!
//! Radii are clamped per corner to half the minor dimension, degenerate
//! inputs fall back to the nearest well-defined shape, and every emitted
//! contour is closed. Enable the `tracing` feature for debug logging of
//! strategy selection and solver fallbacks.

pub mod geometry;
pub(crate) mod log;
pub mod path;
pub mod shape;
pub mod types;

pub use geometry::corner::{
    ControlNet, CornerBuilder, DEFAULT_ARC_FRACTION, DEFAULT_EXTENSION_FRACTION,
};
pub use geometry::outline::{assemble, normalize, outline};
pub use path::{Path, PathCommand};
pub use shape::{
    lerp, lerp_styled, Capsule, CornerOverrides, DirectionalRadii, LerpShape, OverrideShape,
    Rectangle, Rounded, Shape, Uneven,
};
pub use types::{CornerRadii, CornerStyle, LayoutDirection, NumericError, Size, Strategy};
