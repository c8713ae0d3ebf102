//! Shape descriptors: small value types that pair corner radii with a
//! corner style and resolve to an outline at a concrete size.
//!
//! Descriptors are size-independent and cheap to copy around; nothing is
//! solved until [`Shape::outline`] runs. Directional (start/end) radii
//! resolve against a [`LayoutDirection`] at that point, so one descriptor
//! serves both LTR and RTL layouts.

use std::fmt;

use crate::geometry::outline;
use crate::path::Path;
use crate::types::{lerp_f64, CornerRadii, CornerStyle, LayoutDirection, Size};

/// Direction-relative per-corner radii. "Start" is the left side in LTR
/// layouts and the right side in RTL layouts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionalRadii {
    pub top_start: f64,
    pub top_end: f64,
    pub bottom_end: f64,
    pub bottom_start: f64,
}

impl DirectionalRadii {
    pub const ZERO: DirectionalRadii = DirectionalRadii {
        top_start: 0.0,
        top_end: 0.0,
        bottom_end: 0.0,
        bottom_start: 0.0,
    };

    pub const fn new(top_start: f64, top_end: f64, bottom_end: f64, bottom_start: f64) -> Self {
        Self {
            top_start,
            top_end,
            bottom_end,
            bottom_start,
        }
    }

    pub const fn uniform(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Map direction-relative radii onto absolute screen corners.
    pub fn resolve(self, direction: LayoutDirection) -> CornerRadii {
        match direction {
            LayoutDirection::Ltr => CornerRadii {
                top_left: self.top_start,
                top_right: self.top_end,
                bottom_right: self.bottom_end,
                bottom_left: self.bottom_start,
            },
            LayoutDirection::Rtl => CornerRadii {
                top_left: self.top_end,
                top_right: self.top_start,
                bottom_right: self.bottom_start,
                bottom_left: self.bottom_end,
            },
        }
    }

    pub fn lerp(start: DirectionalRadii, stop: DirectionalRadii, fraction: f64) -> DirectionalRadii {
        DirectionalRadii {
            top_start: lerp_f64(start.top_start, stop.top_start, fraction),
            top_end: lerp_f64(start.top_end, stop.top_end, fraction),
            bottom_end: lerp_f64(start.bottom_end, stop.bottom_end, fraction),
            bottom_start: lerp_f64(start.bottom_start, stop.bottom_start, fraction),
        }
    }
}

/// Per-corner radius overrides, direction-relative. Unset corners keep
/// the base shape's radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerOverrides {
    pub top_start: Option<f64>,
    pub top_end: Option<f64>,
    pub bottom_end: Option<f64>,
    pub bottom_start: Option<f64>,
}

impl CornerOverrides {
    pub fn top_start(mut self, radius: f64) -> Self {
        self.top_start = Some(radius);
        self
    }

    pub fn top_end(mut self, radius: f64) -> Self {
        self.top_end = Some(radius);
        self
    }

    pub fn bottom_end(mut self, radius: f64) -> Self {
        self.bottom_end = Some(radius);
        self
    }

    pub fn bottom_start(mut self, radius: f64) -> Self {
        self.bottom_start = Some(radius);
        self
    }

    fn apply(&self, base: CornerRadii, size: Size, direction: LayoutDirection) -> CornerRadii {
        let max = size.max_corner_radius();
        let mut radii = base;
        let slots: [(&Option<f64>, &mut f64); 4] = match direction {
            LayoutDirection::Ltr => [
                (&self.top_start, &mut radii.top_left),
                (&self.top_end, &mut radii.top_right),
                (&self.bottom_end, &mut radii.bottom_right),
                (&self.bottom_start, &mut radii.bottom_left),
            ],
            LayoutDirection::Rtl => [
                (&self.top_start, &mut radii.top_right),
                (&self.top_end, &mut radii.top_left),
                (&self.bottom_end, &mut radii.bottom_left),
                (&self.bottom_start, &mut radii.bottom_right),
            ],
        };
        for (value, slot) in slots {
            if let Some(radius) = *value {
                *slot = radius.clamp(0.0, max);
            }
        }
        radii
    }
}

// ============================================================================
// Shape variants
// ============================================================================

/// Four sharp corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle;

/// Every corner pinned to half the minor dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Capsule {
    pub style: CornerStyle,
}

/// One radius for all four corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rounded {
    pub radius: f64,
    pub style: CornerStyle,
}

/// Individual direction-relative radii per corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uneven {
    pub radii: DirectionalRadii,
    pub style: CornerStyle,
}

/// Pointwise interpolation between two shapes at a fixed fraction.
///
/// Both endpoints are resolved at the same size before their radii are
/// interpolated, and the result is clamped back into the valid range:
/// interpolants of two individually valid shapes can otherwise exceed the
/// half-dimension bound.
#[derive(Debug, Clone, PartialEq)]
pub struct LerpShape {
    pub start: Box<Shape>,
    pub stop: Box<Shape>,
    pub fraction: f64,
    /// Explicit style; when unset the endpoints' styles decide.
    pub style: Option<CornerStyle>,
}

/// A base shape with some corners replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideShape {
    pub base: Box<Shape>,
    pub overrides: CornerOverrides,
    /// Explicit style; when unset the base's style applies.
    pub style: Option<CornerStyle>,
}

/// A size-independent outline descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Capsule(Capsule),
    Rounded(Rounded),
    Uneven(Uneven),
    Lerp(LerpShape),
    Override(OverrideShape),
}

impl Shape {
    pub fn rectangle() -> Shape {
        Shape::Rectangle(Rectangle)
    }

    pub fn capsule() -> Shape {
        Shape::Capsule(Capsule::default())
    }

    pub fn rounded(radius: f64) -> Shape {
        Shape::Rounded(Rounded {
            radius,
            style: CornerStyle::default(),
        })
    }

    pub fn uneven(radii: DirectionalRadii) -> Shape {
        Shape::Uneven(Uneven {
            radii,
            style: CornerStyle::default(),
        })
    }

    /// Absolute corner radii at the given size, clamped per corner into
    /// `[0, min(width, height) / 2]`.
    ///
    /// Every variant clamps at resolve time, so interpolation always
    /// mixes radii that are valid at the target size; the interpolant is
    /// clamped once more because the mix of two valid sets can still
    /// exceed the bound when the endpoints were declared for other sizes.
    pub fn corners(&self, size: Size, direction: LayoutDirection) -> CornerRadii {
        match self {
            Shape::Rectangle(_) => CornerRadii::ZERO,
            Shape::Capsule(_) => CornerRadii::uniform(size.max_corner_radius()),
            Shape::Rounded(shape) => CornerRadii::uniform(shape.radius).clamped(size),
            Shape::Uneven(shape) => shape.radii.resolve(direction).clamped(size),
            Shape::Lerp(shape) => {
                let start = shape.start.corners(size, direction);
                let stop = shape.stop.corners(size, direction);
                CornerRadii::lerp(start, stop, shape.fraction).clamped(size)
            }
            Shape::Override(shape) => shape.overrides.apply(
                shape.base.corners(size, direction),
                size,
                direction,
            ),
        }
    }

    /// The declared corner style, if the shape carries one. Plain
    /// rectangles have no corners to style.
    pub fn style(&self) -> Option<CornerStyle> {
        match self {
            Shape::Rectangle(_) => None,
            Shape::Capsule(shape) => Some(shape.style),
            Shape::Rounded(shape) => Some(shape.style),
            Shape::Uneven(shape) => Some(shape.style),
            Shape::Lerp(shape) => shape.style.or_else(|| {
                merged_style(&shape.start, &shape.stop, shape.fraction)
            }),
            Shape::Override(shape) => shape.style.or_else(|| shape.base.style()),
        }
    }

    /// Resolve the descriptor to a closed outline contour.
    pub fn outline(&self, size: Size, direction: LayoutDirection) -> Path {
        let radii = self.corners(size, direction);
        outline::outline(size, radii, self.style().unwrap_or_default())
    }

    /// Copy of this shape with the given corner style.
    pub fn with_style(self, style: CornerStyle) -> Shape {
        match self {
            Shape::Rectangle(shape) => Shape::Rectangle(shape),
            Shape::Capsule(_) => Shape::Capsule(Capsule { style }),
            Shape::Rounded(shape) => Shape::Rounded(Rounded { style, ..shape }),
            Shape::Uneven(shape) => Shape::Uneven(Uneven { style, ..shape }),
            Shape::Lerp(shape) => Shape::Lerp(LerpShape {
                style: Some(style),
                ..shape
            }),
            Shape::Override(shape) => Shape::Override(OverrideShape {
                style: Some(style),
                ..shape
            }),
        }
    }

    /// Copy as a uniformly rounded shape with a new radius, keeping the
    /// declared style.
    pub fn with_radius(self, radius: f64) -> Shape {
        Shape::Rounded(Rounded {
            radius,
            style: self.style().unwrap_or_default(),
        })
    }

    /// Copy as an unevenly rounded shape with new radii, keeping the
    /// declared style.
    pub fn with_radii(self, radii: DirectionalRadii) -> Shape {
        Shape::Uneven(Uneven {
            radii,
            style: self.style().unwrap_or_default(),
        })
    }

    /// Copy with some corners replaced; unset corners keep this shape's
    /// radii.
    pub fn with_overrides(self, overrides: CornerOverrides) -> Shape {
        Shape::Override(OverrideShape {
            base: Box::new(self),
            overrides,
            style: None,
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rectangle(_) => write!(f, "rectangle"),
            Shape::Capsule(_) => write!(f, "capsule"),
            Shape::Rounded(shape) => write!(f, "rounded({})", shape.radius),
            Shape::Uneven(shape) => {
                let r = shape.radii;
                write!(
                    f,
                    "uneven({}, {}, {}, {})",
                    r.top_start, r.top_end, r.bottom_end, r.bottom_start
                )
            }
            Shape::Lerp(shape) => {
                write!(f, "lerp({}, {}, {})", shape.start, shape.stop, shape.fraction)
            }
            Shape::Override(shape) => write!(f, "override({})", shape.base),
        }
    }
}

/// Style for an interpolant with no explicit style: a single declared
/// endpoint style wins, two declared styles split at the midpoint.
fn merged_style(start: &Shape, stop: &Shape, fraction: f64) -> Option<CornerStyle> {
    match (start.style(), stop.style()) {
        (Some(a), Some(b)) => Some(if fraction < 0.5 { a } else { b }),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Interpolate between two shapes. Fractions at or beyond the endpoints
/// return the endpoint shape itself.
pub fn lerp(start: Shape, stop: Shape, fraction: f64) -> Shape {
    if fraction <= 0.0 {
        return start;
    }
    if fraction >= 1.0 {
        return stop;
    }
    Shape::Lerp(LerpShape {
        start: Box::new(start),
        stop: Box::new(stop),
        fraction,
        style: None,
    })
}

/// [`lerp`] with an explicit corner style for the interpolant.
pub fn lerp_styled(start: Shape, stop: Shape, fraction: f64, style: CornerStyle) -> Shape {
    lerp(start, stop, fraction).with_style(style)
}
