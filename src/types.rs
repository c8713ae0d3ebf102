//! Value types shared across the crate.
//!
//! Design goals:
//! - Radii and dimensions are plain `f64` once validated; the geometry core
//!   never re-checks them
//! - Invalid sizes are rejected at the boundary via [`Size::new`], not deep
//!   inside the solvers

use std::fmt;

use thiserror::Error;

/// Error type for invalid caller-supplied numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is zero when non-zero required
    #[error("value is zero")]
    Zero,
    /// Value is negative when positive required
    #[error("value is negative")]
    Negative,
}

fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Rectangle dimensions. Both sides are positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a validated size (rejects NaN, infinite, zero and negative sides).
    pub fn new(width: f64, height: f64) -> Result<Size, NumericError> {
        Ok(Size {
            width: check_positive(width)?,
            height: check_positive(height)?,
        })
    }

    /// Square size with the given side length.
    pub fn splat(side: f64) -> Result<Size, NumericError> {
        let side = check_positive(side)?;
        Ok(Size {
            width: side,
            height: side,
        })
    }

    /// The smaller of width and height.
    #[inline]
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Largest corner radius this rectangle can carry: half the minor dimension.
    #[inline]
    pub fn max_corner_radius(&self) -> f64 {
        self.min_dimension() * 0.5
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Absolute per-corner radii in path units, named by screen position
/// (y grows downward, so "top" is the edge the contour starts on).
///
/// Post-normalization invariant: each radius lies in
/// `[0, min(width, height) / 2]`. Directional start/end radii are resolved
/// to this form by the shape layer before the geometry runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub const ZERO: CornerRadii = CornerRadii {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Broadcast a single radius to all four corners.
    pub const fn uniform(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Clamp every corner into the valid range for the given size.
    pub fn clamped(self, size: Size) -> Self {
        let max = size.max_corner_radius();
        Self {
            top_left: self.top_left.clamp(0.0, max),
            top_right: self.top_right.clamp(0.0, max),
            bottom_right: self.bottom_right.clamp(0.0, max),
            bottom_left: self.bottom_left.clamp(0.0, max),
        }
    }

    pub fn all_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }

    /// True when every corner carries at least the given radius.
    pub fn all_at_least(&self, radius: f64) -> bool {
        self.top_left >= radius
            && self.top_right >= radius
            && self.bottom_right >= radius
            && self.bottom_left >= radius
    }

    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }

    /// Per-corner linear interpolation. The result is NOT re-clamped here:
    /// interpolating two sets that were valid at different sizes can exceed
    /// the half-dimension bound, so callers must normalize afterwards.
    pub fn lerp(start: CornerRadii, stop: CornerRadii, fraction: f64) -> CornerRadii {
        CornerRadii {
            top_left: lerp_f64(start.top_left, stop.top_left, fraction),
            top_right: lerp_f64(start.top_right, stop.top_right, fraction),
            bottom_right: lerp_f64(start.bottom_right, stop.bottom_right, fraction),
            bottom_left: lerp_f64(start.bottom_left, stop.bottom_left, fraction),
        }
    }
}

impl From<f64> for CornerRadii {
    fn from(radius: f64) -> Self {
        CornerRadii::uniform(radius)
    }
}

#[inline]
pub(crate) fn lerp_f64(start: f64, stop: f64, fraction: f64) -> f64 {
    start + (stop - start) * fraction
}

/// Rendering strategy selected per call from the normalized radii.
///
/// A correctness-preserving fast-path classification: callers only observe
/// the shape of the emitted command sequence, the tag itself is never
/// persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// All radii zero: four straight edges.
    PlainRectangle,
    /// Square with every radius pinned to the maximum: the curvature family
    /// collapses to a circle, so plain quarter arcs are emitted instead.
    CircularArcs,
    /// The general continuous-curvature path.
    ContinuousCurve,
}

/// Corner rendering style carried by shape descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerStyle {
    /// Curvature-continuous corners (the default).
    #[default]
    Continuous,
    /// Classic circular-arc corners.
    Circular,
}

/// Layout direction for resolving directional (start/end) radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_rejects_invalid_values() {
        assert_eq!(Size::new(f64::NAN, 1.0), Err(NumericError::NaN));
        assert_eq!(Size::new(1.0, f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Size::new(0.0, 1.0), Err(NumericError::Zero));
        assert_eq!(Size::new(1.0, -2.0), Err(NumericError::Negative));
        assert!(Size::new(100.0, 60.0).is_ok());
    }

    #[test]
    fn max_corner_radius_uses_minor_dimension() {
        let size = Size::new(100.0, 60.0).unwrap();
        assert_eq!(size.min_dimension(), 60.0);
        assert_eq!(size.max_corner_radius(), 30.0);
        assert!(!size.is_square());
        assert!(Size::splat(50.0).unwrap().is_square());
    }

    #[test]
    fn clamp_pins_radii_to_half_minor_dimension() {
        let size = Size::new(100.0, 60.0).unwrap();
        let radii = CornerRadii::new(-5.0, 10.0, 30.0, 99.0).clamped(size);
        assert_eq!(radii, CornerRadii::new(0.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn uniform_broadcasts() {
        let radii = CornerRadii::uniform(8.0);
        assert!(radii.is_uniform());
        assert_eq!(radii.top_left, 8.0);
        assert_eq!(radii.bottom_left, 8.0);
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        let a = CornerRadii::new(0.0, 10.0, 20.0, 30.0);
        let b = CornerRadii::new(40.0, 30.0, 20.0, 10.0);
        assert_eq!(CornerRadii::lerp(a, b, 0.0), a);
        assert_eq!(CornerRadii::lerp(a, b, 1.0), b);
        let mid = CornerRadii::lerp(a, b, 0.5);
        assert_eq!(mid, CornerRadii::new(20.0, 20.0, 20.0, 20.0));
    }
}
