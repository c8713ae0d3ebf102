//! Continuous-curvature corner construction.
//!
//! One rectangle corner is described by a [`ControlNet`]: ten control
//! points in a corner-local unit frame, forming three cubic Bezier
//! segments that run from the point where the curve departs the
//! horizontal edge to the point where it rejoins the vertical edge. The
//! net satisfies tangency and curvature-matching conditions at both edge
//! tangent points and at the two interior segment joins, so the assembled
//! outline has no curvature jump where the straight edge meets the corner.
//!
//! The construction is entirely closed-form. A reference half-angle θ is
//! derived from two tunable fractions (how much of the 90° sweep the
//! smooth curve covers, and how far the corner's influence extends along
//! each adjacent edge). From θ, four cubic coefficients are precomputed;
//! each corner solve perturbs the cubic's constant term by the per-axis
//! extension, takes one real root (the curvature parameter κ), derives
//! the edge-side control points from κ, and finally places the two
//! central control points so the middle segment meets both sides with
//! matching first and second derivatives. Symmetric corners get the
//! mirrored construction; asymmetric corners need one extra depressed
//! quartic solve because the two sides' curvature magnitudes differ.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4, SQRT_2};
use std::sync::LazyLock;

use glam::{DVec2, dvec2};

use super::solve::{cubic_root, depressed_quartic_root};

/// Fraction of the available half-dimension the corner extends over by
/// default.
pub const DEFAULT_EXTENSION_FRACTION: f64 = 0.5;

/// Fraction of the 90° corner sweep handled by the smooth curve (the rest
/// is the straight extension) by default.
pub const DEFAULT_ARC_FRACTION: f64 = 5.0 / 9.0;

/// Control net for one corner: 10 points, three cubic segments.
///
/// Points 0..=2 lie on the horizontal edge (`y == 0`), point 3 is where
/// the curve lifts off it; points 7..=9 lie on the vertical edge
/// (`x == 1`), point 6 is where the curve lands on it. Coordinates are in
/// the corner-local unit frame and get scaled by the corner radius at
/// assembly time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlNet(pub [DVec2; 10]);

impl ControlNet {
    const ZERO: ControlNet = ControlNet([DVec2::ZERO; 10]);

    pub fn points(&self) -> &[DVec2; 10] {
        &self.0
    }

    /// Where the curve departs the horizontal edge.
    pub fn start(&self) -> DVec2 {
        self.0[0]
    }

    /// Where the curve rejoins the vertical edge.
    pub fn end(&self) -> DVec2 {
        self.0[9]
    }

    /// The three cubic segments as `[c1, c2, end]` triples following the
    /// start point.
    pub fn segments(&self) -> [[DVec2; 3]; 3] {
        [
            [self.0[1], self.0[2], self.0[3]],
            [self.0[4], self.0[5], self.0[6]],
            [self.0[7], self.0[8], self.0[9]],
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|p| p.is_finite())
    }
}

/// Builds corner control nets for one pair of tuning fractions.
///
/// Construction precomputes the reference-angle trigonometry, the four
/// cubic coefficients and the 2×2 table of boundary nets (extension
/// ratios in `{0,1}×{0,1}` — the overwhelmingly common calls). Interior
/// ratio pairs are solved on demand and deliberately not cached: they
/// only arise from intermediate interpolation or extreme aspect ratios,
/// so the table never grows.
///
/// Immutable after construction; the process-wide [`CornerBuilder::shared`]
/// instance can be read from any number of threads without synchronization.
#[derive(Debug, Clone)]
pub struct CornerBuilder {
    extension_fraction: f64,
    arc_fraction: f64,
    cos_t: f64,
    sin_t: f64,
    cot_t: f64,
    cos2: f64,
    sin2: f64,
    sin3: f64,
    k0: f64,
    k1: f64,
    k2: f64,
    k3: f64,
    boundary: [[ControlNet; 2]; 2],
}

static DEFAULT_BUILDER: LazyLock<CornerBuilder> = LazyLock::new(CornerBuilder::default);

/// Edge-side control points derived from one curvature parameter.
struct SidePoints {
    x1: f64,
    x2: f64,
    x3: f64,
    y3: f64,
}

impl CornerBuilder {
    pub fn new(extension_fraction: f64, arc_fraction: f64) -> Self {
        let theta = (1.0 - arc_fraction) * FRAC_PI_4;
        let (sin_t, cos_t) = theta.sin_cos();
        let cot_t = cos_t / sin_t;
        let cos2 = cos_t * cos_t;
        let sin2 = sin_t * sin_t;
        let cos3 = cos2 * cos_t;
        let sin3 = sin2 * sin_t;

        let k0 = 27.0 * (SQRT_2 - 6.0 * cos_t + 6.0 * SQRT_2 * cos2 - 4.0 * cos3) * cot_t
            + 2.0
                * sin_t
                * (-9.0
                    + 2.0 * (SQRT_2 - 2.0 * sin_t) * sin3
                    + 2.0 * SQRT_2 * cos_t * (9.0 + sin2)
                    - 2.0 * cos2 * (9.0 + 2.0 * sin2));
        let k1 = -81.0
            * (SQRT_2 - 2.0 + 4.0 * (SQRT_2 - 1.0) * cos_t + 2.0 * (SQRT_2 - 2.0) * cos2)
            * cot_t
            - 4.0
                * sin_t
                * (9.0 * SQRT_2 - 9.0 + SQRT_2 * sin3 + (SQRT_2 - 2.0) * cos_t * (9.0 + sin2));
        let k2 = 9.0
            * (9.0 * (3.0 * SQRT_2 - 4.0 + (4.0 * SQRT_2 - 6.0) * cos_t) * cot_t
                + (4.0 * SQRT_2 - 6.0) * sin_t);
        let k3 = 27.0 * (10.0 - 7.0 * SQRT_2) * cot_t;

        let mut builder = Self {
            extension_fraction,
            arc_fraction,
            cos_t,
            sin_t,
            cot_t,
            cos2,
            sin2,
            sin3,
            k0,
            k1,
            k2,
            k3,
            boundary: [[ControlNet::ZERO; 2]; 2],
        };
        builder.boundary = [
            [builder.solve_even(0.0), builder.solve_uneven(0.0, 1.0)],
            [builder.solve_uneven(1.0, 0.0), builder.solve_even(1.0)],
        ];
        builder
    }

    /// The process-wide builder with the default fractions. Initialized
    /// once; only ever read afterwards.
    pub fn shared() -> &'static CornerBuilder {
        &DEFAULT_BUILDER
    }

    pub fn extension_fraction(&self) -> f64 {
        self.extension_fraction
    }

    pub fn arc_fraction(&self) -> f64 {
        self.arc_fraction
    }

    /// Control net for one corner given its per-axis extension ratios,
    /// both in `[0, 1]`.
    ///
    /// Ratio pairs on the `{0,1}` boundary hit the precomputed table. A
    /// degenerate interior solve (non-finite coordinates) falls back to
    /// the nearest boundary net; that is expected for axis-aligned
    /// degenerate corners, not an error.
    pub fn control_net(&self, ratio_h: f64, ratio_v: f64) -> ControlNet {
        if let (Some(i), Some(j)) = (boundary_index(ratio_h), boundary_index(ratio_v)) {
            return self.boundary[i][j];
        }
        let net = if ratio_h == ratio_v {
            self.solve_even(ratio_h)
        } else {
            self.solve_uneven(ratio_h, ratio_v)
        };
        if net.is_finite() {
            net
        } else {
            crate::log::warn!(ratio_h, ratio_v, "degenerate corner solve, using boundary net");
            self.boundary[usize::from(ratio_h >= 0.5)][usize::from(ratio_v >= 0.5)]
        }
    }

    /// Curvature parameter for one axis: the real root of the precomputed
    /// cubic with its constant term perturbed by the extension `k`.
    fn curvature(&self, k: f64) -> f64 {
        cubic_root(
            self.k3,
            self.k2,
            self.k1 - 8.0 * k * self.sin3 * self.sin_t,
            self.k0,
        )
    }

    /// Control points along the horizontal tangent for one side, from the
    /// closed-form tangency relation. `x1` carries the curvature-matching
    /// term so the outer segment meets the edge with zero curvature jump.
    fn side_points(&self, kappa: f64) -> SidePoints {
        let x3 = FRAC_1_SQRT_2 + (self.sin_t - FRAC_1_SQRT_2) / kappa;
        let y3 = 1.0 - FRAC_1_SQRT_2 + (FRAC_1_SQRT_2 - self.cos_t) / kappa;
        let x2 = x3 - y3 * self.cot_t;
        let x1 = x2 - 1.5 * kappa * y3 * y3 / self.sin3;
        SidePoints { x1, x2, x3, y3 }
    }

    /// Symmetric corner: solve one axis, mirror across the corner
    /// diagonal, then one quadratic for the two central control points
    /// that join the halves with matching derivatives.
    fn solve_even(&self, t: f64) -> ControlNet {
        let k = self.extension_fraction * t;
        let kappa = self.curvature(k);
        let side = self.side_points(kappa);
        let x0 = -k;

        // Mirror of the horizontal side across the diagonal (x,y) -> (1-y, 1-x)
        let x6 = 1.0 - side.y3;
        let y6 = 1.0 - side.x3;
        let y7 = 1.0 - side.x2;
        let y8 = 1.0 - side.x1;
        let y9 = 1.0 - x0;

        let a = 1.5 * kappa;
        let g = self.cos2 - self.sin2;
        let dx = x6 - side.x3;
        let dy = y6 - side.y3;
        let c = -(self.cos_t * dy - self.sin_t * dx);
        let lambda = (-g + (g * g - 4.0 * a * c).sqrt()) / (2.0 * a);

        ControlNet([
            dvec2(x0, 0.0),
            dvec2(side.x1, 0.0),
            dvec2(side.x2, 0.0),
            dvec2(side.x3, side.y3),
            dvec2(side.x3 + lambda * self.cos_t, side.y3 + lambda * self.sin_t),
            dvec2(x6 - lambda * self.sin_t, y6 - lambda * self.cos_t),
            dvec2(x6, y6),
            dvec2(1.0, y7),
            dvec2(1.0, y8),
            dvec2(1.0, y9),
        ])
    }

    /// Asymmetric corner: the two sides' curvature magnitudes differ, so
    /// the junction cannot be found by reflection. Solve each axis fully,
    /// then one coupling quartic for the vertical-side junction parameter
    /// and back-substitute the horizontal one. Three sequential pure
    /// solves, no iteration.
    fn solve_uneven(&self, t_h: f64, t_v: f64) -> ControlNet {
        let k_h = self.extension_fraction * t_h;
        let k_v = self.extension_fraction * t_v;
        let kappa_h = self.curvature(k_h);
        let kappa_v = self.curvature(k_v);
        let hor = self.side_points(kappa_h);
        let ver = self.side_points(kappa_v);
        let x0 = -k_h;

        let x6 = 1.0 - ver.y3;
        let y6 = 1.0 - ver.x3;
        let y7 = 1.0 - ver.x2;
        let y8 = 1.0 - ver.x1;
        let y9 = 1.0 + k_v;

        let a = 1.5 * kappa_h;
        let b = 1.5 * kappa_v;
        let g = self.cos2 - self.sin2;
        let dx = x6 - hor.x3;
        let dy = y6 - hor.y3;
        let c = -(self.cos_t * dy - self.sin_t * dx);
        let d = self.sin_t * dy - self.cos_t * dx;
        let p = 2.0 * (d / b);
        let q = g * g * g / (a * b * b);
        let r = (a * d * d + c * g * g) / (a * b * b);
        let lambda_v = depressed_quartic_root(p, q, r);
        let lambda_h = (-d - b * lambda_v * lambda_v) / g;

        ControlNet([
            dvec2(x0, 0.0),
            dvec2(hor.x1, 0.0),
            dvec2(hor.x2, 0.0),
            dvec2(hor.x3, hor.y3),
            dvec2(hor.x3 + lambda_h * self.cos_t, hor.y3 + lambda_h * self.sin_t),
            dvec2(x6 - lambda_v * self.sin_t, y6 - lambda_v * self.cos_t),
            dvec2(x6, y6),
            dvec2(1.0, y7),
            dvec2(1.0, y8),
            dvec2(1.0, y9),
        ])
    }
}

impl Default for CornerBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION_FRACTION, DEFAULT_ARC_FRACTION)
    }
}

fn boundary_index(ratio: f64) -> Option<usize> {
    if ratio == 0.0 {
        Some(0)
    } else if ratio == 1.0 {
        Some(1)
    } else {
        None
    }
}
