//! Closed-form polynomial root finders.
//!
//! Everything here is exact algebra, no iteration: corner construction
//! needs one real cubic root (curvature parameter) and, for asymmetric
//! corners, one real root of a depressed quartic (junction parameter).
//! Constant time per call regardless of input.

/// One real root of `a*x^3 + b*x^2 + c*x + d = 0`.
///
/// Depresses the cubic and applies Cardano's formula. When the discriminant
/// is negative (three real roots) the trigonometric form is used and the
/// principal (largest) root returned, which is the branch the corner
/// construction needs.
pub(crate) fn cubic_root(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let f = (3.0 * c / a - b * b / (a * a)) / 3.0;
    let g = (2.0 * b * b * b / (a * a * a) - 9.0 * b * c / (a * a) + 27.0 * d / a) / 27.0;
    let h = g * g / 4.0 + f * f * f / 27.0;
    let shift = -b / (3.0 * a);
    if h >= 0.0 {
        let s = h.sqrt();
        (-g / 2.0 + s).cbrt() + (-g / 2.0 - s).cbrt() + shift
    } else {
        // Three real roots; h < 0 implies f < 0, so the square roots below
        // are well defined.
        let m = (-f / 3.0).sqrt();
        let phi = (-g / (2.0 * m * m * m)).acos();
        2.0 * m * (phi / 3.0).cos() + shift
    }
}

/// One real root of the depressed quartic `y^4 + p*y^2 + q*y + r = 0`.
///
/// Solves the resolvent cubic trigonometrically (in the valid corner
/// domain it always has three real roots), then factors the quartic into
/// two quadratics through `u = sqrt(2z - p)` and returns the root the
/// junction construction needs.
pub(crate) fn depressed_quartic_root(p: f64, q: f64, r: f64) -> f64 {
    let b = -p / 2.0;
    let c = -r;
    let d = r * p / 2.0 - q * q / 8.0;
    let f = (3.0 * c - b * b) / 3.0;
    let g = (2.0 * b * b * b - 9.0 * b * c + 27.0 * d) / 27.0;
    let m = (-f * f * f / 27.0).sqrt();
    let phi = (-g / (2.0 * m)).acos();
    let y = 2.0 * (-f / 3.0).sqrt() * (phi / 3.0).cos();
    let z = y - b / 3.0;
    let u = (2.0 * z - p).sqrt();
    (u - (u * u - 4.0 * (z + q / (2.0 * u))).sqrt()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic_residual(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
        a * x * x * x + b * x * x + c * x + d
    }

    #[test]
    fn cardano_branch_single_real_root() {
        // (x - 2)(x^2 + x + 1) = x^3 - x^2 - x - 2
        let x = cubic_root(1.0, -1.0, -1.0, -2.0);
        assert!((x - 2.0).abs() < 1e-12, "got {x}");
    }

    #[test]
    fn trigonometric_branch_returns_largest_root() {
        // (x - 1)(x - 2)(x - 3) = x^3 - 6x^2 + 11x - 6, three real roots
        let x = cubic_root(1.0, -6.0, 11.0, -6.0);
        assert!((x - 3.0).abs() < 1e-10, "got {x}");
    }

    #[test]
    fn cubic_root_scales_with_leading_coefficient() {
        let x = cubic_root(2.0, -2.0, -2.0, -4.0);
        assert!(cubic_residual(2.0, -2.0, -2.0, -4.0, x).abs() < 1e-10);
        assert!((x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn quartic_root_satisfies_polynomial() {
        // (y - 1)(y - 2)(y + 0.5)(y + 2.5) = y^4 - 5.75y^2 + 2.25y + 2.5
        let (p, q, r) = (-5.75, 2.25, 2.5);
        let y = depressed_quartic_root(p, q, r);
        assert!((y - 1.0).abs() < 1e-10, "got {y}");
    }

    #[test]
    fn quartic_root_in_the_corner_coupling_domain() {
        // Coefficients as produced by an asymmetric corner solve
        let (p, q, r) = (-0.46022201045549, 0.127168724537829, -0.005672331341554);
        let y = depressed_quartic_root(p, q, r);
        assert!(y.is_finite());
        let residual = y * y * y * y + p * y * y + q * y + r;
        assert!(residual.abs() < 1e-10, "root {y}, residual {residual}");
    }
}
