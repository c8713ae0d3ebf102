//! Outline assembly: strategy selection and path emission.
//!
//! The contour is a single closed loop traversed clockwise in a
//! y-down frame, starting where the top-right corner curve departs the
//! top edge: top-right, bottom-right, bottom-left, top-left, then the
//! closing run along the top edge back to the start. Every emitted path
//! ends with an explicit line back to the start point (when the pen is
//! not already there) followed by `Close`, so first and last pen
//! positions always coincide.

use glam::{DVec2, dvec2};

use crate::path::Path;
use crate::types::{CornerRadii, CornerStyle, Size, Strategy};

use super::corner::CornerBuilder;

/// Cubic Bezier control-point offset approximating a quarter circle,
/// `4/3 * (sqrt(2) - 1)`.
const KAPPA: f64 = 0.5522847498307935;

/// Points closer than this are treated as coincident; connecting lines
/// between them are suppressed.
const COINCIDENT_EPS: f64 = 1e-9;

/// Clamp radii into the valid range and pick the cheapest strategy that
/// renders them exactly.
///
/// Selection only ever inspects the clamped radii, so feeding the output
/// back in returns the same pair (the operation is idempotent).
pub fn normalize(radii: CornerRadii, size: Size) -> (CornerRadii, Strategy) {
    let clamped = radii.clamped(size);
    let strategy = if clamped.all_zero() {
        Strategy::PlainRectangle
    } else if size.is_square() && clamped.all_at_least(size.max_corner_radius()) {
        // Every radius pinned to half the side: the curvature family
        // collapses to a circle, so plain quarter arcs render it exactly.
        Strategy::CircularArcs
    } else {
        Strategy::ContinuousCurve
    };
    (clamped, strategy)
}

/// Build the closed outline contour for already-normalized radii.
pub fn assemble(size: Size, radii: CornerRadii, strategy: Strategy) -> Path {
    debug_assert!(
        radii.clamped(size) == radii,
        "assemble requires normalized radii"
    );
    match strategy {
        Strategy::PlainRectangle => rectangle_path(size),
        Strategy::CircularArcs => emit(circular_pieces(size, radii)),
        Strategy::ContinuousCurve => emit(continuous_pieces(size, radii)),
    }
}

/// Normalize, pick a strategy, honor the corner style and emit the path.
///
/// This is the one-call entry point; [`normalize`] and [`assemble`] exist
/// separately for callers that want to inspect or cache the strategy.
pub fn outline(size: Size, radii: CornerRadii, style: CornerStyle) -> Path {
    let (radii, mut strategy) = normalize(radii, size);
    if style == CornerStyle::Circular && strategy == Strategy::ContinuousCurve {
        strategy = Strategy::CircularArcs;
    }
    crate::log::debug!(?strategy, "assembling outline");
    assemble(size, radii, strategy)
}

// ============================================================================
// Per-corner emission
// ============================================================================

/// World-space geometry contributed by one corner, in traversal order. A
/// sharp corner (radius zero) carries no curves; the connecting edge line
/// simply lands on its vertex.
struct CornerPiece {
    start: DVec2,
    curves: Vec<[DVec2; 3]>,
}

fn emit(pieces: [CornerPiece; 4]) -> Path {
    let mut path = Path::with_capacity(18);
    let start = pieces[0].start;
    path.move_to(start);
    let mut current = start;
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 && !nearly_coincident(current, piece.start) {
            path.line_to(piece.start);
        }
        current = piece.start;
        for [c1, c2, end] in &piece.curves {
            path.cubic_to(*c1, *c2, *end);
            current = *end;
        }
    }
    if !nearly_coincident(current, start) {
        path.line_to(start);
    }
    path.close();
    path
}

fn nearly_coincident(a: DVec2, b: DVec2) -> bool {
    (a - b).length_squared() < COINCIDENT_EPS * COINCIDENT_EPS
}

fn rectangle_path(size: Size) -> Path {
    let mut path = Path::with_capacity(6);
    path.move_to(dvec2(size.width, 0.0));
    path.line_to(dvec2(size.width, size.height));
    path.line_to(dvec2(0.0, size.height));
    path.line_to(dvec2(0.0, 0.0));
    path.line_to(dvec2(size.width, 0.0));
    path.close();
    path
}

/// Per-axis extension ratio: how much room remains between the corner
/// curve and the midpoint of the adjacent edge, as a fraction of the
/// radius, saturated to `[0, 1]`.
fn extension_ratio(dimension: f64, radius: f64) -> f64 {
    ((dimension / 2.0 - radius) / radius).clamp(0.0, 1.0)
}

/// Map the unit control nets into world space, one per rounded corner.
///
/// Each corner frame scales by the radius, flips axes to point into the
/// rectangle and translates to the corner. The bottom-right and top-left
/// frames mirror the traversal direction, so their nets are walked in
/// reverse to keep the contour clockwise.
fn continuous_pieces(size: Size, radii: CornerRadii) -> [CornerPiece; 4] {
    let builder = CornerBuilder::shared();
    let (w, h) = (size.width, size.height);
    let corner = |r: f64, origin: DVec2, sign: DVec2, reverse: bool| -> CornerPiece {
        if r <= 0.0 {
            return CornerPiece {
                start: origin,
                curves: Vec::new(),
            };
        }
        let net = builder.control_net(extension_ratio(w, r), extension_ratio(h, r));
        let mut points: Vec<DVec2> = net
            .points()
            .iter()
            .map(|p| origin + sign * *p * r)
            .collect();
        if reverse {
            points.reverse();
        }
        CornerPiece {
            start: points[0],
            curves: points[1..]
                .chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .collect(),
        }
    };
    [
        corner(
            radii.top_right,
            dvec2(w - radii.top_right, 0.0),
            dvec2(1.0, 1.0),
            false,
        ),
        corner(
            radii.bottom_right,
            dvec2(w - radii.bottom_right, h),
            dvec2(1.0, -1.0),
            true,
        ),
        corner(
            radii.bottom_left,
            dvec2(radii.bottom_left, h),
            dvec2(-1.0, -1.0),
            false,
        ),
        corner(
            radii.top_left,
            dvec2(radii.top_left, 0.0),
            dvec2(-1.0, 1.0),
            true,
        ),
    ]
}

/// Quarter-circle corners: one cubic per rounded corner with control
/// points pulled toward the corner vertex by [`KAPPA`].
fn circular_pieces(size: Size, radii: CornerRadii) -> [CornerPiece; 4] {
    let (w, h) = (size.width, size.height);
    let corner = |r: f64, vertex: DVec2, entry: DVec2, exit: DVec2| -> CornerPiece {
        if r <= 0.0 {
            return CornerPiece {
                start: vertex,
                curves: Vec::new(),
            };
        }
        let c1 = entry + (vertex - entry) * KAPPA;
        let c2 = exit + (vertex - exit) * KAPPA;
        CornerPiece {
            start: entry,
            curves: vec![[c1, c2, exit]],
        }
    };
    [
        corner(
            radii.top_right,
            dvec2(w, 0.0),
            dvec2(w - radii.top_right, 0.0),
            dvec2(w, radii.top_right),
        ),
        corner(
            radii.bottom_right,
            dvec2(w, h),
            dvec2(w, h - radii.bottom_right),
            dvec2(w - radii.bottom_right, h),
        ),
        corner(
            radii.bottom_left,
            dvec2(0.0, h),
            dvec2(radii.bottom_left, h),
            dvec2(0.0, h - radii.bottom_left),
        ),
        corner(
            radii.top_left,
            dvec2(0.0, 0.0),
            dvec2(0.0, radii.top_left),
            dvec2(radii.top_left, 0.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: f64, h: f64) -> Size {
        Size::new(w, h).unwrap()
    }

    fn assert_near(a: DVec2, b: DVec2) {
        assert!((a - b).length() < 1e-9, "{a:?} vs {b:?}");
    }

    #[test]
    fn strategy_selection() {
        let square = size(50.0, 50.0);
        assert_eq!(normalize(CornerRadii::ZERO, square).1, Strategy::PlainRectangle);
        assert_eq!(
            normalize(CornerRadii::uniform(25.0), square).1,
            Strategy::CircularArcs
        );
        // Over-large radii clamp down to the pinned maximum first
        assert_eq!(
            normalize(CornerRadii::uniform(40.0), square).1,
            Strategy::CircularArcs
        );
        assert_eq!(
            normalize(CornerRadii::uniform(10.0), square).1,
            Strategy::ContinuousCurve
        );
        // Non-square never takes the circle fast path
        assert_eq!(
            normalize(CornerRadii::uniform(30.0), size(100.0, 60.0)).1,
            Strategy::ContinuousCurve
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let s = size(100.0, 60.0);
        let (radii, strategy) = normalize(CornerRadii::new(-5.0, 10.0, 99.0, 30.0), s);
        assert_eq!(normalize(radii, s), (radii, strategy));
    }

    #[test]
    fn plain_rectangle_traverses_clockwise_and_closes() {
        let path = outline(size(100.0, 100.0), CornerRadii::ZERO, CornerStyle::Continuous);
        assert_eq!(
            path.to_svg_path_data(),
            "M100,0 L100,100 L0,100 L0,0 L100,0 Z"
        );
        assert_eq!(path.first_point(), path.last_point());
    }

    #[test]
    fn pinned_square_emits_four_quarter_arcs() {
        let path = outline(size(50.0, 50.0), CornerRadii::uniform(25.0), CornerStyle::Continuous);
        // Edges have zero length, so no connecting lines appear
        assert_eq!(path.command_tags(), "M C C C C Z");
        assert_eq!(path.first_point(), Some(dvec2(25.0, 0.0)));
        assert_eq!(path.last_point(), Some(dvec2(25.0, 0.0)));
        let (min, max) = path.bounding_box().unwrap();
        assert_near(min, dvec2(0.0, 0.0));
        assert_near(max, dvec2(50.0, 50.0));
    }

    #[test]
    fn uniform_continuous_outline_shape() {
        let path = outline(size(100.0, 100.0), CornerRadii::uniform(20.0), CornerStyle::Continuous);
        assert_eq!(path.command_counts(), (1, 4, 12, 1));
        assert_eq!(
            path.command_tags(),
            "M C C C L C C C L C C C L C C C L Z"
        );
        // Extension ratio is 1 here, so the curve departs the top edge
        // 1.5 radii before the corner
        assert_eq!(path.first_point(), Some(dvec2(70.0, 0.0)));
        let (min, max) = path.bounding_box().unwrap();
        assert_near(min, dvec2(0.0, 0.0));
        assert_near(max, dvec2(100.0, 100.0));
    }

    #[test]
    fn full_height_radii_suppress_vertical_edge_lines() {
        // Radii consume the whole minor dimension: adjacent corner curves
        // meet on the vertical edges and those connecting lines vanish
        let path = outline(size(100.0, 60.0), CornerRadii::uniform(30.0), CornerStyle::Continuous);
        assert_eq!(path.command_counts(), (1, 2, 12, 1));
        assert_eq!(path.first_point(), path.last_point());
    }

    #[test]
    fn sharp_corner_becomes_a_vertex() {
        let radii = CornerRadii::new(0.0, 20.0, 20.0, 20.0);
        let path = outline(size(100.0, 100.0), radii, CornerStyle::Continuous);
        // Three rounded corners, one straight vertex at the top-left
        assert_eq!(path.command_counts(), (1, 4, 9, 1));
        let hits_origin = path
            .commands()
            .iter()
            .filter_map(|c| c.end_point())
            .any(|p| p == dvec2(0.0, 0.0));
        assert!(hits_origin, "contour must pass through the sharp vertex");
    }

    #[test]
    fn circular_style_overrides_continuous_curves() {
        let path = outline(size(100.0, 100.0), CornerRadii::uniform(20.0), CornerStyle::Circular);
        assert_eq!(path.command_counts(), (1, 4, 4, 1));
        assert_eq!(path.first_point(), Some(dvec2(80.0, 0.0)));
        // Style never resurrects rounding on an all-sharp rectangle
        let plain = outline(size(100.0, 100.0), CornerRadii::ZERO, CornerStyle::Circular);
        assert_eq!(plain.command_counts(), (1, 4, 0, 1));
    }

    #[test]
    fn every_strategy_closes_back_to_the_start() {
        let cases = [
            (size(100.0, 100.0), CornerRadii::ZERO),
            (size(50.0, 50.0), CornerRadii::uniform(25.0)),
            (size(100.0, 100.0), CornerRadii::uniform(20.0)),
            (size(100.0, 60.0), CornerRadii::uniform(30.0)),
            (size(100.0, 60.0), CornerRadii::new(5.0, 10.0, 20.0, 30.0)),
        ];
        for (s, radii) in cases {
            let path = outline(s, radii, CornerStyle::Continuous);
            assert!(path.is_closed(), "{s}: missing Close");
            assert_eq!(path.first_point(), path.last_point(), "{s}: open contour");
        }
    }
}
