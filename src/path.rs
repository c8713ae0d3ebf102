//! The path-command output contract.
//!
//! Outlines leave the crate as an ordered [`PathCommand`] sequence forming
//! one closed contour. Rendering the commands (rasterizing, converting to a
//! platform path object) is the consumer's job; [`Path::to_svg_path_data`]
//! exists for debugging and snapshot tests, not as a rendering obligation.

use glam::DVec2;
use std::fmt::Write as _;

/// A single command of an outline contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Cubic Bezier segment from the current point through two control
    /// points to `end`.
    CubicTo { c1: DVec2, c2: DVec2, end: DVec2 },
    Close,
}

impl PathCommand {
    /// The point the pen sits on after this command, if it moves the pen.
    pub fn end_point(&self) -> Option<DVec2> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CubicTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        }
    }

    /// One-letter tag (SVG convention) used in test snapshots.
    pub fn tag(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::CubicTo { .. } => 'C',
            PathCommand::Close => 'Z',
        }
    }
}

/// An ordered command sequence forming one contour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn cubic_to(&mut self, c1: DVec2, c2: DVec2, end: DVec2) {
        self.commands.push(PathCommand::CubicTo { c1, c2, end });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// True when the contour ends with an explicit `Close`.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// The first pen position (the initial `MoveTo` target).
    pub fn first_point(&self) -> Option<DVec2> {
        self.commands.iter().find_map(|cmd| cmd.end_point())
    }

    /// The last pen position before any terminating `Close`.
    pub fn last_point(&self) -> Option<DVec2> {
        self.commands.iter().rev().find_map(|cmd| cmd.end_point())
    }

    /// Axis-aligned bounding box over every emitted coordinate, control
    /// points included. `None` for an empty path.
    pub fn bounding_box(&self) -> Option<(DVec2, DVec2)> {
        let mut points = self.commands.iter().flat_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![*p],
            PathCommand::CubicTo { c1, c2, end } => vec![*c1, *c2, *end],
            PathCommand::Close => vec![],
        });
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }

    /// Count commands of each kind as `(moves, lines, cubics, closes)`.
    pub fn command_counts(&self) -> (usize, usize, usize, usize) {
        let mut counts = (0, 0, 0, 0);
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(_) => counts.0 += 1,
                PathCommand::LineTo(_) => counts.1 += 1,
                PathCommand::CubicTo { .. } => counts.2 += 1,
                PathCommand::Close => counts.3 += 1,
            }
        }
        counts
    }

    /// Space-separated command tags, e.g. `"M C C C L Z"`. Stable across
    /// coordinate changes, which makes it the right granularity for
    /// snapshot tests.
    pub fn command_tags(&self) -> String {
        let tags: Vec<String> = self.commands.iter().map(|c| c.tag().to_string()).collect();
        tags.join(" ")
    }

    /// Serialize as SVG path data (`d` attribute syntax), coordinates
    /// rounded to 3 decimal places for readability.
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(out, "M{},{}", fmt_coord(p.x), fmt_coord(p.y));
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(out, "L{},{}", fmt_coord(p.x), fmt_coord(p.y));
                }
                PathCommand::CubicTo { c1, c2, end } => {
                    let _ = write!(
                        out,
                        "C{},{} {},{} {},{}",
                        fmt_coord(c1.x),
                        fmt_coord(c1.y),
                        fmt_coord(c2.x),
                        fmt_coord(c2.y),
                        fmt_coord(end.x),
                        fmt_coord(end.y)
                    );
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }
}

fn fmt_coord(v: f64) -> String {
    // Round to 3 decimals, then drop trailing zeros so "25.000" prints as "25".
    let rounded = (v * 1000.0).round() / 1000.0;
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    // Normalize negative zero
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn square_path() -> Path {
        let mut path = Path::new();
        path.move_to(dvec2(10.0, 0.0));
        path.line_to(dvec2(10.0, 10.0));
        path.line_to(dvec2(0.0, 10.0));
        path.line_to(dvec2(0.0, 0.0));
        path.line_to(dvec2(10.0, 0.0));
        path.close();
        path
    }

    #[test]
    fn endpoints_and_closure() {
        let path = square_path();
        assert!(path.is_closed());
        assert_eq!(path.first_point(), Some(dvec2(10.0, 0.0)));
        assert_eq!(path.last_point(), Some(dvec2(10.0, 0.0)));
    }

    #[test]
    fn bounding_box_spans_all_points() {
        let path = square_path();
        let (min, max) = path.bounding_box().unwrap();
        assert_eq!(min, dvec2(0.0, 0.0));
        assert_eq!(max, dvec2(10.0, 10.0));
        assert_eq!(Path::new().bounding_box(), None);
    }

    #[test]
    fn command_tags_reflect_sequence() {
        assert_eq!(square_path().command_tags(), "M L L L L Z");
        assert_eq!(square_path().command_counts(), (1, 4, 0, 1));
    }

    #[test]
    fn svg_path_data_rounds_and_trims() {
        let mut path = Path::new();
        path.move_to(dvec2(1.00049, -0.0001));
        path.cubic_to(dvec2(0.5, 0.25), dvec2(0.25, 0.5), dvec2(0.0, 1.0));
        path.close();
        assert_eq!(path.to_svg_path_data(), "M1,0 C0.5,0.25 0.25,0.5 0,1 Z");
    }
}
