/*
 * Koch Curve Module
 *
 * This module generates the points of a Koch curve between two endpoints.
 * Each level of recursion replaces the middle third of a segment with two
 * sides of an equilateral bump, so a segment expands into four segments.
 *
 * Two output policies are provided:
 * - koch_curve: one point per base segment (its start), for closed outlines
 * - koch_segments: whole base segments, for line-list wireframes
 */

use nannou::prelude::{pt2, Point2};

// sin(60°), the bump height per unit of sub-segment length
pub const SIN_60: f32 = 0.866_025_4;

// An ordered pair of points, the unit of subdivision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// The two third-points and the bump peak between them.
    ///
    /// The peak is the second third-point rotated 60° counter-clockwise
    /// about the first, so it sits to the left of the segment direction.
    pub fn bump_points(&self) -> (Point2, Point2, Point2) {
        let dx = (self.end.x - self.start.x) / 3.0;
        let dy = (self.end.y - self.start.y) / 3.0;

        let a = pt2(self.start.x + dx, self.start.y + dy);
        let b = pt2(self.start.x + 2.0 * dx, self.start.y + 2.0 * dy);

        let peak = pt2(
            a.x + dx * 0.5 - dy * SIN_60,
            a.y + dy * 0.5 + dx * SIN_60,
        );

        (a, peak, b)
    }

    /// Split into the four sub-segments of one Koch step, in drawing order.
    pub fn subdivide(&self) -> [Segment; 4] {
        let (a, peak, b) = self.bump_points();
        [
            Segment::new(self.start, a),
            Segment::new(a, peak),
            Segment::new(peak, b),
            Segment::new(b, self.end),
        ]
    }
}

// Number of points koch_curve emits for one segment at the given depth
pub fn curve_point_count(depth: u8) -> usize {
    4usize.pow(depth as u32)
}

/// Append the Koch curve from `start` to `end` to `out`.
///
/// Only the start point of each base segment is emitted, so curves for
/// consecutive edges can be concatenated without duplicating the shared
/// corner. The caller closes the outline if it needs to.
pub fn koch_curve(start: Point2, end: Point2, depth: u8, out: &mut Vec<Point2>) {
    if depth == 0 {
        out.push(start);
        return;
    }

    for sub in Segment::new(start, end).subdivide() {
        koch_curve(sub.start, sub.end, depth - 1, out);
    }
}

/// Append the base segments of the Koch curve from `start` to `end` to `out`.
///
/// Each base case emits both endpoints, matching a line-list rasterizer.
pub fn koch_segments(start: Point2, end: Point2, depth: u8, out: &mut Vec<Segment>) {
    if depth == 0 {
        out.push(Segment::new(start, end));
        return;
    }

    for sub in Segment::new(start, end).subdivide() {
        koch_segments(sub.start, sub.end, depth - 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn curve(start: Point2, end: Point2, depth: u8) -> Vec<Point2> {
        let mut out = Vec::new();
        koch_curve(start, end, depth, &mut out);
        out
    }

    #[test]
    fn depth_zero_emits_start_only() {
        let points = curve(pt2(0.0, 0.0), pt2(3.0, 0.0), 0);
        assert_eq!(points, vec![pt2(0.0, 0.0)]);
    }

    #[test]
    fn depth_zero_segment_keeps_both_endpoints() {
        let mut out = Vec::new();
        koch_segments(pt2(0.0, 0.0), pt2(3.0, 0.0), 0, &mut out);
        assert_eq!(out, vec![Segment::new(pt2(0.0, 0.0), pt2(3.0, 0.0))]);
    }

    #[test]
    fn point_count_grows_by_four_per_level() {
        for depth in 0..=5 {
            let points = curve(pt2(0.0, 0.0), pt2(3.0, 0.0), depth);
            assert_eq!(points.len(), curve_point_count(depth));
        }
        assert_eq!(curve_point_count(1), 4);
        assert_eq!(curve_point_count(2), 16);
    }

    #[test]
    fn segment_count_grows_by_four_per_level() {
        let mut out = Vec::new();
        koch_segments(pt2(-1.0, 0.5), pt2(2.0, -0.5), 3, &mut out);
        assert_eq!(out.len(), 64);
    }

    #[test]
    fn depth_one_bump_is_outward_equilateral() {
        let points = curve(pt2(0.0, 0.0), pt2(3.0, 0.0), 1);
        assert_eq!(points.len(), 4);

        assert!((points[1].x - 1.0).abs() < EPS && points[1].y.abs() < EPS);
        let peak = points[2];
        assert!((peak.x - 1.5).abs() < EPS);
        assert!((peak.y - SIN_60).abs() < EPS);
        assert!((points[3].x - 2.0).abs() < EPS && points[3].y.abs() < EPS);
    }

    #[test]
    fn bump_height_scales_with_segment_length() {
        let seg = Segment::new(pt2(0.0, 0.0), pt2(0.0, 6.0));
        let (a, peak, b) = seg.bump_points();

        // Going up the y axis, counter-clockwise puts the bump at negative x
        assert!((peak.x + 2.0 * SIN_60).abs() < EPS);
        assert!((peak.y - 3.0).abs() < EPS);
        assert!((a.distance(peak) - 2.0).abs() < EPS);
        assert!((b.distance(peak) - 2.0).abs() < EPS);
    }

    #[test]
    fn subdivided_segments_are_connected() {
        let parts = Segment::new(pt2(0.2, -0.4), pt2(1.3, 0.9)).subdivide();
        for pair in parts.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let third = Segment::new(pt2(0.2, -0.4), pt2(1.3, 0.9)).length() / 3.0;
        for part in &parts {
            assert!((part.length() - third).abs() < EPS);
        }
    }

    #[test]
    fn curve_matches_segment_starts() {
        let start = pt2(-0.45, -0.26);
        let end = pt2(0.45, -0.26);
        let points = curve(start, end, 3);
        let mut segments = Vec::new();
        koch_segments(start, end, 3, &mut segments);

        let starts: Vec<Point2> = segments.iter().map(|s| s.start).collect();
        assert_eq!(points, starts);
        assert_eq!(segments.last().map(|s| s.end), Some(end));
    }

    #[test]
    fn generation_is_deterministic() {
        let first = curve(pt2(0.1, 0.2), pt2(0.7, -0.3), 4);
        let second = curve(pt2(0.1, 0.2), pt2(0.7, -0.3), 4);
        assert_eq!(first, second);
    }
}
