/*
 * Snowflake Module
 *
 * This module builds the full Koch snowflake from an equilateral base
 * triangle centred on the origin. It produces either a closed outline
 * (for filling and outlining) or a wireframe line list.
 */

use nannou::prelude::{pt2, Point2};

use crate::koch::{self, Segment};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseTriangle {
    pub vertices: [Point2; 3],
}

impl BaseTriangle {
    /// Equilateral triangle with its centroid at the origin.
    ///
    /// Vertices run clockwise (bottom-left, apex, bottom-right) so the
    /// counter-clockwise bumps of the Koch curve face away from the centre.
    pub fn equilateral(side: f32) -> Self {
        let height = side * koch::SIN_60;
        Self {
            vertices: [
                pt2(-side / 2.0, -height / 3.0),
                pt2(0.0, 2.0 * height / 3.0),
                pt2(side / 2.0, -height / 3.0),
            ],
        }
    }

    pub fn centroid(&self) -> Point2 {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) / 3.0
    }

    // Edges in winding order: v0 -> v1, v1 -> v2, v2 -> v0
    pub fn edges(&self) -> [Segment; 3] {
        let [v0, v1, v2] = self.vertices;
        [Segment::new(v0, v1), Segment::new(v1, v2), Segment::new(v2, v0)]
    }
}

// Number of points in a closed outline at the given depth
pub fn outline_len(depth: u8) -> usize {
    3 * koch::curve_point_count(depth) + 1
}

/// Build the closed snowflake outline.
///
/// The last point is a copy of the first.
pub fn build_outline(depth: u8, side: f32) -> Vec<Point2> {
    let mut outline = Vec::with_capacity(outline_len(depth));

    for edge in BaseTriangle::equilateral(side).edges() {
        koch::koch_curve(edge.start, edge.end, depth, &mut outline);
    }

    if let Some(&first) = outline.first() {
        outline.push(first);
    }

    outline
}

// Build the snowflake as independent line segments (no closing point)
pub fn build_wireframe(depth: u8, side: f32) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(3 * koch::curve_point_count(depth));

    for edge in BaseTriangle::equilateral(side).edges() {
        koch::koch_segments(edge.start, edge.end, depth, &mut segments);
    }

    segments
}

/// Fan triangulation of a closed outline around `anchor`.
///
/// Triangle `i` is `(anchor, outline[i], outline[i + 1])`. The snowflake is
/// star-shaped about its centroid, so anchoring there covers it exactly.
pub fn fan_triangles(anchor: Point2, outline: &[Point2]) -> Vec<[Point2; 3]> {
    outline
        .windows(2)
        .map(|pair| [anchor, pair[0], pair[1]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn triangle_vertices_are_equidistant_from_centroid() {
        for side in [0.8, 0.9, 2.5] {
            let triangle = BaseTriangle::equilateral(side);
            let centroid = triangle.centroid();
            assert!(centroid.length() < EPS);

            // Circumradius of an equilateral triangle is side / sqrt(3)
            let expected = side / 3.0_f32.sqrt();
            for v in triangle.vertices {
                assert!((v.distance(centroid) - expected).abs() < EPS);
            }
        }
    }

    #[test]
    fn triangle_edges_have_equal_length() {
        let triangle = BaseTriangle::equilateral(0.9);
        for edge in triangle.edges() {
            assert!((edge.length() - 0.9).abs() < EPS);
        }
    }

    #[test]
    fn outline_is_closed_at_every_depth() {
        for depth in 0..=5 {
            let outline = build_outline(depth, 0.9);
            assert_eq!(outline.len(), outline_len(depth));
            assert_eq!(outline.first(), outline.last());
        }
    }

    #[test]
    fn depth_zero_outline_is_the_triangle() {
        let outline = build_outline(0, 0.9);
        let triangle = BaseTriangle::equilateral(0.9);
        assert_eq!(&outline[..3], &triangle.vertices[..]);
        assert_eq!(outline[3], triangle.vertices[0]);
    }

    #[test]
    fn bumps_point_away_from_centre() {
        let side = 0.9;
        let inradius = side / (2.0 * 3.0_f32.sqrt());
        let outline = build_outline(1, side);

        for p in &outline {
            assert!(p.length() >= inradius - EPS, "point {:?} lies inside the base triangle", p);
        }

        // Peaks land on the circumcircle alongside the three vertices (and the closing copy)
        let circumradius = side / 3.0_f32.sqrt();
        let on_circle = outline.iter().filter(|p| (p.length() - circumradius).abs() < EPS).count();
        assert_eq!(on_circle, 7);
    }

    #[test]
    fn wireframe_is_a_connected_loop() {
        let segments = build_wireframe(2, 0.8);
        assert_eq!(segments.len(), 48);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(segments.last().map(|s| s.end), segments.first().map(|s| s.start));
    }

    #[test]
    fn fan_covers_every_outline_edge() {
        let outline = build_outline(2, 0.9);
        let tris = fan_triangles(pt2(0.0, 0.0), &outline);
        assert_eq!(tris.len(), outline.len() - 1);
        assert_eq!(tris[0], [pt2(0.0, 0.0), outline[0], outline[1]]);
        assert_eq!(tris.last().map(|t| t[2]), Some(outline[0]));
    }

    #[test]
    fn outline_is_deterministic() {
        assert_eq!(build_outline(4, 0.9), build_outline(4, 0.9));
    }
}
