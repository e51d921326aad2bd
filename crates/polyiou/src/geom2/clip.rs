//! Pairwise edge clipping: line classification, segment membership,
//! and candidate-vertex collection.
//!
//! Purpose
//! - Reduce two edge lists to the unordered vertex set of their overlap
//!   region. Downstream deduplication and angular ordering turn that
//!   set into a polygon.
//!
//! Numerics
//! - The determinant and the colinearity cross-ratios are rounded
//!   before comparison; near-parallel pairs classify cleanly instead of
//!   producing far-away pseudo-intersections.

use nalgebra::Vector2;

use super::types::{Edge, GeomCfg, Line, LineIntersection};

/// Classify two implicit lines.
///
/// `det = a1·b2 − a2·b1` (rounded). Zero determinant splits into
/// coincident (both cross-ratio equalities `c1·a2 = c2·a1` and
/// `c1·b2 = c2·b1` hold under rounding) and parallel-distinct.
/// Otherwise Cramer's rule yields the unique crossing, rounded.
pub fn line_intersection(l1: Line, l2: Line, cfg: GeomCfg) -> LineIntersection {
    let det = cfg.round(l1.a * l2.b - l2.a * l1.b);
    if det == 0.0 {
        let coincident = cfg.round(l1.c * l2.a) == cfg.round(l2.c * l1.a)
            && cfg.round(l1.c * l2.b) == cfg.round(l2.c * l1.b);
        if coincident {
            LineIntersection::Coincident
        } else {
            LineIntersection::Parallel
        }
    } else {
        let x = cfg.round((l2.b * l1.c - l1.b * l2.c) / det);
        let y = cfg.round((l1.a * l2.c - l2.a * l1.c) / det);
        LineIntersection::At(Vector2::new(x, y))
    }
}

/// Whether a point already known to lie on the edge's carrier line
/// falls within the segment `p0 → p1`.
///
/// Bounding-extent test, endpoints inclusive: both `(x−x0)(x1−x)` and
/// `(y−y0)(y1−y)` must be non-negative. Only valid under the on-line
/// precondition; it is cheaper than a colinearity-plus-parameter check.
#[inline]
pub fn on_segment(p: Vector2<f64>, edge: &Edge) -> bool {
    let x_span = (p.x - edge.p0.x) * (edge.p1.x - p.x);
    let y_span = (p.y - edge.p0.y) * (edge.p1.y - p.y);
    x_span >= 0.0 && y_span >= 0.0
}

/// Candidate vertices of the overlap region: every edge-pair contact
/// point of the two polygons.
///
/// - Parallel-distinct pairs contribute nothing.
/// - Coincident pairs contribute both endpoints of the first polygon's
///   edge; the exact shared stretch is resolved downstream together
///   with the contributions of the remaining pairs.
/// - Crossing pairs contribute the point iff it lies on both segments.
///
/// The result is unordered and may contain duplicates.
pub fn intersection_candidates(
    cfg: GeomCfg,
    edges1: &[Edge],
    edges2: &[Edge],
) -> Vec<Vector2<f64>> {
    let mut candidates = Vec::new();
    for e1 in edges1 {
        for e2 in edges2 {
            match line_intersection(e1.line, e2.line, cfg) {
                LineIntersection::Parallel => {}
                LineIntersection::Coincident => {
                    candidates.push(e1.p0);
                    candidates.push(e1.p1);
                }
                LineIntersection::At(p) => {
                    if on_segment(p, e1) && on_segment(p, e2) {
                        candidates.push(p);
                    }
                }
            }
        }
    }
    candidates
}
