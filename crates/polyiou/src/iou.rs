//! Intersection-over-Union of two polygons inscribed in the unit circle.
//!
//! Pipeline
//! - Deduplicate both inputs, build their cyclic edges, collect the
//!   edge-pair contact points, deduplicate and re-order those angularly,
//!   then relate the overlap area to the union of the input areas.
//! - All intermediate values live on the call stack; the inputs are
//!   never mutated and repeated calls are fully independent.

use nalgebra::Vector2;

use crate::error::IouError;
use crate::geom2::{
    dedup_vertices, edges_of, intersection_candidates, order_about_centroid, polygon_area, GeomCfg,
};

/// IoU of two polygons with the default rounding tolerance.
///
/// Each input needs at least 3 vertices in consistent cyclic order,
/// all on (or very near) the unit circle. Returns a value in [0, 1]
/// for valid non-degenerate inputs.
pub fn iou(poly1: &[Vector2<f64>], poly2: &[Vector2<f64>]) -> Result<f64, IouError> {
    iou_with(GeomCfg::default(), poly1, poly2)
}

/// IoU with an explicit geometry configuration.
pub fn iou_with(
    cfg: GeomCfg,
    poly1: &[Vector2<f64>],
    poly2: &[Vector2<f64>],
) -> Result<f64, IouError> {
    let p1 = dedup_vertices(cfg, poly1);
    let p2 = dedup_vertices(cfg, poly2);
    if p1.len() < 3 {
        return Err(IouError::TooFewVertices { got: p1.len() });
    }
    if p2.len() < 3 {
        return Err(IouError::TooFewVertices { got: p2.len() });
    }

    let edges1 = edges_of(cfg, &p1);
    let edges2 = edges_of(cfg, &p2);
    let candidates = intersection_candidates(cfg, &edges1, &edges2);
    let overlap = order_about_centroid(&dedup_vertices(cfg, &candidates));

    let intersection = polygon_area(&overlap);
    let union = polygon_area(&p1) + polygon_area(&p2) - intersection;
    if cfg.round(union) == 0.0 {
        return Err(IouError::DegenerateUnion);
    }
    Ok(intersection / union)
}
