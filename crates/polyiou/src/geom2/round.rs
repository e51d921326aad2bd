//! Vertex deduplication under the rounding tolerance.

use nalgebra::Vector2;

use super::types::GeomCfg;

/// Round every vertex and keep the first occurrence of each distinct
/// rounded pair, preserving input order.
///
/// Rounded coordinates that agree compare bitwise-equal, so plain `==`
/// is exact here. Output length ≤ input length; empty input stays empty.
pub fn dedup_vertices(cfg: GeomCfg, poly: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(poly.len());
    for &p in poly {
        let q = cfg.round_point(p);
        if !out.iter().any(|r| r.x == q.x && r.y == q.y) {
            out.push(q);
        }
    }
    out
}
