//! Cyclic edge construction for an ordered vertex sequence.

use nalgebra::Vector2;

use super::types::{Edge, GeomCfg, Line};

/// Edges of an implicitly closed polygon: edge `i` runs from vertex
/// `i−1` to vertex `i`, with index −1 wrapping to the last vertex.
///
/// No minimum vertex count is enforced here; degenerate inputs simply
/// yield degenerate lines. Callers guarantee ≥3 distinct vertices for
/// non-degenerate polygons.
pub fn edges_of(cfg: GeomCfg, poly: &[Vector2<f64>]) -> Vec<Edge> {
    let n = poly.len();
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let p0 = poly[(i + n - 1) % n];
        let p1 = poly[i];
        edges.push(Edge {
            p0,
            p1,
            line: Line::through(p0, p1, cfg),
        });
    }
    edges
}
