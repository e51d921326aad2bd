//! Angular re-ordering of an unordered vertex set.

use nalgebra::Vector2;

/// Arithmetic-mean centroid; `None` for an empty set.
#[inline]
fn centroid(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let mut c = Vector2::zeros();
    for &p in points {
        c += p;
    }
    Some(c / points.len() as f64)
}

/// Order a vertex set into a simple cyclic polygon by angle about its
/// centroid (`atan2` of each vertex relative to the mean point).
///
/// Precondition: the set must be star-shaped about its centroid. This
/// holds for intersections of polygons inscribed in a common circle; it
/// is not a general guarantee. Empty input yields empty output.
pub fn order_about_centroid(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let c = match centroid(points) {
        Some(c) => c,
        None => return Vec::new(),
    };
    let mut out = points.to_vec();
    out.sort_by(|p, q| {
        let ap = (p.y - c.y).atan2(p.x - c.x);
        let aq = (q.y - c.y).atan2(q.x - c.x);
        ap.partial_cmp(&aq).unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}
