//! Polygon area via the shoelace formula.

use nalgebra::Vector2;

/// Area of an ordered, implicitly closed simple polygon.
///
/// Cross-product sum over cyclic consecutive vertex pairs, halved and
/// taken absolute so either winding works. Fewer than 3 vertices span
/// no area and return 0.
pub fn polygon_area(poly: &[Vector2<f64>]) -> f64 {
    let n = poly.len();
    if n <= 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p = poly[i];
        let q = poly[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    (sum / 2.0).abs()
}
