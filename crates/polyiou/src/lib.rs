//! Intersection-over-Union for 2D polygons inscribed in the unit circle.
//!
//! The overlap area comes from explicit polygon clipping rather than a
//! closed-form circle formula: the supplied vertices are arbitrary
//! chords on the circle, not circular arcs. The pipeline is pure value
//! composition — deduplicate, build edges, clip pairwise, re-order
//! angularly, measure — with no state outside a single call, so
//! concurrent calls need no synchronization.
//!
//! Entry point: [`iou`] (or [`iou_with`] for a custom tolerance).

pub mod error;
pub mod geom2;

mod iou;

pub use error::IouError;
pub use geom2::GeomCfg;
pub use iou::{iou, iou_with};
pub use nalgebra::Vector2 as Vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::IouError;
    pub use crate::geom2::rand::{
        draw_polygon_inscribed, InscribedCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        dedup_vertices, edges_of, intersection_candidates, order_about_centroid, polygon_area,
        GeomCfg, LineIntersection,
    };
    pub use crate::{iou, iou_with};
    pub use nalgebra::Vector2 as Vec2;
}
