//! Random polygons inscribed in the unit circle (replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for the randomized property
//!   tests and benchmarks. Every vertex lands exactly on the unit
//!   circle and the vertex sequence is in cyclic boundary order, so the
//!   draws satisfy the preconditions of `iou` by construction.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded
//!   angular jitter (a fraction of the base spacing, clamped so
//!   neighboring angles cannot swap), optionally apply a random global
//!   phase, then map each angle through (cos θ, sin θ).
//! - Determinism uses a replay token `(seed, index)` mixed into a
//!   single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Inscribed-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct InscribedCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped
    /// to [0, 0.49] so the jittered angles stay strictly increasing.
    pub angle_jitter_frac: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for InscribedCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.3,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon with all vertices on the unit circle,
/// listed in counterclockwise boundary order.
pub fn draw_polygon_inscribed(cfg: InscribedCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            Vector2::new(th.cos(), th.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{dedup_vertices, GeomCfg};

    #[test]
    fn reproducible_draw() {
        let cfg = InscribedCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_inscribed(cfg, tok);
        let p2 = draw_polygon_inscribed(cfg, tok);
        assert_eq!(p1.len(), p2.len());
        for (a, b) in p1.iter().zip(p2.iter()) {
            assert!((a - b).norm() < 1e-15);
        }
    }

    #[test]
    fn vertices_on_unit_circle_and_distinct() {
        let cfg = InscribedCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.45,
            random_phase: true,
        };
        for index in 0..50 {
            let poly = draw_polygon_inscribed(cfg, ReplayToken { seed: 9, index });
            assert!(poly.len() >= 3);
            for v in &poly {
                assert!((v.norm() - 1.0).abs() < 1e-12);
            }
            // Jitter is clamped below half the spacing, so no two
            // vertices collide even under rounding.
            let deduped = dedup_vertices(GeomCfg::default(), &poly);
            assert_eq!(deduped.len(), poly.len());
        }
    }

    #[test]
    fn vertex_count_respected() {
        let cfg = InscribedCfg {
            vertex_count: VertexCount::Fixed(5),
            ..InscribedCfg::default()
        };
        let poly = draw_polygon_inscribed(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(poly.len(), 5);
    }
}
