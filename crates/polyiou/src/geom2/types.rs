//! Basic 2D types and the shared rounding tolerance.
//!
//! - `GeomCfg`: centralizes the decimal rounding applied before every
//!   equality/zero comparison in the pipeline.
//! - `Line`: implicit form `a·x + b·y = c`.
//! - `Edge`: directed polygon edge carrying its line.
//! - `LineIntersection`: three-way classification of two lines.

use nalgebra::Vector2;

/// Geometry configuration (rounding tolerance).
///
/// Coordinates generated trigonometrically carry floating-point noise;
/// every comparison that could be corrupted by it routes through
/// `round`, so the tolerance is one tunable constant rather than
/// scattered literals.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Decimal digits kept by `round`.
    pub round_decimals: i32,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { round_decimals: 10 }
    }
}

impl GeomCfg {
    /// Round `v` to `round_decimals` decimal digits.
    #[inline]
    pub fn round(&self, v: f64) -> f64 {
        let scale = 10f64.powi(self.round_decimals);
        (v * scale).round() / scale
    }

    /// Round both coordinates of a point.
    #[inline]
    pub fn round_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(self.round(p.x), self.round(p.y))
    }
}

/// Implicit line `a·x + b·y = c`.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Carrier line of the segment `p0 → p1`.
    ///
    /// Coefficients: `a = p1.y − p0.y`, `b = p0.x − p1.x`,
    /// `c = a·p0.x + b·p0.y` with `c` rounded.
    #[inline]
    pub fn through(p0: Vector2<f64>, p1: Vector2<f64>, cfg: GeomCfg) -> Self {
        let a = p1.y - p0.y;
        let b = p0.x - p1.x;
        let c = cfg.round(a * p0.x + b * p0.y);
        Self { a, b, c }
    }
}

/// Directed polygon edge with its carrier line.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
    pub line: Line,
}

/// Classification of two implicit lines under the rounding tolerance.
///
/// Parallel and coincident lines are ordinary outcomes of the clipping
/// sweep, not failures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineIntersection {
    /// Parallel and distinct: no contact point.
    Parallel,
    /// The same line (cross-ratio equalities hold for both coefficients).
    Coincident,
    /// Unique crossing point.
    At(Vector2<f64>),
}

impl LineIntersection {
    #[inline]
    pub fn is_parallel(&self) -> bool {
        matches!(self, LineIntersection::Parallel)
    }
    #[inline]
    pub fn is_coincident(&self) -> bool {
        matches!(self, LineIntersection::Coincident)
    }
    /// The crossing point, if any.
    #[inline]
    pub fn point(self) -> Option<Vector2<f64>> {
        if let LineIntersection::At(p) = self {
            Some(p)
        } else {
            None
        }
    }
}
