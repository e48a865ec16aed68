//! Curve strategies: ridge anchors → dense closed polyline in polar space.
//!
//! A ridge is treated as a periodic signal `r(θ)`. Segment `i` runs from
//! anchor `i` to anchor `i + 1`, indices taken modulo the anchor count, so
//! the segment from the last anchor back to the first is built exactly
//! like every other one. Each segment emits `samples_per_segment` points
//! starting with its own anchor; the closing point is the next segment's
//! first sample, and the polyline is implicitly closed.

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::sync::Arc;

use nenrin_types::{ConfigError, PolarAnchor, PolarPoint, Ridge, SamplingContext};
use tracing::warn;

/// Name of the default curve strategy.
pub const DEFAULT_CURVE: &str = "catmull-rom";

/// A named ridge-to-polyline transformation.
///
/// `Ctx` is the strategy's own parameter type, passed alongside each ridge.
pub trait CurveAlgorithm<Ctx = SamplingContext>: Send + Sync {
    /// Registry key of this strategy.
    fn name(&self) -> &str;

    /// Reject parameters the strategy cannot work with.
    fn validate_ctx(&self, _ctx: &Ctx) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Densely sample the closed curve through the ridge's anchors.
    fn ridge_to_polar_polyline(&self, ridge: &Ridge, ctx: &Ctx) -> Vec<PolarPoint>;
}

/// Angular gap from each anchor to the next, wrapping at the end.
///
/// Anchors are angle-sorted and span less than a full turn, so every gap
/// is non-negative and the gaps sum to exactly one turn.
pub(crate) fn angular_gaps(anchors: &[PolarAnchor]) -> Vec<f64> {
    let n = anchors.len();
    (0..n)
        .map(|i| {
            let here = anchors[i].theta_rad;
            if i + 1 < n {
                anchors[i + 1].theta_rad - here
            } else {
                anchors[0].theta_rad + TAU - here
            }
        })
        .collect()
}

/// Shared sampling grid for the built-in strategies.
///
/// `radius(i, t)` gives the radius on segment `i` at `t ∈ (0, 1)`; the
/// anchor itself is emitted verbatim at `t = 0`.
fn sample_segments<F>(anchors: &[PolarAnchor], samples: usize, gaps: &[f64], radius: F) -> Vec<PolarPoint>
where
    F: Fn(usize, f64) -> f64,
{
    let samples = samples.max(1);
    let mut points = Vec::with_capacity(anchors.len() * samples);
    for (i, anchor) in anchors.iter().enumerate() {
        points.push(anchor.point());
        for k in 1..samples {
            let t = k as f64 / samples as f64;
            points.push(PolarPoint::new(anchor.theta_rad + t * gaps[i], radius(i, t)));
        }
    }
    points
}

/// Periodic Catmull-Rom interpolation in `(θ, r)`.
///
/// Cubic Hermite segments with tangents from the two neighbouring anchors,
/// scaled for uneven angular spacing:
/// `m_i = (r_{i+1} − r_{i−1}) / (Δθ_{i−1} + Δθ_i)`.
/// The curve is C1 everywhere, including across the wrap, and passes
/// through every anchor exactly. Large radius jumps between angularly
/// adjacent domains can overshoot; no clamping is applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatmullRomCurve;

impl CatmullRomCurve {
    fn tangents(anchors: &[PolarAnchor], gaps: &[f64]) -> Vec<f64> {
        let n = anchors.len();
        (0..n)
            .map(|i| {
                let prev = (i + n - 1) % n;
                let next = (i + 1) % n;
                let span = gaps[prev] + gaps[i];
                if span > f64::EPSILON {
                    (anchors[next].r - anchors[prev].r) / span
                } else {
                    0.0
                }
            })
            .collect()
    }
}

impl CurveAlgorithm for CatmullRomCurve {
    fn name(&self) -> &str {
        "catmull-rom"
    }

    fn validate_ctx(&self, ctx: &SamplingContext) -> Result<(), ConfigError> {
        ctx.validate()
    }

    fn ridge_to_polar_polyline(&self, ridge: &Ridge, ctx: &SamplingContext) -> Vec<PolarPoint> {
        let anchors = &ridge.anchors;
        let n = anchors.len();
        if n == 0 {
            return Vec::new();
        }
        let gaps = angular_gaps(anchors);
        let tangents = Self::tangents(anchors, &gaps);

        sample_segments(anchors, ctx.samples_per_segment, &gaps, |i, t| {
            let j = (i + 1) % n;
            let dt = gaps[i];
            let t2 = t * t;
            let t3 = t2 * t;
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            h00 * anchors[i].r
                + h10 * dt * tangents[i]
                + h01 * anchors[j].r
                + h11 * dt * tangents[j]
        })
    }
}

/// Piecewise-linear radius between anchors on the same sampling grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearCurve;

impl CurveAlgorithm for LinearCurve {
    fn name(&self) -> &str {
        "linear"
    }

    fn validate_ctx(&self, ctx: &SamplingContext) -> Result<(), ConfigError> {
        ctx.validate()
    }

    fn ridge_to_polar_polyline(&self, ridge: &Ridge, ctx: &SamplingContext) -> Vec<PolarPoint> {
        let anchors = &ridge.anchors;
        let n = anchors.len();
        if n == 0 {
            return Vec::new();
        }
        let gaps = angular_gaps(anchors);
        sample_segments(anchors, ctx.samples_per_segment, &gaps, |i, t| {
            let j = (i + 1) % n;
            (1.0 - t) * anchors[i].r + t * anchors[j].r
        })
    }
}

/// Curve strategies selectable by name.
pub struct CurveRegistry<Ctx = SamplingContext> {
    algorithms: HashMap<String, Arc<dyn CurveAlgorithm<Ctx>>>,
}

impl<Ctx> CurveRegistry<Ctx> {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    pub fn register(&mut self, algorithm: Arc<dyn CurveAlgorithm<Ctx>>) {
        let name = algorithm.name().to_string();
        if self.algorithms.insert(name.clone(), algorithm).is_some() {
            warn!(name = %name, "replaced registered strategy");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CurveAlgorithm<Ctx>>> {
        self.algorithms.get(name).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.algorithms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl CurveRegistry<SamplingContext> {
    /// Registry holding the built-in strategies.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(CatmullRomCurve));
        registry.register(Arc::new(LinearCurve));
        registry
    }
}

impl Default for CurveRegistry<SamplingContext> {
    fn default() -> Self {
        Self::new()
    }
}
