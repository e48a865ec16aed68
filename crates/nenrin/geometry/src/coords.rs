//! Polar/Cartesian conversion and finiteness checks.

use nenrin_types::{DomainId, NenrinError, NenrinResult, PolarPoint, XyPoint};

/// `(θ, r) → (r·cos θ, r·sin θ)`.
#[inline]
pub fn polar_to_xy(p: PolarPoint) -> XyPoint {
    let (sin, cos) = p.theta_rad.sin_cos();
    XyPoint::new(p.r * cos, p.r * sin)
}

/// Inverse of [`polar_to_xy`]; θ lands in `(-π, π]`.
#[inline]
pub fn xy_to_polar(p: XyPoint) -> PolarPoint {
    PolarPoint::new(p.y.atan2(p.x), p.x.hypot(p.y))
}

fn ensure_finite(
    step_index: u64,
    domain_id: Option<&DomainId>,
    coordinate: &'static str,
    value: f64,
) -> NenrinResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NenrinError::NonFiniteValue {
            step_index,
            domain_id: domain_id.cloned(),
            coordinate,
            value,
        })
    }
}

pub fn ensure_finite_polar(
    p: &PolarPoint,
    step_index: u64,
    domain_id: Option<&DomainId>,
) -> NenrinResult<()> {
    ensure_finite(step_index, domain_id, "theta", p.theta_rad)?;
    ensure_finite(step_index, domain_id, "r", p.r)
}

pub fn ensure_finite_xy(p: &XyPoint, step_index: u64, domain_id: Option<&DomainId>) -> NenrinResult<()> {
    ensure_finite(step_index, domain_id, "x", p.x)?;
    ensure_finite(step_index, domain_id, "y", p.y)
}
