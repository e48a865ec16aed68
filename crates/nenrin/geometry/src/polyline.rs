//! Ridge polylines in the requested output format.

use nenrin_types::{
    GeometryOptions, NenrinInput, NenrinResult, OutputFormat, Ridge, RidgePolylinePolar,
    RidgePolylineXy, RidgesOutput, ValidatedInput,
};
use tracing::debug;

use crate::coords::{ensure_finite_polar, ensure_finite_xy, polar_to_xy};
use crate::curve::CurveAlgorithm;
use crate::ridge::build_ridges;

/// Interpolate already-built ridges.
///
/// Nothing is returned unless every ridge succeeds; with
/// `validate_finite` set, the first NaN or infinite coordinate aborts the
/// whole call.
pub fn ridge_polylines<A, Ctx>(
    ridges: &[Ridge],
    algorithm: &A,
    options: &GeometryOptions<Ctx>,
) -> NenrinResult<RidgesOutput>
where
    A: CurveAlgorithm<Ctx> + ?Sized,
    Ctx: Default,
{
    let fallback;
    let ctx = match &options.ctx {
        Some(ctx) => ctx,
        None => {
            fallback = Ctx::default();
            &fallback
        }
    };
    algorithm.validate_ctx(ctx)?;

    let mut polar = Vec::with_capacity(ridges.len());
    for ridge in ridges {
        let points = algorithm.ridge_to_polar_polyline(ridge, ctx);
        if options.validate_finite {
            for p in &points {
                ensure_finite_polar(p, ridge.step_index, None)?;
            }
        }
        polar.push(RidgePolylinePolar {
            step_index: ridge.step_index,
            points,
        });
    }

    debug!(
        algorithm = algorithm.name(),
        ridges = polar.len(),
        samples = polar.iter().map(|p| p.points.len()).sum::<usize>(),
        output = %options.output,
        "ridge polylines sampled"
    );

    match options.output {
        OutputFormat::Polar => Ok(RidgesOutput::Polar(polar)),
        OutputFormat::Xy => {
            let mut xy = Vec::with_capacity(polar.len());
            for line in polar {
                let mut points = Vec::with_capacity(line.points.len());
                for p in line.points {
                    let q = polar_to_xy(p);
                    if options.validate_finite {
                        ensure_finite_xy(&q, line.step_index, None)?;
                    }
                    points.push(q);
                }
                xy.push(RidgePolylineXy {
                    step_index: line.step_index,
                    points,
                });
            }
            Ok(RidgesOutput::Xy(xy))
        }
    }
}

/// Build ring polylines for an input that has already been validated.
pub fn build_ridge_polylines_validated<A, Ctx>(
    input: &ValidatedInput,
    algorithm: &A,
    options: &GeometryOptions<Ctx>,
) -> NenrinResult<RidgesOutput>
where
    A: CurveAlgorithm<Ctx> + ?Sized,
    Ctx: Default,
{
    let ridges = build_ridges(input)?;
    ridge_polylines(&ridges, algorithm, options)
}

/// Validate the input, then build one closed polyline per step.
pub fn build_ridge_polylines<A, Ctx>(
    input: &NenrinInput,
    algorithm: &A,
    options: &GeometryOptions<Ctx>,
) -> NenrinResult<RidgesOutput>
where
    A: CurveAlgorithm<Ctx> + ?Sized,
    Ctx: Default,
{
    let validated = input.validate()?;
    build_ridge_polylines_validated(&validated, algorithm, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{CatmullRomCurve, LinearCurve};
    use nenrin_types::{
        ConfigError, Domain, DomainId, Event, NenrinConfig, NenrinError, PolarAnchor, PolarPoint,
        SamplingContext,
    };
    use std::f64::consts::PI;

    fn input() -> NenrinInput {
        NenrinInput::new(
            NenrinConfig::new(
                10.0,
                2.0,
                vec![
                    Domain::new("a", "A", 0.0),
                    Domain::new("b", "B", PI / 2.0),
                    Domain::new("c", "C", PI),
                ],
            ),
            vec![
                Event::new(0, "a").with_weight(1.0),
                Event::new(1, "b").with_weight(3.0),
            ],
        )
    }

    /// Emits whatever points it was built with; for exercising validation.
    struct FixedCurve(Vec<PolarPoint>);

    impl CurveAlgorithm for FixedCurve {
        fn name(&self) -> &str {
            "fixed"
        }

        fn ridge_to_polar_polyline(&self, _ridge: &Ridge, _ctx: &SamplingContext) -> Vec<PolarPoint> {
            self.0.clone()
        }
    }

    #[test]
    fn polar_output_per_step() {
        let opts = GeometryOptions::new(OutputFormat::Polar).with_ctx(SamplingContext::new(4));
        let out = build_ridge_polylines(&input(), &CatmullRomCurve, &opts).unwrap();
        let lines = out.as_polar().unwrap();
        assert_eq!(out.step_indices(), vec![0, 1]);
        assert_eq!(lines[0].points.len(), 12);
        assert_eq!(lines[0].points[0], PolarPoint::new(0.0, 12.0));
        assert_eq!(lines[1].points[4], PolarPoint::new(PI / 2.0, 16.0));
    }

    #[test]
    fn xy_output_converts_every_point() {
        let opts = GeometryOptions::new(OutputFormat::Xy).with_ctx(SamplingContext::new(3));
        let out = build_ridge_polylines(&input(), &LinearCurve, &opts).unwrap();
        let lines = out.as_xy().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].points.len(), 9);
        let first = lines[0].points[0];
        assert!((first.x - 12.0).abs() < 1e-12 && first.y.abs() < 1e-12);
    }

    #[test]
    fn default_ctx_used_when_absent() {
        let out = build_ridge_polylines(&input(), &CatmullRomCurve, &GeometryOptions::default()).unwrap();
        let lines = out.as_polar().unwrap();
        assert_eq!(
            lines[0].points.len(),
            3 * SamplingContext::DEFAULT_SAMPLES_PER_SEGMENT
        );
    }

    #[test]
    fn invalid_ctx_rejected_before_sampling() {
        let opts = GeometryOptions::new(OutputFormat::Polar).with_ctx(SamplingContext::new(0));
        let err = build_ridge_polylines(&input(), &CatmullRomCurve, &opts).unwrap_err();
        assert_eq!(err, NenrinError::Config(ConfigError::InvalidSampling { value: 0 }));
    }

    #[test]
    fn unknown_domain_yields_no_ridges() {
        let mut bad = input();
        bad.events.push(Event::new(2, "nowhere"));
        let err = build_ridge_polylines(&bad, &CatmullRomCurve, &GeometryOptions::default()).unwrap_err();
        assert!(matches!(err, NenrinError::UnknownDomain { .. }));
    }

    #[test]
    fn non_finite_caught_only_when_requested() {
        let curve = FixedCurve(vec![PolarPoint::new(0.0, f64::NAN)]);
        let ridges = vec![Ridge {
            step_index: 3,
            anchors: vec![PolarAnchor {
                domain_id: DomainId::from("a"),
                theta_rad: 0.0,
                r: 1.0,
            }],
        }];

        let lenient = ridge_polylines(&ridges, &curve, &GeometryOptions::default()).unwrap();
        assert_eq!(lenient.len(), 1);

        let strict = GeometryOptions::new(OutputFormat::Polar).validating_finite();
        let err = ridge_polylines(&ridges, &curve, &strict).unwrap_err();
        assert!(matches!(
            err,
            NenrinError::NonFiniteValue {
                step_index: 3,
                coordinate: "r",
                ..
            }
        ));
    }

    #[test]
    fn infinite_radius_caught_before_xy_conversion() {
        let curve = FixedCurve(vec![PolarPoint::new(0.0, f64::INFINITY)]);
        let ridges = vec![Ridge {
            step_index: 0,
            anchors: vec![],
        }];
        let strict = GeometryOptions::new(OutputFormat::Xy).validating_finite();
        assert!(matches!(
            ridge_polylines(&ridges, &curve, &strict),
            Err(NenrinError::NonFiniteValue { coordinate: "r", .. })
        ));
    }

    #[test]
    fn overflowing_growth_caught_when_requested() {
        let overflow = NenrinInput::new(
            NenrinConfig::new(1.0, 1.0, vec![Domain::new("a", "A", 0.0)]),
            vec![
                Event::new(0, "a").with_weight(1e308),
                Event::new(0, "a").with_weight(1e308),
            ],
        );

        let lax = build_ridge_polylines(&overflow, &CatmullRomCurve, &GeometryOptions::default()).unwrap();
        assert_eq!(lax.as_polar().unwrap()[0].points[0].r, f64::INFINITY);

        let strict = GeometryOptions::new(OutputFormat::Polar).validating_finite();
        assert_eq!(
            build_ridge_polylines(&overflow, &CatmullRomCurve, &strict).unwrap_err(),
            NenrinError::NonFiniteValue {
                step_index: 0,
                domain_id: None,
                coordinate: "r",
                value: f64::INFINITY,
            }
        );
    }
}
