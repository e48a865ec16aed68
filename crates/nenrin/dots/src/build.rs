use nenrin_geometry::build_ridges;
use nenrin_geometry::coords::{ensure_finite_polar, ensure_finite_xy, polar_to_xy, xy_to_polar};
use nenrin_types::{
    Dot, DotsOptions, DotsOutput, NenrinError, NenrinInput, NenrinResult, OutputFormat, PolarPoint,
    Position, Ridge, ValidatedInput,
};
use tracing::debug;

use crate::placement::{DotPlacementAlgorithm, DotPlacementContext};

/// Place dots on ridges that were already built for `input`.
///
/// Applies band padding, converts to the requested format and, when asked,
/// copies knot-flagged events into `knots`. Nothing is returned unless every
/// event was placed.
pub fn place_dots<A>(
    input: &ValidatedInput,
    ridges: &[Ridge],
    algorithm: &A,
    options: &DotsOptions,
) -> NenrinResult<DotsOutput>
where
    A: DotPlacementAlgorithm + ?Sized,
{
    options.validate()?;

    let ctx = DotPlacementContext::new(input, ridges);
    let placed = algorithm.build_dots(&ctx)?;
    let events = input.events();
    if placed.len() != events.len() {
        return Err(NenrinError::PlacementCount {
            algorithm: algorithm.name().to_string(),
            expected: events.len(),
            actual: placed.len(),
        });
    }

    let padding = options.band_padding_r.unwrap_or(0.0);
    let mut dots = Vec::with_capacity(placed.len());
    let mut knots = Vec::new();

    for (dot, event) in placed.into_iter().zip(events) {
        let polar = match dot.position {
            Position::Polar(p) => p,
            Position::Xy(q) => xy_to_polar(q),
        };
        let polar = PolarPoint::new(polar.theta_rad, polar.r + padding);
        if options.validate_finite {
            ensure_finite_polar(&polar, dot.step_index, Some(&dot.domain_id))?;
        }

        let position = match options.output {
            OutputFormat::Polar => Position::Polar(polar),
            OutputFormat::Xy => {
                let q = polar_to_xy(polar);
                if options.validate_finite {
                    ensure_finite_xy(&q, dot.step_index, Some(&dot.domain_id))?;
                }
                Position::Xy(q)
            }
        };

        let dot = Dot { position, ..dot };
        if options.emit_knots && event.is_knot {
            knots.push(dot.clone());
        }
        dots.push(dot);
    }

    debug!(
        algorithm = algorithm.name(),
        dots = dots.len(),
        knots = knots.len(),
        output = %options.output,
        "dots placed"
    );

    Ok(DotsOutput {
        dots,
        knots: options.emit_knots.then_some(knots),
    })
}

/// Build ridges and place dots for an already validated input.
pub fn build_dots_validated<A>(
    input: &ValidatedInput,
    algorithm: &A,
    options: &DotsOptions,
) -> NenrinResult<DotsOutput>
where
    A: DotPlacementAlgorithm + ?Sized,
{
    let ridges = build_ridges(input)?;
    place_dots(input, &ridges, algorithm, options)
}

/// Validate the input, then map every event to a dot.
pub fn build_dots<A>(input: &NenrinInput, algorithm: &A, options: &DotsOptions) -> NenrinResult<DotsOutput>
where
    A: DotPlacementAlgorithm + ?Sized,
{
    let validated = input.validate()?;
    build_dots_validated(&validated, algorithm, options)
}
