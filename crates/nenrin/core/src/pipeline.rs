use std::sync::Arc;

use nenrin_dots::{place_dots, DotPlacementAlgorithm, PlacementRegistry};
use nenrin_geometry::{build_ridges, ridge_polylines, CurveAlgorithm, CurveRegistry};
use nenrin_types::{
    DotsOutput, NenrinError, NenrinInput, NenrinResult, RidgesOutput, ValidatedInput,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::options::PipelineOptions;

/// Both outputs of one run over the same input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NenrinOutput {
    pub ridges: RidgesOutput,
    #[serde(flatten)]
    pub dots: DotsOutput,
}

/// Runs the ring pipeline with strategies chosen by name.
///
/// The pipeline holds no per-call state: every call validates its input
/// and builds fresh ridges and dots.
pub struct NenrinPipeline {
    curves: CurveRegistry,
    placements: PlacementRegistry,
    options: PipelineOptions,
}

impl NenrinPipeline {
    /// Pipeline with the built-in strategies.
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            curves: CurveRegistry::new(),
            placements: PlacementRegistry::new(),
            options,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(PipelineOptions::default())
    }

    pub fn with_curve(mut self, curve: Arc<dyn CurveAlgorithm>) -> Self {
        self.curves.register(curve);
        self
    }

    pub fn with_placement(mut self, placement: Arc<dyn DotPlacementAlgorithm>) -> Self {
        self.placements.register(placement);
        self
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn curves(&self) -> &CurveRegistry {
        &self.curves
    }

    pub fn placements(&self) -> &PlacementRegistry {
        &self.placements
    }

    fn curve(&self) -> NenrinResult<Arc<dyn CurveAlgorithm>> {
        self.curves
            .get(&self.options.curve)
            .ok_or_else(|| NenrinError::UnknownAlgorithm {
                kind: "curve",
                name: self.options.curve.clone(),
            })
    }

    fn placement(&self) -> NenrinResult<Arc<dyn DotPlacementAlgorithm>> {
        self.placements
            .get(&self.options.placement)
            .ok_or_else(|| NenrinError::UnknownAlgorithm {
                kind: "placement",
                name: self.options.placement.clone(),
            })
    }

    /// Ring polylines, one per step.
    pub fn ridges(&self, input: &NenrinInput) -> NenrinResult<RidgesOutput> {
        let curve = self.curve()?;
        self.options.validate()?;
        let validated = input.validate()?;
        ridge_polylines(
            &build_ridges(&validated)?,
            curve.as_ref(),
            &self.options.geometry_options(),
        )
    }

    /// Dots (and knots, when enabled), one per event.
    pub fn dots(&self, input: &NenrinInput) -> NenrinResult<DotsOutput> {
        let placement = self.placement()?;
        self.options.validate()?;
        let validated = input.validate()?;
        place_dots(
            &validated,
            &build_ridges(&validated)?,
            placement.as_ref(),
            &self.options.dots_options(),
        )
    }

    /// Validate once and produce both outputs from the same ridges.
    pub fn render(&self, input: &NenrinInput) -> NenrinResult<NenrinOutput> {
        let curve = self.curve()?;
        let placement = self.placement()?;
        self.options.validate()?;
        let validated = input.validate()?;
        self.render_validated(&validated, curve.as_ref(), placement.as_ref())
    }

    fn render_validated(
        &self,
        input: &ValidatedInput,
        curve: &dyn CurveAlgorithm,
        placement: &dyn DotPlacementAlgorithm,
    ) -> NenrinResult<NenrinOutput> {
        let ridges = build_ridges(input)?;
        let polylines = ridge_polylines(&ridges, curve, &self.options.geometry_options())?;
        let dots = place_dots(input, &ridges, placement, &self.options.dots_options())?;

        info!(
            curve = curve.name(),
            placement = placement.name(),
            ridges = polylines.len(),
            dots = dots.dots.len(),
            "nenrin render complete"
        );

        Ok(NenrinOutput {
            ridges: polylines,
            dots,
        })
    }
}

impl Default for NenrinPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
