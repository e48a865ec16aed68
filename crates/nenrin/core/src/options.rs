//! Pipeline configuration surface.

use nenrin_dots::DEFAULT_PLACEMENT;
use nenrin_geometry::DEFAULT_CURVE;
use nenrin_types::{ConfigError, DotsOptions, GeometryOptions, OutputFormat, SamplingContext};
use serde::{Deserialize, Serialize};

/// Options for a [`NenrinPipeline`](crate::NenrinPipeline).
///
/// Every field has a default, so an options layer can deserialize a
/// partial document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineOptions {
    pub output: OutputFormat,
    /// Curve strategy name.
    pub curve: String,
    pub samples_per_segment: usize,
    /// Placement strategy name.
    pub placement: String,
    pub validate_finite: bool,
    pub band_padding_r: Option<f64>,
    pub emit_knots: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            output: OutputFormat::Polar,
            curve: DEFAULT_CURVE.to_string(),
            samples_per_segment: SamplingContext::DEFAULT_SAMPLES_PER_SEGMENT,
            placement: DEFAULT_PLACEMENT.to_string(),
            validate_finite: false,
            band_padding_r: None,
            emit_knots: false,
        }
    }
}

impl PipelineOptions {
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_curve(mut self, name: impl Into<String>) -> Self {
        self.curve = name.into();
        self
    }

    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples;
        self
    }

    pub fn with_placement(mut self, name: impl Into<String>) -> Self {
        self.placement = name.into();
        self
    }

    pub fn with_knots(mut self) -> Self {
        self.emit_knots = true;
        self
    }

    pub fn validating_finite(mut self) -> Self {
        self.validate_finite = true;
        self
    }

    /// Validate the numeric options. Strategy names are checked against
    /// the pipeline's registries when a call is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sampling().validate()?;
        self.dots_options().validate()
    }

    pub fn sampling(&self) -> SamplingContext {
        SamplingContext::new(self.samples_per_segment)
    }

    pub fn geometry_options(&self) -> GeometryOptions {
        GeometryOptions {
            output: self.output,
            ctx: Some(self.sampling()),
            validate_finite: self.validate_finite,
        }
    }

    pub fn dots_options(&self) -> DotsOptions {
        DotsOptions {
            output: self.output,
            band_padding_r: self.band_padding_r,
            emit_knots: self.emit_knots,
            validate_finite: self.validate_finite,
        }
    }
}
