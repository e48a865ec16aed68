//! Per-call options supplied by the embedding layer.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Coordinate system of the emitted points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Polar,
    Xy,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Polar => write!(f, "polar"),
            Self::Xy => write!(f, "xy"),
        }
    }
}

/// Sampling density for the built-in curve strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingContext {
    /// Points emitted per anchor-to-anchor segment, the anchor included.
    pub samples_per_segment: usize,
}

impl SamplingContext {
    pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 24;

    pub fn new(samples_per_segment: usize) -> Self {
        Self {
            samples_per_segment,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples_per_segment == 0 {
            return Err(ConfigError::InvalidSampling {
                value: self.samples_per_segment,
            });
        }
        Ok(())
    }
}

impl Default for SamplingContext {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SAMPLES_PER_SEGMENT)
    }
}

/// Options for ridge polyline construction.
///
/// `Ctx` is the curve strategy's own parameter type; `None` means the
/// strategy's default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryOptions<Ctx = SamplingContext> {
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub ctx: Option<Ctx>,
    #[serde(default)]
    pub validate_finite: bool,
}

impl<Ctx> Default for GeometryOptions<Ctx> {
    fn default() -> Self {
        Self {
            output: OutputFormat::Polar,
            ctx: None,
            validate_finite: false,
        }
    }
}

impl<Ctx> GeometryOptions<Ctx> {
    pub fn new(output: OutputFormat) -> Self {
        Self {
            output,
            ..Default::default()
        }
    }

    pub fn with_ctx(mut self, ctx: Ctx) -> Self {
        self.ctx = Some(ctx);
        self
    }

    pub fn validating_finite(mut self) -> Self {
        self.validate_finite = true;
        self
    }
}

/// Options for dot placement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotsOptions {
    #[serde(default)]
    pub output: OutputFormat,
    /// Outward radial offset added to every placed dot.
    #[serde(default)]
    pub band_padding_r: Option<f64>,
    /// Also emit the knot subset.
    #[serde(default)]
    pub emit_knots: bool,
    #[serde(default)]
    pub validate_finite: bool,
}

impl DotsOptions {
    pub fn new(output: OutputFormat) -> Self {
        Self {
            output,
            ..Default::default()
        }
    }

    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding_r = Some(padding);
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

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(padding) = self.band_padding_r {
            if !(padding.is_finite() && padding >= 0.0) {
                return Err(ConfigError::InvalidBandPadding { value: padding });
            }
        }
        Ok(())
    }
}
