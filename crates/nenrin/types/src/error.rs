use thiserror::Error;

use crate::input::DomainId;

/// Configuration rejected before any geometry is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("config declares no domains")]
    EmptyDomains,

    #[error("duplicate domain id: {domain_id}")]
    DuplicateDomain { domain_id: DomainId },

    #[error("vmin must be finite and > 0, got {vmin}")]
    NonPositiveVmin { vmin: f64 },

    #[error("growthPerActivity must be finite and >= 0, got {value}")]
    InvalidGrowth { value: f64 },

    #[error("domain {domain_id} has non-finite angle {value}")]
    NonFiniteAngle { domain_id: DomainId, value: f64 },

    /// Anchors are ordered by raw angle, so angles spanning a full turn or
    /// more (e.g. `0.5` and `7.0`) would make one ring wind around twice.
    /// Wrap such angles into a single turn before building the config.
    #[error("domain angles must span less than one full turn, got {span} rad")]
    AngleSpan { span: f64 },

    #[error("samples per segment must be >= 1, got {value}")]
    InvalidSampling { value: usize },

    #[error("band padding must be finite and >= 0, got {value}")]
    InvalidBandPadding { value: f64 },
}

/// Errors surfaced by the ring pipeline.
///
/// Every variant carries enough context (domain, step, input position)
/// to point at the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NenrinError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("event #{input_index} at step {step_index} references unknown domain {domain_id}")]
    UnknownDomain {
        domain_id: DomainId,
        step_index: i64,
        input_index: usize,
    },

    #[error("event #{input_index} for domain {domain_id} has negative step index {step_index}")]
    InvalidStep {
        domain_id: DomainId,
        step_index: i64,
        input_index: usize,
    },

    #[error("event #{input_index} for domain {domain_id} at step {step_index} has invalid weight {weight}")]
    InvalidWeight {
        domain_id: DomainId,
        step_index: i64,
        input_index: usize,
        weight: f64,
    },

    #[error("non-finite {coordinate} = {value} at step {step_index}")]
    NonFiniteValue {
        step_index: u64,
        domain_id: Option<DomainId>,
        coordinate: &'static str,
        value: f64,
    },

    #[error("no ridge for step {step_index}")]
    MissingRidge { step_index: u64 },

    #[error("ridge at step {step_index} has no anchor for domain {domain_id}")]
    MissingAnchor { domain_id: DomainId, step_index: u64 },

    #[error("placement strategy {algorithm} produced {actual} dots for {expected} events")]
    PlacementCount {
        algorithm: String,
        expected: usize,
        actual: usize,
    },

    #[error("unknown {kind} algorithm: {name}")]
    UnknownAlgorithm { kind: &'static str, name: String },
}

/// Convenience type alias for pipeline results.
pub type NenrinResult<T> = Result<T, NenrinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_domain_display() {
        let e = NenrinError::UnknownDomain {
            domain_id: DomainId::from("ghost"),
            step_index: 3,
            input_index: 7,
        };
        let msg = e.to_string();
        assert!(msg.contains("ghost"));
        assert!(msg.contains("step 3"));
        assert!(msg.contains("#7"));
    }

    #[test]
    fn config_error_converts() {
        let e: NenrinError = ConfigError::NonPositiveVmin { vmin: 0.0 }.into();
        assert!(matches!(e, NenrinError::Config(ConfigError::NonPositiveVmin { .. })));
        assert!(e.to_string().contains("vmin"));
    }

    #[test]
    fn non_finite_display() {
        let e = NenrinError::NonFiniteValue {
            step_index: 2,
            domain_id: None,
            coordinate: "x",
            value: f64::NAN,
        };
        assert!(e.to_string().contains("non-finite x"));
    }
}
