//! Input side of the pipeline: domains, events and the ring configuration.
//!
//! These types arrive already parsed from an external loader. They are
//! permissive (optional fields, signed step indices) and are
//! tightened by [`NenrinInput::validate`].

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identifier of a domain (one angular axis of the diagram).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(pub String);

impl DomainId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DomainId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DomainId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A fixed angular category on the radial diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: DomainId,
    #[serde(default)]
    pub label: String,
    pub angle_rad: f64,
}

impl Domain {
    pub fn new(id: impl Into<DomainId>, label: impl Into<String>, angle_rad: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            angle_rad,
        }
    }
}

/// One recorded occurrence for a domain at a time step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub step_index: i64,
    pub domain_id: DomainId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_knot: Option<bool>,
    /// Opaque payload, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Event {
    pub fn new(step_index: i64, domain_id: impl Into<DomainId>) -> Self {
        Self {
            step_index,
            domain_id: domain_id.into(),
            weight: None,
            event_key: None,
            is_knot: None,
            metadata: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.event_key = Some(key.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn knot(mut self) -> Self {
        self.is_knot = Some(true);
        self
    }
}

/// Ring configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NenrinConfig {
    /// Minimum ring radius. Every anchor sits at or beyond it.
    pub vmin: f64,
    /// Radius gained per unit of accumulated weight.
    pub growth_per_activity: f64,
    pub domains: Vec<Domain>,
    /// Negative event weights are rejected unless this is set.
    #[serde(default)]
    pub allow_negative_weights: bool,
}

impl NenrinConfig {
    pub fn new(vmin: f64, growth_per_activity: f64, domains: Vec<Domain>) -> Self {
        Self {
            vmin,
            growth_per_activity,
            domains,
            allow_negative_weights: false,
        }
    }

    pub fn with_negative_weights(mut self) -> Self {
        self.allow_negative_weights = true;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domains.is_empty() {
            return Err(ConfigError::EmptyDomains);
        }
        if !(self.vmin.is_finite() && self.vmin > 0.0) {
            return Err(ConfigError::NonPositiveVmin { vmin: self.vmin });
        }
        if !(self.growth_per_activity.is_finite() && self.growth_per_activity >= 0.0) {
            return Err(ConfigError::InvalidGrowth {
                value: self.growth_per_activity,
            });
        }

        let mut seen = HashSet::with_capacity(self.domains.len());
        for domain in &self.domains {
            if !seen.insert(&domain.id) {
                return Err(ConfigError::DuplicateDomain {
                    domain_id: domain.id.clone(),
                });
            }
            if !domain.angle_rad.is_finite() {
                return Err(ConfigError::NonFiniteAngle {
                    domain_id: domain.id.clone(),
                    value: domain.angle_rad,
                });
            }
        }

        // Anchors are ordered by raw angle, so one ring must not wind twice.
        let (lo, hi) = self
            .domains
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d.angle_rad), hi.max(d.angle_rad))
            });
        if hi - lo >= std::f64::consts::TAU {
            return Err(ConfigError::AngleSpan { span: hi - lo });
        }

        Ok(())
    }

    /// Declaration position of a domain, if declared.
    pub fn domain_index(&self, id: &DomainId) -> Option<usize> {
        self.domains.iter().position(|d| &d.id == id)
    }
}

/// Everything the pipeline consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NenrinInput {
    pub config: NenrinConfig,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl NenrinInput {
    pub fn new(config: NenrinConfig, events: Vec<Event>) -> Self {
        Self { config, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_domains() -> NenrinConfig {
        NenrinConfig::new(
            10.0,
            2.0,
            vec![
                Domain::new("a", "Alpha", 0.0),
                Domain::new("b", "Beta", std::f64::consts::PI),
            ],
        )
    }

    #[test]
    fn valid_config_passes() {
        assert!(two_domains().validate().is_ok());
    }

    #[test]
    fn empty_domains_rejected() {
        let config = NenrinConfig::new(10.0, 1.0, vec![]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyDomains));
    }

    #[test]
    fn duplicate_domain_rejected() {
        let mut config = two_domains();
        config.domains.push(Domain::new("a", "Again", 1.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateDomain {
                domain_id: DomainId::from("a")
            })
        );
    }

    #[test]
    fn non_positive_vmin_rejected() {
        let mut config = two_domains();
        config.vmin = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveVmin { .. })
        ));
        config.vmin = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveVmin { .. })
        ));
    }

    #[test]
    fn negative_growth_rejected() {
        let mut config = two_domains();
        config.growth_per_activity = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGrowth { .. })
        ));
    }

    #[test]
    fn non_finite_angle_rejected() {
        let mut config = two_domains();
        config.domains[1].angle_rad = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteAngle { .. })
        ));
    }

    #[test]
    fn full_turn_span_rejected() {
        let mut config = two_domains();
        config.domains.push(Domain::new("c", "C", std::f64::consts::TAU));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AngleSpan { .. })
        ));
    }

    #[test]
    fn negative_angles_allowed() {
        let config = NenrinConfig::new(
            1.0,
            1.0,
            vec![Domain::new("w", "West", -3.0), Domain::new("e", "East", 3.0)],
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn input_deserializes_from_camel_case() {
        let json = r#"{
            "config": {
                "vmin": 10,
                "growthPerActivity": 2,
                "domains": [{"id": "a", "label": "A", "angleRad": 0}]
            },
            "events": [
                {"stepIndex": 0, "domainId": "a"},
                {"stepIndex": 1, "domainId": "a", "weight": 3, "isKnot": true, "metadata": {"k": 1}}
            ]
        }"#;
        let input: NenrinInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.config.domains[0].id, DomainId::from("a"));
        assert!(!input.config.allow_negative_weights);
        assert_eq!(input.events[0].weight, None);
        assert_eq!(input.events[1].is_knot, Some(true));
        assert_eq!(input.events[1].metadata, Some(serde_json::json!({"k": 1})));
    }

    #[test]
    fn domain_index_follows_declaration_order() {
        let config = two_domains();
        assert_eq!(config.domain_index(&DomainId::from("b")), Some(1));
        assert_eq!(config.domain_index(&DomainId::from("z")), None);
    }
}
