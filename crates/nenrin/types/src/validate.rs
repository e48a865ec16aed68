//! Validation boundary.
//!
//! Optional event fields are resolved to explicit defaults here (weight 1,
//! not a knot) so downstream stages never branch on absent values.

use tracing::debug;

use crate::error::{NenrinError, NenrinResult};
use crate::input::{DomainId, NenrinConfig, NenrinInput};

/// Default weight of an event that carries none.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// An event after validation, with defaults applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEvent {
    /// Position in the original event list.
    pub input_index: usize,
    pub step_index: u64,
    pub domain_id: DomainId,
    /// Declaration position of the domain in the config.
    pub domain_index: usize,
    pub weight: f64,
    pub is_knot: bool,
    pub event_key: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Input that passed every eager check.
///
/// Only [`NenrinInput::validate`] builds one, so holding a value is proof
/// that the config is sound and every event is addressable.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedInput {
    config: NenrinConfig,
    events: Vec<ResolvedEvent>,
}

impl ValidatedInput {
    pub fn config(&self) -> &NenrinConfig {
        &self.config
    }

    pub fn events(&self) -> &[ResolvedEvent] {
        &self.events
    }
}

impl NenrinInput {
    /// Check the config and every event, resolving optional fields.
    ///
    /// Fails on the first offending item; nothing downstream runs on a
    /// partially valid input.
    pub fn validate(&self) -> NenrinResult<ValidatedInput> {
        self.config.validate()?;

        let mut events = Vec::with_capacity(self.events.len());
        for (input_index, event) in self.events.iter().enumerate() {
            if event.step_index < 0 {
                return Err(NenrinError::InvalidStep {
                    domain_id: event.domain_id.clone(),
                    step_index: event.step_index,
                    input_index,
                });
            }
            let domain_index = self.config.domain_index(&event.domain_id).ok_or_else(|| {
                NenrinError::UnknownDomain {
                    domain_id: event.domain_id.clone(),
                    step_index: event.step_index,
                    input_index,
                }
            })?;

            let weight = event.weight.unwrap_or(DEFAULT_WEIGHT);
            if !weight.is_finite() || (weight < 0.0 && !self.config.allow_negative_weights) {
                return Err(NenrinError::InvalidWeight {
                    domain_id: event.domain_id.clone(),
                    step_index: event.step_index,
                    input_index,
                    weight,
                });
            }

            events.push(ResolvedEvent {
                input_index,
                step_index: event.step_index as u64,
                domain_id: event.domain_id.clone(),
                domain_index,
                weight,
                is_knot: event.is_knot.unwrap_or(false),
                event_key: event.event_key.clone(),
                metadata: event.metadata.clone(),
            });
        }

        debug!(
            domains = self.config.domains.len(),
            events = events.len(),
            "validated nenrin input"
        );

        Ok(ValidatedInput {
            config: self.config.clone(),
            events,
        })
    }
}
