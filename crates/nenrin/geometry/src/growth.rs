//! Growth accumulation: cumulative per-domain radii at every step.
//!
//! Each domain keeps a running weighted sum of its events. The reported
//! radius is `max(vmin, vmin + growth_per_activity * sum)`: the sum itself
//! is never clamped, only the radius is floored when it is read out.

use std::collections::BTreeMap;

use nenrin_types::{NenrinConfig, NenrinError, NenrinResult, ResolvedEvent, ValidatedInput};
use tracing::debug;

/// Radii for every domain at every materialized step.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthTable {
    /// Sorted, distinct step indices. Always contains step 0.
    steps: Vec<u64>,
    /// `radii[domain_index][step_position]`, domains in declaration order.
    radii: Vec<Vec<f64>>,
}

impl GrowthTable {
    pub fn steps(&self) -> &[u64] {
        &self.steps
    }

    pub fn domain_count(&self) -> usize {
        self.radii.len()
    }

    /// Radii of one domain, aligned with [`steps`](Self::steps).
    pub fn domain_radii(&self, domain_index: usize) -> Option<&[f64]> {
        self.radii.get(domain_index).map(Vec::as_slice)
    }

    /// Radius of a domain at a step position.
    pub fn radius(&self, domain_index: usize, step_position: usize) -> Option<f64> {
        self.radii.get(domain_index)?.get(step_position).copied()
    }

    /// Radius of a domain at a step index, if that step was materialized.
    pub fn radius_at(&self, domain_index: usize, step_index: u64) -> Option<f64> {
        let pos = self.steps.binary_search(&step_index).ok()?;
        self.radius(domain_index, pos)
    }
}

/// Turns weighted events into a [`GrowthTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthAccumulator {
    vmin: f64,
    growth_per_activity: f64,
}

impl GrowthAccumulator {
    pub fn new(vmin: f64, growth_per_activity: f64) -> Self {
        Self {
            vmin,
            growth_per_activity,
        }
    }

    pub fn from_config(config: &NenrinConfig) -> Self {
        Self::new(config.vmin, config.growth_per_activity)
    }

    /// Floored radius for an accumulated weight.
    #[inline]
    pub fn radius_for(&self, accumulated: f64) -> f64 {
        (self.vmin + self.growth_per_activity * accumulated).max(self.vmin)
    }

    /// The step union: every step any event lands on, plus the baseline 0.
    pub fn step_union(events: &[ResolvedEvent]) -> Vec<u64> {
        let mut steps: Vec<u64> = events
            .iter()
            .map(|e| e.step_index)
            .chain(std::iter::once(0))
            .collect();
        steps.sort_unstable();
        steps.dedup();
        steps
    }

    /// Accumulate resolved events for `domain_count` domains.
    ///
    /// An event whose `domain_index` is out of range fails the whole call
    /// with [`NenrinError::UnknownDomain`].
    pub fn accumulate_events(
        &self,
        events: &[ResolvedEvent],
        domain_count: usize,
    ) -> NenrinResult<GrowthTable> {
        let steps = Self::step_union(events);

        // Per-domain sums per step, summed in input order.
        let mut step_sums: Vec<BTreeMap<u64, f64>> = vec![BTreeMap::new(); domain_count];
        for event in events {
            let sums = step_sums
                .get_mut(event.domain_index)
                .ok_or_else(|| NenrinError::UnknownDomain {
                    domain_id: event.domain_id.clone(),
                    step_index: i64::try_from(event.step_index).unwrap_or(i64::MAX),
                    input_index: event.input_index,
                })?;
            *sums.entry(event.step_index).or_insert(0.0) += event.weight;
        }

        let mut floored = 0usize;
        let mut radii = Vec::with_capacity(domain_count);
        for sums in &step_sums {
            let mut accumulated = 0.0;
            let mut row = Vec::with_capacity(steps.len());
            for step in &steps {
                if let Some(w) = sums.get(step) {
                    accumulated += w;
                }
                if self.vmin + self.growth_per_activity * accumulated < self.vmin {
                    floored += 1;
                }
                row.push(self.radius_for(accumulated));
            }
            radii.push(row);
        }

        if floored > 0 {
            debug!(floored, vmin = self.vmin, "radii floored at vmin");
        }
        debug!(steps = steps.len(), domains = domain_count, "growth accumulated");

        Ok(GrowthTable { steps, radii })
    }

    pub fn accumulate(&self, input: &ValidatedInput) -> NenrinResult<GrowthTable> {
        self.accumulate_events(input.events(), input.config().domains.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nenrin_types::{Domain, Event, NenrinInput};
    use std::f64::consts::PI;

    fn table(config: NenrinConfig, events: Vec<Event>) -> GrowthTable {
        let input = NenrinInput::new(config, events).validate().unwrap();
        GrowthAccumulator::from_config(input.config())
            .accumulate(&input)
            .unwrap()
    }

    fn two_domains() -> NenrinConfig {
        NenrinConfig::new(
            10.0,
            2.0,
            vec![Domain::new("a", "A", 0.0), Domain::new("b", "B", PI)],
        )
    }

    #[test]
    fn carry_forward_between_steps() {
        let t = table(
            two_domains(),
            vec![
                Event::new(0, "a").with_weight(1.0),
                Event::new(1, "b").with_weight(3.0),
            ],
        );
        assert_eq!(t.steps(), &[0, 1]);
        assert_eq!(t.domain_radii(0), Some(&[12.0, 12.0][..]));
        assert_eq!(t.domain_radii(1), Some(&[10.0, 16.0][..]));
    }

    #[test]
    fn missing_weight_counts_as_one() {
        let t = table(two_domains(), vec![Event::new(0, "a"), Event::new(0, "a")]);
        assert_eq!(t.radius_at(0, 0), Some(14.0));
    }

    #[test]
    fn step_zero_always_present() {
        let t = table(two_domains(), vec![Event::new(5, "a"), Event::new(2, "b")]);
        assert_eq!(t.steps(), &[0, 2, 5]);
        assert_eq!(t.radius_at(0, 0), Some(10.0));
        assert_eq!(t.radius_at(0, 2), Some(10.0));
        assert_eq!(t.radius_at(0, 5), Some(12.0));
        assert_eq!(t.radius_at(1, 5), Some(12.0));
        assert_eq!(t.radius_at(1, 3), None);
    }

    #[test]
    fn no_events_yields_baseline_only() {
        let t = table(two_domains(), vec![]);
        assert_eq!(t.steps(), &[0]);
        assert_eq!(t.domain_count(), 2);
        assert_eq!(t.radius(1, 0), Some(10.0));
    }

    #[test]
    fn negative_weights_floor_without_resetting_sum() {
        let config = two_domains().with_negative_weights();
        let t = table(
            config,
            vec![
                Event::new(1, "a").with_weight(-3.0),
                Event::new(2, "a").with_weight(2.0),
                Event::new(3, "a").with_weight(2.0),
            ],
        );
        // sums: 0, -3, -1, 1  → radii: 10, max(10, 4), max(10, 8), 12
        assert_eq!(t.domain_radii(0), Some(&[10.0, 10.0, 10.0, 12.0][..]));
    }

    #[test]
    fn zero_growth_keeps_vmin() {
        let mut config = two_domains();
        config.growth_per_activity = 0.0;
        let t = table(config, vec![Event::new(3, "a").with_weight(100.0)]);
        assert_eq!(t.radius_at(0, 3), Some(10.0));
    }

    #[test]
    fn out_of_order_events_accumulate_by_step() {
        let t = table(
            two_domains(),
            vec![
                Event::new(4, "a").with_weight(1.0),
                Event::new(1, "a").with_weight(2.0),
            ],
        );
        assert_eq!(t.steps(), &[0, 1, 4]);
        assert_eq!(t.domain_radii(0), Some(&[10.0, 14.0, 16.0][..]));
    }

    #[test]
    fn out_of_range_domain_index_is_an_error() {
        let config = NenrinConfig::new(1.0, 1.0, vec![Domain::new("a", "A", 0.0)]);
        let input = NenrinInput::new(config, vec![Event::new(2, "a").with_weight(5.0)])
            .validate()
            .unwrap();
        let mut events = input.events().to_vec();
        events[0].domain_index = 7;

        let err = GrowthAccumulator::from_config(input.config())
            .accumulate_events(&events, 1)
            .unwrap_err();
        assert_eq!(
            err,
            NenrinError::UnknownDomain {
                domain_id: "a".into(),
                step_index: 2,
                input_index: 0,
            }
        );
    }
}
