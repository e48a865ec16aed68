//! Ridge construction: one angle-ordered ring of anchors per step.

use std::cmp::Ordering;

use nenrin_types::{
    DomainId, NenrinConfig, NenrinError, NenrinResult, PolarAnchor, Ridge, ValidatedInput,
};
use tracing::debug;

use crate::growth::{GrowthAccumulator, GrowthTable};

/// Assembles [`Ridge`]s from a [`GrowthTable`].
///
/// The anchor order is fixed once per config: ascending `angle_rad`, ties
/// kept in declaration order. `-0.0` and `0.0` are a tie.
#[derive(Clone, Debug, PartialEq)]
pub struct RidgeBuilder {
    /// Domain declaration indices in anchor order.
    order: Vec<usize>,
    /// Domain ids and angles in declaration order.
    domains: Vec<(DomainId, f64)>,
}

impl RidgeBuilder {
    pub fn new(config: &NenrinConfig) -> Self {
        let domains: Vec<(DomainId, f64)> = config
            .domains
            .iter()
            .map(|d| (d.id.clone(), d.angle_rad))
            .collect();
        let mut order: Vec<usize> = (0..domains.len()).collect();
        // stable sort keeps declaration order for equal angles
        order.sort_by(|&a, &b| {
            domains[a]
                .1
                .partial_cmp(&domains[b].1)
                .unwrap_or(Ordering::Equal)
        });
        Self { order, domains }
    }

    pub fn angle_order(&self) -> &[usize] {
        &self.order
    }

    /// The ridge at one materialized step of the table.
    ///
    /// Every configured domain must have a radius at that step.
    pub fn build_step(&self, table: &GrowthTable, step_index: u64) -> NenrinResult<Ridge> {
        if table.steps().binary_search(&step_index).is_err() {
            return Err(NenrinError::MissingRidge { step_index });
        }
        let mut anchors = Vec::with_capacity(self.order.len());
        for &d in &self.order {
            let (domain_id, theta_rad) = &self.domains[d];
            let r = table
                .radius_at(d, step_index)
                .ok_or_else(|| NenrinError::MissingAnchor {
                    domain_id: domain_id.clone(),
                    step_index,
                })?;
            anchors.push(PolarAnchor {
                domain_id: domain_id.clone(),
                theta_rad: *theta_rad,
                r,
            });
        }
        Ok(Ridge {
            step_index,
            anchors,
        })
    }

    /// One ridge per materialized step, in step order.
    pub fn build(&self, table: &GrowthTable) -> NenrinResult<Vec<Ridge>> {
        table
            .steps()
            .iter()
            .map(|&step| self.build_step(table, step))
            .collect()
    }
}

/// Accumulate growth and build every ridge for a validated input.
pub fn build_ridges(input: &ValidatedInput) -> NenrinResult<Vec<Ridge>> {
    let config = input.config();
    let table = GrowthAccumulator::from_config(config).accumulate(input)?;
    let ridges = RidgeBuilder::new(config).build(&table)?;
    debug!(ridges = ridges.len(), anchors = config.domains.len(), "ridges built");
    Ok(ridges)
}
