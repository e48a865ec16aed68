//! Dot placement strategies.
//!
//! A strategy maps every resolved event to a polar point on the ridge
//! geometry of its step. Output partitioning (knots), padding and the
//! Cartesian conversion are applied afterwards by [`crate::place_dots`].

use std::collections::HashMap;
use std::sync::Arc;

use nenrin_types::{
    Dot, DomainId, NenrinError, NenrinResult, PolarAnchor, PolarPoint, Position, ResolvedEvent,
    Ridge, ValidatedInput,
};
use tracing::warn;

/// Name of the default placement strategy.
pub const DEFAULT_PLACEMENT: &str = "anchor";

/// Everything a placement strategy may look at.
#[derive(Clone, Debug)]
pub struct DotPlacementContext<'a> {
    pub events: &'a [ResolvedEvent],
    /// Ridges in ascending step order.
    pub ridges: &'a [Ridge],
    /// Domain ids in declaration order.
    pub domain_ids: Vec<DomainId>,
    /// Domain angles in declaration order.
    pub domain_angles_rad: Vec<f64>,
    pub vmin: f64,
}

impl<'a> DotPlacementContext<'a> {
    pub fn new(input: &'a ValidatedInput, ridges: &'a [Ridge]) -> Self {
        let config = input.config();
        Self {
            events: input.events(),
            ridges,
            domain_ids: config.domains.iter().map(|d| d.id.clone()).collect(),
            domain_angles_rad: config.domains.iter().map(|d| d.angle_rad).collect(),
            vmin: config.vmin,
        }
    }

    fn ridge_position(&self, step_index: u64) -> NenrinResult<usize> {
        self.ridges
            .binary_search_by_key(&step_index, |r| r.step_index)
            .map_err(|_| NenrinError::MissingRidge { step_index })
    }

    /// The ridge built for a step.
    pub fn ridge(&self, step_index: u64) -> NenrinResult<&'a Ridge> {
        let pos = self.ridge_position(step_index)?;
        Ok(&self.ridges[pos])
    }

    /// The ridge immediately before a step, if any.
    pub fn previous_ridge(&self, step_index: u64) -> NenrinResult<Option<&'a Ridge>> {
        let pos = self.ridge_position(step_index)?;
        Ok(pos.checked_sub(1).map(|p| &self.ridges[p]))
    }

    /// The anchor of an event's domain on the event's ridge.
    pub fn anchor(&self, event: &ResolvedEvent) -> NenrinResult<&'a PolarAnchor> {
        let ridge = self.ridge(event.step_index)?;
        ridge
            .anchor(&event.domain_id)
            .ok_or_else(|| NenrinError::MissingAnchor {
                domain_id: event.domain_id.clone(),
                step_index: event.step_index,
            })
    }
}

/// Hands out input-order indices per `(domain, step)`.
#[derive(Debug, Default)]
pub struct EventIndexer {
    next: HashMap<(usize, u64), usize>,
}

impl EventIndexer {
    pub fn next(&mut self, event: &ResolvedEvent) -> usize {
        let slot = self
            .next
            .entry((event.domain_index, event.step_index))
            .or_insert(0);
        let index = *slot;
        *slot += 1;
        index
    }
}

/// A named event-to-point placement.
pub trait DotPlacementAlgorithm: Send + Sync {
    fn name(&self) -> &str;

    /// One dot per event, in input order.
    fn build_dots(&self, ctx: &DotPlacementContext<'_>) -> NenrinResult<Vec<Dot>>;
}

fn place_each<F>(ctx: &DotPlacementContext<'_>, mut locate: F) -> NenrinResult<Vec<Dot>>
where
    F: FnMut(&ResolvedEvent) -> NenrinResult<PolarPoint>,
{
    let mut indexer = EventIndexer::default();
    let mut dots = Vec::with_capacity(ctx.events.len());
    for event in ctx.events {
        let point = locate(event)?;
        dots.push(Dot {
            step_index: event.step_index,
            domain_id: event.domain_id.clone(),
            event_index: indexer.next(event),
            position: Position::Polar(point),
        });
    }
    Ok(dots)
}

/// Places each event exactly on its domain's anchor.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorPlacement;

impl DotPlacementAlgorithm for AnchorPlacement {
    fn name(&self) -> &str {
        "anchor"
    }

    fn build_dots(&self, ctx: &DotPlacementContext<'_>) -> NenrinResult<Vec<Dot>> {
        place_each(ctx, |event| ctx.anchor(event).map(PolarAnchor::point))
    }
}

/// Places each event midway through the growth band of its step.
///
/// The band runs from the domain's radius on the previous ridge (`vmin`
/// for the first ridge) out to its radius on the event's ridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BandPlacement;

impl DotPlacementAlgorithm for BandPlacement {
    fn name(&self) -> &str {
        "band"
    }

    fn build_dots(&self, ctx: &DotPlacementContext<'_>) -> NenrinResult<Vec<Dot>> {
        place_each(ctx, |event| {
            let outer = ctx.anchor(event)?;
            let inner = match ctx.previous_ridge(event.step_index)? {
                Some(prev) => prev
                    .anchor(&event.domain_id)
                    .map(|a| a.r)
                    .unwrap_or(ctx.vmin),
                None => ctx.vmin,
            };
            Ok(PolarPoint::new(outer.theta_rad, 0.5 * (inner + outer.r)))
        })
    }
}

/// Placement strategies selectable by name.
pub struct PlacementRegistry {
    algorithms: HashMap<String, Arc<dyn DotPlacementAlgorithm>>,
}

impl PlacementRegistry {
    /// Registry holding the built-in strategies.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(AnchorPlacement));
        registry.register(Arc::new(BandPlacement));
        registry
    }

    pub fn empty() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    pub fn register(&mut self, algorithm: Arc<dyn DotPlacementAlgorithm>) {
        let name = algorithm.name().to_string();
        if self.algorithms.insert(name.clone(), algorithm).is_some() {
            warn!(name = %name, "replaced registered strategy");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn DotPlacementAlgorithm>> {
        self.algorithms.get(name).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.algorithms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for PlacementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
