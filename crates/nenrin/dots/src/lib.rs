//! # nenrin-dots
//!
//! Event markers on the ring geometry.
//!
//! Every input event becomes a [`Dot`](nenrin_types::Dot) located on the
//! ridge of its step. Events sharing a domain and step get distinct,
//! input-order `event_index` values and the same position; fanning them
//! out is left to the renderer. Events flagged as knots are additionally
//! copied into the `knots` output when requested.

#![deny(unsafe_code)]

pub mod build;
pub mod placement;

pub use build::{build_dots, build_dots_validated, place_dots};
pub use placement::{
    AnchorPlacement, BandPlacement, DotPlacementAlgorithm, DotPlacementContext, EventIndexer,
    PlacementRegistry, DEFAULT_PLACEMENT,
};
