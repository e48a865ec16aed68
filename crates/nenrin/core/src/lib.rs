//! # nenrin-core
//!
//! Tree-ring ("nenrin") diagrams from time-stepped, categorized events.
//!
//! Each domain owns a fixed angle around a circle. The radius at that angle
//! grows step by step with the weight of the domain's events, and every
//! step yields one closed ring through the per-domain radii, like the
//! growth rings of a tree. Events are marked as dots on those rings.
//!
//! ## Architecture
//!
//! ```text
//!   NenrinInput ──validate──► ValidatedInput
//!                                  │
//!                                  ▼
//!                      GrowthAccumulator → RidgeBuilder
//!                                  │ Ridge per step
//!                   ┌──────────────┴──────────────┐
//!                   ▼                             ▼
//!            CurveAlgorithm                DotPlacementAlgorithm
//!                   │                             │
//!                   ▼                             ▼
//!             RidgesOutput                    DotsOutput
//! ```
//!
//! ## Invariants
//!
//! - Every anchor radius is at least `vmin`.
//! - With non-negative weights a domain's radius never shrinks over steps.
//! - Every ridge has exactly one anchor per domain, sorted by angle.
//! - Sampled curves pass through every anchor exactly and close without
//!   a seam.
//! - Validation happens before any geometry; no partial output is returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use nenrin_core::{Domain, Event, NenrinConfig, NenrinInput, NenrinPipeline, PipelineOptions};
//! use nenrin_core::OutputFormat;
//!
//! let config = NenrinConfig::new(
//!     10.0,
//!     2.0,
//!     vec![Domain::new("a", "A", 0.0), Domain::new("b", "B", std::f64::consts::PI)],
//! );
//! let input = NenrinInput::new(
//!     config,
//!     vec![Event::new(0, "a").with_weight(1.0), Event::new(1, "b").with_weight(3.0)],
//! );
//!
//! let pipeline = NenrinPipeline::new(PipelineOptions::default().with_output(OutputFormat::Xy));
//! let out = pipeline.render(&input).unwrap();
//! assert_eq!(out.ridges.len(), 2);
//! assert_eq!(out.dots.dots.len(), 2);
//! ```

#![deny(unsafe_code)]

pub mod options;
pub mod pipeline;

pub use options::PipelineOptions;
pub use pipeline::{NenrinOutput, NenrinPipeline};

pub use nenrin_dots::{
    build_dots, build_dots_validated, place_dots, AnchorPlacement, BandPlacement,
    DotPlacementAlgorithm, DotPlacementContext, PlacementRegistry,
};
pub use nenrin_geometry::{
    build_ridge_polylines, build_ridge_polylines_validated, build_ridges, polar_to_xy,
    ridge_polylines, xy_to_polar, CatmullRomCurve, CurveAlgorithm, CurveRegistry,
    GrowthAccumulator, GrowthTable, LinearCurve, RidgeBuilder,
};
pub use nenrin_types::{
    ConfigError, Domain, DomainId, Dot, DotsOptions, DotsOutput, Event, GeometryOptions, Knot,
    NenrinConfig, NenrinError, NenrinInput, NenrinResult, OutputFormat, PolarAnchor, PolarPoint,
    Position, ResolvedEvent, Ridge, RidgePolylinePolar, RidgePolylineXy, RidgesOutput,
    SamplingContext, ValidatedInput, XyPoint,
};
