//! # nenrin-types
//!
//! Data model for tree-ring diagrams.
//!
//! Each domain owns a fixed angle around a circle. Events recorded for a
//! domain grow its radius step by step, and every step yields one closed
//! ring (a [`Ridge`]) through the per-domain radii. This crate holds the
//! types shared by the geometry and dot placement crates:
//!
//! - **Input**: [`NenrinConfig`], [`Domain`], [`Event`], [`NenrinInput`]
//! - **Validation**: [`NenrinInput::validate`] producing a [`ValidatedInput`]
//! - **Geometry**: [`PolarAnchor`], [`Ridge`], polylines and points
//! - **Dots**: [`Dot`], [`Knot`], [`DotsOutput`]
//! - **Errors**: [`NenrinError`], [`ConfigError`]

#![deny(unsafe_code)]

pub mod dots;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod validate;

pub use dots::{Dot, DotsOutput, Knot};
pub use error::{ConfigError, NenrinError, NenrinResult};
pub use geometry::{
    PolarAnchor, PolarPoint, Position, Ridge, RidgePolylinePolar, RidgePolylineXy, RidgesOutput,
    XyPoint,
};
pub use input::{Domain, DomainId, Event, NenrinConfig, NenrinInput};
pub use options::{DotsOptions, GeometryOptions, OutputFormat, SamplingContext};
pub use validate::{ResolvedEvent, ValidatedInput, DEFAULT_WEIGHT};
