//! # nenrin-geometry
//!
//! The ring geometry pipeline.
//!
//! ```text
//!   ValidatedInput
//!        │
//!        ▼
//!   GrowthAccumulator ──► GrowthTable (radius per domain per step)
//!        │
//!        ▼
//!   RidgeBuilder ──► Ridge per step (anchors sorted by angle)
//!        │
//!        ▼
//!   CurveAlgorithm ──► closed polar polyline per step
//!        │
//!        ▼ (output = xy)
//!   polar_to_xy
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use nenrin_geometry::{build_ridge_polylines, CatmullRomCurve};
//! use nenrin_types::{Domain, Event, GeometryOptions, NenrinConfig, NenrinInput, OutputFormat};
//!
//! let config = NenrinConfig::new(
//!     10.0,
//!     2.0,
//!     vec![Domain::new("a", "A", 0.0), Domain::new("b", "B", std::f64::consts::PI)],
//! );
//! let input = NenrinInput::new(config, vec![Event::new(0, "a"), Event::new(1, "b")]);
//!
//! let out = build_ridge_polylines(&input, &CatmullRomCurve, &GeometryOptions::new(OutputFormat::Xy))
//!     .unwrap();
//! assert_eq!(out.len(), 2);
//! ```

#![deny(unsafe_code)]

pub mod coords;
pub mod curve;
pub mod growth;
pub mod polyline;
pub mod ridge;

pub use coords::{polar_to_xy, xy_to_polar};
pub use curve::{CatmullRomCurve, CurveAlgorithm, CurveRegistry, LinearCurve, DEFAULT_CURVE};
pub use growth::{GrowthAccumulator, GrowthTable};
pub use polyline::{build_ridge_polylines, build_ridge_polylines_validated, ridge_polylines};
pub use ridge::{build_ridges, RidgeBuilder};
