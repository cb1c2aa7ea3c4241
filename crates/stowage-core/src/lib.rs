#![forbid(unsafe_code)]

//! Cargo placement data model (headless).
//!
//! Design goals:
//! - bit-exact wire compatibility with the upstream placement optimizer
//!   (`startCoordinates`/`endCoordinates`, `width`/`depth`/`height`)
//! - deterministic, testable outputs
//! - no validation beyond structure: geometric invariants (non-overlap,
//!   in-container bounds) are the optimizer's contract, not ours

pub mod error;
pub mod geom;
pub mod model;

pub use error::{Error, Result};
pub use model::{
    BoundingBox, Coordinates, ItemMeta, Placement, PlacementDocument, parse_placement_document,
};
