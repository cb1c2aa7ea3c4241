#![forbid(unsafe_code)]

//! Headless scene composition + SVG rendering for cargo placements.
//!
//! The pipeline is a stateless, synchronous pass: placement records are
//! composed into a [`Scene`] of labeled boxes, each box is expanded into six
//! quads by the geometry builder, and the whole scene is projected and drawn
//! into a fresh SVG string per call. There is no retained frame and no global
//! drawing context; every call rebuilds everything from its inputs.

pub mod camera;
pub mod geometry;
pub mod scene;
pub mod svg;

pub use camera::{Camera, ProjectedPoint};
pub use geometry::{BoxGeometry, Quad, TOP_LABEL_OFFSET, build_box};
pub use scene::{AxisLabels, BoxDescriptor, Scene, compose_document, compose_scene};
pub use svg::{SvgRenderOptions, render_scene_svg};
