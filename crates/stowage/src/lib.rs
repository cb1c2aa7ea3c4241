#![forbid(unsafe_code)]

//! `stowage` is a headless 3D cargo-placement visualizer.
//!
//! It consumes the JSON records produced by an external placement optimizer
//! (items + per-item bounding boxes inside containers) and renders one
//! labeled, translucent box per placement into an SVG scene. It never
//! computes placements itself and never validates the optimizer's geometric
//! guarantees.
//!
//! # Features
//!
//! - `render`: enable scene composition + SVG rendering (`stowage::render`)
//! - `raster`: enable PNG/JPG output via pure-Rust SVG rasterization

pub use stowage_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use stowage_render::{
        AxisLabels, BoxDescriptor, BoxGeometry, Camera, Quad, Scene, SvgRenderOptions,
        TOP_LABEL_OFFSET, compose_document, compose_scene, render_scene_svg,
    };

    pub mod present;

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Parse(#[from] stowage_core::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Parse + compose in one step; fails only at the document boundary.
    pub fn compose_scene_str(text: &str) -> Result<Scene> {
        let doc = stowage_core::parse_placement_document(text)?;
        Ok(compose_document(&doc))
    }

    /// Renders an already-parsed document. Infallible: composition and
    /// rendering are total over any structurally valid document.
    pub fn render_document_svg(
        doc: &stowage_core::PlacementDocument,
        camera: &Camera,
        svg_options: &SvgRenderOptions,
    ) -> String {
        render_scene_svg(&compose_document(doc), camera, svg_options)
    }

    /// Full synchronous pipeline: JSON text → SVG string.
    ///
    /// One call is one atomic render pass; there is no retained state between
    /// calls and no suspension point inside one.
    pub fn render_svg_str(
        text: &str,
        camera: &Camera,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let doc = stowage_core::parse_placement_document(text)?;
        Ok(render_document_svg(&doc, camera, svg_options))
    }
}
