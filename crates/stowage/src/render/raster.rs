#![forbid(unsafe_code)]

//! Pure-Rust rasterization of rendered scenes: SVG → PNG/JPG via
//! `usvg`/`resvg`/`tiny-skia` (`image` for JPG encoding). No display surface
//! or system toolkit is involved.

use crate::render::{Camera, HeadlessError, SvgRenderOptions};

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Headless(#[from] HeadlessError),
    #[error("failed to parse rendered SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("invalid background color for JPG rendering")]
    JpegBackground,
    #[error("JPG rendering requires an opaque background color (e.g. white)")]
    JpegOpaqueBackgroundRequired,
    #[error("failed to encode JPG")]
    JpegEncode,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    pub background: Option<String>,
    pub jpeg_quality: u8,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            jpeg_quality: 90,
        }
    }
}

/// Full synchronous pipeline: JSON text → PNG bytes.
pub fn render_png_sync(
    text: &str,
    camera: &Camera,
    svg_options: &SvgRenderOptions,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let svg = super::render_svg_str(text, camera, svg_options)?;
    svg_to_png(&svg, raster)
}

/// Full synchronous pipeline: JSON text → JPG bytes.
pub fn render_jpeg_sync(
    text: &str,
    camera: &Camera,
    svg_options: &SvgRenderOptions,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let svg = super::render_svg_str(text, camera, svg_options)?;
    svg_to_jpeg(&svg, raster)
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options.scale, options.background.as_deref())?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

pub fn svg_to_jpeg(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let bg = options.background.as_deref().unwrap_or("white");
    let Some(color) = parse_background_color(bg) else {
        return Err(RasterError::JpegBackground);
    };
    if color.alpha() != 1.0 {
        return Err(RasterError::JpegOpaqueBackgroundRequired);
    }

    let pixmap = svg_to_pixmap(svg, options.scale, Some(bg))?;
    let (w, h) = (pixmap.width(), pixmap.height());

    // The pixmap is RGBA8; with the solid background every alpha byte is 255,
    // so dropping the channel is lossless.
    let rgba = pixmap.data();
    let mut rgb = vec![0u8; (w as usize) * (h as usize) * 3];
    for (src, dst) in rgba.chunks_exact(4).zip(rgb.chunks_exact_mut(3)) {
        dst[..3].copy_from_slice(&src[..3]);
    }

    let mut out = Vec::new();
    let mut enc =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, options.jpeg_quality);
    enc.encode(&rgb, w, h, image::ExtendedColorType::Rgb8)
        .map_err(|_| RasterError::JpegEncode)?;
    Ok(out)
}

fn svg_to_pixmap(svg: &str, scale: f32, background: Option<&str>) -> Result<tiny_skia::Pixmap> {
    let mut opt = usvg::Options::default();
    // Label glyphs come from system fonts; selection may vary per host, which
    // only affects text shaping, not geometry.
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    // The scene renderer always emits a root viewBox, and usvg applies its
    // transform when building the tree, so the pixmap size follows directly
    // from the tree size.
    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;

    if let Some(bg) = background {
        if let Some(color) = parse_background_color(bg) {
            pixmap.fill(color);
        }
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

fn parse_background_color(text: &str) -> Option<tiny_skia::Color> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 0)),
        "white" => return Some(tiny_skia::Color::from_rgba8(255, 255, 255, 255)),
        "black" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 255)),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    let bytes = hex.as_bytes();
    let nibble = |c: u8| (c as char).to_digit(16).map(|v| v as u8);
    match bytes.len() {
        3 => {
            let mut ch = [0u8; 3];
            for (i, b) in bytes.iter().enumerate() {
                let v = nibble(*b)?;
                ch[i] = (v << 4) | v;
            }
            Some(tiny_skia::Color::from_rgba8(ch[0], ch[1], ch[2], 255))
        }
        6 => {
            let mut ch = [0u8; 3];
            for (i, pair) in bytes.chunks_exact(2).enumerate() {
                ch[i] = (nibble(pair[0])? << 4) | nibble(pair[1])?;
            }
            Some(tiny_skia::Color::from_rgba8(ch[0], ch[1], ch[2], 255))
        }
        _ => None,
    }
}
