//! SVG renderer: draws a composed [`Scene`] through a [`Camera`] into a
//! self-contained SVG string.
//!
//! One synchronous pass per call. Boxes are drawn in scene order (painter
//! order); every box draws its six translucent faces and its centroid label,
//! and all floating top labels are emitted in a trailing group so they stay
//! visible over every box fill.

use crate::camera::{Camera, ProjectedPoint};
use crate::geometry::Quad;
use crate::scene::Scene;
use std::fmt::Write as _;
use stowage_core::geom::{Point3, point3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds extra space around the computed viewBox.
    pub viewbox_padding: f64,
    /// Uniform container-unit → SVG-user-unit scale.
    pub scale: f64,
    /// Face fill color.
    pub fill: String,
    /// Face fill opacity; faces are translucent so occluded boxes stay legible.
    pub fill_opacity: f64,
    /// Face edge color.
    pub stroke: String,
    /// Font size for the in-box centroid label.
    pub centroid_font_size: f64,
    /// Font size for the floating top label.
    pub top_font_size: f64,
    /// When true, draw the three container axes with their labels.
    pub show_axes: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 8.0,
            scale: 10.0,
            fill: "skyblue".to_string(),
            fill_opacity: 0.5,
            stroke: "black".to_string(),
            centroid_font_size: 8.0,
            top_font_size: 9.0,
            show_axes: true,
        }
    }
}

/// Height of the title band reserved above the scene content.
const TITLE_BAND: f64 = 24.0;
/// Overshoot factor that pushes axis labels past their axis endpoints.
const AXIS_LABEL_OVERSHOOT: f64 = 1.08;

pub fn render_scene_svg(scene: &Scene, camera: &Camera, options: &SvgRenderOptions) -> String {
    let scale = if options.scale.is_finite() && options.scale > 0.0 {
        options.scale
    } else {
        1.0
    };
    let proj = |p: Point3| -> (f64, f64) {
        let ProjectedPoint { x, y } = camera.project(p);
        (x * scale, y * scale)
    };

    // Axis extents cover every box corner so the axes always frame the scene.
    let (mut ext_x, mut ext_y, mut ext_z) = (1.0f64, 1.0f64, 1.0f64);
    for b in &scene.boxes {
        for quad in &b.geometry.faces {
            for p in &quad.points {
                ext_x = ext_x.max(p.x);
                ext_y = ext_y.max(p.y);
                ext_z = ext_z.max(p.z);
            }
        }
    }

    let axes = [
        (point3(ext_x, 0.0, 0.0), &scene.axis_labels.x),
        (point3(0.0, ext_y, 0.0), &scene.axis_labels.y),
        (point3(0.0, 0.0, ext_z), &scene.axis_labels.z),
    ];

    let mut bound_points: Vec<(f64, f64)> = Vec::new();
    for b in &scene.boxes {
        for quad in &b.geometry.faces {
            for p in &quad.points {
                bound_points.push(proj(*p));
            }
        }
        bound_points.push(proj(b.geometry.centroid));
        bound_points.push(proj(b.geometry.top_label_anchor));
    }
    if options.show_axes {
        bound_points.push(proj(point3(0.0, 0.0, 0.0)));
        for (end, _) in &axes {
            bound_points.push(proj(*end));
            bound_points.push(proj(*end * AXIS_LABEL_OVERSHOOT));
        }
    }

    let bounds = Bounds::from_points(bound_points).unwrap_or(Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 100.0,
        max_y: 100.0,
    });
    let pad = options.viewbox_padding.max(0.0);
    let vb_min_x = bounds.min_x - pad;
    let vb_min_y = bounds.min_y - pad - TITLE_BAND;
    let vb_w = (bounds.max_x - bounds.min_x) + pad * 2.0;
    let vb_h = (bounds.max_y - bounds.min_y) + pad * 2.0 + TITLE_BAND;

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{} {} {w} {h}">"#,
        fmt(vb_min_x),
        fmt(vb_min_y),
        w = fmt(vb_w.max(1.0)),
        h = fmt(vb_h.max(1.0))
    );
    let _ = writeln!(
        &mut out,
        r#"<style>
.axis {{ stroke: #6b7280; stroke-width: 1; }}
.axis-label {{ fill: #374151; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 10px; text-anchor: middle; }}
.scene-title {{ fill: #111827; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 13px; text-anchor: middle; }}
.box-label {{ fill: black; font-family: ui-sans-serif, system-ui, sans-serif; font-size: {centroid}px; text-anchor: middle; }}
.top-label {{ fill: black; font-family: ui-sans-serif, system-ui, sans-serif; font-size: {top}px; text-anchor: middle; }}
</style>"#,
        centroid = fmt(options.centroid_font_size),
        top = fmt(options.top_font_size)
    );

    if options.show_axes {
        out.push_str(r#"<g class="axes">"#);
        let (ox, oy) = proj(point3(0.0, 0.0, 0.0));
        for (end, label) in &axes {
            let (ex, ey) = proj(*end);
            let _ = write!(
                &mut out,
                r#"<line class="axis" x1="{}" y1="{}" x2="{}" y2="{}" />"#,
                fmt(ox),
                fmt(oy),
                fmt(ex),
                fmt(ey)
            );
            let (lx, ly) = proj(*end * AXIS_LABEL_OVERSHOOT);
            let _ = write!(
                &mut out,
                r#"<text class="axis-label" x="{}" y="{}">{}</text>"#,
                fmt(lx),
                fmt(ly),
                escape_xml(label)
            );
        }
        out.push_str("</g>\n");
    }

    // Painter order: scene order is draw order, later boxes occlude earlier
    // ones exactly as the composer sequenced them.
    out.push_str(r#"<g class="boxes">"#);
    for b in &scene.boxes {
        out.push('\n');
        for quad in &b.geometry.faces {
            render_face(&mut out, quad, &proj, options);
        }
        let (cx, cy) = proj(b.geometry.centroid);
        render_label(&mut out, "box-label", cx, cy, options.centroid_font_size, &b.label);
    }
    out.push_str("\n</g>\n");

    // Top labels come last so they keep draw priority over every box fill.
    out.push_str(r#"<g class="top-labels">"#);
    for b in &scene.boxes {
        let (tx, ty) = proj(b.geometry.top_label_anchor);
        render_label(&mut out, "top-label", tx, ty, options.top_font_size, &b.label);
    }
    out.push_str("</g>\n");

    let _ = writeln!(
        &mut out,
        r#"<text class="scene-title" x="{}" y="{}">{}</text>"#,
        fmt(vb_min_x + vb_w.max(1.0) / 2.0),
        fmt(vb_min_y + 16.0),
        escape_xml(&scene.title)
    );

    out.push_str("</svg>\n");
    out
}

fn render_face(
    out: &mut String,
    quad: &Quad,
    proj: &impl Fn(Point3) -> (f64, f64),
    options: &SvgRenderOptions,
) {
    out.push_str(r#"<polygon points=""#);
    for (idx, p) in quad.points.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let (x, y) = proj(*p);
        let _ = write!(out, "{},{}", fmt(x), fmt(y));
    }
    let _ = write!(
        out,
        r#"" fill="{}" fill-opacity="{}" stroke="{}" />"#,
        escape_xml(&options.fill),
        fmt(options.fill_opacity),
        escape_xml(&options.stroke)
    );
}

fn render_label(out: &mut String, class: &str, x: f64, y: f64, font_size: f64, label: &str) {
    let _ = write!(
        out,
        r#"<text class="{}" x="{}" y="{}">"#,
        class,
        fmt(x),
        fmt(y)
    );
    for (idx, line) in label.split('\n').enumerate() {
        let _ = write!(
            out,
            r#"<tspan x="{}" dy="{}">{}</tspan>"#,
            fmt(x),
            fmt(if idx == 0 { 0.0 } else { font_size + 2.0 }),
            escape_xml(line)
        );
    }
    out.push_str("</text>");
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form, but without `-0` or tiny float noise from
    // our own projection math.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
