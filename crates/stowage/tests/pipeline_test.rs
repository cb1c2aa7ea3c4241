use std::path::PathBuf;
use stowage::render::present::{BufferPresenter, FilePresenter, Frame, FrameFormat, Presenter};
use stowage::render::raster::{RasterOptions, render_png_sync};
use stowage::render::{Camera, SvgRenderOptions, compose_scene_str, render_svg_str};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture(name: &str) -> String {
    let path = workspace_root().join("fixtures").join("placement").join(name);
    std::fs::read_to_string(&path).expect("fixture")
}

#[test]
fn pipeline_renders_basic_fixture_to_svg() {
    let text = fixture("basic.json");
    let svg = render_svg_str(&text, &Camera::default(), &SvgRenderOptions::default())
        .expect("render ok");
    assert!(svg.starts_with("<svg "));
    assert_eq!(svg.matches("<polygon").count(), 6);
    assert!(svg.contains("I1"));
    assert!(svg.contains("Food Pack"));
    assert!(svg.contains("3D Cargo Placement Visualization"));
}

#[test]
fn pipeline_tolerates_missing_item_names_and_flat_boxes() {
    let text = fixture("mixed.json");
    let scene = compose_scene_str(&text).expect("compose ok");
    assert_eq!(scene.boxes.len(), 3);
    assert_eq!(scene.boxes[2].label, "GHOST-7\n");
    // Duplicate I2 metadata: last entry wins.
    assert_eq!(scene.boxes[1].label, "I2\nWater Canister (refill)");

    let svg = render_svg_str(&text, &Camera::default(), &SvgRenderOptions::default())
        .expect("render ok");
    assert_eq!(svg.matches("<polygon").count(), 18);
}

#[test]
fn malformed_document_fails_at_the_parse_boundary() {
    let err = render_svg_str(
        r#"{"items": []}"#,
        &Camera::default(),
        &SvgRenderOptions::default(),
    );
    assert!(err.is_err());
}

#[test]
fn pipeline_renders_png_bytes() {
    let text = fixture("basic.json");
    let bytes = render_png_sync(
        &text,
        &Camera::default(),
        &SvgRenderOptions::default(),
        &RasterOptions::default(),
    )
    .expect("raster ok");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn buffer_presenter_captures_frames_in_memory() {
    let text = fixture("basic.json");
    let svg = render_svg_str(&text, &Camera::default(), &SvgRenderOptions::default())
        .expect("render ok");

    let mut presenter = BufferPresenter::new();
    presenter.present(Frame::svg(svg)).expect("present ok");

    let frame = presenter.last().expect("one frame");
    assert_eq!(frame.format, FrameFormat::Svg);
    assert!(!frame.bytes.is_empty());
}

#[test]
fn file_presenter_exports_to_disk() {
    let text = fixture("basic.json");
    let svg = render_svg_str(&text, &Camera::default(), &SvgRenderOptions::default())
        .expect("render ok");

    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("frame.svg");
    let mut presenter = FilePresenter::new(&out);
    presenter.present(Frame::svg(svg)).expect("present ok");

    let written = std::fs::read_to_string(&out).expect("read back");
    assert!(written.starts_with("<svg "));
}
