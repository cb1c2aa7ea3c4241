use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    repo_root().join("fixtures").join("placement").join(name)
}

#[test]
fn cli_renders_png_smoke() {
    let input = fixture("basic.json");
    assert!(input.exists(), "fixture missing: {}", input.display());

    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("out.png");

    let exe = assert_cmd::cargo_bin!("stowage-cli");
    Command::new(exe)
        .current_dir(repo_root())
        .args([
            "render",
            "--format",
            "png",
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );

    let decoder = png::Decoder::new(bytes.as_slice());
    let reader = decoder.read_info().expect("decode png header");
    let info = reader.info();
    assert!(info.width > 0 && info.height > 0);
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let tmp_input = tmp.path().join("basic.json");
    fs::copy(fixture("basic.json"), &tmp_input).expect("copy fixture");

    let expected_out = tmp_input.with_extension("png");

    let exe = assert_cmd::cargo_bin!("stowage-cli");
    Command::new(exe)
        .current_dir(repo_root())
        .args([
            "render",
            "--format",
            "png",
            tmp_input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&expected_out).expect("read default-out png");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn cli_prints_svg_to_stdout_by_default() {
    let exe = assert_cmd::cargo_bin!("stowage-cli");
    let assert = Command::new(exe)
        .current_dir(repo_root())
        .args(["render", fixture("basic.json").to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 svg");
    assert!(stdout.starts_with("<svg "));
    assert!(stdout.contains("Food Pack"));
    assert!(stdout.contains("3D Cargo Placement Visualization"));
}

#[test]
fn cli_scene_dumps_composed_json() {
    let exe = assert_cmd::cargo_bin!("stowage-cli");
    let assert = Command::new(exe)
        .current_dir(repo_root())
        .args(["scene", fixture("mixed.json").to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = assert.get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&stdout).expect("scene json");
    let boxes = value["boxes"].as_array().expect("boxes array");
    assert_eq!(boxes.len(), 3);
    assert_eq!(boxes[0]["item_id"], "I1");
    assert_eq!(boxes[2]["label"], "GHOST-7\n");
}

#[test]
fn cli_rejects_malformed_documents() {
    let exe = assert_cmd::cargo_bin!("stowage-cli");
    let tmp = tempfile::tempdir().expect("tempdir");
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, r#"{"items": []}"#).expect("write fixture");

    Command::new(exe)
        .current_dir(repo_root())
        .args(["scene", bad.to_string_lossy().as_ref()])
        .assert()
        .failure();
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("stowage-cli");
    Command::new(exe)
        .current_dir(repo_root())
        .args(["render", "--nope"])
        .assert()
        .code(2);
}
