use assert_cmd::Command;
use std::fs;

mod common;

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("labelgen 0.3.1\n");
}

#[test]
fn missing_labels_dir_argument_fails() {
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.assert().failure();
}

#[test]
fn generates_default_output_file() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let labels_dir = temp.path().join("labels");
    common::write_annotation(
        &labels_dir.join("floor1.json"),
        800,
        600,
        &[("button", "rectangle", "[[10, 20], [50, 60]]")],
    );

    let out_file = temp.path().join("labels.py");
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg(&labels_dir).arg("-o").arg(&out_file);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Generated 1 label(s)"));

    let generated = fs::read_to_string(&out_file).expect("read generated module");
    assert!(generated.contains("BUTTON = Rectangle("));
    assert!(generated.contains("value=(10, 20, 41, 41)"));
}

#[test]
fn minimal_toggle_switches_dialect() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let labels_dir = temp.path().join("labels");
    common::write_annotation(
        &labels_dir.join("floor1.json"),
        800,
        600,
        &[("button", "rectangle", "[[10, 20], [50, 60]]")],
    );

    let out_file = temp.path().join("labels.py");
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg(&labels_dir).arg("-o").arg(&out_file).arg("--minimal");
    cmd.assert().success();

    let generated = fs::read_to_string(&out_file).expect("read generated module");
    assert!(generated.contains("button = (10, 20, 41, 41)\n"));
    assert!(generated.contains("\"button\": button,"));
    assert!(!generated.contains("dataclass"));
}

#[test]
fn dimension_filter_flags_exclude_files() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let labels_dir = temp.path().join("labels");
    common::write_annotation(
        &labels_dir.join("phone.json"),
        400,
        800,
        &[("icon", "point", "[[3, 4]]")],
    );
    common::write_annotation(
        &labels_dir.join("desktop.json"),
        1920,
        1080,
        &[("icon", "point", "[[30, 40]]")],
    );

    let out_file = temp.path().join("labels.py");
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg(&labels_dir)
        .arg("-o")
        .arg(&out_file)
        .args(["--width", "1920", "--height", "1080", "--minimal"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Generated 1 label(s)"));

    let generated = fs::read_to_string(&out_file).expect("read generated module");
    assert!(generated.contains("icon = (30, 40)\n"));
}

#[test]
fn malformed_annotation_file_fails_without_output() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let labels_dir = temp.path().join("labels");
    fs::create_dir_all(&labels_dir).unwrap();
    fs::write(labels_dir.join("broken.json"), "{not valid json").unwrap();

    let out_file = temp.path().join("labels.py");
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg(&labels_dir).arg("-o").arg(&out_file);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to parse annotation JSON"));

    assert!(!out_file.exists(), "no partial output on failure");
}

#[test]
fn polygon_fails_in_full_dialect_without_flag() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let labels_dir = temp.path().join("labels");
    common::write_annotation(
        &labels_dir.join("overlay.json"),
        800,
        600,
        &[("zone", "polygon", "[[0, 0], [10, 0], [10, 10]]")],
    );

    let out_file = temp.path().join("labels.py");
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg(&labels_dir).arg("-o").arg(&out_file);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("not implemented"));
}

#[test]
fn include_polygons_flag_admits_polygons() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let labels_dir = temp.path().join("labels");
    common::write_annotation(
        &labels_dir.join("overlay.json"),
        800,
        600,
        &[("zone", "polygon", "[[0, 0], [10, 0], [10, 10]]")],
    );

    let out_file = temp.path().join("labels.py");
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg(&labels_dir)
        .arg("-o")
        .arg(&out_file)
        .arg("--include-polygons");
    cmd.assert().success();

    let generated = fs::read_to_string(&out_file).expect("read generated module");
    assert!(generated.contains("ZONE = Polygon("));
}

#[test]
fn typed_map_mode_emits_literal_maps() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let labels_dir = temp.path().join("labels");
    common::write_annotation(
        &labels_dir.join("floor1.json"),
        800,
        600,
        &[
            ("button", "rectangle", "[[10, 20], [50, 60]]"),
            ("origin", "point", "[[5, 7]]"),
        ],
    );

    let out_file = temp.path().join("labels.py");
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg(&labels_dir)
        .arg("-o")
        .arg(&out_file)
        .args(["--mode", "typed-map"]);
    cmd.assert().success();

    let generated = fs::read_to_string(&out_file).expect("read generated module");
    assert!(generated.contains("RECT_NAME = Literal["));
    assert!(generated.contains("POINTS: Dict[POINT_NAME, Tuple[int, int]] = {"));
}

#[test]
fn nonexistent_directory_fails() {
    let mut cmd = Command::cargo_bin("labelgen").unwrap();
    cmd.arg("does/not/exist");
    cmd.assert().failure();
}
