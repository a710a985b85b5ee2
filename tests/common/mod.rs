use std::fs;
use std::path::Path;

/// Writes a labeling-tool style annotation file with the given shapes.
///
/// `shapes` is a list of `(label, shape_type, points_json)` triples, e.g.
/// `("button", "rectangle", "[[10, 20], [50, 60]]")`.
pub fn write_annotation(path: &Path, width: u32, height: u32, shapes: &[(&str, &str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    let shapes_json: Vec<String> = shapes
        .iter()
        .map(|(label, kind, points)| {
            format!(r#"{{"label": "{label}", "shape_type": "{kind}", "points": {points}}}"#)
        })
        .collect();
    let body = format!(
        r#"{{"version": "5.2.1", "imageWidth": {width}, "imageHeight": {height}, "imagePath": "ref.png", "shapes": [{}]}}"#,
        shapes_json.join(", ")
    );
    fs::write(path, body).expect("write annotation file");
}
