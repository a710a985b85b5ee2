//! Dialect-specific text emission.
//!
//! All dialects consume the same pre-computed [`Entry`] list (shape plus
//! canonical value, in collection order), so they differ only in textual
//! shape, never in value computation.

use std::path::Path;

use super::names::{NameAllocator, NameCase};
use super::value::{py_float_points, py_int_points, ShapeValue};
use super::{Entry, GenerateOptions};
use crate::labels::ShapeKind;

const KIND_ORDER: [ShapeKind; 4] = [
    ShapeKind::Rectangle,
    ShapeKind::Point,
    ShapeKind::Line,
    ShapeKind::Polygon,
];

// ============================================================================
// Full dialect: dataclass records
// ============================================================================

pub(crate) fn full(entries: &[Entry<'_>], options: &GenerateOptions) -> String {
    let mut out = String::from("from dataclasses import dataclass\n\n\n");
    out.push_str(
        "@dataclass\nclass Label:\n    name: str\n    file_name: str\n    type: str\n    points: list[tuple[int, int]]\n\n\n",
    );
    for kind in KIND_ORDER {
        if options.supports(kind) {
            out.push_str(&format!(
                "@dataclass\nclass {}(Label):\n    value: {}\n\n\n",
                kind.class_name(),
                builtin_value_type(kind)
            ));
        }
    }

    let mut allocator = NameAllocator::new(options.collision, NameCase::Upper);
    let mut all_names = Vec::with_capacity(entries.len());
    for entry in entries {
        let var = allocator.allocate(entry.shape.kind, &entry.shape.label);
        out.push_str(&format!(
            "{var} = {cls}(\n    name=\"{name}\",\n    file_name=\"{file}\",\n    type=\"{kind}\",\n    points={points},\n    value={value},\n)\n",
            cls = entry.shape.kind.class_name(),
            name = entry.shape.label,
            file = file_name_of(entry),
            kind = entry.shape.kind,
            points = py_int_points(&entry.shape.points),
            value = entry.value.py_literal(),
        ));
        all_names.push(var);
    }

    out.push('\n');
    out.push_str(&block(
        "ALL_LABELS = [",
        "]",
        all_names.iter().map(|name| format!("    {name},")),
    ));
    out
}

// Python builtin generics for the dataclass value fields; the typed-map
// dialects use typing-module spellings instead.
fn builtin_value_type(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "tuple[int, int, int, int]",
        ShapeKind::Point => "tuple[int, int]",
        ShapeKind::Line => "tuple[tuple[int, int], tuple[int, int]]",
        ShapeKind::Polygon => "list[tuple[int, int]]",
    }
}

// ============================================================================
// Minimal dialect: bare assignments
// ============================================================================

pub(crate) fn minimal(entries: &[Entry<'_>], options: &GenerateOptions) -> String {
    let mut allocator = NameAllocator::new(options.collision, NameCase::Lower);
    let mut out = String::new();
    let mut mapping = Vec::with_capacity(entries.len());
    for entry in entries {
        let var = allocator.allocate(entry.shape.kind, &entry.shape.label);
        out.push_str(&format!("{var} = {}\n", entry.value.py_literal()));
        mapping.push(format!("    \"{}\": {var},", entry.shape.label));
    }

    if !entries.is_empty() {
        out.push('\n');
    }
    out.push_str(&block("LABELS = {", "}", mapping.into_iter()));
    out
}

// ============================================================================
// Typed-map dialects: per-kind Literal-keyed mappings
// ============================================================================

pub(crate) fn typed_map(entries: &[Entry<'_>], with_source: bool, input_dir: &Path) -> String {
    let has_polygons = entries.iter().any(|e| e.shape.kind == ShapeKind::Polygon);
    let mut out = if with_source || has_polygons {
        String::from("from typing import Dict, List, Literal, Tuple\n")
    } else {
        String::from("from typing import Dict, Literal, Tuple\n")
    };

    for kind in KIND_ORDER {
        let section: Vec<&Entry<'_>> =
            entries.iter().filter(|e| e.shape.kind == kind).collect();
        if section.is_empty() {
            continue;
        }
        let (literal_name, map_name) = section_names(kind);

        out.push('\n');
        out.push_str(&block(
            &format!("{literal_name} = Literal["),
            "]",
            section
                .iter()
                .map(|entry| format!("    \"{}\",", entry.shape.label)),
        ));
        out.push('\n');
        out.push_str(&block(
            &format!(
                "{map_name}: Dict[{literal_name}, {}] = {{",
                ShapeValue::py_type(kind)
            ),
            "}",
            section.iter().map(|entry| {
                format!(
                    "    \"{}\": {},",
                    entry.shape.label,
                    entry.value.py_literal()
                )
            }),
        ));
    }

    if with_source {
        out.push('\n');
        out.push_str(&block(
            "LABELS: Dict[str, Tuple[str, List[Tuple[float, float]], str]] = {",
            "}",
            entries.iter().map(|entry| {
                format!(
                    "    \"{}\": (\"{}\", {}, \"{}\"),",
                    entry.shape.label,
                    source_ref(&entry.shape.source_file, input_dir),
                    py_float_points(&entry.shape.points),
                    entry.shape.kind,
                )
            }),
        ));
    }
    out
}

fn section_names(kind: ShapeKind) -> (&'static str, &'static str) {
    match kind {
        ShapeKind::Rectangle => ("RECT_NAME", "RECTS"),
        ShapeKind::Point => ("POINT_NAME", "POINTS"),
        ShapeKind::Line => ("LINE_NAME", "LINES"),
        ShapeKind::Polygon => ("POLY_NAME", "POLYS"),
    }
}

/// Source path expressed relative to the third ancestor of the input
/// directory, so generated modules stay valid when the repository root
/// moves. Falls back to the path as written when it is not under that
/// ancestor.
fn source_ref(source_file: &Path, input_dir: &Path) -> String {
    let anchored = input_dir
        .ancestors()
        .nth(3)
        .and_then(|anchor| source_file.strip_prefix(anchor).ok())
        .unwrap_or(source_file);
    // forward slashes regardless of host, these land in Python source
    anchored
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Renders `open` + one line per item + `close`, collapsing to a single
/// empty literal (`[]`, `{}`) when there are no items.
fn block(open: &str, close: &str, items: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = items.collect();
    if lines.is_empty() {
        return format!("{open}{close}\n");
    }
    format!("{open}\n{}\n{close}\n", lines.join("\n"))
}

fn file_name_of(entry: &Entry<'_>) -> String {
    entry
        .shape
        .source_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry.shape.source_file.display().to_string())
}
