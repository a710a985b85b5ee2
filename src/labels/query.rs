//! Convenience accessors over a collected [`LabelSet`].
//!
//! These are typed views onto individual labels: integer points, normalized
//! rectangles, polygons, and per-kind name listings. A missing key is a
//! [`LabelgenError::LabelNotFound`], never a default value.

use super::model::{LabelSet, Rect, Shape, ShapeKind};
use crate::error::LabelgenError;

/// Looks up point `label` and returns its coordinates truncated to integers.
pub fn point(set: &LabelSet, label: &str) -> Result<(i64, i64), LabelgenError> {
    let shape = lookup(set, ShapeKind::Point, label)?;
    let [p] = expect_points::<1>(shape, "exactly 1")?;
    Ok(truncate(p))
}

/// Looks up rectangle `label` and returns it as normalized `(x, y, w, h)`.
pub fn rect(set: &LabelSet, label: &str) -> Result<Rect, LabelgenError> {
    let shape = lookup(set, ShapeKind::Rectangle, label)?;
    rect_of(shape)
}

/// Rectangle `label` positioned relative to rectangle `parent`'s top-left
/// corner, width and height unchanged.
pub fn rect_relative(set: &LabelSet, label: &str, parent: &str) -> Result<Rect, LabelgenError> {
    let parent = rect(set, parent)?;
    let child = rect(set, label)?;
    Ok(child.relative_to(&parent))
}

/// Looks up polygon `label` and returns its vertices truncated to integers,
/// in declaration order.
pub fn polygon(set: &LabelSet, label: &str) -> Result<Vec<(i64, i64)>, LabelgenError> {
    let shape = lookup(set, ShapeKind::Polygon, label)?;
    if shape.points.len() < 3 {
        return Err(LabelgenError::MalformedShape {
            kind: shape.kind,
            label: shape.label.clone(),
            expected: "at least 3",
            actual: shape.points.len(),
        });
    }
    Ok(shape.points.iter().copied().map(truncate).collect())
}

/// Labels of the given kind whose source file's stem starts with `prefix`,
/// in set iteration order.
pub fn names_of_kind<'a>(set: &'a LabelSet, kind: ShapeKind, prefix: &str) -> Vec<&'a str> {
    set.iter()
        .filter(|shape| shape.kind == kind)
        .filter(|shape| {
            shape
                .source_file
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| stem.starts_with(prefix))
        })
        .map(|shape| shape.label.as_str())
        .collect()
}

pub(crate) fn lookup<'a>(
    set: &'a LabelSet,
    kind: ShapeKind,
    label: &str,
) -> Result<&'a Shape, LabelgenError> {
    set.get(kind, label).ok_or_else(|| LabelgenError::LabelNotFound {
        kind,
        label: label.to_string(),
    })
}

pub(crate) fn rect_of(shape: &Shape) -> Result<Rect, LabelgenError> {
    let [a, b] = expect_points::<2>(shape, "exactly 2")?;
    Ok(Rect::from_corners(a, b))
}

pub(crate) fn truncate(p: (f64, f64)) -> (i64, i64) {
    (p.0 as i64, p.1 as i64)
}

/// Checks the declared point count for a shape and returns the points as a
/// fixed-size array. A short point list is a reportable error, not a panic.
pub(crate) fn expect_points<const N: usize>(
    shape: &Shape,
    expected: &'static str,
) -> Result<[(f64, f64); N], LabelgenError> {
    <[(f64, f64); N]>::try_from(shape.points.as_slice()).map_err(|_| {
        LabelgenError::MalformedShape {
            kind: shape.kind,
            label: shape.label.clone(),
            expected,
            actual: shape.points.len(),
        }
    })
}
