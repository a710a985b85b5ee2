//! Canonical shape values and their Python literal renderings.
//!
//! Every dialect computes values through this one path, so a rectangle is
//! normalized identically whether it ends up in a dataclass record, a bare
//! assignment, or a typed map.

use crate::error::LabelgenError;
use crate::labels::{expect_points, rect_of, truncate, Rect, Shape, ShapeKind};

/// The canonical value derived from a shape's raw points.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeValue {
    /// `(x, y, w, h)`, normalized with the inclusive-pixel convention.
    Rect(Rect),
    /// `(x, y)`, truncated to integers.
    Point(i64, i64),
    /// Endpoints truncated to integers, in declaration order (not sorted).
    Line((i64, i64), (i64, i64)),
    /// Vertices truncated to integers, in declaration order.
    Polygon(Vec<(i64, i64)>),
}

impl ShapeValue {
    /// Computes the canonical value for `shape`.
    ///
    /// # Errors
    /// Returns [`LabelgenError::MalformedShape`] when the point count does
    /// not fit the shape's kind.
    pub fn from_shape(shape: &Shape) -> Result<Self, LabelgenError> {
        match shape.kind {
            ShapeKind::Rectangle => Ok(ShapeValue::Rect(rect_of(shape)?)),
            ShapeKind::Point => {
                let [p] = expect_points::<1>(shape, "exactly 1")?;
                let (x, y) = truncate(p);
                Ok(ShapeValue::Point(x, y))
            }
            ShapeKind::Line => {
                let [a, b] = expect_points::<2>(shape, "exactly 2")?;
                Ok(ShapeValue::Line(truncate(a), truncate(b)))
            }
            ShapeKind::Polygon => {
                if shape.points.len() < 3 {
                    return Err(LabelgenError::MalformedShape {
                        kind: shape.kind,
                        label: shape.label.clone(),
                        expected: "at least 3",
                        actual: shape.points.len(),
                    });
                }
                Ok(ShapeValue::Polygon(
                    shape.points.iter().copied().map(truncate).collect(),
                ))
            }
        }
    }

    /// Renders the value as a Python literal.
    pub fn py_literal(&self) -> String {
        match self {
            ShapeValue::Rect(r) => format!("({}, {}, {}, {})", r.x, r.y, r.w, r.h),
            ShapeValue::Point(x, y) => format!("({x}, {y})"),
            ShapeValue::Line(a, b) => {
                format!("(({}, {}), ({}, {}))", a.0, a.1, b.0, b.1)
            }
            ShapeValue::Polygon(vertices) => format!("[{}]", int_pairs(vertices)),
        }
    }

    /// The Python type annotation matching [`ShapeValue::py_literal`].
    pub fn py_type(kind: ShapeKind) -> &'static str {
        match kind {
            ShapeKind::Rectangle => "Tuple[int, int, int, int]",
            ShapeKind::Point => "Tuple[int, int]",
            ShapeKind::Line => "Tuple[Tuple[int, int], Tuple[int, int]]",
            ShapeKind::Polygon => "List[Tuple[int, int]]",
        }
    }
}

/// Renders raw points as a Python list of integer tuples, truncated.
pub(crate) fn py_int_points(points: &[(f64, f64)]) -> String {
    let truncated: Vec<(i64, i64)> = points.iter().copied().map(truncate).collect();
    format!("[{}]", int_pairs(&truncated))
}

/// Renders raw points as a Python list of float tuples, unmodified.
pub(crate) fn py_float_points(points: &[(f64, f64)]) -> String {
    let rendered: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("({}, {})", py_float(*x), py_float(*y)))
        .collect();
    format!("[{}]", rendered.join(", "))
}

// `{:?}` prints f64 with at least one decimal ("10.0", "10.5"), which is
// exactly the Python float literal form.
fn py_float(value: f64) -> String {
    format!("{value:?}")
}

fn int_pairs(pairs: &[(i64, i64)]) -> String {
    let rendered: Vec<String> = pairs
        .iter()
        .map(|(x, y)| format!("({x}, {y})"))
        .collect();
    rendered.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn shape(kind: ShapeKind, points: Vec<(f64, f64)>) -> Shape {
        Shape {
            kind,
            label: "x".to_string(),
            points,
            source_file: Path::new("a.json").to_path_buf(),
        }
    }

    #[test]
    fn rect_value_normalizes_and_renders() {
        let value =
            ShapeValue::from_shape(&shape(ShapeKind::Rectangle, vec![(50.0, 60.0), (10.0, 20.0)]))
                .unwrap();
        assert_eq!(value.py_literal(), "(10, 20, 41, 41)");
    }

    #[test]
    fn line_value_preserves_endpoint_order() {
        let value =
            ShapeValue::from_shape(&shape(ShapeKind::Line, vec![(9.9, 8.8), (1.1, 2.2)])).unwrap();
        assert_eq!(value, ShapeValue::Line((9, 8), (1, 2)));
        assert_eq!(value.py_literal(), "((9, 8), (1, 2))");
    }

    #[test]
    fn point_value_truncates() {
        let value = ShapeValue::from_shape(&shape(ShapeKind::Point, vec![(5.7, 7.2)])).unwrap();
        assert_eq!(value.py_literal(), "(5, 7)");
    }

    #[test]
    fn polygon_value_renders_vertex_list() {
        let value = ShapeValue::from_shape(&shape(
            ShapeKind::Polygon,
            vec![(0.0, 0.0), (4.5, 0.0), (4.5, 3.9)],
        ))
        .unwrap();
        assert_eq!(value.py_literal(), "[(0, 0), (4, 0), (4, 3)]");
    }

    #[test]
    fn wrong_point_count_is_malformed() {
        let err = ShapeValue::from_shape(&shape(ShapeKind::Line, vec![(0.0, 0.0)])).unwrap_err();
        assert!(matches!(err, LabelgenError::MalformedShape { .. }));
        let err =
            ShapeValue::from_shape(&shape(ShapeKind::Polygon, vec![(0.0, 0.0), (1.0, 1.0)]))
                .unwrap_err();
        assert!(matches!(err, LabelgenError::MalformedShape { .. }));
    }

    #[test]
    fn float_points_render_as_python_floats() {
        assert_eq!(
            py_float_points(&[(10.0, 20.0), (50.5, 60.25)]),
            "[(10.0, 20.0), (50.5, 60.25)]"
        );
    }

    #[test]
    fn int_points_render_truncated() {
        assert_eq!(py_int_points(&[(10.9, 20.1)]), "[(10, 20)]");
    }
}
