//! Core data model for collected annotation labels.
//!
//! This module defines the in-memory representation of annotated shapes and
//! the insertion-ordered, deduplicated set they are collected into. The
//! collector parses into these types, and the code generator renders from
//! them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// The kind of an annotated shape.
///
/// Annotation files spell these lowercase in their `shape_type` field.
/// Any other value is rejected at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Point,
    Line,
    Polygon,
}

impl ShapeKind {
    /// The lowercase name used in annotation files and generated `type` fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// The title-case Python class name used by the full dialect.
    pub fn class_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Point => "Point",
            ShapeKind::Line => "Line",
            ShapeKind::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One annotated region extracted from one annotation file.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// The kind of the shape.
    pub kind: ShapeKind,

    /// User-assigned name; unique per kind after collection, but not globally.
    pub label: String,

    /// Ordered raw coordinates as declared in the file. Count depends on
    /// `kind`: 2 for rectangle/line, 1 for point, 3 or more for polygon.
    pub points: Vec<(f64, f64)>,

    /// Path of the annotation file that declared this shape.
    pub source_file: PathBuf,
}

/// An axis-aligned rectangle as `(x, y, w, h)` integer pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    /// Normalizes two corner points into `(min_x, min_y, w, h)`.
    ///
    /// Width and height use an inclusive-pixel convention: a rectangle
    /// spanning columns 10..=50 is 41 pixels wide, hence the `+ 1`. Both
    /// are always at least 1 for distinct corners. Coordinates are
    /// truncated toward zero, matching the labeling tool's semantics.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        let small_x = a.0.min(b.0);
        let small_y = a.1.min(b.1);
        let big_x = a.0.max(b.0);
        let big_y = a.1.max(b.1);
        Rect {
            x: small_x as i64,
            y: small_y as i64,
            w: (big_x - small_x + 1.0) as i64,
            h: (big_y - small_y + 1.0) as i64,
        }
    }

    /// This rectangle's position relative to `parent`'s top-left corner,
    /// width and height unchanged.
    pub fn relative_to(&self, parent: &Rect) -> Rect {
        Rect {
            x: self.x - parent.x,
            y: self.y - parent.y,
            w: self.w,
            h: self.h,
        }
    }
}

/// Lookup key for a collected shape: kind plus label text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabelKey {
    pub kind: ShapeKind,
    pub label: String,
}

impl LabelKey {
    pub fn new(kind: ShapeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}

/// An insertion-ordered set of shapes, deduplicated per `(kind, label)`.
///
/// Inserting a shape whose key is already present replaces the stored shape
/// in place, keeping the original insertion position. Iteration yields
/// shapes in first-insertion order, which makes generated output
/// reproducible for a fixed scan order.
#[derive(Clone, Debug, Default)]
pub struct LabelSet {
    shapes: Vec<Shape>,
    index: HashMap<LabelKey, usize>,
}

impl LabelSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a shape, returning the shape it replaced, if any.
    pub fn insert(&mut self, shape: Shape) -> Option<Shape> {
        let key = LabelKey::new(shape.kind, shape.label.clone());
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.shapes[slot], shape)),
            None => {
                self.index.insert(key, self.shapes.len());
                self.shapes.push(shape);
                None
            }
        }
    }

    /// Looks up the shape stored under `(kind, label)`.
    pub fn get(&self, kind: ShapeKind, label: &str) -> Option<&Shape> {
        let key = LabelKey::new(kind, label);
        self.index.get(&key).map(|&slot| &self.shapes[slot])
    }

    /// Iterates shapes in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
