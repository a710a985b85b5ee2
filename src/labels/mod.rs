//! Label collection: scanning annotation directories into typed shape sets.
//!
//! This module is the "front half" of labelgen. It turns a directory of
//! labeling-tool JSON files into a [`LabelSet`]: an insertion-ordered
//! mapping from `(kind, label)` to the shape that key resolved to, with
//! last-file-wins deduplication over a lexicographic scan.
//!
//! # Example
//!
//! ```no_run
//! use labelgen::labels::{self, DimensionFilter};
//! use std::path::Path;
//!
//! let set = labels::collect(Path::new("annotations"), &DimensionFilter::exact(800, 600))?;
//! let button = labels::rect(&set, "button")?;
//! println!("button at ({}, {}), {}x{}", button.x, button.y, button.w, button.h);
//! # Ok::<(), labelgen::LabelgenError>(())
//! ```

mod collect;
mod model;
mod query;

pub use collect::{
    collect, collect_with_reader, parse_annotation_slice, parse_annotation_str, DimensionFilter,
    FileReader, FsReader, LabelCache,
};
pub use model::{LabelKey, LabelSet, Rect, Shape, ShapeKind};
pub use query::{names_of_kind, point, polygon, rect, rect_relative};

pub(crate) use query::{expect_points, rect_of, truncate};
