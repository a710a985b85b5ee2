//! Annotation-file scanning and label collection.
//!
//! The collector reads every `*.json` annotation file in a directory, in
//! lexicographic file-name order, and folds the declared shapes into a
//! [`LabelSet`] deduplicated per `(kind, label)`. When several files declare
//! the same key, the file scanned last wins. The scan order is explicit
//! rather than whatever the OS happens to return, so the winner (and with it
//! the generated output) is reproducible across machines.
//!
//! Collection is a fresh scan by default. Callers that look labels up
//! repeatedly can hold a [`LabelCache`] and opt in to memoization.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use super::model::{LabelSet, Shape, ShapeKind};
use crate::error::LabelgenError;

// ============================================================================
// Annotation file schema (internal)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotationFile {
    image_width: u32,
    image_height: u32,
    shapes: Vec<AnnotationShape>,
}

// `shape_type` stays snake_case inside an otherwise camelCase file; that is
// how the labeling tool writes it.
#[derive(Debug, Deserialize)]
struct AnnotationShape {
    label: String,
    shape_type: ShapeKind,
    points: Vec<(f64, f64)>,
}

// ============================================================================
// Filters and filesystem seam
// ============================================================================

/// Optional exact-match filter on the image dimensions declared by each
/// annotation file. A file is accepted when every present bound matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DimensionFilter {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl DimensionFilter {
    /// A filter that accepts every file.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// A filter requiring both dimensions to match exactly.
    pub fn exact(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Whether a file declaring `width` x `height` passes this filter.
    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width.is_none_or(|w| w == width) && self.height.is_none_or(|h| h == height)
    }
}

/// Filesystem seam for the collector.
///
/// Production code uses [`FsReader`]; tests substitute stubs that serve
/// in-memory files and count reads.
pub trait FileReader {
    /// Lists the annotation files directly inside `dir`, sorted
    /// lexicographically by file name. Implementations must honor the sort:
    /// last-file-wins deduplication depends on it.
    fn list_annotation_files(&self, dir: &Path) -> Result<Vec<PathBuf>, LabelgenError>;

    /// Reads one annotation file to a string.
    fn read_to_string(&self, path: &Path) -> Result<String, LabelgenError>;
}

/// The production [`FileReader`] backed by the real filesystem.
pub struct FsReader;

impl FileReader for FsReader {
    fn list_annotation_files(&self, dir: &Path) -> Result<Vec<PathBuf>, LabelgenError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| {
                LabelgenError::Io(
                    err.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
                )
            })?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().is_some_and(|ext| ext == "json")
            {
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, LabelgenError> {
        fs::read_to_string(path).map_err(LabelgenError::Io)
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Scans `dir` and collects all shapes passing `filter` into a [`LabelSet`].
///
/// # Errors
/// Fails on the first unreadable or malformed annotation file; no partial
/// result is returned.
pub fn collect(dir: &Path, filter: &DimensionFilter) -> Result<LabelSet, LabelgenError> {
    collect_with_reader(dir, filter, &FsReader)
}

/// Like [`collect`], but reading through an explicit [`FileReader`].
pub fn collect_with_reader(
    dir: &Path,
    filter: &DimensionFilter,
    reader: &dyn FileReader,
) -> Result<LabelSet, LabelgenError> {
    let mut set = LabelSet::new();
    for path in reader.list_annotation_files(dir)? {
        let contents = reader.read_to_string(&path)?;
        let file = parse_file(&contents, &path)?;
        if !filter.matches(file.image_width, file.image_height) {
            continue;
        }
        for shape in file.shapes {
            set.insert(Shape {
                kind: shape.shape_type,
                label: shape.label,
                points: shape.points,
                source_file: path.clone(),
            });
        }
    }
    Ok(set)
}

/// Parses a single annotation document from a string, returning its shapes.
///
/// Useful for testing and benchmarking without file I/O. The shapes carry
/// `<string>` as their source file.
pub fn parse_annotation_str(json: &str) -> Result<Vec<Shape>, LabelgenError> {
    let path = Path::new("<string>");
    let file = parse_file(json, path)?;
    Ok(shapes_of(file, path))
}

/// Parses a single annotation document from bytes, returning its shapes.
pub fn parse_annotation_slice(bytes: &[u8]) -> Result<Vec<Shape>, LabelgenError> {
    let path = Path::new("<bytes>");
    let file: AnnotationFile =
        serde_json::from_slice(bytes).map_err(|source| LabelgenError::AnnotationParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(shapes_of(file, path))
}

fn parse_file(json: &str, path: &Path) -> Result<AnnotationFile, LabelgenError> {
    serde_json::from_str(json).map_err(|source| LabelgenError::AnnotationParse {
        path: path.to_path_buf(),
        source,
    })
}

fn shapes_of(file: AnnotationFile, path: &Path) -> Vec<Shape> {
    file.shapes
        .into_iter()
        .map(|shape| Shape {
            kind: shape.shape_type,
            label: shape.label,
            points: shape.points,
            source_file: path.to_path_buf(),
        })
        .collect()
}

// ============================================================================
// Opt-in memoization
// ============================================================================

/// Caller-owned memoization of collected label sets.
///
/// Keyed by `(directory, width, height)` by value equality. Entries are
/// never invalidated: a cache held across changes to the underlying
/// directory serves stale results. Callers that need fresh data drop the
/// cache (or call [`collect`] directly).
#[derive(Debug, Default)]
pub struct LabelCache {
    entries: HashMap<(PathBuf, Option<u32>, Option<u32>), LabelSet>,
}

impl LabelCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached set for `(dir, filter)`, collecting it on first use.
    pub fn get_or_collect(
        &mut self,
        dir: &Path,
        filter: &DimensionFilter,
    ) -> Result<&LabelSet, LabelgenError> {
        self.get_or_collect_with(dir, filter, &FsReader)
    }

    /// Like [`LabelCache::get_or_collect`], reading through an explicit
    /// [`FileReader`] on a cache miss.
    pub fn get_or_collect_with(
        &mut self,
        dir: &Path,
        filter: &DimensionFilter,
        reader: &dyn FileReader,
    ) -> Result<&LabelSet, LabelgenError> {
        let key = (dir.to_path_buf(), filter.width, filter.height);
        if !self.entries.contains_key(&key) {
            let set = collect_with_reader(dir, filter, reader)?;
            self.entries.insert(key.clone(), set);
        }
        Ok(&self.entries[&key])
    }

    /// Number of cached `(directory, filter)` entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
