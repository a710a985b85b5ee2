use std::path::PathBuf;
use thiserror::Error;

use crate::labels::ShapeKind;

/// The main error type for labelgen operations.
#[derive(Debug, Error)]
pub enum LabelgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse annotation JSON from {path}: {source}")]
    AnnotationParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No {kind} label named '{label}'")]
    LabelNotFound { kind: ShapeKind, label: String },

    #[error("{kind} '{label}' has {actual} point(s), expected {expected}")]
    MalformedShape {
        kind: ShapeKind,
        label: String,
        expected: &'static str,
        actual: usize,
    },

    #[error("Shape kind '{kind}' is not implemented for the '{dialect}' dialect")]
    UnsupportedKind {
        kind: ShapeKind,
        dialect: &'static str,
    },
}
