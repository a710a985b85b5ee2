//! Code generation: rendering a collected label set as Python source.
//!
//! One renderer, four dialects. Every dialect shares the same value
//! computation ([`ShapeValue`]) and the same iteration order (the label
//! set's insertion order), so for a fixed collection the output is
//! byte-for-byte deterministic; the dialect only changes the textual shape.
//!
//! # Dialects
//!
//! - [`Dialect::Full`]: dataclass declarations plus one initialized record
//!   per shape and a closing `ALL_LABELS` list.
//! - [`Dialect::Minimal`]: bare `name = value` assignments plus a closing
//!   `LABELS` mapping.
//! - [`Dialect::TypedMap`]: one `Literal`-keyed mapping per shape kind.
//! - [`Dialect::TypedMapWithSource`]: typed maps plus a master mapping from
//!   label to `(source path, raw points, kind)`.

mod emit;
mod names;
mod value;

pub use names::{sanitize_identifier, CollisionPolicy, NameAllocator, NameCase};
pub use value::ShapeValue;

use std::path::Path;

use crate::error::LabelgenError;
use crate::labels::{LabelSet, Shape, ShapeKind};

/// The output dialect to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    Full,
    Minimal,
    TypedMap,
    TypedMapWithSource,
}

impl Dialect {
    /// Human-readable name, as spelled on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Full => "full",
            Dialect::Minimal => "minimal",
            Dialect::TypedMap => "typed-map",
            Dialect::TypedMapWithSource => "typed-map-with-source",
        }
    }

    /// The shape kinds this dialect renders unless overridden.
    ///
    /// The full and minimal dialects reject polygons by default; the
    /// typed-map dialects accept everything. Override per call with
    /// [`GenerateOptions::with_supported_kinds`].
    pub fn default_supported_kinds(&self) -> &'static [ShapeKind] {
        match self {
            Dialect::Full | Dialect::Minimal => {
                &[ShapeKind::Rectangle, ShapeKind::Point, ShapeKind::Line]
            }
            Dialect::TypedMap | Dialect::TypedMapWithSource => &[
                ShapeKind::Rectangle,
                ShapeKind::Point,
                ShapeKind::Line,
                ShapeKind::Polygon,
            ],
        }
    }
}

/// Options controlling one generation run.
#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    pub dialect: Dialect,
    pub collision: CollisionPolicy,
    /// Overrides the dialect's default supported kinds when set.
    pub supported_kinds: Option<Vec<ShapeKind>>,
}

impl GenerateOptions {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_collision_policy(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_supported_kinds(mut self, kinds: Vec<ShapeKind>) -> Self {
        self.supported_kinds = Some(kinds);
        self
    }

    fn supports(&self, kind: ShapeKind) -> bool {
        self.supported_kinds
            .as_deref()
            .unwrap_or_else(|| self.dialect.default_supported_kinds())
            .contains(&kind)
    }
}

/// A shape paired with its canonical value, ready to render.
pub(crate) struct Entry<'a> {
    pub shape: &'a Shape,
    pub value: ShapeValue,
}

/// Renders `set` as Python source in the requested dialect.
///
/// `input_dir` is the directory the set was collected from; the
/// with-source dialect uses it to compute relative source paths.
///
/// # Errors
/// Fails with [`LabelgenError::UnsupportedKind`] when the set contains a
/// kind the dialect does not render, and [`LabelgenError::MalformedShape`]
/// when a shape's point count does not fit its kind. No partial output is
/// produced.
pub fn generate(
    set: &LabelSet,
    input_dir: &Path,
    options: &GenerateOptions,
) -> Result<String, LabelgenError> {
    let mut entries = Vec::with_capacity(set.len());
    for shape in set {
        if !options.supports(shape.kind) {
            return Err(LabelgenError::UnsupportedKind {
                kind: shape.kind,
                dialect: options.dialect.name(),
            });
        }
        entries.push(Entry {
            shape,
            value: ShapeValue::from_shape(shape)?,
        });
    }

    Ok(match options.dialect {
        Dialect::Full => emit::full(&entries, options),
        Dialect::Minimal => emit::minimal(&entries, options),
        Dialect::TypedMap => emit::typed_map(&entries, false, input_dir),
        Dialect::TypedMapWithSource => emit::typed_map(&entries, true, input_dir),
    })
}
