//! Variable-name derivation and collision handling.
//!
//! Labels are free text; generated identifiers are not. This module
//! sanitizes labels into valid Python identifiers and disambiguates repeats
//! with `_1`, `_2`, ... suffixes in first-seen order.
//!
//! Whether two equal labels of *different* kinds count as a collision
//! depends on how the generated names are scoped, so the policy is an
//! explicit knob rather than a hard-coded answer.

use std::collections::HashMap;

use crate::labels::ShapeKind;

/// What the collision counter keys on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Key on the derived base name alone: equal labels of different kinds
    /// collide and the later one gets a suffix. Required for dialects that
    /// emit every name as a module-level variable.
    #[default]
    LabelText,

    /// Key on `(kind, base name)`: equal labels of different kinds coexist
    /// without suffixes. Safe for dialects that scope names per kind.
    KindAndLabel,
}

/// Case applied to the sanitized label before suffixing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameCase {
    /// `SCREAMING_CASE` constants, used by the full dialect.
    Upper,
    /// Lowercase variables, used by the minimal dialect.
    Lower,
}

/// Turns a label into a valid Python identifier in the requested case.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`; a leading digit gets
/// a `_` prefix; an empty label becomes `_`.
pub fn sanitize_identifier(label: &str, case: NameCase) -> String {
    let mut name: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() {
        name.push('_');
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    match case {
        NameCase::Upper => name.to_ascii_uppercase(),
        NameCase::Lower => name.to_ascii_lowercase(),
    }
}

/// Allocates unique variable names for shapes in encounter order.
#[derive(Debug)]
pub struct NameAllocator {
    policy: CollisionPolicy,
    case: NameCase,
    counters: HashMap<(Option<ShapeKind>, String), u32>,
}

impl NameAllocator {
    pub fn new(policy: CollisionPolicy, case: NameCase) -> Self {
        Self {
            policy,
            case,
            counters: HashMap::new(),
        }
    }

    /// Returns the variable name for the next occurrence of `label` under
    /// `kind`. The first occurrence gets the bare sanitized name; later
    /// occurrences of the same counter key get `_1`, `_2`, ...
    pub fn allocate(&mut self, kind: ShapeKind, label: &str) -> String {
        let base = sanitize_identifier(label, self.case);
        let key = match self.policy {
            CollisionPolicy::LabelText => (None, base.clone()),
            CollisionPolicy::KindAndLabel => (Some(kind), base.clone()),
        };
        let seen = self.counters.entry(key).or_insert(0);
        let name = if *seen == 0 {
            base
        } else {
            format!("{base}_{seen}")
        };
        *seen += 1;
        name
    }
}
