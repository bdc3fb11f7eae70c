// clearance-core/src/runtime/schema.rs
// ============================================================================
// Module: Shape Schemas
// Description: Structural validation of instance subtrees.
// Purpose: Check that named children exist with the expected classes and values.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! A [`ShapeSchema`] lists the children an instance must have, recursively.
//! Validation stops at the first mismatch and reports its dotted path, so a
//! warning can say exactly which field was wrong.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::ClassName;
use crate::core::Instance;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// First structural mismatch found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeMismatch {
    /// Required child is absent.
    #[error("missing child '{path}' (expected {expected})")]
    MissingChild {
        /// Dotted path of the missing child.
        path: String,
        /// Class the child should have.
        expected: ClassName,
    },
    /// Child exists with the wrong class.
    #[error("child '{path}' is a {found}, expected {expected}")]
    WrongClass {
        /// Dotted path of the child.
        path: String,
        /// Class the child should have.
        expected: ClassName,
        /// Class the child has.
        found: ClassName,
    },
    /// Value leaf has no value of its class's kind.
    #[error("child '{path}' holds no {expected} value")]
    WrongValue {
        /// Dotted path of the child.
        path: String,
        /// Value class of the child.
        expected: ClassName,
    },
}

// ============================================================================
// SECTION: Schema Types
// ============================================================================

/// Expected child of an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildSpec {
    /// Child name; the first child with this name is checked.
    name: &'static str,
    /// Required class.
    class: ClassName,
    /// Required grandchildren.
    children: Vec<Self>,
}

impl ChildSpec {
    /// Describes a leaf child with no required children.
    #[must_use]
    pub const fn leaf(name: &'static str, class: ClassName) -> Self {
        Self {
            name,
            class,
            children: Vec::new(),
        }
    }

    /// Describes a container child with required children.
    #[must_use]
    pub const fn container(name: &'static str, class: ClassName, children: Vec<Self>) -> Self {
        Self {
            name,
            class,
            children,
        }
    }

    /// Returns the child name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Validates a located child against this spec.
    fn validate(&self, child: &Instance, path: &str) -> Result<(), ShapeMismatch> {
        if !child.is_a(self.class) {
            return Err(ShapeMismatch::WrongClass {
                path: path.to_string(),
                expected: self.class,
                found: child.class(),
            });
        }
        let has_value = match self.class {
            ClassName::NumberValue => child.number_value().is_some(),
            ClassName::BoolValue => child.bool_value().is_some(),
            ClassName::StringValue => child.string_value().is_some(),
            _ => true,
        };
        if !has_value {
            return Err(ShapeMismatch::WrongValue {
                path: path.to_string(),
                expected: self.class,
            });
        }
        validate_children(&self.children, child, Some(path))
    }
}

/// Required shape of an instance's children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShapeSchema {
    /// Required children of the root.
    children: Vec<ChildSpec>,
}

impl ShapeSchema {
    /// Creates a schema from required root children.
    #[must_use]
    pub const fn new(children: Vec<ChildSpec>) -> Self {
        Self {
            children,
        }
    }

    /// Returns the required root children.
    #[must_use]
    pub fn children(&self) -> &[ChildSpec] {
        &self.children
    }

    /// Validates the instance against the schema.
    ///
    /// # Errors
    ///
    /// Returns the first [`ShapeMismatch`] encountered, in schema order.
    pub fn validate(&self, root: &Instance) -> Result<(), ShapeMismatch> {
        validate_children(&self.children, root, None)
    }

    /// Returns true when the instance matches the schema.
    #[must_use]
    pub fn matches(&self, root: &Instance) -> bool {
        self.validate(root).is_ok()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates required children of `parent`, extending `prefix` into paths.
fn validate_children(
    specs: &[ChildSpec],
    parent: &Instance,
    prefix: Option<&str>,
) -> Result<(), ShapeMismatch> {
    for spec in specs {
        let path = prefix.map_or_else(|| spec.name.to_string(), |p| format!("{p}.{}", spec.name));
        let Some(child) = parent.find_first_child(spec.name) else {
            return Err(ShapeMismatch::MissingChild {
                path,
                expected: spec.class,
            });
        };
        spec.validate(child, &path)?;
    }
    Ok(())
}
