// clearance-core/src/core/instance.rs
// ============================================================================
// Module: Instance Tree
// Description: Read-only model of host-owned scene objects.
// Purpose: Expose class, name, tags, children, and leaf values for inspection.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An [`Instance`] is a named node with a class, a tag set, ordered children,
//! and for value classes a leaf value. Trees deserialize from JSON or TOML so
//! hosts and tests can describe scenes as data:
//!
//! ```json
//! { "name": "Level", "class": "NumberValue", "value": 3 }
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Class Names
// ============================================================================

/// Host class of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassName {
    /// Connected participant.
    Player,
    /// Inventory container owned by a player.
    Backpack,
    /// Holdable object.
    Tool,
    /// Configuration container.
    Configuration,
    /// Generic folder.
    Folder,
    /// Grouping of parts.
    Model,
    /// Physical part.
    Part,
    /// Numeric leaf value.
    NumberValue,
    /// Boolean leaf value.
    BoolValue,
    /// String leaf value.
    StringValue,
    /// Any class this crate does not inspect.
    #[serde(other)]
    Other,
}

impl ClassName {
    /// Returns the host spelling of the class name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Backpack => "Backpack",
            Self::Tool => "Tool",
            Self::Configuration => "Configuration",
            Self::Folder => "Folder",
            Self::Model => "Model",
            Self::Part => "Part",
            Self::NumberValue => "NumberValue",
            Self::BoolValue => "BoolValue",
            Self::StringValue => "StringValue",
            Self::Other => "Instance",
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Leaf Values
// ============================================================================

/// Value held by a leaf instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeafValue {
    /// Boolean payload.
    Bool(bool),
    /// Numeric payload.
    Number(f64),
    /// String payload.
    String(String),
}

// ============================================================================
// SECTION: Instance
// ============================================================================

/// Host-owned object node.
///
/// # Invariants
/// - Children keep host order; name lookups return the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance name (not necessarily unique among siblings).
    name: String,
    /// Host class.
    class: ClassName,
    /// Tags attached by the host.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<String>,
    /// Leaf value for value classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<LeafValue>,
    /// Ordered children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
}

impl Instance {
    /// Creates an instance with no tags, value, or children.
    #[must_use]
    pub fn new(name: impl Into<String>, class: ClassName) -> Self {
        Self {
            name: name.into(),
            class,
            tags: BTreeSet::new(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Creates a `NumberValue` leaf.
    #[must_use]
    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, ClassName::NumberValue).with_value(LeafValue::Number(value))
    }

    /// Creates a `BoolValue` leaf.
    #[must_use]
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, ClassName::BoolValue).with_value(LeafValue::Bool(value))
    }

    /// Creates a `StringValue` leaf.
    #[must_use]
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ClassName::StringValue).with_value(LeafValue::String(value.into()))
    }

    /// Returns a copy with the tag added.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Returns a copy with the leaf value set.
    #[must_use]
    pub fn with_value(mut self, value: LeafValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns a copy with the child appended.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns a copy with the children appended in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the instance name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the instance class.
    #[must_use]
    pub const fn class(&self) -> ClassName {
        self.class
    }

    /// Returns true when the instance is of the given class.
    #[must_use]
    pub fn is_a(&self, class: ClassName) -> bool {
        self.class == class
    }

    /// Returns true when the host attached the tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Returns the immediate children in host order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the first child with the given name.
    #[must_use]
    pub fn find_first_child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns the first child of the given class.
    #[must_use]
    pub fn find_first_child_of_class(&self, class: ClassName) -> Option<&Self> {
        self.children.iter().find(|child| child.class == class)
    }

    /// Returns the raw leaf value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&LeafValue> {
        self.value.as_ref()
    }

    /// Returns the number held by a `NumberValue` leaf.
    #[must_use]
    pub fn number_value(&self) -> Option<f64> {
        match (&self.class, &self.value) {
            (ClassName::NumberValue, Some(LeafValue::Number(value))) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean held by a `BoolValue` leaf.
    #[must_use]
    pub fn bool_value(&self) -> Option<bool> {
        match (&self.class, &self.value) {
            (ClassName::BoolValue, Some(LeafValue::Bool(value))) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string held by a `StringValue` leaf.
    #[must_use]
    pub fn string_value(&self) -> Option<&str> {
        match (&self.class, &self.value) {
            (ClassName::StringValue, Some(LeafValue::String(value))) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
