// clearance-core/src/interfaces/mod.rs
// ============================================================================
// Module: Clearance Interfaces
// Description: Host-facing traits for inventories and diagnostics.
// Purpose: Define the seams between the evaluator and the host environment.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! The evaluator never walks the host itself. It asks an [`ActorInventory`]
//! for the objects an actor holds, and reports classification failures to a
//! [`DiagnosticSink`]. Diagnostics are advisory and never alter a result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::ClassName;
use crate::core::Instance;

// ============================================================================
// SECTION: Actor Inventory
// ============================================================================

/// Source of the objects currently held by an actor.
pub trait ActorInventory {
    /// Returns the held objects in discovery order, or `None` when the actor
    /// has no inventory container.
    fn inventory(&self) -> Option<&[Instance]>;
}

impl ActorInventory for Instance {
    /// Players hold their tools in the first `Backpack` child.
    fn inventory(&self) -> Option<&[Instance]> {
        self.find_first_child_of_class(ClassName::Backpack).map(Instance::children)
    }
}

impl ActorInventory for [Instance] {
    fn inventory(&self) -> Option<&[Instance]> {
        Some(self)
    }
}

// ============================================================================
// SECTION: Diagnostic Events
// ============================================================================

/// Kind of object the classifier was asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifiedSubject {
    /// Key card credential.
    KeyCard,
    /// Gatekeeper barrier.
    Gatekeeper,
}

impl ClassifiedSubject {
    /// Returns the label used in human-readable messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KeyCard => "keycard",
            Self::Gatekeeper => "gatekeeper",
        }
    }
}

/// Advisory warning emitted when an object fails classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationWarning {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Kind of object that was classified.
    pub subject: ClassifiedSubject,
    /// Name of the offending object.
    pub object_name: String,
    /// Failed check label (`kind_mismatch`, `missing_tag`, `shape_mismatch`).
    pub check: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ClassificationWarning {
    /// Creates a warning with a consistent timestamp.
    #[must_use]
    pub fn new(
        subject: ClassifiedSubject,
        object_name: impl Into<String>,
        check: &'static str,
        message: impl Into<String>,
    ) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "classification_warning",
            timestamp_ms,
            subject,
            object_name: object_name.into(),
            check,
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Diagnostic Sink
// ============================================================================

/// Destination for advisory classification warnings.
pub trait DiagnosticSink: Send + Sync {
    /// Record a classification warning.
    fn warn(&self, event: &ClassificationWarning);
}
