// clearance-core/src/lib.rs
// ============================================================================
// Module: Clearance Core Library
// Description: Public API surface for key card clearance checks.
// Purpose: Expose the instance model, host interfaces, and runtime evaluator.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Clearance core decides whether a player may pass a gatekeeper. It
//! classifies host objects as key cards or gatekeepers, reads their validated
//! configuration, and applies either the base level-or-allow-list rule or the
//! rule with jammed and lockdown overrides. Malformed input never fails a call:
//! it degrades to "no clearance" and emits an advisory diagnostic.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::ActorInventory;
pub use interfaces::ClassificationWarning;
pub use interfaces::ClassifiedSubject;
pub use interfaces::DiagnosticSink;
pub use runtime::AccessDecision;
pub use runtime::AccessPredicate;
pub use runtime::AccessRule;
pub use runtime::AccessSnapshot;
pub use runtime::ClassificationError;
pub use runtime::ClassifierSettings;
pub use runtime::ClearanceController;
pub use runtime::DenialReason;
pub use runtime::FileDiagnosticSink;
pub use runtime::Gatekeeper;
pub use runtime::GrantPath;
pub use runtime::KeyCard;
pub use runtime::MemoryDiagnosticSink;
pub use runtime::NoopDiagnosticSink;
pub use runtime::SchemaVariant;
pub use runtime::ShapeMismatch;
pub use runtime::ShapeSchema;
pub use runtime::StderrDiagnosticSink;
