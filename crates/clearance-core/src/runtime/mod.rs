// clearance-core/src/runtime/mod.rs
// ============================================================================
// Module: Clearance Runtime
// Description: Classification, access evaluation, and diagnostic sinks.
// Purpose: Group the runtime pieces behind a single module boundary.
// Dependencies: crate::{core, interfaces}, clearance-logic
// ============================================================================

//! ## Overview
//! Runtime pieces: shape schemas, the classifier, the access controller, and
//! the built-in diagnostic sinks.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod classifier;
pub mod controller;
pub mod diagnostics;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use classifier::ClassificationError;
pub use classifier::ClassifierSettings;
pub use classifier::Gatekeeper;
pub use classifier::KeyCard;
pub use classifier::SchemaVariant;
pub use classifier::classify_gatekeeper;
pub use classifier::classify_key_card;
pub use classifier::gatekeeper_schema;
pub use classifier::key_card_schema;
pub use controller::AccessDecision;
pub use controller::AccessPredicate;
pub use controller::AccessRule;
pub use controller::AccessSnapshot;
pub use controller::ClearanceController;
pub use controller::DenialReason;
pub use controller::GrantPath;
pub use diagnostics::FileDiagnosticSink;
pub use diagnostics::MemoryDiagnosticSink;
pub use diagnostics::NoopDiagnosticSink;
pub use diagnostics::StderrDiagnosticSink;
pub use schema::ChildSpec;
pub use schema::ShapeMismatch;
pub use schema::ShapeSchema;
