// clearance-core/src/core/mod.rs
// ============================================================================
// Module: Clearance Core Types
// Description: Host object model and well-known names.
// Purpose: Provide the read-only instance tree the classifier inspects.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The host environment owns every object; this crate only reads them through
//! the [`Instance`] tree. Well-known tag and child names live in [`names`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod instance;
pub mod names;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use instance::ClassName;
pub use instance::Instance;
pub use instance::LeafValue;
