// clearance-config/src/lib.rs
// ============================================================================
// Module: Clearance Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for clearance.toml semantics.
// Dependencies: clearance-core, serde, toml
// ============================================================================

//! ## Overview
//! `clearance-config` loads `clearance.toml`, validates it fail-closed, and
//! builds the classifier settings and diagnostic sink the controller needs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
