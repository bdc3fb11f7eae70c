// clearance-logic/src/lib.rs
// ============================================================================
// Module: Requirement Root
// Description: Public API surface for the requirement algebra.
// Purpose: Wire together requirement trees, predicate traits, and traces.
// Dependencies: crate::{requirement, traits}
// ============================================================================

//! ## Overview
//! A small Boolean requirement algebra. Access rules are built as
//! [`Requirement`] trees whose leaves implement [`PredicateEval`].

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod requirement;
pub mod traits;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use requirement::Requirement;
pub use traits::NoopTrace;
pub use traits::PredicateEval;
pub use traits::RecordingTrace;
pub use traits::RequirementTrace;

// ============================================================================
// SECTION: Convenience DSL
// ============================================================================

/// Convenience functions for creating requirements without builders
pub mod convenience {
    use super::Requirement;

    /// Creates a requirement requiring all of the given requirements
    #[must_use]
    pub fn all<P>(requirements: Vec<Requirement<P>>) -> Requirement<P> {
        Requirement::and(requirements)
    }

    /// Creates a requirement requiring any of the given requirements
    #[must_use]
    pub fn any<P>(requirements: Vec<Requirement<P>>) -> Requirement<P> {
        Requirement::or(requirements)
    }

    /// Creates a requirement that inverts another requirement
    #[must_use]
    pub fn not<P>(requirement: Requirement<P>) -> Requirement<P> {
        Requirement::negate(requirement)
    }

    /// Creates a requirement from a predicate
    #[must_use]
    pub const fn predicate<P>(predicate: P) -> Requirement<P> {
        Requirement::predicate(predicate)
    }
}
