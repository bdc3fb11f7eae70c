// clearance-logic/src/traits.rs
// ============================================================================
// Module: Requirement Traits
// Description: Predicate evaluation and tracing contracts.
// Purpose: Define how domain predicates evaluate against a context snapshot.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Domains plug into the requirement algebra by implementing
//! [`PredicateEval`] for their predicate type. Evaluation hooks implement
//! [`RequirementTrace`] to observe which predicates were consulted.

// ============================================================================
// SECTION: Predicate Trait
// ============================================================================

/// Core trait for predicate evaluation against a domain context
///
/// The context is a read-only snapshot assembled by the caller before
/// evaluation starts, so every predicate within one evaluation observes the
/// same state.
pub trait PredicateEval {
    /// Domain-specific context type the predicate reads from
    type Context<'a>;

    /// Evaluates the predicate against the context
    ///
    /// # Returns
    /// `true` if the predicate holds for this context
    fn eval(&self, context: &Self::Context<'_>) -> bool;
}

// ============================================================================
// SECTION: Trace Hooks
// ============================================================================

/// Trace hook for predicate evaluation
pub trait RequirementTrace<P> {
    /// Called whenever a predicate is evaluated
    fn on_predicate_evaluated(&mut self, predicate: &P, result: bool);
}

/// No-op trace hook for fast paths
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl<P> RequirementTrace<P> for NoopTrace {
    fn on_predicate_evaluated(&mut self, _predicate: &P, _result: bool) {}
}

/// Trace hook that records every evaluated predicate in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingTrace<P> {
    /// Evaluated predicates and their results, in evaluation order.
    entries: Vec<(P, bool)>,
}

impl<P> Default for RecordingTrace<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<P> RecordingTrace<P> {
    /// Creates an empty recording trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded entries in evaluation order.
    #[must_use]
    pub fn entries(&self) -> &[(P, bool)] {
        &self.entries
    }

    /// Returns the recorded result for a predicate, if it was evaluated.
    #[must_use]
    pub fn result_of(&self, predicate: &P) -> Option<bool>
    where
        P: PartialEq,
    {
        self.entries.iter().find(|(recorded, _)| recorded == predicate).map(|(_, result)| *result)
    }
}

impl<P: Clone> RequirementTrace<P> for RecordingTrace<P> {
    fn on_predicate_evaluated(&mut self, predicate: &P, result: bool) {
        self.entries.push((predicate.clone(), result));
    }
}
