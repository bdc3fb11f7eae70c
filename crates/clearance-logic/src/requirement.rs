// clearance-logic/src/requirement.rs
// ============================================================================
// Module: Requirement Core Types
// Description: Boolean algebra over typed predicates.
// Purpose: Define `Requirement` and its short-circuit evaluation.
// Dependencies: serde::{Deserialize, Serialize}, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! This module defines the requirement tree used to compose access rules.
//! Operators are domain-agnostic; the `Predicate` leaf is where domain
//! semantics are injected through [`PredicateEval`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::traits::NoopTrace;
use crate::traits::PredicateEval;
use crate::traits::RequirementTrace;

// ============================================================================
// SECTION: Requirement Definition
// ============================================================================

/// Requirement tree with domain-specific leaves
///
/// Children are evaluated left to right, so the order in which a rule lists
/// its sub-requirements is the order in which predicates are consulted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement<P> {
    /// Logical AND: All sub-requirements must be satisfied
    ///
    /// Short-circuits on the first failure. Empty And is satisfied.
    And(SmallVec<[Box<Self>; 4]>),

    /// Logical OR: At least one sub-requirement must be satisfied
    ///
    /// Short-circuits on the first success. Empty Or is unsatisfied.
    Or(SmallVec<[Box<Self>; 4]>),

    /// Logical NOT: Inverts the result of the sub-requirement
    Not(Box<Self>),

    /// Domain-specific atomic predicate
    Predicate(P),
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

impl<P: PredicateEval> Requirement<P> {
    /// Evaluates this requirement with short-circuiting
    pub fn eval(&self, context: &P::Context<'_>) -> bool {
        self.eval_with_trace(context, &mut NoopTrace)
    }

    /// Evaluates this requirement and reports each consulted predicate
    pub fn eval_with_trace<T>(&self, context: &P::Context<'_>, trace: &mut T) -> bool
    where
        T: RequirementTrace<P>,
    {
        match self {
            Self::Predicate(predicate) => {
                let result = predicate.eval(context);
                trace.on_predicate_evaluated(predicate, result);
                result
            }
            Self::Not(requirement) => !requirement.eval_with_trace(context, trace),
            Self::And(requirements) => {
                for req in requirements {
                    if !req.eval_with_trace(context, trace) {
                        return false;
                    }
                }
                true
            }
            Self::Or(requirements) => {
                for req in requirements {
                    if req.eval_with_trace(context, trace) {
                        return true;
                    }
                }
                false
            }
        }
    }
}

impl<P> Requirement<P> {
    /// Returns the number of nodes in this requirement tree
    pub fn complexity(&self) -> usize {
        match self {
            Self::Predicate(_) => 1,
            Self::Not(req) => 1 + req.complexity(),
            Self::And(reqs) | Self::Or(reqs) => {
                1 + reqs.iter().map(|r| r.complexity()).sum::<usize>()
            }
        }
    }
}

// ============================================================================
// SECTION: Constructor Helpers
// ============================================================================

impl<P> Requirement<P> {
    /// Creates a logical AND of the given requirements
    pub fn and(requirements: Vec<Self>) -> Self {
        Self::And(requirements.into_iter().map(Box::new).collect())
    }

    /// Creates a logical OR of the given requirements
    pub fn or(requirements: Vec<Self>) -> Self {
        Self::Or(requirements.into_iter().map(Box::new).collect())
    }

    /// Creates a logical NOT of the given requirement
    pub fn negate(requirement: Self) -> Self {
        Self::Not(Box::new(requirement))
    }

    /// Creates a requirement from a predicate
    pub const fn predicate(predicate: P) -> Self {
        Self::Predicate(predicate)
    }
}

impl<P> std::ops::Not for Requirement<P> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

impl<P> Default for Requirement<P> {
    /// Creates an empty And requirement (trivially satisfied)
    fn default() -> Self {
        Self::And(SmallVec::new())
    }
}
