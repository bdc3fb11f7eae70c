// clearance-logic/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and mock predicates for requirement tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;

use clearance_logic::PredicateEval;
use serde::Deserialize;
use serde::Serialize;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across requirement integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(Box::new(TestError {
            message: message.into(),
        }))
    }
}

// ========================================================================
// Mock Predicates
// ========================================================================

/// Flag representing capability A for tests.
pub const FLAG_A: u64 = 0b0001;
/// Flag representing capability B for tests.
pub const FLAG_B: u64 = 0b0010;
/// Flag representing capability C for tests.
pub const FLAG_C: u64 = 0b0100;

/// Mock predicate checking bits of a flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagPredicate {
    /// Passes when the given bit is set.
    Has(u64),
    /// Always passes.
    Always,
    /// Never passes.
    Never,
}

impl PredicateEval for FlagPredicate {
    type Context<'a> = u64;

    fn eval(&self, context: &Self::Context<'_>) -> bool {
        match self {
            Self::Has(flag) => context & flag == *flag,
            Self::Always => true,
            Self::Never => false,
        }
    }
}
