// clearance-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and scene fixtures for clearance tests.
// ============================================================================
//! ## Overview
//! Result-based assertions plus builders for players, key cards, and
//! gatekeepers shaped the way the host lays them out.

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

use clearance_core::ClassName;
use clearance_core::Instance;
use clearance_core::names;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across clearance integration tests.
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
// Fixtures
// ========================================================================

/// Builds a tagged key card with the extended configuration shape.
pub fn key_card(name: &str, level: f64, bypass: bool) -> Instance {
    Instance::new(name, ClassName::Tool).with_tag(names::DEFAULT_KEY_CARD_TAG).with_child(
        Instance::new(names::KEY_CARD_CONFIG, ClassName::Configuration)
            .with_child(Instance::number(names::LEVEL, level))
            .with_child(Instance::boolean(names::LOCK_DOWN_BYPASS, bypass)),
    )
}

/// Builds a tagged key card with only the base configuration shape.
pub fn base_key_card(name: &str, level: f64) -> Instance {
    Instance::new(name, ClassName::Tool).with_tag(names::DEFAULT_KEY_CARD_TAG).with_child(
        Instance::new(names::KEY_CARD_CONFIG, ClassName::Configuration)
            .with_child(Instance::number(names::LEVEL, level)),
    )
}

/// Builds a player whose backpack holds the given items in order.
pub fn player(items: Vec<Instance>) -> Instance {
    Instance::new("Player1", ClassName::Player)
        .with_child(Instance::new("Backpack", ClassName::Backpack).with_children(items))
}

/// Gatekeeper state flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    /// Open flag.
    pub open: bool,
    /// Lockdown flag.
    pub lock_down: bool,
    /// Jammed flag.
    pub jammed: bool,
}

/// Builds a tagged gatekeeper with the extended configuration shape.
pub fn gatekeeper(clearance: f64, accepted: &[&str], flags: Flags) -> Instance {
    let key_cards = Instance::new(names::KEY_CARDS, ClassName::Folder)
        .with_children(accepted.iter().map(|name| Instance::string("Card", *name)));
    Instance::new("Door", ClassName::Model).with_tag(names::DEFAULT_GATEKEEPER_TAG).with_child(
        Instance::new(names::GATEKEEPER_CONFIG, ClassName::Configuration)
            .with_child(Instance::boolean(names::OPEN, flags.open))
            .with_child(Instance::boolean(names::LOCK_DOWN, flags.lock_down))
            .with_child(Instance::boolean(names::JAMMED, flags.jammed))
            .with_child(Instance::number(names::CLEARANCE, clearance))
            .with_child(key_cards),
    )
}

/// Builds a tagged gatekeeper with only the base configuration shape.
pub fn base_gatekeeper(clearance: f64, accepted: &[&str]) -> Instance {
    let key_cards = Instance::new(names::KEY_CARDS, ClassName::Folder)
        .with_children(accepted.iter().map(|name| Instance::string("Card", *name)));
    Instance::new("Door", ClassName::Model).with_tag(names::DEFAULT_GATEKEEPER_TAG).with_child(
        Instance::new(names::GATEKEEPER_CONFIG, ClassName::Configuration)
            .with_child(Instance::number(names::CLEARANCE, clearance))
            .with_child(key_cards),
    )
}
