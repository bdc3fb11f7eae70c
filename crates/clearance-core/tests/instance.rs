// clearance-core/tests/instance.rs
// ============================================================================
// Module: Instance Tree Tests
// Description: Tests for scene deserialization and child lookup.
// Purpose: Ensure scenes described as data classify like built ones.
// Dependencies: clearance_core, serde_json
// ============================================================================
//! ## Overview
//! Integration tests for the instance model.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use clearance_core::ClassName;
use clearance_core::ClassifierSettings;
use clearance_core::ClearanceController;
use clearance_core::Instance;
use clearance_core::NoopDiagnosticSink;
use clearance_core::SchemaVariant;
use serde_json::json;
use support::TestResult;
use support::ensure;

/// Tests a JSON scene classifies and evaluates.
#[test]
fn test_json_scene_round_trip() -> TestResult {
    let actor: Instance = serde_json::from_value(json!({
        "name": "Player1",
        "class": "Player",
        "children": [{
            "name": "Backpack",
            "class": "Backpack",
            "children": [{
                "name": "RedCard",
                "class": "Tool",
                "tags": ["KeyCard"],
                "children": [{
                    "name": "KeyCardConfig",
                    "class": "Configuration",
                    "children": [{ "name": "Level", "class": "NumberValue", "value": 2 }]
                }]
            }]
        }]
    }))?;
    let door: Instance = serde_json::from_value(json!({
        "name": "Door",
        "class": "Model",
        "tags": ["Gatekeeper"],
        "children": [{
            "name": "GatekeeperConfig",
            "class": "Configuration",
            "children": [
                { "name": "Clearance", "class": "NumberValue", "value": 4 },
                { "name": "KeyCards", "class": "Folder", "children": [
                    { "name": "Allowed", "class": "StringValue", "value": "RedCard" }
                ]}
            ]
        }]
    }))?;
    let settings = ClassifierSettings::with_variant(SchemaVariant::Base);
    let controller = ClearanceController::new(&settings, &NoopDiagnosticSink);
    ensure(controller.has_clearance(&actor, &door), "Expected allow-list grant")?;
    Ok(())
}

/// Tests unknown classes deserialize as `Other`.
#[test]
fn test_unknown_class_is_other() -> TestResult {
    let instance: Instance = serde_json::from_value(json!({ "name": "Beam", "class": "Beam" }))?;
    ensure(instance.class() == ClassName::Other, "Expected Other class")?;
    Ok(())
}

/// Tests lookups return the first match and typed values check the class.
#[test]
fn test_first_child_and_typed_values() -> TestResult {
    let parent = Instance::new("Root", ClassName::Folder)
        .with_child(Instance::number("Level", 1.0))
        .with_child(Instance::number("Level", 2.0))
        .with_child(Instance::boolean("Flag", true));
    let first = parent.find_first_child("Level").and_then(Instance::number_value);
    ensure(first == Some(1.0), "Expected first Level")?;
    let flag = parent.find_first_child("Flag");
    ensure(flag.and_then(Instance::number_value).is_none(), "Expected no number from bool")?;
    ensure(flag.and_then(Instance::bool_value) == Some(true), "Expected bool value")?;
    Ok(())
}
