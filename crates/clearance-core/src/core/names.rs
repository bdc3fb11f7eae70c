// clearance-core/src/core/names.rs
// ============================================================================
// Module: Well-Known Names
// Description: Default tags and configuration child names.
// Purpose: Keep host naming conventions in one place.
// Dependencies: none
// ============================================================================

//! Host naming conventions for tags and configuration children.

/// Default tag carried by key card tools.
pub const DEFAULT_KEY_CARD_TAG: &str = "KeyCard";
/// Default tag carried by gatekeeper instances.
pub const DEFAULT_GATEKEEPER_TAG: &str = "Gatekeeper";

/// Configuration child of a key card.
pub const KEY_CARD_CONFIG: &str = "KeyCardConfig";
/// Numeric clearance level granted by a key card.
pub const LEVEL: &str = "Level";
/// Lockdown bypass flag of a key card.
pub const LOCK_DOWN_BYPASS: &str = "LockDownBypass";

/// Configuration child of a gatekeeper.
pub const GATEKEEPER_CONFIG: &str = "GatekeeperConfig";
/// Numeric clearance required by a gatekeeper.
pub const CLEARANCE: &str = "Clearance";
/// Folder of accepted key card names.
pub const KEY_CARDS: &str = "KeyCards";
/// Open state flag of a gatekeeper.
pub const OPEN: &str = "Open";
/// Lockdown state flag of a gatekeeper.
pub const LOCK_DOWN: &str = "LockDown";
/// Jammed state flag of a gatekeeper.
pub const JAMMED: &str = "Jammed";
