// clearance-core/src/runtime/classifier.rs
// ============================================================================
// Module: Classifier
// Description: Key card and gatekeeper classification.
// Purpose: Decide which instances may be trusted and expose typed views of them.
// Dependencies: crate::{core, runtime::schema}, serde, thiserror
// ============================================================================

//! ## Overview
//! Classification checks, in order: the instance kind, the classification tag,
//! then the configuration shape. A successful classification yields a typed
//! view ([`KeyCard`] or [`Gatekeeper`]) whose fields were read once from the
//! validated subtree; nothing else in the crate reads raw configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::ClassName;
use crate::core::Instance;
use crate::core::names;
use crate::runtime::schema::ChildSpec;
use crate::runtime::schema::ShapeMismatch;
use crate::runtime::schema::ShapeSchema;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Which configuration shape classification requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    /// Level on key cards; clearance and accepted names on gatekeepers.
    ///
    /// Optional flags are still read when present.
    #[default]
    Base,
    /// Base fields plus lockdown bypass, open, lockdown, and jammed flags.
    Extended,
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierSettings {
    /// Tag required on key card tools.
    pub key_card_tag: String,
    /// Tag required on gatekeeper instances.
    pub gatekeeper_tag: String,
    /// Required configuration shape.
    pub variant: SchemaVariant,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            key_card_tag: names::DEFAULT_KEY_CARD_TAG.to_string(),
            gatekeeper_tag: names::DEFAULT_GATEKEEPER_TAG.to_string(),
            variant: SchemaVariant::default(),
        }
    }
}

impl ClassifierSettings {
    /// Returns default tags with the given schema variant.
    #[must_use]
    pub fn with_variant(variant: SchemaVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Reason an instance failed classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Instance is not of the required class.
    #[error("is not a {expected} (found {found})")]
    KindMismatch {
        /// Required class.
        expected: ClassName,
        /// Actual class.
        found: ClassName,
    },
    /// Instance lacks the classification tag.
    #[error("is not tagged with '{tag}' tag")]
    MissingTag {
        /// Tag that was required.
        tag: String,
    },
    /// Configuration subtree does not match the schema.
    #[error("did not pass validation: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),
}

impl ClassificationError {
    /// Returns the stable label of the failed check.
    #[must_use]
    pub const fn check(&self) -> &'static str {
        match self {
            Self::KindMismatch {
                ..
            } => "kind_mismatch",
            Self::MissingTag {
                ..
            } => "missing_tag",
            Self::ShapeMismatch(_) => "shape_mismatch",
        }
    }
}

// ============================================================================
// SECTION: Schemas
// ============================================================================

/// Returns the shape a key card must have under the variant.
#[must_use]
pub fn key_card_schema(variant: SchemaVariant) -> ShapeSchema {
    let mut fields = vec![ChildSpec::leaf(names::LEVEL, ClassName::NumberValue)];
    if variant == SchemaVariant::Extended {
        fields.push(ChildSpec::leaf(names::LOCK_DOWN_BYPASS, ClassName::BoolValue));
    }
    ShapeSchema::new(vec![ChildSpec::container(
        names::KEY_CARD_CONFIG,
        ClassName::Configuration,
        fields,
    )])
}

/// Returns the shape a gatekeeper must have under the variant.
#[must_use]
pub fn gatekeeper_schema(variant: SchemaVariant) -> ShapeSchema {
    let mut fields = Vec::with_capacity(5);
    if variant == SchemaVariant::Extended {
        fields.push(ChildSpec::leaf(names::OPEN, ClassName::BoolValue));
        fields.push(ChildSpec::leaf(names::LOCK_DOWN, ClassName::BoolValue));
        fields.push(ChildSpec::leaf(names::JAMMED, ClassName::BoolValue));
    }
    fields.push(ChildSpec::leaf(names::CLEARANCE, ClassName::NumberValue));
    fields.push(ChildSpec::leaf(names::KEY_CARDS, ClassName::Folder));
    ShapeSchema::new(vec![ChildSpec::container(
        names::GATEKEEPER_CONFIG,
        ClassName::Configuration,
        fields,
    )])
}

// ============================================================================
// SECTION: Typed Views
// ============================================================================

/// Validated key card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyCard<'a> {
    /// Underlying tool instance.
    instance: &'a Instance,
    /// Clearance level granted.
    level: f64,
    /// Whether the card passes lockdowns; absent under the base schema.
    lock_down_bypass: bool,
}

impl<'a> KeyCard<'a> {
    /// Returns the underlying instance.
    #[must_use]
    pub const fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Returns the key card name used for allow-list matching.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.instance.name()
    }

    /// Returns the clearance level granted by the card.
    #[must_use]
    pub const fn level(&self) -> f64 {
        self.level
    }

    /// Returns true when the card passes lockdowns.
    #[must_use]
    pub const fn lock_down_bypass(&self) -> bool {
        self.lock_down_bypass
    }
}

/// Validated gatekeeper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gatekeeper<'a> {
    /// Underlying instance.
    instance: &'a Instance,
    /// Folder of accepted key card names.
    key_cards: &'a Instance,
    /// Minimum level required.
    clearance: f64,
    /// Open flag; false when absent.
    open: bool,
    /// Lockdown flag; false when absent.
    lock_down: bool,
    /// Jammed flag; false when absent.
    jammed: bool,
}

impl<'a> Gatekeeper<'a> {
    /// Returns the underlying instance.
    #[must_use]
    pub const fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Returns the minimum level required to pass.
    #[must_use]
    pub const fn clearance(&self) -> f64 {
        self.clearance
    }

    /// Returns true when the gatekeeper reports itself open.
    #[must_use]
    pub const fn open(&self) -> bool {
        self.open
    }

    /// Returns true when the gatekeeper is locked down.
    #[must_use]
    pub const fn lock_down(&self) -> bool {
        self.lock_down
    }

    /// Returns true when the gatekeeper is jammed.
    #[must_use]
    pub const fn jammed(&self) -> bool {
        self.jammed
    }

    /// Returns accepted key card names in folder order.
    ///
    /// Children that are not `StringValue` leaves are skipped.
    pub fn accepted_names(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.key_cards.children().iter().filter_map(Instance::string_value)
    }

    /// Returns true when the name is on the allow-list.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        self.accepted_names().any(|accepted| accepted == name)
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Classifies an instance as a key card.
///
/// # Errors
///
/// Returns [`ClassificationError`] naming the first failed check.
pub fn classify_key_card<'a>(
    instance: &'a Instance,
    settings: &ClassifierSettings,
) -> Result<KeyCard<'a>, ClassificationError> {
    if !instance.is_a(ClassName::Tool) {
        return Err(ClassificationError::KindMismatch {
            expected: ClassName::Tool,
            found: instance.class(),
        });
    }
    if !instance.has_tag(&settings.key_card_tag) {
        return Err(ClassificationError::MissingTag {
            tag: settings.key_card_tag.clone(),
        });
    }
    key_card_schema(settings.variant).validate(instance)?;

    let config = instance.find_first_child(names::KEY_CARD_CONFIG);
    let field = |name: &str| config.and_then(|config| config.find_first_child(name));
    Ok(KeyCard {
        instance,
        level: field(names::LEVEL).and_then(Instance::number_value).unwrap_or_default(),
        lock_down_bypass: field(names::LOCK_DOWN_BYPASS)
            .and_then(Instance::bool_value)
            .unwrap_or(false),
    })
}

/// Classifies an instance as a gatekeeper.
///
/// Any instance class may act as a gatekeeper; only the tag and the
/// configuration shape are checked.
///
/// # Errors
///
/// Returns [`ClassificationError`] naming the first failed check.
pub fn classify_gatekeeper<'a>(
    instance: &'a Instance,
    settings: &ClassifierSettings,
) -> Result<Gatekeeper<'a>, ClassificationError> {
    if !instance.has_tag(&settings.gatekeeper_tag) {
        return Err(ClassificationError::MissingTag {
            tag: settings.gatekeeper_tag.clone(),
        });
    }
    gatekeeper_schema(settings.variant).validate(instance)?;

    let config = instance.find_first_child(names::GATEKEEPER_CONFIG);
    let field = |name: &str| config.and_then(|config| config.find_first_child(name));
    let flag = |name: &str| field(name).and_then(Instance::bool_value).unwrap_or(false);
    let Some(key_cards) = field(names::KEY_CARDS) else {
        return Err(ClassificationError::ShapeMismatch(ShapeMismatch::MissingChild {
            path: format!("{}.{}", names::GATEKEEPER_CONFIG, names::KEY_CARDS),
            expected: ClassName::Folder,
        }));
    };
    Ok(Gatekeeper {
        instance,
        key_cards,
        clearance: field(names::CLEARANCE).and_then(Instance::number_value).unwrap_or_default(),
        open: flag(names::OPEN),
        lock_down: flag(names::LOCK_DOWN),
        jammed: flag(names::JAMMED),
    })
}
