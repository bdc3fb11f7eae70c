// clearance-core/src/runtime/controller.rs
// ============================================================================
// Module: Clearance Controller
// Description: Access evaluation for actors at gatekeepers.
// Purpose: Combine classification with the access rules to grant or deny passage.
// Dependencies: crate::{core, interfaces, runtime::classifier}, clearance-logic, serde
// ============================================================================

//! ## Overview
//! [`ClearanceController`] is stateless: every call classifies the actor's
//! inventory and the gatekeeper into an [`AccessSnapshot`], then evaluates an
//! [`AccessRule`] against that snapshot. Two rules exist side by side:
//!
//! - [`AccessRule::Base`]: level at or above clearance, or an accepted card.
//! - [`AccessRule::WithOverrides`]: gatekeeper must be valid, not jammed, and
//!   not locked down (unless a bypass card is held) before the base rule runs.
//!
//! Classification failures are reported to the [`DiagnosticSink`] and degrade
//! to safe defaults; nothing here returns an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use clearance_logic::PredicateEval;
use clearance_logic::RecordingTrace;
use clearance_logic::Requirement;
use serde::Deserialize;
use serde::Serialize;

use crate::core::Instance;
use crate::interfaces::ActorInventory;
use crate::interfaces::ClassificationWarning;
use crate::interfaces::ClassifiedSubject;
use crate::interfaces::DiagnosticSink;
use crate::runtime::classifier::ClassificationError;
use crate::runtime::classifier::ClassifierSettings;
use crate::runtime::classifier::Gatekeeper;
use crate::runtime::classifier::KeyCard;
use crate::runtime::classifier::classify_gatekeeper;
use crate::runtime::classifier::classify_key_card;

// ============================================================================
// SECTION: Decisions
// ============================================================================

/// Access rule to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRule {
    /// Level-or-allow-list rule with no gatekeeper state checks.
    Base,
    /// Jammed and lockdown overrides evaluated before the base rule.
    WithOverrides,
}

/// How access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantPath {
    /// Actor level met the gatekeeper clearance.
    ClearanceLevel,
    /// Actor held a key card on the gatekeeper allow-list.
    AcceptedKeyCard,
}

/// Why access was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Gatekeeper failed classification.
    InvalidGatekeeper,
    /// Gatekeeper is jammed.
    Jammed,
    /// Gatekeeper is locked down and no bypass card is held.
    LockDown,
    /// Level too low and no accepted card held.
    InsufficientClearance,
}

/// Outcome of an access evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Passage allowed.
    Granted {
        /// Path that granted access.
        via: GrantPath,
    },
    /// Passage refused.
    Denied {
        /// First failed stage.
        reason: DenialReason,
    },
}

impl AccessDecision {
    /// Returns true when access was granted.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Atomic facts the access rules are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPredicate {
    /// Gatekeeper passed classification.
    GatekeeperValid,
    /// Gatekeeper jammed flag is set.
    GatekeeperJammed,
    /// Gatekeeper lockdown flag is set.
    GatekeeperLockedDown,
    /// Actor holds a key card with lockdown bypass.
    HoldsLockDownBypass,
    /// Actor level is at or above gatekeeper clearance.
    ClearanceLevelMet,
    /// Actor holds a key card named on the allow-list.
    HoldsAcceptedKeyCard,
}

/// Classified view of one actor and one gatekeeper.
#[derive(Debug, Clone)]
pub struct AccessSnapshot<'a> {
    /// Valid key cards held by the actor, in discovery order.
    key_cards: Vec<KeyCard<'a>>,
    /// Gatekeeper view when classification succeeded.
    gatekeeper: Option<Gatekeeper<'a>>,
}

impl<'a> AccessSnapshot<'a> {
    /// Creates a snapshot from already classified views.
    #[must_use]
    pub const fn new(key_cards: Vec<KeyCard<'a>>, gatekeeper: Option<Gatekeeper<'a>>) -> Self {
        Self {
            key_cards,
            gatekeeper,
        }
    }

    /// Returns the held key cards.
    #[must_use]
    pub fn key_cards(&self) -> &[KeyCard<'a>] {
        &self.key_cards
    }

    /// Returns the gatekeeper view, if valid.
    #[must_use]
    pub const fn gatekeeper(&self) -> Option<&Gatekeeper<'a>> {
        self.gatekeeper.as_ref()
    }

    /// Returns the highest held level, or `0` when none exceed it.
    #[must_use]
    pub fn actor_level(&self) -> f64 {
        self.key_cards.iter().fold(0.0_f64, |highest, card| highest.max(card.level()))
    }

    /// Returns the gatekeeper clearance, or `0` when invalid.
    #[must_use]
    pub fn clearance(&self) -> f64 {
        self.gatekeeper.map_or(0.0, |gatekeeper| gatekeeper.clearance())
    }
}

impl PredicateEval for AccessPredicate {
    type Context<'a> = AccessSnapshot<'a>;

    fn eval(&self, context: &Self::Context<'_>) -> bool {
        let gatekeeper = context.gatekeeper();
        match self {
            Self::GatekeeperValid => gatekeeper.is_some(),
            Self::GatekeeperJammed => gatekeeper.is_some_and(Gatekeeper::jammed),
            Self::GatekeeperLockedDown => gatekeeper.is_some_and(Gatekeeper::lock_down),
            Self::HoldsLockDownBypass => context.key_cards.iter().any(KeyCard::lock_down_bypass),
            Self::ClearanceLevelMet => context.actor_level() >= context.clearance(),
            Self::HoldsAcceptedKeyCard => gatekeeper.is_some_and(|gatekeeper| {
                context.key_cards.iter().any(|card| gatekeeper.accepts(card.name()))
            }),
        }
    }
}

// ============================================================================
// SECTION: Rules
// ============================================================================

impl AccessRule {
    /// Returns the ordered stages of the rule.
    ///
    /// Access is denied with the reason of the first stage that fails.
    #[must_use]
    pub fn stages(self) -> Vec<(DenialReason, Requirement<AccessPredicate>)> {
        let clearance = Requirement::or(vec![
            Requirement::predicate(AccessPredicate::ClearanceLevelMet),
            Requirement::predicate(AccessPredicate::HoldsAcceptedKeyCard),
        ]);
        match self {
            Self::Base => vec![(DenialReason::InsufficientClearance, clearance)],
            Self::WithOverrides => vec![
                (
                    DenialReason::InvalidGatekeeper,
                    Requirement::predicate(AccessPredicate::GatekeeperValid),
                ),
                (
                    DenialReason::Jammed,
                    !Requirement::predicate(AccessPredicate::GatekeeperJammed),
                ),
                (
                    DenialReason::LockDown,
                    Requirement::or(vec![
                        !Requirement::predicate(AccessPredicate::GatekeeperLockedDown),
                        Requirement::predicate(AccessPredicate::HoldsLockDownBypass),
                    ]),
                ),
                (DenialReason::InsufficientClearance, clearance),
            ],
        }
    }

    /// Evaluates the rule against a snapshot.
    #[must_use]
    pub fn evaluate(self, snapshot: &AccessSnapshot<'_>) -> AccessDecision {
        let mut trace = RecordingTrace::new();
        for (reason, requirement) in self.stages() {
            if !requirement.eval_with_trace(snapshot, &mut trace) {
                return AccessDecision::Denied {
                    reason,
                };
            }
        }
        let via = if trace.result_of(&AccessPredicate::ClearanceLevelMet) == Some(true) {
            GrantPath::ClearanceLevel
        } else {
            GrantPath::AcceptedKeyCard
        };
        AccessDecision::Granted {
            via,
        }
    }
}

// ============================================================================
// SECTION: Controller
// ============================================================================

/// Stateless access evaluator over classifier settings and a diagnostic sink.
#[derive(Clone, Copy)]
pub struct ClearanceController<'a> {
    /// Classification settings.
    settings: &'a ClassifierSettings,
    /// Destination for classification warnings.
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ClearanceController<'a> {
    /// Creates a controller.
    #[must_use]
    pub const fn new(settings: &'a ClassifierSettings, sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            settings,
            sink,
        }
    }

    /// Returns the classifier settings.
    #[must_use]
    pub const fn settings(&self) -> &'a ClassifierSettings {
        self.settings
    }

    // ------------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------------

    /// Returns the key card view, warning when classification fails.
    #[must_use]
    pub fn key_card<'i>(&self, instance: &'i Instance) -> Option<KeyCard<'i>> {
        match classify_key_card(instance, self.settings) {
            Ok(card) => Some(card),
            Err(err) => {
                self.report(ClassifiedSubject::KeyCard, instance, &err);
                None
            }
        }
    }

    /// Returns the gatekeeper view, warning when classification fails.
    #[must_use]
    pub fn gatekeeper<'i>(&self, instance: &'i Instance) -> Option<Gatekeeper<'i>> {
        match classify_gatekeeper(instance, self.settings) {
            Ok(gatekeeper) => Some(gatekeeper),
            Err(err) => {
                self.report(ClassifiedSubject::Gatekeeper, instance, &err);
                None
            }
        }
    }

    /// Returns true when the instance is a valid key card.
    #[must_use]
    pub fn is_key_card(&self, instance: &Instance) -> bool {
        self.key_card(instance).is_some()
    }

    /// Returns true when the instance is a valid gatekeeper.
    #[must_use]
    pub fn is_gatekeeper(&self, instance: &Instance) -> bool {
        self.gatekeeper(instance).is_some()
    }

    // ------------------------------------------------------------------------
    // Actor Queries
    // ------------------------------------------------------------------------

    /// Returns the valid key cards held by the actor, in discovery order.
    ///
    /// An actor without an inventory container holds nothing.
    #[must_use]
    pub fn held_key_cards<'i, A>(&self, actor: &'i A) -> Vec<KeyCard<'i>>
    where
        A: ActorInventory + ?Sized,
    {
        actor
            .inventory()
            .unwrap_or_default()
            .iter()
            .filter_map(|instance| self.key_card(instance))
            .collect()
    }

    /// Returns the highest level among held key cards, or `0`.
    #[must_use]
    pub fn actor_clearance_level<A>(&self, actor: &A) -> f64
    where
        A: ActorInventory + ?Sized,
    {
        AccessSnapshot::new(self.held_key_cards(actor), None).actor_level()
    }

    /// Returns true when any held key card bypasses lockdowns.
    #[must_use]
    pub fn has_lock_down_bypass<A>(&self, actor: &A) -> bool
    where
        A: ActorInventory + ?Sized,
    {
        self.held_key_cards(actor).iter().any(KeyCard::lock_down_bypass)
    }

    // ------------------------------------------------------------------------
    // Gatekeeper Queries
    // ------------------------------------------------------------------------

    /// Returns the gatekeeper clearance, or `0` when it is invalid.
    #[must_use]
    pub fn gatekeeper_clearance_level(&self, gatekeeper: &Instance) -> f64 {
        self.gatekeeper(gatekeeper).map_or(0.0, |view| view.clearance())
    }

    /// Returns the accepted key card names, or none when it is invalid.
    #[must_use]
    pub fn gatekeeper_key_card_names(&self, gatekeeper: &Instance) -> Vec<String> {
        self.gatekeeper(gatekeeper)
            .map(|view| view.accepted_names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Returns the open flag, or false when it is invalid or absent.
    #[must_use]
    pub fn is_gatekeeper_open(&self, gatekeeper: &Instance) -> bool {
        self.gatekeeper(gatekeeper).is_some_and(|view| view.open())
    }

    // ------------------------------------------------------------------------
    // Access Decisions
    // ------------------------------------------------------------------------

    /// Classifies the actor and gatekeeper into a snapshot.
    #[must_use]
    pub fn snapshot<'i, A>(&self, actor: &'i A, gatekeeper: &'i Instance) -> AccessSnapshot<'i>
    where
        A: ActorInventory + ?Sized,
    {
        AccessSnapshot::new(self.held_key_cards(actor), self.gatekeeper(gatekeeper))
    }

    /// Evaluates the rule for the actor at the gatekeeper.
    #[must_use]
    pub fn evaluate_access<A>(
        &self,
        actor: &A,
        gatekeeper: &Instance,
        rule: AccessRule,
    ) -> AccessDecision
    where
        A: ActorInventory + ?Sized,
    {
        rule.evaluate(&self.snapshot(actor, gatekeeper))
    }

    /// Returns true when the actor's level meets the clearance or the actor
    /// holds an accepted key card. Gatekeeper state flags are ignored.
    #[must_use]
    pub fn has_clearance<A>(&self, actor: &A, gatekeeper: &Instance) -> bool
    where
        A: ActorInventory + ?Sized,
    {
        self.evaluate_access(actor, gatekeeper, AccessRule::Base).is_granted()
    }

    /// Like [`Self::has_clearance`], but invalid or jammed gatekeepers deny,
    /// and locked down gatekeepers deny unless a bypass card is held.
    #[must_use]
    pub fn has_clearance_with_overrides<A>(&self, actor: &A, gatekeeper: &Instance) -> bool
    where
        A: ActorInventory + ?Sized,
    {
        self.evaluate_access(actor, gatekeeper, AccessRule::WithOverrides).is_granted()
    }

    /// Sends a classification warning to the sink.
    fn report(&self, subject: ClassifiedSubject, instance: &Instance, err: &ClassificationError) {
        let message = format!("Provided {} '{instance}' {err}", subject.label());
        self.sink.warn(&ClassificationWarning::new(subject, instance.name(), err.check(), message));
    }
}
