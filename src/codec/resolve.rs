//! Polymorphic resolver: discriminant string -> concrete model-record kind.
//!
//! Dispatch is an ordered, first-match rule table over substrings of the
//! discriminant. The order is load-bearing: the mobility rules must win
//! over everything else (a mobility discriminant that matches neither
//! mobility subtype stays generic rather than falling through to later
//! rules), and the peripheral sub-kinds must be tested before the generic
//! peripheral row. Keeping the rules as data keeps the dispatch auditable
//! and testable in isolation.

use crate::model::ModelKind;

/// One dispatch rule. A rule matches when the discriminant equals `exact`
/// (if set), or contains every substring in `all` and, when `any` is
/// non-empty, at least one substring in `any`.
struct DispatchRule {
    exact: Option<&'static str>,
    all: &'static [&'static str],
    any: &'static [&'static str],
    kind: ModelKind,
}

const fn contains(all: &'static [&'static str], kind: ModelKind) -> DispatchRule {
    DispatchRule {
        exact: None,
        all,
        any: &[],
        kind,
    }
}

const RULES: &[DispatchRule] = &[
    contains(
        &["MobilityModel", "ConstantPosition"],
        ModelKind::ConstantPositionMobility,
    ),
    contains(
        &["MobilityModel", "ParametricSpeed"],
        ModelKind::ParametricSpeedDroneMobility,
    ),
    // Mobility fall-through: an unrecognized mobility model is generic and
    // must not reach the rules below.
    contains(&["MobilityModel"], ModelKind::Generic),
    contains(&["EnergySource"], ModelKind::LiIonEnergySource),
    contains(&["Mechanics"], ModelKind::DroneMechanics),
    DispatchRule {
        exact: Some("ns3::Drone"),
        all: &[],
        any: &[],
        kind: ModelKind::DroneMechanics,
    },
    contains(&["WifiManager"], ModelKind::RemoteStationManager),
    DispatchRule {
        exact: None,
        all: &[],
        any: &["Application", "UdpEcho"],
        kind: ModelKind::Application,
    },
    DispatchRule {
        exact: None,
        all: &["Storage"],
        any: &["Peripheral", "Irs"],
        kind: ModelKind::StoragePeripheral,
    },
    DispatchRule {
        exact: None,
        all: &["Input"],
        any: &["Peripheral", "Irs"],
        kind: ModelKind::InputPeripheral,
    },
    contains(&["Irs"], ModelKind::IrsPeripheral),
    // Reachable only for a discriminant containing "Peripheral" but none
    // of Storage/Input/Irs; the generic peripheral still binds its two
    // declared fields and keeps the rest in the open mapping.
    contains(&["Peripheral"], ModelKind::Peripheral),
];

impl DispatchRule {
    fn matches(&self, discriminant: &str) -> bool {
        if let Some(exact) = self.exact {
            return discriminant == exact;
        }
        self.all.iter().all(|s| discriminant.contains(s))
            && (self.any.is_empty() || self.any.iter().any(|s| discriminant.contains(s)))
    }
}

/// Choose the model-record kind for a discriminant. Never fails: an
/// unrecognized discriminant resolves to the lossless generic kind.
pub fn resolve_kind(discriminant: &str) -> ModelKind {
    for rule in RULES {
        if rule.matches(discriminant) {
            return rule.kind;
        }
    }
    log::debug!(
        "no dispatch rule matched discriminant {:?}; keeping generic model",
        discriminant
    );
    ModelKind::Generic
}
