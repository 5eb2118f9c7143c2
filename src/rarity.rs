//! Rarity Classifier
//!
//! Combines barter, ban, gear, and quest signals into one ordinal tier.
//! Classification is an ordered list of overwrite rules: each rule either
//! replaces the running value or passes, and the last applicable rule
//! wins. A zero result means no rule resolved the item; the value-based
//! fallback ladder may then bucket it by price per slot.

use crate::config::TierThresholds;

/// Display tiers, ordered low to high scarcity. Ordinals above
/// `Custom2`'s stay `Custom2`; explicit overrides use the top two slots
/// to escape the heuristic ladder entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Common = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Uber = 5,
    Unobtainium = 6,
    /// Reserved for flea-banned items.
    Overpowered = 7,
    Custom = 8,
    Custom2 = 9,
}

impl Tier {
    /// Map a computed ordinal onto the tier ladder. Zero (and anything
    /// negative) means unresolved.
    pub fn from_ordinal(ordinal: i64) -> Option<Tier> {
        match ordinal {
            i64::MIN..=0 => None,
            1 => Some(Tier::Common),
            2 => Some(Tier::Rare),
            3 => Some(Tier::Epic),
            4 => Some(Tier::Legendary),
            5 => Some(Tier::Uber),
            6 => Some(Tier::Unobtainium),
            7 => Some(Tier::Overpowered),
            8 => Some(Tier::Custom),
            _ => Some(Tier::Custom2),
        }
    }

    /// Key into the translation bundle and the color table.
    pub fn name_key(&self) -> &'static str {
        match self {
            Tier::Common => "COMMON",
            Tier::Rare => "RARE",
            Tier::Epic => "EPIC",
            Tier::Legendary => "LEGENDARY",
            Tier::Uber => "UBER",
            Tier::Unobtainium => "UNOBTAINIUM",
            Tier::Overpowered => "OVERPOWERED",
            Tier::Custom => "CUSTOM",
            Tier::Custom2 => "CUSTOM2",
        }
    }
}

/// Everything the rule chain looks at, computed per item by the pass.
#[derive(Debug, Clone, Default)]
pub struct RaritySignals {
    /// Per-offer contributions from the barter resolver; never empty.
    pub barter_samples: Vec<i64>,
    /// Flea-banned via the static list or the sellable flag.
    pub banned: bool,
    /// Weapon/armor/ammo/mod-class item with no barter offers and no ban.
    pub gear_without_barter: bool,
    /// Quest-unlock edge without a nested ∈ marker, with thin barter
    /// evidence.
    pub quest_unlock_bump: bool,
    /// Replacement ordinal derived from an ammo box's contained round,
    /// consulted only while the running value is unresolved or banned.
    pub ammo_box_rederived: Option<i64>,
    /// Explicit per-item override from configuration; beats everything.
    pub custom_override: Option<i64>,
}

type Rule = fn(&RaritySignals, i64) -> Option<i64>;

/// Precedence order; later rules overwrite earlier results.
const RULES: &[Rule] = &[
    rule_barter_floor,
    rule_flea_ban,
    rule_gear_without_barter,
    rule_quest_unlock,
    rule_ammo_box,
    rule_custom_override,
];

pub fn classify(signals: &RaritySignals) -> i64 {
    RULES
        .iter()
        .fold(0, |current, rule| rule(signals, current).unwrap_or(current))
}

fn rule_barter_floor(signals: &RaritySignals, _current: i64) -> Option<i64> {
    signals.barter_samples.iter().min().copied()
}

fn rule_flea_ban(signals: &RaritySignals, _current: i64) -> Option<i64> {
    signals.banned.then_some(Tier::Overpowered as i64)
}

fn rule_gear_without_barter(signals: &RaritySignals, _current: i64) -> Option<i64> {
    signals.gear_without_barter.then_some(Tier::Unobtainium as i64)
}

fn rule_quest_unlock(signals: &RaritySignals, current: i64) -> Option<i64> {
    signals.quest_unlock_bump.then_some(current + 2)
}

fn rule_ammo_box(signals: &RaritySignals, current: i64) -> Option<i64> {
    if current == 0 || current == Tier::Overpowered as i64 {
        signals.ammo_box_rederived
    } else {
        None
    }
}

fn rule_custom_override(signals: &RaritySignals, _current: i64) -> Option<i64> {
    signals.custom_override
}

/// Bucket a slot-normalized value against the configured ascending
/// cutoffs. Anything above the top cutoff is Unobtainium.
pub fn value_fallback_tier(value: f64, thresholds: &TierThresholds) -> Tier {
    if value < thresholds.common {
        Tier::Common
    } else if value < thresholds.rare {
        Tier::Rare
    } else if value < thresholds.epic {
        Tier::Epic
    } else if value < thresholds.legendary {
        Tier::Legendary
    } else if value < thresholds.uber {
        Tier::Uber
    } else {
        Tier::Unobtainium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(samples: &[i64]) -> RaritySignals {
        RaritySignals { barter_samples: samples.to_vec(), ..Default::default() }
    }

    #[test]
    fn test_base_is_min_of_samples() {
        assert_eq!(classify(&signals(&[3, 1, 4])), 1);
        assert_eq!(classify(&signals(&[0])), 0);
    }

    #[test]
    fn test_ban_forces_overpowered() {
        let mut s = signals(&[1]);
        s.banned = true;
        assert_eq!(classify(&s), 7);
    }

    #[test]
    fn test_gear_without_barter() {
        let mut s = signals(&[0]);
        s.gear_without_barter = true;
        assert_eq!(classify(&s), 6);
    }

    #[test]
    fn test_quest_unlock_bumps_by_two() {
        let mut s = signals(&[2]);
        s.quest_unlock_bump = true;
        assert_eq!(classify(&s), 4);

        // The bump stacks on a ban, escaping into the override band.
        s.banned = true;
        assert_eq!(classify(&s), 9);
    }

    #[test]
    fn test_ammo_box_rederivation_only_when_unresolved_or_banned() {
        let mut s = signals(&[0]);
        s.ammo_box_rederived = Some(3);
        assert_eq!(classify(&s), 3);

        s.banned = true;
        assert_eq!(classify(&s), 3);

        // A resolved tier is left alone.
        let mut resolved = signals(&[2]);
        resolved.ammo_box_rederived = Some(5);
        assert_eq!(classify(&resolved), 2);
    }

    #[test]
    fn test_custom_override_wins_outright() {
        let mut s = signals(&[1]);
        s.banned = true;
        s.custom_override = Some(8);
        assert_eq!(classify(&s), 8);
    }

    #[test]
    fn test_tier_mapping() {
        assert_eq!(Tier::from_ordinal(0), None);
        assert_eq!(Tier::from_ordinal(-2), None);
        assert_eq!(Tier::from_ordinal(1), Some(Tier::Common));
        assert_eq!(Tier::from_ordinal(7), Some(Tier::Overpowered));
        assert_eq!(Tier::from_ordinal(9), Some(Tier::Custom2));
        assert_eq!(Tier::from_ordinal(14), Some(Tier::Custom2));
    }

    #[test]
    fn test_value_fallback_ladder() {
        let thresholds = TierThresholds::default();
        assert_eq!(value_fallback_tier(0.0, &thresholds), Tier::Common);
        assert_eq!(value_fallback_tier(30_000.0, &thresholds), Tier::Rare);
        assert_eq!(value_fallback_tier(99_999.0, &thresholds), Tier::Epic);
        assert_eq!(value_fallback_tier(150_000.0, &thresholds), Tier::Legendary);
        assert_eq!(value_fallback_tier(250_000.0, &thresholds), Tier::Uber);
        assert_eq!(value_fallback_tier(1_000_000.0, &thresholds), Tier::Unobtainium);
    }
}
