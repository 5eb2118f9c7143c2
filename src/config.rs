//! Mod Configuration
//!
//! Loaded from `config/config.toml`. Every section has serde defaults so a
//! partial file works; the shipped file spells everything out. The
//! enrichment pass treats all of this as opaque lookup data.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

fn default_user_locale() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    #[serde(default = "default_user_locale")]
    pub user_locale: String,
    pub hide_language_alert: bool,
    pub delay: DelayConfig,
    pub static_flea_ban_list: Toggle,
    pub bullet_stats_in_name: Toggle,
    pub rarity_recolor: RarityRecolorConfig,
    /// Parent category ids that never get recolored.
    pub rarity_recolor_blacklist: Vec<String>,
    pub armor_info: ArmorInfoConfig,
    pub advanced_ammo_info: Toggle,
    pub container_info: Toggle,
    pub headset_info: Toggle,
    pub production_info: Toggle,
    pub crafting_material_info: Toggle,
    pub barter_info: Toggle,
    pub barter_resource_info: Toggle,
    pub quest_info: QuestInfoConfig,
    pub hideout_info: Toggle,
    pub price_info: PriceInfoConfig,
    pub mark_valuable_items: MarkValuableConfig,
    /// Compensates for overhauls that multiply ammo stack sizes: scales the
    /// slot density back up before the valuable-mark comparison.
    pub ammo_stack_mark_fix: Toggle,
    pub tiers: TierThresholds,
    /// Hex color per tier name.
    pub tier_colors: BTreeMap<String, String>,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            user_locale: default_user_locale(),
            hide_language_alert: false,
            delay: DelayConfig::default(),
            static_flea_ban_list: Toggle { enabled: true },
            bullet_stats_in_name: Toggle { enabled: true },
            rarity_recolor: RarityRecolorConfig::default(),
            rarity_recolor_blacklist: Vec::new(),
            armor_info: ArmorInfoConfig::default(),
            advanced_ammo_info: Toggle { enabled: false },
            container_info: Toggle { enabled: true },
            headset_info: Toggle { enabled: true },
            production_info: Toggle { enabled: true },
            crafting_material_info: Toggle { enabled: true },
            barter_info: Toggle { enabled: true },
            barter_resource_info: Toggle { enabled: true },
            quest_info: QuestInfoConfig::default(),
            hideout_info: Toggle { enabled: true },
            price_info: PriceInfoConfig::default(),
            mark_valuable_items: MarkValuableConfig::default(),
            ammo_stack_mark_fix: Toggle { enabled: false },
            tiers: TierThresholds::default(),
            tier_colors: default_tier_colors(),
        }
    }
}

impl ModConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse {:?}: {}", path, e))
    }

    pub fn tier_color(&self, tier_name: &str) -> Option<&str> {
        self.tier_colors.get(tier_name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub enabled: bool,
    pub seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RarityRecolorConfig {
    pub enabled: bool,
    pub add_tier_name_to_prices_info: bool,
    pub fallback_value_based_recolor: bool,
    pub bypass_ammo_recolor: bool,
    pub bypass_keys_recolor: bool,
    /// Explicit per-item tier overrides; these win over every heuristic.
    pub custom_rarity: BTreeMap<String, i64>,
}

impl Default for RarityRecolorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            add_tier_name_to_prices_info: true,
            fallback_value_based_recolor: true,
            bypass_ammo_recolor: false,
            bypass_keys_recolor: false,
            custom_rarity: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArmorInfoConfig {
    pub enabled: bool,
    pub add_armor_class_info: bool,
    pub add_armor_to_name: bool,
    pub add_armor_to_short_name: bool,
}

impl Default for ArmorInfoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            add_armor_class_info: true,
            add_armor_to_name: true,
            add_armor_to_short_name: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuestInfoConfig {
    pub enabled: bool,
    /// Append the found-in-raid check mark to item names.
    pub fir_in_name: bool,
}

impl Default for QuestInfoConfig {
    fn default() -> Self {
        Self { enabled: true, fir_in_name: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PriceInfoConfig {
    pub enabled: bool,
    pub add_flea_price: bool,
    pub add_item_value: bool,
}

impl Default for PriceInfoConfig {
    fn default() -> Self {
        Self { enabled: true, add_flea_price: true, add_item_value: false }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkValuableConfig {
    pub enabled: bool,
    pub add_to_name: bool,
    pub add_to_short_name: bool,
    /// Some client fonts cannot render the default glyphs.
    pub use_alt_value_mark: bool,
    pub always_mark_banned_items: bool,
    pub best_value_mark: String,
    pub good_value_mark: String,
    pub alt_best_value_mark: String,
    pub alt_good_value_mark: String,
    pub trader_slot_value_threshold_best: f64,
    pub trader_slot_value_threshold_good: f64,
    pub flea_slot_value_threshold_best: f64,
    pub flea_slot_value_threshold_good: f64,
}

impl Default for MarkValuableConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            add_to_name: false,
            add_to_short_name: true,
            use_alt_value_mark: false,
            always_mark_banned_items: false,
            best_value_mark: "💰".to_string(),
            good_value_mark: "💲".to_string(),
            alt_best_value_mark: "$$$".to_string(),
            alt_good_value_mark: "$$".to_string(),
            trader_slot_value_threshold_best: 20000.0,
            trader_slot_value_threshold_good: 10000.0,
            flea_slot_value_threshold_best: 40000.0,
            flea_slot_value_threshold_good: 20000.0,
        }
    }
}

/// Ascending cutoffs for the value-based tier fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub common: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
    pub uber: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            common: 25_000.0,
            rare: 50_000.0,
            epic: 100_000.0,
            legendary: 200_000.0,
            uber: 400_000.0,
        }
    }
}

fn default_tier_colors() -> BTreeMap<String, String> {
    [
        ("COMMON", "#5d5d5d"),
        ("RARE", "#3d6e8a"),
        ("EPIC", "#8a5dab"),
        ("LEGENDARY", "#c28f2c"),
        ("UBER", "#b73a3a"),
        ("UNOBTAINIUM", "#13b4a7"),
        ("OVERPOWERED", "#ff3333"),
        ("CUSTOM", "#7fff00"),
        ("CUSTOM2", "#ff00ff"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ModConfig::default();
        assert_eq!(config.user_locale, "en");
        assert!(config.rarity_recolor.enabled);
        assert!(!config.delay.enabled);
        assert_eq!(config.tier_color("OVERPOWERED"), Some("#ff3333"));
        assert!(config.tiers.common < config.tiers.uber);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let toml_content = r#"
user_locale = "ru"

[delay]
enabled = true
seconds = 20

[rarity_recolor]
enabled = true
custom_rarity = { "590c5d4b86f774784e1b9c45" = 8 }

[mark_valuable_items]
trader_slot_value_threshold_best = 50000.0
"#;

        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = ModConfig::load(&path).unwrap();
        assert_eq!(config.user_locale, "ru");
        assert!(config.delay.enabled);
        assert_eq!(config.delay.seconds, 20);
        assert_eq!(config.rarity_recolor.custom_rarity["590c5d4b86f774784e1b9c45"], 8);
        assert_eq!(config.mark_valuable_items.trader_slot_value_threshold_best, 50000.0);
        // Untouched sections fall back to defaults.
        assert!(config.price_info.enabled);
    }
}
