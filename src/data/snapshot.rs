//! Database Snapshot
//!
//! Loads and caches the host database tables the enrichment pass reads.
//! Everything here is loaded once before the pass runs and treated as
//! immutable afterwards.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::handbook::Handbook;
use super::hideout::{HideoutArea, HideoutProductionData, HideoutSettings};
use super::item_def::ItemTemplate;
use super::quest::Quest;
use super::trader::{Assort, Trader, TraderBase};

/// Armor material coefficients from the global game configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArmorMaterial {
    #[serde(rename = "Destructibility")]
    pub destructibility: Option<f64>,
    #[serde(rename = "MinRepairDegradation")]
    pub min_repair_degradation: Option<f64>,
    #[serde(rename = "MaxRepairDegradation")]
    pub max_repair_degradation: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Globals {
    #[serde(default)]
    config: GlobalsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GlobalsConfig {
    #[serde(rename = "ArmorMaterials", default)]
    armor_materials: HashMap<String, ArmorMaterial>,
}

/// The full in-memory dataset handed to the enrichment pass.
///
/// Ordered maps keep every scan deterministic, so repeated passes over the
/// same snapshot render identical strings.
#[derive(Debug, Clone, Default)]
pub struct DatabaseSnapshot {
    pub items: BTreeMap<String, ItemTemplate>,
    pub handbook: Handbook,
    /// Live flea-market prices by item id.
    pub prices: HashMap<String, f64>,
    pub quests: BTreeMap<String, Quest>,
    pub traders: BTreeMap<String, Trader>,
    pub hideout_areas: Vec<HideoutArea>,
    pub production: HideoutProductionData,
    pub hideout_settings: HideoutSettings,
    pub armor_materials: HashMap<String, ArmorMaterial>,
    /// Per-language string tables; the keys define the server-supported
    /// locale set.
    pub locales: BTreeMap<String, HashMap<String, String>>,
}

impl DatabaseSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every table from a database directory.
    ///
    /// Layout: `items.json`, `handbook.json`, `prices.json`, `quests.json`,
    /// `globals.json`, `traders/<id>/{base,assort}.json`,
    /// `hideout/{areas,production,settings}.json`,
    /// `locales/global/<lang>.json`.
    pub fn load_from_directory(dir: &Path) -> Result<Self, String> {
        let mut snapshot = Self::new();

        snapshot.items = read_json(&dir.join("items.json"))?;
        snapshot.handbook = read_json(&dir.join("handbook.json"))?;
        info!(
            "Loaded {} item templates, {} handbook entries",
            snapshot.items.len(),
            snapshot.handbook.items.len()
        );

        snapshot.prices = read_json_or_default(&dir.join("prices.json"));
        snapshot.quests = read_json_or_default(&dir.join("quests.json"));
        info!(
            "Loaded {} flea prices, {} quests",
            snapshot.prices.len(),
            snapshot.quests.len()
        );

        snapshot.load_traders(&dir.join("traders"))?;
        snapshot.load_hideout(&dir.join("hideout"));
        snapshot.load_locales(&dir.join("locales").join("global"))?;

        let globals: Globals = read_json_or_default(&dir.join("globals.json"));
        snapshot.armor_materials = globals.config.armor_materials;

        Ok(snapshot)
    }

    fn load_traders(&mut self, traders_dir: &Path) -> Result<(), String> {
        if !traders_dir.exists() {
            warn!("Trader directory does not exist: {:?}", traders_dir);
            return Ok(());
        }

        let entries = std::fs::read_dir(traders_dir)
            .map_err(|e| format!("Failed to read traders directory: {}", e))?;

        for entry in entries {
            let entry = entry.map_err(|e| format!("Failed to read entry: {}", e))?;
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }

            let base: TraderBase = read_json(&path.join("base.json"))?;
            let assort: Assort = read_json_or_default(&path.join("assort.json"));
            let trader_id = base.id.clone();

            if trader_id.is_empty() {
                warn!("Trader in {:?} has no id, skipping", path);
                continue;
            }
            if self.traders.contains_key(&trader_id) {
                warn!("Duplicate trader id '{}' in {:?}, overwriting", trader_id, path);
            }

            self.traders.insert(trader_id, Trader { base, assort });
        }

        info!("Loaded {} traders", self.traders.len());
        Ok(())
    }

    fn load_hideout(&mut self, hideout_dir: &Path) {
        if !hideout_dir.exists() {
            warn!("Hideout directory does not exist: {:?}", hideout_dir);
            return;
        }

        self.hideout_areas = read_json_or_default(&hideout_dir.join("areas.json"));
        self.production = read_json_or_default(&hideout_dir.join("production.json"));
        self.hideout_settings = read_json_or_default(&hideout_dir.join("settings.json"));

        info!(
            "Loaded {} hideout areas, {} production recipes",
            self.hideout_areas.len(),
            self.production.recipes.len()
        );
    }

    fn load_locales(&mut self, locales_dir: &Path) -> Result<(), String> {
        let entries = std::fs::read_dir(locales_dir)
            .map_err(|e| format!("Failed to read locales directory {:?}: {}", locales_dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| format!("Failed to read entry: {}", e))?;
            let path = entry.path();

            if path.extension().map_or(false, |ext| ext == "json") {
                let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let table: HashMap<String, String> = read_json(&path)?;
                self.locales.insert(lang.to_string(), table);
            }
        }

        if !self.locales.contains_key("en") {
            return Err(format!("No English locale table in {:?}", locales_dir));
        }

        info!("Loaded {} locale tables", self.locales.len());
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse {:?}: {}", path, e))
}

fn read_json_or_default<T: serde::de::DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        warn!("Optional table {:?} not found, using empty default", path);
        return T::default();
    }

    match read_json(path) {
        Ok(value) => value,
        Err(e) => {
            warn!("{}", e);
            T::default()
        }
    }
}
