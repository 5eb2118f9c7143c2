//! Hideout Structures
//!
//! Upgrade areas with staged requirements, production recipes, and the
//! handful of global settings the recipe math needs.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HideoutArea {
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Area type discriminator, also the key of the locale display name.
    #[serde(rename = "type")]
    pub area_type: Option<i64>,
    /// Keyed by stage number rendered as a string.
    pub stages: Option<HashMap<String, Stage>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stage {
    #[serde(default)]
    pub requirements: Vec<StageRequirement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StageRequirement {
    #[serde(rename = "templateId")]
    pub template_id: Option<String>,
    pub count: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HideoutProductionData {
    #[serde(default)]
    pub recipes: Vec<HideoutProduction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HideoutProduction {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "endProduct", default)]
    pub end_product: String,
    /// Output count per craft.
    pub count: Option<f64>,
    /// Seconds per craft.
    #[serde(rename = "productionTime")]
    pub production_time: Option<f64>,
    #[serde(rename = "areaType")]
    pub area_type: Option<i64>,
    pub locked: Option<bool>,
    #[serde(default)]
    pub requirements: Vec<ProductionRequirement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductionRequirement {
    /// "Area" | "Item" | "Resource" | "QuestComplete" | "Tool".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "templateId")]
    pub template_id: Option<String>,
    pub count: Option<f64>,
    /// Consumed units for Resource requirements, out of the source item's
    /// total pool.
    pub resource: Option<f64>,
    #[serde(rename = "questId")]
    pub quest_id: Option<String>,
    #[serde(rename = "areaType")]
    pub area_type: Option<i64>,
    #[serde(rename = "requiredLevel")]
    pub required_level: Option<u32>,
}

impl HideoutProduction {
    /// A locked recipe whose every requirement is quest-gated can never be
    /// unlocked through play; the scanners skip it.
    pub fn is_permanently_locked(&self) -> bool {
        self.locked.unwrap_or(false)
            && !self.requirements.is_empty()
            && self.requirements.iter().all(|r| r.quest_id.is_some())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HideoutSettings {
    #[serde(rename = "gpuBoostRate")]
    pub gpu_boost_rate: Option<f64>,
}
