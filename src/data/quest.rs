//! Quest Structures
//!
//! Quests are scanned, never mutated: finish conditions tell us which
//! items must be found or handed over, reward buckets tell us which shop
//! offers a quest unlocks.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Quest {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "QuestName")]
    pub name: Option<String>,
    /// Quest giver.
    #[serde(rename = "traderId", default)]
    pub trader_id: String,
    #[serde(default)]
    pub conditions: QuestConditions,
    /// Reward buckets keyed by trigger stage ("Started", "Success", ...).
    pub rewards: Option<HashMap<String, Vec<QuestReward>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestConditions {
    #[serde(rename = "AvailableForFinish", default)]
    pub available_for_finish: Vec<QuestCondition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestCondition {
    #[serde(rename = "conditionType")]
    pub condition_type: Option<String>,
    pub target: Option<TargetList>,
    /// Required count.
    pub value: Option<f64>,
    #[serde(rename = "onlyFoundInRaid")]
    pub only_found_in_raid: Option<bool>,
}

impl QuestCondition {
    /// Handover and find conditions are the ones that consume items.
    pub fn consumes_items(&self) -> bool {
        matches!(self.condition_type.as_deref(), Some("HandoverItem") | Some("FindItem"))
    }
}

/// Condition targets appear as either a single id or a list of ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TargetList {
    One(String),
    Many(Vec<String>),
}

impl TargetList {
    pub fn contains(&self, item_id: &str) -> bool {
        match self {
            TargetList::One(id) => id == item_id,
            TargetList::Many(ids) => ids.iter().any(|id| id == item_id),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestReward {
    /// Reward discriminator; only "AssortmentUnlock" matters here.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Instance id of the root granted item.
    pub target: Option<String>,
    /// Trader whose assortment the reward unlocks.
    #[serde(rename = "traderId")]
    pub trader_id: Option<String>,
    #[serde(rename = "loyaltyLevel")]
    pub loyalty_level: Option<u32>,
    #[serde(default)]
    pub items: Vec<RewardItem>,
}

impl QuestReward {
    pub fn is_assortment_unlock(&self) -> bool {
        self.kind.as_deref() == Some("AssortmentUnlock")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewardItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_tpl", default)]
    pub tpl: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quest() {
        let json = r#"{
            "_id": "5936d90786f7742b1420ba5b",
            "QuestName": "Debut",
            "traderId": "54cb57776803fa99248b456e",
            "conditions": {
                "AvailableForFinish": [{
                    "conditionType": "HandoverItem",
                    "target": ["5447a9cd4bdc2dbd208b4567"],
                    "value": 2,
                    "onlyFoundInRaid": true
                }]
            },
            "rewards": {
                "Started": [],
                "Success": [{
                    "type": "AssortmentUnlock",
                    "target": "root1",
                    "traderId": "58330581ace78e27b8b10cee",
                    "loyaltyLevel": 1,
                    "items": [{ "_id": "root1", "_tpl": "5447a9cd4bdc2dbd208b4567" }]
                }]
            }
        }"#;

        let quest: Quest = serde_json::from_str(json).unwrap();
        let condition = &quest.conditions.available_for_finish[0];
        assert!(condition.consumes_items());
        assert!(condition.target.as_ref().unwrap().contains("5447a9cd4bdc2dbd208b4567"));
        assert_eq!(condition.only_found_in_raid, Some(true));

        let success = &quest.rewards.as_ref().unwrap()["Success"];
        assert!(success[0].is_assortment_unlock());
    }

    #[test]
    fn test_target_list_single_string() {
        let condition: QuestCondition = serde_json::from_str(
            r#"{ "conditionType": "FindItem", "target": "5447a9cd4bdc2dbd208b4567" }"#,
        )
        .unwrap();
        assert!(condition.target.unwrap().contains("5447a9cd4bdc2dbd208b4567"));
    }
}
