//! Reference Index
//!
//! Lookup structures built once over the snapshot so the rest of the pass
//! never rescans raw collections: item and handbook access by id, the
//! fixed vendor priority list, base-class membership, currency conversion
//! ratios, and the quest-unlock reverse map.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::warn;

use crate::data::ids;
use crate::data::snapshot::DatabaseSnapshot;
use crate::data::trader::Trader;
use crate::data::{HandbookEntry, ItemTemplate};
use crate::error::EnrichError;
use crate::locale::Field;

pub struct RefIndex<'a> {
    pub snapshot: &'a DatabaseSnapshot,
    handbook_by_id: HashMap<&'a str, &'a HandbookEntry>,
    vendor_priority: Vec<&'a Trader>,
    /// Roubles per euro / per dollar, read from the handbook at startup.
    pub euro_ratio: f64,
    pub dollar_ratio: f64,
    /// Quest id -> reward target instance -> granted template ids, for
    /// quests carrying more than one assortment unlock.
    pub quest_unlocks: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl<'a> RefIndex<'a> {
    pub fn new(snapshot: &'a DatabaseSnapshot) -> Result<Self, EnrichError> {
        let handbook_by_id: HashMap<&str, &HandbookEntry> =
            snapshot.handbook.items.iter().map(|e| (e.id.as_str(), e)).collect();

        let currency_ratio = |id: &str| -> Result<f64, EnrichError> {
            handbook_by_id
                .get(id)
                .and_then(|e| e.price)
                .ok_or_else(|| EnrichError::MissingCurrencyPrice(id.to_string()))
        };
        let euro_ratio = currency_ratio(ids::EURO)?;
        let dollar_ratio = currency_ratio(ids::DOLLAR)?;

        let mut vendor_priority = Vec::new();
        for vendor_id in ids::VENDOR_PRIORITY {
            match snapshot.traders.get(vendor_id) {
                Some(trader) => vendor_priority.push(trader),
                None => warn!("Priority vendor {} is not in the dataset", vendor_id),
            }
        }

        Ok(Self {
            snapshot,
            handbook_by_id,
            vendor_priority,
            euro_ratio,
            dollar_ratio,
            quest_unlocks: build_quest_unlock_map(snapshot),
        })
    }

    pub fn item(&self, item_id: &str) -> Option<&'a ItemTemplate> {
        self.snapshot.items.get(item_id)
    }

    pub fn handbook_entry(&self, item_id: &str) -> Option<&'a HandbookEntry> {
        self.handbook_by_id.get(item_id).copied()
    }

    /// NPC vendors that buy items, in fixed priority order.
    pub fn vendors(&self) -> &[&'a Trader] {
        &self.vendor_priority
    }

    pub fn locale_get(&self, lang: &str, key: &str) -> Option<&'a str> {
        self.snapshot.locales.get(lang)?.get(key).map(String::as_str)
    }

    /// Locales the server ships string tables for.
    pub fn supported_locales(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.snapshot.locales.keys().map(String::as_str)
    }

    /// A locale string with the standard fallback chain: requested locale,
    /// then English, then the raw item property, then a fixed sentinel. A
    /// missing locale table short-circuits to a diagnostic value.
    fn item_field(&self, item_id: &str, field: Field, lang: &str) -> String {
        if !self.snapshot.locales.contains_key(lang) {
            return format!("{} lookup failed", field.key_suffix());
        }

        let key = field.locale_key(item_id);
        for table_lang in [lang, "en"] {
            if let Some(value) = self.locale_get(table_lang, &key) {
                if !value.is_empty() {
                    return value.to_string();
                }
            }
        }

        let props = self.item(item_id).map(|i| &i.props);
        let raw = match field {
            Field::Name => props.and_then(|p| p.name.clone()),
            Field::ShortName => props.and_then(|p| p.short_name.clone()),
            Field::Description => props.and_then(|p| p.description.clone()),
        };
        raw.unwrap_or_else(|| format!("null {}", field.key_suffix()))
    }

    pub fn item_name(&self, item_id: &str, lang: &str) -> String {
        self.item_field(item_id, Field::Name, lang)
    }

    pub fn item_short_name(&self, item_id: &str, lang: &str) -> String {
        self.item_field(item_id, Field::ShortName, lang)
    }

    pub fn item_description(&self, item_id: &str, lang: &str) -> String {
        self.item_field(item_id, Field::Description, lang)
    }

    /// Trader display name, falling back to the raw id.
    pub fn trader_nickname(&self, lang: &str, trader_id: &str) -> String {
        let key = format!("{} Nickname", trader_id);
        self.locale_get(lang, &key)
            .or_else(|| self.locale_get("en", &key))
            .map(str::to_string)
            .unwrap_or_else(|| trader_id.to_string())
    }

    /// Hideout area display name. Missing on every locale means the
    /// dataset is incomplete.
    pub fn area_name(&self, area_type: i64, lang: &str) -> Result<String, EnrichError> {
        let key = format!("hideout_area_{}_name", area_type);
        self.locale_get(lang, &key)
            .or_else(|| self.locale_get("en", &key))
            .map(str::to_string)
            .ok_or(EnrichError::MissingAreaName(area_type))
    }

    /// Every ancestor category id of an item, walking parent links through
    /// node templates.
    pub fn base_classes(&self, item_id: &str) -> HashSet<&'a str> {
        let mut classes = HashSet::new();
        let mut current = self.item(item_id);

        while let Some(item) = current {
            if item.parent.is_empty() || !classes.insert(item.parent.as_str()) {
                break;
            }
            current = self.item(&item.parent);
        }
        classes
    }

    pub fn is_of_base_class(&self, item_id: &str, class_id: &str) -> bool {
        self.base_classes(item_id).contains(class_id)
    }
}

/// Reverse map of quest assortment unlocks, recorded only for quests with
/// more than one unlock reward. Detects shop items that are quest-locked.
fn build_quest_unlock_map(
    snapshot: &DatabaseSnapshot,
) -> BTreeMap<String, BTreeMap<String, Vec<String>>> {
    let mut map = BTreeMap::new();

    for (quest_id, quest) in &snapshot.quests {
        let Some(rewards) = &quest.rewards else { continue };

        let unlocks: Vec<_> = rewards
            .values()
            .flatten()
            .filter(|r| r.is_assortment_unlock())
            .collect();
        if unlocks.len() <= 1 {
            continue;
        }

        let mut targets: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for reward in unlocks {
            let Some(target) = &reward.target else { continue };
            targets.insert(
                target.clone(),
                reward.items.iter().map(|i| i.tpl.clone()).collect(),
            );
        }
        map.insert(quest_id.clone(), targets);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quest::{Quest, QuestReward, RewardItem};
    use crate::data::{Handbook, HandbookEntry, ItemTemplate};
    use std::collections::HashMap as StdHashMap;

    fn snapshot_with_currencies() -> DatabaseSnapshot {
        let mut snapshot = DatabaseSnapshot::new();
        snapshot.handbook = Handbook {
            items: vec![
                HandbookEntry { id: ids::EURO.into(), parent_id: None, price: Some(160.0) },
                HandbookEntry { id: ids::DOLLAR.into(), parent_id: None, price: Some(145.0) },
            ],
        };
        snapshot
            .locales
            .insert("en".into(), StdHashMap::from([("noop".into(), String::new())]));
        snapshot
    }

    fn item(id: &str, parent: &str, kind: &str) -> ItemTemplate {
        ItemTemplate { id: id.into(), parent: parent.into(), kind: kind.into(), ..Default::default() }
    }

    #[test]
    fn test_currency_ratios() {
        let snapshot = snapshot_with_currencies();
        let ix = RefIndex::new(&snapshot).unwrap();
        assert_eq!(ix.euro_ratio, 160.0);
        assert_eq!(ix.dollar_ratio, 145.0);
    }

    #[test]
    fn test_missing_currency_is_fatal() {
        let mut snapshot = snapshot_with_currencies();
        snapshot.handbook.items.remove(0);
        assert!(matches!(
            RefIndex::new(&snapshot),
            Err(EnrichError::MissingCurrencyPrice(_))
        ));
    }

    #[test]
    fn test_base_class_walk() {
        let mut snapshot = snapshot_with_currencies();
        snapshot.items.insert("leaf".into(), item("leaf", "mid", "Item"));
        snapshot.items.insert("mid".into(), item("mid", "root", "Node"));
        snapshot.items.insert("root".into(), item("root", "", "Node"));

        let ix = RefIndex::new(&snapshot).unwrap();
        let classes = ix.base_classes("leaf");
        assert!(classes.contains("mid"));
        assert!(classes.contains("root"));
        assert!(!classes.contains("leaf"));
        assert!(ix.is_of_base_class("leaf", "root"));
    }

    #[test]
    fn test_name_fallback_chain() {
        let mut snapshot = snapshot_with_currencies();
        let mut leaf = item("item1", "cat", "Item");
        leaf.props.name = Some("Raw prop name".into());
        snapshot.items.insert("item1".into(), leaf);
        snapshot.items.insert("item2".into(), item("item2", "cat", "Item"));
        snapshot
            .locales
            .get_mut("en")
            .unwrap()
            .insert("item1 Name".into(), "English name".into());
        snapshot.locales.insert(
            "fr".into(),
            StdHashMap::from([("item1 Name".into(), String::new())]),
        );

        let mut raw_only = item("item3", "cat", "Item");
        raw_only.props.name = Some("Raw prop name".into());
        snapshot.items.insert("item3".into(), raw_only);

        let ix = RefIndex::new(&snapshot).unwrap();
        assert_eq!(ix.item_name("item1", "en"), "English name");
        // Empty french entry falls through to English.
        assert_eq!(ix.item_name("item1", "fr"), "English name");
        // No locale entry at all falls back to the raw property.
        assert_eq!(ix.item_name("item3", "en"), "Raw prop name");
        // Unknown locale table is a diagnostic, not a panic.
        assert_eq!(ix.item_name("item1", "zz"), "Name lookup failed");
        // Nothing anywhere yields the sentinel.
        assert_eq!(ix.item_short_name("item2", "en"), "null ShortName");
    }

    #[test]
    fn test_quest_unlock_map_needs_multiple_unlocks() {
        let mut snapshot = snapshot_with_currencies();

        let unlock = |target: &str, tpl: &str| QuestReward {
            kind: Some("AssortmentUnlock".into()),
            target: Some(target.into()),
            trader_id: Some("trader".into()),
            loyalty_level: Some(2),
            items: vec![RewardItem { id: target.into(), tpl: tpl.into() }],
        };

        let mut single = Quest { id: "q1".into(), ..Default::default() };
        single.rewards =
            Some(StdHashMap::from([("Success".to_string(), vec![unlock("t1", "tplA")])]));
        let mut double = Quest { id: "q2".into(), ..Default::default() };
        double.rewards = Some(StdHashMap::from([(
            "Success".to_string(),
            vec![unlock("t1", "tplA"), unlock("t2", "tplB")],
        )]));

        snapshot.quests.insert("q1".into(), single);
        snapshot.quests.insert("q2".into(), double);

        let ix = RefIndex::new(&snapshot).unwrap();
        assert!(!ix.quest_unlocks.contains_key("q1"));
        assert_eq!(ix.quest_unlocks["q2"]["t2"], vec!["tplB".to_string()]);
    }
}
