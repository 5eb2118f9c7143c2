//! Quest usage scanner.
//!
//! One pass over the quest table per item: handover/find conditions that
//! consume the item, and assortment-unlock rewards that make a shop offer
//! available. The rendered glyphs feed back into the classifier (↺ and ∈
//! drive the quest-unlock rarity bump) and the name annotation (✔ marks
//! found-in-raid requirements).

use crate::error::EnrichError;
use crate::fmt::display_num;
use crate::i18n::TranslationBundle;
use crate::index::RefIndex;

/// Usage lines for one item across every quest. Missing reward buckets
/// mean the dataset is corrupt and abort the pass.
pub fn quest_info(
    ix: &RefIndex<'_>,
    i18n: &TranslationBundle,
    item_id: &str,
    locale: &str,
) -> Result<String, EnrichError> {
    let mut found_lines = String::new();
    let mut unlock_lines = String::new();

    for quest in ix.snapshot.quests.values() {
        let Some(quest_name) = &quest.name else {
            continue;
        };

        for condition in &quest.conditions.available_for_finish {
            if !condition.consumes_items() {
                continue;
            }
            if !condition.target.as_ref().is_some_and(|t| t.contains(item_id)) {
                continue;
            }
            let Some(found_in_raid) = condition.only_found_in_raid else {
                continue;
            };

            let trader_name = ix.trader_nickname(locale, &quest.trader_id);
            found_lines.push_str(&format!(
                "{} {}x{} > {} @ {}\n",
                i18n.text(locale, "Found"),
                if found_in_raid { "(✔) " } else { "" },
                display_num(condition.value.unwrap_or(0.0)),
                quest_name,
                trader_name,
            ));
        }

        let rewards = quest.rewards.as_ref().ok_or_else(|| EnrichError::MissingRewardBucket {
            quest: quest_name.clone(),
            bucket: "Started".to_string(),
        })?;
        let bucket = |name: &str| {
            rewards.get(name).ok_or_else(|| EnrichError::MissingRewardBucket {
                quest: quest_name.clone(),
                bucket: name.to_string(),
            })
        };

        let giver_name = ix.trader_nickname(locale, &quest.trader_id);

        for reward in bucket("Started")?.iter().chain(bucket("Success")?) {
            if !reward.is_assortment_unlock() {
                continue;
            }
            let (Some(reward_trader), Some(target)) = (&reward.trader_id, &reward.target) else {
                continue;
            };

            let loyalty_level = reward.loyalty_level.unwrap_or(0);
            let trader_name = ix.trader_nickname(locale, reward_trader);

            for granted in reward.items.iter().filter(|i| i.tpl == item_id) {
                // The ∈ marker names the unlocked root item when this
                // grant is that root; attached parts stay unmarked.
                let part_of = (granted.id == *target)
                    .then(|| format!(" ∈ {}", ix.item_name(&granted.tpl, locale)))
                    .unwrap_or_default();

                unlock_lines.push_str(&format!(
                    "↺ \"{}\"{}✔ @ {} {}{}{}\n",
                    quest_name,
                    if trader_name == giver_name {
                        String::new()
                    } else {
                        format!(" {}", giver_name)
                    },
                    trader_name,
                    i18n.text(locale, "lv"),
                    loyalty_level,
                    part_of,
                ));
            }
        }
    }

    found_lines.push_str(&unlock_lines);
    Ok(found_lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ids;
    use crate::data::quest::{Quest, QuestCondition, QuestReward, RewardItem, TargetList};
    use crate::data::snapshot::DatabaseSnapshot;
    use crate::data::{Handbook, HandbookEntry};
    use std::collections::HashMap;

    fn base_snapshot() -> DatabaseSnapshot {
        let mut snapshot = DatabaseSnapshot::new();
        snapshot.handbook = Handbook {
            items: vec![
                HandbookEntry { id: ids::EURO.into(), parent_id: None, price: Some(150.0) },
                HandbookEntry { id: ids::DOLLAR.into(), parent_id: None, price: Some(140.0) },
            ],
        };
        snapshot.locales.insert(
            "en".into(),
            HashMap::from([
                ("trader1 Nickname".to_string(), "Prapor".to_string()),
                ("trader2 Nickname".to_string(), "Skier".to_string()),
            ]),
        );
        snapshot
    }

    fn handover_quest(id: &str, name: &str, target: &str, fir: bool) -> Quest {
        Quest {
            id: id.into(),
            name: Some(name.into()),
            trader_id: "trader1".into(),
            conditions: crate::data::quest::QuestConditions {
                available_for_finish: vec![QuestCondition {
                    condition_type: Some("HandoverItem".into()),
                    target: Some(TargetList::Many(vec![target.into()])),
                    value: Some(3.0),
                    only_found_in_raid: Some(fir),
                }],
            },
            rewards: Some(HashMap::from([
                ("Started".to_string(), vec![]),
                ("Success".to_string(), vec![]),
            ])),
        }
    }

    #[test]
    fn test_handover_line_with_fir_mark() {
        let mut snapshot = base_snapshot();
        snapshot.quests.insert("q1".into(), handover_quest("q1", "Shortage", "item1", true));
        snapshot.quests.insert("q2".into(), handover_quest("q2", "Sanitary", "other", false));

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();
        let text = quest_info(&ix, &i18n, "item1", "en").unwrap();

        assert_eq!(text, "Found (✔) x3 > Shortage @ Prapor\n");
    }

    #[test]
    fn test_non_fir_has_no_mark() {
        let mut snapshot = base_snapshot();
        snapshot.quests.insert("q1".into(), handover_quest("q1", "Shortage", "item1", false));

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();
        let text = quest_info(&ix, &i18n, "item1", "en").unwrap();
        assert_eq!(text, "Found x3 > Shortage @ Prapor\n");
    }

    #[test]
    fn test_unlock_line_marks_root_grant() {
        let mut snapshot = base_snapshot();
        snapshot
            .locales
            .get_mut("en")
            .unwrap()
            .insert("weapon-tpl Name".to_string(), "SKS".to_string());

        let mut quest = handover_quest("q1", "Debut", "unrelated", true);
        quest.rewards = Some(HashMap::from([
            ("Started".to_string(), vec![]),
            (
                "Success".to_string(),
                vec![QuestReward {
                    kind: Some("AssortmentUnlock".into()),
                    target: Some("root-instance".into()),
                    trader_id: Some("trader2".into()),
                    loyalty_level: Some(2),
                    items: vec![
                        RewardItem { id: "root-instance".into(), tpl: "weapon-tpl".into() },
                        RewardItem { id: "mod-instance".into(), tpl: "mod-tpl".into() },
                    ],
                }],
            ),
        ]));
        snapshot.quests.insert("q1".into(), quest);

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();

        // The root grant carries the ∈ marker.
        let root_text = quest_info(&ix, &i18n, "weapon-tpl", "en").unwrap();
        assert_eq!(root_text, "↺ \"Debut\" Prapor✔ @ Skier lv2 ∈ SKS\n");

        // The attached mod does not.
        let mod_text = quest_info(&ix, &i18n, "mod-tpl", "en").unwrap();
        assert_eq!(mod_text, "↺ \"Debut\" Prapor✔ @ Skier lv2\n");
    }

    #[test]
    fn test_missing_reward_bucket_is_fatal() {
        let mut snapshot = base_snapshot();
        let mut quest = handover_quest("q1", "Broken", "item1", true);
        quest.rewards = Some(HashMap::from([("Started".to_string(), vec![])]));
        snapshot.quests.insert("q1".into(), quest);

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();
        assert!(matches!(
            quest_info(&ix, &i18n, "item1", "en"),
            Err(EnrichError::MissingRewardBucket { .. })
        ));
    }
}
