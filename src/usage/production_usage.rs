//! Production recipe scanners.
//!
//! Forward view: recipes that craft the item, with component costs and
//! per-item pricing. Reverse view: recipes the item is consumed by, with
//! the margin against the product's flea value. The Bitcoin farm is the
//! one recipe whose cost is time on a GPU curve rather than components.

use tracing::warn;

use crate::data::ids;
use crate::error::EnrichError;
use crate::fmt::{display_num, format_price};
use crate::i18n::TranslationBundle;
use crate::index::RefIndex;
use crate::pricing::flea_price;

/// Production time scaled by installed GPUs. Zero when the dataset has no
/// boost rate.
pub fn gpu_time(boost_rate: Option<f64>, gpus: u32, time: f64) -> f64 {
    match boost_rate {
        Some(rate) => time / (1.0 + (gpus.saturating_sub(1)) as f64 * rate),
        None => 0.0,
    }
}

/// `"5h 50min"` from seconds, with the unit words taken from the game
/// locale when present.
fn format_craft_time(ix: &RefIndex<'_>, seconds: f64, locale: &str) -> String {
    let hours = (seconds / 3600.0).trunc();
    let minutes = ((seconds - hours * 3600.0) / 60.0).round();

    let hours_unit = ix
        .locale_get(locale, "HOURS")
        .or_else(|| ix.locale_get("en", "HOURS"))
        .unwrap_or("h ");
    let minutes_unit = ix
        .locale_get(locale, "Min")
        .or_else(|| ix.locale_get("en", "Min"))
        .unwrap_or("min");

    format!("{}{}{}{}", display_num(hours), hours_unit, display_num(minutes), minutes_unit)
}

/// Quest display name for a recipe gate, if the locale knows it.
fn quest_gate_text(ix: &RefIndex<'_>, quest_id: &str, locale: &str) -> Option<String> {
    let key = format!("{} name", quest_id);
    ix.locale_get(locale, &key)
        .or_else(|| ix.locale_get("en", &key))
        .map(|name| format!(" ({}✔)", name))
}

/// Recipes whose end product is the item.
pub fn production_info(
    ix: &RefIndex<'_>,
    i18n: &TranslationBundle,
    item_id: &str,
    locale: &str,
) -> Result<String, EnrichError> {
    let mut text = String::new();

    for recipe in &ix.snapshot.production.recipes {
        if recipe.end_product != item_id
            || recipe.area_type == Some(ids::CHRISTMAS_ILLUMINATION_AREA)
            || recipe.is_permanently_locked()
        {
            continue;
        }
        let Some(area_type) = recipe.area_type else {
            warn!("Recipe {} has no area type, skipping", recipe.id);
            continue;
        };
        let area_name = ix.area_name(area_type, locale)?;

        let mut components = Vec::new();
        let mut component_cost = 0.0;
        let mut quest_gate = String::new();

        for requirement in &recipe.requirements {
            match requirement.kind.as_deref() {
                Some("Item") => {
                    let (Some(tpl), Some(count)) =
                        (&requirement.template_id, requirement.count)
                    else {
                        continue;
                    };
                    components.push(format!(
                        "{} x{}",
                        ix.item_short_name(tpl, locale),
                        display_num(count),
                    ));
                    component_cost += flea_price(ix, tpl) * count;
                }
                Some("Resource") => {
                    let (Some(tpl), Some(used)) =
                        (&requirement.template_id, requirement.resource)
                    else {
                        continue;
                    };
                    let Some(pool) = ix
                        .item(tpl)
                        .and_then(|i| i.props.resource)
                        .filter(|p| *p > 0.0)
                    else {
                        continue;
                    };
                    components.push(format!(
                        "{} x{}%",
                        ix.item_short_name(tpl, locale),
                        display_num((used / pool * 100.0).round()),
                    ));
                }
                Some("QuestComplete") => {
                    if let Some(quest_id) = &requirement.quest_id {
                        if let Some(gate) = quest_gate_text(ix, quest_id, locale) {
                            quest_gate = gate;
                        }
                    }
                }
                _ => {}
            }
        }

        if recipe.end_product == ids::BITCOIN {
            let Some(time) = recipe.production_time else {
                continue;
            };
            let boost = ix.snapshot.hideout_settings.gpu_boost_rate;
            text.push_str(&format!(
                "{} @ {} | 1x GPU: {}, 10x GPU: {}, 25x GPU: {}, 50x GPU: {}\n",
                i18n.text(locale, "Crafted"),
                area_name,
                format_craft_time(ix, gpu_time(boost, 1, time), locale),
                format_craft_time(ix, gpu_time(boost, 10, time), locale),
                format_craft_time(ix, gpu_time(boost, 25, time), locale),
                format_craft_time(ix, gpu_time(boost, 50, time), locale),
            ));
            continue;
        }

        let output_count = recipe.count.unwrap_or(1.0);
        let per_item = if output_count > 1.0 {
            format!(" {}", i18n.text(locale, "peritem"))
        } else {
            String::new()
        };

        text.push_str(&format!(
            "{} x{} @ {}{} < {} | Σ{} ≈ {}₽\n",
            i18n.text(locale, "Crafted"),
            display_num(output_count),
            area_name,
            quest_gate,
            components.join(" + "),
            per_item,
            format_price(component_cost / output_count),
        ));
    }

    Ok(text)
}

/// Recipes that consume the item as a component, tool, or resource.
pub fn crafting_material_info(
    ix: &RefIndex<'_>,
    i18n: &TranslationBundle,
    item_id: &str,
    locale: &str,
) -> Result<String, EnrichError> {
    let mut text = String::new();

    for recipe in &ix.snapshot.production.recipes {
        // Level of the recipe's own area gate, for the line suffix.
        let area_level = recipe
            .requirements
            .iter()
            .find(|r| r.kind.as_deref() == Some("Area"))
            .and_then(|r| r.required_level);
        let quest_gate = recipe
            .requirements
            .iter()
            .filter(|r| r.kind.as_deref() == Some("QuestComplete"))
            .find_map(|r| r.quest_id.as_deref())
            .and_then(|q| quest_gate_text(ix, q, locale))
            .unwrap_or_default();

        for requirement in &recipe.requirements {
            if requirement.template_id.as_deref() != Some(item_id) {
                continue;
            }

            let (prefix, consumed_value) = match requirement.kind.as_deref() {
                Some("Item") => {
                    let Some(count) = requirement.count else { continue };
                    (
                        format!("{} x{}", i18n.text(locale, "Part"), display_num(count)),
                        flea_price(ix, item_id) * count,
                    )
                }
                Some("Resource") => {
                    let Some(used) = requirement.resource else { continue };
                    let Some(pool) = ix
                        .item(item_id)
                        .and_then(|i| i.props.resource)
                        .filter(|p| *p > 0.0)
                    else {
                        continue;
                    };
                    let proportion = used / pool;
                    (
                        format!(
                            "{} x{}%",
                            i18n.text(locale, "Part"),
                            display_num((proportion * 100.0).round()),
                        ),
                        (flea_price(ix, item_id) * proportion).round(),
                    )
                }
                Some("Tool") => (i18n.text(locale, "Tool").to_string(), 0.0),
                _ => continue,
            };

            let Some(area_type) = recipe.area_type else {
                warn!("Recipe {} has no area type, skipping", recipe.id);
                continue;
            };
            let area_name = ix.area_name(area_type, locale)?;
            let area = match area_level {
                Some(level) => format!("{} {}{}", area_name, i18n.text(locale, "lv"), level),
                None => area_name,
            };

            let output_count = recipe.count.unwrap_or(1.0);
            let margin =
                flea_price(ix, &recipe.end_product) * output_count - consumed_value;

            text.push_str(&format!(
                "{} > {} x{} @ {}{} < … | Δ ≈ {}₽\n",
                prefix,
                ix.item_name(&recipe.end_product, locale),
                display_num(output_count),
                area,
                quest_gate,
                format_price(margin),
            ));
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::hideout::{HideoutProduction, ProductionRequirement};
    use crate::data::snapshot::DatabaseSnapshot;
    use crate::data::{Handbook, HandbookEntry, ItemTemplate};
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
                ("hideout_area_10_name".to_string(), "Workbench".to_string()),
                ("hideout_area_20_name".to_string(), "Intelligence Center".to_string()),
                ("screws Name".to_string(), "Screws".to_string()),
                ("screws ShortName".to_string(), "Screws".to_string()),
                ("fuel ShortName".to_string(), "Fuel".to_string()),
                ("product Name".to_string(), "MRE".to_string()),
            ]),
        );
        snapshot
    }

    fn requirement(kind: &str, tpl: Option<&str>) -> ProductionRequirement {
        ProductionRequirement {
            kind: Some(kind.into()),
            template_id: tpl.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_craft_line_with_components() {
        let mut snapshot = base_snapshot();
        snapshot.prices.insert("screws".into(), 30000.0);

        let mut item_req = requirement("Item", Some("screws"));
        item_req.count = Some(2.0);

        let mut fuel = ItemTemplate { id: "fuel".into(), ..Default::default() };
        fuel.props.resource = Some(100.0);
        snapshot.items.insert("fuel".into(), fuel);
        let mut resource_req = requirement("Resource", Some("fuel"));
        resource_req.resource = Some(25.0);

        snapshot.production.recipes.push(HideoutProduction {
            id: "r1".into(),
            end_product: "product".into(),
            count: Some(2.0),
            production_time: Some(600.0),
            area_type: Some(10),
            locked: Some(false),
            requirements: vec![item_req, resource_req],
        });

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();
        let text = production_info(&ix, &i18n, "product", "en").unwrap();

        // Σ per item: (2 × 30,000) / 2 outputs.
        assert_eq!(
            text,
            "Crafted x2 @ Workbench < Screws x2 + Fuel x25% | Σ per item ≈ 30,000₽\n"
        );
    }

    #[test]
    fn test_bitcoin_uses_gpu_curve() {
        let mut snapshot = base_snapshot();
        snapshot.locales.get_mut("en").unwrap().insert(
            "hideout_area_0_name".to_string(),
            "Bitcoin Farm".to_string(),
        );
        snapshot.hideout_settings.gpu_boost_rate = Some(0.041225);
        snapshot.production.recipes.push(HideoutProduction {
            id: "btc".into(),
            end_product: ids::BITCOIN.into(),
            count: Some(1.0),
            production_time: Some(145000.0),
            area_type: Some(0),
            locked: Some(false),
            requirements: vec![],
        });

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();
        let text = production_info(&ix, &i18n, ids::BITCOIN, "en").unwrap();

        assert!(text.contains("1x GPU: 40h 17min"), "text: {}", text);
        assert!(text.contains("50x GPU: 13h 20min"), "text: {}", text);
    }

    #[test]
    fn test_locked_and_decorative_recipes_skipped() {
        let mut snapshot = base_snapshot();
        let mut quest_req = requirement("QuestComplete", None);
        quest_req.quest_id = Some("gone-quest".into());
        snapshot.production.recipes.push(HideoutProduction {
            id: "locked".into(),
            end_product: "product".into(),
            count: Some(1.0),
            area_type: Some(10),
            locked: Some(true),
            requirements: vec![quest_req],
            ..Default::default()
        });
        snapshot.production.recipes.push(HideoutProduction {
            id: "festive".into(),
            end_product: "product".into(),
            count: Some(1.0),
            area_type: Some(ids::CHRISTMAS_ILLUMINATION_AREA),
            locked: Some(false),
            requirements: vec![],
            ..Default::default()
        });

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();
        assert!(production_info(&ix, &i18n, "product", "en").unwrap().is_empty());
    }

    #[test]
    fn test_crafting_material_margin() {
        let mut snapshot = base_snapshot();
        snapshot.prices.insert("screws".into(), 30000.0);
        snapshot.prices.insert("product".into(), 100000.0);

        let mut area_req = requirement("Area", None);
        area_req.area_type = Some(20);
        area_req.required_level = Some(2);
        let mut item_req = requirement("Item", Some("screws"));
        item_req.count = Some(2.0);

        snapshot.production.recipes.push(HideoutProduction {
            id: "r1".into(),
            end_product: "product".into(),
            count: Some(1.0),
            area_type: Some(20),
            locked: Some(false),
            requirements: vec![area_req, item_req],
            ..Default::default()
        });

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();
        let text = crafting_material_info(&ix, &i18n, "screws", "en").unwrap();

        // Δ = 100,000 − 2 × 30,000.
        assert_eq!(
            text,
            "Part x2 > MRE x1 @ Intelligence Center lv2 < … | Δ ≈ 40,000₽\n"
        );
    }

    #[test]
    fn test_tool_requirement_keeps_full_product_value() {
        let mut snapshot = base_snapshot();
        snapshot.prices.insert("product".into(), 50000.0);
        snapshot.production.recipes.push(HideoutProduction {
            id: "r1".into(),
            end_product: "product".into(),
            count: Some(1.0),
            area_type: Some(10),
            locked: Some(false),
            requirements: vec![requirement("Tool", Some("multitool"))],
            ..Default::default()
        });

        let ix = RefIndex::new(&snapshot).unwrap();
        let i18n = TranslationBundle::builtin_english();
        let text = crafting_material_info(&ix, &i18n, "multitool", "en").unwrap();

        assert!(text.starts_with("Tool > MRE x1 @ Workbench"), "text: {}", text);
        assert!(text.contains("Δ ≈ 50,000₽"), "text: {}", text);
    }
}
