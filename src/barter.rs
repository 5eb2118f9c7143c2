//! Barter Graph Resolver
//!
//! Finds every trader offer priced in a given item, attributes nested
//! offers (contents of sold containers, mods on sold weapons) to their
//! top-level tradeable item, and renders the aggregated cost lines. Also
//! produces the per-offer rarity contributions the tier classifier starts
//! from.

use std::collections::HashMap;

use tracing::warn;

use crate::data::ids;
use crate::data::trader::{AssortItem, BarterScheme};
use crate::fmt::format_price;
use crate::i18n::TranslationBundle;
use crate::index::RefIndex;
use crate::pricing::flea_price;

/// Parent chains deeper than this are treated as malformed third-party
/// data; the walk stops at the node reached so far.
const MAX_PARENT_DEPTH: usize = 32;

/// A trader offer normalized against the assortment tree.
#[derive(Debug, Clone)]
pub struct ResolvedBarter {
    /// Template of the top-level offer this nested offer belongs to.
    /// `None` when the offer itself is top-level.
    pub parent_item: Option<String>,
    /// First (authoritative) barter scheme variant.
    pub resources: Vec<BarterScheme>,
    pub loyalty_level: u32,
    pub trader_id: String,
    pub offer_id: String,
}

/// All offers for an item across every trader. Failures caused by
/// malformed assortments degrade to an empty result for this item only.
pub fn resolve_barters(ix: &RefIndex<'_>, item_id: &str) -> Vec<ResolvedBarter> {
    match try_resolve_barters(ix, item_id) {
        Ok(barters) => barters,
        Err(reason) => {
            warn!(
                "Barter resolution for \"{}\" failed, continuing with none: {}",
                ix.item_name(item_id, "en"),
                reason
            );
            Vec::new()
        }
    }
}

fn try_resolve_barters(ix: &RefIndex<'_>, item_id: &str) -> Result<Vec<ResolvedBarter>, String> {
    let mut resolved = Vec::new();

    for (trader_id, trader) in &ix.snapshot.traders {
        if trader.assort.items.is_empty() {
            continue;
        }

        let offers_by_id: HashMap<&str, &AssortItem> =
            trader.assort.items.iter().map(|o| (o.id.as_str(), o)).collect();

        for offer in trader.assort.items.iter().filter(|o| o.tpl == item_id) {
            let Some(variants) = trader.assort.barter_scheme.get(&offer.id) else {
                continue;
            };
            let Some(resources) = variants.first().filter(|v| !v.is_empty()) else {
                continue;
            };
            let loyalty_level = *trader
                .assort
                .loyal_level_items
                .get(&offer.id)
                .ok_or_else(|| format!("offer {} has no loyalty level", offer.id))?;

            let root = walk_to_root(offer, &offers_by_id);

            resolved.push(ResolvedBarter {
                parent_item: (root.tpl != item_id).then(|| root.tpl.clone()),
                resources: resources.clone(),
                loyalty_level,
                trader_id: trader_id.clone(),
                offer_id: offer.id.clone(),
            });
        }
    }

    Ok(resolved)
}

/// Walk an offer's ancestor chain to the assortment root. Returns the
/// offer itself when its parent is the root sentinel or unresolvable, and
/// stops at a fixed depth on malformed (cyclic or absurdly deep) chains.
pub fn walk_to_root<'t>(
    offer: &'t AssortItem,
    offers_by_id: &HashMap<&str, &'t AssortItem>,
) -> &'t AssortItem {
    let mut current = offer;

    for _ in 0..MAX_PARENT_DEPTH {
        let Some(parent_id) = current.parent_id.as_deref() else {
            return current;
        };
        if parent_id == ids::ASSORT_ROOT {
            return current;
        }
        match offers_by_id.get(parent_id) {
            Some(parent) => current = parent,
            None => return current,
        }
    }

    warn!("Offer {} exceeds the parent chain depth limit", offer.id);
    current
}

/// Rendered offer lines plus per-offer rarity contributions.
#[derive(Debug, Clone)]
pub struct BarterInfo {
    pub text: String,
    /// One sample per non-Fence offer: the loyalty level, plus one when
    /// the offer is a true barter. Never empty; no offers collapse to a
    /// single zero so downstream `min()` stays defined.
    pub rarity_samples: Vec<i64>,
}

pub fn barter_info(
    ix: &RefIndex<'_>,
    i18n: &TranslationBundle,
    barters: &[ResolvedBarter],
    locale: &str,
) -> BarterInfo {
    let mut text = String::new();
    let mut rarity_samples = Vec::new();

    for barter in barters {
        let trader_name = ix.trader_nickname(locale, &barter.trader_id);
        let part_of = barter
            .parent_item
            .as_deref()
            .map(|parent| format!(" ∈ {}", ix.item_short_name(parent, locale)))
            .unwrap_or_default();

        let mut line = format!(
            "{}{} {} {} {}{} < ",
            i18n.text(locale, "Bought"),
            part_of,
            i18n.text(locale, "at"),
            trader_name,
            i18n.text(locale, "lv"),
            barter.loyalty_level,
        );

        let mut cash_equivalent = 0.0;
        let mut is_barter = false;
        let mut resource_parts = Vec::new();

        for resource in &barter.resources {
            let count = resource.count.unwrap_or(0.0);
            match resource.tpl.as_str() {
                ids::ROUBLE => {
                    resource_parts.push(format!("{}₽", format_price(count)));
                }
                ids::EURO => {
                    resource_parts.push(format!(
                        "{}€ ≈ {}₽",
                        format_price(count),
                        format_price(ix.euro_ratio * count),
                    ));
                }
                ids::DOLLAR => {
                    resource_parts.push(format!(
                        "{}$ ≈ {}₽",
                        format_price(count),
                        format_price(ix.dollar_ratio * count),
                    ));
                }
                tpl => {
                    cash_equivalent += flea_price(ix, tpl) * count;
                    resource_parts.push(format!(
                        "{} x{}",
                        ix.item_short_name(tpl, locale),
                        crate::fmt::display_num(count),
                    ));
                    is_barter = true;
                }
            }
        }

        if barter.trader_id != ids::FENCE {
            rarity_samples.push(barter.loyalty_level as i64 + i64::from(is_barter));
        }

        line.push_str(&resource_parts.join(" + "));
        if cash_equivalent != 0.0 {
            line.push_str(&format!(" | Σ ≈ {}₽", format_price(cash_equivalent)));
        }
        line.push('\n');
        text.push_str(&line);
    }

    if rarity_samples.is_empty() {
        rarity_samples.push(0);
    }

    BarterInfo { text, rarity_samples }
}

/// Reverse view: offers where the item is spent as a barter resource.
/// Lines show what the item buys, where, and the value delta against the
/// resources' combined flea value.
pub fn barter_resource_info(
    ix: &RefIndex<'_>,
    i18n: &TranslationBundle,
    item_id: &str,
    locale: &str,
) -> String {
    let mut text = String::new();

    for (trader_id, trader) in &ix.snapshot.traders {
        // Lightkeeper's whole assortment is quest-gated noise.
        if trader_id == ids::LIGHTKEEPER || trader.assort.barter_scheme.is_empty() {
            continue;
        }
        let trader_name = ix.trader_nickname(locale, trader_id);

        for offer in &trader.assort.items {
            let Some(resources) =
                trader.assort.barter_scheme.get(&offer.id).and_then(|v| v.first())
            else {
                continue;
            };

            for spent in resources.iter().filter(|r| r.tpl == item_id) {
                let loyalty_level =
                    trader.assort.loyal_level_items.get(&offer.id).copied().unwrap_or(0);

                text.push_str(&format!(
                    "{} x{} {} {} {}{} > {}",
                    i18n.text(locale, "Traded"),
                    crate::fmt::display_num(spent.count.unwrap_or(0.0)),
                    i18n.text(locale, "at"),
                    trader_name,
                    i18n.text(locale, "lv"),
                    loyalty_level,
                    ix.item_name(item_id, locale),
                ));

                let mut spent_value = 0.0;
                let mut other_parts = Vec::new();
                for resource in resources {
                    let count = resource.count.unwrap_or(0.0);
                    spent_value += flea_price(ix, &resource.tpl) * count;
                    if resource.tpl != item_id {
                        other_parts.push(format!(
                            "{} x{}",
                            ix.item_short_name(&resource.tpl, locale),
                            crate::fmt::display_num(count),
                        ));
                    }
                }

                let mut extended = " < …".to_string();
                if !other_parts.is_empty() {
                    extended.push_str(" + ");
                    extended.push_str(&other_parts.join(" + "));
                }
                if spent_value > 0.0 {
                    let delta = flea_price(ix, &offer.tpl) - spent_value;
                    extended.push_str(&format!(" | Δ ≈ {}₽", format_price(delta)));
                }

                text.push_str(&extended);
                text.push('\n');
            }
        }
    }

    text
}
