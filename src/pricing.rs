//! Pricing Resolver
//!
//! Flea-market price with handbook fallback, best-vendor valuation over
//! the fixed priority list, the ammo-box stack valuation, and slot
//! density.

use crate::data::ids;
use crate::index::RefIndex;

/// Open-market price: live price if present and non-negative, handbook
/// value if non-negative, else zero. Never fails, never negative.
pub fn flea_price(ix: &RefIndex<'_>, item_id: &str) -> f64 {
    if let Some(&price) = ix.snapshot.prices.get(item_id) {
        if price >= 0.0 {
            return price;
        }
    }
    match ix.handbook_entry(item_id).and_then(|e| e.price) {
        Some(price) if price >= 0.0 => price,
        _ => 0.0,
    }
}

/// The buy-price multiplier and display name of the first priority vendor
/// that accepts an item. `(0, "None")` when nobody does.
pub fn best_vendor_quote(ix: &RefIndex<'_>, item_id: &str, lang: &str) -> (f64, String) {
    let base_classes = ix.base_classes(item_id);

    for trader in ix.vendors() {
        let (Some(buys), Some(prohibited)) =
            (&trader.base.items_buy, &trader.base.items_buy_prohibited)
        else {
            continue;
        };

        let by_category = buys.category.iter().any(|c| base_classes.contains(c.as_str()));
        let by_id = buys.id_list.iter().any(|i| i == item_id);
        let is_prohibited = prohibited.id_list.iter().any(|i| i == item_id);

        if (!by_category && !by_id) || is_prohibited {
            continue;
        }

        let coef = trader
            .base
            .loyalty_levels
            .first()
            .and_then(|l| l.buy_price_coef)
            .unwrap_or(0.0);
        let multiplier = (100.0 - coef) / 100.0;
        return (multiplier, ix.trader_nickname(lang, &trader.base.id));
    }

    (0.0, "None".to_string())
}

/// Handbook value discounted by the best vendor's buy coefficient. The
/// price is `None` only when the item has no handbook entry at all.
pub struct VendorValuation {
    pub price: Option<f64>,
    pub vendor_name: String,
}

pub fn best_vendor_price(ix: &RefIndex<'_>, item_id: &str, lang: &str) -> VendorValuation {
    let (multiplier, vendor_name) = best_vendor_quote(ix, item_id, lang);
    let price = ix
        .handbook_entry(item_id)
        .and_then(|e| e.price)
        .map(|p| p * multiplier);
    VendorValuation { price, vendor_name }
}

/// Trader price of an ammo box: the contained ammo's per-unit vendor price
/// times the slot's max count. Returns the price and the ammo id; the
/// price collapses to zero when either operand is missing.
pub fn ammo_box_trader_price(
    ix: &RefIndex<'_>,
    props: &crate::data::ItemProps,
    lang: &str,
) -> (f64, Option<String>) {
    let Some((ammo, max_count)) = props.first_stack_slot() else {
        return (0.0, None);
    };

    let unit_price = ammo
        .as_deref()
        .and_then(|a| best_vendor_price(ix, a, lang).price);

    let price = match (unit_price, max_count) {
        (Some(unit), Some(count)) => unit * count as f64,
        _ => 0.0,
    };
    (price, ammo)
}

/// Footprint cells per stacked unit. `None` when the stack size is
/// unknown or zero; density-based math is skipped for such items.
pub fn slot_density(props: &crate::data::ItemProps) -> Option<f64> {
    let footprint = props.footprint()?;
    let stack = props.stack_max_size.filter(|s| *s > 0)?;
    Some(footprint as f64 / stack as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::snapshot::DatabaseSnapshot;
    use crate::data::trader::{Assort, BuyFilter, LoyaltyLevel, Trader, TraderBase};
    use crate::data::{Handbook, HandbookEntry, ItemProps, ItemTemplate};
    use std::collections::HashMap;

    fn base_snapshot() -> DatabaseSnapshot {
        let mut snapshot = DatabaseSnapshot::new();
        snapshot.handbook = Handbook {
            items: vec![
                HandbookEntry { id: ids::EURO.into(), parent_id: None, price: Some(160.0) },
                HandbookEntry { id: ids::DOLLAR.into(), parent_id: None, price: Some(145.0) },
            ],
        };
        snapshot.locales.insert("en".into(), HashMap::new());
        snapshot
    }

    fn add_item(snapshot: &mut DatabaseSnapshot, id: &str, parent: &str, handbook_price: Option<f64>) {
        snapshot.items.insert(
            id.to_string(),
            ItemTemplate {
                id: id.into(),
                parent: parent.into(),
                kind: "Item".into(),
                ..Default::default()
            },
        );
        if let Some(price) = handbook_price {
            snapshot.handbook.items.push(HandbookEntry {
                id: id.into(),
                parent_id: Some(parent.into()),
                price: Some(price),
            });
        }
    }

    fn add_vendor(snapshot: &mut DatabaseSnapshot, id: &str, coef: f64, category: &str, prohibited: &[&str]) {
        snapshot.traders.insert(
            id.to_string(),
            Trader {
                base: TraderBase {
                    id: id.into(),
                    loyalty_levels: vec![LoyaltyLevel { buy_price_coef: Some(coef) }],
                    items_buy: Some(BuyFilter {
                        category: vec![category.to_string()],
                        id_list: vec![],
                    }),
                    items_buy_prohibited: Some(BuyFilter {
                        category: vec![],
                        id_list: prohibited.iter().map(|s| s.to_string()).collect(),
                    }),
                },
                assort: Assort::default(),
            },
        );
    }

    #[test]
    fn test_flea_price_fallback_chain() {
        let mut snapshot = base_snapshot();
        add_item(&mut snapshot, "live", "cat", Some(2000.0));
        add_item(&mut snapshot, "handbook_only", "cat", Some(3000.0));
        add_item(&mut snapshot, "nothing", "cat", None);
        snapshot.prices.insert("live".into(), 9000.0);
        snapshot.prices.insert("handbook_only".into(), -1.0);

        let ix = RefIndex::new(&snapshot).unwrap();
        assert_eq!(flea_price(&ix, "live"), 9000.0);
        // Negative live price falls back to the handbook.
        assert_eq!(flea_price(&ix, "handbook_only"), 3000.0);
        assert_eq!(flea_price(&ix, "nothing"), 0.0);
        assert_eq!(flea_price(&ix, "missing-entirely"), 0.0);
    }

    #[test]
    fn test_best_vendor_discount() {
        let mut snapshot = base_snapshot();
        add_item(&mut snapshot, "item1", "cat1", Some(1000.0));
        // Therapist buys cat1 at coefficient 60 => multiplier 0.40.
        add_vendor(&mut snapshot, ids::VENDOR_PRIORITY[4], 60.0, "cat1", &[]);

        let ix = RefIndex::new(&snapshot).unwrap();
        let valuation = best_vendor_price(&ix, "item1", "en");
        assert_eq!(valuation.price, Some(400.0));
        // No nickname in the locale table falls back to the trader id.
        assert_eq!(valuation.vendor_name, ids::VENDOR_PRIORITY[4]);
    }

    #[test]
    fn test_priority_order_wins_over_price() {
        let mut snapshot = base_snapshot();
        add_item(&mut snapshot, "item1", "cat1", Some(1000.0));
        // Prapor pays less but outranks Therapist in the priority list.
        add_vendor(&mut snapshot, ids::VENDOR_PRIORITY[0], 70.0, "cat1", &[]);
        add_vendor(&mut snapshot, ids::VENDOR_PRIORITY[4], 40.0, "cat1", &[]);

        let ix = RefIndex::new(&snapshot).unwrap();
        let (multiplier, name) = best_vendor_quote(&ix, "item1", "en");
        assert_eq!(multiplier, 0.3);
        assert_eq!(name, ids::VENDOR_PRIORITY[0]);
    }

    #[test]
    fn test_prohibited_vendor_is_skipped() {
        let mut snapshot = base_snapshot();
        add_item(&mut snapshot, "item1", "cat1", Some(1000.0));
        add_vendor(&mut snapshot, ids::VENDOR_PRIORITY[0], 70.0, "cat1", &["item1"]);

        let ix = RefIndex::new(&snapshot).unwrap();
        let (multiplier, name) = best_vendor_quote(&ix, "item1", "en");
        assert_eq!(multiplier, 0.0);
        assert_eq!(name, "None");
    }

    #[test]
    fn test_ammo_box_valuation() {
        let mut snapshot = base_snapshot();
        add_item(&mut snapshot, "ammo1", "ammo-cat", Some(125.0));
        // Ammo sells to Prapor at coefficient 60 => 50 per round.
        add_vendor(&mut snapshot, ids::VENDOR_PRIORITY[0], 60.0, "ammo-cat", &[]);

        let props: ItemProps = serde_json::from_str(
            r#"{ "StackSlots": [{ "_max_count": 20, "_props": { "filters": [{ "Filter": ["ammo1"] }] } }] }"#,
        )
        .unwrap();

        let ix = RefIndex::new(&snapshot).unwrap();
        let (price, ammo) = ammo_box_trader_price(&ix, &props, "en");
        assert_eq!(price, 1000.0);
        assert_eq!(ammo.as_deref(), Some("ammo1"));
    }

    #[test]
    fn test_ammo_box_missing_operands_collapse_to_zero() {
        let snapshot = base_snapshot();
        let ix = RefIndex::new(&snapshot).unwrap();

        let no_slots = ItemProps::default();
        assert_eq!(ammo_box_trader_price(&ix, &no_slots, "en").0, 0.0);

        // Slot without a priced ammo id.
        let props: ItemProps = serde_json::from_str(
            r#"{ "StackSlots": [{ "_max_count": 20, "_props": { "filters": [{ "Filter": ["unpriced"] }] } }] }"#,
        )
        .unwrap();
        assert_eq!(ammo_box_trader_price(&ix, &props, "en").0, 0.0);
    }

    #[test]
    fn test_slot_density() {
        let mut props = ItemProps {
            width: Some(2),
            height: Some(1),
            stack_max_size: Some(4),
            ..Default::default()
        };
        assert_eq!(slot_density(&props), Some(0.5));

        props.stack_max_size = None;
        assert_eq!(slot_density(&props), None);

        props.stack_max_size = Some(0);
        assert_eq!(slot_density(&props), None);
    }
}
