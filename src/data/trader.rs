//! Trader Structures
//!
//! A trader is a base record (loyalty levels, buy filters) plus an
//! assortment: the tree of offer items linked by parent id, the barter
//! cost scheme per offer, and the loyalty level each offer unlocks at.

use std::collections::HashMap;

use serde::Deserialize;

/// A trader with its full assortment.
#[derive(Debug, Clone, Default)]
pub struct Trader {
    pub base: TraderBase,
    pub assort: Assort,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraderBase {
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Ordered by loyalty level; index 0 holds the level-1 buy coefficient.
    #[serde(rename = "loyaltyLevels", default)]
    pub loyalty_levels: Vec<LoyaltyLevel>,
    /// What the trader buys, by category or explicit id.
    pub items_buy: Option<BuyFilter>,
    /// Explicit deny-list that overrides `items_buy`.
    pub items_buy_prohibited: Option<BuyFilter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoyaltyLevel {
    /// Percentage subtracted from the handbook value when this trader buys.
    #[serde(rename = "buy_price_coef")]
    pub buy_price_coef: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuyFilter {
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub id_list: Vec<String>,
}

/// A trader's offer tree plus per-offer cost and loyalty metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Assort {
    #[serde(default)]
    pub items: Vec<AssortItem>,
    /// Offer id -> list of barter scheme variants; the first variant is
    /// authoritative.
    #[serde(default)]
    pub barter_scheme: HashMap<String, Vec<Vec<BarterScheme>>>,
    /// Offer id -> loyalty level required to see the offer.
    #[serde(default)]
    pub loyal_level_items: HashMap<String, u32>,
}

/// One node in the offer tree. Top-level offers have the assortment root
/// as their parent; nested nodes (contents of containers, weapon mods)
/// point at the enclosing offer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssortItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_tpl", default)]
    pub tpl: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

/// One resource line of a barter scheme: pay `count` of item `tpl`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BarterScheme {
    #[serde(rename = "_tpl", default)]
    pub tpl: String,
    pub count: Option<f64>,
}
