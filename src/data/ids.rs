//! Well-known template and trader ids from the host dataset.
//!
//! These are stable identifiers the enrichment pass keys special-case
//! behavior off. They never change between dataset versions.

/// NPC vendors checked for buy offers, in priority order. The first vendor
/// that accepts an item wins, regardless of price.
pub const VENDOR_PRIORITY: [&str; 7] = [
    "54cb57776803fa99248b456e", // Prapor
    "5ac3b934156ae10c4430e83c", // Ragman
    "5c0647fdd443bc2504c2d371", // Jaeger
    "5a7c2eca46aef81a7ca2145d", // Peacekeeper
    "54cb50c76803fa8b248b4571", // Therapist
    "58330581ace78e27b8b10cee", // Skier
    "5935c25fb3acc3127c3d8cd9", // Mechanic
];

/// Fence. Sells scavenged loot; his offers say nothing about scarcity, so
/// they are excluded from rarity aggregation.
pub const FENCE: &str = "579dc571d53a0658a154fbec";

/// Lightkeeper. Quest-gated trader whose barters are skipped by the
/// barter-resource scan.
pub const LIGHTKEEPER: &str = "638f541a29ffd1183d187f57";

// Currency items.
pub const ROUBLE: &str = "5449016a4bdc2d6f028b456f";
pub const EURO: &str = "569668774bdc2da2298b4568";
pub const DOLLAR: &str = "5696686a4bdc2da3298b456a";

// Category (parent) ids.
pub const CURRENCY_CATEGORY: &str = "543be5dd4bdc2deb348b4569";
pub const AMMO_BOX_CATEGORY: &str = "543be5cb4bdc2deb348b4568";
pub const AMMO_CATEGORY: &str = "5485a8684bdc2da71d8b4567";
pub const WEAPON_CATEGORY: &str = "5422acb9af1c889c16000029";
pub const ARMOR_CATEGORY: &str = "5448e54d4bdc2dcc718b4568";
pub const VEST_CATEGORY: &str = "5448e5284bdc2dcb718b4567";
pub const MOD_CATEGORY: &str = "5448fe124bdc2da5018b4567";
pub const ARMOR_PLATE_CATEGORY: &str = "644120aa86ffbe10ee032b6f";
pub const ARMORED_EQUIPMENT_CATEGORY: &str = "57bef4c42459772e8d35a53b";
pub const KEY_MECHANICAL_CATEGORY: &str = "5c99f98d86f7745c314214b3";
pub const KEYCARD_CATEGORY: &str = "5c164d2286f774194c5e69fa";
pub const MONEY_CASE_CATEGORY: &str = "5795f317245977243854e041";

/// Physical Bitcoin. Its production time scales with installed GPUs instead
/// of being a flat per-craft cost.
pub const BITCOIN: &str = "59faff1d86f7746c51718c9c";

/// Parent id that marks the root of a trader assortment tree.
pub const ASSORT_ROOT: &str = "hideout";

/// Hideout area type that is decorative only; its recipes are ignored.
pub const CHRISTMAS_ILLUMINATION_AREA: i64 = 21;
