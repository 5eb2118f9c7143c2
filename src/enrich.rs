//! Enrichment Pass
//!
//! The per-item pipeline: price the item, resolve its barters and usages,
//! classify its tier, then submit the name/short-name/description
//! transforms and the background color. Runs once over the whole catalog
//! after the snapshot is loaded.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::annotate::Annotator;
use crate::barter;
use crate::config::ModConfig;
use crate::data::ids;
use crate::data::{is_flea_banned, ItemTemplate};
use crate::error::EnrichError;
use crate::fmt::{display_num, format_price};
use crate::i18n::TranslationBundle;
use crate::index::RefIndex;
use crate::locale::{Place, TransformQueue};
use crate::pricing;
use crate::rarity::{self, RaritySignals, Tier};
use crate::usage;

/// Everything the pass hands back to the host: ordered locale transforms
/// plus background color overrides, with counters for the log line.
pub struct EnrichOutput {
    pub transforms: TransformQueue,
    pub background_colors: BTreeMap<String, String>,
    pub processed: usize,
    pub skipped: usize,
}

pub struct Enricher<'a> {
    config: &'a ModConfig,
    i18n: &'a TranslationBundle,
    ix: &'a RefIndex<'a>,
    annotator: Annotator,
    user_locale: String,
}

impl<'a> Enricher<'a> {
    pub fn new(config: &'a ModConfig, i18n: &'a TranslationBundle, ix: &'a RefIndex<'a>) -> Self {
        let user_locale = if i18n.debug.enabled {
            warn!(
                "Translation debugging enabled, switching user locale to {}",
                i18n.debug.language_to_debug
            );
            i18n.debug.language_to_debug.clone()
        } else {
            config.user_locale.clone()
        };

        // Transforms only target locales both the server and the mod know.
        let supported = ix
            .supported_locales()
            .filter(|lang| i18n.has_language(lang))
            .map(str::to_string)
            .collect();

        Self { config, i18n, ix, annotator: Annotator::new(supported), user_locale }
    }

    /// Run the full pass over the item catalog.
    pub fn run(mut self) -> Result<EnrichOutput, EnrichError> {
        self.i18n
            .log_language_banner(&self.user_locale, self.config.hide_language_alert);

        let started = Instant::now();
        let ix = self.ix;
        info!("Processing {} items...", ix.snapshot.items.len());

        let mut processed = 0;
        let mut skipped = 0;
        for (index, (item_id, item)) in ix.snapshot.items.iter().enumerate() {
            debug!(
                "Processing item {}/{}: {}",
                index + 1,
                ix.snapshot.items.len(),
                ix.item_name(item_id, &self.user_locale),
            );
            if self.process_item(item_id, item)? {
                processed += 1;
            } else {
                skipped += 1;
            }
        }

        info!(
            "Completed in {} ms: {} items annotated, {} skipped, {} transforms submitted",
            started.elapsed().as_millis(),
            processed,
            skipped,
            self.annotator.transform_count(),
        );

        let (transforms, background_colors) = self.annotator.into_parts();
        Ok(EnrichOutput { transforms, background_colors, processed, skipped })
    }

    /// Annotate one item. Returns false when the item is excluded from
    /// enrichment (node template, no handbook entry, quest item,
    /// currency).
    fn process_item(&mut self, item_id: &str, item: &ItemTemplate) -> Result<bool, EnrichError> {
        let ix = self.ix;
        let config = self.config;
        let i18n = self.i18n;
        let locale = self.user_locale.clone();
        let locale = locale.as_str();
        let props = &item.props;

        if !item.is_real_item()
            || props.quest_item.unwrap_or(false)
            || item.parent == ids::CURRENCY_CATEGORY
        {
            return Ok(false);
        }
        let Some(handbook) = ix.handbook_entry(item_id) else {
            return Ok(false);
        };

        // ------------------------------------------------------------------
        // Derived values every later step reads.
        // ------------------------------------------------------------------
        let flea = pricing::flea_price(ix, item_id);
        let valuation = pricing::best_vendor_price(ix, item_id, locale);
        let Some(vendor_price) = valuation.price else {
            return Ok(false);
        };
        let mut trader_price = vendor_price.round();
        let slot_density = pricing::slot_density(props);

        let barters = barter::resolve_barters(ix, item_id);
        let barter_info = barter::barter_info(ix, i18n, &barters, locale);
        let barter_resource_text = barter::barter_resource_info(ix, i18n, item_id, locale);
        let quest_text = usage::quest_info(ix, i18n, item_id, locale)?;

        let banned = if config.static_flea_ban_list.enabled {
            is_flea_banned(item_id)
        } else {
            props.can_sell_on_ragfair.map(|s| !s).unwrap_or(false)
        };

        // ------------------------------------------------------------------
        // Rarity signals, including the ammo-box price rewrite.
        // ------------------------------------------------------------------
        let is_gear = ix.is_of_base_class(item_id, ids::MOD_CATEGORY)
            || ix.is_of_base_class(item_id, ids::ARMOR_CATEGORY)
            || ix.is_of_base_class(item_id, ids::AMMO_CATEGORY)
            || ix.is_of_base_class(item_id, ids::ARMOR_PLATE_CATEGORY)
            || ix.is_of_base_class(item_id, ids::VEST_CATEGORY)
            || ix.is_of_base_class(item_id, ids::WEAPON_CATEGORY)
            || item.parent == ids::ARMORED_EQUIPMENT_CATEGORY;

        let mut signals = RaritySignals {
            barter_samples: barter_info.rarity_samples.clone(),
            banned,
            gear_without_barter: is_gear && barter_info.text.is_empty() && !banned,
            quest_unlock_bump: quest_text.contains('↺')
                && !quest_text.contains('∈')
                && barter_info.rarity_samples.len() < 4,
            ammo_box_rederived: None,
            custom_override: None,
        };

        // An ammo box is worth its contents; its tier likewise comes from
        // the round inside when nothing else resolved it.
        let mut container_value = None;
        if item.parent == ids::AMMO_BOX_CATEGORY && props.stack_slots.is_some() {
            let (box_price, ammo) = pricing::ammo_box_trader_price(ix, props, locale);
            trader_price = box_price;
            container_value = Some(box_price);

            signals.ammo_box_rederived = Some(match ammo.as_deref() {
                Some(ammo_id) if is_flea_banned(ammo_id) => Tier::Overpowered as i64,
                Some(ammo_id) => {
                    let ammo_barters = barter::resolve_barters(ix, ammo_id);
                    let info = barter::barter_info(ix, i18n, &ammo_barters, locale);
                    *info.rarity_samples.iter().min().unwrap_or(&0)
                }
                None => 0,
            });
        }

        if config.rarity_recolor.enabled {
            signals.custom_override =
                config.rarity_recolor.custom_rarity.get(item_id).copied();
        }
        let rarity = rarity::classify(&signals);

        // ------------------------------------------------------------------
        // Name annotations independent of the description.
        // ------------------------------------------------------------------
        if config.bullet_stats_in_name.enabled
            && matches!(props.ammo_type.as_deref(), Some("bullet") | Some("buckshot"))
        {
            let damage_mult = if props.ammo_type.as_deref() == Some("buckshot") {
                props.buckshot_bullets.unwrap_or(0) as f64
            } else {
                1.0
            };
            self.annotator.add_to_name(
                item_id,
                &format!(
                    " {}/{}",
                    display_num(props.damage.unwrap_or(0.0) * damage_mult),
                    display_num(props.penetration_power.unwrap_or(0.0)),
                ),
                Place::Append,
                None,
            );
        }

        // ------------------------------------------------------------------
        // Tier color and price-line prefix.
        // ------------------------------------------------------------------
        let mut price_line = String::new();
        if config.rarity_recolor.enabled
            && !config.rarity_recolor_blacklist.contains(&item.parent)
        {
            let bypass_ammo = config.rarity_recolor.bypass_ammo_recolor
                && item.parent == ids::AMMO_CATEGORY;
            let bypass_keys = config.rarity_recolor.bypass_keys_recolor
                && (item.parent == ids::KEY_MECHANICAL_CATEGORY
                    || item.parent == ids::KEYCARD_CATEGORY);

            if !bypass_ammo && !bypass_keys {
                let mut tier = Tier::from_ordinal(rarity);

                if tier.is_none() && config.rarity_recolor.fallback_value_based_recolor {
                    let mut value = handbook.price.unwrap_or(0.0);
                    let slots = props.footprint().unwrap_or(0);
                    if slots > 1 {
                        value = (value / slots as f64).round();
                    }
                    if let Some(contents) = container_value {
                        value = contents;
                    }
                    tier = Some(rarity::value_fallback_tier(value, &config.tiers));
                }

                if let Some(tier) = tier {
                    if let Some(hex) = config.tier_color(tier.name_key()) {
                        self.annotator.set_background_color(item_id, hex);
                        self.annotator.add_color_to_name(item_id, hex, None);
                    }
                    if config.rarity_recolor.add_tier_name_to_prices_info {
                        let tier_name = i18n.text(locale, tier.name_key());
                        if !tier_name.is_empty() {
                            price_line.push_str(&format!("{} | ", tier_name));
                        }
                    }
                }
            }
        }

        // ------------------------------------------------------------------
        // Description sections, in display order.
        // ------------------------------------------------------------------
        if config.price_info.enabled {
            if config.price_info.add_flea_price {
                let flea_text = if banned {
                    i18n.text(locale, "BANNED").to_string()
                } else if flea > 0.0 {
                    format!("{}₽", format_price(flea))
                } else {
                    format_price(flea)
                };
                price_line.push_str(&format!(
                    "{}: {} | ",
                    i18n.text(locale, "Fleaprice"),
                    flea_text,
                ));
            }
            if config.price_info.add_item_value {
                price_line.push_str(&format!(
                    "{}: {} | ",
                    i18n.text(locale, "ItemValue"),
                    format_price(handbook.price.unwrap_or(0.0)),
                ));
            }
            price_line.push_str(&format!(
                "{}{}{}: {}₽\n\n",
                i18n.text(locale, "Valuation1"),
                valuation.vendor_name,
                i18n.text(locale, "Valuation2"),
                format_price(trader_price),
            ));
        }

        let headset_line = if config.headset_info.enabled {
            self.headset_section(props, locale)
        } else {
            String::new()
        };
        let armor_line = if config.armor_info.enabled {
            self.armor_section(item_id, item, locale)
        } else {
            String::new()
        };
        let slot_line = if config.container_info.enabled {
            self.slot_efficiency_section(props, locale)
        } else {
            String::new()
        };

        if config.mark_valuable_items.enabled {
            self.mark_valuable(item_id, item, trader_price, flea, banned, slot_density, locale);
        }

        let mut quest_section = String::new();
        if config.quest_info.enabled && !quest_text.is_empty() {
            quest_section = format!("{}\n", quest_text);
            if config.quest_info.fir_in_name && quest_text.contains('✔') {
                self.annotator.add_to_name(item_id, "✔", Place::Append, None);
            }
        }

        let mut hideout_section = String::new();
        if config.hideout_info.enabled {
            let text = usage::hideout_info(ix, i18n, item_id, locale)?;
            if !text.is_empty() {
                hideout_section = format!("{}\n", text);
            }
        }

        let barter_section = if config.barter_info.enabled && !barter_info.text.is_empty() {
            format!("{}\n", barter_info.text)
        } else {
            String::new()
        };

        let mut production_section = String::new();
        if config.production_info.enabled {
            let text = usage::production_info(ix, i18n, item_id, locale)?;
            if !text.is_empty() {
                production_section = format!("{}\n", text);
            }
        }

        let mut crafting_section = String::new();
        if config.crafting_material_info.enabled {
            let text = usage::crafting_material_info(ix, i18n, item_id, locale)?;
            if !text.is_empty() {
                crafting_section = format!("{}\n", text);
            }
        }

        let barter_resource_section =
            if config.barter_resource_info.enabled && !barter_resource_text.is_empty() {
                format!("{}\n", barter_resource_text)
            } else {
                String::new()
            };

        let ammo_section = if config.advanced_ammo_info.enabled
            && item.parent == ids::AMMO_CATEGORY
        {
            ammo_ballistics_section(props)
        } else {
            String::new()
        };

        let description = [
            price_line,
            headset_line,
            armor_line,
            slot_line,
            quest_section,
            hideout_section,
            barter_section,
            production_section,
            crafting_section,
            barter_resource_section,
            ammo_section,
        ]
        .concat();

        if !description.is_empty() {
            self.annotator
                .add_to_description(item_id, &description, Place::Prepend, None);
        }

        Ok(true)
    }

    fn headset_section(&self, props: &crate::data::ItemProps, locale: &str) -> String {
        if props.distortion.is_none() {
            return String::new();
        }

        let ambient = ((props.ambient_compressor_send_level.unwrap_or(-10.0) + 10.0
            + props.env_common_compressor_send_level.unwrap_or(-7.0)
            + 7.0
            + props.env_nature_compressor_send_level.unwrap_or(-5.0)
            + 5.0
            + props.env_technical_compressor_send_level.unwrap_or(-7.0)
            + 7.0)
            * 10.0)
            .round()
            / 10.0;
        let boost = props.compressor_gain.unwrap_or(0.0)
            + (props.compressor_threshold.unwrap_or(-20.0) + 20.0).abs();

        let distortion = props.distortion.unwrap_or(0.0);
        let distortion_part = if distortion > 0.0 {
            format!(
                " | {}: {}%",
                self.i18n.text(locale, "Distortion"),
                display_num((distortion * 100.0).round()),
            )
        } else {
            String::new()
        };

        format!(
            "{}: {}db | {}: +{}db{}\n\n",
            self.i18n.text(locale, "AmbientVolume"),
            display_num(ambient),
            self.i18n.text(locale, "Boost"),
            display_num(boost),
            distortion_part,
        )
    }

    fn armor_section(&mut self, item_id: &str, item: &ItemTemplate, locale: &str) -> String {
        let props = &item.props;
        let (Some(class), Some(material)) =
            (props.armor_class.filter(|c| *c > 0), props.armor_material.as_deref())
        else {
            return String::new();
        };
        let Some(armor) = self.ix.snapshot.armor_materials.get(material) else {
            warn!("Unknown armor material \"{}\" on {}", material, item_id);
            return String::new();
        };
        let Some(destructibility) = armor.destructibility.filter(|d| *d > 0.0) else {
            // Zero destructibility would put the effective durability at
            // infinity; treat it as bad data for this item only.
            warn!("Armor material \"{}\" has no usable destructibility", material);
            return String::new();
        };

        let max_durability = props.max_durability.unwrap_or(0.0);
        let effective = (max_durability / destructibility).round();
        let material_label = self
            .ix
            .locale_get(locale, &format!("Mat{}", material))
            .unwrap_or(material);

        let config = &self.config.armor_info;
        let class_part = if config.add_armor_class_info {
            format!("{}: {} | ", self.i18n.text(locale, "Armorclass"), class)
        } else {
            String::new()
        };

        let line = format!(
            "{}{}: {} ({}: {} x {}: {}) | {}: {}% - {}%\n\n",
            class_part,
            self.i18n.text(locale, "Effectivedurability"),
            display_num(effective),
            self.i18n.text(locale, "Max"),
            display_num(max_durability.round()),
            material_label,
            display_num((1.0 / destructibility * 10.0).round() / 10.0),
            self.i18n.text(locale, "Repairdegradation"),
            display_num((armor.min_repair_degradation.unwrap_or(0.0) * 100.0).round()),
            display_num((armor.max_repair_degradation.unwrap_or(0.0) * 100.0).round()),
        );

        let suffix = format!(" ({}/{})", class, display_num(effective));
        if config.add_armor_to_name {
            self.annotator.add_to_name(item_id, &suffix, Place::Append, None);
        }
        if config.add_armor_to_short_name {
            self.annotator.add_to_short_name(item_id, &suffix, Place::Append, None);
        }

        line
    }

    fn slot_efficiency_section(&self, props: &crate::data::ItemProps, locale: &str) -> String {
        let (Some(cells), Some(footprint)) = (props.total_grid_cells(), props.footprint())
        else {
            return String::new();
        };
        if cells == 0 || footprint == 0 {
            return String::new();
        }

        let efficiency = (cells as f64 / footprint as f64 * 100.0).round() / 100.0;
        format!(
            "{}: x{} ({}/{})\n\n",
            self.i18n.text(locale, "Slotefficiency"),
            display_num(efficiency),
            cells,
            footprint,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn mark_valuable(
        &mut self,
        item_id: &str,
        item: &ItemTemplate,
        trader_price: f64,
        flea: f64,
        banned: bool,
        slot_density: Option<f64>,
        locale: &str,
    ) {
        // Money cases would always qualify; marking them is noise.
        if item.parent == ids::MONEY_CASE_CATEGORY {
            return;
        }

        let mut density = slot_density;
        if self.config.ammo_stack_mark_fix.enabled
            && self.ix.is_of_base_class(item_id, ids::AMMO_CATEGORY)
            && item.props.stack_max_size.unwrap_or(0) > 1
        {
            density = density.map(|d| d * 10.0);
        }
        // Unknown stack size means no meaningful per-slot value.
        let Some(density) = density.filter(|d| *d > 0.0) else {
            return;
        };

        let config = &self.config.mark_valuable_items;
        let trader_value = trader_price / density;
        let flea_value = if banned {
            if config.always_mark_banned_items {
                config.flea_slot_value_threshold_best + 1.0
            } else {
                flea / density
            }
        } else {
            flea / density
        };

        let use_alt = matches!(locale, "jp" | "kr") || config.use_alt_value_mark;
        let mark = if trader_value > config.trader_slot_value_threshold_best
            || flea_value > config.flea_slot_value_threshold_best
        {
            if use_alt { config.alt_best_value_mark.as_str() } else { config.best_value_mark.as_str() }
        } else if trader_value > config.trader_slot_value_threshold_good
            || flea_value > config.flea_slot_value_threshold_good
        {
            if use_alt { config.alt_good_value_mark.as_str() } else { config.good_value_mark.as_str() }
        } else {
            ""
        };

        if mark.is_empty() {
            return;
        }
        let mark = mark.to_string();
        if config.add_to_short_name {
            self.annotator.add_to_short_name(item_id, &mark, Place::Prepend, None);
        }
        if config.add_to_name {
            self.annotator.add_to_name(item_id, &mark, Place::Append, None);
        }
    }
}

/// The ballistics dump for ammunition descriptions.
fn ammo_ballistics_section(props: &crate::data::ItemProps) -> String {
    let mut out = String::new();
    out.push_str(&format!("Damage: {}\n", display_num(props.damage.unwrap_or(0.0))));
    out.push_str(&format!(
        "Penetration Power: {}\n",
        display_num(props.penetration_power.unwrap_or(0.0)),
    ));
    out.push_str(&format!(
        "Armor Damage: {}\n",
        display_num(props.armor_damage.unwrap_or(0.0)),
    ));
    if props.projectile_count.unwrap_or(0) > 1 {
        out.push_str(&format!("Projectile Count: {}\n", props.projectile_count.unwrap_or(0)));
    }
    if props.buckshot_bullets.unwrap_or(0) > 0 {
        out.push_str(&format!("Buckshot Bullets: {}\n", props.buckshot_bullets.unwrap_or(0)));
    }
    out.push_str(&format!(
        "Initial Speed: {}\n",
        display_num(props.initial_speed.unwrap_or(0.0)),
    ));
    out.push_str(&format!(
        "Fragmentation Chance: {}%\n",
        display_num((props.fragmentation_chance.unwrap_or(0.0) * 100.0).round()),
    ));
    if props.max_fragments_count.unwrap_or(0) > 1 {
        out.push_str(&format!(
            "Min Fragments Count: {}\nMax Fragments Count: {}\n",
            props.min_fragments_count.unwrap_or(0),
            props.max_fragments_count.unwrap_or(0),
        ));
    }
    out.push_str(&format!(
        "Ricochet Chance: {}%\n",
        display_num((props.ricochet_chance.unwrap_or(0.0) * 100.0).round()),
    ));
    out.push_str(&format!(
        "Misfire Chance: {}%\n",
        display_num((props.misfire_chance.unwrap_or(0.0) * 100.0).round()),
    ));
    if props.tracer.unwrap_or(false) {
        out.push_str(&format!(
            "Tracer: Yes\nTracer Color: {}\nTracer Distance: {}\n",
            props.tracer_color.as_deref().unwrap_or("unknown"),
            display_num(props.tracer_distance.unwrap_or(0.0)),
        ));
    } else {
        out.push_str("Tracer: No\n");
    }
    if props.explosion_strength.unwrap_or(0.0) > 0.0 {
        out.push_str(&format!(
            "Explosion Strength: {}\nMax Explosion Distance: {}\n",
            display_num(props.explosion_strength.unwrap_or(0.0)),
            display_num(props.max_explosion_distance.unwrap_or(0.0)),
        ));
    }
    out.push_str(&format!(
        "Bullet Mass Gram: {}\n",
        display_num(props.bullet_mass_gram.unwrap_or(0.0)),
    ));
    out.push_str(&format!(
        "Bullet Diameter Millimeters: {}\n",
        display_num(props.bullet_diameter_millimeters.unwrap_or(0.0)),
    ));
    out.push_str(&format!("Weight: {}\n\n", display_num(props.weight.unwrap_or(0.0))));
    out
}
