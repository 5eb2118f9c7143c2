//! Item Template Structures
//!
//! Deserialized from the host database's items table. Every gameplay
//! property is optional; the enrichment pass only reads the ones relevant
//! to the item category it is looking at.

use serde::Deserialize;

/// A single item template from the host catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemTemplate {
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Parent category id.
    #[serde(rename = "_parent", default)]
    pub parent: String,
    /// `"Item"` for real items, `"Node"` for structural category entries.
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
}

impl ItemTemplate {
    /// Real items participate in enrichment; node templates only shape the
    /// category tree.
    pub fn is_real_item(&self) -> bool {
        self.kind == "Item"
    }
}

/// Optional gameplay properties attached to a template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemProps {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "ShortName")]
    pub short_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,

    #[serde(rename = "Width")]
    pub width: Option<u32>,
    #[serde(rename = "Height")]
    pub height: Option<u32>,
    #[serde(rename = "StackMaxSize")]
    pub stack_max_size: Option<u32>,
    #[serde(rename = "Weight")]
    pub weight: Option<f64>,

    #[serde(rename = "QuestItem")]
    pub quest_item: Option<bool>,
    #[serde(rename = "CanSellOnRagfair")]
    pub can_sell_on_ragfair: Option<bool>,
    #[serde(rename = "BackgroundColor")]
    pub background_color: Option<String>,

    // Armor.
    #[serde(rename = "armorClass")]
    pub armor_class: Option<u32>,
    #[serde(rename = "ArmorMaterial")]
    pub armor_material: Option<String>,
    #[serde(rename = "MaxDurability")]
    pub max_durability: Option<f64>,

    // Ammo ballistics.
    #[serde(rename = "ammoType")]
    pub ammo_type: Option<String>,
    #[serde(rename = "Damage")]
    pub damage: Option<f64>,
    #[serde(rename = "PenetrationPower")]
    pub penetration_power: Option<f64>,
    #[serde(rename = "ArmorDamage")]
    pub armor_damage: Option<f64>,
    #[serde(rename = "ProjectileCount")]
    pub projectile_count: Option<u32>,
    #[serde(rename = "buckshotBullets")]
    pub buckshot_bullets: Option<u32>,
    #[serde(rename = "InitialSpeed")]
    pub initial_speed: Option<f64>,
    #[serde(rename = "FragmentationChance")]
    pub fragmentation_chance: Option<f64>,
    #[serde(rename = "MinFragmentsCount")]
    pub min_fragments_count: Option<u32>,
    #[serde(rename = "MaxFragmentsCount")]
    pub max_fragments_count: Option<u32>,
    #[serde(rename = "RicochetChance")]
    pub ricochet_chance: Option<f64>,
    #[serde(rename = "MisfireChance")]
    pub misfire_chance: Option<f64>,
    #[serde(rename = "Tracer")]
    pub tracer: Option<bool>,
    #[serde(rename = "TracerColor")]
    pub tracer_color: Option<String>,
    #[serde(rename = "TracerDistance")]
    pub tracer_distance: Option<f64>,
    #[serde(rename = "ExplosionStrength")]
    pub explosion_strength: Option<f64>,
    #[serde(rename = "MaxExplosionDistance")]
    pub max_explosion_distance: Option<f64>,
    #[serde(rename = "BulletMassGram")]
    pub bullet_mass_gram: Option<f64>,
    #[serde(rename = "BulletDiameterMilimeters")]
    pub bullet_diameter_millimeters: Option<f64>,

    // Containers.
    #[serde(rename = "Grids")]
    pub grids: Option<Vec<Grid>>,
    #[serde(rename = "StackSlots")]
    pub stack_slots: Option<Vec<StackSlot>>,

    // Headsets.
    #[serde(rename = "Distortion")]
    pub distortion: Option<f64>,
    #[serde(rename = "CompressorGain")]
    pub compressor_gain: Option<f64>,
    #[serde(rename = "CompressorTreshold")]
    pub compressor_threshold: Option<f64>,
    #[serde(rename = "AmbientCompressorSendLevel")]
    pub ambient_compressor_send_level: Option<f64>,
    #[serde(rename = "EnvCommonCompressorSendLevel")]
    pub env_common_compressor_send_level: Option<f64>,
    #[serde(rename = "EnvNatureCompressorSendLevel")]
    pub env_nature_compressor_send_level: Option<f64>,
    #[serde(rename = "EnvTechnicalCompressorSendLevel")]
    pub env_technical_compressor_send_level: Option<f64>,

    // Consumable resource pool (fuel, medkits). Used to value fractional
    // recipe requirements.
    #[serde(rename = "Resource")]
    pub resource: Option<f64>,
}

impl ItemProps {
    /// Total cell count across all storage grids, if the item has any.
    pub fn total_grid_cells(&self) -> Option<u32> {
        let grids = self.grids.as_ref().filter(|g| !g.is_empty())?;
        Some(
            grids
                .iter()
                .map(|g| g.props.cells_h.unwrap_or(0) * g.props.cells_v.unwrap_or(0))
                .sum(),
        )
    }

    /// Inventory footprint in cells, when both dimensions are known.
    pub fn footprint(&self) -> Option<u32> {
        Some(self.width? * self.height?)
    }

    /// The first allowed ammo id and max count of the first stack slot.
    /// Ammo boxes carry exactly one such slot in practice.
    pub fn first_stack_slot(&self) -> Option<(Option<String>, Option<u32>)> {
        let slot = self.stack_slots.as_ref()?.first()?;
        let ammo = slot
            .props
            .as_ref()
            .and_then(|p| p.filters.as_ref())
            .and_then(|f| f.first())
            .and_then(|f| f.filter.as_ref())
            .and_then(|ids| ids.first())
            .cloned();
        Some((ammo, slot.max_count))
    }
}

/// A storage grid inside a container item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Grid {
    #[serde(rename = "_props", default)]
    pub props: GridProps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridProps {
    #[serde(rename = "cellsH")]
    pub cells_h: Option<u32>,
    #[serde(rename = "cellsV")]
    pub cells_v: Option<u32>,
}

/// A fixed ammunition slot inside an ammo box.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StackSlot {
    #[serde(rename = "_max_count")]
    pub max_count: Option<u32>,
    #[serde(rename = "_props")]
    pub props: Option<StackSlotProps>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StackSlotProps {
    #[serde(default)]
    pub filters: Option<Vec<SlotFilter>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotFilter {
    #[serde(rename = "Filter")]
    pub filter: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_template() {
        let json = r#"{
            "_id": "590c5d4b86f774784e1b9c45",
            "_parent": "5448e8d04bdc2ddf718b4569",
            "_type": "Item",
            "_props": { "Name": "Iskra ration pack", "Width": 2, "Height": 1, "StackMaxSize": 1 }
        }"#;

        let item: ItemTemplate = serde_json::from_str(json).unwrap();
        assert!(item.is_real_item());
        assert_eq!(item.props.name.as_deref(), Some("Iskra ration pack"));
        assert_eq!(item.props.footprint(), Some(2));
        assert!(item.props.grids.is_none());
    }

    #[test]
    fn test_first_stack_slot() {
        let json = r#"{
            "_id": "57372c21245977670937c6c2",
            "_parent": "543be5cb4bdc2deb348b4568",
            "_type": "Item",
            "_props": {
                "StackSlots": [{
                    "_max_count": 120,
                    "_props": { "filters": [{ "Filter": ["56dff026d2720bb8668b4567"] }] }
                }]
            }
        }"#;

        let item: ItemTemplate = serde_json::from_str(json).unwrap();
        let (ammo, count) = item.props.first_stack_slot().unwrap();
        assert_eq!(ammo.as_deref(), Some("56dff026d2720bb8668b4567"));
        assert_eq!(count, Some(120));
    }

    #[test]
    fn test_total_grid_cells() {
        let props = ItemProps {
            width: Some(3),
            height: Some(3),
            grids: Some(vec![
                Grid { props: GridProps { cells_h: Some(4), cells_v: Some(4) } },
                Grid { props: GridProps { cells_h: Some(2), cells_v: Some(2) } },
            ]),
            ..Default::default()
        };

        assert_eq!(props.total_grid_cells(), Some(20));
        assert_eq!(props.footprint(), Some(9));
    }
}
