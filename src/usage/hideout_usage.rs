//! Hideout upgrade scanner.
//!
//! Finds every area stage that consumes the item as an upgrade
//! requirement.

use crate::error::EnrichError;
use crate::fmt::display_num;
use crate::i18n::TranslationBundle;
use crate::index::RefIndex;

pub fn hideout_info(
    ix: &RefIndex<'_>,
    i18n: &TranslationBundle,
    item_id: &str,
    locale: &str,
) -> Result<String, EnrichError> {
    let mut text = String::new();

    for area in &ix.snapshot.hideout_areas {
        let (Some(area_type), Some(stages)) = (area.area_type, &area.stages) else {
            continue;
        };

        // Stage keys are numbers-as-strings; sort numerically so output
        // order is stable.
        let mut ordered: Vec<(&String, _)> = stages.iter().collect();
        ordered.sort_by_key(|(num, _)| num.parse::<u32>().unwrap_or(u32::MAX));

        for (stage_number, stage) in ordered {
            for requirement in &stage.requirements {
                if requirement.template_id.as_deref() != Some(item_id) {
                    continue;
                }
                text.push_str(&format!(
                    "{} x{} > {} {}{}\n",
                    i18n.text(locale, "Need"),
                    display_num(requirement.count.unwrap_or(0.0)),
                    ix.area_name(area_type, locale)?,
                    i18n.text(locale, "lv"),
                    stage_number,
                ));
            }
        }
    }

    Ok(text)
}
