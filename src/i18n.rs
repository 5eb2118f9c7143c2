//! Mod Translations
//!
//! The mod's own UI strings (section labels, tier names, glyph words),
//! separate from the game's locale tables. Loaded from
//! `config/translations.toml`; any language missing a key inherits the
//! English value at load time.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationBundle {
    #[serde(default)]
    pub debug: TranslationDebug,
    /// Language code -> key -> display string.
    #[serde(rename = "lang", default)]
    pub languages: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TranslationDebug {
    pub enabled: bool,
    pub language_to_debug: String,
}

impl TranslationBundle {
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        let mut bundle: Self =
            toml::from_str(&content).map_err(|e| format!("Failed to parse {:?}: {}", path, e))?;

        if !bundle.languages.contains_key("en") {
            return Err(format!("Translations file {:?} has no [lang.en] table", path));
        }

        bundle.fill_from_english();
        Ok(bundle)
    }

    /// English bundle used when no translations file is shipped.
    pub fn builtin_english() -> Self {
        let en: BTreeMap<String, String> = [
            ("BANNED", "BANNED"),
            ("COMMON", "Common"),
            ("RARE", "Rare"),
            ("EPIC", "Epic"),
            ("LEGENDARY", "Legendary"),
            ("UBER", "Uber"),
            ("UNOBTAINIUM", "Unobtainium"),
            ("OVERPOWERED", "Overpowered"),
            ("CUSTOM", "Custom"),
            ("CUSTOM2", "Custom+"),
            ("Fleaprice", "Flea price"),
            ("ItemValue", "ItemValue"),
            ("Valuation1", "Sell to "),
            ("Valuation2", ""),
            ("Armorclass", "Armor class"),
            ("Effectivedurability", "Effective durability"),
            ("Max", "Max"),
            ("Repairdegradation", "Repair degradation"),
            ("Slotefficiency", "Slot efficiency"),
            ("AmbientVolume", "Ambient volume"),
            ("Boost", "Boost"),
            ("Distortion", "Distortion"),
            ("Bought", "Bought"),
            ("at", "at"),
            ("lv", "lv"),
            ("Traded", "Traded"),
            ("Found", "Found"),
            ("Need", "Need"),
            ("Crafted", "Crafted"),
            ("peritem", "per item"),
            ("Part", "Part"),
            ("Tool", "Tool"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let mut languages = BTreeMap::new();
        languages.insert("en".to_string(), en);
        Self { debug: TranslationDebug::default(), languages }
    }

    /// Back-fill every non-English language with English values for keys it
    /// is missing. In debug mode, report the holes for the language under
    /// translation.
    pub fn fill_from_english(&mut self) {
        let Some(english) = self.languages.get("en").cloned() else {
            return;
        };

        for (key, en_value) in &english {
            for (lang, table) in self.languages.iter_mut() {
                if lang == "en" {
                    continue;
                }

                let debugging = self.debug.enabled && *lang == self.debug.language_to_debug;

                match table.get(key) {
                    Some(value) if debugging && !value.is_empty() && value == en_value => {
                        warn!("{} translation for \"{}\" is the same as English", lang, key);
                    }
                    Some(_) => {}
                    None => {
                        if debugging {
                            warn!("{} is missing the \"{}\" translation", lang, key);
                        }
                        table.insert(key.clone(), en_value.clone());
                    }
                }
            }
        }
    }

    /// Look up a mod string, falling back to English and then to the key
    /// itself.
    pub fn text<'a>(&'a self, lang: &str, key: &'a str) -> &'a str {
        self.languages
            .get(lang)
            .and_then(|t| t.get(key))
            .or_else(|| self.languages.get("en").and_then(|t| t.get(key)))
            .map(String::as_str)
            .unwrap_or(key)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// Startup notice about language support, suppressible by config.
    pub fn log_language_banner(&self, user_locale: &str, hide_alert: bool) {
        if hide_alert {
            return;
        }

        info!(
            "This mod supports other languages! \
             Мод поддерживает другие языки! \
             Este mod es compatible con otros idiomas!"
        );
        info!(
            "Your selected language is \"{}\". You can customise it in the mod config. \
             Translation debug mode is available in translations.toml",
            user_locale
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_english_has_tier_names() {
        let bundle = TranslationBundle::builtin_english();
        assert_eq!(bundle.text("en", "UNOBTAINIUM"), "Unobtainium");
        assert_eq!(bundle.text("en", "BANNED"), "BANNED");
    }

    #[test]
    fn test_fill_from_english() {
        let mut bundle = TranslationBundle::builtin_english();
        bundle
            .languages
            .insert("ru".to_string(), [("BANNED".to_string(), "ЗАПРЕЩЕНО".to_string())].into());

        bundle.fill_from_english();

        // Translated key kept, missing keys inherited.
        assert_eq!(bundle.text("ru", "BANNED"), "ЗАПРЕЩЕНО");
        assert_eq!(bundle.text("ru", "Fleaprice"), "Flea price");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let bundle = TranslationBundle::builtin_english();
        assert_eq!(bundle.text("de", "Found"), "Found");
        assert_eq!(bundle.text("en", "NoSuchKey"), "NoSuchKey");
    }
}
