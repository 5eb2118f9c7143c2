//! Locale String Transforms
//!
//! The pass never rewrites host locale strings in place. It records ordered
//! transform submissions against `(language, key)` pairs; the final string
//! for a key is composed over the base value when somebody reads or applies
//! it. Rebuilding the queue from the same snapshot therefore always
//! resolves to the same strings, no matter how often the pass runs.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

/// The three locale fields the pass writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    ShortName,
    Description,
}

impl Field {
    pub fn key_suffix(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::ShortName => "ShortName",
            Field::Description => "Description",
        }
    }

    /// Host locale tables key item strings as `"{itemId} {Field}"`.
    pub fn locale_key(&self, item_id: &str) -> String {
        format!("{} {}", item_id, self.key_suffix())
    }
}

/// Where a transform splices its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    Prepend,
    Append,
    /// Splits a color-tag template into prefix and suffix halves around the
    /// current value.
    Wrap,
}

/// Length of the closing half of the wrap template (`</color></b>`).
const WRAP_SUFFIX_LEN: usize = 12;

#[derive(Debug, Clone)]
pub struct Transform {
    pub lang: String,
    pub key: String,
    pub place: Place,
    pub text: String,
}

impl Transform {
    fn apply(&self, current: &str) -> String {
        match self.place {
            Place::Prepend => format!("{}{}", self.text, current),
            Place::Append => format!("{}{}", current, self.text),
            Place::Wrap => {
                if self.text.len() < WRAP_SUFFIX_LEN
                    || !self.text.is_char_boundary(self.text.len() - WRAP_SUFFIX_LEN)
                {
                    warn!("Malformed wrap template \"{}\", skipping", self.text);
                    return current.to_string();
                }
                let (prefix, suffix) = self.text.split_at(self.text.len() - WRAP_SUFFIX_LEN);
                format!("{}{}{}", prefix, current, suffix)
            }
        }
    }
}

/// Ordered list of pending locale transforms.
#[derive(Debug, Clone, Default)]
pub struct TransformQueue {
    transforms: Vec<Transform>,
}

impl TransformQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Compose every pending transform for `(lang, key)` over a base value,
    /// in submission order.
    pub fn resolve(&self, lang: &str, key: &str, base: &str) -> String {
        self.transforms
            .iter()
            .filter(|t| t.lang == lang && t.key == key)
            .fold(base.to_string(), |current, t| t.apply(&current))
    }

    /// Write every composed string back into a set of locale tables. This
    /// is what the host does with the queue once the pass is finished.
    /// Returns the number of strings changed.
    pub fn apply(&self, tables: &mut BTreeMap<String, HashMap<String, String>>) -> usize {
        let mut touched: Vec<(&str, &str)> = self
            .transforms
            .iter()
            .map(|t| (t.lang.as_str(), t.key.as_str()))
            .collect();
        touched.sort_unstable();
        touched.dedup();

        let mut changed = 0;
        for (lang, key) in touched {
            let Some(table) = tables.get_mut(lang) else {
                warn!("Transform targets unknown locale \"{}\", skipping", lang);
                continue;
            };
            let base = table.get(key).cloned().unwrap_or_default();
            let resolved = self.resolve(lang, key, &base);
            if resolved != base {
                table.insert(key.to_string(), resolved);
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(place: Place, text: &str) -> Transform {
        Transform { lang: "en".into(), key: "item1 Name".into(), place, text: text.into() }
    }

    #[test]
    fn test_compose_order_is_submission_order() {
        let mut queue = TransformQueue::new();
        queue.push(transform(Place::Append, " ✔"));
        queue.push(transform(Place::Prepend, "💰 "));

        assert_eq!(queue.resolve("en", "item1 Name", "MBSS"), "💰 MBSS ✔");
    }

    #[test]
    fn test_wrap_splices_around_current_value() {
        let mut queue = TransformQueue::new();
        queue.push(transform(Place::Append, " (4/50)"));
        queue.push(transform(Place::Wrap, "<b><color=#b73a3a></color></b>"));

        assert_eq!(
            queue.resolve("en", "item1 Name", "6B43"),
            "<b><color=#b73a3a>6B43 (4/50)</color></b>"
        );
    }

    #[test]
    fn test_resolve_is_scoped_by_lang_and_key() {
        let mut queue = TransformQueue::new();
        queue.push(Transform {
            lang: "ru".into(),
            key: "item1 Name".into(),
            place: Place::Append,
            text: "!".into(),
        });

        assert_eq!(queue.resolve("en", "item1 Name", "MBSS"), "MBSS");
        assert_eq!(queue.resolve("ru", "item1 Name", "MBSS"), "MBSS!");
    }

    #[test]
    fn test_apply_writes_back_and_counts() {
        let mut queue = TransformQueue::new();
        queue.push(transform(Place::Prepend, "Line one\n\n"));

        let mut tables = BTreeMap::new();
        tables.insert(
            "en".to_string(),
            HashMap::from([("item1 Name".to_string(), "MBSS".to_string())]),
        );

        assert_eq!(queue.apply(&mut tables), 1);
        assert_eq!(tables["en"]["item1 Name"], "Line one\n\nMBSS");

        // Re-applying the same queue to pristine tables resolves the same
        // string; the queue never stacks onto its own output.
        let mut pristine = BTreeMap::new();
        pristine.insert(
            "en".to_string(),
            HashMap::from([("item1 Name".to_string(), "MBSS".to_string())]),
        );
        queue.apply(&mut pristine);
        assert_eq!(pristine["en"]["item1 Name"], tables["en"]["item1 Name"]);
    }

    #[test]
    fn test_malformed_wrap_template_is_ignored() {
        let mut queue = TransformQueue::new();
        queue.push(transform(Place::Wrap, "short"));
        assert_eq!(queue.resolve("en", "item1 Name", "MBSS"), "MBSS");
    }
}
