//! Annotation Emitter
//!
//! Collects the pass's output: locale string transforms and background
//! color overrides. Submissions without an explicit language fan out to
//! every server-supported locale. Nothing is written to the host here;
//! the queue and color map are handed back when the pass finishes.

use std::collections::BTreeMap;

use crate::locale::{Field, Place, Transform, TransformQueue};

pub struct Annotator {
    /// Locales with a loaded string table, in stable order.
    supported_locales: Vec<String>,
    queue: TransformQueue,
    background_colors: BTreeMap<String, String>,
}

impl Annotator {
    pub fn new(supported_locales: Vec<String>) -> Self {
        Self {
            supported_locales,
            queue: TransformQueue::new(),
            background_colors: BTreeMap::new(),
        }
    }

    fn submit(&mut self, item_id: &str, field: Field, place: Place, text: &str, lang: Option<&str>) {
        match lang {
            Some(lang) => self.queue.push(Transform {
                lang: lang.to_string(),
                key: field.locale_key(item_id),
                place,
                text: text.to_string(),
            }),
            None => {
                for i in 0..self.supported_locales.len() {
                    let lang = self.supported_locales[i].clone();
                    self.submit(item_id, field, place, text, Some(&lang));
                }
            }
        }
    }

    pub fn add_to_name(&mut self, item_id: &str, text: &str, place: Place, lang: Option<&str>) {
        self.submit(item_id, Field::Name, place, text, lang);
    }

    pub fn add_to_short_name(&mut self, item_id: &str, text: &str, place: Place, lang: Option<&str>) {
        self.submit(item_id, Field::ShortName, place, text, lang);
    }

    pub fn add_to_description(&mut self, item_id: &str, text: &str, place: Place, lang: Option<&str>) {
        self.submit(item_id, Field::Description, place, text, lang);
    }

    /// Wrap the display name in a color tag.
    pub fn add_color_to_name(&mut self, item_id: &str, hex_color: &str, lang: Option<&str>) {
        let template = format!("<b><color={}></color></b>", hex_color);
        self.submit(item_id, Field::Name, Place::Wrap, &template, lang);
    }

    /// Record the item's new display background color.
    pub fn set_background_color(&mut self, item_id: &str, hex_color: &str) {
        self.background_colors.insert(item_id.to_string(), hex_color.to_string());
    }

    pub fn transform_count(&self) -> usize {
        self.queue.len()
    }

    pub fn into_parts(self) -> (TransformQueue, BTreeMap<String, String>) {
        (self.queue, self.background_colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_out_to_all_supported_locales() {
        let mut annotator = Annotator::new(vec!["en".into(), "fr".into(), "ru".into()]);
        annotator.add_to_name("item1", " ✔", Place::Append, None);

        let (queue, _) = annotator.into_parts();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.resolve("fr", "item1 Name", "MBSS"), "MBSS ✔");
        assert_eq!(queue.resolve("ru", "item1 Name", "МБСС"), "МБСС ✔");
    }

    #[test]
    fn test_explicit_locale_stays_scoped() {
        let mut annotator = Annotator::new(vec!["en".into(), "fr".into()]);
        annotator.add_to_short_name("item1", "💰", Place::Prepend, Some("en"));

        let (queue, _) = annotator.into_parts();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.resolve("fr", "item1 ShortName", "MBSS"), "MBSS");
    }

    #[test]
    fn test_color_wrap_template() {
        let mut annotator = Annotator::new(vec!["en".into()]);
        annotator.add_color_to_name("item1", "#13b4a7", None);
        annotator.set_background_color("item1", "#13b4a7");

        let (queue, colors) = annotator.into_parts();
        assert_eq!(
            queue.resolve("en", "item1 Name", "LEDX"),
            "<b><color=#13b4a7>LEDX</color></b>"
        );
        assert_eq!(colors["item1"], "#13b4a7");
    }
}
