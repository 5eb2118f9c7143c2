//! Handbook price table. One entry per sellable item; items without an
//! entry are excluded from enrichment entirely.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Handbook {
    #[serde(rename = "Items", default)]
    pub items: Vec<HandbookEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandbookEntry {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "ParentId")]
    pub parent_id: Option<String>,
    /// Base monetary value in roubles.
    #[serde(rename = "Price")]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handbook() {
        let json = r#"{
            "Items": [
                { "Id": "590c5d4b86f774784e1b9c45", "ParentId": "5b47574386f77428ca22b33a", "Price": 24000 },
                { "Id": "5449016a4bdc2d6f028b456f", "ParentId": "5b47574386f77428ca22b341", "Price": 1 }
            ]
        }"#;

        let handbook: Handbook = serde_json::from_str(json).unwrap();
        assert_eq!(handbook.items.len(), 2);
        assert_eq!(handbook.items[0].price, Some(24000.0));
    }
}
