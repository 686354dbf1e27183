// Core structs: SpecTree, normalized records, output rows, error types
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A value attached to a label inside a specification tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecValue {
    Text(String),
    Tree(SpecTree),
    /// Anything that is neither text nor a nested mapping (numbers, booleans, null).
    Other(serde_json::Value),
}

/// Ordered mapping of category -> label -> value, as flattened from a product page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecTree {
    entries: Vec<(String, SpecValue)>,
}

impl SpecTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing an existing entry with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: SpecValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn insert_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, SpecValue::Text(value.into()));
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a tree from a JSON value. Only objects produce entries; a
    /// non-object root yields an empty tree.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut tree = SpecTree::new();
        if let serde_json::Value::Object(map) = value {
            for (key, v) in map {
                tree.insert(key.clone(), SpecValue::from_json(v));
            }
        }
        tree
    }
}

impl SpecValue {
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => SpecValue::Text(s.clone()),
            serde_json::Value::Object(_) => SpecValue::Tree(SpecTree::from_json(value)),
            other => SpecValue::Other(other.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalDimensions {
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    pub depth: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub shipping_weight: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElectricalAttributes {
    pub volts: Option<String>,
    pub hertz: Option<String>,
    pub amps: Option<String>,
    pub watts: Option<String>,
}

/// Result of a normalization pass over one specification tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedSpecs {
    #[serde(flatten)]
    pub dimensions: CanonicalDimensions,
    #[serde(flatten)]
    pub electrical: ElectricalAttributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Certification {
    Yes,
    No,
}

impl Certification {
    pub fn as_flag(&self) -> &'static str {
        match self {
            Certification::Yes => "Y",
            Certification::No => "N",
        }
    }
}

impl fmt::Display for Certification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

impl Serialize for Certification {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_flag())
    }
}

/// Everything pulled out of a single product page.
#[derive(Debug, Clone, Default)]
pub struct ProductDetails {
    pub url: String,
    pub image: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub spec_pdf: Option<String>,
    pub specifications: SpecTree,
}

/// One output row, ready for whatever writes the tabular output.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRow {
    pub mfr_number: String,
    pub model_name: String,
    pub url: String,
    pub image: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub spec_pdf: Option<String>,
    #[serde(flatten)]
    pub dimensions: CanonicalDimensions,
    #[serde(flatten)]
    pub electrical: ElectricalAttributes,
    pub green_certification: Certification,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("invalid response")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("html parse error: {0}")]
    HtmlParseError(String),
    #[error("missing field: {0}")]
    MissingField(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read spec file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse spec file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut tree = SpecTree::new();
        tree.insert_text("a", "1");
        tree.insert_text("b", "2");
        tree.insert_text("a", "3");

        let keys: Vec<&str> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(tree.get("a"), Some(&SpecValue::Text("3".into())));
    }

    #[test]
    fn test_from_json_keeps_order_and_kinds() {
        let tree = SpecTree::from_json(&json!({
            "Physical": { "Weight": "45 lbs", "Count": 3 },
            "General": { "Color": "Black" }
        }));

        let keys: Vec<&str> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Physical", "General"]);

        let Some(SpecValue::Tree(physical)) = tree.get("Physical") else {
            panic!("expected nested tree");
        };
        assert_eq!(physical.get("Weight"), Some(&SpecValue::Text("45 lbs".into())));
        assert_eq!(physical.get("Count"), Some(&SpecValue::Other(json!(3))));
    }

    #[test]
    fn test_product_row_serializes_flat() {
        let row = ProductRow {
            mfr_number: "RF28".into(),
            model_name: "Fridge".into(),
            url: "https://example.com/p".into(),
            image: None,
            price: Some("$999".into()),
            description: None,
            spec_pdf: None,
            dimensions: CanonicalDimensions {
                width: Some(dec!(30.5)),
                ..Default::default()
            },
            electrical: ElectricalAttributes {
                volts: Some("120V".into()),
                ..Default::default()
            },
            green_certification: Certification::Yes,
            fetched_at: Utc::now(),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["width"], json!("30.5"));
        assert_eq!(value["volts"], json!("120V"));
        assert_eq!(value["green_certification"], json!("Y"));
        assert!(value["height"].is_null());
    }
}
