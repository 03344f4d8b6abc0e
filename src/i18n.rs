//! Text lookup used for chart labels.
//!
//! Keys are dotted paths into a nested JSON catalog (`chart.year`). A missing
//! key falls back to the default language, then to the key itself.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::Result;

pub const KEY_YEAR: &str = "chart.year";
pub const KEY_CONTRIBUTIONS: &str = "chart.contributions";
pub const KEY_INTEREST: &str = "chart.interest";

pub const FALLBACK_LANGUAGE: &str = "en";

const BUNDLED: [(&str, &str); 3] = [
    ("en", include_str!("../locales/en.json")),
    ("es", include_str!("../locales/es.json")),
    ("ca", include_str!("../locales/ca.json")),
];

pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Flattened key/value catalog for one language plus its fallback.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: String,
    entries: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(language: &str, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let mut entries = HashMap::new();
        flatten_into(&value, String::new(), &mut entries);
        Ok(Self {
            language: language.to_string(),
            entries,
            fallback: HashMap::new(),
        })
    }

    /// Catalog for a bundled language. Accepts region tags (`es-ES`) and falls
    /// back to English for languages that are not bundled.
    pub fn bundled(language: &str) -> Result<Self> {
        let primary = language
            .split(['-', '_'])
            .next()
            .unwrap_or(FALLBACK_LANGUAGE)
            .to_ascii_lowercase();
        let fallback = bundled_json(FALLBACK_LANGUAGE).unwrap_or("{}");
        let mut catalog = match bundled_json(&primary) {
            Some(json) => Self::from_json(&primary, json)?,
            None => Self::from_json(FALLBACK_LANGUAGE, fallback)?,
        };
        if catalog.language != FALLBACK_LANGUAGE {
            catalog.fallback = Self::from_json(FALLBACK_LANGUAGE, fallback)?.entries;
        }
        Ok(catalog)
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

pub fn bundled_languages() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(lang, _)| *lang)
}

fn bundled_json(language: &str) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, json)| *json)
}

fn flatten_into(value: &Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(child, path, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}
