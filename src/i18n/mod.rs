//! Internationalization (i18n) support

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Translation keys used by the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I18nKey {
    Uncategorized,
}

impl I18nKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            I18nKey::Uncategorized => "uncategorized",
        }
    }
}

/// Built-in translations: (lang, key, text)
const BUILTIN: &[(&str, &str, &str)] = &[
    ("en", "uncategorized", "Uncategorized"),
    ("ja", "uncategorized", "未分類"),
    ("zh_CN", "uncategorized", "未分类"),
    ("zh_TW", "uncategorized", "未分類"),
    ("ko", "uncategorized", "미분류"),
    ("es", "uncategorized", "Sin categoría"),
];

/// Internationalization handler
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> key -> translation
    translations: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    /// Create a handler seeded with the built-in translations
    pub fn new(language: &str) -> Self {
        let mut translations: HashMap<String, HashMap<String, serde_yaml::Value>> =
            HashMap::new();
        for (lang, key, text) in BUILTIN {
            translations
                .entry(lang.to_string())
                .or_default()
                .insert(key.to_string(), serde_yaml::Value::String(text.to_string()));
        }

        Self {
            language: normalize_lang(language),
            translations,
        }
    }

    /// Load language files from a directory, overriding built-ins key by key
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() {
                let ext = path.extension().and_then(|e| e.to_str());
                if matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                    let lang = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .map(normalize_lang)
                        .unwrap_or_else(|| "en".to_string());

                    let content = fs::read_to_string(&path)?;

                    // Try to parse, skip invalid files
                    let data: Option<HashMap<String, serde_yaml::Value>> = if ext == Some("json") {
                        match serde_json::from_str::<serde_json::Value>(&content) {
                            Ok(json) => Some(convert_json_to_yaml(json)),
                            Err(e) => {
                                tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                                None
                            }
                        }
                    } else {
                        match serde_yaml::from_str(&content) {
                            Ok(data) => Some(data),
                            Err(e) => {
                                tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                                None
                            }
                        }
                    };

                    if let Some(data) = data {
                        self.translations.entry(lang).or_default().extend(data);
                        tracing::debug!("Loaded language file: {:?}", path);
                    }
                }
            }
        }

        Ok(())
    }

    /// Get a translation by key
    /// Key can be nested like "menu.home"
    pub fn get(&self, key: &str) -> String {
        self.get_for_lang(&self.language, key)
    }

    /// Get a translation for a known key
    pub fn translate(&self, key: I18nKey) -> String {
        self.get(key.as_str())
    }

    /// Get a translation for a specific language
    pub fn get_for_lang(&self, lang: &str, key: &str) -> String {
        let lookup = |lang: &str| {
            self.translations
                .get(lang)
                .and_then(|data| get_nested_value(data, key))
                .map(yaml_value_to_string)
        };

        if let Some(value) = lookup(lang) {
            return value;
        }

        // "zh_CN" falls back to "zh"
        if let Some((base, _)) = lang.split_once('_') {
            if let Some(value) = lookup(base) {
                return value;
            }
        }

        // Fallback to English
        if lang != "en" {
            if let Some(value) = lookup("en") {
                return value;
            }
        }

        // Return key as fallback
        key.to_string()
    }
}

/// "zh-cn" and "zh_CN" both become "zh_CN"
fn normalize_lang(lang: &str) -> String {
    match lang.split_once(['-', '_']) {
        Some((base, region)) => format!("{}_{}", base.to_lowercase(), region.to_uppercase()),
        None => lang.to_lowercase(),
    }
}

/// Get a nested value from a YAML map using dot notation
fn get_nested_value<'a>(
    data: &'a HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<&'a serde_yaml::Value> {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current: Option<&serde_yaml::Value> = data.get(parts[0]);

    for part in &parts[1..] {
        match current {
            Some(serde_yaml::Value::Mapping(map)) => {
                current = map.get(serde_yaml::Value::String(part.to_string()));
            }
            _ => return None,
        }
    }

    current
}

/// Convert a YAML value to a string
fn yaml_value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}

/// Convert JSON value to YAML HashMap
fn convert_json_to_yaml(json: serde_json::Value) -> HashMap<String, serde_yaml::Value> {
    let mut result = HashMap::new();

    if let serde_json::Value::Object(obj) = json {
        for (key, value) in obj {
            result.insert(key, json_value_to_yaml(value));
        }
    }

    result
}

fn json_value_to_yaml(json: serde_json::Value) -> serde_yaml::Value {
    match json {
        serde_json::Value::Null => serde_yaml::Value::Null,
        serde_json::Value::Bool(b) => serde_yaml::Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_yaml::Value::Number(i.into())
            } else if let Some(f) = n.as_f64() {
                serde_yaml::Value::Number(serde_yaml::Number::from(f))
            } else {
                serde_yaml::Value::Null
            }
        }
        serde_json::Value::String(s) => serde_yaml::Value::String(s),
        serde_json::Value::Array(arr) => {
            serde_yaml::Value::Sequence(arr.into_iter().map(json_value_to_yaml).collect())
        }
        serde_json::Value::Object(obj) => {
            let mut map = serde_yaml::Mapping::new();
            for (k, v) in obj {
                map.insert(serde_yaml::Value::String(k), json_value_to_yaml(v));
            }
            serde_yaml::Value::Mapping(map)
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("en")
    }
}
