//! Parsed locator documents.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

use crate::page_id::PageId;
use crate::result::{PomError, PomResult};

/// Flat mapping from locator name to selector string for one page.
///
/// Immutable once parsed; the resolver hands out shared references to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocatorDocument {
    entries: BTreeMap<String, String>,
}

impl LocatorDocument {
    /// Parse a YAML locator document.
    ///
    /// `page` and `path` only feed the error context. A blank or comment-only
    /// source is an empty document; keys are checked lazily by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`PomError::ConfigurationInvalid`] if the root is not a flat
    /// mapping, a key repeats, or any selector is null, non-string or empty.
    pub fn parse(page: PageId, path: &Path, source: &str) -> PomResult<Self> {
        if is_blank(source) {
            return Ok(Self::default());
        }

        let invalid = |message: String| PomError::ConfigurationInvalid {
            page,
            path: path.to_path_buf(),
            message,
        };

        let RawEntries(raw) =
            serde_yaml_ng::from_str(source).map_err(|e| invalid(e.to_string()))?;

        let mut entries = BTreeMap::new();
        for (key, value) in raw {
            let selector = match value {
                Value::String(selector) if !selector.trim().is_empty() => selector,
                Value::String(_) => {
                    return Err(invalid(format!("locator '{key}' has an empty selector")))
                }
                Value::Null => return Err(invalid(format!("locator '{key}' has no selector"))),
                _ => {
                    return Err(invalid(format!(
                        "locator '{key}' must be a selector string"
                    )))
                }
            };
            let _ = entries.insert(key, selector);
        }

        Ok(Self { entries })
    }

    /// Selector stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Locator names in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Name/selector pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of locators
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no locators
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subset of `keys` absent from this document, in the order given
    #[must_use]
    pub fn missing<'k>(&self, keys: &[&'k str]) -> Vec<&'k str> {
        keys.iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }
}

/// Whether `source` holds nothing but whitespace and comments
fn is_blank(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

/// Mapping entries in document order, rejecting repeated keys.
struct RawEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of locator names to selectors")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawEntries(Vec::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut seen = HashSet::new();
                let mut entries = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if !seen.insert(key.clone()) {
                        return Err(de::Error::custom(format!(
                            "duplicate locator key '{key}'"
                        )));
                    }
                    entries.push((key, map.next_value()?));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocatorDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
