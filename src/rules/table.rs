//! Rule table: selector to style fragment lookup.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde_json::Value;

use super::selector::Selector;
use crate::style::{RuleTableError, StyleFragment};

/// Recognized rule table file extensions in priority order.
pub const RULE_TABLE_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// A collection of style fragments addressed by selector.
///
/// Entries are keyed by the selector's text form, so a fragment added as
/// `"Button--size-lg"` is found by `Selector::block("Button").with_modifier("size-lg")`.
///
/// # Example
///
/// ```rust
/// use bemstyle::{RuleTable, Selector, StyleFragment};
///
/// let rules = RuleTable::new()
///     .add("Button", StyleFragment::new().add("padding", 8))
///     .add(
///         Selector::block("Button").with_modifier("size-lg"),
///         StyleFragment::new().add("padding", 16),
///     );
///
/// assert!(rules.has("Button--size-lg"));
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable {
    rules: HashMap<String, StyleFragment>,
}

impl RuleTable {
    /// Creates an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fragment under `selector`, returning the updated table.
    ///
    /// `selector` may be a [`Selector`] or selector text. A later fragment
    /// for the same selector replaces the earlier one.
    pub fn add(mut self, selector: impl std::fmt::Display, fragment: StyleFragment) -> Self {
        self.insert(selector, fragment);
        self
    }

    /// Inserts a fragment under `selector`.
    pub fn insert(&mut self, selector: impl std::fmt::Display, fragment: StyleFragment) {
        self.rules.insert(selector.to_string(), fragment);
    }

    /// Looks up the fragment for a structured selector.
    pub fn get(&self, selector: &Selector) -> Option<&StyleFragment> {
        self.rules.get(&selector.to_string())
    }

    /// Returns whether a fragment exists for the given selector text.
    pub fn has(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Selector texts in this table, in no particular order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parses a rule table from YAML.
    ///
    /// The document is a mapping of selector text to a mapping of style
    /// properties:
    ///
    /// ```yaml
    /// Button:
    ///   padding: 8
    /// Button--size-lg:
    ///   padding: 16
    /// "Card--active Card__title":
    ///   color: white
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, RuleTableError> {
        let raw: BTreeMap<String, Value> =
            serde_yaml::from_str(source).map_err(|e| RuleTableError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    /// Parses a rule table from JSON, with the same shape as [`from_yaml`](Self::from_yaml).
    pub fn from_json(source: &str) -> Result<Self, RuleTableError> {
        let raw: BTreeMap<String, Value> =
            serde_json::from_str(source).map_err(|e| RuleTableError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    /// Loads a rule table from a file, choosing the format by extension.
    ///
    /// See [`RULE_TABLE_EXTENSIONS`] for the recognized extensions.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RuleTableError> {
        let path = path.as_ref();
        let name = path.to_string_lossy();
        let ext = RULE_TABLE_EXTENSIONS
            .iter()
            .find(|ext| name.ends_with(*ext))
            .ok_or_else(|| RuleTableError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;

        let source = std::fs::read_to_string(path).map_err(|e| RuleTableError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let parsed = if *ext == ".json" {
            Self::from_json(&source)
        } else {
            Self::from_yaml(&source)
        };

        let table = parsed.map_err(|e| match e {
            RuleTableError::Parse { message, .. } => RuleTableError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), rules = table.len(), "loaded rule table");
        Ok(table)
    }

    fn from_raw(raw: BTreeMap<String, Value>) -> Result<Self, RuleTableError> {
        let mut table = Self::new();
        for (selector, value) in raw {
            let fragment = match value {
                Value::Object(map) => StyleFragment::from(map),
                other => {
                    return Err(RuleTableError::InvalidFragment {
                        selector,
                        message: format!("expected a mapping of style properties, got {}", other),
                    })
                }
            };
            table.rules.insert(selector, fragment);
        }
        tracing::debug!(rules = table.len(), "parsed rule table");
        Ok(table)
    }
}
