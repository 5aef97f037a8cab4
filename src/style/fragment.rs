//! Style fragments and their composition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat mapping of style property names to values.
///
/// Fragments compose with later-wins semantics: merging `b` into `a`
/// overwrites every key of `a` that `b` also defines.
///
/// # Example
///
/// ```rust
/// use bemstyle::StyleFragment;
///
/// let mut base = StyleFragment::new().add("color", "black").add("padding", 4);
/// base.merge(&StyleFragment::new().add("color", "red"));
///
/// assert_eq!(base.get("color"), Some(&"red".into()));
/// assert_eq!(base.get("padding"), Some(&4.into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment {
    properties: Map<String, Value>,
}

impl StyleFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fragment from a JSON object.
    ///
    /// Returns `None` if `value` is not an object.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(properties) => Some(Self { properties }),
            _ => None,
        }
    }

    /// Adds a property, returning the updated fragment for chaining.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Copies every property of `other` over this fragment.
    pub fn merge(&mut self, other: &StyleFragment) {
        for (name, value) in &other.properties {
            self.properties.insert(name.clone(), value.clone());
        }
    }

    /// Folds fragments in order into one, later fragments winning.
    pub fn merged<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = &'a StyleFragment>,
    {
        let mut result = Self::new();
        for fragment in fragments {
            result.merge(fragment);
        }
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Consumes the fragment, returning the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.properties
    }
}

impl From<Map<String, Value>> for StyleFragment {
    fn from(properties: Map<String, Value>) -> Self {
        Self { properties }
    }
}

/// Folds a resolver result into a single fragment, later entries winning.
pub fn merge_fragments(fragments: &[StyleFragment]) -> StyleFragment {
    StyleFragment::merged(fragments)
}

/// The style handed down to children: one fragment or an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildStyle {
    Single(StyleFragment),
    /// A list such as the one returned by [`bem`](crate::bem).
    List(Vec<StyleFragment>),
}

impl From<StyleFragment> for ChildStyle {
    fn from(fragment: StyleFragment) -> Self {
        ChildStyle::Single(fragment)
    }
}

impl From<Vec<StyleFragment>> for ChildStyle {
    fn from(fragments: Vec<StyleFragment>) -> Self {
        ChildStyle::List(fragments)
    }
}
