//! Property bag for a single component instance.

use super::prop::{Prop, PropKind};
use super::value::PropValue;
use crate::children::Element;
use crate::style::StyleFragment;

/// The declared properties of a component.
///
/// Entries keep their insertion order; inserting an existing key replaces its
/// value in place. The reserved BEM slots (`blockName`, `style` and
/// `children`) are held separately rather than as entries.
///
/// `C` is the host's children container; see [`ChildHost`](crate::ChildHost).
///
/// # Example
///
/// ```rust
/// use bemstyle::{PropBag, StyleFragment};
/// use serde_json::json;
///
/// let props: PropBag = PropBag::new()
///     .add("MSize", "lg")
///     .add("Sdisabled", true)
///     .add("label", "Save")
///     .with_block_name("Button")
///     .with_style(StyleFragment::from_json(json!({"margin": 4})).unwrap());
///
/// assert_eq!(props.bem_props().count(), 2);
/// assert_eq!(props.block_name(), Some("Button"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropBag<C = Vec<Element>> {
    entries: Vec<Prop>,
    block_name: Option<String>,
    style: Option<StyleFragment>,
    children: C,
}

impl<C: Default> PropBag<C> {
    /// Creates an empty bag with no children.
    pub fn new() -> Self {
        Self::with_children(C::default())
    }
}

impl<C: Default> Default for PropBag<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PropBag<C> {
    /// Creates an empty bag holding `children`.
    pub fn with_children(children: C) -> Self {
        Self {
            entries: Vec::new(),
            block_name: None,
            style: None,
            children,
        }
    }

    /// Adds a property, returning the updated bag for chaining.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a property, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let prop = Prop::new(key, value);
        match self.entries.iter_mut().find(|p| p.key == prop.key) {
            Some(existing) => *existing = prop,
            None => self.entries.push(prop),
        }
    }

    /// Sets the alias block name, returning the updated bag.
    pub fn with_block_name(mut self, name: impl Into<String>) -> Self {
        self.block_name = Some(name.into());
        self
    }

    /// Sets the inline style override, returning the updated bag.
    pub fn with_style(mut self, style: StyleFragment) -> Self {
        self.style = Some(style);
        self
    }

    /// Replaces the children, keeping every other property.
    pub fn replace_children<D>(self, children: D) -> PropBag<D> {
        PropBag {
            entries: self.entries,
            block_name: self.block_name,
            style: self.style,
            children,
        }
    }

    /// All entries in insertion order.
    pub fn props(&self) -> &[Prop] {
        &self.entries
    }

    /// Entries classified as modifiers or states, in insertion order.
    pub fn bem_props(&self) -> impl Iterator<Item = &Prop> {
        self.entries.iter().filter(|p| p.kind.is_bem())
    }

    /// Entries of a single kind, in insertion order.
    pub fn props_of(&self, kind: PropKind) -> impl Iterator<Item = &Prop> {
        self.entries.iter().filter(move |p| p.kind == kind)
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    /// The alias block name, if one was set.
    pub fn block_name(&self) -> Option<&str> {
        self.block_name.as_deref()
    }

    /// The inline style override, if one was set.
    pub fn style(&self) -> Option<&StyleFragment> {
        self.style.as_ref()
    }

    pub fn children(&self) -> &C {
        &self.children
    }

    /// Number of entries (reserved slots excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
