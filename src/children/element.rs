//! In-memory element tree and its host adapter.

use super::host::ChildHost;
use super::project::ChildProps;
use crate::props::PropValue;
use crate::style::ChildStyle;

/// A minimal component-tree node.
///
/// Elements carry a type name, ordered properties, an optional style and
/// their own children. They are plain values; cloning with props produces a
/// new element and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use bemstyle::Element;
///
/// let label = Element::new("Text").with_prop("numberOfLines", 1);
/// assert_eq!(label.kind(), "Text");
/// assert_eq!(label.prop("numberOfLines"), Some(&1.into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: String,
    props: Vec<(String, PropValue)>,
    style: Option<ChildStyle>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: Vec::new(),
            style: None,
            children: Vec::new(),
        }
    }

    /// Sets a property, returning the updated element.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set_prop(key.into(), value.into());
        self
    }

    /// Sets the style, returning the updated element.
    pub fn with_style(mut self, style: impl Into<ChildStyle>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Appends a child, returning the updated element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Properties in insertion order.
    pub fn props(&self) -> &[(String, PropValue)] {
        &self.props
    }

    pub fn style(&self) -> Option<&ChildStyle> {
        self.style.as_ref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    fn set_prop(&mut self, key: String, value: PropValue) {
        match self.props.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.props.push((key, value)),
        }
    }
}

/// [`ChildHost`] over `Vec<Element>` children.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementHost;

impl ChildHost for ElementHost {
    type Children = Vec<Element>;
    type Child = Element;

    fn child_count(&self, children: &Vec<Element>) -> usize {
        children.len()
    }

    fn child_at<'a>(&self, children: &'a Vec<Element>, index: usize) -> Option<&'a Element> {
        children.get(index)
    }

    fn clone_with_props(&self, child: &Element, props: &ChildProps) -> Element {
        let mut cloned = child.clone();
        for (key, value) in props.iter() {
            cloned.set_prop(key.to_string(), value.clone());
        }
        if let Some(style) = props.style() {
            cloned.style = Some(style.clone());
        }
        cloned
    }

    fn map_children<F>(&self, children: &Vec<Element>, f: F) -> Vec<Element>
    where
        F: FnMut(&Element) -> Element,
    {
        children.iter().map(f).collect()
    }
}
