//! Projection of modifier/state props onto children.

use super::host::ChildHost;
use crate::props::{PropBag, PropValue};
use crate::style::ChildStyle;

/// The properties handed down from a component to its children.
///
/// Holds the parent's modifier and state props in their original order,
/// plus an optional style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildProps {
    entries: Vec<(String, PropValue)>,
    style: Option<ChildStyle>,
}

impl ChildProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, returning the updated set.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Sets the style, returning the updated set.
    pub fn with_style(mut self, style: impl Into<ChildStyle>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn style(&self) -> Option<&ChildStyle> {
        self.style.as_ref()
    }

    /// Properties in order, style excluded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties, counting the style as one.
    pub fn len(&self) -> usize {
        self.entries.len() + usize::from(self.style.is_some())
    }

    /// True when there is nothing to merge onto a child.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filters `props` down to the properties children should receive.
///
/// Every modifier and state prop is copied regardless of its value; other
/// props are dropped. When `style` is given it is attached as the style.
///
/// # Example
///
/// ```rust
/// use bemstyle::{generate_child_props, PropBag};
///
/// let props: PropBag = PropBag::new().add("Mfoo", 1).add("bar", 2);
/// let child_props = generate_child_props(&props, None);
///
/// assert_eq!(child_props.len(), 1);
/// assert_eq!(child_props.get("Mfoo"), Some(&1.into()));
/// assert!(child_props.style().is_none());
/// ```
pub fn generate_child_props<C>(props: &PropBag<C>, style: Option<&ChildStyle>) -> ChildProps {
    ChildProps {
        entries: props
            .bem_props()
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect(),
        style: style.cloned(),
    }
}

/// Renders one child with the component's projected props.
///
/// Returns `None` when the component has no children. A single child is
/// used whatever `index` is; with several children the one at `index` is
/// used, and `None` is returned if `index` is out of range. The child is
/// cloned with the projected props merged in, or returned unchanged when
/// there is nothing to project.
pub fn render_bem_child<H: ChildHost>(
    host: &H,
    props: &PropBag<H::Children>,
    style: Option<&ChildStyle>,
    index: usize,
) -> Option<H::Child> {
    let children = props.children();
    let child = match host.child_count(children) {
        0 => return None,
        1 => host.child_at(children, 0)?,
        _ => host.child_at(children, index)?,
    };

    let bem_props = generate_child_props(props, style);
    Some(project(host, child, &bem_props))
}

/// Renders every child with the component's projected props.
///
/// The same projected props are merged onto each child; order and count
/// are preserved.
pub fn render_bem_children<H: ChildHost>(
    host: &H,
    props: &PropBag<H::Children>,
    style: Option<&ChildStyle>,
) -> Vec<H::Child> {
    let bem_props = generate_child_props(props, style);
    host.map_children(props.children(), |child| project(host, child, &bem_props))
}

fn project<H: ChildHost>(host: &H, child: &H::Child, bem_props: &ChildProps) -> H::Child {
    if bem_props.is_empty() {
        return child.clone();
    }
    tracing::trace!(props = bem_props.len(), "cloning child with bem props");
    host.clone_with_props(child, bem_props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children::{Element, ElementHost};
    use crate::style::StyleFragment;

    #[test]
    fn test_generate_child_props_keeps_bem_only() {
        let props: PropBag = PropBag::new()
            .add("Mfoo", 1)
            .add("bar", 2)
            .add("Sbaz", false);
        let child_props = generate_child_props(&props, None);
        let keys: Vec<&str> = child_props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Mfoo", "Sbaz"]);
        assert!(child_props.style().is_none());
    }

    #[test]
    fn test_generate_child_props_with_style() {
        let props: PropBag = PropBag::new();
        let style = ChildStyle::from(vec![StyleFragment::new()]);
        let child_props = generate_child_props(&props, Some(&style));
        assert_eq!(child_props.len(), 1);
        assert_eq!(child_props.style(), Some(&style));
    }

    #[test]
    fn test_generate_child_props_empty() {
        let props: PropBag = PropBag::new().add("label", "x");
        assert!(generate_child_props(&props, None).is_empty());
    }

    #[test]
    fn test_render_bem_child_no_children() {
        let props: PropBag = PropBag::new().add("Ma", true);
        assert!(render_bem_child(&ElementHost, &props, None, 0).is_none());
    }

    #[test]
    fn test_render_bem_child_single_ignores_index() {
        let props = PropBag::with_children(vec![Element::new("Only")]).add("Ma", true);
        let child = render_bem_child(&ElementHost, &props, None, 5).unwrap();
        assert_eq!(child.kind(), "Only");
        assert_eq!(child.prop("Ma"), Some(&PropValue::Bool(true)));
    }

    #[test]
    fn test_render_bem_child_by_index() {
        let props = PropBag::with_children(vec![Element::new("A"), Element::new("B")])
            .add("Sactive", true);
        let child = render_bem_child(&ElementHost, &props, None, 1).unwrap();
        assert_eq!(child.kind(), "B");
        assert!(child.prop("Sactive").is_some());
    }

    #[test]
    fn test_render_bem_child_index_out_of_range() {
        let props = PropBag::with_children(vec![Element::new("A"), Element::new("B")]);
        assert!(render_bem_child(&ElementHost, &props, None, 2).is_none());
    }

    #[test]
    fn test_render_bem_child_unchanged_without_props() {
        let original = Element::new("A").with_prop("x", 1);
        let props = PropBag::with_children(vec![original.clone()]).add("label", "y");
        let child = render_bem_child(&ElementHost, &props, None, 0).unwrap();
        assert_eq!(child, original);
    }

    #[test]
    fn test_render_bem_children_same_props_each() {
        let props = PropBag::with_children(vec![Element::new("A"), Element::new("B")])
            .add("MSize", "lg");
        let style = ChildStyle::from(StyleFragment::new().add("flex", 1));
        let rendered = render_bem_children(&ElementHost, &props, Some(&style));

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].kind(), "A");
        assert_eq!(rendered[1].kind(), "B");
        for child in &rendered {
            assert_eq!(child.prop("MSize"), Some(&PropValue::from("lg")));
            assert_eq!(child.style(), Some(&style));
        }
    }

    #[test]
    fn test_render_bem_children_empty() {
        let props: PropBag = PropBag::new().add("Ma", true);
        assert!(render_bem_children(&ElementHost, &props, None).is_empty());
    }

    #[test]
    fn test_render_does_not_mutate_input() {
        let props = PropBag::with_children(vec![Element::new("A")]).add("Ma", true);
        let _ = render_bem_children(&ElementHost, &props, None);
        assert!(props.children()[0].prop("Ma").is_none());
    }
}
