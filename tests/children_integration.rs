//! Integration tests for child projection, including a custom host adapter.

use bemstyle::{
    bem, generate_child_props, render_bem_child, render_bem_children, ChildHost, ChildProps,
    ChildStyle, Element, ElementHost, PropBag, PropValue, RuleTable, StyleFragment,
};
use serde_json::json;

#[test]
fn test_generate_child_props_drops_other_keys() {
    let props: PropBag = PropBag::new().add("Mfoo", 1).add("bar", 2);
    let child_props = generate_child_props(&props, None);

    assert_eq!(child_props.len(), 1);
    assert_eq!(child_props.get("Mfoo"), Some(&PropValue::from(1)));
    assert_eq!(child_props.get("bar"), None);
    assert!(child_props.style().is_none());
}

#[test]
fn test_render_bem_child_without_children() {
    let props: PropBag = PropBag::with_children(vec![]);
    assert!(render_bem_child(&ElementHost, &props, None, 0).is_none());
}

#[test]
fn test_render_bem_children_clones_in_order() {
    let c1 = Element::new("Icon");
    let c2 = Element::new("Text").with_prop("numberOfLines", 1);
    let props = PropBag::with_children(vec![c1, c2])
        .add("Mprimary", true)
        .add("Sdisabled", false);
    let style = ChildStyle::from(StyleFragment::new().add("color", "white"));

    let rendered = render_bem_children(&ElementHost, &props, Some(&style));
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].kind(), "Icon");
    assert_eq!(rendered[1].kind(), "Text");
    assert_eq!(rendered[1].prop("numberOfLines"), Some(&PropValue::from(1)));
    for child in &rendered {
        assert_eq!(child.prop("Mprimary"), Some(&PropValue::Bool(true)));
        assert_eq!(child.prop("Sdisabled"), Some(&PropValue::Bool(false)));
        assert_eq!(child.style(), Some(&style));
    }
}

#[test]
fn test_resolved_styles_flow_to_child() {
    let rules = RuleTable::new()
        .add("Button__label", StyleFragment::new().add("color", "black"))
        .add(
            "Button--primary Button__label",
            StyleFragment::new().add("color", "white"),
        );
    let props = PropBag::with_children(vec![Element::new("Text")]).add("Mprimary", true);
    let style = ChildStyle::from(bem("Button__label", &props, &rules));

    let child = render_bem_child(&ElementHost, &props, Some(&style), 0).unwrap();
    match child.style() {
        Some(ChildStyle::List(fragments)) => {
            assert_eq!(fragments[0].get("color"), Some(&json!("white")));
            assert!(fragments[1].is_empty());
        }
        other => panic!("Expected a fragment list, got {:?}", other),
    }
}

/// A host whose children are plain labels and whose clones record the
/// props they received.
struct LabelHost;

#[derive(Debug, Clone, PartialEq)]
struct Label {
    text: String,
    received: Vec<String>,
}

impl ChildHost for LabelHost {
    type Children = Option<Vec<Label>>;
    type Child = Label;

    fn child_count(&self, children: &Self::Children) -> usize {
        children.as_ref().map_or(0, Vec::len)
    }

    fn child_at<'a>(&self, children: &'a Self::Children, index: usize) -> Option<&'a Label> {
        children.as_ref().and_then(|c| c.get(index))
    }

    fn clone_with_props(&self, child: &Label, props: &ChildProps) -> Label {
        Label {
            text: child.text.clone(),
            received: props.iter().map(|(k, _)| k.to_string()).collect(),
        }
    }

    fn map_children<F>(&self, children: &Self::Children, f: F) -> Vec<Label>
    where
        F: FnMut(&Label) -> Label,
    {
        children
            .as_ref()
            .map(|c| c.iter().map(f).collect())
            .unwrap_or_default()
    }
}

fn label(text: &str) -> Label {
    Label {
        text: text.to_string(),
        received: Vec::new(),
    }
}

#[test]
fn test_custom_host_single_child() {
    let props = PropBag::with_children(Some(vec![label("only")])).add("SHover", true);
    let child = render_bem_child(&LabelHost, &props, None, 3).unwrap();
    assert_eq!(child.text, "only");
    assert_eq!(child.received, vec!["SHover".to_string()]);
}

#[test]
fn test_custom_host_absent_children() {
    let props: PropBag<Option<Vec<Label>>> = PropBag::new().add("Ma", true);
    assert!(render_bem_child(&LabelHost, &props, None, 0).is_none());
    assert!(render_bem_children(&LabelHost, &props, None).is_empty());
}

#[test]
fn test_custom_host_returns_child_unchanged_without_props() {
    let original = label("plain");
    let props = PropBag::with_children(Some(vec![original.clone(), label("other")]));
    let rendered = render_bem_children(&LabelHost, &props, None);
    assert_eq!(rendered[0], original);
    assert_eq!(rendered.len(), 2);
}
