//! BEM rule resolution.
//!
//! This module computes the style fragments that apply to one component
//! instance from its block name, its modifier/state props and a
//! [`RuleTable`].

use super::selector::Selector;
use super::table::RuleTable;
use crate::props::PropBag;
use crate::style::StyleFragment;

/// BEM separator between a block and its element.
pub const ELEMENT_SEPARATOR: &str = "__";

/// Resolves the style fragments for a component.
///
/// Returns one fragment per resolved block name followed by the inline
/// style, so the result always has at least two entries. Callers merge the
/// list in order with later-wins semantics (see
/// [`merge_fragments`](crate::merge_fragments)) or pass it on as a list.
///
/// Resolution per block name:
///
/// 1. Block names are `block`, then `props.block_name()` when non-empty.
/// 2. Each block starts from a copy of its bare rule, or an empty fragment.
/// 3. Every truthy modifier/state prop, in bag order, merges the rule for
///    `block.state` or `block--modifier`.
/// 4. For an element block `parent__element`, the same prop also merges the
///    parent-scoped rules `parent--modifier element` and
///    `parent--modifier parent__element`, in that order.
///
/// Missing rules contribute nothing.
///
/// # Example
///
/// ```rust
/// use bemstyle::{bem, PropBag, RuleTable, StyleFragment};
///
/// let rules = RuleTable::new()
///     .add("Button", StyleFragment::new().add("padding", 8))
///     .add("Button--size-lg", StyleFragment::new().add("padding", 16));
/// let props: PropBag = PropBag::new().add("MSize", "lg");
///
/// let styles = bem("Button", &props, &rules);
/// assert_eq!(styles.len(), 2);
/// assert_eq!(styles[0].get("padding"), Some(&16.into()));
/// assert!(styles[1].is_empty());
/// ```
pub fn bem<C>(block: &str, props: &PropBag<C>, rules: &RuleTable) -> Vec<StyleFragment> {
    let mut blocks = vec![block];
    if let Some(alias) = props.block_name().filter(|name| !name.is_empty()) {
        blocks.push(alias);
    }

    let mut styles: Vec<StyleFragment> = blocks
        .into_iter()
        .map(|block| resolve_block(block, props, rules))
        .collect();

    styles.push(props.style().cloned().unwrap_or_default());
    styles
}

fn resolve_block<C>(block: &str, props: &PropBag<C>, rules: &RuleTable) -> StyleFragment {
    let element = block.split_once(ELEMENT_SEPARATOR);
    let mut style = rules
        .get(&Selector::block(block))
        .cloned()
        .unwrap_or_default();

    for prop in props.bem_props().filter(|p| p.value.is_truthy()) {
        let modifier = prop.modifier();
        let state = prop.state();

        let own = Selector::block(block).qualified(state, modifier.as_deref());
        apply(&mut style, rules, &own);

        if let Some((parent, element)) = element {
            for descendant in [element, block] {
                let scoped =
                    Selector::scoped(parent, descendant).qualified(state, modifier.as_deref());
                apply(&mut style, rules, &scoped);
            }
        }
    }

    style
}

fn apply(style: &mut StyleFragment, rules: &RuleTable, selector: &Selector) {
    if let Some(fragment) = rules.get(selector) {
        tracing::trace!(selector = %selector, "applying rule");
        style.merge(fragment);
    }
}
