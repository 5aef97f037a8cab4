//! # bemstyle - BEM Styling for Component Trees
//!
//! `bemstyle` computes BEM-style (Block-Element-Modifier) presentation
//! attributes for UI components. A component declares modifier (`M`-prefixed)
//! and state (`S`-prefixed) props; `bemstyle` resolves which style fragments
//! of a rule table apply, and hands those props down to child elements.
//!
//! ## Core Concepts
//!
//! - [`PropBag`]: A component's declared props, classified once by prefix
//! - [`RuleTable`]: Style fragments addressed by [`Selector`], loadable from YAML/JSON
//! - [`bem`]: Resolve the applicable fragments for a block
//! - [`render_bem_child`]/[`render_bem_children`]: Project props onto children
//!   through a [`ChildHost`] adapter
//! - [`kebab_case`]: Property name to selector segment
//!
//! ## Quick Start
//!
//! ```rust
//! use bemstyle::{bem, merge_fragments, PropBag, RuleTable};
//!
//! let rules = RuleTable::from_yaml(r#"
//! Button:
//!   padding: 8
//!   color: black
//! Button--size-lg:
//!   padding: 16
//! Button.disabled:
//!   color: gray
//! "#).unwrap();
//!
//! let props: PropBag = PropBag::new()
//!     .add("MSize", "lg")
//!     .add("Sdisabled", true);
//!
//! let style = merge_fragments(&bem("Button", &props, &rules));
//! assert_eq!(style.get("padding"), Some(&16.into()));
//! assert_eq!(style.get("color"), Some(&"gray".into()));
//! ```
//!
//! ## Selectors
//!
//! | Prop | Value | Selector |
//! |------|-------|----------|
//! | `Mactive` | `true` | `Button--active` |
//! | `MSize` | `"lg"` | `Button--size-lg` |
//! | `SHover` | `true` | `Button.hover` |
//!
//! For an element block such as `Card__title`, each prop also looks up rules
//! scoped to the parent block: `Card--active title` and
//! `Card--active Card__title`.
//!
//! ## Children
//!
//! ```rust
//! use bemstyle::{bem, render_bem_children, ChildStyle, Element, ElementHost, PropBag, RuleTable};
//!
//! let props = PropBag::with_children(vec![Element::new("Icon"), Element::new("Text")])
//!     .add("MSize", "lg")
//!     .add("onPress", true);
//! let style = ChildStyle::from(bem("Button__label", &props, &RuleTable::new()));
//!
//! let children = render_bem_children(&ElementHost, &props, Some(&style));
//! assert_eq!(children.len(), 2);
//! assert!(children[0].prop("MSize").is_some());
//! assert!(children[0].prop("onPress").is_none());
//! ```

pub mod children;
pub mod props;
pub mod rules;
pub mod style;
mod util;

// Property model exports
pub use props::{Prop, PropBag, PropKind, PropValue};

// Style exports
pub use style::{merge_fragments, ChildStyle, RuleTableError, StyleFragment};

// Rule exports
pub use rules::{bem, RuleTable, Selector, ELEMENT_SEPARATOR, RULE_TABLE_EXTENSIONS};

// Child projection exports
pub use children::{
    generate_child_props, render_bem_child, render_bem_children, ChildHost, ChildProps, Element,
    ElementHost,
};

// Utility exports
pub use util::kebab_case;
