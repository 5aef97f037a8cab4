//! Child property projection.
//!
//! - [`ChildHost`]: The seam over a component-tree framework's children API
//! - [`Element`]/[`ElementHost`]: An in-memory tree and its adapter
//! - [`generate_child_props`], [`render_bem_child`], [`render_bem_children`]:
//!   Hand a component's modifier/state props (and style) down to its children

mod element;
mod host;
mod project;

pub use element::{Element, ElementHost};
pub use host::ChildHost;
pub use project::{generate_child_props, render_bem_child, render_bem_children, ChildProps};
