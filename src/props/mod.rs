//! Component property model.
//!
//! - [`PropValue`]: A boolean, string or numeric property value
//! - [`Prop`]/[`PropKind`]: A key classified once as modifier, state or other
//! - [`PropBag`]: The ordered properties of one component instance
//!
//! Keys starting with `M` are modifiers and keys starting with `S` are
//! states. Classification happens when a key enters a [`PropBag`], so
//! resolution and projection branch on [`PropKind`] instead of inspecting
//! key prefixes.

mod bag;
mod prop;
mod value;

pub use bag::PropBag;
pub use prop::{Prop, PropKind};
pub use value::PropValue;
