//! Style fragments and rule table errors.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleFragment`]: A flat map of style properties, merged later-wins
//! - [`ChildStyle`]: The style handed to children, one fragment or a list
//! - [`RuleTableError`]: Errors from loading rule tables

mod error;
mod fragment;

pub use error::RuleTableError;
pub use fragment::{merge_fragments, ChildStyle, StyleFragment};
