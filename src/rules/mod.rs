//! Rule tables and BEM resolution.
//!
//! - [`Selector`]: A structured rule key (block, state, modifier, ancestor)
//! - [`RuleTable`]: Style fragments addressed by selector, loadable from YAML or JSON
//! - [`bem`]: Resolves the fragments that apply to a component instance

mod resolve;
mod selector;
mod table;

pub use resolve::{bem, ELEMENT_SEPARATOR};
pub use selector::Selector;
pub use table::{RuleTable, RULE_TABLE_EXTENSIONS};
