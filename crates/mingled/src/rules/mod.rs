//! The ordered utility rule table and its matcher.

mod rule;
mod table;

pub use rule::{Handler, Rule};
pub use table::RuleTable;
