//! Core output types.

mod declaration;

pub use declaration::{Declaration, Value};
