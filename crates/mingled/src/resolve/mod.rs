//! Token resolution: variant pipeline + rule table + hook application.

mod engine;

pub use engine::{Resolved, Resolver};
