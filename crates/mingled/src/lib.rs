//! Utility-class token resolver.
//!
//! This crate decides whether a short token like `m:8|0` or
//! `c:red:hover@md!` describes a style rule and, if so, produces a
//! structured declaration for it. The core is:
//!
//! - **Value decoders**: pure, total string-to-value functions (length
//!   conversion, color mixing, spacing expansion, keyword tables)
//! - **Rule table**: an ordered list of anchored patterns with
//!   first-match-wins resolution
//! - **Variant pipeline**: suffix-stripping stages (`:hover`, `!`,
//!   `@md`) that register post-processing hooks for the final result
//! - **Resolver**: the single resolve-token-to-declaration contract
//!
//! Token discovery, caching, deduplication, and stylesheet
//! serialization belong to the host framework consuming the
//! [`preset::Preset`]; this crate is the resolver it calls once per
//! unique token.
//!
//! # Example
//!
//! ```
//! use mingled::prelude::*;
//!
//! let resolver = Resolver::new(Theme::default())?;
//!
//! let resolved = resolver.resolve("m:8|0").unwrap();
//! assert_eq!(resolved.declaration.get("margin"), Some("0.5rem 0rem"));
//!
//! let resolved = resolver.resolve("c:red:hover@md").unwrap();
//! assert_eq!(resolved.selector_for(".x"), ".x:hover");
//! assert_eq!(resolved.parent.as_deref(), Some("@media (min-width: 768px)"));
//!
//! // Unrecognized tokens are opaque, never an error.
//! assert!(resolver.resolve("not-a-utility").is_none());
//! # Ok::<(), mingled::Error>(())
//! ```

pub mod decode;
pub mod preset;
pub mod resolve;
pub mod rules;
pub mod theme;
pub mod types;
pub mod variant;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::preset::{Preset, Transformer};
    pub use crate::resolve::{Resolved, Resolver};
    pub use crate::rules::{Rule, RuleTable};
    pub use crate::theme::{Breakpoint, Breakpoints, Theme};
    pub use crate::types::{Declaration, Value};
    pub use crate::variant::{
        BodyHook, NestingHook, PARENT_SEPARATOR, Rewrite, SelectorHook, VariantPipeline,
        VariantStage,
    };
}
