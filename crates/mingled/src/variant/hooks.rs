//! Post-processing hooks registered by variant stages.
//!
//! A hook is a pure transform applied to the matcher's eventual output:
//! a selector rewrite, a declaration body rewrite, or a nesting-context
//! rewrite. Each is an explicit value rather than a captured closure,
//! so a [`crate::variant::Rewrite`] stays inspectable and structurally
//! comparable.

use crate::types::Declaration;

/// Separator between chained parent contexts.
///
/// Hosts split the accumulated parent string on this token to recover
/// the individual nested wrappers.
pub const PARENT_SEPARATOR: &str = " $$ ";

/// Appends a suffix (e.g. `:hover`) to the final CSS selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorHook {
    suffix: String,
}

impl SelectorHook {
    /// Create a hook that appends `suffix` to the selector.
    pub fn append(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// The raw suffix this hook appends.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Apply the hook to a base selector.
    pub fn apply(&self, selector: &str) -> String {
        format!("{selector}{}", self.suffix)
    }
}

/// Rewrites every literal value in the final declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyHook {
    /// Append ` !important` to every value, nested blocks included.
    Important,
}

impl BodyHook {
    /// Apply the hook, producing a new declaration.
    pub fn apply(&self, declaration: &Declaration) -> Declaration {
        match self {
            Self::Important => declaration.map_literals(&|value| format!("{value} !important")),
        }
    }
}

/// Extends the accumulated parent-context string (e.g. a media query).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestingHook {
    context: String,
}

impl NestingHook {
    /// Create a hook that wraps the result in `context`.
    pub fn wrap(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// The context string this hook appends.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Chain this context onto an existing parent context, if any.
    pub fn apply(&self, parent: Option<&str>) -> String {
        match parent {
            Some(parent) => format!("{parent}{PARENT_SEPARATOR}{}", self.context),
            None => self.context.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_hook_appends_suffix() {
        let hook = SelectorHook::append(":hover");
        assert_eq!(hook.apply(".btn"), ".btn:hover");
        assert_eq!(hook.suffix(), ":hover");
    }

    #[test]
    fn body_hook_marks_every_value_important() {
        let decl = Declaration::new()
            .with("overflow", "hidden")
            .with("text-overflow", "ellipsis");

        let marked = BodyHook::Important.apply(&decl);
        assert_eq!(marked.get("overflow"), Some("hidden !important"));
        assert_eq!(marked.get("text-overflow"), Some("ellipsis !important"));
        // The original declaration is untouched.
        assert_eq!(decl.get("overflow"), Some("hidden"));
    }

    #[test]
    fn nesting_hook_chains_with_separator() {
        let hook = NestingHook::wrap("@media (min-width: 768px)");
        assert_eq!(hook.apply(None), "@media (min-width: 768px)");
        assert_eq!(
            hook.apply(Some("@supports (display: grid)")),
            "@supports (display: grid) $$ @media (min-width: 768px)"
        );
    }
}
