//! The resolver entry point.

use crate::error::Result;
use crate::rules::RuleTable;
use crate::theme::Theme;
use crate::types::Declaration;
use crate::variant::{SelectorHook, VariantPipeline};

/// The final result of resolving one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The style declaration, with any body hook already applied.
    pub declaration: Declaration,
    /// Selector rewrite the host applies to the generated CSS selector.
    pub selector: Option<SelectorHook>,
    /// Parent context the host wraps the rule in (e.g. a media query).
    /// Chained contexts are separated by
    /// [`PARENT_SEPARATOR`](crate::variant::PARENT_SEPARATOR).
    pub parent: Option<String>,
}

impl Resolved {
    /// Apply the selector rewrite, if any, to a base selector.
    pub fn selector_for(&self, base: &str) -> String {
        match &self.selector {
            Some(hook) => hook.apply(base),
            None => base.to_string(),
        }
    }
}

/// Resolves utility tokens to style declarations.
///
/// Composes the variant pipeline, the rule table, and hook application
/// into the single resolve contract exposed to hosts. Resolution is
/// synchronous, side-effect-free, and total: the worst case for a
/// malformed token is "unresolved", never a fault. A `Resolver` holds
/// only immutable state and can be shared across threads.
#[derive(Debug)]
pub struct Resolver {
    theme: Theme,
    rules: RuleTable,
    variants: VariantPipeline,
}

impl Resolver {
    /// Build a resolver with the standard rule table and pipeline.
    pub fn new(theme: Theme) -> Result<Self> {
        Ok(Self {
            theme,
            rules: RuleTable::standard()?,
            variants: VariantPipeline::standard(),
        })
    }

    /// Build a resolver from explicit parts.
    pub fn with_parts(theme: Theme, rules: RuleTable, variants: VariantPipeline) -> Self {
        Self {
            theme,
            rules,
            variants,
        }
    }

    /// The theme this resolver was built with.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The ordered rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The ordered variant pipeline.
    pub fn variants(&self) -> &VariantPipeline {
        &self.variants
    }

    /// Resolve a token.
    ///
    /// The variant pipeline reduces the token and collects hooks, the
    /// rule table resolves the reduced token, and the hooks are applied
    /// to the entire result: the body hook rewrites the declaration,
    /// the selector and nesting hooks are surfaced on [`Resolved`].
    ///
    /// `None` means no pattern matched; hosts treat the token as
    /// opaque.
    pub fn resolve(&self, token: &str) -> Option<Resolved> {
        let rewrite = self.variants.apply(token, &self.theme);
        let Some(declaration) = self.rules.resolve(&rewrite.token) else {
            tracing::debug!("unresolved token '{}'", token);
            return None;
        };

        let declaration = match &rewrite.body {
            Some(hook) => hook.apply(&declaration),
            None => declaration,
        };
        let parent = rewrite.nesting.as_ref().map(|hook| hook.apply(None));

        Some(Resolved {
            declaration,
            selector: rewrite.selector,
            parent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Breakpoints;

    fn resolver() -> Resolver {
        Resolver::new(Theme::default()).unwrap()
    }

    #[test]
    fn plain_token_resolves() {
        let resolved = resolver().resolve("c:red").unwrap();
        assert_eq!(resolved.declaration.get("color"), Some("var(--color-red, red)"));
        assert!(resolved.selector.is_none());
        assert!(resolved.parent.is_none());
    }

    #[test]
    fn unknown_token_is_unresolved() {
        assert!(resolver().resolve("totally-unknown-token").is_none());
    }

    #[test]
    fn suffixed_unknown_token_is_unresolved() {
        // The pipeline strips the suffixes but the reduced token still
        // has to match a rule.
        assert!(resolver().resolve("nope:hover@md!").is_none());
    }

    #[test]
    fn variant_composition() {
        // Strips :hover, @md and ! in pipeline order, resolves the
        // reduced token, and applies every hook to the final result.
        let resolved = resolver().resolve("c:red:hover@md!").unwrap();

        assert_eq!(
            resolved.declaration.get("color"),
            Some("var(--color-red, red) !important")
        );
        assert_eq!(resolved.selector_for(".c\\:red\\:hover\\@md\\!"), ".c\\:red\\:hover\\@md\\!:hover");
        assert_eq!(resolved.parent.as_deref(), Some("@media (min-width: 768px)"));
    }

    #[test]
    fn important_recurses_into_nested_blocks() {
        let resolved = resolver().resolve("scroll:hide!").unwrap();
        assert_eq!(
            resolved.declaration.get("scrollbar-width"),
            Some("none !important")
        );
        let block = resolved
            .declaration
            .get_block("&::-webkit-scrollbar")
            .unwrap();
        assert_eq!(block.get("display"), Some("none !important"));
    }

    #[test]
    fn responsive_uses_configured_breakpoint() {
        let theme = Theme {
            breakpoints: Breakpoints {
                md: "900px".to_string(),
                ..Breakpoints::default()
            },
        };
        let resolver = Resolver::new(theme).unwrap();

        let resolved = resolver.resolve("p:16@md").unwrap();
        assert_eq!(resolved.parent.as_deref(), Some("@media (min-width: 900px)"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = resolver();
        let first = resolver.resolve("flex-col:center@lg!").unwrap();
        let second = resolver.resolve("flex-col:center@lg!").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn resolver_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Resolver>();
    }
}
