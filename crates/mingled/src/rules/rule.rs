//! Single utility rule definition.

use std::fmt;

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::types::Declaration;

/// Handler invoked with the captures of a matched pattern.
///
/// Handlers are pure: identical captures always produce identical
/// declarations, and a handler never fails. Degenerate input degrades
/// to a pass-through value inside the decoders instead.
pub type Handler = Box<dyn Fn(&Captures<'_>) -> Declaration + Send + Sync>;

/// One (pattern, handler) entry of the rule table.
///
/// The pattern must be anchored to the whole token. The optional
/// autocomplete hint is registration metadata passed through to hosts
/// that offer editor completion; it plays no part in matching.
pub struct Rule {
    pattern: Regex,
    handler: Handler,
    autocomplete: Option<&'static str>,
}

impl Rule {
    /// Compile a rule from an anchored pattern.
    pub fn new<F>(pattern: &str, handler: F) -> Result<Self>
    where
        F: Fn(&Captures<'_>) -> Declaration + Send + Sync + 'static,
    {
        let compiled = Regex::new(pattern).map_err(|e| Error::pattern(pattern, e))?;
        Ok(Self {
            pattern: compiled,
            handler: Box::new(handler),
            autocomplete: None,
        })
    }

    /// Attach an autocomplete hint.
    pub fn with_autocomplete(mut self, hint: &'static str) -> Self {
        self.autocomplete = Some(hint);
        self
    }

    /// The compiled token pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The autocomplete hint, if registered.
    pub fn autocomplete(&self) -> Option<&'static str> {
        self.autocomplete
    }

    /// Run this rule against a token.
    pub fn try_match(&self, token: &str) -> Option<Declaration> {
        self.pattern
            .captures(token)
            .map(|captures| (self.handler)(&captures))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern.as_str())
            .field("autocomplete", &self.autocomplete)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_matches_anchored_token() {
        let rule = Rule::new(r"^z:(\d+)$", |caps| {
            Declaration::new().with("z-index", &caps[1])
        })
        .unwrap();

        let decl = rule.try_match("z:10").unwrap();
        assert_eq!(decl.get("z-index"), Some("10"));

        assert!(rule.try_match("z:10px").is_none());
        assert!(rule.try_match("xz:10").is_none());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let result = Rule::new(r"^b:((+$", |_| Declaration::new());
        assert!(result.is_err());
    }

    #[test]
    fn autocomplete_metadata_is_carried() {
        let rule = Rule::new(r"^m:(.+)$", |_| Declaration::new())
            .unwrap()
            .with_autocomplete("m:(0|4|8)");
        assert_eq!(rule.autocomplete(), Some("m:(0|4|8)"));
    }
}
