//! The ordered variant pipeline.

use crate::theme::{Breakpoint, Theme};

use super::{BodyHook, NestingHook, SelectorHook};

/// Pseudo-class suffixes recognized by the first stage.
const PSEUDO_CLASSES: [&str; 6] = [
    "hover",
    "focus",
    "active",
    "visited",
    "disabled",
    "focus-within",
];

/// One token-rewriting stage.
///
/// Stages run in the order [`VariantPipeline::standard`] lists them.
/// A stage either leaves the token alone or strips a suffix and
/// registers exactly one hook for the eventual result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStage {
    /// `token:hover` and friends: strip the suffix, append it to the
    /// final selector.
    PseudoClass,
    /// `token!`: strip the bang, mark every value `!important`.
    Important,
    /// `token@md`: strip the suffix, wrap the result in a min-width
    /// media query for the configured breakpoint length.
    Responsive,
}

/// The outcome of one stage firing: the reduced token plus the hook
/// the stage registered.
struct StageRewrite {
    reduced: String,
    selector: Option<SelectorHook>,
    body: Option<BodyHook>,
    nesting: Option<NestingHook>,
}

impl VariantStage {
    /// Apply the stage to a token. `None` means the stage does not
    /// apply and the token passes to the next stage unchanged.
    fn apply(self, token: &str, theme: &Theme) -> Option<StageRewrite> {
        match self {
            Self::PseudoClass => {
                for pseudo in PSEUDO_CLASSES {
                    if let Some(reduced) = token
                        .strip_suffix(pseudo)
                        .and_then(|rest| rest.strip_suffix(':'))
                    {
                        return Some(StageRewrite {
                            reduced: reduced.to_string(),
                            selector: Some(SelectorHook::append(format!(":{pseudo}"))),
                            body: None,
                            nesting: None,
                        });
                    }
                }
                None
            }
            Self::Important => {
                let reduced = token.strip_suffix('!')?;
                Some(StageRewrite {
                    reduced: reduced.to_string(),
                    selector: None,
                    body: Some(BodyHook::Important),
                    nesting: None,
                })
            }
            Self::Responsive => {
                let (base, suffix) = token.rsplit_once('@')?;
                if base.is_empty() {
                    return None;
                }
                let breakpoint = Breakpoint::from_suffix(suffix)?;
                let query = format!(
                    "@media (min-width: {})",
                    theme.breakpoints.get(breakpoint)
                );
                Some(StageRewrite {
                    reduced: base.to_string(),
                    selector: None,
                    body: None,
                    nesting: Some(NestingHook::wrap(query)),
                })
            }
        }
    }
}

/// The accumulated rewrite threaded through the pipeline.
///
/// Each stage fills its own slot; a filled slot blocks that stage from
/// firing again, so every hook applies at most once per resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The token with all recognized suffixes stripped.
    pub token: String,
    /// Selector rewrite, from the pseudo-class stage.
    pub selector: Option<SelectorHook>,
    /// Body rewrite, from the important stage.
    pub body: Option<BodyHook>,
    /// Nesting-context rewrite, from the responsive stage.
    pub nesting: Option<NestingHook>,
}

impl Rewrite {
    /// A rewrite that leaves the token untouched.
    pub fn identity(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            selector: None,
            body: None,
            nesting: None,
        }
    }

    fn slot_filled(&self, stage: VariantStage) -> bool {
        match stage {
            VariantStage::PseudoClass => self.selector.is_some(),
            VariantStage::Important => self.body.is_some(),
            VariantStage::Responsive => self.nesting.is_some(),
        }
    }
}

/// The ordered sequence of variant stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPipeline {
    stages: Vec<VariantStage>,
}

impl VariantPipeline {
    /// The documented stage order: pseudo-class, important, responsive.
    pub fn standard() -> Self {
        Self {
            stages: vec![
                VariantStage::PseudoClass,
                VariantStage::Important,
                VariantStage::Responsive,
            ],
        }
    }

    /// The stages in application order.
    pub fn stages(&self) -> &[VariantStage] {
        &self.stages
    }

    /// Reduce a token, accumulating hooks.
    ///
    /// Stages are retried in pipeline order until a full pass strips
    /// nothing, so stacked suffixes (`c:red:hover@md!`) all come off no
    /// matter how they are ordered in the token. Hooks apply to the
    /// entire eventual result of the pass, not to a sub-match.
    pub fn apply(&self, token: &str, theme: &Theme) -> Rewrite {
        let mut rewrite = Rewrite::identity(token);
        loop {
            let mut progressed = false;
            for &stage in &self.stages {
                if rewrite.slot_filled(stage) {
                    continue;
                }
                if let Some(stage_rewrite) = stage.apply(&rewrite.token, theme) {
                    rewrite.token = stage_rewrite.reduced;
                    if let Some(hook) = stage_rewrite.selector {
                        rewrite.selector = Some(hook);
                    }
                    if let Some(hook) = stage_rewrite.body {
                        rewrite.body = Some(hook);
                    }
                    if let Some(hook) = stage_rewrite.nesting {
                        rewrite.nesting = Some(hook);
                    }
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        }
        rewrite
    }
}

impl Default for VariantPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(token: &str) -> Rewrite {
        VariantPipeline::standard().apply(token, &Theme::default())
    }

    #[test]
    fn plain_token_is_untouched() {
        let rewrite = apply("c:red");
        assert_eq!(rewrite.token, "c:red");
        assert!(rewrite.selector.is_none());
        assert!(rewrite.body.is_none());
        assert!(rewrite.nesting.is_none());
    }

    #[test]
    fn pseudo_class_suffix_is_stripped() {
        let rewrite = apply("c:red:hover");
        assert_eq!(rewrite.token, "c:red");
        let hook = rewrite.selector.unwrap();
        assert_eq!(hook.apply(".x"), ".x:hover");
    }

    #[test]
    fn focus_within_is_recognized_whole() {
        let rewrite = apply("bg:#fff:focus-within");
        assert_eq!(rewrite.token, "bg:#fff");
        assert_eq!(rewrite.selector.unwrap().suffix(), ":focus-within");
    }

    #[test]
    fn important_suffix_is_stripped() {
        let rewrite = apply("m:8!");
        assert_eq!(rewrite.token, "m:8");
        assert_eq!(rewrite.body, Some(BodyHook::Important));
    }

    #[test]
    fn responsive_suffix_builds_media_query() {
        let rewrite = apply("p:16@lg");
        assert_eq!(rewrite.token, "p:16");
        let hook = rewrite.nesting.unwrap();
        assert_eq!(hook.context(), "@media (min-width: 1024px)");
    }

    #[test]
    fn unknown_breakpoint_is_left_alone() {
        let rewrite = apply("p:16@2xl");
        assert_eq!(rewrite.token, "p:16@2xl");
        assert!(rewrite.nesting.is_none());
    }

    #[test]
    fn stacked_suffixes_all_come_off() {
        // Suffix order in the token differs from pipeline order; the
        // fixpoint loop strips them all.
        let rewrite = apply("c:red:hover@md!");
        assert_eq!(rewrite.token, "c:red");
        assert_eq!(rewrite.selector.unwrap().suffix(), ":hover");
        assert_eq!(rewrite.body, Some(BodyHook::Important));
        assert_eq!(
            rewrite.nesting.unwrap().context(),
            "@media (min-width: 768px)"
        );
    }

    #[test]
    fn each_stage_fires_at_most_once() {
        // The second pseudo suffix stays on the token because the
        // selector slot is already filled.
        let rewrite = apply("c:red:hover:focus");
        assert_eq!(rewrite.token, "c:red:hover");
        assert_eq!(rewrite.selector.unwrap().suffix(), ":focus");
    }
}
