//! Host-facing registration surface.
//!
//! A [`Preset`] is the configuration object a host framework consumes
//! directly: the static theme, the ordered rule table, the ordered
//! variant pipeline, and registration metadata (name plus the upstream
//! transformers the host must enable). Token discovery, caching, and
//! stylesheet serialization all live in the host.

use crate::error::Result;
use crate::resolve::{Resolved, Resolver};
use crate::rules::RuleTable;
use crate::theme::Theme;
use crate::variant::VariantPipeline;

/// Upstream token transformers applied by the host before tokens ever
/// reach the resolver.
///
/// These are external collaborators; the preset only declares which
/// ones the host should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformer {
    /// Group-suffix expansion, e.g. `p:(4|8)`-style grouping of
    /// several utilities under one prefix.
    VariantGroup,
}

/// The complete preset a host registers.
#[derive(Debug)]
pub struct Preset {
    name: &'static str,
    transformers: Vec<Transformer>,
    resolver: Resolver,
}

impl Preset {
    /// The standard preset with default breakpoints.
    pub fn new() -> Result<Self> {
        Self::with_theme(Theme::default())
    }

    /// The standard preset with an explicit theme.
    pub fn with_theme(theme: Theme) -> Result<Self> {
        Ok(Self {
            name: "mingled",
            transformers: vec![Transformer::VariantGroup],
            resolver: Resolver::new(theme)?,
        })
    }

    /// The identifying name the host registers this preset under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Transformers the host must apply upstream of the resolver.
    pub fn transformers(&self) -> &[Transformer] {
        &self.transformers
    }

    /// The static theme record.
    pub fn theme(&self) -> &Theme {
        self.resolver.theme()
    }

    /// The ordered rule table.
    pub fn rules(&self) -> &RuleTable {
        self.resolver.rules()
    }

    /// The ordered variant pipeline.
    pub fn variants(&self) -> &VariantPipeline {
        self.resolver.variants()
    }

    /// The composed resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Convenience passthrough to [`Resolver::resolve`].
    pub fn resolve(&self, token: &str) -> Option<Resolved> {
        self.resolver.resolve(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::VariantStage;

    #[test]
    fn preset_surface() {
        let preset = Preset::new().unwrap();

        assert_eq!(preset.name(), "mingled");
        assert_eq!(preset.transformers(), &[Transformer::VariantGroup]);
        assert!(!preset.rules().is_empty());
        assert_eq!(
            preset.variants().stages(),
            &[
                VariantStage::PseudoClass,
                VariantStage::Important,
                VariantStage::Responsive,
            ]
        );
    }

    #[test]
    fn preset_resolves_tokens() {
        let preset = Preset::new().unwrap();
        let resolved = preset.resolve("w:full").unwrap();
        assert_eq!(resolved.declaration.get("width"), Some("100%"));
    }
}
