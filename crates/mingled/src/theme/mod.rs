//! Static theme configuration.

use std::fmt;

/// Named responsive breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// Small screens and up.
    Sm,
    /// Medium screens and up.
    Md,
    /// Large screens and up.
    Lg,
    /// Extra-large screens and up.
    Xl,
}

impl Breakpoint {
    /// Parse a responsive token suffix (`sm`, `md`, `lg`, `xl`).
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            _ => None,
        }
    }

    /// The suffix form of this breakpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breakpoint lengths keyed by [`Breakpoint`].
///
/// Fields are plain strings so hosts can supply any CSS length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    /// Minimum width for `sm`.
    pub sm: String,
    /// Minimum width for `md`.
    pub md: String,
    /// Minimum width for `lg`.
    pub lg: String,
    /// Minimum width for `xl`.
    pub xl: String,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: "640px".to_string(),
            md: "768px".to_string(),
            lg: "1024px".to_string(),
            xl: "1280px".to_string(),
        }
    }
}

impl Breakpoints {
    /// Look up the length for a breakpoint.
    pub fn get(&self, breakpoint: Breakpoint) -> &str {
        match breakpoint {
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xl => &self.xl,
        }
    }
}

/// Read-only theme data available to handlers and hooks.
///
/// Initialized once at resolver construction and never mutated
/// afterwards, so it can be shared across any number of concurrent
/// resolution calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Theme {
    /// Named breakpoint lengths for the responsive variant.
    pub breakpoints: Breakpoints,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakpoints() {
        let theme = Theme::default();
        assert_eq!(theme.breakpoints.get(Breakpoint::Sm), "640px");
        assert_eq!(theme.breakpoints.get(Breakpoint::Md), "768px");
        assert_eq!(theme.breakpoints.get(Breakpoint::Lg), "1024px");
        assert_eq!(theme.breakpoints.get(Breakpoint::Xl), "1280px");
    }

    #[test]
    fn breakpoint_suffix_round_trip() {
        for bp in [Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg, Breakpoint::Xl] {
            assert_eq!(Breakpoint::from_suffix(bp.as_str()), Some(bp));
        }
        assert_eq!(Breakpoint::from_suffix("2xl"), None);
    }
}
