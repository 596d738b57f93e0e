//! Composite decoders that build multi-part values.

use crate::types::Declaration;

use super::{align, color, justify};

/// Flex container modifier parsed from the token suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexModifier {
    /// Plain `flex`: row direction, block-level flex.
    #[default]
    Row,
    /// `flex-col`: column direction.
    Column,
    /// `flex-inline`: inline-flex display.
    Inline,
}

impl FlexModifier {
    /// Parse the optional modifier capture (`col` or `inline`).
    pub fn from_token(value: Option<&str>) -> Self {
        match value {
            Some("col") => Self::Column,
            Some("inline") => Self::Inline,
            _ => Self::Row,
        }
    }

    fn direction(self) -> &'static str {
        match self {
            Self::Column => "column",
            _ => "row",
        }
    }

    fn display(self) -> &'static str {
        match self {
            Self::Inline => "inline-flex",
            _ => "flex",
        }
    }
}

/// Compose a flex container declaration.
///
/// A numeric value is a grow shorthand and produces `flex` alone,
/// replacing the container setup. Otherwise the value is an optional
/// `justify|align` pair mapped through the alignment keyword tables;
/// only the sides that are present (and recognized) are set. A lone
/// `center` justify centers both axes.
pub fn flex(value: Option<&str>, modifier: FlexModifier) -> Declaration {
    let base = Declaration::new()
        .with("display", modifier.display())
        .with("flex-direction", modifier.direction());

    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return base;
    };

    if value.parse::<f64>().is_ok() {
        // Arity of the shorthand is not validated; the joined parts
        // pass through as-is.
        let parts = value.split('|').collect::<Vec<_>>().join(" ");
        return Declaration::new().with("flex", parts);
    }

    let (justify_part, align_part) = match value.split_once('|') {
        Some((j, a)) => (j, Some(a)),
        None => (value, None),
    };

    let mut decl = base;
    if let Some(j) = justify(justify_part) {
        decl = decl.with("justify-content", j);
    }
    if let Some(a) = align_part.and_then(align) {
        decl = decl.with("align-items", a);
    }
    if justify_part == "center" && align_part.is_none() {
        decl = decl.with("align-items", "center");
    }
    decl
}

/// Compose a border shorthand from `color|width|style`.
///
/// Width defaults to `1` and style to `solid`; `0` and `none` disable
/// the border entirely.
pub fn border(value: &str) -> String {
    if value == "0" || value == "none" {
        return "none".to_string();
    }
    let mut parts = value.split('|');
    let base = parts.next().unwrap_or(value);
    let width = parts.next().unwrap_or("1");
    let style = parts.next().unwrap_or("solid");
    format!("{width}px {style} {}", color(base))
}
