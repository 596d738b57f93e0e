//! The standard rule table.
//!
//! Matching is strictly first-match-wins in table order. Every pattern
//! is anchored to the whole token, which keeps most rules independent
//! of their position; table order remains the documented tie-break for
//! any residual overlap (e.g. the bare `none` keyword versus the
//! parameterized `appearance:` rule).

use regex::Captures;

use crate::decode::{FlexModifier, border, color, flex, font_weight, px_to_rem, side_length, spacing};
use crate::error::Result;
use crate::types::Declaration;

use super::Rule;

/// The ordered utility rule table.
pub struct RuleTable {
    rules: Vec<Rule>,
}

fn cap<'t>(captures: &'t Captures<'_>, index: usize) -> Option<&'t str> {
    captures.get(index).map(|m| m.as_str())
}

fn cap1<'t>(captures: &'t Captures<'_>) -> &'t str {
    cap(captures, 1).unwrap_or("")
}

fn decl(property: &str, value: impl Into<String>) -> Declaration {
    Declaration::new().with(property, value)
}

/// Format a positional offset value: `%` passes through, anything else
/// gets a pixel unit, empty leaves the property unset.
fn offset_unit(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| {
        if v.contains('%') {
            v.to_string()
        } else {
            format!("{v}px")
        }
    })
}

/// Format a translate axis: `%` passes through, anything else gets a
/// pixel unit, an absent axis defaults to `0`.
fn translate_unit(value: Option<&str>) -> String {
    match value.filter(|v| !v.is_empty()) {
        Some(v) if v.contains('%') => v.to_string(),
        Some(v) => format!("{v}px"),
        None => "0".to_string(),
    }
}

impl RuleTable {
    /// Build the standard table.
    pub fn standard() -> Result<Self> {
        let mut rules = Vec::new();

        // Height
        rules.push(Rule::new(r"^h:(.+)$", |c| decl("height", side_length(cap1(c))))?);
        rules.push(Rule::new(r"^min-h:(.+)$", |c| decl("min-height", side_length(cap1(c))))?);
        rules.push(Rule::new(r"^max-h:(.+)$", |c| decl("max-height", side_length(cap1(c))))?);

        // Width
        rules.push(Rule::new(r"^w:(.+)$", |c| decl("width", side_length(cap1(c))))?);
        rules.push(Rule::new(r"^min-w:(.+)$", |c| decl("min-width", side_length(cap1(c))))?);
        rules.push(Rule::new(r"^max-w:(.+)$", |c| decl("max-width", side_length(cap1(c))))?);

        // Size (both axes)
        rules.push(Rule::new(r"^size:(.+)$", |c| {
            Declaration::new()
                .with("width", side_length(cap1(c)))
                .with("height", side_length(cap1(c)))
        })?);

        // Color
        rules.push(Rule::new(r"^c:(.+)$", |c| decl("color", color(cap1(c))))?);
        rules.push(Rule::new(r"^bg:(.+)$", |c| decl("background-color", color(cap1(c))))?);

        // Margin
        rules.push(
            Rule::new(r"^m:(.+)$", |c| decl("margin", spacing(cap1(c))))?
                .with_autocomplete("m:(0|4|8|12|16|20|24|28|32|36|40|44|48)"),
        );
        rules.push(Rule::new(r"^mx:(.+)$", |c| {
            Declaration::new()
                .with("margin-left", px_to_rem(cap1(c)))
                .with("margin-right", px_to_rem(cap1(c)))
        })?);
        rules.push(Rule::new(r"^my:(.+)$", |c| {
            Declaration::new()
                .with("margin-top", px_to_rem(cap1(c)))
                .with("margin-bottom", px_to_rem(cap1(c)))
        })?);
        rules.push(Rule::new(r"^mt:(.+)$", |c| decl("margin-top", px_to_rem(cap1(c))))?);
        rules.push(Rule::new(r"^mr:(.+)$", |c| decl("margin-right", px_to_rem(cap1(c))))?);
        rules.push(Rule::new(r"^mb:(.+)$", |c| decl("margin-bottom", px_to_rem(cap1(c))))?);
        rules.push(Rule::new(r"^ml:(.+)$", |c| decl("margin-left", px_to_rem(cap1(c))))?);

        // Padding
        rules.push(
            Rule::new(r"^p:(.+)$", |c| decl("padding", spacing(cap1(c))))?
                .with_autocomplete("p:(0|4|8|12|16|20|24|28|32|36|40|44|48)"),
        );
        rules.push(Rule::new(r"^px:(.+)$", |c| {
            Declaration::new()
                .with("padding-left", px_to_rem(cap1(c)))
                .with("padding-right", px_to_rem(cap1(c)))
        })?);
        rules.push(Rule::new(r"^py:(.+)$", |c| {
            Declaration::new()
                .with("padding-top", px_to_rem(cap1(c)))
                .with("padding-bottom", px_to_rem(cap1(c)))
        })?);
        rules.push(Rule::new(r"^pt:(.+)$", |c| decl("padding-top", px_to_rem(cap1(c))))?);
        rules.push(Rule::new(r"^pr:(.+)$", |c| decl("padding-right", px_to_rem(cap1(c))))?);
        rules.push(Rule::new(r"^pb:(.+)$", |c| decl("padding-bottom", px_to_rem(cap1(c))))?);
        rules.push(Rule::new(r"^pl:(.+)$", |c| decl("padding-left", px_to_rem(cap1(c))))?);

        // Font size
        rules.push(Rule::new(r"^f:(\d+)$", |c| decl("font-size", px_to_rem(cap1(c))))?);

        // Line height: integers are pixel counts, fractional values are
        // unitless multipliers.
        rules.push(Rule::new(r"^lh:(\d+(?:\.\d+)?)$", |c| {
            let value = cap1(c);
            let line_height = match value.parse::<f64>() {
                Ok(v) if v.fract() == 0.0 => format!("{value}px"),
                _ => value.to_string(),
            };
            decl("line-height", line_height)
        })?);

        // Font weight (keywords and raw numbers)
        rules.push(Rule::new(r"^fw:(\w+|\d+)$", |c| decl("font-weight", font_weight(cap1(c))))?);
        rules.push(Rule::new(r"^bold$", |_| decl("font-weight", "bold"))?);
        rules.push(Rule::new(r"^semi$", |_| decl("font-weight", "600"))?);
        rules.push(Rule::new(r"^regular$", |_| decl("font-weight", "400"))?);
        rules.push(Rule::new(r"^medium$", |_| decl("font-weight", "500"))?);

        // Font family
        rules.push(Rule::new(r"^ff:(\w+)$", |c| {
            let value = cap1(c);
            let family = if value == "inherit" {
                value.to_string()
            } else {
                format!("var(--font-{value}, {value})")
            };
            decl("font-family", family)
        })?);

        rules.push(Rule::new(r"^pre-wrap$", |_| decl("white-space", "pre-wrap"))?);

        // Flex
        rules.push(Rule::new(r"^flex(?:-?(col|inline))?(?::(.+))?$", |c| {
            flex(cap(c, 2), FlexModifier::from_token(cap(c, 1)))
        })?);
        rules.push(Rule::new(r"^flex-wrap$", |_| decl("flex-wrap", "wrap"))?);
        rules.push(Rule::new(r"^gap:(\d+)$", |c| decl("gap", format!("{}px", cap1(c))))?);

        // Display
        rules.push(Rule::new(r"^block$", |_| decl("display", "block"))?);
        rules.push(Rule::new(r"^inline$", |_| decl("display", "inline"))?);
        rules.push(Rule::new(r"^inline-block$", |_| decl("display", "inline-block"))?);

        // Text transform
        rules.push(Rule::new(r"^tt:(\w+)$", |c| decl("text-transform", cap1(c)))?);
        rules.push(Rule::new(r"^upper$", |_| decl("text-transform", "uppercase"))?);
        rules.push(Rule::new(r"^lower$", |_| decl("text-transform", "lowercase"))?);
        rules.push(Rule::new(r"^capitalize$", |_| decl("text-transform", "capitalize"))?);

        // Text decoration
        rules.push(Rule::new(r"^td:(\w+)$", |c| decl("text-decoration", cap1(c)))?);
        rules.push(Rule::new(r"^underline$", |_| decl("text-decoration", "underline"))?);
        rules.push(Rule::new(r"^line-through$", |_| decl("text-decoration", "line-through"))?);
        rules.push(Rule::new(r"^no-underline$", |_| decl("text-decoration", "none"))?);

        // Cursor
        rules.push(Rule::new(r"^cursor:(\w+)$", |c| decl("cursor", cap1(c)))?);
        rules.push(Rule::new(r"^pointer$", |_| decl("cursor", "pointer"))?);

        // Text align
        rules.push(Rule::new(r"^ta:(left|right|center|justify)$", |c| {
            decl("text-align", cap1(c))
        })?);
        rules.push(Rule::new(r"^nowrap$", |_| decl("white-space", "nowrap"))?);
        rules.push(Rule::new(r"^ellipsis$", |_| {
            Declaration::new()
                .with("overflow", "hidden")
                .with("text-overflow", "ellipsis")
                .with("white-space", "nowrap")
        })?);

        // Borders
        rules.push(Rule::new(r"^b:(.+)$", |c| decl("border", border(cap1(c))))?);
        rules.push(Rule::new(r"^bb:(.+)$", |c| decl("border-bottom", border(cap1(c))))?);
        rules.push(Rule::new(r"^bt:(.+)$", |c| decl("border-top", border(cap1(c))))?);
        rules.push(Rule::new(r"^br:(.+)$", |c| decl("border-right", border(cap1(c))))?);
        rules.push(Rule::new(r"^bl:(.+)$", |c| decl("border-left", border(cap1(c))))?);

        // Border radius: 1-4 values in clockwise order. Unspecified
        // corners default like the CSS shorthand: top-right and
        // bottom-right fall back to top-left, bottom-left falls back to
        // top-right.
        rules.push(Rule::new(r"^r:(\d+)(?:\|(\d+))?(?:\|(\d+))?(?:\|(\d+))?$", |c| {
            let top_left = format!("{}px", cap1(c));
            let top_right = cap(c, 2).map_or_else(|| top_left.clone(), |v| format!("{v}px"));
            let bottom_right = cap(c, 3).map_or_else(|| top_left.clone(), |v| format!("{v}px"));
            let bottom_left = cap(c, 4).map_or_else(|| top_right.clone(), |v| format!("{v}px"));
            decl(
                "border-radius",
                format!("{top_left} {top_right} {bottom_right} {bottom_left}"),
            )
        })?);

        // Outline
        rules.push(Rule::new(r"^outline:(.+)$", |c| decl("outline", cap1(c)))?);

        // Opacity
        rules.push(Rule::new(r"^o:(\d+(?:\.\d+)?)$", |c| decl("opacity", cap1(c)))?);

        // Overflow
        rules.push(Rule::new(r"^of:(\w+)$", |c| decl("overflow", cap1(c)))?);
        rules.push(Rule::new(r"^ofx:(\w+)$", |c| decl("overflow-x", cap1(c)))?);
        rules.push(Rule::new(r"^ofy:(\w+)$", |c| decl("overflow-y", cap1(c)))?);
        rules.push(Rule::new(r"^ofh$", |_| decl("overflow", "hidden"))?);

        // Shadow: fixed x|y|blur|spread|(color) form.
        rules.push(Rule::new(
            r"^shadow:(-?\d+)\|(-?\d+)\|(-?\d+)\|(-?\d+)\|\(([^)]+)\)$",
            |c| {
                decl(
                    "box-shadow",
                    format!(
                        "{}px {}px {}px {}px rgba({})",
                        cap1(c),
                        cap(c, 2).unwrap_or(""),
                        cap(c, 3).unwrap_or(""),
                        cap(c, 4).unwrap_or(""),
                        cap(c, 5).unwrap_or(""),
                    ),
                )
            },
        )?);

        // Z-index
        rules.push(Rule::new(r"^z:(\d+)$", |c| decl("z-index", cap1(c)))?);

        // Appearance
        rules.push(Rule::new(r"^appearance:(\w+)$", |c| decl("appearance", cap1(c)))?);
        rules.push(Rule::new(r"^none$", |_| decl("appearance", "none"))?);
        rules.push(Rule::new(r"^hide$", |_| decl("display", "none"))?);

        // Position
        rules.push(Rule::new(r"^rel$", |_| decl("position", "relative"))?);

        // Absolute: up to four |-separated optional offsets mapped
        // positionally to top/right/bottom/left. An omitted value
        // leaves that side unset.
        rules.push(Rule::new(
            r"^abs:([^|]*)?(?:\|([^|]*)?(?:\|([^|]*)?(?:\|([^|]*))?)?)?$",
            |c| {
                Declaration::new()
                    .with("position", "absolute")
                    .with_opt("top", offset_unit(cap(c, 1)))
                    .with_opt("right", offset_unit(cap(c, 2)))
                    .with_opt("bottom", offset_unit(cap(c, 3)))
                    .with_opt("left", offset_unit(cap(c, 4)))
            },
        )?);

        // Fixed: digit-only variant of the same positional form.
        rules.push(Rule::new(
            r"^fixed:(\d+)?(?:\|(\d+))?(?:\|(\d+))?(?:\|(\d+))?$",
            |c| {
                Declaration::new()
                    .with("position", "fixed")
                    .with_opt("top", cap(c, 1).map(|v| format!("{v}px")))
                    .with_opt("right", cap(c, 2).map(|v| format!("{v}px")))
                    .with_opt("bottom", cap(c, 3).map(|v| format!("{v}px")))
                    .with_opt("left", cap(c, 4).map(|v| format!("{v}px")))
            },
        )?);

        // Bare offsets
        rules.push(Rule::new(r"^bottom:(\d+)$", |c| decl("bottom", format!("{}px", cap1(c))))?);
        rules.push(Rule::new(r"^top:(\d+)$", |c| decl("top", format!("{}px", cap1(c))))?);
        rules.push(Rule::new(r"^left:(\d+)$", |c| decl("left", format!("{}px", cap1(c))))?);
        rules.push(Rule::new(r"^right:(\d+)$", |c| decl("right", format!("{}px", cap1(c))))?);

        // Translate: x and/or y, absent axis defaults to 0, percentage
        // versus pixel unit auto-detected.
        rules.push(Rule::new(
            r"^translate:(-?\d+(?:\.\d+)?%?)?(?:\|(-?\d+(?:\.\d+)?%?))?$",
            |c| {
                decl(
                    "transform",
                    format!(
                        "translate({}, {})",
                        translate_unit(cap(c, 1)),
                        translate_unit(cap(c, 2))
                    ),
                )
            },
        )?);

        // SVG stroke: the color is used verbatim, not resolved through
        // the color decoder.
        rules.push(Rule::new(r"^stroke:(\w+)(?:\|(\d+))?$", |c| {
            Declaration::new()
                .with("stroke", cap1(c))
                .with_opt("stroke-width", cap(c, 2).map(|v| format!("{v}px")))
        })?);

        // Hide scrollbar: flat properties plus a nested pseudo-element
        // override for the vendor-prefixed scrollbar selector.
        rules.push(Rule::new(r"^scroll:hide$", |_| {
            Declaration::new()
                .with_block(
                    "&::-webkit-scrollbar",
                    Declaration::new().with("display", "none"),
                )
                .with("-ms-overflow-style", "none")
                .with("scrollbar-width", "none")
        })?);

        Ok(Self { rules })
    }

    /// Build a table from explicit rules, preserving their order.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The rules in match order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve a token to a declaration.
    ///
    /// Walks the table in order and returns the first match. `None`
    /// means the token is not a style utility.
    pub fn resolve(&self, token: &str) -> Option<Declaration> {
        for rule in &self.rules {
            if let Some(declaration) = rule.try_match(token) {
                tracing::trace!("token '{}' matched '{}'", token, rule.pattern().as_str());
                return Some(declaration);
            }
        }
        None
    }
}

impl std::fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleTable")
            .field("rules", &self.rules.len())
            .finish()
    }
}
