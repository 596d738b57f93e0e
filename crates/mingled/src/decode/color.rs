//! Color resolution with optional opacity suffix.

/// Resolve a color token.
///
/// `name/NN` mixes the base color with transparent at `NN%` via a
/// `color-mix` expression. Hex literals pass through verbatim; any
/// other name resolves to a themed variable with the literal name as
/// fallback, so authors can use both palette names and raw CSS colors.
pub fn color(value: &str) -> String {
    if let Some((base, rest)) = value.split_once('/') {
        let opacity = rest.split('/').next().unwrap_or(rest);
        if let Ok(pct) = opacity.parse::<u32>() {
            return if base.starts_with('#') {
                format!("color-mix(in srgb, {base} {pct}%, transparent)")
            } else {
                format!("color-mix(in srgb, var(--color-{base}, {base}) {pct}%, transparent)")
            };
        }
        // Unparseable opacity: fall through and treat the whole token
        // as a plain color name.
    }
    if value.starts_with('#') {
        value.to_string()
    } else {
        format!("var(--color-{value}, {value})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_passes_through() {
        assert_eq!(color("#fff"), "#fff");
        assert_eq!(color("#1a2b3c"), "#1a2b3c");
    }

    #[test]
    fn names_resolve_to_themed_variable() {
        assert_eq!(color("red"), "var(--color-red, red)");
        assert_eq!(color("brand-primary"), "var(--color-brand-primary, brand-primary)");
    }

    #[test]
    fn hex_with_opacity_mixes_with_transparent() {
        assert_eq!(color("#fff/50"), "color-mix(in srgb, #fff 50%, transparent)");
    }

    #[test]
    fn name_with_opacity_mixes_themed_variable() {
        assert_eq!(
            color("red/25"),
            "color-mix(in srgb, var(--color-red, red) 25%, transparent)"
        );
    }

    #[test]
    fn non_numeric_opacity_degrades_to_plain_name() {
        assert_eq!(color("red/half"), "var(--color-red/half, red/half)");
    }
}
