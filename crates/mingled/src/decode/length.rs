//! Length conversion and spacing expansion.

/// Convert a pixel count to rem (`v / 16`).
///
/// Non-numeric input passes through unchanged, which keeps
/// already-unitized values (`50%`, `2em`) working.
pub fn px_to_rem(value: &str) -> String {
    match value.parse::<f64>() {
        Ok(v) => format!("{}rem", v / 16.0),
        Err(_) => value.to_string(),
    }
}

/// Decode a box-sizing value.
///
/// Keyword shortcuts map to their CSS equivalents, bare digit strings
/// get a pixel unit, and anything else passes through verbatim.
pub fn side_length(value: &str) -> String {
    match value {
        "full" => "100%".to_string(),
        "screen" => "100vh".to_string(),
        "fit" => "fit-content".to_string(),
        _ if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{value}px")
        }
        _ => value.to_string(),
    }
}

/// Expand a `|`-separated spacing list into CSS shorthand form.
///
/// Empty segments become `0`; each segment is converted through
/// [`px_to_rem`] and the results are space-joined, supporting the
/// 1/2/3/4-value shorthand forms.
pub fn spacing(value: &str) -> String {
    value
        .split('|')
        .map(|part| px_to_rem(if part.is_empty() { "0" } else { part }))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_to_rem_divides_by_sixteen() {
        assert_eq!(px_to_rem("16"), "1rem");
        assert_eq!(px_to_rem("8"), "0.5rem");
        assert_eq!(px_to_rem("200"), "12.5rem");
        assert_eq!(px_to_rem("0"), "0rem");
        assert_eq!(px_to_rem("4"), "0.25rem");
    }

    #[test]
    fn px_to_rem_passes_through_non_numeric() {
        assert_eq!(px_to_rem("50%"), "50%");
        assert_eq!(px_to_rem("auto"), "auto");
        assert_eq!(px_to_rem("2em"), "2em");
    }

    #[test]
    fn side_length_keywords() {
        assert_eq!(side_length("full"), "100%");
        assert_eq!(side_length("screen"), "100vh");
        assert_eq!(side_length("fit"), "fit-content");
    }

    #[test]
    fn side_length_digits_get_px() {
        assert_eq!(side_length("200"), "200px");
        assert_eq!(side_length("0"), "0px");
    }

    #[test]
    fn side_length_passes_through_other_values() {
        assert_eq!(side_length("50%"), "50%");
        assert_eq!(side_length("calc(100% - 8px)"), "calc(100% - 8px)");
        assert_eq!(side_length("1.5"), "1.5");
    }

    #[test]
    fn spacing_expands_shorthand_forms() {
        assert_eq!(spacing("8"), "0.5rem");
        assert_eq!(spacing("8|0"), "0.5rem 0rem");
        assert_eq!(spacing("8|16|24"), "0.5rem 1rem 1.5rem");
        assert_eq!(spacing("8|16|24|32"), "0.5rem 1rem 1.5rem 2rem");
    }

    #[test]
    fn spacing_empty_segments_become_zero() {
        assert_eq!(spacing("|8"), "0rem 0.5rem");
        assert_eq!(spacing("8|"), "0.5rem 0rem");
    }
}
