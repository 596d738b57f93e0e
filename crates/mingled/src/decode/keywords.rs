//! Keyword lookup tables.

/// Map a font-weight keyword to its numeric value.
///
/// Unknown keywords pass through unchanged, which keeps raw numeric
/// weights (`fw:450`) working.
pub fn font_weight(value: &str) -> String {
    match value {
        "thin" => "100",
        "xlight" => "200",
        "light" => "300",
        "normal" => "400",
        "medium" => "500",
        "semibold" => "600",
        "bold" => "700",
        "xbold" => "800",
        "black" => "900",
        other => other,
    }
    .to_string()
}

/// Map a justify-content keyword. `None` means the keyword does not
/// apply and the property is left unset.
pub fn justify(value: &str) -> Option<&'static str> {
    match value {
        "start" => Some("flex-start"),
        "end" => Some("flex-end"),
        "center" => Some("center"),
        "between" => Some("space-between"),
        "around" => Some("space-around"),
        "evenly" => Some("space-evenly"),
        _ => None,
    }
}

/// Map an align-items keyword. `None` means the keyword does not apply
/// and the property is left unset.
pub fn align(value: &str) -> Option<&'static str> {
    match value {
        "start" => Some("flex-start"),
        "end" => Some("flex-end"),
        "center" => Some("center"),
        "stretch" => Some("stretch"),
        "baseline" => Some("baseline"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_weight_table() {
        assert_eq!(font_weight("thin"), "100");
        assert_eq!(font_weight("normal"), "400");
        assert_eq!(font_weight("semibold"), "600");
        assert_eq!(font_weight("black"), "900");
    }

    #[test]
    fn font_weight_unknown_passes_through() {
        assert_eq!(font_weight("450"), "450");
        assert_eq!(font_weight("bolder"), "bolder");
    }

    #[test]
    fn justify_table() {
        assert_eq!(justify("start"), Some("flex-start"));
        assert_eq!(justify("between"), Some("space-between"));
        assert_eq!(justify("evenly"), Some("space-evenly"));
        assert_eq!(justify("stretch"), None);
    }

    #[test]
    fn align_table() {
        assert_eq!(align("stretch"), Some("stretch"));
        assert_eq!(align("baseline"), Some("baseline"));
        assert_eq!(align("between"), None);
    }
}
