//! Display formatting for raw kebab-case labels.
//!
//! Upstream names look like `nidoran-f` or `special-attack`. These helpers
//! turn them into display strings. They are total over any input and never
//! fail.

/// Masculine marker substituted for a lone `m` segment.
pub const MALE_SYMBOL: &str = "♂";

/// Feminine marker substituted for a lone `f` segment.
pub const FEMALE_SYMBOL: &str = "♀";

/// Fallback used when a species has no English flavor text.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Format an entity name for display.
///
/// Rules:
/// - lowercase, then split on `-`
/// - `m` becomes ♂ and `f` becomes ♀
/// - every other segment gets its first letter capitalized
/// - segments are joined with a single space
pub fn format_name(name: &str) -> String {
    name.to_lowercase()
        .split('-')
        .map(|seg| match seg {
            "m" => MALE_SYMBOL.to_string(),
            "f" => FEMALE_SYMBOL.to_string(),
            other => capitalize(other),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a stat name for display.
///
/// `hp` is special-cased to `HP`; a `special` segment is shortened to `Sp`.
pub fn format_stat_label(name: &str) -> String {
    if name == "hp" {
        return "HP".to_string();
    }

    name.to_lowercase()
        .split('-')
        .map(|seg| match seg {
            "special" => "Sp".to_string(),
            other => capitalize(other),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a national dex number as `#001`.
pub fn format_dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Clean a flavor text entry for single-line display.
///
/// Form feeds and newlines become spaces and the legacy `POKéMON`
/// spelling is replaced with `Pokémon`.
pub fn clean_flavor_text(raw: &str) -> String {
    raw.replace('\u{000C}', " ")
        .replace('\n', " ")
        .replace("POKéMON", "Pokémon")
}

fn capitalize(seg: &str) -> String {
    let mut chars = seg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
