//! Tag abbreviation cleaning

/// Drop every ASCII digit from a tag abbreviation: `CO2` becomes `CO`
pub fn clean_tag_abbreviation(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_ascii_digit()).collect()
}
