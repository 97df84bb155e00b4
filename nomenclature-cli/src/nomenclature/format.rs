//! Final nomenclature string assembly

/// Location prefix dropped before formatting
const LOCATION_PREFIX: &str = "LOC-";

/// Location token: `LOC-AE-ABUS2` becomes `AE_ABUS2`
pub fn format_location(location: &str) -> String {
    let trimmed = location.strip_prefix(LOCATION_PREFIX).unwrap_or(location);

    let parts: Vec<&str> = trimmed.split('-').collect();
    if parts.len() >= 2 {
        format!("{}_{}", parts[0], parts[1])
    } else {
        trimmed.trim().to_string()
    }
}

/// Building token: everything after the first `-`, or the whole code
pub fn format_building(building: &str) -> &str {
    building
        .split_once('-')
        .map(|(_, rest)| rest)
        .unwrap_or(building)
}

/// Inputs of one nomenclature string
///
/// `room` is the cleaned room code and `tag_abbreviation` the cleaned tag
/// abbreviation; no further cleaning happens here.
#[derive(Debug, Clone, Copy)]
pub struct NomenclatureParts<'a> {
    pub location: &'a str,
    pub building: &'a str,
    pub floor: &'a str,
    pub room: &'a str,
    pub equipment_abbreviation: &'a str,
    pub asset_number: &'a str,
    pub tag_abbreviation: &'a str,
}

impl NomenclatureParts<'_> {
    /// `{location}_{building}_{floor}_{equipment}{asset}_{room}_{tag}`
    ///
    /// Underscores inside fields are not escaped.
    pub fn format(&self) -> String {
        format!(
            "{}_{}_{}_{}{}_{}_{}",
            format_location(self.location),
            format_building(self.building),
            self.floor,
            self.equipment_abbreviation,
            self.asset_number,
            self.room,
            self.tag_abbreviation
        )
    }
}
