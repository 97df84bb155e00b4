//! Room code cleaning
//!
//! Two styles exist. `Digits` keeps only the digits of the room code.
//! `Segments` treats the room code as a delimited path (for example
//! `01-06-6.29` or `60.01.015G`) and keeps its trailing segment.

use serde::Deserialize;

/// How room codes are reduced before they enter the nomenclature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RoomStyle {
    /// Keep only the digits; the output table shows the cleaned room
    #[default]
    Digits,
    /// Keep the last delimited segment; the output table shows the raw room
    Segments,
}

impl RoomStyle {
    /// Clean `room` in the context of its building and floor
    pub fn clean(self, building: &str, floor: &str, room: &str) -> String {
        match self {
            RoomStyle::Digits => digits_only(room),
            RoomStyle::Segments => normalize(building, floor, room),
        }
    }

    /// Room value to show next to the generated string
    pub fn display_room(self, raw: &str, cleaned: &str) -> String {
        match self {
            RoomStyle::Digits => cleaned.to_string(),
            RoomStyle::Segments => raw.to_string(),
        }
    }
}

/// Keep only ASCII digits: `Room-204B` becomes `204`
pub fn digits_only(room: &str) -> String {
    room.chars().filter(char::is_ascii_digit).collect()
}

/// Reduce a delimited room code to its trailing segment
///
/// Hyphenated codes are checked against the building suffix and floor to see
/// whether they look like `<building>-<floor>-<room>`. The check is logged but
/// both outcomes keep the last segment. A building without a `-` suffix never
/// counts as a suffix match, which only affects the logged result.
pub fn normalize(building: &str, floor: &str, room: &str) -> String {
    let room = room.trim();
    if room.is_empty() {
        return String::new();
    }

    if room.contains('-') {
        let segments = non_empty_segments(room, '-');

        if segments.len() >= 3 {
            let building_suffix = building.rsplit_once('-').map(|(_, s)| s).unwrap_or("");
            let floor_text = floor.trim();

            let in_context = (!building_suffix.is_empty() && segments[0].ends_with(building_suffix))
                || segments[1] == floor_text
                || segments.contains(&floor_text);

            log::debug!(
                "Room '{}' building/floor context match: {} (suffix '{}', floor '{}')",
                room,
                in_context,
                building_suffix,
                floor_text
            );
        }

        return last_or(&segments, room);
    }

    if room.contains('.') {
        return last_or(&non_empty_segments(room, '.'), room);
    }

    room.to_string()
}

fn non_empty_segments(room: &str, delimiter: char) -> Vec<&str> {
    room.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn last_or(segments: &[&str], fallback: &str) -> String {
    segments.last().copied().unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("Room-204B"), "204");
        assert_eq!(digits_only("Lobby"), "");
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("01-06-6.29"), "010629");
    }

    #[test]
    fn test_hyphenated_room_keeps_last_segment() {
        assert_eq!(normalize("BLD-06", "6", "01-06-6.29"), "6.29");
    }

    #[test]
    fn test_hyphenated_room_without_context_still_keeps_last_segment() {
        assert_eq!(normalize("BLD-99", "3", "A-B-C"), "C");
        assert_eq!(normalize("BLD", "", "A-B"), "B");
    }

    #[test]
    fn test_building_without_suffix_keeps_last_segment() {
        assert_eq!(normalize("BLD", "9", "X-Y-Z"), "Z");
    }

    #[test]
    fn test_hyphen_empty_segments_dropped() {
        assert_eq!(normalize("BLD-1", "1", "01--204-"), "204");
        assert_eq!(normalize("BLD-1", "1", "---"), "---");
    }

    #[test]
    fn test_dotted_room() {
        assert_eq!(normalize("BLD-1", "1", "60.01.015G"), "015G");
        assert_eq!(normalize("BLD-1", "1", "..."), "...");
    }

    #[test]
    fn test_plain_room_unchanged() {
        assert_eq!(normalize("BLD-1", "1", "ABUS2"), "ABUS2");
        assert_eq!(normalize("BLD-1", "1", "  204 "), "204");
    }

    #[test]
    fn test_blank_room() {
        assert_eq!(normalize("BLD-1", "1", ""), "");
        assert_eq!(normalize("BLD-1", "1", "   "), "");
    }

    #[test]
    fn test_room_style_dispatch() {
        assert_eq!(RoomStyle::Digits.clean("BLD-1", "2", "Room-204B"), "204");
        assert_eq!(RoomStyle::Segments.clean("BLD-1", "2", "01-2-204B"), "204B");

        assert_eq!(RoomStyle::Digits.display_room("Room-204B", "204"), "204");
        assert_eq!(RoomStyle::Segments.display_room("01-2-204B", "204B"), "01-2-204B");
    }
}
