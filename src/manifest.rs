//! Deck manifests.
//!
//! Two JSON documents drive a render run: `file_names.json` lists the
//! expansions, factions and per-type artwork file names, and each
//! faction's `text.json` carries the card texts. Text entries are
//! tolerated loosely: a missing or non-string field becomes an empty
//! string with a warning, matching decks that ship partial data.

use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::CardError;

/// Renderable card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Combat,
    Orders,
    Events,
}

impl CardKind {
    /// Artwork subdirectory and manifest key for this type.
    pub fn folder(&self) -> &'static str {
        match self {
            CardKind::Combat => "combat",
            CardKind::Orders => "orders",
            CardKind::Events => "events",
        }
    }

    /// Key under `cards` in the file manifest.
    pub fn manifest_key(&self) -> &'static str {
        match self {
            CardKind::Combat => "Combat",
            CardKind::Orders => "Orders",
            CardKind::Events => "Events",
        }
    }
}

/// Text of one card, with absent fields normalized to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardTextRecord {
    pub title: String,
    /// Combat background box, orders body or events body.
    pub general: String,
    /// Combat foreground box.
    pub unit: String,
    /// Events type line.
    pub kind_line: String,
}

impl CardTextRecord {
    /// Read one entry of a text array, warning about (and blanking)
    /// fields that are missing or not strings.
    pub fn from_value(value: &serde_json::Value, context: &str) -> CardTextRecord {
        let field = |name: &str| match value.get(name) {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => {
                warn!("{context}: field {name} is not a string ({other}), using empty text");
                String::new()
            }
        };
        CardTextRecord {
            title: field("title"),
            general: field("general"),
            unit: field("unit"),
            kind_line: field("type"),
        }
    }
}

/// One faction's `text.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactionText {
    pub combat_text: Vec<serde_json::Value>,
    pub orders_text: Vec<serde_json::Value>,
    pub events_text: Vec<serde_json::Value>,
}

impl FactionText {
    pub fn parse(raw: &str) -> Result<FactionText, CardError> {
        serde_json::from_str(raw).map_err(|err| CardError::MalformedText(err.to_string()))
    }

    /// Normalized text records for one card type, in manifest order.
    pub fn records(&self, kind: CardKind) -> Vec<CardTextRecord> {
        let entries = match kind {
            CardKind::Combat => &self.combat_text,
            CardKind::Orders => &self.orders_text,
            CardKind::Events => &self.events_text,
        };
        entries
            .iter()
            .enumerate()
            .map(|(i, value)| {
                CardTextRecord::from_value(value, &format!("{} card {i}", kind.folder()))
            })
            .collect()
    }
}

/// Parallel folder-key and display-name lists for a tab group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FolderNames {
    pub folder: Vec<String>,
    pub name: Vec<String>,
}

/// The deck-wide `file_names.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileManifest {
    pub expansion: FolderNames,
    /// Factions available per expansion key.
    pub faction: BTreeMap<String, FolderNames>,
    /// Artwork file names per card-type key.
    pub cards: BTreeMap<String, Vec<String>>,
}

impl FileManifest {
    pub fn parse(raw: &str) -> Result<FileManifest, CardError> {
        serde_json::from_str(raw).map_err(|err| CardError::MalformedText(err.to_string()))
    }

    /// Artwork file names for one card type.
    pub fn card_files(&self, kind: CardKind) -> &[String] {
        self.cards
            .get(kind.manifest_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Asset-relative artwork path of one card.
pub fn artwork_path(expansion: &str, faction: &str, kind: CardKind, file: &str) -> String {
    format!("factions/{expansion}/{faction}/{}/{file}", kind.folder())
}

/// Combat decks group into four tiers with fixed manifest ranges.
pub const COMBAT_SECTIONS: [(usize, usize); 4] = [(0, 5), (5, 9), (9, 12), (12, 14)];

/// The four combat tiers as clamped slices of a manifest-ordered list.
pub fn combat_sections<T>(items: &[T]) -> [&[T]; 4] {
    COMBAT_SECTIONS.map(|(start, end)| {
        let start = start.min(items.len());
        let end = end.min(items.len());
        &items[start..end]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MANIFEST: &str = r#"{
        "expansion": { "folder": ["core"], "name": ["Основной набор"] },
        "faction": {
            "core": { "folder": ["space-marines"], "name": ["Космодесант"] }
        },
        "cards": {
            "Combat": ["s1.png", "s2.png"],
            "Orders": ["o1.png"],
            "Events": []
        }
    }"#;

    #[test]
    fn test_manifest_card_files_by_kind() {
        let manifest = FileManifest::parse(MANIFEST).unwrap();
        assert_eq!(manifest.card_files(CardKind::Combat).len(), 2);
        assert_eq!(manifest.card_files(CardKind::Orders), ["o1.png"]);
        assert!(manifest.card_files(CardKind::Events).is_empty());
        assert_eq!(manifest.expansion.folder, ["core"]);
        assert_eq!(manifest.faction["core"].name, ["Космодесант"]);
    }

    #[test]
    fn test_missing_cards_key_is_empty() {
        let manifest = FileManifest::parse("{}").unwrap();
        assert!(manifest.card_files(CardKind::Combat).is_empty());
    }

    #[test]
    fn test_faction_text_records_normalize_fields() {
        let text = FactionText::parse(
            r#"{
                "combatText": [
                    { "title": "Залп", "general": "Атака: +1", "unit": "Титан: +2" },
                    { "title": "Щит", "general": 7 }
                ],
                "eventsText": [
                    { "title": "Буря", "general": "Сброс", "type": "Событие" }
                ]
            }"#,
        )
        .unwrap();

        let combat = text.records(CardKind::Combat);
        assert_eq!(combat[0].general, "Атака: +1");
        assert_eq!(combat[0].unit, "Титан: +2");
        // Non-string field is blanked, the record survives.
        assert_eq!(combat[1].title, "Щит");
        assert_eq!(combat[1].general, "");

        let events = text.records(CardKind::Events);
        assert_eq!(events[0].kind_line, "Событие");
        assert!(text.records(CardKind::Orders).is_empty());
    }

    #[test]
    fn test_malformed_text_json_is_an_error() {
        assert!(matches!(
            FactionText::parse("not json"),
            Err(CardError::MalformedText(_))
        ));
    }

    #[test]
    fn test_combat_sections_are_clamped() {
        let files: Vec<u32> = (0..14).collect();
        let sections = combat_sections(&files);
        assert_eq!(sections[0], [0, 1, 2, 3, 4]);
        assert_eq!(sections[1], [5, 6, 7, 8]);
        assert_eq!(sections[2], [9, 10, 11]);
        assert_eq!(sections[3], [12, 13]);

        let short: Vec<u32> = (0..6).collect();
        let sections = combat_sections(&short);
        assert_eq!(sections[1], [5]);
        assert!(sections[2].is_empty());
        assert!(sections[3].is_empty());
    }

    #[test]
    fn test_artwork_path_layout() {
        assert_eq!(
            artwork_path("core", "orks", CardKind::Events, "e1.png"),
            "factions/core/orks/events/e1.png"
        );
    }
}
