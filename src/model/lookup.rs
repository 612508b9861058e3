// Reference entities: pure id + descriptive fields, no further relations.
// One canonical instance per id lives in the metadata collections; events
// share it through Arc references.

use crate::model::Identifiable;
use crate::raw;
use serde::Serialize;
use std::collections::HashMap;

/// Talk language.
///
/// After normalization the id for the well-known codes is numeric ("1", "2",
/// "3"); `code` keeps the textual value for display and icon lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub order: i32,

    /// Localized display names, keyed by language code
    pub names: HashMap<String, String>,
}

/// Target audience of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    pub id: String,
    pub order: i32,
    pub names: HashMap<String, String>,
}

/// Kind of event (talk, workshop, keynote, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: String,
    pub order: i32,
    pub names: HashMap<String, String>,
}

/// Room or stage where an event takes place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub order: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    pub names: HashMap<String, String>,
}

/// Thematic track ("stream") an event belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub order: i32,
    pub names: HashMap<String, String>,
}

// ============================================================================
// CONVERSIONS FROM THE WIRE FORMAT
// ============================================================================

impl From<raw::Language> for Language {
    fn from(raw: raw::Language) -> Self {
        Language {
            id: raw.id,
            code: raw.code,
            order: raw.order,
            names: raw.names,
        }
    }
}

impl From<raw::Audience> for Audience {
    fn from(raw: raw::Audience) -> Self {
        Audience {
            id: raw.id,
            order: raw.order,
            names: raw.names,
        }
    }
}

impl From<raw::EventType> for EventType {
    fn from(raw: raw::EventType) -> Self {
        EventType {
            id: raw.id,
            order: raw.order,
            names: raw.names,
        }
    }
}

impl From<raw::Location> for Location {
    fn from(raw: raw::Location) -> Self {
        Location {
            id: raw.id,
            order: raw.order,
            capacity: raw.capacity,
            names: raw.names,
        }
    }
}

impl From<raw::Track> for Track {
    fn from(raw: raw::Track) -> Self {
        Track {
            id: raw.id,
            order: raw.order,
            names: raw.names,
        }
    }
}

impl Identifiable for Language {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Audience {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for EventType {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Location {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Track {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_raw_keeps_code() {
        let raw = raw::Language {
            id: "1".to_string(),
            code: Some("de".to_string()),
            order: 1,
            names: HashMap::from([("en".to_string(), "German".to_string())]),
        };

        let language = Language::from(raw);
        assert_eq!(language.id, "1");
        assert_eq!(language.code.as_deref(), Some("de"));
        assert_eq!(language.names["en"], "German");
    }

    #[test]
    fn test_location_capacity_serializes_only_when_set() {
        let location = Location {
            id: "l1".to_string(),
            order: 0,
            capacity: None,
            names: HashMap::new(),
        };

        let value = serde_json::to_value(&location).unwrap();
        assert!(value.get("capacity").is_none());
    }
}
