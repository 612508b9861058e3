// 📄 Raw Conference Documents
// Wire-format mirror of the JSON a data provider delivers.
//
// The source format repeats entities wherever they are referenced: an event
// carries its own copy of the track, the language, the speakers. After
// decoding, the graph therefore holds many duplicate instances that share
// only an identifier. Nothing here is deduplicated - that is the job of
// the normalization pass (see normalize.rs), which consumes these types.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashMap;

// ============================================================================
// CONFERENCE DOCUMENT
// ============================================================================

/// One conference as delivered by a data provider, duplicates and all.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,

    pub meta_data: MetaData,

    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

/// Shared reference entities, as declared at the top of the document.
///
/// These collections are the canonical source for the registries; copies of
/// the same entities embedded in events are throwaway duplicates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub default_language: Option<Language>,

    #[serde(default)]
    pub languages: Vec<Language>,

    #[serde(default)]
    pub audiences: Vec<Audience>,

    #[serde(default)]
    pub event_types: Vec<EventType>,

    #[serde(default)]
    pub locations: Vec<Location>,

    #[serde(default)]
    pub tracks: Vec<Track>,
}

// ============================================================================
// EVENTS & SPEAKERS
// ============================================================================

/// A talk, workshop or other scheduled slot.
///
/// Every embedded entity is a duplicate of a metadata entry. Only the id of
/// a duplicate can be trusted; descriptive fields may be stale or defaulted,
/// which is why feeds often send bare stubs like `{"id": "track-1"}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,

    #[serde(default)]
    pub start: Option<NaiveDateTime>,

    #[serde(default)]
    pub end: Option<NaiveDateTime>,

    #[serde(default)]
    pub demo: bool,

    #[serde(default)]
    pub audience: Option<Audience>,

    #[serde(default)]
    pub track: Option<Track>,

    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default)]
    pub location: Option<Location>,

    #[serde(rename = "type", default)]
    pub event_type: Option<EventType>,

    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

/// Speaker profile. The `events` list carries stubs of the talks this
/// speaker gives; only their ids are meaningful.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub twitter: Option<String>,

    #[serde(default)]
    pub gplus: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub events: Vec<Event>,
}

// ============================================================================
// REFERENCE ENTITIES
// ============================================================================

/// Talk language. The id is rewritten by the normalization pass for the
/// well-known codes ("de", "en", "germanenglish"); `code` keeps the
/// original ISO-ish value for display.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub order: i32,

    #[serde(default)]
    pub names: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    pub id: String,

    #[serde(default)]
    pub order: i32,

    #[serde(default)]
    pub names: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: String,

    #[serde(default)]
    pub order: i32,

    #[serde(default)]
    pub names: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,

    #[serde(default)]
    pub order: i32,

    #[serde(default)]
    pub capacity: Option<u32>,

    #[serde(default)]
    pub names: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,

    #[serde(default)]
    pub order: i32,

    #[serde(default)]
    pub names: HashMap<String, String>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_document() {
        let json = r#"{
            "id": "devcon2026",
            "name": "DevCon 2026",
            "url": "https://devcon.example.org",
            "metaData": {
                "defaultLanguage": {"id": "de", "code": "de", "order": 1},
                "languages": [
                    {"id": "de", "code": "de", "order": 1, "names": {"de": "Deutsch", "en": "German"}},
                    {"id": "en", "code": "en", "order": 2}
                ],
                "audiences": [{"id": "a1", "order": 1, "names": {"en": "Developers"}}],
                "eventTypes": [{"id": "et1", "names": {"en": "Talk"}}],
                "locations": [{"id": "l1", "capacity": 300, "names": {"en": "Main Hall"}}],
                "tracks": [{"id": "t1", "names": {"en": "Architecture"}}]
            },
            "events": [{
                "id": "e1",
                "title": "Normalizing object graphs",
                "abstract": "Ids over instances.",
                "start": "2026-09-01T10:00:00",
                "end": "2026-09-01T10:45:00",
                "track": {"id": "t1"},
                "language": {"id": "de"},
                "location": {"id": "l1"},
                "type": {"id": "et1"},
                "audience": {"id": "a1"},
                "speakers": [{"id": "s1", "name": "Ada"}]
            }],
            "speakers": [{
                "id": "s1",
                "name": "Ada",
                "company": "ACME",
                "events": [{"id": "e1"}]
            }]
        }"#;

        let conference: Conference = serde_json::from_str(json).unwrap();

        assert_eq!(conference.id, "devcon2026");
        assert_eq!(conference.meta_data.languages.len(), 2);
        assert_eq!(
            conference.meta_data.default_language.as_ref().unwrap().id,
            "de"
        );
        assert_eq!(conference.events.len(), 1);

        let event = &conference.events[0];
        assert_eq!(event.track.as_ref().unwrap().id, "t1");
        assert_eq!(event.event_type.as_ref().unwrap().id, "et1");
        assert_eq!(event.speakers[0].id, "s1");
        assert!(event.start.is_some());

        // Speaker event stubs only carry the id
        let speaker = &conference.speakers[0];
        assert_eq!(speaker.events.len(), 1);
        assert_eq!(speaker.events[0].id, "e1");
        assert_eq!(speaker.events[0].title, "");
    }

    #[test]
    fn test_decode_bare_stub() {
        // Duplicates may arrive as bare stubs; every descriptive field defaults
        let track: Track = serde_json::from_str(r#"{"id": "t9"}"#).unwrap();
        assert_eq!(track.id, "t9");
        assert_eq!(track.order, 0);
        assert!(track.names.is_empty());
    }

    #[test]
    fn test_decode_minimal_document() {
        let json = r#"{"id": "c1", "metaData": {}}"#;
        let conference: Conference = serde_json::from_str(json).unwrap();

        assert!(conference.events.is_empty());
        assert!(conference.speakers.is_empty());
        assert!(conference.meta_data.default_language.is_none());
    }
}
