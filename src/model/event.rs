// Event: a scheduled talk with references into the shared entity space.
// Constructed only by the normalization pass, which guarantees that every
// reference below is the canonical instance for its id.

use crate::model::{serialize_ref, serialize_ref_ids};
use crate::model::{Audience, EventType, Identifiable, Language, Location, Speaker, Track};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,

    pub title: String,

    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,

    pub demo: bool,

    #[serde(
        rename = "audienceId",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_ref"
    )]
    pub audience: Option<Arc<Audience>>,

    #[serde(
        rename = "trackId",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_ref"
    )]
    pub track: Option<Arc<Track>>,

    #[serde(
        rename = "languageId",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_ref"
    )]
    pub language: Option<Arc<Language>>,

    #[serde(
        rename = "locationId",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_ref"
    )]
    pub location: Option<Arc<Location>>,

    #[serde(
        rename = "typeId",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_ref"
    )]
    pub event_type: Option<Arc<EventType>>,

    /// Speakers in announcement order
    #[serde(rename = "speakerIds", serialize_with = "serialize_ref_ids")]
    pub speakers: Vec<Arc<Speaker>>,
}

impl Identifiable for Event {
    fn id(&self) -> &str {
        &self.id
    }
}
