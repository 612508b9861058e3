// Conference: the root of a normalized graph and sole owner of the
// canonical entity instances. Everything below it is shared, read-only.

use crate::model::serialize_ref;
use crate::model::{Audience, Event, EventType, Identifiable, Language, Location, Speaker, Track};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub meta_data: MetaData,

    pub events: Vec<Arc<Event>>,

    pub speakers: Vec<Arc<Speaker>>,
}

impl Conference {
    /// Look up an event by id.
    pub fn event(&self, id: &str) -> Option<&Arc<Event>> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Look up a speaker by id.
    pub fn speaker(&self, id: &str) -> Option<&Arc<Speaker>> {
        self.speakers.iter().find(|speaker| speaker.id == id)
    }
}

impl Identifiable for Conference {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Shared reference entities of one conference.
///
/// The collections keep the membership and order of the source document.
/// When a duplicate id loses last-write-wins during registry build, the
/// losing instance stays in its collection but nothing references it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    /// Always the owning conference's id after normalization
    pub id: String,

    #[serde(
        rename = "defaultLanguageId",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_ref"
    )]
    pub default_language: Option<Arc<Language>>,

    pub languages: Vec<Arc<Language>>,

    pub audiences: Vec<Arc<Audience>>,

    pub event_types: Vec<Arc<EventType>>,

    pub locations: Vec<Arc<Location>>,

    pub tracks: Vec<Arc<Track>>,
}
