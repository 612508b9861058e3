// Speaker profile plus the back-references to the talks they give.
//
// The event list is the one field the normalization pass fills in *after*
// the speaker has already been shared into the event graph, so it lives in
// a OnceLock: linked exactly once, immutable afterwards. The handles are
// weak - a speaker does not own the events it is linked from, the
// conference does.

use crate::model::{Event, Identifiable};
use crate::raw;
use serde::{Serialize, Serializer};
use std::sync::{Arc, OnceLock, Weak};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gplus: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(rename = "eventIds", serialize_with = "serialize_event_ids")]
    events: OnceLock<Vec<Weak<Event>>>,
}

impl Speaker {
    /// The talks this speaker gives, in document order.
    ///
    /// Empty until the normalization pass has linked the back-references.
    pub fn events(&self) -> Vec<Arc<Event>> {
        self.events
            .get()
            .map(|events| events.iter().filter_map(Weak::upgrade).collect())
            .unwrap_or_default()
    }

    /// Link the event back-references. Called once per pass; linking an
    /// already-linked speaker is a no-op.
    pub(crate) fn link_events(&self, events: Vec<Weak<Event>>) {
        let _ = self.events.set(events);
    }
}

impl From<raw::Speaker> for Speaker {
    fn from(raw: raw::Speaker) -> Self {
        Speaker {
            id: raw.id,
            name: raw.name,
            company: raw.company,
            email: raw.email,
            website: raw.website,
            twitter: raw.twitter,
            gplus: raw.gplus,
            bio: raw.bio,
            events: OnceLock::new(),
        }
    }
}

impl Identifiable for Speaker {
    fn id(&self) -> &str {
        &self.id
    }
}

fn serialize_event_ids<S>(
    events: &OnceLock<Vec<Weak<Event>>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let events: Vec<Arc<Event>> = events
        .get()
        .map(|events| events.iter().filter_map(Weak::upgrade).collect())
        .unwrap_or_default();
    serializer.collect_seq(events.iter().map(|event| event.id.as_str()))
}
