// 🔗 Normalization Pass - One canonical instance per entity id
//
// A decoded conference document holds many duplicate instances of the same
// logical entity (see raw.rs). This pass produces a graph where every
// reference resolves to the single canonical instance for its id:
//
//   1. Remap well-known textual language ids to their numeric form
//   2. Build one registry per entity kind (last write wins on duplicate ids)
//   3. Rewrite the metadata default language from the language registry
//   4. Rewrite every event's references, accumulating the event registry
//   5. Link every speaker's event back-references from the event registry
//   6. Assign the conference's own id to its metadata
//
// The ordering is load-bearing: the remap must run before the language
// registry is built or the registry would be keyed by stale codes, and the
// speaker pass must run after the event pass because it hands out handles
// to finished events. Both hazards are ruled out by the types - the remap
// and registry build consume the raw document, the speaker pass reads the
// event registry that only the event pass produces.

use crate::model::{
    Audience, Conference, Event, EventType, Identifiable, Language, Location, MetaData, Speaker,
    Track,
};
use crate::raw;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Entity kinds a reference can point at, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Audience,
    EventType,
    Language,
    Location,
    Speaker,
    Track,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Audience => "audience",
            EntityKind::EventType => "event type",
            EntityKind::Language => "language",
            EntityKind::Location => "location",
            EntityKind::Speaker => "speaker",
            EntityKind::Track => "track",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalization failure is a defect in the source document, not a
/// recoverable condition: dropping the reference instead would leave a
/// structurally valid but semantically wrong graph. The failing conference
/// is abandoned; other conferences are unaffected.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// An event points at an id with no entry in the registry for that kind.
    #[error("event \"{event_id}\" references unknown {kind} \"{reference_id}\"")]
    MissingReference {
        kind: EntityKind,
        reference_id: String,
        event_id: String,
    },

    /// A speaker points at an event that is not in the conference's
    /// event collection.
    #[error("speaker \"{speaker_id}\" references unknown event \"{event_id}\"")]
    MissingEventReference {
        speaker_id: String,
        event_id: String,
    },

    /// The metadata default language is not one of the declared languages.
    #[error("default language \"{language_id}\" is not declared in the conference languages")]
    UnknownDefaultLanguage { language_id: String },
}

// ============================================================================
// LANGUAGE ID REMAP
// ============================================================================

/// Well-known textual language codes and the numeric ids clients expect.
/// A deliberately tiny, data-set-specific table; anything else passes
/// through untouched, so numeric ids are fixed points.
const LANGUAGE_ID_REMAP: [(&str, &str); 3] = [("de", "1"), ("en", "2"), ("germanenglish", "3")];

/// Rewrite the well-known language ids everywhere a language can appear:
/// the metadata default language, the declared language list, and every
/// event's language reference.
///
/// Must run before the language registry is built - the registry is keyed
/// by the remapped ids.
pub fn remap_language_ids(conference: &mut raw::Conference) {
    remap_language(conference.meta_data.default_language.as_mut());
    for language in &mut conference.meta_data.languages {
        remap_language(Some(language));
    }
    for event in &mut conference.events {
        remap_language(event.language.as_mut());
    }
}

fn remap_language(language: Option<&mut raw::Language>) {
    if let Some(language) = language {
        if let Some((_, numeric)) = LANGUAGE_ID_REMAP
            .iter()
            .find(|(code, _)| *code == language.id)
        {
            language.id = (*numeric).to_string();
        }
    }
}

// ============================================================================
// ENTITY REGISTRIES
// ============================================================================

/// One canonical-instance lookup per entity kind, scoped to a single
/// conference's pass.
struct Registries {
    audiences: HashMap<String, Arc<Audience>>,
    event_types: HashMap<String, Arc<EventType>>,
    languages: HashMap<String, Arc<Language>>,
    locations: HashMap<String, Arc<Location>>,
    speakers: HashMap<String, Arc<Speaker>>,
    tracks: HashMap<String, Arc<Track>>,
}

/// Convert a source collection into the output collection plus its registry.
///
/// Iteration order is the document order; on duplicate ids the later entry
/// silently wins in the registry. The losing instance stays in the output
/// collection, where nothing will reference it.
fn register<R, T>(raw_items: Vec<R>) -> (Vec<Arc<T>>, HashMap<String, Arc<T>>)
where
    T: From<R> + Identifiable,
{
    let mut items = Vec::with_capacity(raw_items.len());
    let mut registry = HashMap::with_capacity(raw_items.len());
    for raw_item in raw_items {
        let item = Arc::new(T::from(raw_item));
        registry.insert(item.id().to_string(), Arc::clone(&item));
        items.push(item);
    }
    (items, registry)
}

fn resolve<T>(
    registry: &HashMap<String, Arc<T>>,
    reference_id: Option<String>,
    kind: EntityKind,
    event_id: &str,
) -> Result<Option<Arc<T>>, NormalizeError> {
    match reference_id {
        Some(reference_id) => match registry.get(&reference_id) {
            Some(entity) => Ok(Some(Arc::clone(entity))),
            None => Err(NormalizeError::MissingReference {
                kind,
                reference_id,
                event_id: event_id.to_string(),
            }),
        },
        None => Ok(None),
    }
}

// ============================================================================
// REFERENCE REWRITING
// ============================================================================

/// Rebuild one event with every reference replaced by its canonical
/// instance. Absent references stay absent; a present reference whose id
/// is unknown fails the pass.
fn rewrite_event(event: raw::Event, registries: &Registries) -> Result<Event, NormalizeError> {
    let raw::Event {
        id,
        title,
        abstract_text,
        start,
        end,
        demo,
        audience,
        track,
        language,
        location,
        event_type,
        speakers,
    } = event;

    let audience = resolve(
        &registries.audiences,
        audience.map(|a| a.id),
        EntityKind::Audience,
        &id,
    )?;
    let track = resolve(
        &registries.tracks,
        track.map(|t| t.id),
        EntityKind::Track,
        &id,
    )?;
    let language = resolve(
        &registries.languages,
        language.map(|l| l.id),
        EntityKind::Language,
        &id,
    )?;
    let location = resolve(
        &registries.locations,
        location.map(|l| l.id),
        EntityKind::Location,
        &id,
    )?;
    let event_type = resolve(
        &registries.event_types,
        event_type.map(|t| t.id),
        EntityKind::EventType,
        &id,
    )?;

    let mut canonical_speakers = Vec::with_capacity(speakers.len());
    for speaker in speakers {
        match registries.speakers.get(&speaker.id) {
            Some(canonical) => canonical_speakers.push(Arc::clone(canonical)),
            None => {
                return Err(NormalizeError::MissingReference {
                    kind: EntityKind::Speaker,
                    reference_id: speaker.id,
                    event_id: id,
                })
            }
        }
    }

    Ok(Event {
        id,
        title,
        abstract_text,
        start,
        end,
        demo,
        audience,
        track,
        language,
        location,
        event_type,
        speakers: canonical_speakers,
    })
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Normalize one conference graph.
///
/// Consumes the raw document and returns the same conference with exactly
/// one live instance per entity id, every reference pointing at it. The
/// metadata keeps its collections in document order and receives the
/// conference's own id.
pub fn normalize(mut raw: raw::Conference) -> Result<Conference, NormalizeError> {
    remap_language_ids(&mut raw);

    let raw::Conference {
        id,
        name,
        url,
        meta_data,
        events,
        speakers,
    } = raw;

    let (audiences, audience_registry) = register(meta_data.audiences);
    let (event_types, event_type_registry) = register(meta_data.event_types);
    let (languages, language_registry) = register(meta_data.languages);
    let (locations, location_registry) = register(meta_data.locations);
    let (tracks, track_registry) = register(meta_data.tracks);

    // The back-reference pass needs the stub ids, which the conversion
    // into canonical speakers drops.
    let speaker_event_ids: Vec<Vec<String>> = speakers
        .iter()
        .map(|speaker| speaker.events.iter().map(|event| event.id.clone()).collect())
        .collect();
    let (speakers, speaker_registry) = register(speakers);

    let default_language = match meta_data.default_language {
        Some(language) => match language_registry.get(&language.id) {
            Some(canonical) => Some(Arc::clone(canonical)),
            None => {
                return Err(NormalizeError::UnknownDefaultLanguage {
                    language_id: language.id,
                })
            }
        },
        None => None,
    };

    let registries = Registries {
        audiences: audience_registry,
        event_types: event_type_registry,
        languages: language_registry,
        locations: location_registry,
        speakers: speaker_registry,
        tracks: track_registry,
    };

    let mut event_registry: HashMap<String, Arc<Event>> = HashMap::with_capacity(events.len());
    let mut canonical_events = Vec::with_capacity(events.len());
    for event in events {
        let event = Arc::new(rewrite_event(event, &registries)?);
        event_registry.insert(event.id.clone(), Arc::clone(&event));
        canonical_events.push(event);
    }

    for (speaker, event_ids) in speakers.iter().zip(speaker_event_ids) {
        let mut talks = Vec::with_capacity(event_ids.len());
        for event_id in event_ids {
            match event_registry.get(&event_id) {
                Some(event) => talks.push(Arc::downgrade(event)),
                None => {
                    return Err(NormalizeError::MissingEventReference {
                        speaker_id: speaker.id.clone(),
                        event_id,
                    })
                }
            }
        }
        speaker.link_events(talks);
    }

    Ok(Conference {
        id: id.clone(),
        name,
        url,
        meta_data: MetaData {
            id,
            default_language,
            languages,
            audiences,
            event_types,
            locations,
            tracks,
        },
        events: canonical_events,
        speakers,
    })
}

// ============================================================================
// TESTS
// ============================================================================
