// Normalized Conference Model
// The canonical object graph produced by the normalization pass.
//
// Every entity carries:
// - A stable identifier (the one capability all entities share)
// - Descriptive fields decoded from the source document
// - Reference fields that point at the single canonical instance per id
//
// These types only serialize (the raw module only deserializes); reference
// fields serialize as plain id values, the full entities appear exactly once
// in the metadata collections.

pub mod conference;
pub mod event;
pub mod lookup;
pub mod speaker;

pub use conference::{Conference, MetaData};
pub use event::Event;
pub use lookup::{Audience, EventType, Language, Location, Track};
pub use speaker::Speaker;

use serde::Serializer;
use std::sync::Arc;

/// The one capability every conference entity shares.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Serialize an optional entity reference as its id.
pub(crate) fn serialize_ref<T, S>(
    reference: &Option<Arc<T>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: Identifiable,
    S: Serializer,
{
    match reference {
        Some(entity) => serializer.serialize_some(entity.id()),
        None => serializer.serialize_none(),
    }
}

/// Serialize a list of entity references as their ids.
pub(crate) fn serialize_ref_ids<T, S>(
    references: &[Arc<T>],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: Identifiable,
    S: Serializer,
{
    serializer.collect_seq(references.iter().map(|entity| entity.id()))
}
