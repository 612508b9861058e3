// Conference Hub - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod model;      // Normalized conference graph
pub mod normalize;  // CORE: graph normalization pass
pub mod provider;   // Data-source providers (raw document loading)
pub mod raw;        // Wire-format documents, duplicates and all
pub mod resources;  // Binary resources + styles lookup
pub mod service;    // Normalization over all providers

// Re-export commonly used types
pub use model::{
    Audience, Conference, Event, EventType, Identifiable, Language, Location, MetaData, Speaker,
    Track,
};
pub use normalize::{normalize, remap_language_ids, EntityKind, NormalizeError};
pub use provider::{discover_providers, ConferenceDataProvider, JsonFileProvider, StaticProvider};
pub use resources::{etag, ResourceStore, Resources, Styles};
pub use service::ConferenceService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
