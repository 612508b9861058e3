// 🏗️ Conference Data Providers
// One provider per registered data source. A provider only decodes; the
// duplicated graph it returns is handed to the normalization pass untouched.

use crate::raw;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A registered conference data source.
///
/// Implementations deliver the raw decoded document; they perform no part
/// of the normalization algorithm themselves.
pub trait ConferenceDataProvider: Send + Sync {
    /// Decode the raw conference document this provider is responsible for.
    fn conference(&self) -> Result<raw::Conference>;

    /// Where the document comes from, for failure reports.
    fn source(&self) -> String;
}

// ============================================================================
// JSON FILE PROVIDER
// ============================================================================

/// Loads a conference document from a JSON file on disk.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonFileProvider { path: path.into() }
    }
}

impl ConferenceDataProvider for JsonFileProvider {
    fn conference(&self) -> Result<raw::Conference> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read conference document: {:?}", self.path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse conference document: {:?}", self.path))
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

// ============================================================================
// STATIC PROVIDER
// ============================================================================

/// Serves a document already held in memory. Used in tests and demos.
pub struct StaticProvider {
    conference: raw::Conference,
}

impl StaticProvider {
    pub fn new(conference: raw::Conference) -> Self {
        StaticProvider { conference }
    }
}

impl ConferenceDataProvider for StaticProvider {
    fn conference(&self) -> Result<raw::Conference> {
        Ok(self.conference.clone())
    }

    fn source(&self) -> String {
        format!("static:{}", self.conference.id)
    }
}

// ============================================================================
// DISCOVERY
// ============================================================================

/// Register a file provider for every `*.json` document in a directory.
///
/// Paths are sorted so the provider order - and with it the order of the
/// normalized conference list - is deterministic.
pub fn discover_providers(dir: &Path) -> Result<Vec<Box<dyn ConferenceDataProvider>>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read data directory: {:?}", dir))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| Box::new(JsonFileProvider::new(path)) as Box<dyn ConferenceDataProvider>)
        .collect())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "conference-hub-provider-{}-{}",
            tag,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_static_provider_round_trip() {
        let conference = raw::Conference {
            id: "c1".to_string(),
            name: "Test Conference".to_string(),
            url: None,
            meta_data: raw::MetaData::default(),
            events: vec![],
            speakers: vec![],
        };

        let provider = StaticProvider::new(conference);
        assert_eq!(provider.conference().unwrap().id, "c1");
        assert_eq!(provider.source(), "static:c1");
    }

    #[test]
    fn test_json_file_provider_decodes_document() {
        let dir = temp_dir("decode");
        let path = dir.join("c1.json");
        fs::write(&path, r#"{"id": "c1", "metaData": {}}"#).unwrap();

        let provider = JsonFileProvider::new(path);
        let conference = provider.conference().unwrap();
        assert_eq!(conference.id, "c1");
    }

    #[test]
    fn test_json_file_provider_reports_missing_file() {
        let provider = JsonFileProvider::new("/nonexistent/conference.json");
        let error = provider.conference().unwrap_err();
        assert!(error.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_discovery_is_sorted_and_filtered() {
        let dir = temp_dir("discovery");
        fs::write(dir.join("b.json"), r#"{"id": "b", "metaData": {}}"#).unwrap();
        fs::write(dir.join("a.json"), r#"{"id": "a", "metaData": {}}"#).unwrap();
        fs::write(dir.join("notes.txt"), "not a document").unwrap();

        let providers = discover_providers(&dir).unwrap();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].conference().unwrap().id, "a");
        assert_eq!(providers[1].conference().unwrap().id, "b");
    }
}
