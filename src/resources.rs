// 🖼️ Resource Store
// Binary resources (logos, speaker photos, per-language and per-stream
// icons) and styles, looked up from a directory tree keyed by conference id:
//
//   <root>/<conference>/conference/logo.*
//   <root>/<conference>/languages/<language-id>.*
//   <root>/<conference>/streams/<track-id>.*
//   <root>/<conference>/speakers/<speaker-id>.*
//   <root>/<conference>/styles.json
//
// Lookups consume the normalized graph's identifiers; missing directories
// and unreadable files count as absent resources, never as errors.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Theme colors a client applies for one conference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styles {
    pub dark: Option<String>,
    pub dark_link: Option<String>,
    pub hover: Option<String>,
    pub hover_link: Option<String>,
    pub reverse: Option<String>,
    pub highlight: Option<String>,
    pub alternate: Option<String>,
}

/// Everything the store knows about one conference, fetched in one go.
#[derive(Debug, Default)]
pub struct Resources {
    pub styles: Option<Styles>,
    pub conference_image: Option<Vec<u8>>,
    pub language_images: HashMap<String, Vec<u8>>,
    pub stream_images: HashMap<String, Vec<u8>>,
    pub speaker_images: HashMap<String, Vec<u8>>,
}

pub struct ResourceStore {
    root: PathBuf,
}

impl ResourceStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        ResourceStore { root: root.into() }
    }

    /// Logo bytes for every conference that has one, keyed by conference id.
    pub fn conference_logos(&self) -> HashMap<String, Vec<u8>> {
        let mut logos = HashMap::new();
        let Ok(entries) = fs::read_dir(&self.root) else {
            return logos;
        };

        for entry in entries.flatten() {
            if !entry.path().is_dir() {
                continue;
            }
            let conference_id = entry.file_name().to_string_lossy().to_string();
            let images = image_directory(&entry.path().join("conference"));
            if let Some(logo) = images.get("logo") {
                logos.insert(conference_id, logo.clone());
            }
        }
        logos
    }

    /// Everything for one conference: styles, logo, and the icon maps.
    pub fn resources_for(&self, conference_id: &str) -> Resources {
        let base = self.root.join(conference_id);
        let mut conference_images = image_directory(&base.join("conference"));

        Resources {
            styles: self.styles_for(conference_id),
            conference_image: conference_images.remove("logo"),
            language_images: image_directory(&base.join("languages")),
            stream_images: image_directory(&base.join("streams")),
            speaker_images: image_directory(&base.join("speakers")),
        }
    }

    pub fn styles_for(&self, conference_id: &str) -> Option<Styles> {
        let path = self.root.join(conference_id).join("styles.json");
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn logo(&self, conference_id: &str) -> Option<Vec<u8>> {
        image_directory(&self.root.join(conference_id).join("conference"))
            .remove("logo")
    }

    pub fn speaker_photo(&self, conference_id: &str, speaker_id: &str) -> Option<Vec<u8>> {
        image_directory(&self.root.join(conference_id).join("speakers")).remove(speaker_id)
    }

    pub fn language_icon(&self, conference_id: &str, language_id: &str) -> Option<Vec<u8>> {
        image_directory(&self.root.join(conference_id).join("languages")).remove(language_id)
    }
}

/// Read every regular file in a directory, keyed by file stem.
/// Unreadable entries are skipped - an image we cannot serve is treated
/// the same as an image that was never uploaded.
fn image_directory(dir: &Path) -> HashMap<String, Vec<u8>> {
    let mut images = HashMap::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return images;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if let Ok(data) = fs::read(&path) {
            images.insert(stem.to_string(), data);
        }
    }
    images
}

/// Content hash of a binary resource, used as its HTTP etag.
pub fn etag(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

// ============================================================================
// TESTS
// ============================================================================
