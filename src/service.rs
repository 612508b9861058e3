// 🎪 Conference Service
// Runs the normalization pass over every registered data provider and holds
// the results for the transport layer. One broken source never takes the
// other conferences down with it.

use crate::model::Conference;
use crate::normalize::normalize;
use crate::provider::ConferenceDataProvider;
use std::sync::Arc;

pub struct ConferenceService {
    conferences: Vec<Arc<Conference>>,
    failures: Vec<String>,
}

impl ConferenceService {
    /// Load and normalize every provider's conference, in provider order.
    ///
    /// A provider that fails to load or normalize is recorded in
    /// `failures` and skipped; partial normalization of a single
    /// conference is never kept.
    pub fn from_providers(providers: &[Box<dyn ConferenceDataProvider>]) -> Self {
        let mut conferences = Vec::with_capacity(providers.len());
        let mut failures = Vec::new();

        for provider in providers {
            let result = provider
                .conference()
                .map_err(|error| format!("{error:#}"))
                .and_then(|raw| normalize(raw).map_err(|error| error.to_string()));

            match result {
                Ok(conference) => conferences.push(Arc::new(conference)),
                Err(error) => failures.push(format!("{}: {}", provider.source(), error)),
            }
        }

        ConferenceService {
            conferences,
            failures,
        }
    }

    /// All normalized conferences, in provider order.
    pub fn list(&self) -> &[Arc<Conference>] {
        &self.conferences
    }

    /// A single conference by id.
    pub fn read(&self, id: &str) -> Option<Arc<Conference>> {
        self.conferences
            .iter()
            .find(|conference| conference.id == id)
            .cloned()
    }

    /// Sources that failed to load or normalize, for reporting.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use crate::raw;
    use anyhow::anyhow;

    fn conference(id: &str) -> raw::Conference {
        raw::Conference {
            id: id.to_string(),
            name: format!("Conference {id}"),
            url: None,
            meta_data: raw::MetaData::default(),
            events: vec![],
            speakers: vec![],
        }
    }

    /// Provider whose source cannot be loaded at all.
    struct BrokenProvider;

    impl ConferenceDataProvider for BrokenProvider {
        fn conference(&self) -> anyhow::Result<raw::Conference> {
            Err(anyhow!("connection refused"))
        }

        fn source(&self) -> String {
            "broken:feed".to_string()
        }
    }

    #[test]
    fn test_conferences_keep_provider_order() {
        let providers: Vec<Box<dyn ConferenceDataProvider>> = vec![
            Box::new(StaticProvider::new(conference("second"))),
            Box::new(StaticProvider::new(conference("first"))),
        ];

        let service = ConferenceService::from_providers(&providers);
        let ids: Vec<&str> = service.list().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[test]
    fn test_read_by_id() {
        let providers: Vec<Box<dyn ConferenceDataProvider>> =
            vec![Box::new(StaticProvider::new(conference("c1")))];

        let service = ConferenceService::from_providers(&providers);
        assert!(service.read("c1").is_some());
        assert!(service.read("unknown").is_none());
    }

    #[test]
    fn test_failing_provider_does_not_block_the_others() {
        let mut bad = conference("bad");
        bad.speakers.push(raw::Speaker {
            id: "s1".to_string(),
            events: vec![raw::Event {
                id: "e5".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        });

        let providers: Vec<Box<dyn ConferenceDataProvider>> = vec![
            Box::new(StaticProvider::new(conference("good"))),
            Box::new(StaticProvider::new(bad)),
            Box::new(BrokenProvider),
        ];

        let service = ConferenceService::from_providers(&providers);
        assert_eq!(service.list().len(), 1);
        assert_eq!(service.list()[0].id, "good");

        let failures = service.failures();
        assert_eq!(failures.len(), 2);
        assert!(failures[0].contains("static:bad"));
        assert!(failures[0].contains("e5"));
        assert!(failures[1].contains("broken:feed"));
    }
}
