use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde_json::Value;
use std::sync::Arc;
use url::Url;
use crate::shared::error::CollectionError;
use crate::shared::fetch::{page_title, PageFetcher};
use crate::shared::models::{Dataset, DatasetBuilder, StatEntry};
use crate::shared::storage::JsonStorage;
use crate::shared::traits::{AsyncDataCollector, MetadataProvider};

/// A statistics source backed by built-in reference figures.
pub trait StatisticsSource: MetadataProvider + Send + Sync {
    /// Page consulted on every run. Its content does not feed the dataset.
    fn reference_url(&self) -> &str;

    fn statistics(&self) -> Vec<StatEntry>;

    fn sections(&self) -> Vec<(&'static str, Value)>;

    fn resources(&self) -> Vec<(&'static str, &'static str)>;

    fn build_dataset(&self, collected_at: DateTime<Utc>) -> Result<Dataset, CollectionError> {
        let mut builder = DatasetBuilder::new()
            .source(self.name())
            .last_updated(collected_at)
            .category(self.category())
            .statistics(self.statistics());

        for (name, section) in self.sections() {
            builder = builder.section(name, section);
        }
        for (name, url) in self.resources() {
            builder = builder.resource(name, url);
        }

        builder.build().map_err(CollectionError::InvalidDataset)
    }
}

/// Runs one source: advisory fetch, then build and persist.
pub struct SourceCollector<S> {
    source: S,
    fetcher: Arc<dyn PageFetcher>,
    storage: JsonStorage,
}

impl<S: StatisticsSource> SourceCollector<S> {
    pub fn new(source: S, fetcher: Arc<dyn PageFetcher>, storage: JsonStorage) -> Self {
        Self {
            source,
            fetcher,
            storage,
        }
    }

    /// Fetch failures are logged and dropped here.
    async fn check_reference(&self) {
        let url = match Url::parse(self.source.reference_url()) {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping fetch for {}: bad reference URL: {}", self.source.name(), e);
                return;
            }
        };

        info!("Fetching {} reference page from {}", self.source.name(), url);
        match self.fetcher.fetch(&url).await {
            Ok(body) => {
                match page_title(&body) {
                    Some(title) => info!("Fetched {} page \"{}\" ({} bytes)", self.source.name(), title, body.len()),
                    None => info!("Fetched {} page ({} bytes)", self.source.name(), body.len()),
                }
            }
            Err(e) => {
                warn!("Could not fetch {} data, using reference statistics: {}", self.source.name(), e);
            }
        }
    }
}

#[async_trait]
impl<S: StatisticsSource> AsyncDataCollector<Dataset> for SourceCollector<S> {
    async fn collect(&mut self) -> Result<Dataset, CollectionError> {
        self.check_reference().await;

        let dataset = self.source.build_dataset(Utc::now())?;
        self.storage.write(self.source.output_file(), &dataset).await?;

        info!(
            "Collected {} statistics from {}",
            dataset.statistics.len(),
            self.source.name()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::FetchError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct FakeSource {
        url: &'static str,
        valid: bool,
    }

    impl MetadataProvider for FakeSource {
        fn name(&self) -> &str {
            "Fake"
        }
        fn category(&self) -> &str {
            "Testing"
        }
        fn output_file(&self) -> &str {
            "fake.json"
        }
    }

    impl StatisticsSource for FakeSource {
        fn reference_url(&self) -> &str {
            self.url
        }

        fn statistics(&self) -> Vec<StatEntry> {
            let value = if self.valid { "42" } else { "" };
            vec![StatEntry::new("Answer", value)]
        }

        fn sections(&self) -> Vec<(&'static str, Value)> {
            vec![("notes", serde_json::json!({ "kind": "fake" }))]
        }

        fn resources(&self) -> Vec<(&'static str, &'static str)> {
            vec![("Example", "https://example.org/")]
        }
    }

    #[derive(Default)]
    struct CountingFetcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageFetcher for CountingFetcher {
        async fn fetch(&self, _url: &Url) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::Offline)
        }
    }

    #[tokio::test]
    async fn fetch_failure_is_swallowed_and_dataset_persisted() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(CountingFetcher::default());
        let mut collector = SourceCollector::new(
            FakeSource { url: "https://example.org/", valid: true },
            fetcher.clone(),
            JsonStorage::new(tmp.path()),
        );

        let dataset = collector.collect().await.unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(dataset.statistics.len(), 1);
        assert_eq!(dataset.category, "Testing");
        assert!(dataset.section("notes").is_some());
        assert_eq!(dataset.resources[0].name, "Example");
        assert!(tmp.path().join("fake.json").exists());
    }

    #[tokio::test]
    async fn bad_reference_url_skips_fetch() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(CountingFetcher::default());
        let mut collector = SourceCollector::new(
            FakeSource { url: "::nope", valid: true },
            fetcher.clone(),
            JsonStorage::new(tmp.path()),
        );

        assert!(collector.collect().await.is_ok());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_dataset_is_not_persisted() {
        let tmp = TempDir::new().unwrap();
        let mut collector = SourceCollector::new(
            FakeSource { url: "https://example.org/", valid: false },
            Arc::new(CountingFetcher::default()),
            JsonStorage::new(tmp.path()),
        );

        let err = collector.collect().await.unwrap_err();

        assert!(matches!(err, CollectionError::InvalidDataset(_)));
        assert!(!tmp.path().join("fake.json").exists());
    }

    #[tokio::test]
    async fn storage_failure_surfaces() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut collector = SourceCollector::new(
            FakeSource { url: "https://example.org/", valid: true },
            Arc::new(CountingFetcher::default()),
            JsonStorage::new(&blocker),
        );

        let err = collector.collect().await.unwrap_err();
        assert!(matches!(err, CollectionError::Storage(_)));
    }
}
