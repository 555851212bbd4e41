use chrono::Utc;
use log::{info, warn};
use crate::features::summary::curated;
use crate::features::summary::models::{DisplayStats, Summary};
use crate::shared::error::StorageError;
use crate::shared::models::Dataset;
use crate::shared::storage::JsonStorage;

pub const SUMMARY_FILE: &str = "summary.json";
pub const DISPLAY_STATS_FILE: &str = "website-stats.json";

/// Builds the cross-source summary and the website feed.
///
/// The content is curated rather than computed from the collected datasets,
/// so a missing dataset only produces a warning.
pub struct Aggregator {
    storage: JsonStorage,
}

impl Aggregator {
    pub fn new(storage: JsonStorage) -> Self {
        Self { storage }
    }

    pub fn build_summary(&self) -> Summary {
        let key_statistics = curated::key_statistics();
        Summary {
            title: curated::TITLE.to_string(),
            generated_at: Utc::now(),
            purpose: curated::PURPOSE.to_string(),
            data_sources: curated::data_sources(&key_statistics),
            key_statistics,
            impact_areas: curated::impact_areas(),
            missouri_specific: curated::missouri_figures(),
        }
    }

    pub async fn aggregate(
        &self,
        health: Option<&Dataset>,
        regional: Option<&Dataset>,
        national: Option<&Dataset>,
    ) -> Result<(Summary, DisplayStats), StorageError> {
        for (label, dataset) in [("health", health), ("regional", regional), ("national", national)] {
            if dataset.is_none() {
                warn!("No {} dataset collected; summary uses curated figures", label);
            }
        }

        let summary = self.build_summary();
        self.storage.write(SUMMARY_FILE, &summary).await?;

        let display = DisplayStats::from_summary(&summary);
        self.storage.write(DISPLAY_STATS_FILE, &display).await?;

        info!(
            "Generated summary with {} key statistics and {} website stats",
            summary.key_statistics.len(),
            display.0.len()
        );
        Ok((summary, display))
    }
}
