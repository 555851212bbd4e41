use log::{error, info};
use std::sync::Arc;
use crate::features::bjs_recidivism::BjsRecidivismSource;
use crate::features::cdc_hiv::CdcHivSource;
use crate::features::missouri_doc::MissouriDocSource;
use crate::features::summary::{Aggregator, DisplayStats, Summary};
use crate::shared::collector::{SourceCollector, StatisticsSource};
use crate::shared::config::AppConfig;
use crate::shared::error::{CollectionError, StatsError};
use crate::shared::fetch::{HttpFetcher, OfflineFetcher, PageFetcher};
use crate::shared::models::Dataset;
use crate::shared::storage::JsonStorage;
use crate::shared::traits::{AsyncDataCollector, MetadataProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Target {
    Health,
    Regional,
    National,
}

impl Target {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--cdc" => Some(Target::Health),
            "--missouri" => Some(Target::Regional),
            "--bjs" => Some(Target::National),
            _ => None,
        }
    }
}

/// Which collectors run, and whether the summary is produced afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    targets: Vec<Target>,
    aggregate: bool,
}

impl Selection {
    pub fn all() -> Self {
        Self {
            targets: vec![Target::Health, Target::Regional, Target::National],
            aggregate: true,
        }
    }

    /// `--all` or no recognized flag selects everything. Single-source flags
    /// may be combined. Unknown flags must be ignored rather than rejected,
    /// which rules out a clap parser here.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut targets = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            if arg == "--all" {
                return Self::all();
            }
            if let Some(target) = Target::from_flag(arg) {
                targets.push(target);
            }
        }

        if targets.is_empty() {
            return Self::all();
        }
        targets.sort();
        targets.dedup();
        Self {
            targets,
            aggregate: false,
        }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn aggregate(&self) -> bool {
        self.aggregate
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub health: Option<Dataset>,
    pub regional: Option<Dataset>,
    pub national: Option<Dataset>,
    pub summary: Option<Summary>,
    pub display: Option<DisplayStats>,
}

pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    storage: JsonStorage,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn PageFetcher>, storage: JsonStorage) -> Self {
        Self { fetcher, storage }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, StatsError> {
        let fetcher: Arc<dyn PageFetcher> = if config.offline {
            info!("Offline mode: reference pages will not be fetched");
            Arc::new(OfflineFetcher)
        } else {
            Arc::new(
                HttpFetcher::new(config.fetch_timeout(), &config.user_agent)
                    .map_err(StatsError::HttpClient)?,
            )
        };
        Ok(Self::new(fetcher, JsonStorage::new(config.output_dir.clone())))
    }

    pub fn storage(&self) -> &JsonStorage {
        &self.storage
    }

    /// Collectors run one after another in a fixed order; the aggregator
    /// only runs for a full selection.
    pub async fn run(&self, selection: &Selection) -> Result<RunReport, StatsError> {
        let mut report = RunReport::default();

        for target in selection.targets() {
            match target {
                Target::Health => report.health = self.collect(CdcHivSource).await?,
                Target::Regional => report.regional = self.collect(MissouriDocSource).await?,
                Target::National => report.national = self.collect(BjsRecidivismSource).await?,
            }
        }

        if selection.aggregate() {
            info!("Generating summary statistics");
            let aggregator = Aggregator::new(self.storage.clone());
            let (summary, display) = aggregator
                .aggregate(
                    report.health.as_ref(),
                    report.regional.as_ref(),
                    report.national.as_ref(),
                )
                .await?;
            report.summary = Some(summary);
            report.display = Some(display);
        }

        Ok(report)
    }

    /// Storage failures abort the run; anything else is logged and the
    /// dataset is reported as missing.
    async fn collect<S: StatisticsSource>(&self, source: S) -> Result<Option<Dataset>, StatsError> {
        let name = source.name().to_string();
        info!("Collecting {} statistics", name);

        let mut collector = SourceCollector::new(source, self.fetcher.clone(), self.storage.clone());
        match collector.collect().await {
            Ok(dataset) => Ok(Some(dataset)),
            Err(CollectionError::Storage(e)) => Err(e.into()),
            Err(e) => {
                error!("Error collecting {} statistics: {}", name, e);
                Ok(None)
            }
        }
    }
}
