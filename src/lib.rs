pub mod features;
pub mod pipeline;
pub mod shared;

pub use features::bjs_recidivism::BjsRecidivismSource;
pub use features::cdc_hiv::CdcHivSource;
pub use features::missouri_doc::MissouriDocSource;
pub use features::summary::{
    Aggregator,
    DisplayStat,
    DisplayStats,
    ImpactArea,
    ImpactNeed,
    KeyStatistic,
    MissouriFigures,
    Summary,
    DISPLAY_STATS_FILE,
    SUMMARY_FILE,
};

pub use pipeline::{Pipeline, RunReport, Selection, Target};

pub use shared::collector::{SourceCollector, StatisticsSource};
pub use shared::config::AppConfig;
pub use shared::error::{
    CollectionError,
    ConfigError,
    FetchError,
    StatsError,
    StorageError,
};
pub use shared::fetch::{HttpFetcher, OfflineFetcher, PageFetcher};
pub use shared::models::{Dataset, DatasetBuilder, Resource, StatEntry};
pub use shared::storage::JsonStorage;
pub use shared::traits::{AsyncDataCollector, MetadataProvider, Validatable};
