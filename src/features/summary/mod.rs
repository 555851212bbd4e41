pub mod models;
mod aggregator;
mod curated;

pub use aggregator::{Aggregator, DISPLAY_STATS_FILE, SUMMARY_FILE};
pub use models::{DisplayStat, DisplayStats, ImpactArea, ImpactNeed, KeyStatistic, MissouriFigures, Summary};
