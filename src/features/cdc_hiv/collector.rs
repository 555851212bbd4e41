use serde_json::Value;
use crate::features::cdc_hiv::reference;
use crate::shared::collector::StatisticsSource;
use crate::shared::models::StatEntry;
use crate::shared::traits::MetadataProvider;

pub const SOURCE_NAME: &str = "Centers for Disease Control and Prevention (CDC)";
const CATEGORY: &str = "HIV/AIDS";
const OUTPUT_FILE: &str = "cdc-hiv-aids.json";
const REFERENCE_URL: &str = "https://www.cdc.gov/hiv/data-research/facts-stats/index.html";

#[derive(Debug, Default, Clone, Copy)]
pub struct CdcHivSource;

impl MetadataProvider for CdcHivSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn category(&self) -> &str {
        CATEGORY
    }

    fn output_file(&self) -> &str {
        OUTPUT_FILE
    }
}

impl StatisticsSource for CdcHivSource {
    fn reference_url(&self) -> &str {
        REFERENCE_URL
    }

    fn statistics(&self) -> Vec<StatEntry> {
        reference::statistics()
    }

    fn sections(&self) -> Vec<(&'static str, Value)> {
        reference::sections()
    }

    fn resources(&self) -> Vec<(&'static str, &'static str)> {
        reference::resources()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn dataset_is_complete() {
        let dataset = CdcHivSource.build_dataset(Utc::now()).unwrap();

        assert_eq!(dataset.source, SOURCE_NAME);
        assert_eq!(dataset.category, "HIV/AIDS");
        assert!(!dataset.statistics.is_empty());
        for name in ["demographics", "incarceration", "prevention"] {
            assert!(dataset.section(name).is_some(), "missing section {}", name);
        }
        assert_eq!(dataset.resources.len(), 3);
    }

    #[test]
    fn prison_figure_keeps_its_own_attribution() {
        let dataset = CdcHivSource.build_dataset(Utc::now()).unwrap();
        let entry = dataset
            .statistics
            .iter()
            .find(|e| e.metric.contains("prisons"))
            .unwrap();

        assert_eq!(entry.resolved_source(&dataset.source), "Bureau of Justice Statistics");
    }
}
