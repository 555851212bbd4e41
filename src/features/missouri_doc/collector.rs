use serde_json::Value;
use crate::features::missouri_doc::reference;
use crate::shared::collector::StatisticsSource;
use crate::shared::models::StatEntry;
use crate::shared::traits::MetadataProvider;

pub const SOURCE_NAME: &str = "Missouri Department of Corrections";
const CATEGORY: &str = "Criminal Justice - Missouri";
const OUTPUT_FILE: &str = "missouri-doc.json";
const REFERENCE_URL: &str = "https://doc.mo.gov/";

#[derive(Debug, Default, Clone, Copy)]
pub struct MissouriDocSource;

impl MetadataProvider for MissouriDocSource {
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

impl StatisticsSource for MissouriDocSource {
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
    fn headline_population_figure() {
        let dataset = MissouriDocSource.build_dataset(Utc::now()).unwrap();
        let total = dataset
            .statistics
            .iter()
            .find(|e| e.metric == "Total incarcerated population")
            .unwrap();

        assert_eq!(total.value, "~23,000");
        assert_eq!(total.resolved_source(&dataset.source), SOURCE_NAME);
    }

    #[test]
    fn sections_in_authored_order() {
        let dataset = MissouriDocSource.build_dataset(Utc::now()).unwrap();
        let names: Vec<&str> = dataset.sections.keys().map(String::as_str).collect();
        assert_eq!(names, ["reentryPrograms", "healthServices"]);
    }
}
