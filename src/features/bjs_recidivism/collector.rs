use serde_json::Value;
use crate::features::bjs_recidivism::reference;
use crate::shared::collector::StatisticsSource;
use crate::shared::models::StatEntry;
use crate::shared::traits::MetadataProvider;

pub const SOURCE_NAME: &str = "Bureau of Justice Statistics (BJS)";
const CATEGORY: &str = "National Recidivism";
const OUTPUT_FILE: &str = "bjs-recidivism.json";
const REFERENCE_URL: &str = "https://bjs.ojp.gov/topics/recidivism-and-reentry";

#[derive(Debug, Default, Clone, Copy)]
pub struct BjsRecidivismSource;

impl MetadataProvider for BjsRecidivismSource {
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

impl StatisticsSource for BjsRecidivismSource {
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
