use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;
use crate::shared::traits::Validatable;

/// JSON keys owned by `Dataset` itself; sections are flattened alongside them.
const RESERVED_KEYS: [&str; 5] = ["source", "lastUpdated", "category", "statistics", "resources"];

/// One reported figure. `value` stays a display string since sources mix
/// percentages, ratios and labels like "Declining".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub metric: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl StatEntry {
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
            description: None,
            comparison: None,
            year: None,
            source: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn comparison(mut self, comparison: impl Into<String>) -> Self {
        self.comparison = Some(comparison.into());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The entry's own attribution, falling back to the owning dataset's.
    pub fn resolved_source<'a>(&'a self, dataset_source: &'a str) -> &'a str {
        match self.source.as_deref() {
            Some(source) if !source.trim().is_empty() => source,
            _ => dataset_source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: Url,
}

/// Statistics bundle produced by one collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub source: String,
    pub last_updated: DateTime<Utc>,
    pub category: String,
    pub statistics: Vec<StatEntry>,
    #[serde(flatten)]
    pub sections: Map<String, Value>,
    pub resources: Vec<Resource>,
}

impl Dataset {
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }
}

impl Validatable for Dataset {
    fn validate(&self) -> Result<(), String> {
        if self.source.trim().is_empty() {
            return Err("Dataset source cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Dataset category cannot be empty".to_string());
        }
        if self.statistics.is_empty() {
            return Err(format!("{} has no statistics", self.source));
        }
        for (index, entry) in self.statistics.iter().enumerate() {
            if entry.metric.trim().is_empty() {
                return Err(format!("Statistic #{} in {} has an empty metric", index, self.source));
            }
            if entry.value.trim().is_empty() {
                return Err(format!("Statistic '{}' has an empty value", entry.metric));
            }
            if entry.resolved_source(&self.source).trim().is_empty() {
                return Err(format!("Statistic '{}' has no source", entry.metric));
            }
        }
        for (name, section) in &self.sections {
            if RESERVED_KEYS.contains(&name.as_str()) {
                return Err(format!("Section name '{}' is reserved", name));
            }
            if !section.is_object() {
                return Err(format!("Section '{}' must be an object", name));
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct DatasetBuilder {
    source: Option<String>,
    last_updated: Option<DateTime<Utc>>,
    category: Option<String>,
    statistics: Vec<StatEntry>,
    sections: Map<String, Value>,
    resources: Vec<(String, String)>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = Some(last_updated);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn statistic(mut self, entry: StatEntry) -> Self {
        self.statistics.push(entry);
        self
    }

    pub fn statistics(mut self, entries: impl IntoIterator<Item = StatEntry>) -> Self {
        self.statistics.extend(entries);
        self
    }

    pub fn section(mut self, name: impl Into<String>, section: Value) -> Self {
        self.sections.insert(name.into(), section);
        self
    }

    pub fn resource(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.resources.push((name.into(), url.into()));
        self
    }

    pub fn build(self) -> Result<Dataset, String> {
        let resources = self
            .resources
            .into_iter()
            .map(|(name, url)| {
                Url::parse(&url)
                    .map(|url| Resource { name: name.clone(), url })
                    .map_err(|e| format!("Invalid URL for resource '{}': {}", name, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let dataset = Dataset {
            source: self.source.ok_or("source is required")?,
            last_updated: self.last_updated.ok_or("last_updated is required")?,
            category: self.category.ok_or("category is required")?,
            statistics: self.statistics,
            sections: self.sections,
            resources,
        };

        dataset.validate()?;
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
            .source("Test Source")
            .last_updated(Utc::now())
            .category("Testing")
            .statistic(StatEntry::new("Rate", "12%").description("A rate"))
    }

    #[test]
    fn entry_inherits_dataset_source() {
        let own = StatEntry::new("a", "1").source("Own");
        let inherited = StatEntry::new("b", "2");
        let blank = StatEntry::new("c", "3").source("  ");

        assert_eq!(own.resolved_source("Dataset"), "Own");
        assert_eq!(inherited.resolved_source("Dataset"), "Dataset");
        assert_eq!(blank.resolved_source("Dataset"), "Dataset");
    }

    #[test]
    fn build_requires_core_fields() {
        let err = DatasetBuilder::new().category("x").build().unwrap_err();
        assert!(err.contains("source"));
    }

    #[test]
    fn build_rejects_empty_value() {
        let err = builder()
            .statistic(StatEntry::new("Trend", " "))
            .build()
            .unwrap_err();
        assert!(err.contains("Trend"));
    }

    #[test]
    fn build_rejects_bad_resource_url() {
        let err = builder().resource("Broken", "not a url").build().unwrap_err();
        assert!(err.contains("Broken"));
    }

    #[test]
    fn build_rejects_non_object_section() {
        let err = builder().section("notes", json!(["a"])).build().unwrap_err();
        assert!(err.contains("notes"));
    }

    #[test]
    fn build_rejects_reserved_section_names() {
        for name in RESERVED_KEYS {
            let err = builder().section(name, json!({ "x": 1 })).build().unwrap_err();
            assert!(err.contains("reserved"), "{} accepted: {}", name, err);
        }
    }

    #[test]
    fn serializes_camel_case_with_flattened_sections() {
        let dataset = builder()
            .section("demographics", json!({ "youth": "21%" }))
            .resource("Home", "https://example.org/")
            .build()
            .unwrap();

        let value = serde_json::to_value(&dataset).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["source", "lastUpdated", "category", "statistics", "demographics", "resources"]
        );
        assert_eq!(value["statistics"][0]["description"], "A rate");
        assert!(value["statistics"][0].get("comparison").is_none());
        assert_eq!(value["resources"][0]["url"], "https://example.org/");
    }

    #[test]
    fn deserializes_sections_back() {
        let dataset = builder()
            .section("demographics", json!({ "youth": "21%" }))
            .build()
            .unwrap();
        let text = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&text).unwrap();
        assert_eq!(back.section("demographics"), Some(&json!({ "youth": "21%" })));
    }
}
