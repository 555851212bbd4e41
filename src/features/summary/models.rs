use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyStatistic {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactArea {
    Legal,
    Education,
    Health,
    Housing,
    Employment,
    Mentorship,
}

impl ImpactArea {
    pub const ALL: [ImpactArea; 6] = [
        ImpactArea::Legal,
        ImpactArea::Education,
        ImpactArea::Health,
        ImpactArea::Housing,
        ImpactArea::Employment,
        ImpactArea::Mentorship,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactNeed {
    pub need: String,
    pub stats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissouriFigures {
    pub total_incarcerated: String,
    pub annual_releases: String,
    pub under_supervision: String,
    pub recidivism_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub purpose: String,
    pub key_statistics: Vec<KeyStatistic>,
    pub impact_areas: BTreeMap<ImpactArea, ImpactNeed>,
    pub missouri_specific: MissouriFigures,
    pub data_sources: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayStat {
    pub key: String,
    pub value: String,
    pub label: String,
}

/// Website feed keys and the key-statistic labels they publish, in feed order.
pub const DISPLAY_SELECTION: [(&str, &str); 6] = [
    ("peopleLivingWithHiv", "People living with HIV in the U.S."),
    ("prisonHivPrevalence", "HIV prevalence in prisons"),
    ("missouriIncarcerated", "Missourians incarcerated"),
    ("missouriRecidivism", "Missouri three-year recidivism"),
    ("nationalRearrestFiveYear", "Rearrested within 5 years nationally"),
    ("annualReleases", "Released from prison each year"),
];

/// Flat list consumed by the website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayStats(pub Vec<DisplayStat>);

impl DisplayStats {
    /// Keys are attached by label, so a summary read back from disk yields
    /// the same feed as a freshly built one.
    pub fn from_summary(summary: &Summary) -> Self {
        let stats = DISPLAY_SELECTION
            .iter()
            .filter_map(|(key, label)| {
                summary
                    .key_statistics
                    .iter()
                    .find(|stat| stat.label == *label)
                    .map(|stat| DisplayStat {
                        key: key.to_string(),
                        value: stat.value.clone(),
                        label: stat.label.clone(),
                    })
            })
            .collect();
        DisplayStats(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn impact_area_keys_serialize_lowercase_in_declared_order() {
        let areas: BTreeMap<ImpactArea, ImpactNeed> = ImpactArea::ALL
            .iter()
            .rev()
            .map(|area| (*area, ImpactNeed { need: "n".into(), stats: vec![] }))
            .collect();

        let value = serde_json::to_value(&areas).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["legal", "education", "health", "housing", "employment", "mentorship"]
        );
    }

    #[test]
    fn display_stats_serialize_as_plain_array() {
        let stats = DisplayStats(vec![DisplayStat {
            key: "k".into(),
            value: "1".into(),
            label: "One".into(),
        }]);

        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!([{ "key": "k", "value": "1", "label": "One" }])
        );
    }

    #[test]
    fn key_statistic_omits_missing_description() {
        let stat = KeyStatistic {
            label: "L".into(),
            value: "V".into(),
            description: None,
            source: "S".into(),
        };
        assert_eq!(
            serde_json::to_value(&stat).unwrap(),
            json!({ "label": "L", "value": "V", "source": "S" })
        );
    }
}
