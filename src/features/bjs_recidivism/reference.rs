//! National figures from BJS recidivism studies of state prisoners.

use serde_json::{json, Value};
use crate::shared::models::StatEntry;

pub(super) fn statistics() -> Vec<StatEntry> {
    vec![
        StatEntry::new("Rearrested within 3 years", "62%")
            .description("State prisoners released in 2012 across 34 states")
            .year("2012 release cohort"),
        StatEntry::new("Rearrested within 5 years", "71%")
            .description("State prisoners released in 2012 across 34 states")
            .comparison("Down from 77% for the 2005 release cohort")
            .year("2012 release cohort"),
        StatEntry::new("Rearrested within 10 years", "82%")
            .description("State prisoners released in 2008 across 24 states")
            .year("2008 release cohort"),
        StatEntry::new("Rearrested in the first year after release", "~44%")
            .description("Most rearrests happen soon after release")
            .year("2005 release cohort"),
        StatEntry::new("People released from prison each year", "~600,000")
            .description("Releases from state and federal prisons nationwide"),
        StatEntry::new("Five-year rearrest trend", "Declining")
            .comparison("Lower for each successive release cohort studied"),
    ]
}

pub(super) fn sections() -> Vec<(&'static str, Value)> {
    vec![
        (
            "byOffenseType",
            json!({
                "property": "Highest rearrest rates among release offenses",
                "drug": "Roughly three in four rearrested within five years",
                "violent": "Roughly two in three rearrested within five years"
            }),
        ),
        (
            "reentryFactors",
            json!({
                "protective": [
                    "Stable housing",
                    "Employment",
                    "Continuity of health care",
                    "Mentorship and family support"
                ],
                "highestRiskPeriod": "First year after release"
            }),
        ),
    ]
}

pub(super) fn resources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("BJS Recidivism and Reentry", "https://bjs.ojp.gov/topics/recidivism-and-reentry"),
        ("National Reentry Resource Center", "https://nationalreentryresourcecenter.org/"),
    ]
}
