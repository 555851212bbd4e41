//! Reference figures from CDC HIV surveillance publications.

use serde_json::{json, Value};
use crate::shared::models::StatEntry;

pub(super) fn statistics() -> Vec<StatEntry> {
    vec![
        StatEntry::new("People living with HIV in the U.S.", "~1.2 million")
            .description("Estimated number of people living with HIV at the end of 2022")
            .year("2022"),
        StatEntry::new("Unaware of their HIV status", "~13%")
            .description("About 1 in 8 people with HIV do not know they have it")
            .year("2022"),
        StatEntry::new("New HIV infections per year", "~31,800")
            .description("Estimated new HIV infections in the United States")
            .comparison("Down about 12% from 2018")
            .year("2022"),
        StatEntry::new("HIV prevalence in state and federal prisons", "1.3%")
            .comparison("Roughly three times the rate in the general U.S. population")
            .source("Bureau of Justice Statistics"),
        StatEntry::new("Share of new diagnoses among Black Americans", "~37%")
            .comparison("Black Americans make up about 12% of the U.S. population")
            .year("2022"),
        StatEntry::new("Viral suppression among diagnosed people", "~65%")
            .description("Share of people with diagnosed HIV whose virus is suppressed")
            .year("2022"),
        StatEntry::new("Annual new infections trend", "Declining")
            .description("Gradual decline driven by testing, treatment and PrEP uptake"),
    ]
}

pub(super) fn sections() -> Vec<(&'static str, Value)> {
    vec![
        (
            "demographics",
            json!({
                "mostAffectedGroups": [
                    "Gay and bisexual men",
                    "Black/African American communities",
                    "Hispanic/Latino communities"
                ],
                "regionWithMostNewDiagnoses": "South (about half of new diagnoses)",
                "ageGroupWithMostNewDiagnoses": "25-34"
            }),
        ),
        (
            "incarceration",
            json!({
                "testingAtIntake": "Opt-out HIV testing recommended at entry to correctional facilities",
                "continuityOfCare": "Linkage to care within 30 days of release reduces treatment interruption",
                "riskFactors": [
                    "Interrupted medication access after release",
                    "Unstable housing",
                    "Limited health insurance coverage"
                ]
            }),
        ),
        (
            "prevention",
            json!({
                "prep": "Pre-exposure prophylaxis reduces sexual transmission risk by about 99% when taken as prescribed",
                "undetectableUntransmittable": "People with a sustained undetectable viral load do not transmit HIV sexually",
                "testing": "CDC recommends everyone aged 13-64 be tested at least once"
            }),
        ),
    ]
}

pub(super) fn resources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("CDC HIV Basics", "https://www.cdc.gov/hiv/"),
        ("HIV.gov", "https://www.hiv.gov/"),
        ("CDC HIV Data", "https://www.cdc.gov/hiv-data/"),
    ]
}
