use serde_json::{json, Value};
use crate::shared::models::StatEntry;

pub(super) fn statistics() -> Vec<StatEntry> {
    vec![
        StatEntry::new("Total incarcerated population", "~23,000")
            .description("People held in Missouri state correctional facilities")
            .year("2023"),
        StatEntry::new("People under probation and parole supervision", "~55,000")
            .description("Adults supervised in the community by Missouri Probation and Parole")
            .year("2023"),
        StatEntry::new("Annual releases from prison", "~17,000")
            .description("People returning to Missouri communities each year")
            .year("2023"),
        StatEntry::new("Three-year recidivism rate", "~43%")
            .description("Released individuals returned to prison within three years")
            .comparison("In line with the national three-year reincarceration range"),
        StatEntry::new("Adult correctional facilities", "19")
            .description("Prisons and community supervision centers operated by the department"),
        StatEntry::new("Incarceration rate", "Above national average")
            .comparison("Missouri ranks among the top third of states by imprisonment rate")
            .source("Prison Policy Initiative"),
    ]
}

pub(super) fn sections() -> Vec<(&'static str, Value)> {
    vec![
        (
            "reentryPrograms",
            json!({
                "missouriReentryProcess": "Statewide partnership coordinating housing, employment and treatment referrals before release",
                "educationAndVocational": "GED preparation and vocational certification offered in facilities",
                "transitionalHousing": "Limited beds; housing remains a leading barrier at release"
            }),
        ),
        (
            "healthServices",
            json!({
                "infectiousDiseaseTesting": "HIV and hepatitis C screening offered at intake",
                "continuityOfCare": "Medication supply and referrals provided at release",
                "substanceUseTreatment": "Institutional and community treatment programs"
            }),
        ),
    ]
}

pub(super) fn resources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Missouri Department of Corrections", "https://doc.mo.gov/"),
        ("Missouri Department of Health and Senior Services", "https://health.mo.gov/"),
    ]
}
