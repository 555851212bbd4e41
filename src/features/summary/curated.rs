//! Hand-selected highlights spanning the three sources.

use std::collections::{BTreeMap, BTreeSet};
use crate::features::{bjs_recidivism, cdc_hiv, missouri_doc};
use crate::features::summary::models::{ImpactArea, ImpactNeed, KeyStatistic, MissouriFigures};

pub(super) const TITLE: &str = "Reentry and Public Health: Key Statistics";
pub(super) const PURPOSE: &str = "Figures supporting our work with people affected by HIV/AIDS and incarceration in Missouri";

fn key_stat(label: &str, value: &str, description: Option<&str>, source: &str) -> KeyStatistic {
    KeyStatistic {
        label: label.to_string(),
        value: value.to_string(),
        description: description.map(str::to_string),
        source: source.to_string(),
    }
}

pub(super) fn key_statistics() -> Vec<KeyStatistic> {
    vec![
        key_stat(
            "People living with HIV in the U.S.",
            "~1.2 million",
            Some("About 1 in 8 do not know their status"),
            cdc_hiv::SOURCE_NAME,
        ),
        key_stat(
            "HIV prevalence in prisons",
            "1.3%",
            Some("Roughly three times the general population rate"),
            "Bureau of Justice Statistics",
        ),
        key_stat(
            "New HIV infections per year",
            "~31,800",
            None,
            cdc_hiv::SOURCE_NAME,
        ),
        key_stat(
            "Missourians incarcerated",
            "~23,000",
            Some("People held in state correctional facilities"),
            missouri_doc::SOURCE_NAME,
        ),
        key_stat(
            "Missouri three-year recidivism",
            "~43%",
            Some("Returned to prison within three years of release"),
            missouri_doc::SOURCE_NAME,
        ),
        key_stat(
            "Rearrested within 5 years nationally",
            "71%",
            Some("State prisoners released in 2012"),
            bjs_recidivism::SOURCE_NAME,
        ),
        key_stat(
            "Released from prison each year",
            "~600,000",
            Some("Nationwide releases from state and federal prisons"),
            bjs_recidivism::SOURCE_NAME,
        ),
        key_stat(
            "Rearrested within 10 years nationally",
            "82%",
            Some("State prisoners released in 2008"),
            bjs_recidivism::SOURCE_NAME,
        ),
    ]
}

fn need(need: &str, stats: &[&str]) -> ImpactNeed {
    ImpactNeed {
        need: need.to_string(),
        stats: stats.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn impact_areas() -> BTreeMap<ImpactArea, ImpactNeed> {
    ImpactArea::ALL
        .into_iter()
        .map(|area| {
            let entry = match area {
                ImpactArea::Legal => need(
                    "Navigating parole conditions, record expungement and legal aid",
                    &["~55,000 Missourians under probation or parole supervision"],
                ),
                ImpactArea::Education => need(
                    "GED completion and vocational training before and after release",
                    &["Education in prison lowers the odds of returning"],
                ),
                ImpactArea::Health => need(
                    "Continuity of HIV care and medication access at release",
                    &[
                        "HIV prevalence in prisons is 1.3%",
                        "About 1 in 8 people with HIV are unaware of their status",
                    ],
                ),
                ImpactArea::Housing => need(
                    "Stable housing in the first months after release",
                    &["~44% of people are rearrested within the first year"],
                ),
                ImpactArea::Employment => need(
                    "Job readiness and employer partnerships",
                    &["~17,000 people return to Missouri communities each year"],
                ),
                ImpactArea::Mentorship => need(
                    "Peer mentors with lived experience of incarceration or HIV",
                    &["71% of released state prisoners are rearrested within 5 years"],
                ),
            };
            (area, entry)
        })
        .collect()
}

pub(super) fn missouri_figures() -> MissouriFigures {
    MissouriFigures {
        total_incarcerated: "~23,000".to_string(),
        annual_releases: "~17,000".to_string(),
        under_supervision: "~55,000".to_string(),
        recidivism_rate: "~43%".to_string(),
    }
}

/// Every source the summary cites, plus the three collected sources.
pub(super) fn data_sources(key_statistics: &[KeyStatistic]) -> BTreeSet<String> {
    [
        cdc_hiv::SOURCE_NAME,
        missouri_doc::SOURCE_NAME,
        bjs_recidivism::SOURCE_NAME,
    ]
    .into_iter()
    .map(str::to_string)
    .chain(key_statistics.iter().map(|stat| stat.source.clone()))
    .collect()
}
