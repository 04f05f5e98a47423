//! Authored site content.
//!
//! Experience cards are written here in whatever order edits happen to leave
//! them; display order is derived from each card's date label by
//! `state::experience`, so nothing in this file needs to stay sorted.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::experience::ExperienceItem;

/// Display name used in the header brand and page titles.
pub const SITE_NAME: &str = "Alex Calder";

/// One-line hero tagline on the home page.
pub const TAGLINE: &str = "Systems engineer building reliable infrastructure and fast web tooling.";

/// The experience cards, as authored.
pub fn experience_items() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem {
            role: "Backend Engineer".to_owned(),
            organization: "Globex".to_owned(),
            dates_label: "Jun 2019 – Dec 2021 · Berlin".to_owned(),
            summary: "Owned the ingestion pipeline for telemetry data, scaling it from \
                      thousands to millions of events per day."
                .to_owned(),
            tags: vec!["Rust".to_owned(), "Kafka".to_owned(), "PostgreSQL".to_owned()],
        },
        ExperienceItem {
            role: "Senior Systems Engineer".to_owned(),
            organization: "Acme Robotics".to_owned(),
            dates_label: "Jan 2022 – Present · Remote".to_owned(),
            summary: "Lead the fleet-coordination service: scheduling, state replication, \
                      and the operator console."
                .to_owned(),
            tags: vec!["Rust".to_owned(), "WASM".to_owned(), "gRPC".to_owned()],
        },
        ExperienceItem {
            role: "Performance Consultant".to_owned(),
            organization: "Hooli".to_owned(),
            dates_label: "Jun 2020 · Contract".to_owned(),
            summary: "One-month engagement profiling and fixing p99 latency regressions in \
                      a storefront API."
                .to_owned(),
            tags: vec!["Profiling".to_owned(), "Go".to_owned()],
        },
        ExperienceItem {
            role: "Software Engineer".to_owned(),
            organization: "Initech".to_owned(),
            dates_label: "Mar 2018 – May 2019 · Hybrid".to_owned(),
            summary: "Built internal reporting tools and migrated the legacy batch jobs to \
                      a streaming model."
                .to_owned(),
            tags: vec!["Python".to_owned(), "Airflow".to_owned()],
        },
        ExperienceItem {
            role: "Engineering Intern".to_owned(),
            organization: "Umbrella Labs".to_owned(),
            dates_label: "May 2017 – Sept 2017 · On-site".to_owned(),
            summary: "Prototyped a device-provisioning CLI adopted by the hardware team."
                .to_owned(),
            tags: vec!["Rust".to_owned(), "Embedded".to_owned()],
        },
    ]
}

/// Paragraphs for the about page.
pub fn about_paragraphs() -> Vec<&'static str> {
    vec![
        "I build backend systems and the tooling around them, with a bias toward \
         boring technology, strong types, and measured performance claims.",
        "Lately that means Rust on both sides of the wire: services on the backend \
         and WebAssembly where the browser is the deployment target — this site \
         included.",
        "Away from a keyboard I run trails and repair old film cameras.",
    ]
}
