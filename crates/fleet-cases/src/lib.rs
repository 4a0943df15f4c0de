//! Fleet cases - derives a ranked list of operational cases from asset records.
//!
//! Each maintenance record and each recent alert of an asset becomes one
//! `Case`. Cases are ranked by a numeric score sampled from a band chosen by
//! severity, so cases of a higher severity always sort ahead of lower ones
//! while the order inside a band depends on the random source.
//!
//! Derivation is a pure transformation: no I/O, no shared state. The random
//! source and the reference date can both be injected for reproducible output.

pub mod age;
pub mod component;
pub mod derive;
pub mod score;
pub mod severity;
pub mod views;

pub use derive::{
    derive_cases, derive_cases_with, synthesize_case_id, today_utc, CaseDeriver, DeriveConfig,
    ALERT_TIME_AGO,
};
pub use views::{
    filter_cases, recent_alerts, top_risk, AlertDigest, CaseCounts, CaseQuery, CaseTab,
    DashboardSummary, FleetReadiness, SummaryLimits,
};
