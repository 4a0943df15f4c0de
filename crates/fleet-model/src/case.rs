use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Four-level priority classification of a case.
///
/// Ordered from least to most severe so that `Severity::Critical` is the max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MED")]
    Med,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "CRITICAL")]
    Critical,
}

impl Severity {
    /// Numeric rank, higher is more severe.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Low => 0,
            Severity::Med => 1,
            Severity::High => 2,
            Severity::Critical => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Med => "MED",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// HIGH and MED cases are grouped together as warnings in case views.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::High | Severity::Med)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    #[serde(rename = "UNDER REVIEW")]
    UnderReview,
    #[serde(rename = "IN PROGRESS")]
    InProgress,
    #[serde(rename = "CLOSED")]
    Closed,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::UnderReview => "UNDER REVIEW",
            Self::InProgress => "IN PROGRESS",
            Self::Closed => "CLOSED",
        };
        write!(f, "{s}")
    }
}

/// A derived operational case: one maintenance record or one alert of one asset.
///
/// The asset identifier and display name are duplicated under two names each
/// (`assetNumber`/`assetId`, `assetType`/`assetName`) for consumers that read
/// either spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub case_id: String,
    pub asset_number: String,
    pub asset_id: String,
    pub asset_type: String,
    pub asset_name: String,
    pub component: String,
    pub failure_mode: String,
    pub date_reported: NaiveDate,
    /// Display label ("High", "Medium", or the maintenance record's own text).
    pub risk_score: String,
    pub severity: Severity,
    pub status: CaseStatus,
    pub base: String,
    pub time_ago: String,
    /// Sort key only; sampled from the severity's score band.
    pub numeric_risk_score: f64,
}
