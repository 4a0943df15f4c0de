//! Dashboard and case-management views over a derived case list.
//!
//! All views expect the case list in ranked order as produced by
//! `derive_cases`; "top" means "first in the list".

use fleet_model::{Asset, Case, CaseStatus, Severity};
use fleet_model::{STATUS_CRITICAL, STATUS_INACTIVE, STATUS_MAINTENANCE, STATUS_READY};
use serde::Serialize;

/// Case-management filter tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTab {
    #[default]
    All,
    Critical,
    /// HIGH and MED severities.
    Warning,
}

impl CaseTab {
    pub fn admits(&self, severity: Severity) -> bool {
        match self {
            CaseTab::All => true,
            CaseTab::Critical => severity == Severity::Critical,
            CaseTab::Warning => severity.is_warning(),
        }
    }
}

/// Search text plus tab selection for the case list.
#[derive(Debug, Clone, Default)]
pub struct CaseQuery {
    /// Case-insensitive substring matched against case id or asset id.
    pub search: Option<String>,
    pub tab: CaseTab,
}

impl CaseQuery {
    pub fn matches(&self, case: &Case) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                case.case_id.to_lowercase().contains(&needle)
                    || case.asset_id.to_lowercase().contains(&needle)
            }
        };
        matches_search && self.tab.admits(case.severity)
    }
}

/// Cases matching `query`, in ranked order.
pub fn filter_cases<'a>(cases: &'a [Case], query: &CaseQuery) -> Vec<&'a Case> {
    cases.iter().filter(|c| query.matches(c)).collect()
}

/// Tab counters shown above the case list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CaseCounts {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
}

impl CaseCounts {
    pub fn from_cases(cases: &[Case]) -> Self {
        let mut counts = Self {
            total: cases.len(),
            ..Self::default()
        };
        for case in cases {
            if case.severity == Severity::Critical {
                counts.critical += 1;
            } else if case.severity.is_warning() {
                counts.warning += 1;
            }
        }
        counts
    }
}

/// Fleet readiness breakdown by asset status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FleetReadiness {
    pub operational: usize,
    pub maintenance: usize,
    pub critical: usize,
    pub inactive: usize,
}

impl FleetReadiness {
    /// Assets with any other status are not counted.
    pub fn from_assets(assets: &[Asset]) -> Self {
        let mut readiness = Self::default();
        for asset in assets {
            match asset.status.as_str() {
                STATUS_READY => readiness.operational += 1,
                STATUS_MAINTENANCE => readiness.maintenance += 1,
                STATUS_CRITICAL => readiness.critical += 1,
                STATUS_INACTIVE => readiness.inactive += 1,
                _ => {}
            }
        }
        readiness
    }
}

/// The highest-ranked `limit` cases.
pub fn top_risk(cases: &[Case], limit: usize) -> &[Case] {
    &cases[..limit.min(cases.len())]
}

/// Compact alert row for the dashboard's recent-alerts panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDigest {
    pub asset_id: String,
    pub base: String,
    pub alert: String,
    /// "High", "Medium" or "Low".
    pub level: String,
}

impl AlertDigest {
    pub fn from_case(case: &Case) -> Self {
        let level = match case.severity {
            Severity::Critical => "High",
            Severity::High => "Medium",
            Severity::Med | Severity::Low => "Low",
        };
        Self {
            asset_id: case.asset_id.clone(),
            base: case.base.clone(),
            alert: case.failure_mode.clone(),
            level: level.to_string(),
        }
    }
}

/// The first `limit` cases still under review, as alert rows.
pub fn recent_alerts(cases: &[Case], limit: usize) -> Vec<AlertDigest> {
    cases
        .iter()
        .filter(|c| c.status == CaseStatus::UnderReview)
        .take(limit)
        .map(AlertDigest::from_case)
        .collect()
}

/// Row limits for the dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimits {
    pub top_risk: usize,
    pub recent_alerts: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            top_risk: 8,
            recent_alerts: 4,
        }
    }
}

/// Everything the overview dashboard shows, derived from assets and their cases.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub asset_count: usize,
    pub readiness: FleetReadiness,
    pub counts: CaseCounts,
    pub top_risk: Vec<Case>,
    pub recent_alerts: Vec<AlertDigest>,
}

impl DashboardSummary {
    pub fn build(assets: &[Asset], cases: &[Case], limits: &SummaryLimits) -> Self {
        Self {
            asset_count: assets.len(),
            readiness: FleetReadiness::from_assets(assets),
            counts: CaseCounts::from_cases(cases),
            top_risk: top_risk(cases, limits.top_risk).to_vec(),
            recent_alerts: recent_alerts(cases, limits.recent_alerts),
        }
    }
}
