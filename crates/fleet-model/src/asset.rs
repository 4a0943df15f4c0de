use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fleet readiness status values reported on an asset record.
pub const STATUS_READY: &str = "READY";
pub const STATUS_MAINTENANCE: &str = "MAINTENANCE";
pub const STATUS_CRITICAL: &str = "CRITICAL";
pub const STATUS_INACTIVE: &str = "INACTIVE";

/// A monitored fleet unit (drone, boat, aircraft).
///
/// `asset_overview` is required: a record without it fails to decode
/// instead of failing later during case derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    pub asset_overview: AssetOverview,
    #[serde(default)]
    pub maintenance_history: Vec<MaintenanceRecord>,
    #[serde(default)]
    pub recent_alerts: Vec<AlertEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_health: Option<OverallHealth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictive_insights: Option<PredictiveInsights>,
    /// Remaining detail-view data (battery and fault trends, flight logs, ...),
    /// kept as raw JSON and written back out unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Asset {
    /// An asset at `base` with no history, alerts or detail data.
    pub fn new(id: impl Into<String>, name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: String::new(),
            asset_overview: AssetOverview::at_base(base),
            maintenance_history: Vec::new(),
            recent_alerts: Vec::new(),
            model_name: None,
            last_updated: None,
            overall_health: None,
            predictive_insights: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Number of source records (maintenance entries plus alerts) on this asset.
    pub fn record_count(&self) -> usize {
        self.maintenance_history.len() + self.recent_alerts.len()
    }
}

/// Operating summary nested under `assetOverview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetOverview {
    /// Operating location.
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missions_completed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_maintenance_due: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
}

impl AssetOverview {
    pub fn at_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            status: None,
            engine_hours: None,
            missions_completed: None,
            last_maintenance: None,
            next_maintenance_due: None,
            firmware_version: None,
        }
    }
}

/// Health score block nested under `overallHealth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallHealth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_remaining_flight_life: Option<String>,
}

/// Forecast block nested under `predictiveInsights`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveInsights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_remaining_flight_life: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_next_fault_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<String>,
}

/// One entry of an asset's maintenance history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_code: Option<String>,
    pub component: String,
    pub failure_mode: String,
    pub date_reported: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    /// Textual risk category: "High", "Critical", "Medium" or anything else.
    #[serde(default)]
    pub risk_score: String,
    /// "Closed" or anything else (open / in review).
    #[serde(default)]
    pub status: String,
}

impl MaintenanceRecord {
    /// The carried-over case id, treating an empty string as absent.
    pub fn existing_case_id(&self) -> Option<&str> {
        self.case_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_closed(&self) -> bool {
        self.status == "Closed"
    }
}

/// A recent alert raised against an asset. Alerts carry no date or case id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEntry {
    /// "High", "High Priority", "Medium", "Medium Priority" or anything else.
    pub level: String,
    pub message: String,
}
