//! Mapping of source risk/level text to case severity.
//!
//! "High" and "Critical" maintenance risk both map to `Critical`.

use fleet_model::Severity;

/// Severity for a maintenance record's textual risk score.
pub fn from_maintenance_risk(risk_score: &str) -> Severity {
    match risk_score {
        "High" | "Critical" => Severity::Critical,
        "Medium" => Severity::High,
        _ => Severity::Med,
    }
}

/// Severity for an alert's textual level.
pub fn from_alert_level(level: &str) -> Severity {
    match level {
        "High Priority" | "High" => Severity::Critical,
        "Medium Priority" | "Medium" => Severity::High,
        _ => Severity::Med,
    }
}

/// Display risk label for an alert-derived case.
pub fn alert_risk_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "High",
        Severity::Med | Severity::Low => "Medium",
    }
}
