use chrono::NaiveDate;
use fleet_cases::*;
use fleet_model::*;

fn case(id: &str, asset_id: &str, severity: Severity, status: CaseStatus, score: f64) -> Case {
    Case {
        case_id: id.into(),
        asset_number: asset_id.into(),
        asset_id: asset_id.into(),
        asset_type: "Sentinel".into(),
        asset_name: "Sentinel".into(),
        component: "Rotor".into(),
        failure_mode: format!("failure on {id}"),
        date_reported: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        risk_score: "High".into(),
        severity,
        status,
        base: "Base Alpha".into(),
        time_ago: "Today".into(),
        numeric_risk_score: score,
    }
}

fn ranked_cases() -> Vec<Case> {
    vec![
        case("DRN001-0001", "DRN-1", Severity::Critical, CaseStatus::Closed,      97.0),
        case("BOT001-0004", "BOT-2", Severity::Critical, CaseStatus::UnderReview, 93.0),
        case("DRN001-0002", "DRN-1", Severity::High,     CaseStatus::UnderReview, 80.0),
        case("AC001-0005",  "AC-3",  Severity::High,     CaseStatus::UnderReview, 72.0),
        case("DRN001-0003", "DRN-1", Severity::Med,      CaseStatus::UnderReview, 55.0),
        case("BOT001-0006", "BOT-2", Severity::Low,      CaseStatus::UnderReview, 25.0),
    ]
}

fn asset_with_status(id: &str, status: &str) -> Asset {
    Asset {
        status: status.into(),
        ..Asset::new(id, id, "Base")
    }
}

#[test]
fn test_tab_filters() {
    let cases = ranked_cases();
    let all = filter_cases(&cases, &CaseQuery::default());
    assert_eq!(all.len(), 6);

    let critical = filter_cases(&cases, &CaseQuery { search: None, tab: CaseTab::Critical });
    assert_eq!(critical.len(), 2);
    assert!(critical.iter().all(|c| c.severity == Severity::Critical));

    let warning = filter_cases(&cases, &CaseQuery { search: None, tab: CaseTab::Warning });
    let ids: Vec<&str> = warning.iter().map(|c| c.case_id.as_str()).collect();
    assert_eq!(ids, vec!["DRN001-0002", "AC001-0005", "DRN001-0003"]);
}

#[test]
fn test_search_matches_case_or_asset_id() {
    let cases = ranked_cases();
    let q = CaseQuery { search: Some("bot-2".into()), tab: CaseTab::All };
    let by_asset = filter_cases(&cases, &q);
    assert_eq!(by_asset.len(), 2);

    let q = CaseQuery { search: Some("0005".into()), tab: CaseTab::All };
    let by_case = filter_cases(&cases, &q);
    assert_eq!(by_case.len(), 1);
    assert_eq!(by_case[0].asset_id, "AC-3");

    let empty = filter_cases(&cases, &CaseQuery { search: Some(String::new()), tab: CaseTab::All });
    assert_eq!(empty.len(), 6);
}

#[test]
fn test_search_and_tab_combine() {
    let cases = ranked_cases();
    let q = CaseQuery { search: Some("drn".into()), tab: CaseTab::Warning };
    let ids: Vec<&str> = filter_cases(&cases, &q).iter().map(|c| c.case_id.as_str()).collect();
    assert_eq!(ids, vec!["DRN001-0002", "DRN001-0003"]);
}

#[test]
fn test_case_counts() {
    let counts = CaseCounts::from_cases(&ranked_cases());
    assert_eq!(counts, CaseCounts { total: 6, critical: 2, warning: 3 });
    assert_eq!(CaseCounts::from_cases(&[]), CaseCounts::default());
}

#[test]
fn test_fleet_readiness() {
    let assets = vec![
        asset_with_status("A", "READY"),
        asset_with_status("B", "READY"),
        asset_with_status("C", "MAINTENANCE"),
        asset_with_status("D", "CRITICAL"),
        asset_with_status("E", "INACTIVE"),
        asset_with_status("F", "UNKNOWN"),
    ];
    let r = FleetReadiness::from_assets(&assets);
    assert_eq!(r, FleetReadiness { operational: 2, maintenance: 1, critical: 1, inactive: 1 });
}

#[test]
fn test_top_risk_clamps_to_length() {
    let cases = ranked_cases();
    assert_eq!(top_risk(&cases, 2).len(), 2);
    assert_eq!(top_risk(&cases, 2)[0].case_id, "DRN001-0001");
    assert_eq!(top_risk(&cases, 50).len(), 6);
    assert!(top_risk(&[], 8).is_empty());
}

#[test]
fn test_recent_alerts_skip_closed_and_map_levels() {
    let alerts = recent_alerts(&ranked_cases(), 4);
    assert_eq!(alerts.len(), 4);
    assert_eq!(alerts[0].asset_id, "BOT-2");
    assert_eq!(alerts[0].level, "High");
    assert_eq!(alerts[0].alert, "failure on BOT001-0004");
    assert_eq!(alerts[1].level, "Medium");
    assert_eq!(alerts[3].level, "Low");
}

#[test]
fn test_dashboard_summary() {
    let assets = vec![asset_with_status("DRN-1", "READY"), asset_with_status("BOT-2", "CRITICAL")];
    let cases = ranked_cases();
    let limits = SummaryLimits { top_risk: 3, recent_alerts: 2 };
    let summary = DashboardSummary::build(&assets, &cases, &limits);

    assert_eq!(summary.asset_count, 2);
    assert_eq!(summary.readiness.operational, 1);
    assert_eq!(summary.readiness.critical, 1);
    assert_eq!(summary.counts.total, 6);
    assert_eq!(summary.top_risk.len(), 3);
    assert_eq!(summary.recent_alerts.len(), 2);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["counts"]["critical"], 2);
    assert_eq!(json["recentAlerts"][0]["assetId"], "BOT-2");
    assert_eq!(json["topRisk"][0]["caseId"], "DRN001-0001");
}

#[test]
fn test_default_limits() {
    assert_eq!(SummaryLimits::default(), SummaryLimits { top_risk: 8, recent_alerts: 4 });
}
