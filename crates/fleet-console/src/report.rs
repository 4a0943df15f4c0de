//! Command execution and output rendering.

use std::fmt::Write as _;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use fleet_cases::{filter_cases, CaseDeriver, CaseQuery, DashboardSummary};
use fleet_model::{AssetFixture, Case};

use crate::cli::{Command, OutputFormat};
use crate::config::ConsoleConfig;

/// Load the fixture, derive cases and render the requested command's output.
pub fn run(
    command: &Command,
    config: &ConsoleConfig,
    format: OutputFormat,
    today: Option<NaiveDate>,
) -> anyhow::Result<String> {
    let fixture = AssetFixture::load(&config.fixture_path)
        .with_context(|| format!("failed to load fixture {}", config.fixture_path.display()))?;
    tracing::info!(
        path = %config.fixture_path.display(),
        assets = fixture.assets.len(),
        "Loaded asset fixture"
    );

    let mut deriver = CaseDeriver::new(config.derive_config(today));
    let cases = deriver.derive(&fixture.assets);

    match command {
        Command::Cases { search, tab } => {
            let query = CaseQuery {
                search: search.clone(),
                tab: (*tab).into(),
            };
            let selected = filter_cases(&cases, &query);
            tracing::debug!(matched = selected.len(), total = cases.len(), "Filtered cases");
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&selected)?),
                OutputFormat::Table => Ok(render_case_table(&selected)),
            }
        }
        Command::Summary => {
            let limits = config.summary_limits();
            let summary = DashboardSummary::build(&fixture.assets, &cases, &limits);
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
                OutputFormat::Table => Ok(render_summary(&summary)),
            }
        }
        Command::Asset { id } => {
            let Some(asset) = fixture.find_asset(id) else {
                bail!("asset '{id}' not found in {}", config.fixture_path.display());
            };
            let asset_cases: Vec<&Case> =
                cases.iter().filter(|c| c.asset_id == asset.id).collect();
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "asset": asset,
                    "cases": asset_cases,
                }))?),
                OutputFormat::Table => {
                    let mut out = String::new();
                    let _ = writeln!(
                        out,
                        "{} ({}) at {}",
                        asset.name, asset.id, asset.asset_overview.base
                    );
                    if let Some(model) = &asset.model_name {
                        let _ = writeln!(out, "model: {model}");
                    }
                    if let Some(health) = asset.overall_health.as_ref().and_then(|h| h.percentage) {
                        let _ = writeln!(out, "health: {health}%");
                    }
                    if let Some(fault) = asset
                        .predictive_insights
                        .as_ref()
                        .and_then(|p| p.predicted_next_fault_type.as_deref())
                    {
                        let _ = writeln!(out, "predicted next fault: {fault}");
                    }
                    let _ = writeln!(
                        out,
                        "status: {}  maintenance records: {}  recent alerts: {}",
                        if asset.status.is_empty() { "-" } else { asset.status.as_str() },
                        asset.maintenance_history.len(),
                        asset.recent_alerts.len()
                    );
                    out.push('\n');
                    out.push_str(&render_case_table(&asset_cases));
                    Ok(out)
                }
            }
        }
    }
}

/// Fixed-width case table, one row per case.
pub fn render_case_table(cases: &[&Case]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:<10} {:<8} {:<12} {:<22} {:<12} {}",
        "CASE", "ASSET", "SEVERITY", "STATUS", "COMPONENT", "REPORTED", "FAILURE"
    );
    for case in cases {
        let _ = writeln!(
            out,
            "{:<14} {:<10} {:<8} {:<12} {:<22} {:<12} {}",
            case.case_id,
            case.asset_id,
            case.severity.as_str(),
            case.status.to_string(),
            case.component,
            case.time_ago,
            case.failure_mode
        );
    }
    if cases.is_empty() {
        out.push_str("(no cases)\n");
    }
    out
}

fn render_summary(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let r = &summary.readiness;
    let _ = writeln!(out, "Assets: {}", summary.asset_count);
    let _ = writeln!(
        out,
        "Readiness: operational {}  maintenance {}  critical {}  inactive {}",
        r.operational, r.maintenance, r.critical, r.inactive
    );
    let c = &summary.counts;
    let _ = writeln!(
        out,
        "Cases: {} total  {} critical  {} warning",
        c.total, c.critical, c.warning
    );

    out.push_str("\nTop risk\n");
    let top: Vec<&Case> = summary.top_risk.iter().collect();
    out.push_str(&render_case_table(&top));

    out.push_str("\nRecent alerts\n");
    if summary.recent_alerts.is_empty() {
        out.push_str("(none)\n");
    }
    for alert in &summary.recent_alerts {
        let _ = writeln!(
            out,
            "[{}] {} @ {}: {}",
            alert.level, alert.asset_id, alert.base, alert.alert
        );
    }
    out
}
