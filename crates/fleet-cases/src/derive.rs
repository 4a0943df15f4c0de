//! Case derivation engine.
//!
//! Per asset, in input order:
//! 1. Maintenance pass: one case per maintenance record
//! 2. Alert pass: one case per recent alert
//!
//! All cases are then sorted by `numeric_risk_score`, highest first.

use chrono::NaiveDate;
use fleet_model::{Asset, Case, CaseStatus};
use rand::rngs::StdRng;
use rand::Rng;

use crate::{age, component, score, severity};

/// Fixed relative-age label for alert-derived cases.
pub const ALERT_TIME_AGO: &str = "2 min ago";

/// Configuration for a `CaseDeriver`.
#[derive(Debug, Clone, Default)]
pub struct DeriveConfig {
    /// Seed for the numeric score RNG (None = entropy, non-reproducible order).
    pub score_seed: Option<u64>,
    /// Reference date for relative ages and alert report dates (None = current UTC date).
    pub today: Option<NaiveDate>,
}

/// Derives cases with a configured random source and reference date.
pub struct CaseDeriver {
    config: DeriveConfig,
    rng: StdRng,
}

impl CaseDeriver {
    pub fn new(config: DeriveConfig) -> Self {
        let rng = score::score_rng(config.score_seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &DeriveConfig {
        &self.config
    }

    /// Derive the ranked case list for `assets`.
    ///
    /// With a fixed seed, repeated calls on one deriver continue the same
    /// random stream; build a new deriver to replay an ordering.
    pub fn derive(&mut self, assets: &[Asset]) -> Vec<Case> {
        let today = self.config.today.unwrap_or_else(today_utc);
        derive_cases_with(assets, today, &mut self.rng)
    }
}

/// Derive the ranked case list using today's UTC date and an entropy-seeded RNG.
pub fn derive_cases(assets: &[Asset]) -> Vec<Case> {
    CaseDeriver::new(DeriveConfig::default()).derive(assets)
}

pub fn today_utc() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Core derivation with an explicit reference date and random source.
pub fn derive_cases_with<R: Rng + ?Sized>(
    assets: &[Asset],
    today: NaiveDate,
    rng: &mut R,
) -> Vec<Case> {
    let mut cases: Vec<Case> = Vec::with_capacity(assets.iter().map(Asset::record_count).sum());

    for asset in assets {
        let first = cases.len();

        for record in &asset.maintenance_history {
            let severity = severity::from_maintenance_risk(&record.risk_score);
            if record.date_reported > today {
                tracing::warn!(
                    asset_id = %asset.id,
                    date_reported = %record.date_reported,
                    "Maintenance record is dated in the future"
                );
            }
            let case_id = match record.existing_case_id() {
                Some(id) => id.to_string(),
                None => synthesize_case_id(&asset.id, cases.len()),
            };
            let status = if record.is_closed() {
                CaseStatus::Closed
            } else {
                CaseStatus::UnderReview
            };

            cases.push(Case {
                case_id,
                asset_number: asset.id.clone(),
                asset_id: asset.id.clone(),
                asset_type: asset.name.clone(),
                asset_name: asset.name.clone(),
                component: record.component.clone(),
                failure_mode: record.failure_mode.clone(),
                date_reported: record.date_reported,
                risk_score: record.risk_score.clone(),
                severity,
                status,
                base: asset.asset_overview.base.clone(),
                time_ago: age::time_ago(record.date_reported, today),
                numeric_risk_score: score::sample_score(severity, rng),
            });
        }

        for alert in &asset.recent_alerts {
            let severity = severity::from_alert_level(&alert.level);
            let case_id = synthesize_case_id(&asset.id, cases.len());

            cases.push(Case {
                case_id,
                asset_number: asset.id.clone(),
                asset_id: asset.id.clone(),
                asset_type: asset.name.clone(),
                asset_name: asset.name.clone(),
                component: component::infer_component(&alert.message).to_string(),
                failure_mode: alert.message.clone(),
                date_reported: today,
                risk_score: severity::alert_risk_label(severity).to_string(),
                severity,
                status: CaseStatus::UnderReview,
                base: asset.asset_overview.base.clone(),
                time_ago: ALERT_TIME_AGO.to_string(),
                numeric_risk_score: score::sample_score(severity, rng),
            });
        }

        tracing::debug!(
            asset_id = %asset.id,
            maintenance = asset.maintenance_history.len(),
            alerts = asset.recent_alerts.len(),
            cases = cases.len() - first,
            "Derived cases for asset"
        );
    }

    cases.sort_by(|a, b| b.numeric_risk_score.total_cmp(&a.numeric_risk_score));

    tracing::info!(
        assets = assets.len(),
        cases = cases.len(),
        %today,
        "Case derivation complete"
    );

    cases
}

/// Synthesize a case id from the asset id and the number of cases emitted so far.
///
/// First three characters of the asset id, upper-cased, then `001-` and the
/// 1-based output position padded to four digits: `("DRN-42", 4)` gives
/// `"DRN001-0005"`.
pub fn synthesize_case_id(asset_id: &str, emitted: usize) -> String {
    let prefix = asset_id.chars().take(3).collect::<String>().to_uppercase();
    format!("{prefix}001-{:04}", emitted + 1)
}
