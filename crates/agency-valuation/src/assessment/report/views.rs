use super::super::recommendations::Recommendation;
use super::super::scoring::{ExposureBand, ScoreBundle};
use super::super::valuation::ValuationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-service exposure row for the report: readiness, vulnerability band,
/// and the slice of revenue treated as at risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRiskView {
    pub service_id: String,
    pub service_name: String,
    pub score: u8,
    pub vulnerability: u8,
    pub exposure: ExposureBand,
    pub exposure_label: String,
    pub disruption_timeline: String,
    pub revenue_share_percent: u8,
    pub revenue_at_risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialImpact {
    pub ebit_impact: f64,
    pub valuation_impact: f64,
}

/// The single record the engine hands to reporting collaborators: plain
/// data, JSON round-trippable, owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsRecord {
    pub generated_at: DateTime<Utc>,
    pub scores: ScoreBundle,
    pub valuation: ValuationResult,
    pub service_risk: Vec<ServiceRiskView>,
    pub recommendations: Vec<Recommendation>,
    pub financial_impact: FinancialImpact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
