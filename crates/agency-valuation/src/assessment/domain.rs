use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maturity dimensions every assessment scores against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Operational,
    Financial,
    AiReadiness,
}

impl Dimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Operational, Self::Financial, Self::AiReadiness]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational Maturity",
            Self::Financial => "Financial Health",
            Self::AiReadiness => "AI Readiness",
        }
    }
}

/// Agency archetypes; each may override the default dimension weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgencyType {
    FullService,
    Creative,
    MediaBuying,
    PerformanceMarketing,
    PublicRelations,
}

impl AgencyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullService => "Full Service",
            Self::Creative => "Creative Studio",
            Self::MediaBuying => "Media Buying",
            Self::PerformanceMarketing => "Performance Marketing",
            Self::PublicRelations => "Public Relations",
        }
    }
}

/// How exposed a service line is to AI-driven disruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisruptionRisk {
    Low,
    Medium,
    High,
    Critical,
}

impl DisruptionRisk {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// One selectable answer for a survey question, worst to best in option order.
#[derive(Debug, Clone)]
pub struct AnswerOption {
    pub text: &'static str,
    pub score: u8,
}

/// A survey question tagged with the dimension it feeds and its weight in
/// that dimension's average. Service-tagged questions only influence the
/// tagged service's score, never the shared dimension score.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub dimension: Dimension,
    pub weight: f32,
    pub service_id: Option<&'static str>,
    pub options: Vec<AnswerOption>,
}

/// A service line an agency can offer.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub risk: DisruptionRisk,
    pub disruption_timeline: &'static str,
}

/// Question id to the chosen option's score (not the option index).
/// A question absent from the map is unanswered and excluded from
/// aggregation entirely.
pub type AnswerSet = BTreeMap<String, u8>;

/// A selected service line with its share of agency revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub service_id: String,
    pub revenue_percent: u8,
}

/// Rescale revenue shares proportionally so they sum to 100. Used by intake
/// surfaces before calling the engine; the engine itself never rescales.
pub fn normalize_revenue_shares(selections: &[ServiceSelection]) -> Vec<ServiceSelection> {
    let total: u32 = selections
        .iter()
        .map(|selection| u32::from(selection.revenue_percent))
        .sum();
    if total == 0 {
        return selections.to_vec();
    }

    selections
        .iter()
        .map(|selection| ServiceSelection {
            service_id: selection.service_id.clone(),
            revenue_percent: ((f64::from(selection.revenue_percent) / f64::from(total)) * 100.0)
                .round() as u8,
        })
        .collect()
}

/// Everything the engine needs for one computation. Callers own this value;
/// the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub answers: AnswerSet,
    #[serde(default)]
    pub selected_services: Vec<ServiceSelection>,
    #[serde(default)]
    pub annual_revenue: f64,
    #[serde(default)]
    pub agency_type: Option<AgencyType>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("answer references unknown question id {0}")]
    UnknownQuestion(String),
    #[error("selection references unknown service id {0}")]
    UnknownService(String),
    #[error("answer for {question} has score {score} outside the 0-5 option scale")]
    AnswerOutOfRange { question: String, score: u8 },
}
