use super::super::catalog::QuestionCatalog;
use super::super::domain::{AnswerSet, Dimension, Question};
use super::dimension::{score_dimension, weighted_average};
use super::weights::DimensionWeights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Readiness score and derived vulnerability for one selected service line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceScore {
    pub score: u8,
    pub vulnerability: u8,
}

/// Step bands mapping a service readiness score onto a vulnerability figure
/// and a valuation-impact multiplier. Total over [0,100]; higher readiness
/// always lands in a lower-vulnerability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureBand {
    Low,
    Medium,
    High,
    Critical,
}

impl ExposureBand {
    pub const fn for_score(score: u8) -> Self {
        if score >= 80 {
            Self::Low
        } else if score >= 60 {
            Self::Medium
        } else if score >= 40 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub const fn vulnerability_percent(self) -> u8 {
        match self {
            Self::Low => 20,
            Self::Medium => 45,
            Self::High => 70,
            Self::Critical => 90,
        }
    }

    /// Share of a service's revenue treated as at risk in the report views.
    pub const fn valuation_impact(self) -> f64 {
        match self {
            Self::Low => 0.05,
            Self::Medium => 0.15,
            Self::High => 0.30,
            Self::Critical => 0.50,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low exposure",
            Self::Medium => "Medium exposure",
            Self::High => "High exposure",
            Self::Critical => "Critical exposure",
        }
    }
}

/// Score one service line. Each dimension is scored over the union of the
/// shared questions and the ones tagged to this service; when the service
/// has its own AI questions, the AI entry is blended 2:1 toward the
/// service-specific sub-score so service-level exposure dominates the
/// generic maturity signal.
pub(crate) fn score_service(
    service_id: &str,
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
    weights: &DimensionWeights,
) -> ServiceScore {
    let mut dimension_scores = BTreeMap::new();

    for dimension in Dimension::ordered() {
        let core = catalog.core_questions_for(dimension);
        let specific = catalog.service_questions_for(service_id, dimension);

        let entry = if dimension == Dimension::AiReadiness && !specific.is_empty() {
            let shared = score_dimension(&core, answers);
            let service_specific = score_dimension(&specific, answers);
            blend_toward_service(shared, service_specific)
        } else {
            let union: Vec<&Question> =
                core.into_iter().chain(specific.into_iter()).collect();
            score_dimension(&union, answers)
        };

        dimension_scores.insert(dimension, entry);
    }

    let score = weighted_average(&dimension_scores, weights);
    let vulnerability = ExposureBand::for_score(score).vulnerability_percent();

    ServiceScore {
        score,
        vulnerability,
    }
}

fn blend_toward_service(shared: u8, service_specific: u8) -> u8 {
    let blended = (f32::from(shared) + f32::from(service_specific) * 2.0) / 3.0;
    blended.clamp(0.0, 100.0).round() as u8
}
