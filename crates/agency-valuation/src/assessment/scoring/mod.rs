mod dimension;
mod service;
mod weights;

pub use service::{ExposureBand, ServiceScore};
pub use weights::DimensionWeights;

use super::catalog::QuestionCatalog;
use super::domain::{AssessmentError, AssessmentInput, Dimension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stateless scorer over the injected catalog. Every call takes the full
/// input and returns a fresh bundle; nothing is cached between calls.
pub struct ScoringEngine<'a> {
    catalog: &'a QuestionCatalog,
}

/// Finalized scores for one assessment. Every figure is already clamped to
/// [0,100] and rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBundle {
    pub overall: u8,
    pub dimensions: BTreeMap<Dimension, u8>,
    pub services: BTreeMap<String, ServiceScore>,
}

impl ScoreBundle {
    pub fn dimension(&self, dimension: Dimension) -> u8 {
        self.dimensions.get(&dimension).copied().unwrap_or(0)
    }

    /// Neutral-midpoint bundle used by the assembler's fallback path.
    pub fn neutral() -> Self {
        Self {
            overall: 50,
            dimensions: Dimension::ordered()
                .into_iter()
                .map(|dimension| (dimension, 50))
                .collect(),
            services: BTreeMap::new(),
        }
    }
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Score a single dimension from the shared question bank.
    pub fn dimension_score(&self, dimension: Dimension, input: &AssessmentInput) -> u8 {
        let questions = self.catalog.core_questions_for(dimension);
        dimension::score_dimension(&questions, &input.answers)
    }

    pub fn score(&self, input: &AssessmentInput) -> Result<ScoreBundle, AssessmentError> {
        self.validate(input)?;

        let weights = DimensionWeights::for_agency_type(input.agency_type);

        let dimensions: BTreeMap<Dimension, u8> = Dimension::ordered()
            .into_iter()
            .map(|dimension| (dimension, self.dimension_score(dimension, input)))
            .collect();

        let overall = dimension::weighted_average(&dimensions, &weights);

        let services = input
            .selected_services
            .iter()
            .map(|selection| {
                let score = service::score_service(
                    &selection.service_id,
                    &input.answers,
                    self.catalog,
                    &weights,
                );
                (selection.service_id.clone(), score)
            })
            .collect();

        Ok(ScoreBundle {
            overall,
            dimensions,
            services,
        })
    }

    fn validate(&self, input: &AssessmentInput) -> Result<(), AssessmentError> {
        for (question_id, score) in &input.answers {
            if self.catalog.question(question_id).is_none() {
                return Err(AssessmentError::UnknownQuestion(question_id.clone()));
            }
            if *score > 5 {
                return Err(AssessmentError::AnswerOutOfRange {
                    question: question_id.clone(),
                    score: *score,
                });
            }
        }

        for selection in &input.selected_services {
            if self.catalog.service(&selection.service_id).is_none() {
                return Err(AssessmentError::UnknownService(
                    selection.service_id.clone(),
                ));
            }
        }

        Ok(())
    }
}
