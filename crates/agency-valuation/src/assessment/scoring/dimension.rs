use super::super::domain::{AnswerSet, Dimension, Question};
use super::weights::DimensionWeights;
use std::collections::BTreeMap;

/// Weight-aware average of the answered questions, rescaled from the 0-5
/// option scale to 0-100. Unanswered questions are excluded from both the
/// numerator and the denominator; they are not treated as zero.
pub(crate) fn score_dimension(questions: &[&Question], answers: &AnswerSet) -> u8 {
    let mut weighted_sum = 0.0f32;
    let mut total_weight = 0.0f32;

    for question in questions {
        if let Some(score) = answers.get(question.id) {
            weighted_sum += f32::from(*score) * question.weight;
            total_weight += question.weight;
        }
    }

    if total_weight == 0.0 {
        return 0;
    }

    let raw = (weighted_sum / total_weight) * 20.0;
    raw.clamp(0.0, 100.0).round() as u8
}

/// Weighted average over the dimensions present in the map; 0 when empty.
pub(crate) fn weighted_average(
    dimension_scores: &BTreeMap<Dimension, u8>,
    weights: &DimensionWeights,
) -> u8 {
    let mut weighted_sum = 0.0f32;
    let mut total_weight = 0.0f32;

    for (dimension, score) in dimension_scores {
        let weight = weights.get(*dimension);
        weighted_sum += f32::from(*score) * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return 0;
    }

    (weighted_sum / total_weight).clamp(0.0, 100.0).round() as u8
}
