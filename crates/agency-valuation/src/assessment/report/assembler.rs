use super::super::catalog::QuestionCatalog;
use super::super::domain::{AssessmentError, AssessmentInput};
use super::super::recommendations::RecommendationEngine;
use super::super::scoring::{ExposureBand, ScoreBundle, ScoringEngine};
use super::super::{valuation, EngineConfig};
use super::views::{FinancialImpact, ResultsRecord, ServiceRiskView};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Orchestrates scoring, valuation, and recommendations into one record.
/// Always returns a complete `ResultsRecord`: invalid input produces the
/// neutral fallback with the `error` marker set instead of an error.
pub struct ResultsAssembler<'a> {
    catalog: &'a QuestionCatalog,
    config: EngineConfig,
}

impl<'a> ResultsAssembler<'a> {
    pub fn new(catalog: &'a QuestionCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// `generated_at` is caller-supplied so identical inputs always produce
    /// identical records.
    pub fn assemble(
        &self,
        input: &AssessmentInput,
        generated_at: DateTime<Utc>,
    ) -> ResultsRecord {
        match self.try_assemble(input, generated_at) {
            Ok(record) => record,
            Err(error) => {
                warn!(%error, "assessment fell back to the neutral record");
                self.fallback_record(input, generated_at, &error)
            }
        }
    }

    fn try_assemble(
        &self,
        input: &AssessmentInput,
        generated_at: DateTime<Utc>,
    ) -> Result<ResultsRecord, AssessmentError> {
        let scores = ScoringEngine::new(self.catalog).score(input)?;
        Ok(self.record_from_scores(scores, input, generated_at, None))
    }

    fn fallback_record(
        &self,
        input: &AssessmentInput,
        generated_at: DateTime<Utc>,
        error: &AssessmentError,
    ) -> ResultsRecord {
        // Selections are dropped along with the answers: they may be the
        // invalid part of the input, and the neutral bundle scores no
        // services.
        self.record_from_scores(
            ScoreBundle::neutral(),
            &AssessmentInput {
                answers: Default::default(),
                selected_services: Vec::new(),
                annual_revenue: input.annual_revenue,
                agency_type: input.agency_type,
            },
            generated_at,
            Some(error.to_string()),
        )
    }

    fn record_from_scores(
        &self,
        scores: ScoreBundle,
        input: &AssessmentInput,
        generated_at: DateTime<Utc>,
        error: Option<String>,
    ) -> ResultsRecord {
        let valuation = valuation::calculate(&scores, input.annual_revenue, &self.config);

        let recommendations =
            RecommendationEngine::new(self.catalog, self.config.minimum_recommendations)
                .generate(&scores, &input.selected_services);

        let service_risk = self.service_risk_views(&scores, input);

        let financial_impact = FinancialImpact {
            ebit_impact: valuation.ebit_uplift,
            valuation_impact: valuation.valuation_uplift,
        };

        ResultsRecord {
            generated_at,
            scores,
            valuation,
            service_risk,
            recommendations,
            financial_impact,
            error,
        }
    }

    fn service_risk_views(
        &self,
        scores: &ScoreBundle,
        input: &AssessmentInput,
    ) -> Vec<ServiceRiskView> {
        let revenue_usable = input.annual_revenue.is_finite() && input.annual_revenue > 0.0;

        input
            .selected_services
            .iter()
            .filter_map(|selection| {
                let service = self.catalog.service(&selection.service_id)?;
                let score = scores.services.get(service.id)?;
                let band = ExposureBand::for_score(score.score);

                let revenue_at_risk = if revenue_usable {
                    input.annual_revenue
                        * (f64::from(selection.revenue_percent) / 100.0)
                        * band.valuation_impact()
                } else {
                    0.0
                };

                Some(ServiceRiskView {
                    service_id: service.id.to_string(),
                    service_name: service.name.to_string(),
                    score: score.score,
                    vulnerability: score.vulnerability,
                    exposure: band,
                    exposure_label: band.label().to_string(),
                    disruption_timeline: service.disruption_timeline.to_string(),
                    revenue_share_percent: selection.revenue_percent,
                    revenue_at_risk,
                })
            })
            .collect()
    }
}
