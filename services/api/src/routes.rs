use crate::infra::AppState;
use agency_valuation::assessment::domain::{
    normalize_revenue_shares, AgencyType, AnswerSet, AssessmentInput, ServiceSelection,
};
use agency_valuation::assessment::{EngineConfig, QuestionCatalog, ResultsAssembler, ResultsRecord};
use agency_valuation::error::AppError;
use agency_valuation::intake::SurveyCsvImporter;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentReportRequest {
    #[serde(default)]
    pub(crate) answers: AnswerSet,
    #[serde(default)]
    pub(crate) services: Vec<ServiceSelection>,
    #[serde(default)]
    pub(crate) annual_revenue: f64,
    #[serde(default)]
    pub(crate) agency_type: Option<AgencyType>,
    /// Survey-tool CSV export; when present it replaces `answers`.
    #[serde(default)]
    pub(crate) answers_csv: Option<String>,
    /// Rescale service revenue shares to sum to 100 before scoring.
    #[serde(default)]
    pub(crate) normalize_shares: bool,
    /// Report timestamp; defaults to now. Fixing it makes responses
    /// reproducible.
    #[serde(default)]
    pub(crate) generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentReportResponse {
    pub(crate) data_source: AnswerSource,
    pub(crate) answered_questions: usize,
    pub(crate) skipped_rows: usize,
    pub(crate) report: ResultsRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AnswerSource {
    Inline,
    SurveyCsv,
}

pub(crate) fn assessment_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessment/report",
            axum::routing::post(assessment_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn assessment_report_endpoint(
    Extension(engine): Extension<EngineConfig>,
    Json(payload): Json<AssessmentReportRequest>,
) -> Result<Json<AssessmentReportResponse>, AppError> {
    let AssessmentReportRequest {
        answers,
        services,
        annual_revenue,
        agency_type,
        answers_csv,
        normalize_shares,
        generated_at,
    } = payload;

    let (answers, data_source, skipped_rows) = if let Some(csv) = answers_csv {
        let import = SurveyCsvImporter::from_reader(Cursor::new(csv.into_bytes()))?;
        (import.answers, AnswerSource::SurveyCsv, import.skipped.len())
    } else {
        (answers, AnswerSource::Inline, 0)
    };

    let selected_services = if normalize_shares {
        normalize_revenue_shares(&services)
    } else {
        services
    };

    let input = AssessmentInput {
        answers,
        selected_services,
        annual_revenue,
        agency_type,
    };

    let catalog = QuestionCatalog::standard();
    let generated_at = generated_at.unwrap_or_else(Utc::now);
    let report = ResultsAssembler::new(&catalog, engine).assemble(&input, generated_at);

    Ok(Json(AssessmentReportResponse {
        data_source,
        answered_questions: input.answers.len(),
        skipped_rows,
        report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use std::collections::BTreeMap;

    fn filled_answers() -> AnswerSet {
        let catalog = QuestionCatalog::standard();
        catalog
            .questions()
            .iter()
            .map(|question| (question.id.to_string(), 4))
            .collect::<BTreeMap<_, _>>()
    }

    fn sample_request(answers: AnswerSet) -> AssessmentReportRequest {
        AssessmentReportRequest {
            answers,
            services: vec![
                ServiceSelection {
                    service_id: "content_production".to_string(),
                    revenue_percent: 60,
                },
                ServiceSelection {
                    service_id: "seo_search".to_string(),
                    revenue_percent: 40,
                },
            ],
            annual_revenue: 2_000_000.0,
            agency_type: None,
            answers_csv: None,
            normalize_shares: false,
            generated_at: None,
        }
    }

    #[tokio::test]
    async fn assessment_report_endpoint_returns_complete_report() {
        let request = sample_request(filled_answers());

        let Json(body) =
            assessment_report_endpoint(Extension(EngineConfig::default()), Json(request))
                .await
                .expect("report builds");

        assert_eq!(body.data_source, AnswerSource::Inline);
        assert!(body.report.scores.overall > 0);
        assert!(body.report.recommendations.len() >= 8);
        assert_eq!(body.report.service_risk.len(), 2);
        assert!(body.report.error.is_none());
    }

    #[tokio::test]
    async fn assessment_report_endpoint_accepts_survey_csv() {
        let mut request = sample_request(AnswerSet::new());
        request.answers_csv = Some(
            "question_id,score\nops_q1,4\nfin_q1,3\nai_q1,2\nunknown_row,5\n".to_string(),
        );

        let Json(body) =
            assessment_report_endpoint(Extension(EngineConfig::default()), Json(request))
                .await
                .expect("report builds");

        assert_eq!(body.data_source, AnswerSource::SurveyCsv);
        assert_eq!(body.answered_questions, 3);
        assert_eq!(body.skipped_rows, 1);
    }

    #[tokio::test]
    async fn health_endpoint_answers_through_the_router() {
        use tower::util::ServiceExt;

        let app = assessment_routes().layer(Extension(EngineConfig::default()));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_input_yields_fallback_not_error() {
        let mut request = sample_request(AnswerSet::new());
        request
            .answers
            .insert("question_that_does_not_exist".to_string(), 3);

        let Json(body) =
            assessment_report_endpoint(Extension(EngineConfig::default()), Json(request))
                .await
                .expect("endpoint never fails on engine input");

        assert!(body.report.error.is_some());
        assert_eq!(body.report.scores.overall, 50);
    }
}
