use crate::infra::{parse_agency_type, parse_service_selection};
use agency_valuation::assessment::domain::{
    normalize_revenue_shares, AgencyType, AnswerSet, AssessmentInput, ServiceSelection,
};
use agency_valuation::assessment::{
    EngineConfig, QuestionCatalog, ResultsAssembler, ResultsRecord,
};
use agency_valuation::error::AppError;
use agency_valuation::intake::SurveyCsvImporter;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Annual agency revenue used for the dollar simulation
    #[arg(long, default_value_t = 2_000_000.0)]
    pub(crate) revenue: f64,
    /// Agency type applying its dimension-weight override
    #[arg(long, value_parser = parse_agency_type)]
    pub(crate) agency_type: Option<AgencyType>,
    /// Optional survey CSV export to score instead of the built-in answers
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// Use the shorter CLI recommendation list
    #[arg(long)]
    pub(crate) quick: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AssessmentReportArgs {
    /// Survey CSV export with question_id,score rows
    #[arg(long)]
    pub(crate) answers_csv: PathBuf,
    /// Selected service with revenue share, as service_id:percent (repeatable)
    #[arg(long = "service", value_parser = parse_service_selection)]
    pub(crate) services: Vec<ServiceSelection>,
    /// Annual agency revenue used for the dollar simulation
    #[arg(long, default_value_t = 0.0)]
    pub(crate) revenue: f64,
    /// Agency type applying its dimension-weight override
    #[arg(long, value_parser = parse_agency_type)]
    pub(crate) agency_type: Option<AgencyType>,
    /// Rescale service revenue shares to sum to 100 before scoring
    #[arg(long)]
    pub(crate) normalize_shares: bool,
    /// Use the shorter CLI recommendation list
    #[arg(long)]
    pub(crate) quick: bool,
}

pub(crate) fn run_assessment_report(args: AssessmentReportArgs) -> Result<(), AppError> {
    let AssessmentReportArgs {
        answers_csv,
        services,
        revenue,
        agency_type,
        normalize_shares,
        quick,
    } = args;

    let import = SurveyCsvImporter::from_path(answers_csv)?;
    if !import.skipped.is_empty() {
        println!(
            "Skipped {} unrecognized export row(s): {}",
            import.skipped.len(),
            import.skipped.join(", ")
        );
    }

    let selected_services = if normalize_shares {
        normalize_revenue_shares(&services)
    } else {
        services
    };

    let input = AssessmentInput {
        answers: import.answers,
        selected_services,
        annual_revenue: revenue,
        agency_type,
    };

    let config = if quick {
        EngineConfig::quick()
    } else {
        EngineConfig::default()
    };

    let catalog = QuestionCatalog::standard();
    let record = ResultsAssembler::new(&catalog, config).assemble(&input, Utc::now());
    render_results(&catalog, &record);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        revenue,
        agency_type,
        answers_csv,
        quick,
    } = args;

    let catalog = QuestionCatalog::standard();

    let answers = match answers_csv {
        Some(path) => SurveyCsvImporter::from_path(path)?.answers,
        None => demo_answers(&catalog),
    };

    let input = AssessmentInput {
        answers,
        selected_services: vec![
            ServiceSelection {
                service_id: "content_production".to_string(),
                revenue_percent: 50,
            },
            ServiceSelection {
                service_id: "seo_search".to_string(),
                revenue_percent: 30,
            },
            ServiceSelection {
                service_id: "analytics_reporting".to_string(),
                revenue_percent: 20,
            },
        ],
        annual_revenue: revenue,
        agency_type,
    };

    let config = if quick {
        EngineConfig::quick()
    } else {
        EngineConfig::default()
    };

    println!("=== Agency Valuation Demo ===");
    println!(
        "Scoring {} answered questions across {} selected services\n",
        input.answers.len(),
        input.selected_services.len()
    );

    let record = ResultsAssembler::new(&catalog, config).assemble(&input, Utc::now());
    render_results(&catalog, &record);

    Ok(())
}

/// A mostly-strong agency with a weak spot in data readiness, so the demo
/// output shows both premium multiples and live recommendations.
fn demo_answers(catalog: &QuestionCatalog) -> AnswerSet {
    catalog
        .questions()
        .iter()
        .map(|question| {
            let score = match question.id {
                "ai_data_readiness" => 1,
                "ops_utilization_tracking" => 2,
                "fin_forecast_discipline" => 3,
                _ => 4,
            };
            (question.id.to_string(), score)
        })
        .collect()
}

fn render_results(catalog: &QuestionCatalog, record: &ResultsRecord) {
    if let Some(error) = &record.error {
        println!("!! Fallback report: {error}\n");
    }

    println!("-- Scores --");
    println!("Overall: {}", record.scores.overall);
    for (dimension, score) in &record.scores.dimensions {
        println!("  {:<22} {}", dimension.label(), score);
    }

    println!("\n-- Valuation --");
    println!(
        "EBITDA multiple range: {:.1}x - {:.1}x",
        record.valuation.multiple_low, record.valuation.multiple_high
    );
    println!("Classification: {}", record.valuation.tier_label);
    println!(
        "Improvement headroom: {:.1}% of EBIT (${:.0} on ${:.0} current EBIT)",
        record.valuation.ebit_impact_percent,
        record.valuation.ebit_uplift,
        record.valuation.current_ebit
    );
    println!(
        "Valuation uplift at the improved multiple: ${:.0}",
        record.valuation.valuation_uplift
    );

    if !record.service_risk.is_empty() {
        println!("\n-- Service exposure --");
        for view in &record.service_risk {
            let timeline = catalog
                .service(&view.service_id)
                .map(|service| service.disruption_timeline)
                .unwrap_or("n/a");
            println!(
                "  {:<26} score {:>3}  vulnerability {:>3}%  {}  ({} horizon, ${:.0} at risk)",
                view.service_name,
                view.score,
                view.vulnerability,
                view.exposure_label,
                timeline,
                view.revenue_at_risk
            );
        }
    }

    println!("\n-- Recommendations ({}) --", record.recommendations.len());
    for recommendation in &record.recommendations {
        let scope = recommendation.service.as_deref().unwrap_or("agency-wide");
        println!(
            "  [{}] {} ({}; {}; complexity {})",
            recommendation.priority_rank,
            recommendation.title,
            scope,
            recommendation.timeframe_label,
            recommendation.complexity.label()
        );
        println!("      {}", recommendation.description);
    }
}
