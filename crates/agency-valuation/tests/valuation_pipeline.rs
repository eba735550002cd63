use agency_valuation::assessment::domain::{
    AnswerSet, AssessmentInput, Dimension, ServiceSelection,
};
use agency_valuation::assessment::valuation::{self, ValuationTier};
use agency_valuation::assessment::{
    EngineConfig, QuestionCatalog, ResultsAssembler, ResultsRecord, ScoreBundle,
};
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

fn bundle(overall: u8, operational: u8, financial: u8, ai: u8) -> ScoreBundle {
    ScoreBundle {
        overall,
        dimensions: BTreeMap::from([
            (Dimension::Operational, operational),
            (Dimension::Financial, financial),
            (Dimension::AiReadiness, ai),
        ]),
        services: BTreeMap::new(),
    }
}

#[test]
fn premium_agency_hits_the_worked_scenario_numbers() {
    let scores = bundle(80, 81, 82, 75);
    let result = valuation::calculate(&scores, 2_000_000.0, &EngineConfig::default());

    // Band (>=80, >=80) -> (6.0, 8.0); influence 0.816; step 1.5.
    assert_eq!(result.multiple_low, 7.3);
    assert_eq!(result.multiple_high, 9.8);
    assert_eq!(result.tier, ValuationTier::Premium);

    assert!((result.ebit_impact_percent - 6.0).abs() < 1e-9);
    assert!((result.current_ebit - 300_000.0).abs() < 1e-6);
    assert!((result.ebit_uplift - 18_000.0).abs() < 1e-6);
    assert!((result.valuation_uplift - 176_400.0).abs() < 1e-3);
}

#[test]
fn very_poor_overall_caps_the_multiples_regardless_of_dimensions() {
    let scores = bundle(15, 81, 82, 75);
    let result = valuation::calculate(&scores, 2_000_000.0, &EngineConfig::default());

    assert_eq!(result.multiple_low, 1.0);
    assert_eq!(result.multiple_high, 1.5);
    assert_eq!(result.tier, ValuationTier::Weak);
}

#[test]
fn multiples_never_drop_below_the_floor() {
    let scores = bundle(0, 0, 0, 0);
    let result = valuation::calculate(&scores, 1_000_000.0, &EngineConfig::default());

    assert_eq!(result.multiple_low, 1.0);
    assert_eq!(result.multiple_high, 1.5);
    assert!(result.multiple_low <= result.multiple_high);
}

#[test]
fn band_lookup_requires_both_scores_to_clear_the_threshold() {
    // Financial 85 alone does not reach the top band; operational 45 drags
    // the pair down to the >=40 band (3.0, 4.0).
    let scores = bundle(55, 45, 85, 50);
    let result = valuation::calculate(&scores, 0.0, &EngineConfig::default());

    // influence = (85*0.6 + 45*0.4)/100 = 0.69; step 1.5.
    assert_eq!(result.multiple_low, 3.1);
    assert_eq!(result.multiple_high, 4.1);
}

#[test]
fn non_positive_revenue_zeroes_dollar_figures_only() {
    let scores = bundle(80, 81, 82, 75);

    for revenue in [0.0, -50_000.0, f64::NAN] {
        let result = valuation::calculate(&scores, revenue, &EngineConfig::default());
        assert_eq!(result.current_ebit, 0.0);
        assert_eq!(result.ebit_uplift, 0.0);
        assert_eq!(result.valuation_uplift, 0.0);
        // Multiples and tier still come from the scores.
        assert_eq!(result.multiple_high, 9.8);
        assert_eq!(result.tier, ValuationTier::Premium);
    }
}

#[test]
fn classification_tiers_follow_the_overall_boundaries() {
    let cases = [
        (70, ValuationTier::Premium),
        (69, ValuationTier::Strong),
        (60, ValuationTier::Strong),
        (59, ValuationTier::Average),
        (50, ValuationTier::Average),
        (49, ValuationTier::Weak),
        (0, ValuationTier::Weak),
    ];

    for (overall, expected) in cases {
        assert_eq!(ValuationTier::for_overall(overall), expected, "at {overall}");
    }
}

#[test]
fn raising_an_answer_never_lowers_the_high_multiple() {
    let catalog = QuestionCatalog::standard();
    let assembler = ResultsAssembler::new(&catalog, EngineConfig::default());
    let generated_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    let base: AnswerSet = catalog
        .questions()
        .iter()
        .map(|question| (question.id.to_string(), 2))
        .collect();

    let mut previous_high = 0.0;
    for score in 0..=5u8 {
        let mut answers = base.clone();
        answers.insert("ops_delivery_consistency".to_string(), score);

        let record = assembler.assemble(
            &AssessmentInput {
                answers,
                selected_services: Vec::new(),
                annual_revenue: 2_000_000.0,
                agency_type: None,
            },
            generated_at,
        );

        assert!(
            record.valuation.multiple_high >= previous_high,
            "high multiple fell at answer score {score}"
        );
        previous_high = record.valuation.multiple_high;
    }
}

fn full_input(catalog: &QuestionCatalog) -> AssessmentInput {
    AssessmentInput {
        answers: catalog
            .questions()
            .iter()
            .map(|question| (question.id.to_string(), 4))
            .collect(),
        selected_services: vec![
            ServiceSelection {
                service_id: "content_production".to_string(),
                revenue_percent: 60,
            },
            ServiceSelection {
                service_id: "analytics_reporting".to_string(),
                revenue_percent: 40,
            },
        ],
        annual_revenue: 2_000_000.0,
        agency_type: None,
    }
}

#[test]
fn results_record_round_trips_through_json() {
    let catalog = QuestionCatalog::standard();
    let assembler = ResultsAssembler::new(&catalog, EngineConfig::default());
    let generated_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    let record = assembler.assemble(&full_input(&catalog), generated_at);

    let encoded = serde_json::to_string(&record).expect("record serializes");
    let decoded: ResultsRecord = serde_json::from_str(&encoded).expect("record deserializes");

    assert_eq!(decoded, record);
}

#[test]
fn assembling_twice_with_identical_inputs_is_byte_identical() {
    let catalog = QuestionCatalog::standard();
    let assembler = ResultsAssembler::new(&catalog, EngineConfig::default());
    let generated_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    let input = full_input(&catalog);

    let first = assembler.assemble(&input, generated_at);
    let second = assembler.assemble(&input, generated_at);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes"),
    );
}

#[test]
fn invalid_input_produces_the_neutral_fallback_record() {
    let catalog = QuestionCatalog::standard();
    let assembler = ResultsAssembler::new(&catalog, EngineConfig::default());
    let generated_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    let mut input = full_input(&catalog);
    input.answers.insert("not_a_question".to_string(), 3);

    let record = assembler.assemble(&input, generated_at);

    assert!(record.error.is_some());
    assert_eq!(record.scores.overall, 50);
    for dimension in Dimension::ordered() {
        assert_eq!(record.scores.dimension(dimension), 50);
    }
    assert!(record.scores.services.is_empty());
    assert!(record.service_risk.is_empty());
    // The record stays complete: valuation and advice are still present.
    assert!(record.valuation.multiple_high >= record.valuation.multiple_low);
    assert!(!record.recommendations.is_empty());
}

#[test]
fn service_risk_views_price_revenue_at_risk_from_the_band() {
    let catalog = QuestionCatalog::standard();
    let assembler = ResultsAssembler::new(&catalog, EngineConfig::default());
    let generated_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    let record = assembler.assemble(&full_input(&catalog), generated_at);

    let content = record
        .service_risk
        .iter()
        .find(|view| view.service_id == "content_production")
        .expect("content view present");

    // All 4s => service score 80 => low band: 5% of the 60% share.
    assert_eq!(content.score, 80);
    assert_eq!(content.vulnerability, 20);
    assert!((content.revenue_at_risk - 2_000_000.0 * 0.6 * 0.05).abs() < 1e-6);
}
