use agency_valuation::assessment::domain::{
    AgencyType, AnswerSet, AssessmentInput, Dimension, ServiceSelection,
};
use agency_valuation::assessment::{QuestionCatalog, ScoringEngine};

fn input_with(answers: AnswerSet) -> AssessmentInput {
    AssessmentInput {
        answers,
        selected_services: Vec::new(),
        annual_revenue: 0.0,
        agency_type: None,
    }
}

fn answers(entries: &[(&str, u8)]) -> AnswerSet {
    entries
        .iter()
        .map(|(id, score)| (id.to_string(), *score))
        .collect()
}

#[test]
fn dimension_score_is_a_weighted_average_rescaled_to_percent() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    // (4*2.0 + 5*2.5) / 4.5 * 20 = 91.1 -> 91
    let input = input_with(answers(&[
        ("ops_process_documentation", 4),
        ("ops_delivery_consistency", 5),
    ]));

    assert_eq!(engine.dimension_score(Dimension::Operational, &input), 91);
}

#[test]
fn unanswered_questions_are_excluded_not_scored_as_zero() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    let partial = input_with(answers(&[
        ("ops_process_documentation", 4),
        ("ops_delivery_consistency", 5),
    ]));
    // Answering an unrelated dimension leaves the operational score alone.
    let with_extra = input_with(answers(&[
        ("ops_process_documentation", 4),
        ("ops_delivery_consistency", 5),
        ("fin_recurring_revenue", 1),
    ]));

    assert_eq!(
        engine.dimension_score(Dimension::Operational, &partial),
        engine.dimension_score(Dimension::Operational, &with_extra),
    );
}

#[test]
fn dimension_with_no_answers_scores_exactly_zero() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    let input = input_with(answers(&[("fin_recurring_revenue", 5)]));
    assert_eq!(engine.dimension_score(Dimension::Operational, &input), 0);

    let bundle = engine.score(&input).expect("valid input scores");
    assert_eq!(bundle.dimension(Dimension::Operational), 0);
    assert_eq!(bundle.dimension(Dimension::AiReadiness), 0);
}

#[test]
fn raising_one_answer_never_lowers_scores() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    let base: AnswerSet = catalog
        .questions()
        .iter()
        .map(|question| (question.id.to_string(), 2))
        .collect();

    let mut previous_dimension = 0;
    let mut previous_overall = 0;
    for score in 0..=5u8 {
        let mut answers = base.clone();
        answers.insert("fin_recurring_revenue".to_string(), score);
        let bundle = engine.score(&input_with(answers)).expect("valid input");

        let dimension = bundle.dimension(Dimension::Financial);
        assert!(dimension >= previous_dimension, "financial fell at {score}");
        assert!(bundle.overall >= previous_overall, "overall fell at {score}");
        previous_dimension = dimension;
        previous_overall = bundle.overall;
    }
}

#[test]
fn all_scores_stay_within_bounds() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    let answers: AnswerSet = catalog
        .questions()
        .iter()
        .map(|question| (question.id.to_string(), 5))
        .collect();

    let mut input = input_with(answers);
    input.selected_services = vec![
        ServiceSelection {
            service_id: "content_production".to_string(),
            revenue_percent: 50,
        },
        ServiceSelection {
            service_id: "web_development".to_string(),
            revenue_percent: 50,
        },
    ];

    let bundle = engine.score(&input).expect("valid input");
    assert!(bundle.overall <= 100);
    for dimension in Dimension::ordered() {
        assert!(bundle.dimension(dimension) <= 100);
    }
    for service in bundle.services.values() {
        assert!(service.score <= 100);
        assert!(service.vulnerability <= 100);
    }
}

#[test]
fn agency_type_override_shifts_the_overall_score() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    // Strong financials, weak elsewhere: weighting financial higher must
    // raise the overall score.
    let mut answers = AnswerSet::new();
    for question in catalog.core_questions_for(Dimension::Financial) {
        answers.insert(question.id.to_string(), 5);
    }
    for question in catalog.core_questions_for(Dimension::Operational) {
        answers.insert(question.id.to_string(), 1);
    }
    for question in catalog.core_questions_for(Dimension::AiReadiness) {
        answers.insert(question.id.to_string(), 1);
    }

    let default_input = input_with(answers.clone());
    let mut weighted_input = input_with(answers);
    weighted_input.agency_type = Some(AgencyType::MediaBuying);

    let default_bundle = engine.score(&default_input).expect("valid input");
    let weighted_bundle = engine.score(&weighted_input).expect("valid input");

    assert!(weighted_bundle.overall > default_bundle.overall);
    // Dimension scores themselves are unaffected by the weight override.
    assert_eq!(
        weighted_bundle.dimension(Dimension::Financial),
        default_bundle.dimension(Dimension::Financial)
    );
}

#[test]
fn service_score_blends_toward_service_specific_ai_signal() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    // Shared AI answers low (20), content-specific answers maxed (100):
    // blended AI entry = (20 + 100*2) / 3 = 73, and with the other
    // dimensions unanswered the service score is 73 * 2.0 / 6.5 = 22.
    let mut answers = AnswerSet::new();
    for question in catalog.core_questions_for(Dimension::AiReadiness) {
        answers.insert(question.id.to_string(), 1);
    }
    answers.insert("svc_content_ai_workflow".to_string(), 5);
    answers.insert("svc_content_offer_shift".to_string(), 5);

    let mut input = input_with(answers);
    input.selected_services = vec![ServiceSelection {
        service_id: "content_production".to_string(),
        revenue_percent: 100,
    }];

    let bundle = engine.score(&input).expect("valid input");
    let service = bundle
        .services
        .get("content_production")
        .expect("service scored");

    assert_eq!(service.score, 22);
    assert_eq!(service.vulnerability, 90);
    // The shared AI dimension score ignores the service-tagged questions.
    assert_eq!(bundle.dimension(Dimension::AiReadiness), 20);
}

#[test]
fn service_without_tagged_questions_scores_from_shared_bank() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    let answers: AnswerSet = catalog
        .questions()
        .iter()
        .filter(|question| question.service_id.is_none())
        .map(|question| (question.id.to_string(), 4))
        .collect();

    let mut input = input_with(answers);
    input.selected_services = vec![ServiceSelection {
        service_id: "web_development".to_string(),
        revenue_percent: 100,
    }];

    let bundle = engine.score(&input).expect("valid input");
    let service = bundle
        .services
        .get("web_development")
        .expect("service scored");

    // No tagged questions: the service mirrors the shared bank (all 80s).
    assert_eq!(service.score, bundle.overall);
}

#[test]
fn unknown_answer_keys_are_rejected() {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(&catalog);

    let input = input_with(answers(&[("made_up_question", 3)]));
    assert!(engine.score(&input).is_err());

    let out_of_range = input_with(answers(&[("ops_process_documentation", 9)]));
    assert!(engine.score(&out_of_range).is_err());

    let mut bad_service = input_with(AnswerSet::new());
    bad_service.selected_services = vec![ServiceSelection {
        service_id: "time_travel_consulting".to_string(),
        revenue_percent: 100,
    }];
    assert!(engine.score(&bad_service).is_err());
}
