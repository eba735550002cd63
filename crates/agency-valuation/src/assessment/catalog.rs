use super::domain::{AnswerOption, Dimension, DisruptionRisk, Question, ServiceDefinition};

/// The static survey question bank plus the service-line definitions.
/// Built once at startup and passed by reference into the engines.
#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    services: Vec<ServiceDefinition>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
            services: standard_services(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Shared questions for a dimension: those not tagged to any service.
    pub fn core_questions_for(&self, dimension: Dimension) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension && question.service_id.is_none())
            .collect()
    }

    /// Questions tagged to one service, optionally narrowed to a dimension.
    pub fn service_questions_for(
        &self,
        service_id: &str,
        dimension: Dimension,
    ) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| {
                question.dimension == dimension && question.service_id == Some(service_id)
            })
            .collect()
    }

    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }

    pub fn service(&self, id: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|service| service.id == id)
    }
}

fn standard_services() -> Vec<ServiceDefinition> {
    vec![
        ServiceDefinition {
            id: "content_production",
            name: "Content Production",
            risk: DisruptionRisk::Critical,
            disruption_timeline: "0-12 months",
        },
        ServiceDefinition {
            id: "seo_search",
            name: "SEO & Organic Search",
            risk: DisruptionRisk::High,
            disruption_timeline: "6-18 months",
        },
        ServiceDefinition {
            id: "paid_media",
            name: "Paid Media Buying",
            risk: DisruptionRisk::High,
            disruption_timeline: "6-18 months",
        },
        ServiceDefinition {
            id: "web_development",
            name: "Web Design & Development",
            risk: DisruptionRisk::Medium,
            disruption_timeline: "18-36 months",
        },
        ServiceDefinition {
            id: "social_media",
            name: "Social Media Management",
            risk: DisruptionRisk::Medium,
            disruption_timeline: "12-24 months",
        },
        ServiceDefinition {
            id: "analytics_reporting",
            name: "Analytics & Reporting",
            risk: DisruptionRisk::High,
            disruption_timeline: "6-12 months",
        },
    ]
}

fn standard_questions() -> Vec<Question> {
    vec![
        // Operational maturity
        Question {
            id: "ops_process_documentation",
            prompt: "How documented and repeatable are your core delivery processes?",
            dimension: Dimension::Operational,
            weight: 2.0,
            service_id: None,
            options: vec![
                AnswerOption { text: "Nothing written down; delivery lives in people's heads", score: 0 },
                AnswerOption { text: "A few checklists exist but are rarely followed", score: 1 },
                AnswerOption { text: "Key processes documented, updated sporadically", score: 3 },
                AnswerOption { text: "Documented playbooks for most engagements", score: 4 },
                AnswerOption { text: "Versioned playbooks every team actually works from", score: 5 },
            ],
        },
        Question {
            id: "ops_delivery_consistency",
            prompt: "How consistently do projects ship on time and on budget?",
            dimension: Dimension::Operational,
            weight: 2.5,
            service_id: None,
            options: vec![
                AnswerOption { text: "Overruns are the norm", score: 0 },
                AnswerOption { text: "Less than half of projects land on plan", score: 2 },
                AnswerOption { text: "Most projects land on plan with heroics", score: 3 },
                AnswerOption { text: "On-time, on-budget is routine and measured", score: 5 },
            ],
        },
        Question {
            id: "ops_founder_dependency",
            prompt: "How dependent is day-to-day delivery on the founders or a single rainmaker?",
            dimension: Dimension::Operational,
            weight: 2.0,
            service_id: None,
            options: vec![
                AnswerOption { text: "Everything routes through the founders", score: 0 },
                AnswerOption { text: "Founders still approve most client work", score: 1 },
                AnswerOption { text: "Senior team runs delivery; founders handle sales", score: 3 },
                AnswerOption { text: "Delivery and sales both run without founder involvement", score: 5 },
            ],
        },
        Question {
            id: "ops_utilization_tracking",
            prompt: "Do you track team utilization and project profitability per engagement?",
            dimension: Dimension::Operational,
            weight: 1.5,
            service_id: None,
            options: vec![
                AnswerOption { text: "No tracking at all", score: 0 },
                AnswerOption { text: "Rough timesheets, reviewed rarely", score: 1 },
                AnswerOption { text: "Utilization tracked, profitability estimated", score: 3 },
                AnswerOption { text: "Both tracked per engagement and reviewed monthly", score: 5 },
            ],
        },
        Question {
            id: "ops_tooling_integration",
            prompt: "How integrated is your project, resourcing, and client tooling?",
            dimension: Dimension::Operational,
            weight: 1.5,
            service_id: None,
            options: vec![
                AnswerOption { text: "Spreadsheets and email", score: 0 },
                AnswerOption { text: "Point tools that don't talk to each other", score: 2 },
                AnswerOption { text: "Core stack integrated, gaps filled manually", score: 3 },
                AnswerOption { text: "One connected stack from intake to invoice", score: 5 },
            ],
        },
        // Financial health
        Question {
            id: "fin_recurring_revenue",
            prompt: "What share of revenue is recurring (retainers or contracted subscriptions)?",
            dimension: Dimension::Financial,
            weight: 3.0,
            service_id: None,
            options: vec![
                AnswerOption { text: "Almost none; project work dominates", score: 0 },
                AnswerOption { text: "Under a quarter recurring", score: 1 },
                AnswerOption { text: "Around half recurring", score: 3 },
                AnswerOption { text: "Most revenue on multi-month retainers", score: 4 },
                AnswerOption { text: "Over 80% recurring under contract", score: 5 },
            ],
        },
        Question {
            id: "fin_client_concentration",
            prompt: "How concentrated is revenue in your largest client?",
            dimension: Dimension::Financial,
            weight: 2.5,
            service_id: None,
            options: vec![
                AnswerOption { text: "One client is more than half of revenue", score: 0 },
                AnswerOption { text: "Top client is 30-50% of revenue", score: 1 },
                AnswerOption { text: "Top client is 15-30% of revenue", score: 3 },
                AnswerOption { text: "No client above 15% of revenue", score: 5 },
            ],
        },
        Question {
            id: "fin_margin_visibility",
            prompt: "How well do you know gross margin by service line?",
            dimension: Dimension::Financial,
            weight: 2.5,
            service_id: None,
            options: vec![
                AnswerOption { text: "We only see margin at year end", score: 0 },
                AnswerOption { text: "Blended margin known, not by service", score: 2 },
                AnswerOption { text: "Margin by service reviewed quarterly", score: 4 },
                AnswerOption { text: "Margin by service and client, reviewed monthly", score: 5 },
            ],
        },
        Question {
            id: "fin_pricing_model",
            prompt: "How is your work priced?",
            dimension: Dimension::Financial,
            weight: 2.0,
            service_id: None,
            options: vec![
                AnswerOption { text: "Hourly billing throughout", score: 0 },
                AnswerOption { text: "Day rates and loose fixed fees", score: 2 },
                AnswerOption { text: "Fixed fees tied to defined scopes", score: 3 },
                AnswerOption { text: "Value or outcome-based pricing on key accounts", score: 5 },
            ],
        },
        Question {
            id: "fin_forecast_discipline",
            prompt: "How far ahead can you forecast revenue with confidence?",
            dimension: Dimension::Financial,
            weight: 1.5,
            service_id: None,
            options: vec![
                AnswerOption { text: "We can't; pipeline is guesswork", score: 0 },
                AnswerOption { text: "One month out", score: 2 },
                AnswerOption { text: "One quarter out", score: 3 },
                AnswerOption { text: "Two or more quarters with a maintained model", score: 5 },
            ],
        },
        // AI readiness (shared)
        Question {
            id: "ai_tool_adoption",
            prompt: "How widely are AI tools used in day-to-day delivery?",
            dimension: Dimension::AiReadiness,
            weight: 2.5,
            service_id: None,
            options: vec![
                AnswerOption { text: "Not used, or actively discouraged", score: 0 },
                AnswerOption { text: "A few individuals experiment on their own", score: 1 },
                AnswerOption { text: "Team-level adoption in some departments", score: 3 },
                AnswerOption { text: "Standard tooling with shared prompts and guardrails", score: 4 },
                AnswerOption { text: "Embedded in every workflow with measured gains", score: 5 },
            ],
        },
        Question {
            id: "ai_strategy_ownership",
            prompt: "Who owns your AI strategy?",
            dimension: Dimension::AiReadiness,
            weight: 2.0,
            service_id: None,
            options: vec![
                AnswerOption { text: "Nobody; it hasn't come up", score: 0 },
                AnswerOption { text: "Discussed ad hoc at leadership level", score: 2 },
                AnswerOption { text: "A named owner with a written roadmap", score: 4 },
                AnswerOption { text: "Board-level priority with budget and quarterly targets", score: 5 },
            ],
        },
        Question {
            id: "ai_team_capability",
            prompt: "How capable is the wider team with AI-assisted ways of working?",
            dimension: Dimension::AiReadiness,
            weight: 2.0,
            service_id: None,
            options: vec![
                AnswerOption { text: "No training, low awareness", score: 0 },
                AnswerOption { text: "Self-taught pockets of capability", score: 2 },
                AnswerOption { text: "Structured training underway", score: 3 },
                AnswerOption { text: "Certified skills tied to role expectations", score: 5 },
            ],
        },
        Question {
            id: "ai_data_readiness",
            prompt: "How usable is your historical client and campaign data for AI workflows?",
            dimension: Dimension::AiReadiness,
            weight: 1.5,
            service_id: None,
            options: vec![
                AnswerOption { text: "Scattered across inboxes and old drives", score: 0 },
                AnswerOption { text: "Centralized but unstructured", score: 2 },
                AnswerOption { text: "Structured in core systems, partly accessible", score: 3 },
                AnswerOption { text: "Clean, governed, and already feeding AI workflows", score: 5 },
            ],
        },
        Question {
            id: "ai_service_repositioning",
            prompt: "Have you repositioned or repriced services in response to AI?",
            dimension: Dimension::AiReadiness,
            weight: 2.0,
            service_id: None,
            options: vec![
                AnswerOption { text: "No changes made or planned", score: 0 },
                AnswerOption { text: "Internal efficiency gains only, pricing untouched", score: 2 },
                AnswerOption { text: "Some offers repackaged around AI-augmented delivery", score: 3 },
                AnswerOption { text: "Portfolio and pricing restructured; new AI-native offers sold", score: 5 },
            ],
        },
        // Service-specific AI exposure
        Question {
            id: "svc_content_ai_workflow",
            prompt: "How much of your content production already runs through AI-assisted workflows?",
            dimension: Dimension::AiReadiness,
            weight: 2.5,
            service_id: Some("content_production"),
            options: vec![
                AnswerOption { text: "None; fully manual production", score: 0 },
                AnswerOption { text: "Drafting assistance only", score: 2 },
                AnswerOption { text: "AI-assisted drafting, human editing as standard", score: 3 },
                AnswerOption { text: "End-to-end AI pipeline with human review gates", score: 5 },
            ],
        },
        Question {
            id: "svc_content_offer_shift",
            prompt: "Has the content offer shifted from volume deliverables to strategy and brand voice?",
            dimension: Dimension::AiReadiness,
            weight: 2.0,
            service_id: Some("content_production"),
            options: vec![
                AnswerOption { text: "Still sold per word or per asset", score: 0 },
                AnswerOption { text: "Mostly volume, some strategy upsell", score: 2 },
                AnswerOption { text: "Balanced mix of production and strategy", score: 3 },
                AnswerOption { text: "Strategy-led offer; production is commoditized internally", score: 5 },
            ],
        },
        Question {
            id: "svc_paid_media_automation",
            prompt: "How automated is campaign management across your paid media accounts?",
            dimension: Dimension::AiReadiness,
            weight: 2.5,
            service_id: Some("paid_media"),
            options: vec![
                AnswerOption { text: "Manual bid and budget management", score: 0 },
                AnswerOption { text: "Platform smart-bidding, little else", score: 2 },
                AnswerOption { text: "Scripted rules plus platform automation", score: 3 },
                AnswerOption { text: "Cross-platform automation with custom models", score: 5 },
            ],
        },
        Question {
            id: "svc_paid_media_value",
            prompt: "What do clients pay your paid media team for, now that platforms self-optimize?",
            dimension: Dimension::AiReadiness,
            weight: 2.0,
            service_id: Some("paid_media"),
            options: vec![
                AnswerOption { text: "Hands-on-keyboard campaign operation", score: 0 },
                AnswerOption { text: "Operation plus reporting", score: 2 },
                AnswerOption { text: "Strategy, measurement design, and operation", score: 3 },
                AnswerOption { text: "Full-funnel strategy and incrementality measurement", score: 5 },
            ],
        },
        Question {
            id: "svc_seo_ai_search",
            prompt: "How prepared is your SEO practice for AI-generated search results?",
            dimension: Dimension::AiReadiness,
            weight: 2.5,
            service_id: Some("seo_search"),
            options: vec![
                AnswerOption { text: "We haven't assessed the impact", score: 0 },
                AnswerOption { text: "Watching the space, no changes yet", score: 1 },
                AnswerOption { text: "Testing answer-engine optimization on some accounts", score: 3 },
                AnswerOption { text: "AEO/GEO is a productized part of the offer", score: 5 },
            ],
        },
        Question {
            id: "svc_seo_offer_evolution",
            prompt: "How has the SEO retainer evolved beyond rankings reports?",
            dimension: Dimension::AiReadiness,
            weight: 2.0,
            service_id: Some("seo_search"),
            options: vec![
                AnswerOption { text: "Rankings and traffic reports, unchanged for years", score: 0 },
                AnswerOption { text: "Some content strategy bundled in", score: 2 },
                AnswerOption { text: "Organic growth consulting with revenue attribution", score: 4 },
                AnswerOption { text: "Search strategy across traditional and AI surfaces", score: 5 },
            ],
        },
    ]
}
