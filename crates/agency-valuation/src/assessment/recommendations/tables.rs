use super::super::domain::Dimension;
use super::{Complexity, Focus, Importance, ScoreBracket};

pub(crate) struct PlaybookEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub complexity: Complexity,
    pub focus: Focus,
}

/// Per-service recommendation lists for one score bracket, in timeframe
/// order: immediate, then short-term, then strategic.
pub(crate) struct ServicePlaybook {
    pub service_id: &'static str,
    pub bracket: ScoreBracket,
    pub immediate: Vec<PlaybookEntry>,
    pub short_term: Vec<PlaybookEntry>,
    pub strategic: Vec<PlaybookEntry>,
}

pub(crate) struct UniversalEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub complexity: Complexity,
    pub importance: Importance,
    pub focus: Focus,
    pub dimension: Dimension,
}

pub(crate) fn service_playbooks() -> Vec<ServicePlaybook> {
    vec![
        // Content production
        ServicePlaybook {
            service_id: "content_production",
            bracket: ScoreBracket::Low,
            immediate: vec![PlaybookEntry {
                title: "Stand up an AI-assisted drafting pipeline",
                description: "Move first-draft production onto AI tooling with a human editing gate so output cost drops before clients demand it.",
                impact: "30-50% lower cost per asset",
                complexity: Complexity::Low,
                focus: Focus::Technology,
            }],
            short_term: vec![PlaybookEntry {
                title: "Reprice content retainers away from per-asset billing",
                description: "Per-word and per-asset pricing collapses as buyers learn what generation costs; shift retainers to outcomes before renewal season.",
                impact: "Protects retainer revenue",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Rebuild the content offer around brand voice governance",
                description: "Own the style guides, approval workflows, and performance loop clients cannot automate, and let commodity production become an internal cost line.",
                impact: "Defensible positioning",
                complexity: Complexity::High,
                focus: Focus::Operational,
            }],
        },
        ServicePlaybook {
            service_id: "content_production",
            bracket: ScoreBracket::Mid,
            immediate: vec![PlaybookEntry {
                title: "Standardize the AI editing gate across all accounts",
                description: "Adoption is uneven; make the assisted pipeline the default on every account and track edit-time per asset.",
                impact: "Consistent margins across accounts",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "Introduce tiered content products",
                description: "Split the offer into machine-led volume, hybrid, and premium human tiers with distinct price points and SLAs.",
                impact: "Upsell path on existing accounts",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Productize brand-voice models per client",
                description: "Fine-tuned voice assets and prompt libraries per client create switching costs that survive commodity pricing.",
                impact: "Higher retention, acquirer-visible IP",
                complexity: Complexity::High,
                focus: Focus::Technology,
            }],
        },
        ServicePlaybook {
            service_id: "content_production",
            bracket: ScoreBracket::High,
            immediate: vec![PlaybookEntry {
                title: "Publish efficiency gains as case studies",
                description: "You are ahead of the market; document cost-per-asset and turnaround improvements while competitors are still piloting.",
                impact: "Sales ammunition",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "License the content pipeline to smaller shops",
                description: "The playbooks and tooling you run internally are sellable to non-competing agencies as a white-label product.",
                impact: "New revenue line",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Acquire struggling content shops at distressed multiples",
                description: "Consolidate books of business you can migrate onto your pipeline at a fraction of your unit cost.",
                impact: "Inorganic growth",
                complexity: Complexity::High,
                focus: Focus::Financial,
            }],
        },
        // Paid media
        ServicePlaybook {
            service_id: "paid_media",
            bracket: ScoreBracket::Low,
            immediate: vec![PlaybookEntry {
                title: "Audit what platform automation already does on your accounts",
                description: "Map every task the team performs against what smart bidding and asset generation now handle; stop billing for the overlap before a client does the math.",
                impact: "Avoids account losses",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "Shift paid media fees off percent-of-spend",
                description: "Automation shrinks the labor behind spend management; move to flat strategy fees plus performance incentives.",
                impact: "Decouples revenue from headcount",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Rebuild the desk around measurement and incrementality",
                description: "Buying is automating away; experiment design, attribution, and budget allocation across walled gardens is where a human desk keeps pricing power.",
                impact: "Durable advisory revenue",
                complexity: Complexity::High,
                focus: Focus::Technology,
            }],
        },
        ServicePlaybook {
            service_id: "paid_media",
            bracket: ScoreBracket::Mid,
            immediate: vec![PlaybookEntry {
                title: "Consolidate automation scripts into one library",
                description: "Rules and scripts live with individual buyers; centralize them so coverage survives churn and onboarding shrinks.",
                impact: "Lower key-person risk",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "Sell measurement design as a standalone engagement",
                description: "Incrementality testing and clean-room setup commands consulting rates independent of media spend.",
                impact: "Margin-accretive revenue",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Build custom bidding models on first-party signals",
                description: "Feeding client conversion data into custom automation beats platform defaults and is hard to in-house.",
                impact: "Differentiated performance",
                complexity: Complexity::High,
                focus: Focus::Technology,
            }],
        },
        ServicePlaybook {
            service_id: "paid_media",
            bracket: ScoreBracket::High,
            immediate: vec![PlaybookEntry {
                title: "Benchmark fees against automation-adjusted scope",
                description: "Confirm pricing reflects the strategy-heavy desk you now run, not the legacy hands-on-keyboard scope.",
                impact: "Captures earned margin",
                complexity: Complexity::Low,
                focus: Focus::Financial,
            }],
            short_term: vec![PlaybookEntry {
                title: "Package the measurement stack for mid-market clients",
                description: "A productized incrementality offering opens a segment that cannot afford bespoke consulting.",
                impact: "Pipeline expansion",
                complexity: Complexity::Medium,
                focus: Focus::Operational,
            }],
            strategic: vec![PlaybookEntry {
                title: "Stand up a retail-media practice before it commoditizes",
                description: "Apply the same automation advantage to retail media networks while that market still prices like a specialism.",
                impact: "First-mover share",
                complexity: Complexity::High,
                focus: Focus::Technology,
            }],
        },
        // SEO & organic search
        ServicePlaybook {
            service_id: "seo_search",
            bracket: ScoreBracket::Low,
            immediate: vec![PlaybookEntry {
                title: "Quantify AI-answer exposure per client",
                description: "Measure what share of each client's tracked queries now resolve in AI answers without a click, and brief clients before they read about it elsewhere.",
                impact: "Preempts churn conversations",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "Add answer-engine optimization to every retainer",
                description: "Structured data, citations, and entity work that earns placement inside AI answers is the nearest substitute for lost blue links.",
                impact: "Retainer defense",
                complexity: Complexity::Medium,
                focus: Focus::Technology,
            }],
            strategic: vec![PlaybookEntry {
                title: "Reposition from rankings vendor to organic-demand consultancy",
                description: "Attribution-backed organic revenue consulting survives interface shifts that rankings reports will not.",
                impact: "Pricing power",
                complexity: Complexity::High,
                focus: Focus::Financial,
            }],
        },
        ServicePlaybook {
            service_id: "seo_search",
            bracket: ScoreBracket::Mid,
            immediate: vec![PlaybookEntry {
                title: "Roll AEO pilots out from test accounts to the book",
                description: "The optimization work proven on pilot accounts should become standard scope at the next renewal cycle.",
                impact: "Offer consistency",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "Publish an AI-search visibility index for your verticals",
                description: "Proprietary benchmark data positions the practice as the authority buyers cite internally.",
                impact: "Inbound demand",
                complexity: Complexity::Medium,
                focus: Focus::Technology,
            }],
            strategic: vec![PlaybookEntry {
                title: "Price organic work against attributed revenue",
                description: "Move flagship accounts to fees tied to attributed organic revenue rather than deliverable volume.",
                impact: "Aligned economics",
                complexity: Complexity::High,
                focus: Focus::Financial,
            }],
        },
        ServicePlaybook {
            service_id: "seo_search",
            bracket: ScoreBracket::High,
            immediate: vec![PlaybookEntry {
                title: "Codify the AI-search methodology",
                description: "Write down the AEO playbook while it is still scarce expertise; it is your strongest current sales asset.",
                impact: "Repeatable wins",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "Train client teams on AI-surface strategy at consulting rates",
                description: "Enterprise clients will pay to upskill in-house teams on what you already practice.",
                impact: "High-margin services",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Build tooling that monitors AI-answer share of voice",
                description: "Recurring software revenue on top of the practice raises the multiple more than equivalent service revenue.",
                impact: "Valuation mix shift",
                complexity: Complexity::High,
                focus: Focus::Technology,
            }],
        },
        // Web design & development
        ServicePlaybook {
            service_id: "web_development",
            bracket: ScoreBracket::Low,
            immediate: vec![PlaybookEntry {
                title: "Adopt AI pair-programming across the build team",
                description: "Assistant tooling is the fastest available margin lever on build work; mandate it and measure cycle time.",
                impact: "20-40% faster builds",
                complexity: Complexity::Low,
                focus: Focus::Technology,
            }],
            short_term: vec![PlaybookEntry {
                title: "Fix scoping before faster builds destroy project margins",
                description: "Faster delivery at fixed day rates just cuts invoice size; re-scope around value and speed as a premium.",
                impact: "Margin protection",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Move from project builds to product retainers",
                description: "Continuous optimization retainers survive the collapse in one-off build pricing that site generators will force.",
                impact: "Recurring revenue base",
                complexity: Complexity::High,
                focus: Focus::Operational,
            }],
        },
        ServicePlaybook {
            service_id: "web_development",
            bracket: ScoreBracket::Mid,
            immediate: vec![PlaybookEntry {
                title: "Template the accelerated build pipeline",
                description: "Turn the assisted workflow into starter kits and component libraries so every project starts at 60% done.",
                impact: "Compounding efficiency",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "Bundle experimentation into every build contract",
                description: "Conversion and performance programs attach naturally post-launch and smooth project revenue.",
                impact: "Revenue per client up",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Specialize where generators can't follow",
                description: "Complex integrations, accessibility, and regulated industries resist one-click site generation; concentrate positioning there.",
                impact: "Insulated niche",
                complexity: Complexity::High,
                focus: Focus::Technology,
            }],
        },
        ServicePlaybook {
            service_id: "web_development",
            bracket: ScoreBracket::High,
            immediate: vec![PlaybookEntry {
                title: "Market the delivery speed advantage",
                description: "Your cycle times are a sales weapon; publish them with guarantees competitors cannot match.",
                impact: "Win-rate lift",
                complexity: Complexity::Low,
                focus: Focus::Operational,
            }],
            short_term: vec![PlaybookEntry {
                title: "Spin internal tooling into licensable assets",
                description: "Component systems and build accelerators developed for clients can license to agencies outside your market.",
                impact: "Asset-backed revenue",
                complexity: Complexity::Medium,
                focus: Focus::Financial,
            }],
            strategic: vec![PlaybookEntry {
                title: "Offer AI-feature builds as a dedicated practice",
                description: "Clients now want assistants and automation in their products; a dedicated practice captures that budget early.",
                impact: "New practice line",
                complexity: Complexity::High,
                focus: Focus::Technology,
            }],
        },
    ]
}

pub(crate) fn universal_recommendations() -> Vec<UniversalEntry> {
    vec![
        UniversalEntry {
            title: "Document the delivery playbook founders carry in their heads",
            description: "Acquirers discount hard for founder-dependent delivery; written, followed playbooks are the cheapest multiple lever available.",
            impact: "Reduces key-person discount",
            complexity: Complexity::Low,
            importance: Importance::Critical,
            focus: Focus::Operational,
            dimension: Dimension::Operational,
        },
        UniversalEntry {
            title: "Move the largest accounts onto contracted retainers",
            description: "Contracted recurring revenue is the single strongest input to the multiple; convert proven project clients first.",
            impact: "Direct multiple uplift",
            complexity: Complexity::Medium,
            importance: Importance::Critical,
            focus: Focus::Financial,
            dimension: Dimension::Financial,
        },
        UniversalEntry {
            title: "Stand up monthly service-line margin reporting",
            description: "You cannot defend pricing, kill unprofitable offers, or pass diligence without margin visibility by service.",
            impact: "Diligence readiness",
            complexity: Complexity::Medium,
            importance: Importance::High,
            focus: Focus::Financial,
            dimension: Dimension::Financial,
        },
        UniversalEntry {
            title: "Reduce single-client revenue concentration below 30%",
            description: "Concentration above a third of revenue triggers earn-out-heavy structures; rebalance pipeline spend toward new logos.",
            impact: "Cleaner deal structures",
            complexity: Complexity::High,
            importance: Importance::High,
            focus: Focus::Financial,
            dimension: Dimension::Financial,
        },
        UniversalEntry {
            title: "Appoint an accountable AI adoption owner",
            description: "Scattered experimentation never compounds; one owner with budget and quarterly targets turns tooling into margin.",
            impact: "Compounding efficiency",
            complexity: Complexity::Low,
            importance: Importance::Medium,
            focus: Focus::Technology,
            dimension: Dimension::AiReadiness,
        },
        UniversalEntry {
            title: "Integrate intake-to-invoice tooling",
            description: "A connected operations stack cuts admin drag and produces the clean data trail diligence teams ask for first.",
            impact: "Lower overhead",
            complexity: Complexity::High,
            importance: Importance::Medium,
            focus: Focus::Operational,
            dimension: Dimension::Operational,
        },
    ]
}

/// Fully generic backfill entries used when the per-service placeholders
/// still leave the list short of the minimum.
pub(crate) fn generic_fallbacks() -> Vec<PlaybookEntry> {
    vec![
        PlaybookEntry {
            title: "Run a quarterly AI exposure review",
            description: "Reassess every service line against current tooling capability each quarter and retire assumptions that no longer hold.",
            impact: "Early warning",
            complexity: Complexity::Low,
            focus: Focus::General,
        },
        PlaybookEntry {
            title: "Benchmark pricing against AI-native competitors",
            description: "Price checks against automation-first rivals reveal where your rate card is quietly underwater.",
            impact: "Pricing intelligence",
            complexity: Complexity::Low,
            focus: Focus::General,
        },
        PlaybookEntry {
            title: "Pilot one AI-native service offer this quarter",
            description: "A small productized offer builds the sales motion and case studies ahead of demand.",
            impact: "Option value",
            complexity: Complexity::Medium,
            focus: Focus::General,
        },
        PlaybookEntry {
            title: "Brief the leadership team on valuation drivers",
            description: "Partners who understand what moves the multiple make better scoping, pricing, and hiring calls day to day.",
            impact: "Aligned decisions",
            complexity: Complexity::Low,
            focus: Focus::General,
        },
    ]
}
