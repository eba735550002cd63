mod tables;

use super::catalog::QuestionCatalog;
use super::domain::{ServiceDefinition, ServiceSelection};
use super::scoring::ScoreBundle;
use serde::{Deserialize, Serialize};
use tables::{PlaybookEntry, UniversalEntry};

/// Implementation effort attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Immediate,
    ShortTerm,
    Strategic,
}

impl Timeframe {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Next 30 days",
            Self::ShortTerm => "This quarter",
            Self::Strategic => "6-12 months",
        }
    }
}

/// Importance of a universal recommendation; declaration order is ascending
/// so the derived ordering sorts critical highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Importance {
    Low,
    Medium,
    High,
    Critical,
}

/// What a recommendation chiefly moves; drives the priority rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Financial,
    Operational,
    Technology,
    General,
}

impl Focus {
    pub const fn priority_rank(self) -> u8 {
        match self {
            Self::Financial => 1,
            Self::Operational => 2,
            Self::Technology => 3,
            Self::General => 4,
        }
    }
}

/// Overall-score bracket selecting which playbook variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBracket {
    Low,
    Mid,
    High,
}

impl ScoreBracket {
    pub const fn for_overall(overall: u8) -> Self {
        if overall < 40 {
            Self::Low
        } else if overall <= 70 {
            Self::Mid
        } else {
            Self::High
        }
    }
}

/// One ranked recommendation row. Generated fresh per computation and never
/// mutated afterwards; `service` is `None` for agency-wide advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub service: Option<String>,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub complexity: Complexity,
    pub focus: Focus,
    pub timeframe: Timeframe,
    pub timeframe_label: String,
    pub priority_rank: u8,
}

/// Builds the ranked recommendation list for one assessment.
pub struct RecommendationEngine<'a> {
    catalog: &'a QuestionCatalog,
    minimum: usize,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a QuestionCatalog, minimum: usize) -> Self {
        Self { catalog, minimum }
    }

    pub fn generate(
        &self,
        scores: &ScoreBundle,
        selections: &[ServiceSelection],
    ) -> Vec<Recommendation> {
        let bracket = ScoreBracket::for_overall(scores.overall);
        let playbooks = tables::service_playbooks();
        let mut out = Vec::new();

        for selection in selections {
            let Some(service) = self.catalog.service(&selection.service_id) else {
                continue;
            };

            match playbooks
                .iter()
                .find(|playbook| playbook.service_id == service.id && playbook.bracket == bracket)
            {
                Some(playbook) => {
                    push_entries(&mut out, service.id, &playbook.immediate, Timeframe::Immediate);
                    push_entries(&mut out, service.id, &playbook.short_term, Timeframe::ShortTerm);
                    push_entries(&mut out, service.id, &playbook.strategic, Timeframe::Strategic);
                }
                // No playbook for this service: substitute the placeholder
                // rather than dropping the service from the report.
                None => out.push(service_placeholder(service)),
            }
        }

        out.extend(self.ordered_universal(scores));
        self.fill_to_minimum(&mut out, selections);

        // Stable: ties keep service/timeframe insertion order.
        out.sort_by_key(|recommendation| recommendation.priority_rank);
        out
    }

    /// Universal entries sorted by importance descending, ties broken by the
    /// computed relevance descending.
    fn ordered_universal(&self, scores: &ScoreBundle) -> Vec<Recommendation> {
        let mut entries: Vec<(Importance, i32, Recommendation)> = tables::universal_recommendations()
            .into_iter()
            .map(|entry| {
                let relevance = relevance_score(&entry, scores);
                let recommendation = universal_recommendation(&entry);
                (entry.importance, relevance, recommendation)
            })
            .collect();

        entries.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
        entries
            .into_iter()
            .map(|(_, _, recommendation)| recommendation)
            .collect()
    }

    fn fill_to_minimum(&self, out: &mut Vec<Recommendation>, selections: &[ServiceSelection]) {
        if selections.is_empty() {
            return;
        }

        // One placeholder lap over the selected services, then generic
        // fallbacks, until the minimum is met.
        for selection in selections {
            if out.len() >= self.minimum {
                return;
            }
            if let Some(service) = self.catalog.service(&selection.service_id) {
                out.push(service_placeholder(service));
            }
        }

        let fallbacks = tables::generic_fallbacks();
        let mut index = 0;
        while out.len() < self.minimum {
            let entry = &fallbacks[index % fallbacks.len()];
            out.push(generic_recommendation(entry));
            index += 1;
        }
    }
}

fn push_entries(
    out: &mut Vec<Recommendation>,
    service_id: &str,
    entries: &[PlaybookEntry],
    timeframe: Timeframe,
) {
    for entry in entries {
        out.push(Recommendation {
            service: Some(service_id.to_string()),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            impact: entry.impact.to_string(),
            complexity: entry.complexity,
            focus: entry.focus,
            timeframe,
            timeframe_label: timeframe.label().to_string(),
            priority_rank: entry.focus.priority_rank(),
        });
    }
}

fn universal_recommendation(entry: &UniversalEntry) -> Recommendation {
    Recommendation {
        service: None,
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        impact: entry.impact.to_string(),
        complexity: entry.complexity,
        focus: entry.focus,
        timeframe: Timeframe::ShortTerm,
        timeframe_label: Timeframe::ShortTerm.label().to_string(),
        priority_rank: entry.focus.priority_rank(),
    }
}

fn generic_recommendation(entry: &PlaybookEntry) -> Recommendation {
    Recommendation {
        service: None,
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        impact: entry.impact.to_string(),
        complexity: entry.complexity,
        focus: entry.focus,
        timeframe: Timeframe::ShortTerm,
        timeframe_label: Timeframe::ShortTerm.label().to_string(),
        priority_rank: entry.focus.priority_rank(),
    }
}

fn service_placeholder(service: &ServiceDefinition) -> Recommendation {
    Recommendation {
        service: Some(service.id.to_string()),
        title: format!("Build an AI response plan for {}", service.name),
        description: format!(
            "{} carries {} disruption risk on a {} horizon; name an owner, baseline current delivery cost, and set a quarterly adaptation checkpoint.",
            service.name,
            service.risk.label().to_ascii_lowercase(),
            service.disruption_timeline
        ),
        impact: "Protects the revenue share this service carries".to_string(),
        complexity: Complexity::Medium,
        focus: Focus::General,
        timeframe: Timeframe::ShortTerm,
        timeframe_label: Timeframe::ShortTerm.label().to_string(),
        priority_rank: Focus::General.priority_rank(),
    }
}

/// Struggling dimensions favor low-complexity moves; strong ones can absorb
/// high-complexity programs.
fn relevance_score(entry: &UniversalEntry, scores: &ScoreBundle) -> i32 {
    let dimension_score = scores.dimension(entry.dimension);
    let mut relevance = 50;

    if dimension_score < 50 {
        match entry.complexity {
            Complexity::Low => relevance += 15,
            Complexity::Medium => {}
            Complexity::High => relevance -= 10,
        }
    } else {
        match entry.complexity {
            Complexity::Low => relevance -= 5,
            Complexity::Medium => {}
            Complexity::High => relevance += 10,
        }
    }

    relevance
}
