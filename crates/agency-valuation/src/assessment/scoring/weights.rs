use super::super::domain::{AgencyType, Dimension};
use std::collections::BTreeMap;

/// Weight map used when combining dimension scores into an overall score.
/// Weights only need to be positive; the averaging rule divides by the sum
/// of the weights actually used.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionWeights {
    entries: BTreeMap<Dimension, f32>,
}

impl DimensionWeights {
    pub fn standard() -> Self {
        Self {
            entries: BTreeMap::from([
                (Dimension::Operational, 2.0),
                (Dimension::Financial, 2.5),
                (Dimension::AiReadiness, 2.0),
            ]),
        }
    }

    /// Default weights with the agency-type override applied. An override
    /// replaces the weight of each dimension it names; unnamed dimensions
    /// keep their default.
    pub fn for_agency_type(agency_type: Option<AgencyType>) -> Self {
        let mut weights = Self::standard();
        if let Some(agency_type) = agency_type {
            for (dimension, weight) in agency_overrides(agency_type) {
                weights.entries.insert(*dimension, *weight);
            }
        }
        weights
    }

    pub fn get(&self, dimension: Dimension) -> f32 {
        self.entries.get(&dimension).copied().unwrap_or(0.0)
    }
}

fn agency_overrides(agency_type: AgencyType) -> &'static [(Dimension, f32)] {
    match agency_type {
        AgencyType::FullService => &[],
        AgencyType::Creative => &[
            (Dimension::Operational, 2.5),
            (Dimension::AiReadiness, 1.5),
        ],
        AgencyType::MediaBuying => &[(Dimension::Financial, 3.0)],
        AgencyType::PerformanceMarketing => &[(Dimension::AiReadiness, 2.5)],
        AgencyType::PublicRelations => &[(Dimension::Operational, 2.25)],
    }
}
