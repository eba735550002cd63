use super::domain::Dimension;
use super::scoring::ScoreBundle;
use super::EngineConfig;
use serde::{Deserialize, Serialize};

/// Classification tiers keyed on the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationTier {
    Premium,
    Strong,
    Average,
    Weak,
}

impl ValuationTier {
    pub const fn for_overall(overall: u8) -> Self {
        if overall >= 70 {
            Self::Premium
        } else if overall >= 60 {
            Self::Strong
        } else if overall >= 50 {
            Self::Average
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Premium => "Premium - commands top-of-market multiples",
            Self::Strong => "Strong - above-average acquisition appeal",
            Self::Average => "Average - market-rate multiples with conditions",
            Self::Weak => "Weak - value concentrated in client list, not operations",
        }
    }
}

/// Simulated M&A outcome for one assessment. `multiple_low` never drops
/// below 1.0 and never exceeds `multiple_high`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub multiple_low: f64,
    pub multiple_high: f64,
    pub tier: ValuationTier,
    pub tier_label: String,
    pub ebit_impact_percent: f64,
    pub current_ebit: f64,
    pub ebit_uplift: f64,
    pub valuation_uplift: f64,
}

/// Improvement headroom is capped at 30% of current EBIT.
const MAX_EBIT_IMPACT_PERCENT: f64 = 30.0;

/// Base multiple pairs keyed on the highest band both the financial and
/// operational scores clear, best band first.
const MULTIPLE_BANDS: [(u8, f64, f64); 8] = [
    (80, 6.0, 8.0),
    (70, 5.0, 7.0),
    (60, 4.5, 6.0),
    (50, 4.0, 5.0),
    (40, 3.0, 4.0),
    (30, 2.5, 3.5),
    (20, 2.0, 3.0),
    (0, 1.0, 1.5),
];

fn base_multiples(financial: u8, operational: u8) -> (f64, f64) {
    for (threshold, low, high) in MULTIPLE_BANDS {
        if financial >= threshold && operational >= threshold {
            return (low, high);
        }
    }
    (1.0, 1.5)
}

fn step_multiplier(overall: u8) -> f64 {
    if overall < 30 {
        1.0
    } else if overall < 50 {
        1.2
    } else {
        1.5
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn calculate(scores: &ScoreBundle, revenue: f64, config: &EngineConfig) -> ValuationResult {
    let financial = scores.dimension(Dimension::Financial);
    let operational = scores.dimension(Dimension::Operational);
    let overall = scores.overall;

    let (base_low, base_high) = base_multiples(financial, operational);

    let influence = (f64::from(financial) * 0.6 + f64::from(operational) * 0.4) / 100.0;
    let step = step_multiplier(overall);

    let mut low = base_low * influence * step;
    let mut high = base_high * influence * step;

    if overall < 25 {
        low = low.min(2.0);
        high = high.min(2.5);
    }
    if overall < 20 {
        low = low.min(1.0);
        high = high.min(1.5);
    }

    low = low.max(1.0);
    high = high.max(1.5);

    low = round_tenth(low);
    high = round_tenth(high);
    low = low.min(high);

    let improvement = f64::from(100u8.saturating_sub(overall)) / 100.0;
    let ebit_impact_percent = (improvement * MAX_EBIT_IMPACT_PERCENT).min(MAX_EBIT_IMPACT_PERCENT);

    let revenue_usable = revenue.is_finite() && revenue > 0.0;
    let current_ebit = if revenue_usable {
        revenue * config.assumed_ebit_margin
    } else {
        0.0
    };
    let ebit_uplift = current_ebit * ebit_impact_percent / 100.0;
    // Uplift is valued at the improved multiple, not the current one.
    let valuation_uplift = ebit_uplift * high;

    let tier = ValuationTier::for_overall(overall);

    ValuationResult {
        multiple_low: low,
        multiple_high: high,
        tier,
        tier_label: tier.label().to_string(),
        ebit_impact_percent,
        current_ebit,
        ebit_uplift,
        valuation_uplift,
    }
}
