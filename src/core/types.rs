use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL: f64 = 1_000.0;
pub const DEFAULT_MONTHLY: f64 = 250.0;
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 7.0;
pub const DEFAULT_YEARS: u32 = 20;
/// Longest horizon a projection will run; longer requests are clamped.
pub const MAX_YEARS: u32 = 200;

/// Calculator inputs as supplied by the UI layer.
///
/// The engine trusts these values; callers run [`CalculatorInputs::sanitized`]
/// first when the numbers come from a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    pub initial: f64,
    pub monthly: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL,
            monthly: DEFAULT_MONTHLY,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            years: DEFAULT_YEARS,
        }
    }
}

impl CalculatorInputs {
    /// Clamp amounts to non-negative finite numbers, the rate to a finite one
    /// and the horizon to [`MAX_YEARS`].
    pub fn sanitized(self) -> Self {
        Self {
            initial: non_negative_or_zero(self.initial),
            monthly: non_negative_or_zero(self.monthly),
            annual_rate_percent: if self.annual_rate_percent.is_finite() {
                self.annual_rate_percent
            } else {
                0.0
            },
            years: self.years.min(MAX_YEARS),
        }
    }

    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12
    }
}

/// Year counts arrive as floats from forms and query strings; negative or
/// non-finite values collapse to a zero-month projection.
pub fn years_from_f64(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(u32::MAX as f64) as u32
}

fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_invested: f64,
    pub total_interest: f64,
    pub final_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPoint {
    /// 1-based year index, `ceil(month / 12)`.
    pub year: u32,
    pub cumulative_contribution: f64,
    pub cumulative_interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub summary: ProjectionSummary,
    pub points: Vec<YearlyPoint>,
}
