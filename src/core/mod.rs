mod engine;
mod types;

pub use engine::project;
pub use types::{
    CalculatorInputs, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_INITIAL, DEFAULT_MONTHLY,
    DEFAULT_YEARS, MAX_YEARS, Projection, ProjectionSummary, YearlyPoint, years_from_f64,
};
