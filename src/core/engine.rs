use super::types::{CalculatorInputs, MAX_YEARS, Projection, ProjectionSummary, YearlyPoint};

const MONTHS_PER_YEAR: u64 = 12;

/// Month-by-month compounding projection.
///
/// Each month the contribution is added before that month's interest is applied,
/// so contributions earn interest in the month they are made. Nothing is rounded
/// here; display rounding happens in the chart adapter.
pub fn project(inputs: &CalculatorInputs) -> Projection {
    let monthly_rate = inputs.annual_rate_percent / 100.0 / 12.0;
    let total_months = inputs.total_months();

    let mut balance = inputs.initial;
    let mut total_invested = inputs.initial;
    let mut points = Vec::with_capacity(inputs.years.min(MAX_YEARS) as usize);

    for month in 1..=total_months {
        balance = (balance + inputs.monthly) * (1.0 + monthly_rate);
        total_invested += inputs.monthly;

        if month % MONTHS_PER_YEAR == 0 || month == total_months {
            // month <= years * 12, so the year index fits back into u32.
            points.push(YearlyPoint {
                year: month.div_ceil(MONTHS_PER_YEAR) as u32,
                cumulative_contribution: total_invested,
                cumulative_interest: balance - total_invested,
            });
        }
    }

    Projection {
        summary: ProjectionSummary {
            total_invested,
            total_interest: balance - total_invested,
            final_value: balance,
        },
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn inputs(initial: f64, monthly: f64, rate: f64, years: u32) -> CalculatorInputs {
        CalculatorInputs {
            initial,
            monthly,
            annual_rate_percent: rate,
            years,
        }
    }

    #[test]
    fn default_scenario_matches_accrual_loop() {
        let projection = project(&inputs(1_000.0, 250.0, 7.0, 20));

        assert_eq!(projection.points.len(), 20);
        let last = projection.points.last().expect("twenty points");
        assert_eq!(last.year, 20);
        assert_approx(last.cumulative_contribution, 61_000.0);
        assert_approx(projection.summary.total_invested, 61_000.0);
        assert!((projection.summary.final_value - 135_030.088_517_6).abs() < 1e-3);
        assert_approx(
            last.cumulative_interest,
            projection.summary.final_value - projection.summary.total_invested,
        );
    }

    #[test]
    fn oracle_first_two_years_match_hand_calculation() {
        let projection = project(&inputs(1_000.0, 250.0, 7.0, 2));

        assert_eq!(projection.points[0].year, 1);
        assert_approx(projection.points[0].cumulative_contribution, 4_000.0);
        assert!((projection.points[0].cumulative_interest - 188.508_923_48).abs() < 1e-6);
        assert_eq!(projection.points[1].year, 2);
        assert_approx(projection.points[1].cumulative_contribution, 7_000.0);
        assert!((projection.points[1].cumulative_interest - 607.515_414_85).abs() < 1e-6);
    }

    #[test]
    fn contribution_earns_interest_in_the_month_it_is_made() {
        let projection = project(&inputs(0.0, 100.0, 12.0, 1));
        // (0 + 100) * 1.01 compounded over twelve deposits.
        assert!((projection.summary.final_value - 1_280.932_804_33).abs() < 1e-6);
        assert_approx(projection.summary.total_invested, 1_200.0);
    }

    #[test]
    fn zero_years_returns_initial_with_no_points() {
        let projection = project(&inputs(2_500.0, 400.0, 9.0, 0));

        assert!(projection.points.is_empty());
        assert_eq!(projection.summary.total_invested, 2_500.0);
        assert_eq!(projection.summary.total_interest, 0.0);
        assert_eq!(projection.summary.final_value, 2_500.0);
    }

    #[test]
    fn max_horizon_emits_one_point_per_year() {
        let projection = project(&inputs(1_000.0, 250.0, 7.0, MAX_YEARS));
        assert_eq!(projection.points.len(), MAX_YEARS as usize);
        assert_eq!(projection.points.last().map(|p| p.year), Some(MAX_YEARS));
    }

    #[test]
    fn zero_rate_has_no_interest() {
        let projection = project(&inputs(500.0, 50.0, 0.0, 3));
        assert_approx(projection.summary.final_value, 500.0 + 50.0 * 36.0);
        for point in &projection.points {
            assert_approx(point.cumulative_interest, 0.0);
        }
    }

    #[test]
    fn no_money_in_means_no_money_out() {
        for rate in [-5.0, 0.0, 3.5, 40.0] {
            let projection = project(&inputs(0.0, 0.0, rate, 10));
            assert_eq!(projection.summary.final_value, 0.0);
            assert!(projection.points.iter().all(|p| p.cumulative_interest == 0.0));
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_interest_is_final_value_minus_invested(
            initial in 0.0f64..1_000_000.0,
            monthly in 0.0f64..10_000.0,
            rate in -20.0f64..30.0,
            years in 0u32..60,
        ) {
            let summary = project(&inputs(initial, monthly, rate, years)).summary;
            prop_assert_eq!(summary.total_interest, summary.final_value - summary.total_invested);
        }

        #[test]
        fn prop_non_negative_rate_never_loses_money(
            initial in 0.0f64..1_000_000.0,
            monthly in 0.0f64..10_000.0,
            rate in 0.0f64..30.0,
            years in 0u32..60,
        ) {
            let summary = project(&inputs(initial, monthly, rate, years)).summary;
            prop_assert!(summary.final_value >= summary.total_invested);
        }

        #[test]
        fn prop_one_point_per_year(
            initial in 0.0f64..100_000.0,
            monthly in 0.0f64..5_000.0,
            rate in -10.0f64..20.0,
            years in 0u32..80,
        ) {
            let points = project(&inputs(initial, monthly, rate, years)).points;
            prop_assert_eq!(points.len(), years as usize);
            for (idx, point) in points.iter().enumerate() {
                prop_assert_eq!(point.year, idx as u32 + 1);
            }
        }

        #[test]
        fn prop_higher_monthly_never_reduces_final_value(
            initial in 0.0f64..100_000.0,
            monthly in 0.0f64..5_000.0,
            extra in 0.0f64..5_000.0,
            rate in 0.0f64..25.0,
            years in 1u32..50,
        ) {
            let base = project(&inputs(initial, monthly, rate, years)).summary;
            let more = project(&inputs(initial, monthly + extra, rate, years)).summary;
            prop_assert!(more.final_value >= base.final_value);
        }
    }
}
