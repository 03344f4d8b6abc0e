use crate::core::CalculatorInputs;

/// Query string that reproduces `inputs`, using the same keys the project
/// endpoint accepts.
pub fn to_query(inputs: &CalculatorInputs) -> String {
    format!(
        "initial={}&monthly={}&rate={}&years={}",
        inputs.initial, inputs.monthly, inputs.annual_rate_percent, inputs.years
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_render_without_trailing_zeros() {
        assert_eq!(
            to_query(&CalculatorInputs::default()),
            "initial=1000&monthly=250&rate=7&years=20"
        );
    }

    #[test]
    fn fractional_values_are_kept() {
        let inputs = CalculatorInputs {
            initial: 1_500.5,
            monthly: 0.0,
            annual_rate_percent: 6.25,
            years: 3,
        };
        assert_eq!(to_query(&inputs), "initial=1500.5&monthly=0&rate=6.25&years=3");
    }
}
