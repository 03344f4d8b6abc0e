use serde::Serialize;

use super::theme::Theme;
use crate::core::YearlyPoint;
use crate::error::ChartError;
use crate::i18n::{KEY_CONTRIBUTIONS, KEY_INTEREST, KEY_YEAR, Translate};

/// Both datasets share one stack so each bar totals the balance for that year.
pub const STACK_GROUP: &str = "stack1";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub stack: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    /// Every dataset must line up with the labels index for index.
    pub fn validate(&self) -> Result<(), ChartError> {
        for dataset in &self.datasets {
            if dataset.data.len() != self.labels.len() {
                return Err(ChartError::LengthMismatch {
                    dataset: dataset.label.clone(),
                    labels: self.labels.len(),
                    data: dataset.data.len(),
                });
            }
        }
        Ok(())
    }
}

/// Map yearly points to the contributions and interest datasets, in that order.
///
/// Values are rounded to whole units here; the engine keeps full precision.
pub fn present(points: &[YearlyPoint], theme: Theme, translator: &impl Translate) -> ChartSeries {
    let palette = theme.palette();
    let year_word = translator.translate(KEY_YEAR);

    let labels = points
        .iter()
        .map(|point| format!("{year_word} {}", point.year))
        .collect();
    let contributions = points
        .iter()
        .map(|point| point.cumulative_contribution.round())
        .collect();
    let interest = points
        .iter()
        .map(|point| point.cumulative_interest.round())
        .collect();

    ChartSeries {
        labels,
        datasets: vec![
            Dataset {
                label: translator.translate(KEY_CONTRIBUTIONS),
                data: contributions,
                background_color: palette.contributions.to_string(),
                stack: STACK_GROUP.to_string(),
            },
            Dataset {
                label: translator.translate(KEY_INTEREST),
                data: interest,
                background_color: palette.interest.to_string(),
                stack: STACK_GROUP.to_string(),
            },
        ],
    }
}
