use serde::Serialize;

use super::config::{ChartConfig, ChartOptions};
use super::series::ChartSeries;
use super::theme::Theme;
use crate::error::ChartError;

/// A live chart owned by some charting backend.
pub trait ChartInstance {
    fn config(&self) -> &ChartConfig;
    fn config_mut(&mut self) -> &mut ChartConfig;
    /// Redraw after `config_mut` edits.
    fn update(&mut self);
}

pub trait ChartRenderer {
    type Instance: ChartInstance;

    fn construct(&mut self, config: ChartConfig) -> Self::Instance;
}

#[derive(Debug)]
pub enum ChartHandle<I> {
    Absent,
    Present(I),
}

impl<I> Default for ChartHandle<I> {
    fn default() -> Self {
        ChartHandle::Absent
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChartTransition {
    Created,
    Updated,
}

impl<I: ChartInstance> ChartHandle<I> {
    pub fn is_present(&self) -> bool {
        matches!(self, ChartHandle::Present(_))
    }

    pub fn instance(&self) -> Option<&I> {
        match self {
            ChartHandle::Absent => None,
            ChartHandle::Present(instance) => Some(instance),
        }
    }

    /// Create the chart on first use, otherwise update the existing one in place.
    pub fn apply<R>(
        &mut self,
        renderer: &mut R,
        series: ChartSeries,
        theme: Theme,
    ) -> Result<ChartTransition, ChartError>
    where
        R: ChartRenderer<Instance = I>,
    {
        series.validate()?;
        if let ChartHandle::Present(instance) = self {
            update_in_place(instance, series, theme)?;
            return Ok(ChartTransition::Updated);
        }
        *self = ChartHandle::Present(renderer.construct(ChartConfig::bar(series, theme)));
        Ok(ChartTransition::Created)
    }
}

/// Owned-handle form of [`ChartHandle::apply`]. The handle comes back on
/// failure too, so a present chart is never lost to a rejected series.
pub fn apply_to_chart<R: ChartRenderer>(
    mut handle: ChartHandle<R::Instance>,
    renderer: &mut R,
    series: ChartSeries,
    theme: Theme,
) -> Result<ChartHandle<R::Instance>, (ChartHandle<R::Instance>, ChartError)> {
    match handle.apply(renderer, series, theme) {
        Ok(_) => Ok(handle),
        Err(err) => Err((handle, err)),
    }
}

fn update_in_place<I: ChartInstance>(
    instance: &mut I,
    series: ChartSeries,
    theme: Theme,
) -> Result<(), ChartError> {
    let existing = instance.config().data.datasets.len();
    if existing != series.datasets.len() {
        return Err(ChartError::DatasetCountMismatch {
            existing,
            incoming: series.datasets.len(),
        });
    }

    let config = instance.config_mut();
    config.data.labels = series.labels;
    for (target, source) in config.data.datasets.iter_mut().zip(series.datasets) {
        target.label = source.label;
        target.data = source.data;
        target.background_color = source.background_color;
    }
    config.options = ChartOptions::for_theme(theme);
    instance.update();
    Ok(())
}

/// Chart kept as a serializable configuration document for a client-side
/// chart library. `revision` counts redraws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentChart {
    pub id: u64,
    pub revision: u64,
    pub config: ChartConfig,
}

impl ChartInstance for DocumentChart {
    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    fn update(&mut self) {
        self.revision += 1;
    }
}

#[derive(Debug, Default)]
pub struct DocumentRenderer {
    constructed: u64,
}

impl DocumentRenderer {
    pub fn constructed(&self) -> u64 {
        self.constructed
    }
}

impl ChartRenderer for DocumentRenderer {
    type Instance = DocumentChart;

    fn construct(&mut self, config: ChartConfig) -> DocumentChart {
        self.constructed += 1;
        DocumentChart {
            id: self.constructed,
            revision: 0,
            config,
        }
    }
}
