use tracing::{debug, info};

use crate::chart::{ChartHandle, ChartRenderer, ChartSeries, ChartTransition, Theme, present};
use crate::core::{CalculatorInputs, Projection, ProjectionSummary, project};
use crate::error::ChartError;
use crate::i18n::Translate;

/// One calculator on a page: its inputs, theme, and the chart it draws into.
///
/// Every change handler recomputes the projection and redraws synchronously.
pub struct CalculatorWidget<T, R: ChartRenderer> {
    translator: T,
    renderer: R,
    theme: Theme,
    inputs: CalculatorInputs,
    projection: Projection,
    series: ChartSeries,
    chart: ChartHandle<R::Instance>,
}

impl<T: Translate, R: ChartRenderer> CalculatorWidget<T, R> {
    /// Starts from the default inputs. Nothing is drawn until the first handler
    /// or [`render`](Self::render) call.
    pub fn new(translator: T, renderer: R, theme: Theme) -> Self {
        let inputs = CalculatorInputs::default();
        let projection = project(&inputs);
        let series = present(&projection.points, theme, &translator);
        Self {
            translator,
            renderer,
            theme,
            inputs,
            projection,
            series,
            chart: ChartHandle::Absent,
        }
    }

    pub fn render(&mut self) -> Result<ChartTransition, ChartError> {
        self.projection = project(&self.inputs);
        self.series = present(&self.projection.points, self.theme, &self.translator);
        debug!(
            years = self.inputs.years,
            final_value = self.projection.summary.final_value,
            "recomputed projection"
        );

        let transition = self
            .chart
            .apply(&mut self.renderer, self.series.clone(), self.theme)?;
        if transition == ChartTransition::Created {
            info!(theme = ?self.theme, "chart created");
        }
        Ok(transition)
    }

    pub fn on_inputs_changed(
        &mut self,
        inputs: CalculatorInputs,
    ) -> Result<&Projection, ChartError> {
        self.inputs = inputs.sanitized();
        self.render()?;
        Ok(&self.projection)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<ChartTransition, ChartError> {
        self.theme = theme;
        self.render()
    }

    pub fn toggle_theme(&mut self) -> Result<ChartTransition, ChartError> {
        self.set_theme(self.theme.toggled())
    }

    /// Swap the text lookup, e.g. after a language change, and relabel the chart.
    pub fn set_translator(&mut self, translator: T) -> Result<ChartTransition, ChartError> {
        self.translator = translator;
        self.render()
    }

    pub fn inputs(&self) -> CalculatorInputs {
        self.inputs
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn summary(&self) -> ProjectionSummary {
        self.projection.summary
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn chart(&self) -> &ChartHandle<R::Instance> {
        &self.chart
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
