mod config;
mod format;
mod handle;
mod series;
mod theme;

pub use config::{COMPACT_USD_TICKS, ChartConfig, ChartOptions};
pub use format::{format_compact_usd, format_currency_whole};
pub use handle::{
    ChartHandle, ChartInstance, ChartRenderer, ChartTransition, DocumentChart, DocumentRenderer,
    apply_to_chart,
};
pub use series::{ChartSeries, Dataset, STACK_GROUP, present};
pub use theme::{Palette, Theme};
