use serde::Serialize;

use super::series::ChartSeries;
use super::theme::Theme;

/// Tick formatter name understood by the client; mirrors `format_compact_usd`.
pub const COMPACT_USD_TICKS: &str = "compact-usd";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartSeries,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn bar(data: ChartSeries, theme: Theme) -> Self {
        Self {
            kind: "bar",
            data,
            options: ChartOptions::for_theme(theme),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub color: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub stacked: bool,
    pub grid: Grid,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

impl ChartOptions {
    pub fn for_theme(theme: Theme) -> Self {
        let palette = theme.palette();
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    position: "bottom",
                    labels: LegendLabels {
                        color: palette.text,
                        font: Font { size: 12 },
                    },
                },
                tooltip: Tooltip {
                    mode: "index",
                    intersect: false,
                },
            },
            scales: Scales {
                x: Axis {
                    stacked: true,
                    grid: Grid {
                        color: "transparent",
                    },
                    ticks: Ticks {
                        color: palette.text,
                        format: None,
                    },
                },
                y: Axis {
                    stacked: true,
                    grid: Grid {
                        color: palette.grid,
                    },
                    ticks: Ticks {
                        color: palette.text,
                        format: Some(COMPACT_USD_TICKS),
                    },
                },
            },
        }
    }
}
