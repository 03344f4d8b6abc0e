use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use super::MAX_YEARS;
use crate::chart::{
    ChartConfig, ChartInstance, DocumentRenderer, Theme, format_compact_usd, format_currency_whole,
};
use crate::core::{
    CalculatorInputs, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_INITIAL, DEFAULT_MONTHLY,
    DEFAULT_YEARS, ProjectionSummary, YearlyPoint, years_from_f64,
};
use crate::error::{Invest101Error, Result};
use crate::i18n::Catalog;
use crate::widget::CalculatorWidget;

#[derive(Parser, Debug)]
#[command(
    name = "invest101",
    about = "Compound interest calculator (monthly compounding, stacked contribution/interest chart)"
)]
pub struct Cli {
    #[arg(long, short, global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API
    Serve(ServeArgs),
    /// Print one projection
    Project(ProjectArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliTheme {
    Light,
    Dark,
}

impl From<CliTheme> for Theme {
    fn from(value: CliTheme) -> Self {
        match value {
            CliTheme::Light => Theme::Light,
            CliTheme::Dark => Theme::Dark,
        }
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, default_value = "en", help = "Initial chart label language")]
    pub lang: String,
    #[arg(long, value_enum, default_value_t = CliTheme::Light)]
    pub theme: CliTheme,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[arg(long, default_value_t = DEFAULT_INITIAL, help = "Initial deposit")]
    pub initial: f64,
    #[arg(long, default_value_t = DEFAULT_MONTHLY, help = "Monthly contribution")]
    pub monthly: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_ANNUAL_RATE_PERCENT,
        allow_hyphen_values = true,
        help = "Annual interest rate in percent, e.g. 7"
    )]
    pub rate: f64,
    #[arg(long, default_value_t = DEFAULT_YEARS as f64, help = "Time horizon in years")]
    pub years: f64,
    #[arg(long, value_enum, default_value_t = CliTheme::Light)]
    pub theme: CliTheme,
    #[arg(long, default_value = "en")]
    pub lang: String,
    #[arg(long, help = "Print JSON instead of a table")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectOutput<'a> {
    inputs: CalculatorInputs,
    summary: ProjectionSummary,
    points: &'a [YearlyPoint],
    chart: &'a ChartConfig,
}

pub fn build_inputs(args: &ProjectArgs) -> std::result::Result<CalculatorInputs, String> {
    for (name, value) in [
        ("--initial", args.initial),
        ("--monthly", args.monthly),
        ("--rate", args.rate),
        ("--years", args.years),
    ] {
        if !value.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
    }

    let years = years_from_f64(args.years);
    if years > MAX_YEARS {
        return Err(format!("--years must be <= {MAX_YEARS}"));
    }

    Ok(CalculatorInputs {
        initial: args.initial,
        monthly: args.monthly,
        annual_rate_percent: args.rate,
        years,
    }
    .sanitized())
}

pub fn run_project(args: &ProjectArgs) -> Result<String> {
    let inputs = build_inputs(args).map_err(|message| Invest101Error::InvalidInput { message })?;
    let mut widget = CalculatorWidget::new(
        Catalog::bundled(&args.lang)?,
        DocumentRenderer::default(),
        args.theme.into(),
    );
    widget.on_inputs_changed(inputs)?;

    let Some(chart) = widget.chart().instance() else {
        return Err(Invest101Error::InvalidInput {
            message: "chart was not rendered".to_string(),
        });
    };

    if args.json {
        let output = ProjectOutput {
            inputs: widget.inputs(),
            summary: widget.summary(),
            points: &widget.projection().points,
            chart: chart.config(),
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(render_table(widget.summary(), chart.config()))
}

fn render_table(summary: ProjectionSummary, chart: &ChartConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Total invested  {}\n",
        format_currency_whole(summary.total_invested)
    ));
    out.push_str(&format!(
        "Total interest  {}\n",
        format_currency_whole(summary.total_interest)
    ));
    out.push_str(&format!(
        "Final value     {}\n",
        format_currency_whole(summary.final_value)
    ));

    let series = &chart.data;
    if series.labels.is_empty() {
        return out;
    }
    out.push('\n');
    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for (idx, label) in series.labels.iter().enumerate() {
        out.push_str(&format!("{label:<label_width$}"));
        for dataset in &series.datasets {
            out.push_str(&format!(
                "  {} {:>6}",
                dataset.label,
                format_compact_usd(dataset.data[idx])
            ));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args() -> ProjectArgs {
        ProjectArgs {
            initial: DEFAULT_INITIAL,
            monthly: DEFAULT_MONTHLY,
            rate: DEFAULT_ANNUAL_RATE_PERCENT,
            years: DEFAULT_YEARS as f64,
            theme: CliTheme::Light,
            lang: "en".to_string(),
            json: false,
        }
    }

    #[test]
    fn cli_parses_project_flags() {
        let cli = Cli::try_parse_from([
            "invest101", "project", "--initial", "5000", "--rate", "-1.5", "--years", "3",
            "--theme", "dark", "--json",
        ])
        .expect("valid args");

        let Command::Project(args) = cli.command else {
            panic!("expected project subcommand");
        };
        assert_eq!(args.initial, 5_000.0);
        assert_eq!(args.monthly, DEFAULT_MONTHLY);
        assert_eq!(args.rate, -1.5);
        assert_eq!(args.theme, CliTheme::Dark);
        assert!(args.json);
    }

    #[test]
    fn cli_serve_defaults_to_port_8080() {
        let cli = Cli::try_parse_from(["invest101", "serve"]).expect("valid args");
        let Command::Serve(args) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(args.port, 8080);
        assert_eq!(args.lang, "en");
    }

    #[test]
    fn build_inputs_rejects_non_finite_values() {
        let mut args = sample_args();
        args.monthly = f64::INFINITY;
        let err = build_inputs(&args).expect_err("must reject infinity");
        assert!(err.contains("--monthly"));
    }

    #[test]
    fn build_inputs_rejects_excessive_horizon() {
        let mut args = sample_args();
        args.years = 1_000.0;
        let err = build_inputs(&args).expect_err("must reject long horizon");
        assert!(err.contains("--years"));
    }

    #[test]
    fn build_inputs_clamps_negative_amounts() {
        let mut args = sample_args();
        args.initial = -100.0;
        args.years = -2.0;
        let inputs = build_inputs(&args).expect("valid inputs");
        assert_eq!(inputs.initial, 0.0);
        assert_eq!(inputs.years, 0);
    }

    #[test]
    fn run_project_prints_summary_and_yearly_rows() {
        let mut args = sample_args();
        args.years = 2.0;
        let table = run_project(&args).expect("projection");

        assert!(table.contains("Total invested  $7,000"));
        assert!(table.contains("Final value     $7,608"));
        assert!(table.contains("Year 1  Contributions    $4K  Interest   $189"));
        assert!(table.contains("Year 2"));
    }

    #[test]
    fn run_project_json_includes_chart_config() {
        let mut args = sample_args();
        args.json = true;
        args.lang = "ca".to_string();
        let json = run_project(&args).expect("projection");

        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["points"].as_array().map(Vec::len), Some(20));
        assert_eq!(value["chart"]["data"]["labels"][0], "Any 1");
        assert_eq!(value["summary"]["totalInvested"], 61_000.0);
    }

    #[test]
    fn zero_years_prints_summary_only() {
        let mut args = sample_args();
        args.years = 0.0;
        let table = run_project(&args).expect("projection");
        assert!(table.contains("Final value     $1,000"));
        assert!(!table.contains("Year"));
    }
}
