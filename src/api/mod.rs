use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Json, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::chart::{DocumentChart, DocumentRenderer, Theme, format_currency_whole};
use crate::core::{CalculatorInputs, ProjectionSummary, YearlyPoint, years_from_f64};
pub use crate::core::MAX_YEARS;
use crate::i18n::Catalog;
use crate::widget::CalculatorWidget;

pub mod cli;
pub mod permalink;

type ServerWidget = CalculatorWidget<Catalog, DocumentRenderer>;

#[derive(Clone)]
pub struct AppState {
    widget: Arc<Mutex<ServerWidget>>,
}

impl AppState {
    pub fn new(language: &str, theme: Theme) -> crate::error::Result<Self> {
        let widget = CalculatorWidget::new(
            Catalog::bundled(language)?,
            DocumentRenderer::default(),
            theme,
        );
        Ok(Self {
            widget: Arc::new(Mutex::new(widget)),
        })
    }
}

/// Query and body keys match the permalink format.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectPayload {
    initial: Option<f64>,
    monthly: Option<f64>,
    rate: Option<f64>,
    years: Option<f64>,
    theme: Option<Theme>,
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ThemePayload {
    theme: Theme,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormattedSummary {
    total_invested: String,
    total_interest: String,
    final_value: String,
}

impl From<ProjectionSummary> for FormattedSummary {
    fn from(summary: ProjectionSummary) -> Self {
        Self {
            total_invested: format_currency_whole(summary.total_invested),
            total_interest: format_currency_whole(summary.total_interest),
            final_value: format_currency_whole(summary.final_value),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    inputs: CalculatorInputs,
    language: String,
    theme: Theme,
    summary: ProjectionSummary,
    formatted: FormattedSummary,
    points: Vec<YearlyPoint>,
    chart: Option<DocumentChart>,
    permalink: String,
}

#[derive(Debug, Serialize)]
struct PermalinkResponse {
    query: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Overlay the keys present in `payload` onto `current`.
fn merge_inputs(
    current: CalculatorInputs,
    payload: &ProjectPayload,
) -> Result<CalculatorInputs, String> {
    let mut inputs = current;
    if let Some(v) = payload.initial {
        inputs.initial = v;
    }
    if let Some(v) = payload.monthly {
        inputs.monthly = v;
    }
    if let Some(v) = payload.rate {
        inputs.annual_rate_percent = v;
    }
    if let Some(v) = payload.years {
        inputs.years = years_from_f64(v);
    }

    if inputs.years > MAX_YEARS {
        return Err(format!("years must be <= {MAX_YEARS}"));
    }

    Ok(inputs.sanitized())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .route("/api/chart", get(chart_handler))
        .route("/api/permalink", get(permalink_handler))
        .route("/api/theme", post(theme_handler))
        .route("/api/theme/toggle", post(theme_toggle_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

pub async fn run_http_server(port: u16, state: AppState) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("invest101 HTTP API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/api/project");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(
    State(state): State<AppState>,
    payload: Result<Query<ProjectPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => project_handler_impl(&state, payload),
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

async fn project_post_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => project_handler_impl(&state, payload),
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

async fn chart_handler(State(state): State<AppState>) -> Response {
    with_widget(&state, |widget| {
        if !widget.chart().is_present() {
            widget.render().map_err(|e| e.to_string())?;
        }
        Ok(build_project_response(widget))
    })
}

async fn permalink_handler(State(state): State<AppState>) -> Response {
    with_widget(&state, |widget| {
        Ok(PermalinkResponse {
            query: permalink::to_query(&widget.inputs()),
        })
    })
}

async fn theme_handler(
    State(state): State<AppState>,
    payload: Result<Json<ThemePayload>, JsonRejection>,
) -> Response {
    let theme = match payload {
        Ok(Json(payload)) => payload.theme,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };
    with_widget(&state, |widget| {
        widget.set_theme(theme).map_err(|e| e.to_string())?;
        Ok(build_project_response(widget))
    })
}

async fn theme_toggle_handler(State(state): State<AppState>) -> Response {
    with_widget(&state, |widget| {
        widget.toggle_theme().map_err(|e| e.to_string())?;
        Ok(build_project_response(widget))
    })
}

fn project_handler_impl(state: &AppState, payload: ProjectPayload) -> Response {
    let mut guard = match state.widget.lock() {
        Ok(guard) => guard,
        Err(_) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, "widget unavailable"),
    };
    let widget = &mut *guard;

    let inputs = match merge_inputs(widget.inputs(), &payload) {
        Ok(inputs) => inputs,
        Err(msg) => {
            warn!(error = %msg, "rejected project request");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };

    match apply_payload(widget, inputs, &payload) {
        Ok(()) => json_response(StatusCode::OK, build_project_response(widget)),
        Err(msg) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &msg),
    }
}

fn apply_payload(
    widget: &mut ServerWidget,
    inputs: CalculatorInputs,
    payload: &ProjectPayload,
) -> Result<(), String> {
    if let Some(lang) = payload.lang.as_deref() {
        let catalog = Catalog::bundled(lang).map_err(|e| e.to_string())?;
        if catalog.language() != widget.translator().language() {
            widget.set_translator(catalog).map_err(|e| e.to_string())?;
        }
    }
    if let Some(theme) = payload.theme {
        if theme != widget.theme() {
            widget.set_theme(theme).map_err(|e| e.to_string())?;
        }
    }
    widget.on_inputs_changed(inputs).map_err(|e| e.to_string())?;
    Ok(())
}

fn with_widget<T, F>(state: &AppState, f: F) -> Response
where
    T: Serialize,
    F: FnOnce(&mut ServerWidget) -> Result<T, String>,
{
    let mut guard = match state.widget.lock() {
        Ok(guard) => guard,
        Err(_) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, "widget unavailable"),
    };
    match f(&mut *guard) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(msg) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &msg),
    }
}

fn build_project_response(widget: &ServerWidget) -> ProjectResponse {
    let projection = widget.projection();
    ProjectResponse {
        inputs: widget.inputs(),
        language: widget.translator().language().to_string(),
        theme: widget.theme(),
        summary: projection.summary,
        formatted: projection.summary.into(),
        points: projection.points.clone(),
        chart: widget.chart().instance().cloned(),
        permalink: permalink::to_query(&widget.inputs()),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
