//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::board::{BoardError, DepartureSource};
use crate::stops::StopSource;
use crate::tfnsw::TfnswError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<S>(state: AppState<S>, static_dir: &str) -> Router
where
    S: DepartureSource + StopSource + Clone,
{
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/board", get(board_fragment))
        .route("/board/stop", post(submit_stop))
        .route("/board/refresh", post(refresh_board))
        .route("/api/departures", get(departures))
        .route("/api/stops", get(search_stops))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Board page with the stop form.
async fn index_page<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: DepartureSource + StopSource + Clone,
{
    Html(
        IndexTemplate {
            stop_id: state.controller.current_stop(),
        }
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Render the current board state as an HTML fragment.
fn render_board<S>(state: &AppState<S>) -> Result<Html<String>, AppError>
where
    S: DepartureSource,
{
    let template = BoardTemplate {
        snapshot: state.controller.snapshot(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Board fragment, polled by the page.
async fn board_fragment<S>(State(state): State<AppState<S>>) -> Result<Html<String>, AppError>
where
    S: DepartureSource + StopSource + Clone,
{
    render_board(&state)
}

/// Select a stop and return the refreshed board fragment.
async fn submit_stop<S>(
    State(state): State<AppState<S>>,
    Form(req): Form<SubmitStopRequest>,
) -> Result<Html<String>, AppError>
where
    S: DepartureSource + StopSource + Clone,
{
    state
        .controller
        .submit_stop(&req.stop_id)
        .await
        .map_err(|e| match e {
            BoardError::EmptyStop => AppError::BadRequest {
                message: e.to_string(),
            },
        })?;

    render_board(&state)
}

/// Re-fetch the current stop now and return the refreshed fragment.
///
/// A no-op (still rendering the current state) when no stop is
/// selected or a load is already in flight.
async fn refresh_board<S>(State(state): State<AppState<S>>) -> Result<Html<String>, AppError>
where
    S: DepartureSource + StopSource + Clone,
{
    state.controller.refresh().await;
    render_board(&state)
}

/// Departures for a stop as JSON.
async fn departures<S>(
    State(state): State<AppState<S>>,
    Query(req): Query<DeparturesRequest>,
) -> Result<Json<DeparturesResponse>, AppError>
where
    S: DepartureSource + StopSource + Clone,
{
    let stop_id = req.stop_id.trim();
    if stop_id.is_empty() {
        return Err(AppError::BadRequest {
            message: "Please enter a stop ID".to_string(),
        });
    }

    let departures = state.source.departures(stop_id).await?;
    Ok(Json(DeparturesResponse { departures }))
}

/// Stop autocomplete as JSON.
async fn search_stops<S>(
    State(state): State<AppState<S>>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse>
where
    S: DepartureSource + StopSource + Clone,
{
    let stops = state.finder.suggest(&req.q).await;
    Json(StopSearchResponse { stops })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<TfnswError> for AppError {
    fn from(e: TfnswError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
