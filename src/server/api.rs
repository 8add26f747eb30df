//! HTTP API handlers with Axum and Utoipa

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::error::{Error, Result};
use crate::core::gpx::{to_gpx, GPX_CONTENT_TYPE};
use crate::core::{optimize, OptimizeRequest, OptimizeResponse};

use super::ServerConfig;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(optimize_route, export_gpx, health),
    components(schemas(OptimizeRequest, OptimizeResponse, ErrorResponse)),
    info(
        title = "Butterfly Trip API",
        version = "1.0.0",
        description = "Nearest-neighbor ordering of stops into a closed tour"
    )
)]
struct ApiDoc;

/// Per-request limits shared by the API handlers
#[derive(Debug, Clone, Copy)]
struct ApiState {
    max_stops: usize,
}

/// Build the Axum router
pub fn build_router(config: &ServerConfig) -> Router {
    let state = ApiState {
        max_stops: config.max_stops,
    };

    let api = Router::new()
        .route("/api/optimize-route", post(optimize_route))
        .route("/api/export-gpx", post(export_gpx))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state);

    let mut app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api)
        .route("/health", get(health));

    match &config.static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(dir = %dir.display(), "serving static files");
            app = app.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "static directory not found, serving API only");
        }
        None => {}
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Invalid input: missing field `stops`")]
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

// ============ Optimize Endpoint ============

/// Run the O(N²) build on the blocking pool so a large request does not stall
/// the async workers
async fn optimize_blocking(request: OptimizeRequest) -> Result<OptimizeResponse> {
    tokio::task::spawn_blocking(move || optimize(request)).await?
}

/// Decode, check limits and order. Any failure comes back as a ready response.
async fn order_stops(
    state: ApiState,
    payload: std::result::Result<Json<OptimizeRequest>, JsonRejection>,
) -> std::result::Result<OptimizeResponse, Response> {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err((
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response());
        }
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "rejected optimize request");
            return Err(Error::InvalidInput(rejection.body_text()).into_response());
        }
    };

    if let Err(e) = request.check_stop_limit(state.max_stops) {
        tracing::debug!(error = %e, "rejected optimize request");
        return Err(e.into_response());
    }

    let stop_count = request.stops.len();
    match optimize_blocking(request).await {
        Ok(response) => {
            tracing::info!(
                stops = stop_count,
                total_distance = response.total_distance,
                "route optimized"
            );
            Ok(response)
        }
        Err(e) => {
            if e.is_client_error() {
                tracing::debug!(stops = stop_count, error = %e, "rejected optimize request");
            } else {
                tracing::error!(stops = stop_count, error = %e, "route optimization failed");
            }
            Err(e.into_response())
        }
    }
}

/// Order stops into a nearest-neighbor tour
///
/// The first stop is the fixed start. The returned distance includes the
/// closing edge back to it.
#[utoipa::path(
    post,
    path = "/api/optimize-route",
    request_body = OptimizeRequest,
    responses(
        (status = 200, description = "Stops ordered", body = OptimizeResponse),
        (status = 400, description = "Invalid input or too many stops", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
    ),
    tag = "trip"
)]
async fn optimize_route(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<OptimizeRequest>, JsonRejection>,
) -> Response {
    match order_stops(state, payload).await {
        Ok(response) => Json(response).into_response(),
        Err(response) => response,
    }
}

// ============ GPX Export Endpoint ============

/// Order stops and return the tour as a GPX 1.1 track
///
/// Same input and ordering as `/api/optimize-route`. Each stop becomes a
/// track point; a `name` field becomes the point name.
#[utoipa::path(
    post,
    path = "/api/export-gpx",
    request_body = OptimizeRequest,
    responses(
        (status = 200, description = "GPX document", body = String, content_type = "application/gpx+xml"),
        (status = 400, description = "Invalid input or too many stops", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
    ),
    tag = "trip"
)]
async fn export_gpx(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<OptimizeRequest>, JsonRejection>,
) -> Response {
    match order_stops(state, payload).await {
        Ok(response) => (
            [
                (header::CONTENT_TYPE, GPX_CONTENT_TYPE),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"route.gpx\""),
            ],
            to_gpx(&response.optimized_route),
        )
            .into_response(),
        Err(response) => response,
    }
}

// ============ Health Endpoint ============

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy"),
    )
)]
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
