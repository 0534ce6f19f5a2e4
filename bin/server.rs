// Symbol Search - Web Server
// REST API over the read-only catalog with Axum

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use symbol_search::{
    init_tracing, load_catalog, search_scored, AppConfig, Catalog, Entity, LogOutput,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared application state.
/// The catalog never changes after startup, so no lock is needed.
#[derive(Clone)]
struct AppState {
    catalog: Arc<Catalog>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Search hit (entity plus how it matched)
#[derive(Serialize)]
struct SearchHit {
    id: i64,
    symbol: String,
    name: String,
    score: usize,
    tier: &'static str,
}

#[derive(Serialize)]
struct CatalogResponse {
    count: usize,
    entities: Vec<Entity>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/search?q=... - Best matches for free text
async fn search_companies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let hits: Vec<SearchHit> = search_scored(&state.catalog, &params.q)
        .into_iter()
        .map(|m| SearchHit {
            id: m.entity.id,
            symbol: m.entity.symbol.clone(),
            name: m.entity.name.clone(),
            score: m.score(),
            tier: m.tier.as_str(),
        })
        .collect();

    Json(ApiResponse::ok(hits))
}

/// GET /api/entities/:symbol - Is this symbol listed?
async fn get_entity(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> impl IntoResponse {
    match state.catalog.find_by_symbol(&symbol) {
        Some(entity) => (StatusCode::OK, Json(ApiResponse::ok(entity.clone()))).into_response(),
        None => {
            warn!(symbol = %symbol, "symbol not listed");
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Entity>::err(format!("Symbol not listed: {}", symbol))),
            )
                .into_response()
        }
    }
}

/// GET /api/catalog - Every entity in catalog order
async fn get_catalog(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(CatalogResponse {
        count: state.catalog.len(),
        entities: state.catalog.iter().cloned().collect(),
    }))
}

fn build_router(catalog: Arc<Catalog>) -> Router {
    let state = AppState { catalog };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/search", get(search_companies))
        .route("/entities/:symbol", get(get_entity))
        .route("/catalog", get(get_catalog))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.log_level, LogOutput::Stderr);

    let catalog = Arc::new(load_catalog(&config.catalog_path)?);
    info!(entities = catalog.len(), path = ?config.catalog_path, "catalog ready");

    let app = build_router(catalog);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
