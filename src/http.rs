//! HTTP boundary: `GET /api/search?q=...` plus the tag and section listings.

use crate::config::HttpConfig;
use crate::content::ContentSource;
use crate::error::{ContentError, Result};
use crate::search::SearchEngine;
use crate::tools::{
    ListProjectsRequest, ListProjectsResponse, ListSectionsRequest, ListSectionsResponse,
    ListTagsRequest, ListTagsResponse, SearchOutcome, SearchRequest, SearchResponse,
    handle_list_projects, handle_list_sections, handle_list_tags, handle_search,
};
use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Build the router over a shared engine.
pub fn router<S>(engine: Arc<SearchEngine<S>>) -> Router
where
    S: ContentSource + 'static,
{
    Router::new()
        .route("/api/search", get(search::<S>))
        .route("/api/tags", get(tags::<S>))
        .route("/api/sections", get(sections::<S>))
        .route("/api/projects", get(projects::<S>))
        .with_state(engine)
}

/// Search handler. Failures answer `500` with `{ "results": [] }`.
pub async fn search<S>(
    State(engine): State<Arc<SearchEngine<S>>>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<SearchResponse>)
where
    S: ContentSource + 'static,
{
    let request = SearchRequest { query: params.q };

    // Content reads hit the filesystem; keep them off the async workers
    let outcome = tokio::task::spawn_blocking(move || handle_search(&engine, &request))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Search task failed: {}", e);
            SearchOutcome::failed()
        });

    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(outcome.response))
}

async fn tags<S>(
    State(engine): State<Arc<SearchEngine<S>>>,
    Query(request): Query<ListTagsRequest>,
) -> Response
where
    S: ContentSource + 'static,
{
    let result =
        tokio::task::spawn_blocking(move || handle_list_tags(engine.source(), &request)).await;
    listing_response::<ListTagsResponse>(result.map_err(|e| e.to_string()))
}

async fn sections<S>(
    State(engine): State<Arc<SearchEngine<S>>>,
    Query(request): Query<ListSectionsRequest>,
) -> Response
where
    S: ContentSource + 'static,
{
    let result =
        tokio::task::spawn_blocking(move || handle_list_sections(engine.source(), &request)).await;
    listing_response::<ListSectionsResponse>(result.map_err(|e| e.to_string()))
}

async fn projects<S>(
    State(engine): State<Arc<SearchEngine<S>>>,
    Query(request): Query<ListProjectsRequest>,
) -> Response
where
    S: ContentSource + 'static,
{
    let result =
        tokio::task::spawn_blocking(move || handle_list_projects(engine.source(), &request)).await;
    listing_response::<ListProjectsResponse>(result.map_err(|e| e.to_string()))
}

fn listing_response<T: serde::Serialize>(
    result: std::result::Result<std::result::Result<T, ContentError>, String>,
) -> Response {
    match result {
        Ok(Ok(body)) => Json(body).into_response(),
        Ok(Err(e)) => {
            tracing::error!("Listing failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(e) => {
            tracing::error!("Listing task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Serve until Ctrl-C.
pub async fn serve<S>(engine: Arc<SearchEngine<S>>, config: HttpConfig) -> Result<()>
where
    S: ContentSource + 'static,
{
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    tracing::info!("Serving search on http://{}", config.bind);

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
        .context("HTTP server error")?;

    Ok(())
}
