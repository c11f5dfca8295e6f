// Router for pipeline related endpoints
use crate::engine::graph::GraphProcessor;
use crate::http::{AppState, error::Error as HTTPError};
use crate::schemas::graph::Pipeline;
use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{Router, get, post},
};
use schemars::schema_for;
use serde_json::json;
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(ping))
        .route("/pipelines/parse", post(parse_pipeline))
        .route("/pipelines/schema", get(get_pipeline_schema))
        .with_state(state)
}

async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "Ping": "Pong" })))
}

/// Checks a submitted pipeline for acyclicity and reports node/edge counts.
/// A cyclic graph is a normal result, not an error; only edges referencing
/// undeclared nodes reject the request.
async fn parse_pipeline(
    Json(pipeline): Json<Pipeline>,
) -> Result<impl IntoResponse, HTTPError> {
    log::debug!(
        "Parsing pipeline with {} nodes and {} edges",
        pipeline.nodes.len(),
        pipeline.edges.len()
    );

    let processor = GraphProcessor::new(&pipeline)?;
    let report = processor.report(&pipeline);

    log::debug!("Pipeline parsed, is_dag={}", report.is_dag);
    Ok((StatusCode::OK, Json(report)))
}

async fn get_pipeline_schema() -> Result<impl IntoResponse, HTTPError> {
    log::debug!("Fetching pipeline schema");
    let schema = schema_for!(Pipeline);
    Ok((StatusCode::OK, Json(schema)))
}
