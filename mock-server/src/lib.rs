//! Stateless HTTP server used by the client's integration tests.
//!
//! Routes are generic probes rather than a domain API: a greeting that
//! reflects a query parameter, a JSON echo, an arbitrary-status endpoint,
//! and a configurable delay for exercising transport deadlines.

use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

#[derive(Deserialize)]
pub struct GreetParams {
    pub name: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/greet", get(greet))
        .route("/echo", post(echo))
        .route("/status/{code}", get(status))
        .route("/delay/{ms}", get(delay))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn greet(Query(params): Query<GreetParams>) -> Json<Greeting> {
    let message = match params.name {
        Some(name) => format!("Hello, {name}"),
        None => "Hello".to_string(),
    };
    Json(Greeting { message })
}

async fn echo(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
    Json(body)
}

async fn status(Path(code): Path<u16>) -> (StatusCode, Json<serde_json::Value>) {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(serde_json::json!({ "status": status.as_u16() })))
}

async fn delay(Path(ms): Path<u64>) -> Json<Greeting> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    Json(Greeting { message: "Hello".to_string() })
}
