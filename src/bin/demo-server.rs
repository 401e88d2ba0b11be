//! Demo target server.
//!
//! Exposes the well-known validation routes (`/`, `/health`, `/api/status`,
//! `/users`) with structured JSON payloads carrying timestamps and process
//! uptime, so the validator has something to call.

use std::net::SocketAddr;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use axum::{extract::State, routing::get, Json, Router};
use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "demo-server")]
#[command(about = "Demo target server for upcheck", long_about = None)]
struct Cli {
    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,
}

#[derive(Clone)]
struct ServerState {
    started: Instant,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    upcheck::observability::logging::init("demo_server=info");

    let state = ServerState {
        started: Instant::now(),
    };

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/status", get(api_status))
        .route("/users", get(users))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(address = %cli.bind, "demo server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "demo-server",
        "message": "Demo target is up",
        "timestamp": unix_timestamp(),
    }))
}

async fn health(State(state): State<ServerState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "uptime_secs": state.started.elapsed().as_secs(),
        "timestamp": unix_timestamp(),
    }))
}

async fn api_status(State(state): State<ServerState>) -> Json<Value> {
    Json(json!({
        "api": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.started.elapsed().as_secs(),
        "timestamp": unix_timestamp(),
    }))
}

async fn users() -> Json<Value> {
    Json(json!({
        "users": [
            { "id": 1, "name": "alice" },
            { "id": 2, "name": "bob" },
            { "id": 3, "name": "carol" },
        ],
        "count": 3,
        "timestamp": unix_timestamp(),
    }))
}
