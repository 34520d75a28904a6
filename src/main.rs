mod app;
mod handlers;
mod jira;
mod macros;
mod pubsub;
mod report;
mod sendgrid;
mod utils;

use crate::app::App;
use crate::pubsub::envelope::PushEnvelope;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use std::env;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    dotenvy::dotenv().ok();

    let router = router(App::new());

    let ip = env::var("APP_IP").unwrap_or("0.0.0.0".to_string());
    let port = env::var("APP_PORT").unwrap_or("3000".to_string());
    let address = format!("{}:{}", ip, port);

    info!("Listening on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn router(app: App) -> Router {
    Router::new()
        .route("/pubsub/jira", post(jira_push))
        .route("/pubsub/sendgrid", post(sendgrid_push))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn jira_push(State(app): State<App>, Json(envelope): Json<PushEnvelope>) {
    handlers::jira::handle(envelope, &app.https, &app.jira).await
}

async fn sendgrid_push(State(app): State<App>, Json(envelope): Json<PushEnvelope>) {
    handlers::sendgrid::handle(envelope, &app.https, &app.sendgrid).await
}
