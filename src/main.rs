use axum::{
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod db;
mod error;
mod handlers;
mod models;

// Application State
pub struct AppState {
    pub db: sqlx::SqlitePool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::leaderboard::get_leaderboard,
        handlers::leaderboard::submit_score,
    ),
    components(schemas(
        models::score::ScoreRecord,
        models::score::SubmitScoreRequest,
    ))
)]
struct ApiDoc;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/leaderboard", get(handlers::leaderboard::get_leaderboard))
        .route("/submit-score", post(handlers::leaderboard::submit_score))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        // All origins, methods, and headers. Local/dev policy, not a security
        // boundary.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let pool = db::establish_connection().await?;

    // Schema creation happens once here, never on the request path.
    db::init_schema(&pool).await?;

    let state = Arc::new(AppState { db: pool });
    let app = app(state);

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn root() -> &'static str {
    "Leaderboard Backend API"
}
