use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::database::{manager, schema};
use crate::handlers::{protected, public};
use crate::middleware::require_bearer;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("planetary_api=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the full route table around `ctx`.
pub fn app(ctx: AppContext) -> Router {
    let cors = if ctx.config.security.enable_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(demo_routes())
        .merge(auth_public_routes())
        .merge(planet_routes())
        // Protected: bearer token required
        .merge(planet_protected_routes(ctx.clone()))
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

fn demo_routes() -> Router<AppContext> {
    use public::demo;

    Router::new()
        .route("/super_simple", get(demo::super_simple))
        .route("/not_found", get(demo::not_found))
        .route("/parameters", get(demo::parameters))
        .route("/url_parameters/:name/:age", get(demo::url_parameters))
}

fn auth_public_routes() -> Router<AppContext> {
    use public::auth;

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/retrieve_password/:email", get(auth::retrieve_password))
}

fn planet_routes() -> Router<AppContext> {
    use public::planets;

    Router::new()
        .route("/planets", get(planets::list))
        .route("/planets/:planet_id", get(planets::get))
}

fn planet_protected_routes(ctx: AppContext) -> Router<AppContext> {
    use protected::planets;

    Router::new()
        .route("/planets", post(planets::create))
        .route("/planets/:planet_id", put(planets::update).delete(planets::delete))
        .route_layer(middleware::from_fn_with_state(ctx, require_bearer))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Planetary API",
            "version": version,
            "endpoints": {
                "planets": "GET /planets, GET /planets/:planet_id (public)",
                "planets_write": "POST /planets, PUT|DELETE /planets/:planet_id (bearer token)",
                "auth": "POST /register, POST /login, GET /retrieve_password/:email (public)",
                "demo": "/super_simple, /not_found, /parameters, /url_parameters/:name/:age",
                "health": "/health",
            }
        }
    }))
}

async fn health(State(ctx): State<AppContext>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match manager::health_check(&ctx.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": true,
                    "message": "database unavailable",
                    "code": "SERVICE_UNAVAILABLE",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}

/// Open the database, make sure the tables exist and serve until ctrl-c.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    config.validate()?;
    tracing::info!("Starting Planetary API in {:?} mode", config.environment);
    if config.is_production() && config.security.enable_cors {
        tracing::warn!("CORS is permissive in production");
    }

    let pool = manager::connect(&config.database).await?;
    schema::create(&pool).await?;

    let bind_addr = config.bind_addr();
    let ctx = AppContext::new(config, pool.clone());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Planetary API listening on http://{}", bind_addr);

    axum::serve(listener, app(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    manager::close(&pool).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
