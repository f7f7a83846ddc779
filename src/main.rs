use axum::{
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use todo_api_rust::handlers::{auth as auth_handlers, todos};
use todo_api_rust::middleware::{jwt_auth_middleware, validate_todo_body};
use todo_api_rust::todos::ToDoRepository;
use todo_api_rust::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_ISSUER and JWT_KEY.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Touch the config singleton early so a missing JWT_ISSUER / JWT_KEY
    // fails at startup rather than on the first /token request.
    let config = todo_api_rust::config::config();
    tracing::info!(issuer = %config.security.jwt_issuer, "starting to-do API");

    let state = AppState::new(ToDoRepository::seeded());
    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("TODO_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("to-do API listening on http://{bind_addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // To-do CRUD
        .merge(todo_read_routes())
        .merge(todo_write_routes())
        // Demo authentication
        .merge(auth_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn todo_read_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(todos::get_all))
        .route("/todos/:id", get(todos::get_by_id).delete(todos::delete_todo))
}

/// Create and update run behind the body-validating interceptor; create
/// additionally requires a bearer token, checked before validation.
fn todo_write_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            post(todos::create_todo)
                .route_layer(from_fn(validate_todo_body))
                .route_layer(from_fn(jwt_auth_middleware)),
        )
        .route(
            "/todos/:id",
            put(todos::update_todo).route_layer(from_fn(validate_todo_body)),
        )
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/token", get(auth_handlers::issue_token))
        .route(
            "/loginUser",
            get(auth_handlers::login_user).route_layer(from_fn(jwt_auth_middleware)),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "todo-api-rust",
        "version": version,
        "description": "Minimal in-memory to-do API with validated bodies and demo JWT auth",
        "endpoints": {
            "todos": "/todos (GET public, POST requires bearer token)",
            "todo": "/todos/:id (GET, PUT, DELETE)",
            "token": "/token (public - demo bearer token)",
            "login_user": "/loginUser (requires bearer token)",
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
