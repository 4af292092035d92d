use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::{get, patch, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database;
use crate::handlers::{protected, public};
use crate::middleware::auth::jwt_auth_middleware;
use crate::middleware::ownership::note_owner_middleware;
use crate::state::AppState;

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_public_routes())
        // Protected
        .merge(auth_protected_routes(state.clone()))
        .merge(notes_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/auth", get(auth::auth_index))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
}

fn auth_protected_routes(state: AppState) -> Router<AppState> {
    use protected::auth;

    Router::new()
        .route("/auth/user/:id", get(auth::profile_get))
        .route("/auth/update/:id", patch(auth::profile_update))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn notes_routes(state: AppState) -> Router<AppState> {
    use protected::notes;

    // Single-note routes carry the ownership gate inside the JWT gate
    let owned = Router::new()
        .route(
            "/notes/:id",
            get(notes::note_get).delete(notes::note_delete),
        )
        .route("/notes/update/:id", patch(notes::note_update))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            note_owner_middleware,
        ));

    Router::new()
        .route("/notes", get(notes::note_list))
        .route("/notes/create", post(notes::note_create))
        .merge(owned)
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

async fn root() -> Json<Value> {
    Json(json!({ "msg": "Welcome to homePage" }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
