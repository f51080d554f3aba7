use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{filtered, system, users};
use crate::state::AppState;

pub fn app(state: AppState, security: &SecurityConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(user_routes())
        .merge(filtered_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match cors_layer(security) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:id",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/users/:id/exists", get(users::exists))
}

fn filtered_routes() -> Router<AppState> {
    Router::new()
        .route("/filtered", post(filtered::search))
        .route("/filtered/parameters", get(filtered::parameters))
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }
    if security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    )
}
