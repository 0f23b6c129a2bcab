// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{api, pages},
    state::AppState,
    utils::session_token::{api_session_middleware, page_session_middleware},
};

/// Assembles the main application router.
///
/// * Page routes run behind the cookie session middleware.
/// * `/api` routes require a session token, except session creation.
/// * Static assets are served from the configured directory.
/// * Applies global request tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let page_routes = Router::new()
        .route("/", get(pages::introduction))
        .route("/start", post(pages::start))
        .route("/results.json", get(pages::download_results))
        .route("/{slug}", get(pages::show).post(pages::submit))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            page_session_middleware,
        ));

    let api_routes = Router::new()
        .route("/sessions/current", get(api::current_session))
        .route("/sections/{section}", get(api::get_section))
        .route(
            "/sections/{section}/answers/{index}",
            put(api::put_answer),
        )
        .route("/sections/{section}/advance", post(api::advance))
        .route("/sections/{section}/retreat", post(api::retreat))
        .route("/results", get(api::results))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_session_middleware,
        ))
        // Session creation is the only unauthenticated API route
        .merge(Router::new().route("/sessions", post(api::create_session)))
        .layer(cors);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
