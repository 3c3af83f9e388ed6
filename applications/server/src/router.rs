/// HTTP routing
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router over `app_state`
pub fn create_router(app_state: AppState) -> Router {
    let user_routes = Router::new()
        .route(
            "/users",
            post(api::users::create_user).get(api::users::list_users),
        )
        .route(
            "/users/:id",
            get(api::users::get_user).delete(api::users::delete_user),
        );

    Router::new()
        .route("/health", get(api::health::health))
        .merge(user_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
