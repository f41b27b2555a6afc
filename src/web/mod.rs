pub mod error;
pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityRegistry;
use crate::web::routes::activities;

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn router(registry: ActivityRegistry, static_dir: impl AsRef<Path>) -> Router {
    let api_routes = Router::new()
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        );

    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .merge(api_routes)
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .fallback(error::not_found_handler)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}
