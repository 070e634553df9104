//! HTTP layer - axum router, admin gate, handlers and response shapes.
//!
//! The router dispatches by method and path, applies the CORS and trace
//! layers, and serves the upload directory. Every handler receives an
//! [`AppState`] holding the database connection and the settings; nothing is
//! global, so tests can build an isolated state per case.

/// Admin capability check and gate middleware
pub mod auth;
/// HTTP mapping of the crate error type
pub mod error;
/// Route handlers
pub mod handlers;
/// Typed response bodies
pub mod responses;
/// Listener and shutdown handling
pub mod server;


use crate::{config::settings::Settings, core::upload::UPLOAD_URL_PREFIX};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderName, Method,
        header::{AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    },
    middleware,
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// How long browsers may cache a preflight response
pub const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (internally pooled)
    pub database: DatabaseConnection,
    /// Process settings
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Creates a new `AppState` from a connection and settings.
    #[must_use]
    pub fn new(database: DatabaseConnection, settings: Settings) -> Self {
        Self {
            database,
            settings: Arc::new(settings),
        }
    }
}

/// Permissive CORS for the mobile client.
///
/// Credentials are allowed, so the origin is mirrored rather than `*`.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            ORIGIN,
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(auth::ADMIN_HEADER),
        ])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/menu", post(handlers::admin::add_menu_item))
        .route(
            "/menu/:id",
            put(handlers::admin::edit_menu_item).delete(handlers::admin::delete_menu_item),
        )
        .route(
            "/upload",
            post(handlers::upload::upload_image).layer(DefaultBodyLimit::disable()),
        )
        .route("/subscribers", get(handlers::admin::list_subscribers))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/menus", get(handlers::menu::list_menus))
        .route("/menus/:id", get(handlers::menu::get_menu))
        .route("/subscribe", post(handlers::subscribe::subscribe))
        .route("/analytics", get(handlers::analytics::analytics))
        .route("/recommendations", get(handlers::analytics::recommendations))
        .nest("/admin", admin)
        .nest_service(
            UPLOAD_URL_PREFIX,
            ServeDir::new(&state.settings.upload_dir),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
