pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{forms, health},
    openapi,
    server::OncoformsServer,
};

/// Create health check routes
pub fn health_routes() -> Router<OncoformsServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::TEST_CONNECTION, get(health::test_connection))
}

/// Create form intake routes
pub fn form_routes() -> Router<OncoformsServer> {
    Router::new()
        .route(paths::forms::SUBMIT_ASSESSMENT, post(forms::submit_assessment))
        .route(paths::forms::SUBMIT_CONSENT, post(forms::submit_consent))
        .route(
            paths::forms::SUBMIT_CTSIMULATION,
            post(forms::submit_ctsimulation),
        )
        .route(paths::forms::SUBMIT_FORM, post(forms::submit_form))
        .route(paths::forms::GET_FORMS, get(forms::get_forms))
}

/// Create all application routes
pub fn create_routes() -> Router<OncoformsServer> {
    Router::new()
        // Health check routes
        .merge(health_routes())
        // API documentation routes
        .merge(openapi::create_docs_routes())
        // Form intake routes (served at the root per the public contract)
        .merge(form_routes())
}
