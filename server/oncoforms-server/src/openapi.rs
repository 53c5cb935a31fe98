//! OpenAPI documentation routes

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{forms, health};
use crate::server::OncoformsServer;

/// Aggregate API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::test_connection,
        forms::submit_assessment,
        forms::submit_consent,
        forms::submit_ctsimulation,
        forms::submit_form,
        forms::get_forms,
    ),
    components(schemas(
        forms::SubmitAssessmentRequest,
        forms::SubmitConsentRequest,
        forms::SubmitCtSimulationRequest,
        forms::FormSubmissionRow,
        health::TestConnectionRow,
        health::HealthResponse,
    )),
    tags(
        (name = "health", description = "Connectivity and liveness probes"),
        (name = "forms", description = "Clinical form intake and retrieval")
    )
)]
pub struct ApiDoc;

/// Create the API documentation routes
pub fn create_docs_routes() -> Router<OncoformsServer> {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
