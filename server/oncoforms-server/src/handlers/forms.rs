//! Clinical form intake handlers
//!
//! One handler per intake form: patient assessment, anesthesia consent and
//! CT simulation each map a typed request onto a single parameterized INSERT.
//! The generic endpoint stores the raw payload keyed by form kind, and the
//! retrieval endpoint reads stored generic submissions back, most recent
//! first. Submission timestamps are always assigned by the database.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::{
    error::{api_message, api_success, ApiError, ApiResponse},
    server::OncoformsServer,
    validation::RequestValidation,
    validate_length, validate_range, validate_required,
};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Category of clinical intake data.
///
/// The known kinds cover the dedicated submission endpoints; any other label
/// a client attaches to a generic submission is carried verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKind {
    Assessment,
    Consent,
    CtSimulation,
    General,
    Other(String),
}

impl FormKind {
    pub fn parse(label: &str) -> Self {
        match label {
            "Assessment" => Self::Assessment,
            "Consent" => Self::Consent,
            "CTSimulation" => Self::CtSimulation,
            "General" => Self::General,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Assessment => "Assessment",
            Self::Consent => "Consent",
            Self::CtSimulation => "CTSimulation",
            Self::General => "General",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient assessment submission
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    pub name: String,
    pub age: i32,
    pub sex: String,
    pub id_num: String,
    pub hospital_number: String,
    pub home_address: String,
    pub chief_complaint: String,
}

impl RequestValidation for SubmitAssessmentRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.name, "Patient name is required");
        validate_length!(
            self.name,
            1,
            255,
            "Patient name must be between 1 and 255 characters"
        );
        validate_range!(self.age, 0, 150, "Age must be between 0 and 150");
        validate_required!(self.sex, "Sex is required");
        validate_required!(self.id_num, "ID number is required");
        validate_required!(self.hospital_number, "Hospital number is required");
        validate_required!(self.home_address, "Home address is required");
        validate_required!(self.chief_complaint, "Chief complaint is required");
        Ok(())
    }
}

/// Anesthesia consent submission
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitConsentRequest {
    pub patient_name: String,
    pub physician_name: String,
    pub guardian_name: String,
}

impl RequestValidation for SubmitConsentRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.patient_name, "Patient name is required");
        validate_required!(self.physician_name, "Physician name is required");
        validate_required!(self.guardian_name, "Guardian name is required");
        Ok(())
    }
}

/// CT simulation submission
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCtSimulationRequest {
    pub patient_name: String,
    pub treatment_technique: String,
    pub procedures: String,
}

impl RequestValidation for SubmitCtSimulationRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.patient_name, "Patient name is required");
        validate_required!(self.treatment_technique, "Treatment technique is required");
        validate_required!(self.procedures, "Procedures are required");
        Ok(())
    }
}

/// Stored generic form submission
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct FormSubmissionRow {
    pub id: i64,
    pub form_type: String,
    pub form_data: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
}

/// Form kind for a generic submission body: the `formType` field when
/// present, `General` otherwise.
fn generic_form_kind(body: &serde_json::Value) -> FormKind {
    body.get("formType")
        .and_then(|value| value.as_str())
        .map(FormKind::parse)
        .unwrap_or(FormKind::General)
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Submit a patient assessment form
#[utoipa::path(
    post,
    path = "/submit-assessment",
    request_body = SubmitAssessmentRequest,
    responses(
        (status = 200, description = "Assessment form stored"),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Database failure")
    ),
    tag = "forms"
)]
pub async fn submit_assessment(
    State(server): State<OncoformsServer>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    req.validate()?;

    server
        .executor()
        .execute_with(
            "INSERT INTO assessment_forms
             (patient_name, age, sex, id_num, hospital_number, home_address, chief_complaint, submitted_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, now())",
            |q| {
                q.bind(req.name)
                    .bind(req.age)
                    .bind(req.sex)
                    .bind(req.id_num)
                    .bind(req.hospital_number)
                    .bind(req.home_address)
                    .bind(req.chief_complaint)
            },
        )
        .await?;

    tracing::info!("Assessment form submitted");

    Ok(Json(api_message("Assessment form submitted successfully")))
}

/// Submit an anesthesia consent form
#[utoipa::path(
    post,
    path = "/submit-consent",
    request_body = SubmitConsentRequest,
    responses(
        (status = 200, description = "Consent form stored"),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Database failure")
    ),
    tag = "forms"
)]
pub async fn submit_consent(
    State(server): State<OncoformsServer>,
    Json(req): Json<SubmitConsentRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    req.validate()?;

    server
        .executor()
        .execute_with(
            "INSERT INTO consent_forms
             (patient_name, physician_name, guardian_name, submitted_at)
             VALUES ($1, $2, $3, now())",
            |q| {
                q.bind(req.patient_name)
                    .bind(req.physician_name)
                    .bind(req.guardian_name)
            },
        )
        .await?;

    tracing::info!("Consent form submitted");

    Ok(Json(api_message("Consent form submitted successfully")))
}

/// Submit a CT simulation form
#[utoipa::path(
    post,
    path = "/submit-ctsimulation",
    request_body = SubmitCtSimulationRequest,
    responses(
        (status = 200, description = "CT simulation form stored"),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Database failure")
    ),
    tag = "forms"
)]
pub async fn submit_ctsimulation(
    State(server): State<OncoformsServer>,
    Json(req): Json<SubmitCtSimulationRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    req.validate()?;

    server
        .executor()
        .execute_with(
            "INSERT INTO ct_simulation_forms
             (patient_name, treatment_technique, procedures, submitted_at)
             VALUES ($1, $2, $3, now())",
            |q| {
                q.bind(req.patient_name)
                    .bind(req.treatment_technique)
                    .bind(req.procedures)
            },
        )
        .await?;

    tracing::info!("CT Simulation form submitted");

    Ok(Json(api_message("CT Simulation form submitted successfully")))
}

/// Submit a generic form
///
/// The whole body is stored verbatim; `formType` selects the kind and
/// defaults to `General` when absent.
#[utoipa::path(
    post,
    path = "/submit-form",
    responses(
        (status = 200, description = "Form stored"),
        (status = 500, description = "Database failure")
    ),
    tag = "forms"
)]
pub async fn submit_form(
    State(server): State<OncoformsServer>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let kind = generic_form_kind(&body);
    let form_type = kind.as_str().to_string();

    server
        .executor()
        .execute_with(
            "INSERT INTO form_submissions (form_type, form_data, submitted_at)
             VALUES ($1, $2, now())",
            |q| q.bind(form_type).bind(body),
        )
        .await?;

    tracing::info!(form_type = %kind, "Form submitted");

    Ok(Json(api_message("Form submitted successfully")))
}

/// List stored generic submissions for a form type, most recent first
#[utoipa::path(
    get,
    path = "/get-forms/{form_type}",
    params(
        ("form_type" = String, Path, description = "Form type label")
    ),
    responses(
        (status = 200, description = "Matching submissions", body = Vec<FormSubmissionRow>),
        (status = 500, description = "Database failure")
    ),
    tag = "forms"
)]
pub async fn get_forms(
    Path(form_type): Path<String>,
    State(server): State<OncoformsServer>,
) -> Result<Json<ApiResponse<Vec<FormSubmissionRow>>>, ApiError> {
    let submissions = server
        .executor()
        .fetch_all_with(
            "SELECT id, form_type, form_data, submitted_at
             FROM form_submissions
             WHERE form_type = $1
             ORDER BY submitted_at DESC",
            |q| q.bind(form_type),
        )
        .await?;

    Ok(Json(api_success(submissions)))
}
