//! # API REST
//!
//! REST API for the clinic registry.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - translation of registry error kinds into status codes
//!
//! All registry access goes through [`SharedRegistry`], which serialises operations so
//! that concurrent bookings for one slot cannot both succeed.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod dto;
pub mod error;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use clinic_core::validation::{required_license, required_patient_id};
use clinic_core::SharedRegistry;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dto::{
    AddSpecialtyReq, AppointmentRes, BookAppointmentReq, CreatePatientReq, CreatePhysicianReq,
    ErrorRes, HealthRes, IssuePrescriptionReq, ListAppointmentsRes, ListPatientsRes,
    ListPhysiciansRes, MedicalHistoryRes, PatientRes, PhysicianRes, PrescriptionRes, SpecialtyRes,
};
use error::ApiError;

pub use config::RestConfig;

/// Application state shared across REST API handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub registry: SharedRegistry,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_patients,
        register_patient,
        medical_history,
        list_physicians,
        register_physician,
        physician_by_license,
        add_specialty,
        list_appointments,
        book_appointment,
        issue_prescription,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        CreatePatientReq,
        PatientRes,
        ListPatientsRes,
        CreatePhysicianReq,
        PhysicianRes,
        ListPhysiciansRes,
        AddSpecialtyReq,
        SpecialtyRes,
        BookAppointmentReq,
        AppointmentRes,
        ListAppointmentsRes,
        IssuePrescriptionReq,
        PrescriptionRes,
        MedicalHistoryRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router over `state`.
///
/// Swagger UI is served at `/swagger-ui` when `swagger` is true; the OpenAPI document
/// is served alongside it at `/api-docs/openapi.json`.
pub fn router(state: AppState, swagger: bool) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients).post(register_patient))
        .route("/patients/:id/history", get(medical_history))
        .route("/physicians", get(list_physicians).post(register_physician))
        .route("/physicians/:license", get(physician_by_license))
        .route("/physicians/:license/specialties", post(add_specialty))
        .route(
            "/appointments",
            get(list_appointments).post(book_appointment),
        )
        .route("/prescriptions", post(issue_prescription));

    if swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app.layer(CorsLayer::permissive()).with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Clinic REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "All registered patients, ordered by id", body = ListPatientsRes)
    )
)]
#[axum::debug_handler]
async fn list_patients(State(state): State<AppState>) -> Json<ListPatientsRes> {
    let patients = state.registry.with(|r| r.list_patients());
    Json(ListPatientsRes {
        patients: patients.iter().map(|p| PatientRes::from(p.as_ref())).collect(),
    })
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = CreatePatientReq,
    responses(
        (status = 201, description = "Patient registered", body = PatientRes),
        (status = 400, description = "Missing field", body = ErrorRes),
        (status = 409, description = "Patient id already registered", body = ErrorRes)
    )
)]
/// Register a patient.
///
/// Also opens the patient's (empty) medical history.
#[axum::debug_handler]
async fn register_patient(
    State(state): State<AppState>,
    Json(req): Json<CreatePatientReq>,
) -> Result<(StatusCode, Json<PatientRes>), ApiError> {
    let patient = state
        .registry
        .with(|r| r.register_patient(&req.name, &req.id, &req.birth_date))?;
    Ok((StatusCode::CREATED, Json(PatientRes::from(patient.as_ref()))))
}

#[utoipa::path(
    get,
    path = "/patients/{id}/history",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Appointments and prescriptions of the patient", body = MedicalHistoryRes),
        (status = 404, description = "Patient not registered", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn medical_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MedicalHistoryRes>, ApiError> {
    let patient_id = required_patient_id(&id)?;
    let history = state
        .registry
        .with(|r| r.medical_history(&patient_id).map(MedicalHistoryRes::from))?;
    Ok(Json(history))
}

#[utoipa::path(
    get,
    path = "/physicians",
    responses(
        (status = 200, description = "All registered physicians, ordered by license", body = ListPhysiciansRes)
    )
)]
#[axum::debug_handler]
async fn list_physicians(State(state): State<AppState>) -> Json<ListPhysiciansRes> {
    let physicians = state.registry.with(|r| r.list_physicians());
    Json(ListPhysiciansRes {
        physicians: physicians
            .iter()
            .map(|p| PhysicianRes::from(p.as_ref()))
            .collect(),
    })
}

#[utoipa::path(
    post,
    path = "/physicians",
    request_body = CreatePhysicianReq,
    responses(
        (status = 201, description = "Physician registered", body = PhysicianRes),
        (status = 400, description = "Missing field", body = ErrorRes),
        (status = 409, description = "License already registered", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn register_physician(
    State(state): State<AppState>,
    Json(req): Json<CreatePhysicianReq>,
) -> Result<(StatusCode, Json<PhysicianRes>), ApiError> {
    let physician = state
        .registry
        .with(|r| r.register_physician(&req.name, &req.license))?;
    Ok((
        StatusCode::CREATED,
        Json(PhysicianRes::from(physician.as_ref())),
    ))
}

#[utoipa::path(
    get,
    path = "/physicians/{license}",
    params(("license" = String, Path, description = "Physician license number")),
    responses(
        (status = 200, description = "Physician and specialties", body = PhysicianRes),
        (status = 404, description = "License not registered", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn physician_by_license(
    State(state): State<AppState>,
    Path(license): Path<String>,
) -> Result<Json<PhysicianRes>, ApiError> {
    let license = required_license(&license)?;
    let physician = state
        .registry
        .with(|r| r.physician_by_license(&license).map(PhysicianRes::from))?;
    Ok(Json(physician))
}

/// Adds a specialty to a registered physician.
///
/// Weekdays must be English day names in any case. A name outside the seven days,
/// such as `lunes`, is rejected with 400 and kind `invalid_specialty` rather than
/// skipped; only blank entries are ignored.
#[utoipa::path(
    post,
    path = "/physicians/{license}/specialties",
    params(("license" = String, Path, description = "Physician license number")),
    request_body = AddSpecialtyReq,
    responses(
        (status = 201, description = "Specialty added", body = PhysicianRes),
        (status = 400, description = "Blank name, unknown weekday name or no weekday given", body = ErrorRes),
        (status = 404, description = "License not registered", body = ErrorRes),
        (status = 409, description = "Physician already has the specialty", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn add_specialty(
    State(state): State<AppState>,
    Path(license): Path<String>,
    Json(req): Json<AddSpecialtyReq>,
) -> Result<(StatusCode, Json<PhysicianRes>), ApiError> {
    let license = required_license(&license)?;
    let physician = state
        .registry
        .with(|r| r.add_specialty(&license, &req.name, &req.weekdays))?;
    Ok((
        StatusCode::CREATED,
        Json(PhysicianRes::from(physician.as_ref())),
    ))
}

#[utoipa::path(
    get,
    path = "/appointments",
    responses(
        (status = 200, description = "All appointments in booking order", body = ListAppointmentsRes)
    )
)]
#[axum::debug_handler]
async fn list_appointments(State(state): State<AppState>) -> Json<ListAppointmentsRes> {
    let appointments = state.registry.with(|r| r.list_appointments());
    Json(ListAppointmentsRes {
        appointments: appointments.iter().map(AppointmentRes::from).collect(),
    })
}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body = BookAppointmentReq,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentRes),
        (status = 404, description = "Patient or physician not registered", body = ErrorRes),
        (status = 409, description = "Physician already booked at that time", body = ErrorRes),
        (status = 422, description = "Physician does not practise the specialty that day", body = ErrorRes)
    )
)]
/// Book an appointment.
///
/// The physician must practise the specialty on the weekday of `at`, and must not
/// already have an appointment at exactly `at`.
#[axum::debug_handler]
async fn book_appointment(
    State(state): State<AppState>,
    Json(req): Json<BookAppointmentReq>,
) -> Result<(StatusCode, Json<AppointmentRes>), ApiError> {
    let patient_id = required_patient_id(&req.patient_id)?;
    let license = required_license(&req.license)?;
    let appointment = state
        .registry
        .with(|r| r.book_appointment(&patient_id, &license, &req.specialty, req.at))?;
    Ok((StatusCode::CREATED, Json(AppointmentRes::from(&appointment))))
}

#[utoipa::path(
    post,
    path = "/prescriptions",
    request_body = IssuePrescriptionReq,
    responses(
        (status = 201, description = "Prescription issued", body = PrescriptionRes),
        (status = 400, description = "Empty or blank medication list", body = ErrorRes),
        (status = 404, description = "Patient or physician not registered", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn issue_prescription(
    State(state): State<AppState>,
    Json(req): Json<IssuePrescriptionReq>,
) -> Result<(StatusCode, Json<PrescriptionRes>), ApiError> {
    let patient_id = required_patient_id(&req.patient_id)?;
    let license = required_license(&req.license)?;
    let prescription = state
        .registry
        .with(|r| r.issue_prescription(&patient_id, &license, &req.medications))?;
    Ok((
        StatusCode::CREATED,
        Json(PrescriptionRes::from(&prescription)),
    ))
}
