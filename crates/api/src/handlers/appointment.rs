//! # Appointment Handlers
//!
//! Thin adapters between HTTP and the appointment store. Each handler decodes
//! the request, performs exactly one store operation while holding the store
//! lock, and serializes the outcome.
//!
//! Request bodies are taken as raw JSON so that malformed or incomplete
//! bodies surface as `400 Invalid request body` instead of axum's default
//! rejection responses.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use doccal_core::{
    errors::{AppointmentError, AppointmentResult},
    models::{
        appointment::{Appointment, AppointmentDraft, DeleteAppointmentResponse},
        query::{PatientQuery, ServiceQuery, TimePeriodQuery},
    },
};
use serde_json::Value;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

fn parse_body(payload: Result<Json<Value>, JsonRejection>) -> AppointmentResult<AppointmentDraft> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection);
        AppointmentError::invalid_body()
    })?;

    AppointmentDraft::from_value(body)
}

/// Ids that are not unsigned integers cannot name any appointment.
fn parse_id(raw: &str) -> AppointmentResult<u64> {
    raw.parse()
        .map_err(|_| AppointmentError::appointment_not_found())
}

/// `POST /appointments`
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let draft = parse_body(payload)?;
    let appointment = state.store.lock().await.create(draft)?;

    tracing::info!("Booked appointment {} for {}", appointment.id, appointment.slot_key());
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// `GET /appointments`
#[axum::debug_handler]
pub async fn list_appointments(State(state): State<Arc<ApiState>>) -> Json<Vec<Appointment>> {
    Json(state.store.lock().await.all())
}

/// `GET /appointments/:id`
#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let id = parse_id(&id)?;
    let appointment = state.store.lock().await.by_id(id)?;

    Ok(Json(appointment))
}

/// `GET /appointments/byService?service=...`
#[axum::debug_handler]
pub async fn appointments_by_service(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ServiceQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.store.lock().await.by_service(query.service)?;

    Ok(Json(appointments))
}

/// `GET /appointments/byName?patient=...`
#[axum::debug_handler]
pub async fn appointments_by_patient(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<PatientQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.store.lock().await.by_patient(query.patient)?;

    Ok(Json(appointments))
}

/// `GET /appointments/byTimePeriod?startDate=...&startTime=...`
///
/// Everything booked at or after the given instant.
#[axum::debug_handler]
pub async fn appointments_by_time_period(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TimePeriodQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.store.lock().await.by_time_period(&query)?;

    Ok(Json(appointments))
}

/// `PUT /appointments/:id`
///
/// The body is validated before the id is looked up, so an invalid body
/// for an unknown id is a 400.
#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Appointment>, AppError> {
    let draft = parse_body(payload)?;
    let id = parse_id(&id)?;
    let appointment = state.store.lock().await.update(id, draft)?;

    Ok(Json(appointment))
}

/// `DELETE /appointments/:id`
#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAppointmentResponse>, AppError> {
    let id = parse_id(&id)?;
    let removed = state.store.lock().await.delete(id)?;

    tracing::info!("Cancelled appointment {} for {}", removed.id, removed.slot_key());
    Ok(Json(DeleteAppointmentResponse::default()))
}
