use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{AppointmentError, AppointmentResult};
use crate::instant;

/// A booked appointment as held by the store and returned to clients.
///
/// Besides the fixed fields, callers may attach arbitrary extra fields; those
/// are kept in `extra` and flattened back into the record on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub patient: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Appointment {
    pub fn from_draft(id: u64, draft: AppointmentDraft) -> Self {
        Self {
            id,
            patient: draft.patient,
            date: draft.date,
            time: draft.time,
            service: draft.service.flatten(),
            extra: draft.extra,
        }
    }

    pub fn slot_key(&self) -> String {
        instant::slot_key(&self.date, &self.time)
    }

    pub fn instant(&self) -> Option<NaiveDateTime> {
        instant::combine(&self.date, &self.time)
    }

    /// Shallow merge of `draft` into this record. Required fields are always
    /// replaced, `service` only when the draft carried the key, and extra
    /// fields are overwritten or added but never removed. The id is untouched.
    pub fn apply(&mut self, draft: AppointmentDraft) {
        self.patient = draft.patient;
        self.date = draft.date;
        self.time = draft.time;
        if let Some(service) = draft.service {
            self.service = service;
        }
        self.extra.extend(draft.extra);
    }
}

/// Validated request body for creating or updating an appointment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentDraft {
    pub patient: String,
    pub date: String,
    pub time: String,
    /// `None` when the body had no `service` key, `Some(None)` for an explicit `null`.
    pub service: Option<Option<String>>,
    pub extra: Map<String, Value>,
}

impl AppointmentDraft {
    pub fn new(
        patient: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            patient: patient.into(),
            date: date.into(),
            time: time.into(),
            ..Self::default()
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(Some(service.into()));
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn slot_key(&self) -> String {
        instant::slot_key(&self.date, &self.time)
    }

    /// Checks that `patient`, `date` and `time` are all non-empty.
    pub fn validate(&self) -> AppointmentResult<()> {
        if self.patient.is_empty() || self.date.is_empty() || self.time.is_empty() {
            return Err(AppointmentError::invalid_body());
        }
        Ok(())
    }

    /// Builds a draft from a decoded JSON body.
    ///
    /// The body must be an object with non-empty string `patient`, `date` and
    /// `time` fields. `service` may be missing, `null` or a string. Any `id`
    /// supplied by the caller is dropped since ids belong to the store.
    pub fn from_value(value: Value) -> AppointmentResult<Self> {
        let Value::Object(mut fields) = value else {
            return Err(AppointmentError::invalid_body());
        };

        let patient = take_required(&mut fields, "patient")?;
        let date = take_required(&mut fields, "date")?;
        let time = take_required(&mut fields, "time")?;

        let service = match fields.remove("service") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(service)) => Some(Some(service)),
            Some(_) => {
                return Err(AppointmentError::Validation(
                    "Field `service` must be a string".to_string(),
                ));
            }
        };

        fields.remove("id");

        Ok(Self {
            patient,
            date,
            time,
            service,
            extra: fields,
        })
    }
}

impl TryFrom<Value> for AppointmentDraft {
    type Error = AppointmentError;

    fn try_from(value: Value) -> AppointmentResult<Self> {
        Self::from_value(value)
    }
}

fn take_required(fields: &mut Map<String, Value>, key: &str) -> AppointmentResult<String> {
    match fields.remove(key) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value),
        _ => Err(AppointmentError::invalid_body()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAppointmentResponse {
    pub message: String,
}

impl Default for DeleteAppointmentResponse {
    fn default() -> Self {
        Self {
            message: "Appointment deleted successfully".to_string(),
        }
    }
}
