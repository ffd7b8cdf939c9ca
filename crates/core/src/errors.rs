use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] eyre::Report),
}

impl AppointmentError {
    pub fn invalid_body() -> Self {
        AppointmentError::Validation("Invalid request body".to_string())
    }

    pub fn appointment_not_found() -> Self {
        AppointmentError::NotFound("Appointment not found".to_string())
    }

    pub fn slot_taken() -> Self {
        AppointmentError::Conflict("Appointment time slot is already booked".to_string())
    }
}

pub type AppointmentResult<T> = Result<T, AppointmentError>;
