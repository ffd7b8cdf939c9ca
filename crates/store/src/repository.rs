use doccal_core::{
    errors::AppointmentResult,
    models::{
        appointment::{Appointment, AppointmentDraft},
        query::TimePeriodQuery,
    },
};

/// How the store picks the id of a newly created appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `id = number of stored appointments + 1`. After a deletion this can
    /// hand out an id that a surviving appointment already holds; lookups
    /// then resolve to the earliest inserted match.
    #[default]
    CollectionSize,
    /// Ever-increasing counter, ids are never reused.
    Monotonic,
}

/// Operations over the appointment collection.
///
/// Every method either succeeds completely or fails without touching the
/// collection. Callers are expected to serialize access, e.g. by holding the
/// repository behind a mutex.
pub trait AppointmentRepository: Send {
    /// Stores a new appointment unless a required field is empty or its
    /// `date`+`time` slot is already taken.
    fn create(&mut self, draft: AppointmentDraft) -> AppointmentResult<Appointment>;

    /// All appointments in insertion order.
    fn all(&self) -> Vec<Appointment>;

    /// Number of stored appointments.
    fn count(&self) -> usize;

    fn by_id(&self, id: u64) -> AppointmentResult<Appointment>;

    /// Appointments whose `service` equals `service`. `None` selects the
    /// appointments that have no service at all.
    fn by_service(&self, service: Option<String>) -> AppointmentResult<Vec<Appointment>>;

    fn by_patient(&self, patient: Option<String>) -> AppointmentResult<Vec<Appointment>>;

    /// Appointments at or after the instant described by `query`.
    fn by_time_period(&self, query: &TimePeriodQuery) -> AppointmentResult<Vec<Appointment>>;

    /// Merges `draft` into the appointment with the given id.
    fn update(&mut self, id: u64, draft: AppointmentDraft) -> AppointmentResult<Appointment>;

    /// Removes the appointment with the given id and returns it.
    fn delete(&mut self, id: u64) -> AppointmentResult<Appointment>;
}
