use doccal_core::{
    errors::{AppointmentError, AppointmentResult},
    models::{
        appointment::{Appointment, AppointmentDraft},
        query::TimePeriodQuery,
    },
};

use crate::repository::{AppointmentRepository, IdStrategy};

/// Process-local appointment store backed by an insertion-ordered `Vec`.
///
/// Lookups and filters are linear scans over the collection.
///
/// # Example
///
/// ```
/// use doccal_core::models::appointment::AppointmentDraft;
/// use doccal_store::{AppointmentRepository, InMemoryAppointmentStore};
///
/// let mut store = InMemoryAppointmentStore::default();
/// let created = store
///     .create(AppointmentDraft::new("Bob", "2024-01-10", "09:00"))
///     .unwrap();
/// assert_eq!(created.id, 1);
/// assert!(store.create(AppointmentDraft::new("Ann", "2024-01-10", "09:00")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAppointmentStore {
    appointments: Vec<Appointment>,
    id_strategy: IdStrategy,
    last_id: u64,
}

impl InMemoryAppointmentStore {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            appointments: Vec::new(),
            id_strategy,
            last_id: 0,
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    fn next_id(&mut self) -> u64 {
        match self.id_strategy {
            IdStrategy::CollectionSize => self.appointments.len() as u64 + 1,
            IdStrategy::Monotonic => {
                self.last_id += 1;
                self.last_id
            }
        }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.appointments.iter().position(|appointment| appointment.id == id)
    }

    fn matching<F>(&self, predicate: F, message: &str) -> AppointmentResult<Vec<Appointment>>
    where
        F: Fn(&Appointment) -> bool,
    {
        let matches: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|appointment| predicate(appointment))
            .cloned()
            .collect();

        if matches.is_empty() {
            tracing::debug!("{}", message);
            return Err(AppointmentError::NotFound(message.to_string()));
        }

        Ok(matches)
    }
}

impl AppointmentRepository for InMemoryAppointmentStore {
    fn create(&mut self, draft: AppointmentDraft) -> AppointmentResult<Appointment> {
        draft.validate()?;

        let slot = draft.slot_key();
        if self
            .appointments
            .iter()
            .any(|appointment| appointment.slot_key() == slot)
        {
            tracing::debug!("Rejecting appointment for {}: slot already booked", slot);
            return Err(AppointmentError::slot_taken());
        }

        let id = self.next_id();
        let appointment = Appointment::from_draft(id, draft);
        self.appointments.push(appointment.clone());

        tracing::debug!(
            "Appointment created: id={}, patient={}, slot={}",
            id,
            appointment.patient,
            slot
        );
        Ok(appointment)
    }

    fn all(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    fn count(&self) -> usize {
        self.appointments.len()
    }

    fn by_id(&self, id: u64) -> AppointmentResult<Appointment> {
        self.appointments
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned()
            .ok_or_else(|| {
                tracing::debug!("Appointment not found: id={}", id);
                AppointmentError::appointment_not_found()
            })
    }

    fn by_service(&self, service: Option<String>) -> AppointmentResult<Vec<Appointment>> {
        self.matching(
            |appointment| appointment.service == service,
            "Appointments not found for the specified service",
        )
    }

    fn by_patient(&self, patient: Option<String>) -> AppointmentResult<Vec<Appointment>> {
        self.matching(
            |appointment| patient.as_deref() == Some(appointment.patient.as_str()),
            "Appointments not found for the specified patient name",
        )
    }

    fn by_time_period(&self, query: &TimePeriodQuery) -> AppointmentResult<Vec<Appointment>> {
        let threshold = query.threshold();
        if threshold.is_none() {
            tracing::debug!("Unparseable time period start: {:?}", query);
        }

        self.matching(
            |appointment| match (appointment.instant(), threshold) {
                (Some(at), Some(threshold)) => at >= threshold,
                _ => false,
            },
            "Appointments not found for the specified time period",
        )
    }

    fn update(&mut self, id: u64, draft: AppointmentDraft) -> AppointmentResult<Appointment> {
        draft.validate()?;

        let index = self.position(id).ok_or_else(|| {
            tracing::debug!("Cannot update missing appointment: id={}", id);
            AppointmentError::appointment_not_found()
        })?;

        let appointment = &mut self.appointments[index];
        appointment.apply(draft);

        tracing::debug!("Appointment updated: id={}", id);
        Ok(appointment.clone())
    }

    fn delete(&mut self, id: u64) -> AppointmentResult<Appointment> {
        let index = self.position(id).ok_or_else(|| {
            tracing::debug!("Cannot delete missing appointment: id={}", id);
            AppointmentError::appointment_not_found()
        })?;

        let removed = self.appointments.remove(index);

        tracing::debug!("Appointment deleted: id={}", id);
        Ok(removed)
    }
}
