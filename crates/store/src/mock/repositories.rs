use mockall::mock;

use doccal_core::{
    errors::AppointmentResult,
    models::{
        appointment::{Appointment, AppointmentDraft},
        query::TimePeriodQuery,
    },
};

use crate::repository::AppointmentRepository;

// Mock repository for handler tests
mock! {
    pub AppointmentRepo {}

    impl AppointmentRepository for AppointmentRepo {
        fn create(&mut self, draft: AppointmentDraft) -> AppointmentResult<Appointment>;

        fn all(&self) -> Vec<Appointment>;

        fn count(&self) -> usize;

        fn by_id(&self, id: u64) -> AppointmentResult<Appointment>;

        fn by_service(&self, service: Option<String>) -> AppointmentResult<Vec<Appointment>>;

        fn by_patient(&self, patient: Option<String>) -> AppointmentResult<Vec<Appointment>>;

        fn by_time_period(&self, query: &TimePeriodQuery) -> AppointmentResult<Vec<Appointment>>;

        fn update(&mut self, id: u64, draft: AppointmentDraft) -> AppointmentResult<Appointment>;

        fn delete(&mut self, id: u64) -> AppointmentResult<Appointment>;
    }
}
