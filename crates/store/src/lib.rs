//! # Appointment Store
//!
//! Owns the ordered collection of appointments and every rule that decides
//! what may enter it: slot conflict detection on create, id assignment, the
//! filtered listings and merge-style updates.
//!
//! The HTTP layer only ever talks to the [`AppointmentRepository`] trait, so
//! handlers can be exercised against [`mock::repositories::MockAppointmentRepo`].

pub mod memory;
pub mod repository;

pub mod mock;

pub use memory::InMemoryAppointmentStore;
pub use repository::{AppointmentRepository, IdStrategy};
