use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/appointments",
            post(handlers::appointment::create_appointment)
                .get(handlers::appointment::list_appointments),
        )
        .route(
            "/appointments/byService",
            get(handlers::appointment::appointments_by_service),
        )
        .route(
            "/appointments/byName",
            get(handlers::appointment::appointments_by_patient),
        )
        .route(
            "/appointments/byTimePeriod",
            get(handlers::appointment::appointments_by_time_period),
        )
        .route(
            "/appointments/:id",
            get(handlers::appointment::get_appointment)
                .put(handlers::appointment::update_appointment)
                .delete(handlers::appointment::delete_appointment),
        )
}
