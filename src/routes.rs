use crate::state::RosterState;
use axum::{
    Router,
    routing::{delete, get},
};

pub mod dashboard;
pub mod edit;
pub mod records;
pub mod register;
pub mod student_form;

pub fn router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(dashboard::get_dashboard))
        .route(
            "/add",
            get(register::get_register).post(register::post_register),
        )
        .route("/manage", get(records::get_records))
        .route("/edit/{id}", get(edit::get_edit).put(edit::put_edit))
        .route("/internal/dashboard", get(dashboard::internal_get_dashboard))
        .route("/internal/records", get(records::internal_get_records))
        .route(
            "/internal/records/table",
            get(records::internal_get_records_table),
        )
        .route(
            "/internal/records/{id}",
            delete(records::internal_delete_record),
        )
        .route("/internal/edit/{id}", get(edit::internal_get_edit))
        .with_state(state)
}
