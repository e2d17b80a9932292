//! HTTP REST surface.
//!
//! Thin axum adapters over [`crate::service::TaskService`]; no business rules
//! live here.

pub mod routes;
pub mod todos;

pub use routes::serve;
