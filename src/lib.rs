//! # Tasklist
//!
//! A minimal to-do manager exposing the same CRUD operations through two
//! surfaces — a command-line interface and an HTTP REST API — both backed by
//! a flat JSON file used as the single source of truth.
//!
//! ```text
//!   CLI (clap)        REST (axum)
//!        │                 │
//!        └───────┬─────────┘
//!                ▼
//!          TaskService ──► Validation
//!                │
//!                ▼
//!           TaskStore ──► tasks.json
//! ```
//!
//! Every operation is a full load → mutate → save cycle against the file; no
//! task state is cached between calls, and the last writer wins when two
//! processes race. Single-user, single-writer by design.
//!
//! ## Modules
//! - `task`: the task entity
//! - `validation`: deadline parsing and string sanitization
//! - `storage`: JSON-file persistence
//! - `service`: business rules (uniqueness, lookups, filters)
//! - `cli` / `api`: the two thin surfaces
//! - `config`: data-file path and server bind settings

pub mod api;
pub mod cli;
pub mod config;
pub mod service;
pub mod storage;
pub mod task;
pub mod validation;

pub use config::Config;
pub use service::{ListFilter, TaskError, TaskService};
pub use storage::{StorageError, TaskStore};
pub use task::Task;
