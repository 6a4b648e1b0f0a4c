//! roster-server: HTTP service for student records
//!
//! Five routes map one-to-one onto parameterized MySQL statements:
//! add, list, get by id, edit and delete. Requests are validated before
//! any statement runs, and every statement borrows a connection from one
//! shared pool.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::DbConfig;
pub use db::{create_pool, DbError, MemoryStore, StudentRepo, StudentStore};
pub use http::{build_router, run_server, ServerConfig};
pub use service::{OperationError, ServiceError, StudentService};
