//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 10 connections) - no Arc<Mutex<Connection>>
//! - One statement per operation - no transactions
//! - Affected-row counts are returned as-is; callers decide what they mean

pub mod pool;
pub mod repos;

pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
