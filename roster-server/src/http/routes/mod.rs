//! Route handlers organized by resource

pub mod health;
pub mod static_files;
pub mod students;
