//! Core use-case services.
//!
//! # Responsibility
//! - Turn repository calls into ledger and lesson use cases.
//! - Stay storage-agnostic; SQL lives in `repo`.

pub mod ledger_service;
pub mod progress_service;
