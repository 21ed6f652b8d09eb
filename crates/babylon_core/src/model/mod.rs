//! Domain records owned by the core.
//!
//! # Responsibility
//! - Define the persisted ledger and lesson shapes.
//! - Keep validation next to the data it protects.
//!
//! # Invariants
//! - Transactions are immutable once persisted.
//! - Lesson completion only moves from `false` to `true`.

pub mod lesson;
pub mod transaction;
