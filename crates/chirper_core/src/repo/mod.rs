//! Persistence contract and SQLite implementation for chirps.
//!
//! # Responsibility
//! - Define the storage-agnostic `PersistenceDriver` capability.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every storage failure mode surfaces as `StorageFailure`.
//! - Drivers borrow their connection; they never open or close it.

pub mod persistence;
pub mod sqlite_driver;
