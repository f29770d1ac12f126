//! Core use-case services.
//!
//! # Responsibility
//! - Compose the JSON:API codec with a persistence driver.
//! - Keep callers decoupled from storage details.

pub mod chirp_service;
