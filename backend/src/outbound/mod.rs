//! Outbound adapters implementing the repository ports.
//!
//! - `persistence`: PostgreSQL through Diesel, with embedded migrations.
//! - `memory`: a process-local store for development and tests.
//!
//! Adapters translate between domain types and storage rows. They hold no
//! business rules.

pub mod memory;
pub mod persistence;
