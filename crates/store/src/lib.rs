//! # Perch Store Crate
//!
//! This crate persists the user's property list in a local embedded SQLite
//! file. It is the system's only durable state: everything else (metrics,
//! AI content) is recomputed or re-fetched on demand.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** This crate is an adapter that encapsulates all
//!   storage-specific logic. It provides a clean, abstract API to the rest
//!   of the application, hiding the underlying SQL and mapping details.
//! - **Local only:** The store is a single file owned by the user, not a
//!   database service. There is no server-side persistence in this system.
//! - **Asynchronous & Pooled:** All operations are asynchronous and go
//!   through a connection pool.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the connection pool.
//! - `run_migrations`: A utility to apply migrations, ensuring the schema is up-to-date.
//! - `PropertyRepository`: The main struct that holds the connection pool and
//!   provides the high-level data access methods (e.g., `get_all_properties`).
//! - `StoreError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::StoreError;
pub use repository::PropertyRepository;
