//! HTTP surface for the annotation backend
//!
//! Wires the use case services behind an axum router: multipart uploads
//! for documents and code files, annotation CRUD with explicit save to
//! disk, and AI annotation generation. Every endpoint is a single
//! request/response step; there is no background work.

/// Error to HTTP response mapping
pub mod error;
/// Request handlers
pub mod handlers;
/// Server bootstrap
pub mod init;
/// Router construction
pub mod routes;
/// Shared handler state
pub mod state;

pub use init::{build_state, run};
pub use routes::create_router;
pub use state::AppState;
