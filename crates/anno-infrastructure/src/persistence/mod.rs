//! JSON file persistence for annotations

/// One-file-per-annotation JSON persister
pub mod json_files;

pub use json_files::JsonFilePersister;
