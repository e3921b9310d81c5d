//! Data models for showcase.

mod project;

pub use project::ProjectRecord;
