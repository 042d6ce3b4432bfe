//! Persisted rows and wire shapes for the catalog resources.

pub mod books;
pub mod sellers;
