//! Request handlers, one module per resource.

pub mod books;
pub mod sellers;
