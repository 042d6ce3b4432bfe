//! Typed storage operations, one repository per resource.

pub mod books;
pub mod sellers;

pub use books::BookRepo;
pub use sellers::SellerRepo;
