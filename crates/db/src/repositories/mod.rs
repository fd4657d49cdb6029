//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod character_repo;
pub mod company_repo;

pub use character_repo::CharacterRepo;
pub use company_repo::CompanyRepo;
