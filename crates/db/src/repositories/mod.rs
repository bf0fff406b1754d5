//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod category;
pub mod entry;
pub mod report;
pub mod user;

pub use category::{CategoryRepoError, CategoryRepository};
pub use entry::{EntryRepoError, EntryRepository};
pub use report::ReportRepository;
pub use user::{UserError, UserRepository};
