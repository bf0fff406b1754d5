//! Income ("receitas") and expense ("despesas") entries.
//!
//! - `types` - Entry records and CRUD inputs
//! - `validation` - Input normalization and business rules
//! - `filter` - The listing filter shared by storage backends and the DRE engine
//! - `summary` - Per-status period totals

pub mod error;
pub mod filter;
pub mod summary;
pub mod types;
pub mod validation;

pub use error::EntryError;
pub use filter::{EntryFilter, paginate, sort_for_listing};
pub use summary::{KindTotals, PeriodSummary};
pub use types::{EntryKind, EntryStatus, EntryUpdate, FinancialEntry, NewEntry};
pub use validation::{ValidEntry, validate_new_entry, validate_update};
