//! Categories and the DRE taxonomy.
//!
//! - `normalize` - Name normalization
//! - `taxonomy` - Statement groups and lines
//! - `classifier` - Name-based rule table, run on create and rename
//! - `types` - Category records and management inputs

pub mod classifier;
pub mod error;
pub mod normalize;
pub mod taxonomy;
pub mod types;

pub use classifier::{classify, match_expense_rule};
pub use error::CategoryError;
pub use normalize::{collapse_whitespace, fold_for_match, normalize_name};
pub use taxonomy::{DreGroup, DreSubgroup};
pub use types::{
    Category, CategoryFilter, CategoryRemoval, CategoryUpdate, DEFAULT_INCOME_CATEGORIES,
    NewCategory, ResolvedCategory, default_categories, resolve_category,
};
