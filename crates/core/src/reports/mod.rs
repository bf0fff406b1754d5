//! DRE (Demonstrativo de Resultado do Exercício) engine.
//!
//! - `source` - The `EntrySource` seam and the joined row it yields
//! - `service` - Pure statement assembly from paid rows
//! - `indicators` - Margin percentages
//! - `evolution` - Trailing monthly totals
//! - `engine` - Owner check plus the three computations over a store
//! - `memory` - In-memory store

pub mod engine;
pub mod error;
pub mod evolution;
pub mod indicators;
pub mod memory;
pub mod service;
pub mod source;
pub mod types;


pub use engine::{DreEngine, ReportOptions};
pub use error::{ReportError, StoreError};
pub use evolution::monthly_evolution;
pub use indicators::margin;
pub use memory::MemoryEntrySource;
pub use service::DreService;
pub use source::{EntrySource, PaidEntryRow};
pub use types::*;
