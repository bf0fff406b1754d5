//! Core business logic for Fluxo.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `entry` - Income and expense entries, validation, filtering, period summaries
//! - `category` - Category normalization and the DRE taxonomy classifier
//! - `reports` - DRE (income statement) engine, margin indicators, monthly evolution

pub mod category;
pub mod entry;
pub mod reports;
