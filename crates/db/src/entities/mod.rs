//! `SeaORM` entity definitions.

pub mod categories;
pub mod financial_entries;
pub mod sea_orm_active_enums;
pub mod users;
