//! Database seeder for Fluxo development and testing.
//!
//! Seeds a demo owner, the default categories and six months of entries
//! ending with the current month. Safe to run repeatedly.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Datelike, Months, NaiveDate, Utc};
use fluxo_core::category::CategoryFilter;
use fluxo_core::entry::{EntryFilter, EntryKind, EntryStatus, NewEntry};
use fluxo_db::{CategoryRepository, EntryRepository, UserRepository};
use fluxo_shared::types::{PageRequest, UserId, period::first_of_month};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Demo owner email (consistent for all seeds)
const DEMO_EMAIL: &str = "demo@fluxo.dev";

/// Months of sample entries, current month included.
const SAMPLE_MONTHS: u32 = 6;

/// `(kind, category, description, cents, day, status)` repeated every month.
const MONTHLY_ENTRIES: &[(EntryKind, &str, &str, i64, u32, EntryStatus)] = &[
    (EntryKind::Income, "Vendas", "Serviços de funilaria", 420_000, 5, EntryStatus::Paid),
    (EntryKind::Income, "Prestação De Serviços", "Revisão completa", 180_000, 18, EntryStatus::Paid),
    (EntryKind::Income, "Vendas", "Orçamento aprovado", 95_000, 27, EntryStatus::Pending),
    (EntryKind::Expense, "Impostos", "DAS Simples Nacional", 36_000, 20, EntryStatus::Paid),
    (EntryKind::Expense, "Fornecedores", "Peças e tintas", 120_000, 8, EntryStatus::Paid),
    (EntryKind::Expense, "Frete", "Entrega de peças", 18_000, 9, EntryStatus::Paid),
    (EntryKind::Expense, "Salários", "Folha de pagamento", 150_000, 5, EntryStatus::Paid),
    (EntryKind::Expense, "Encargos Sociais", "INSS e FGTS", 40_000, 20, EntryStatus::Paid),
    (EntryKind::Expense, "Energia", "Conta de luz", 23_045, 12, EntryStatus::Paid),
    (EntryKind::Expense, "Internet E Telefone", "Plano empresarial", 12_990, 15, EntryStatus::Paid),
    (EntryKind::Expense, "Pró-labore", "Retirada do sócio", 200_000, 28, EntryStatus::Paid),
    (EntryKind::Expense, "Juros E Tarifas", "Tarifa bancária", 3_550, 2, EntryStatus::Paid),
    (EntryKind::Expense, "Aluguel", "Aluguel do galpão", 90_000, 10, EntryStatus::Paid),
    (EntryKind::Expense, "Fornecedores", "Compra parcelada", 60_000, 25, EntryStatus::Cancelled),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = fluxo_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding demo owner...");
    let owner_id = seed_demo_owner(&db).await?;

    println!("Seeding default categories...");
    seed_categories(&db, owner_id).await?;

    println!("Seeding sample entries...");
    seed_entries(&db, owner_id).await?;

    println!("Seeding complete!");
    Ok(())
}

/// Seeds the demo owner, returning its ID.
async fn seed_demo_owner(db: &DatabaseConnection) -> anyhow::Result<UserId> {
    let users = UserRepository::new(db.clone());
    if let Some(user) = users.find_by_email(DEMO_EMAIL).await? {
        println!("  Demo owner already exists (id {}), skipping...", user.id);
        return Ok(UserId::new(user.id));
    }

    let user = users
        .create("Oficina Demo", DEMO_EMAIL, "not-a-real-hash")
        .await?;
    println!("  Created demo owner: {DEMO_EMAIL} (id {})", user.id);
    Ok(UserId::new(user.id))
}

/// Seeds the default categories plus one untagged category.
async fn seed_categories(db: &DatabaseConnection, owner_id: UserId) -> anyhow::Result<()> {
    let categories = CategoryRepository::new(db.clone());
    let created = categories.ensure_defaults(owner_id).await?;
    println!("  Created {} default categories", created.len());

    let existing = categories
        .list(
            owner_id,
            CategoryFilter {
                kind: Some(EntryKind::Expense),
                active: None,
            },
        )
        .await?;
    if !existing.iter().any(|c| c.name == "Aluguel") {
        categories
            .create(fluxo_core::category::NewCategory {
                owner_id,
                kind: EntryKind::Expense,
                name: "Aluguel".to_string(),
                dre_subgroup: None,
            })
            .await?;
        println!("  Created category: Aluguel (unclassified)");
    }
    Ok(())
}

/// Seeds the monthly sample entries when the owner has none yet.
async fn seed_entries(db: &DatabaseConnection, owner_id: UserId) -> anyhow::Result<()> {
    let entries = EntryRepository::new(db.clone());
    let existing = entries
        .list(
            owner_id,
            &EntryFilter::new(EntryKind::Income),
            PageRequest::new(1, 1),
        )
        .await?;
    if existing.meta.total > 0 {
        println!("  Entries already exist, skipping...");
        return Ok(());
    }

    let current = first_of_month(Utc::now().date_naive());
    let mut count = 0;
    for back in 0..SAMPLE_MONTHS {
        let month = current
            .checked_sub_months(Months::new(back))
            .context("Month out of range")?;
        for (kind, category, description, cents, day, status) in MONTHLY_ENTRIES {
            let date = day_in_month(month, *day);
            entries
                .create(NewEntry {
                    owner_id,
                    kind: *kind,
                    description: (*description).to_string(),
                    category: (*category).to_string(),
                    amount: Decimal::new(*cents, 2),
                    date,
                    status: *status,
                    notes: None,
                })
                .await?;
            count += 1;
        }
    }
    println!("  Created {count} entries over {SAMPLE_MONTHS} months");
    Ok(())
}

/// Clamps the day to the month's length.
fn day_in_month(month_start: NaiveDate, day: u32) -> NaiveDate {
    (1..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(month_start.year(), month_start.month(), d))
        .unwrap_or(month_start)
}
