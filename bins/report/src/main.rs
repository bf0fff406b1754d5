//! Command-line DRE report runner for Fluxo.
//!
//! Loads configuration, connects to the database, runs one query and prints
//! the result as JSON on stdout. Logs go to stderr. Domain errors exit with
//! their `sysexits.h` status.

mod args;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use fluxo_core::category::CategoryFilter;
use fluxo_core::entry::FinancialEntry;
use fluxo_core::reports::{DreEngine, ReportOptions};
use fluxo_db::{CategoryRepository, EntryRepository, ReportRepository};
use fluxo_shared::{AppConfig, AppError};
use fluxo_shared::types::{DateRange, PageRequest, PageResponse, UserId};
use serde::Serialize;
use tracing::info;

use args::{Cli, Command, EntriesArgs, PeriodArgs};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(err.downcast_ref::<AppError>().map_or(1, AppError::exit_code))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load_with_database_url(cli.database_url.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.log);

    let db = fluxo_db::connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    match cli.command {
        Command::Dre {
            period,
            months,
            anchor,
        } => {
            let range = period.range()?;
            let mut options = ReportOptions::from(&config.report);
            if let Some(months) = months {
                options.evolution_months = months;
            }
            if let Some(anchor) = anchor {
                options.anchor = anchor;
            }
            let engine = DreEngine::new(ReportRepository::new(db));
            let report = engine
                .compute_report(UserId::new(period.owner), range, options)
                .await
                .map_err(AppError::from)?;
            info!(
                owner_id = period.owner,
                period = %range,
                months = options.evolution_months,
                "DRE report computed"
            );
            print_json(&report, cli.pretty)
        }
        Command::Statement(period) => {
            let range = period.range()?;
            let engine = DreEngine::new(ReportRepository::new(db));
            let statement = engine
                .compute_income_statement(UserId::new(period.owner), range.start, range.end)
                .await
                .map_err(AppError::from)?;
            print_json(&statement, cli.pretty)
        }
        Command::Summary(period) => {
            let range = period.range()?;
            let summary = EntryRepository::new(db)
                .summarize(UserId::new(period.owner), range)
                .await
                .map_err(AppError::from)?;
            print_json(&summary, cli.pretty)
        }
        Command::Entries(args) => {
            let page = list_entries(&EntryRepository::new(db), &args).await?;
            print_json(&page, cli.pretty)
        }
        Command::Categories {
            owner,
            kind,
            active,
        } => {
            let categories = CategoryRepository::new(db)
                .list(UserId::new(owner), CategoryFilter { kind, active })
                .await
                .map_err(AppError::from)?;
            print_json(&categories, cli.pretty)
        }
    }
}

async fn list_entries(
    repo: &EntryRepository,
    args: &EntriesArgs,
) -> anyhow::Result<PageResponse<FinancialEntry>> {
    let mut filter = args.filter()?;
    if let Some(status) = args.status {
        filter = filter.with_status(status);
    }
    let page = PageRequest::new(args.page, args.per_page);
    Ok(repo
        .list(UserId::new(args.owner), &filter, page)
        .await
        .map_err(AppError::from)?)
}

fn print_json(value: &impl Serialize, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

impl PeriodArgs {
    fn range(&self) -> anyhow::Result<DateRange> {
        Ok(DateRange::parse(&self.start, &self.end)?)
    }
}
