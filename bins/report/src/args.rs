//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use fluxo_core::entry::{EntryFilter, EntryKind, EntryStatus};
use fluxo_shared::types::{EvolutionAnchor, period::parse_date};

#[derive(Parser)]
#[command(
    name = "fluxo-report",
    version,
    about = "Compute DRE reports and query cash-flow entries"
)]
pub struct Cli {
    /// Database URL, overriding configuration
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full report: statement, indicators and monthly evolution
    Dre {
        #[command(flatten)]
        period: PeriodArgs,
        /// Months in the evolution series
        #[arg(long)]
        months: Option<u32>,
        /// Evolution anchor: today or period_end
        #[arg(long)]
        anchor: Option<EvolutionAnchor>,
    },
    /// Income statement only
    Statement(PeriodArgs),
    /// Totals by status for both kinds
    Summary(PeriodArgs),
    /// Paginated entry listing
    Entries(EntriesArgs),
    /// Category listing
    Categories {
        /// Owner ID
        #[arg(short, long)]
        owner: i64,
        /// income or expense
        #[arg(short, long)]
        kind: Option<EntryKind>,
        /// Only active (true) or inactive (false)
        #[arg(long)]
        active: Option<bool>,
    },
}

#[derive(Args)]
pub struct PeriodArgs {
    /// Owner ID
    #[arg(short, long)]
    pub owner: i64,
    /// First day (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    pub start: String,
    /// Last day (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    pub end: String,
}

#[derive(Args)]
pub struct EntriesArgs {
    /// Owner ID
    #[arg(short, long)]
    pub owner: i64,
    /// income or expense
    #[arg(short, long, default_value = "expense")]
    pub kind: EntryKind,
    /// Category substring
    #[arg(short, long)]
    pub category: Option<String>,
    /// paid, pending or cancelled
    #[arg(long)]
    pub status: Option<EntryStatus>,
    /// Description substring
    #[arg(long)]
    pub search: Option<String>,
    /// From date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// To date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Page size
    #[arg(long, default_value_t = 20)]
    pub per_page: u32,
}

impl EntriesArgs {
    /// Builds the listing filter, parsing the optional dates.
    pub fn filter(&self) -> anyhow::Result<EntryFilter> {
        let mut filter = EntryFilter::new(self.kind);
        if let Some(category) = &self.category {
            filter = filter.with_category(category.as_str());
        }
        if let Some(search) = &self.search {
            filter = filter.with_search(search.as_str());
        }
        filter.date_from = self.from.as_deref().map(parse_date).transpose()?;
        filter.date_to = self.to.as_deref().map(parse_date).transpose()?;
        Ok(filter)
    }
}
