//! Margin indicators.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{IncomeStatement, Indicators};

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Returns `round2(value / net_revenue * 100)`, or zero when net revenue is zero.
#[must_use]
pub fn margin(value: Decimal, net_revenue: Decimal) -> Decimal {
    if net_revenue.is_zero() {
        return Decimal::ZERO;
    }
    value
        .checked_div(net_revenue)
        .and_then(|ratio| ratio.checked_mul(PERCENT))
        .map_or(Decimal::ZERO, |pct| {
            pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        })
}

impl Indicators {
    /// Derives the margins of a statement.
    #[must_use]
    pub fn from_statement(statement: &IncomeStatement) -> Self {
        let net = statement.net_revenue;
        Self {
            gross_margin: margin(statement.gross_profit, net),
            operating_margin: margin(statement.operating_result, net),
            net_margin: margin(statement.net_profit, net),
        }
    }
}
