//! Financial overview derived from transaction and investment lists.

use crate::model::finance::{Investment, Transaction, TransactionKind};
use chrono::NaiveDate;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinancialOverview {
    /// Income plus fixed income.
    pub total_income: f64,
    /// Expenses plus fixed expenses.
    pub total_expenses: f64,
    pub balance: f64,
    pub total_invested: f64,
}

pub fn financial_overview(
    transactions: &[Transaction],
    investments: &[Investment],
) -> FinancialOverview {
    let total_income: f64 = transactions
        .iter()
        .filter(|transaction| transaction.kind.is_income())
        .map(|transaction| transaction.amount)
        .sum();
    let total_expenses: f64 = transactions
        .iter()
        .filter(|transaction| transaction.kind.is_expense())
        .map(|transaction| transaction.amount)
        .sum();

    FinancialOverview {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        total_invested: investments.iter().map(|investment| investment.amount).sum(),
    }
}

/// Transactions of the given kinds, newest first.
///
/// Unparseable dates sort last; ties keep input order.
pub fn recent_transactions<'a>(
    transactions: &'a [Transaction],
    kinds: &[TransactionKind],
) -> Vec<&'a Transaction> {
    let mut selected: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| kinds.contains(&transaction.kind))
        .collect();
    selected.sort_by_key(|transaction| {
        Reverse(NaiveDate::parse_from_str(transaction.date.trim(), "%Y-%m-%d").ok())
    });
    selected
}
