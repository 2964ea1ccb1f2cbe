//! Financial tracking records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Income,
    Expense,
    FixedExpense,
    FixedIncome,
    Investment,
}

impl TransactionKind {
    pub fn is_income(self) -> bool {
        matches!(self, Self::Income | Self::FixedIncome)
    }

    pub fn is_expense(self) -> bool {
        matches!(self, Self::Expense | Self::FixedExpense)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: f64,
    /// `YYYY-MM-DD` as entered.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    pub amount: f64,
    /// Annual rate in percent.
    pub interest_rate: f64,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
