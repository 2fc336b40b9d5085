use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopledger_core::{ExpenseId, lenient_f64};

/// A recorded business expense. Unrelated to any product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    /// Category or free-text description of the expense.
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Expense {
    pub fn new(id: ExpenseId, amount: f64, description: impl Into<String>) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            date: Utc::now(),
        }
    }
}
