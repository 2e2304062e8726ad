//! Row models for the relational store
//!
//! These structs map one-to-one onto table rows and serialize in the
//! camelCase shape the HTTP API exposes.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Transaction kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, allowance, freelance)
    Income,
    /// Money going out (food, transport, shopping)
    Expense,
}

impl std::str::FromStr for TransactionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded income or expense transaction
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Fields for a transaction about to be inserted
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Monthly spending allocation for one category
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    /// Month key in "YYYY-MM" form
    pub month: String,
}

/// A user-defined transaction category
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Singleton savings target tracker
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: i64,
    pub title: String,
    pub target: f64,
    pub current: f64,
    pub deadline: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Fields for a savings goal about to be inserted
#[derive(Debug, Clone)]
pub struct NewSavingsGoal {
    pub title: String,
    pub target: f64,
    pub current: f64,
    pub deadline: NaiveDate,
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_kind_roundtrip() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("Expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
        assert_eq!(TransactionKind::Income.to_string(), "income");
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
    }

    #[test]
    fn test_transaction_serializes_type_field() {
        let tx = Transaction {
            id: 1,
            kind: TransactionKind::Expense,
            amount: 50000.0,
            category: "food".to_string(),
            description: Some("Lunch".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 7)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["amount"], 50000.0);
        assert_eq!(json["date"], "2024-03-07");
        assert!(json.get("createdAt").is_some());
    }
}
