//! Report structures for API responses
//!
//! Everything here is a pure function over fetched rows; nothing touches the
//! store. Aggregates are recomputed per request, no pagination or
//! incremental caching.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use sakuweb_store::{SavingsGoal, Transaction, TransactionKind};

use crate::seed::DEFAULT_GOAL_TARGET;

/// Headline figures for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub savings_goal: f64,
    pub current_savings: f64,
}

/// A category merged with its transaction count for the categories endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub is_default: bool,
    pub transaction_count: i64,
}

/// First and last transaction dates covered by an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Aggregate figures in an export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub total_transactions: usize,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub average_transaction: f64,
}

/// A transaction flattened for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedTransaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

/// Full data export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub generated_at: DateTime<Utc>,
    pub period: ExportPeriod,
    pub summary: ExportSummary,
    pub expenses_by_category: BTreeMap<String, f64>,
    pub income_by_category: BTreeMap<String, f64>,
    pub transactions: Vec<ExportedTransaction>,
}

/// Sum income and expense totals in one pass
pub fn totals(transactions: &[Transaction]) -> (f64, f64) {
    let mut income = 0.0;
    let mut expense = 0.0;
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => expense += tx.amount,
        }
    }
    (income, expense)
}

/// Build dashboard stats from the full transaction list and the latest goal
pub fn build_stats(transactions: &[Transaction], goal: Option<&SavingsGoal>) -> Stats {
    let (total_income, total_expense) = totals(transactions);
    Stats {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        savings_goal: goal.map(|g| g.target).unwrap_or(DEFAULT_GOAL_TARGET),
        current_savings: goal.map(|g| g.current).unwrap_or(0.0),
    }
}

/// Build the export report. `transactions` is expected newest-first, as the
/// store returns it.
pub fn build_export_report(
    transactions: &[Transaction],
    generated_at: DateTime<Utc>,
) -> ExportReport {
    let (total_income, total_expense) = totals(transactions);

    let mut expenses_by_category = BTreeMap::new();
    let mut income_by_category = BTreeMap::new();
    for tx in transactions {
        let bucket = match tx.kind {
            TransactionKind::Expense => &mut expenses_by_category,
            TransactionKind::Income => &mut income_by_category,
        };
        *bucket.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
    }

    let average_transaction = if transactions.is_empty() {
        0.0
    } else {
        (total_income + total_expense) / transactions.len() as f64
    };

    ExportReport {
        generated_at,
        period: ExportPeriod {
            start: transactions.last().map(|tx| tx.date),
            end: transactions.first().map(|tx| tx.date),
        },
        summary: ExportSummary {
            total_transactions: transactions.len(),
            total_income,
            total_expense,
            balance: total_income - total_expense,
            average_transaction,
        },
        expenses_by_category,
        income_by_category,
        transactions: transactions
            .iter()
            .map(|tx| ExportedTransaction {
                date: tx.date,
                kind: tx.kind,
                category: tx.category.clone(),
                amount: tx.amount,
                description: tx.description.clone(),
            })
            .collect(),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(id: i64, kind: TransactionKind, amount: f64, category: &str, day: u32) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        Transaction {
            id,
            kind,
            amount,
            category: category.to_string(),
            description: None,
            date,
            created_at: date.and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_stats_balance_invariant() {
        let transactions = vec![
            tx(1, TransactionKind::Income, 1_000_000.0, "allowance", 7),
            tx(2, TransactionKind::Expense, 50_000.0, "food", 7),
            tx(3, TransactionKind::Expense, 25_000.0, "transport", 6),
            tx(4, TransactionKind::Income, 300_000.0, "freelance", 5),
        ];
        let stats = build_stats(&transactions, None);
        assert_eq!(stats.total_income - stats.total_expense, stats.balance);
    }

    #[test]
    fn test_stats_income_minus_expense() {
        let transactions = vec![
            tx(1, TransactionKind::Income, 1_000_000.0, "allowance", 7),
            tx(2, TransactionKind::Expense, 50_000.0, "food", 7),
        ];
        let stats = build_stats(&transactions, None);
        assert_eq!(stats.total_income, 1_000_000.0);
        assert_eq!(stats.total_expense, 50_000.0);
        assert_eq!(stats.balance, 950_000.0);
    }

    #[test]
    fn test_stats_goal_fallbacks() {
        let stats = build_stats(&[], None);
        assert_eq!(stats.savings_goal, 500_000.0);
        assert_eq!(stats.current_savings, 0.0);

        let goal = SavingsGoal {
            id: 1,
            title: "Trip".to_string(),
            target: 2_000_000.0,
            current: 150_000.0,
            deadline: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        };
        let stats = build_stats(&[], Some(&goal));
        assert_eq!(stats.savings_goal, 2_000_000.0);
        assert_eq!(stats.current_savings, 150_000.0);
    }

    #[test]
    fn test_export_empty() {
        let report = build_export_report(&[], Utc::now());
        assert_eq!(report.summary.total_transactions, 0);
        assert_eq!(report.summary.average_transaction, 0.0);
        assert!(report.period.start.is_none());
        assert!(report.period.end.is_none());
        assert!(report.transactions.is_empty());
    }

    #[test]
    fn test_export_groups_by_category() {
        // Newest first, as the store returns them
        let transactions = vec![
            tx(3, TransactionKind::Expense, 30_000.0, "food", 9),
            tx(2, TransactionKind::Expense, 20_000.0, "food", 8),
            tx(1, TransactionKind::Income, 1_000_000.0, "salary", 1),
        ];
        let report = build_export_report(&transactions, Utc::now());

        assert_eq!(report.expenses_by_category.get("food"), Some(&50_000.0));
        assert_eq!(report.income_by_category.get("salary"), Some(&1_000_000.0));
        assert!(report.expenses_by_category.get("salary").is_none());
        assert_eq!(
            report.period.start,
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert_eq!(
            report.period.end,
            Some(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );
        assert_eq!(report.summary.average_transaction, 350_000.0);
    }
}
