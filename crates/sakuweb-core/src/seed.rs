//! Built-in category set, default allocations, and seed data

use chrono::NaiveDate;
use sakuweb_store::{NewTransaction, TransactionKind};

/// A built-in category. These never live in the store; custom categories do.
#[derive(Debug, Clone, Copy)]
pub struct DefaultCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// The fixed built-in category set
pub const DEFAULT_CATEGORIES: &[DefaultCategory] = &[
    DefaultCategory { id: "food", name: "Food", icon: "coffee", color: "bg-orange-500" },
    DefaultCategory { id: "transport", name: "Transport", icon: "wallet", color: "bg-blue-500" },
    DefaultCategory { id: "entertainment", name: "Entertainment", icon: "gamepad2", color: "bg-purple-500" },
    DefaultCategory { id: "shopping", name: "Shopping", icon: "shopping-cart", color: "bg-pink-500" },
    DefaultCategory { id: "education", name: "Education", icon: "book-open", color: "bg-green-500" },
    DefaultCategory { id: "health", name: "Health", icon: "heart", color: "bg-red-500" },
    DefaultCategory { id: "gift", name: "Gift", icon: "gift", color: "bg-yellow-500" },
    DefaultCategory { id: "music", name: "Music", icon: "music", color: "bg-indigo-500" },
    DefaultCategory { id: "salary", name: "Salary", icon: "wallet", color: "bg-green-500" },
    DefaultCategory { id: "allowance", name: "Allowance", icon: "wallet", color: "bg-blue-500" },
    DefaultCategory { id: "freelance", name: "Freelance", icon: "wallet", color: "bg-purple-500" },
    DefaultCategory { id: "other", name: "Other", icon: "wallet", color: "bg-gray-500" },
];

/// Allocation used when a category has no explicit entry in the table below
pub const FALLBACK_ALLOCATION: f64 = 200_000.0;

/// The expense categories seeded with a budget on `/init`, with their
/// default monthly allocations
pub const DEFAULT_BUDGETS: &[(&str, f64)] = &[
    ("food", 500_000.0),
    ("transport", 200_000.0),
    ("entertainment", 300_000.0),
    ("shopping", 400_000.0),
    ("education", 150_000.0),
    ("health", 100_000.0),
    ("gift", 100_000.0),
    ("music", 100_000.0),
];

/// Default savings goal created by `/init`
pub const DEFAULT_GOAL_TITLE: &str = "Primary Savings Goal";
pub const DEFAULT_GOAL_TARGET: f64 = 500_000.0;
/// Months until the default goal's deadline
pub const DEFAULT_GOAL_HORIZON_MONTHS: u32 = 6;

/// Default allocation for a lazily created budget
pub fn default_allocation(category: &str) -> f64 {
    DEFAULT_BUDGETS
        .iter()
        .find(|(id, _)| *id == category)
        .map(|(_, allocated)| *allocated)
        .unwrap_or(FALLBACK_ALLOCATION)
}

/// Whether an id names one of the built-in categories
pub fn is_default_category(id: &str) -> bool {
    DEFAULT_CATEGORIES.iter().any(|c| c.id == id)
}

/// Sample transactions inserted by `/init` into an empty store
pub fn sample_transactions(today: NaiveDate) -> Vec<NewTransaction> {
    let yesterday = today.pred_opt().unwrap_or(today);
    vec![
        NewTransaction {
            kind: TransactionKind::Income,
            amount: 1_000_000.0,
            category: "allowance".to_string(),
            description: Some("Monthly allowance".to_string()),
            date: today,
        },
        NewTransaction {
            kind: TransactionKind::Expense,
            amount: 50_000.0,
            category: "food".to_string(),
            description: Some("Lunch".to_string()),
            date: today,
        },
        NewTransaction {
            kind: TransactionKind::Expense,
            amount: 25_000.0,
            category: "transport".to_string(),
            description: Some("Ride hailing".to_string()),
            date: today,
        },
        NewTransaction {
            kind: TransactionKind::Expense,
            amount: 75_000.0,
            category: "entertainment".to_string(),
            description: Some("Movie night".to_string()),
            date: yesterday,
        },
    ]
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allocation_table() {
        assert_eq!(default_allocation("food"), 500_000.0);
        assert_eq!(default_allocation("health"), 100_000.0);
        assert_eq!(default_allocation("snacks_123"), FALLBACK_ALLOCATION);
    }

    #[test]
    fn test_default_category_ids_unique() {
        for (i, a) in DEFAULT_CATEGORIES.iter().enumerate() {
            for b in &DEFAULT_CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_is_default_category() {
        assert!(is_default_category("food"));
        assert!(is_default_category("other"));
        assert!(!is_default_category("snacks_123"));
    }

    #[test]
    fn test_sample_transactions_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let samples = sample_transactions(today);
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].kind, TransactionKind::Income);
        assert_eq!(samples[3].date, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
    }
}
