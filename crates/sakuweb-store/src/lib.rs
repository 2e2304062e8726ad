//! SQLite persistence layer
//!
//! The [`Store`] wraps a connection pool and exposes one method per query the
//! service needs. Handlers never touch SQL directly; they go through
//! `sakuweb-core`, which composes these calls.

pub mod error;
pub mod models;
pub mod schema;

use std::collections::HashMap;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub use error::{StoreError, StoreResult};
pub use models::{
    Budget, Category, NewSavingsGoal, NewTransaction, SavingsGoal, Transaction, TransactionKind,
};

/// Handle to the relational store
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the database at `url` with a bounded pool
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|_| StoreError::Unavailable)?;

        Ok(Self { pool })
    }

    /// Apply the schema. Idempotent, run on every startup.
    pub async fn migrate(&self) -> StoreResult<()> {
        for statement in schema::SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(StoreError::Migration)?;
        }
        log::debug!("schema migration complete");
        Ok(())
    }

    // ==================== Transactions ====================

    /// All transactions, newest first
    pub async fn transactions(&self) -> StoreResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, kind, amount, category, description, date, created_at
            FROM transactions
            ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a transaction and return the stored row
    pub async fn insert_transaction(&self, new: &NewTransaction) -> StoreResult<Transaction> {
        let row = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (kind, amount, category, description, date)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, kind, amount, category, description, date, created_at
            "#,
        )
        .bind(new.kind)
        .bind(new.amount)
        .bind(&new.category)
        .bind(&new.description)
        .bind(new.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Whether the transaction table has no rows yet
    pub async fn transactions_empty(&self) -> StoreResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count == 0)
    }

    /// Transaction count per category, in one grouped query
    pub async fn transaction_counts(&self) -> StoreResult<HashMap<String, i64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT category, COUNT(*) FROM transactions GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    /// Transaction count for a single category
    pub async fn count_transactions_in(&self, category: &str) -> StoreResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM transactions WHERE category = ?")
                .bind(category)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    // ==================== Budgets ====================

    /// Budgets for one month, ordered by category
    pub async fn budgets_for_month(&self, month: &str) -> StoreResult<Vec<Budget>> {
        let rows = sqlx::query_as::<_, Budget>(
            r#"
            SELECT id, category, allocated, spent, month
            FROM budgets
            WHERE month = ?
            ORDER BY category ASC
            "#,
        )
        .bind(month)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Look up the budget row for a (category, month) pair
    pub async fn find_budget(&self, category: &str, month: &str) -> StoreResult<Option<Budget>> {
        let row = sqlx::query_as::<_, Budget>(
            r#"
            SELECT id, category, allocated, spent, month
            FROM budgets
            WHERE category = ? AND month = ?
            "#,
        )
        .bind(category)
        .bind(month)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert a budget row with zero spent and return it
    pub async fn insert_budget(
        &self,
        category: &str,
        allocated: f64,
        month: &str,
    ) -> StoreResult<Budget> {
        let row = sqlx::query_as::<_, Budget>(
            r#"
            INSERT INTO budgets (category, allocated, spent, month)
            VALUES (?, ?, 0, ?)
            RETURNING id, category, allocated, spent, month
            "#,
        )
        .bind(category)
        .bind(allocated)
        .bind(month)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Ensure a budget row exists for (category, month), seeding `allocated`
    /// when it has to be created. A concurrent insert of the same pair is
    /// absorbed by the UNIQUE constraint; the surviving row is returned.
    pub async fn ensure_budget(
        &self,
        category: &str,
        month: &str,
        allocated: f64,
    ) -> StoreResult<Budget> {
        sqlx::query(
            r#"
            INSERT INTO budgets (category, allocated, spent, month)
            VALUES (?, ?, 0, ?)
            ON CONFLICT (category, month) DO NOTHING
            "#,
        )
        .bind(category)
        .bind(allocated)
        .bind(month)
        .execute(&self.pool)
        .await?;

        self.find_budget(category, month)
            .await?
            .ok_or(StoreError::Query(sqlx::Error::RowNotFound))
    }

    /// Replace the allocation of an existing budget, leaving spent untouched
    pub async fn update_budget_allocated(&self, id: i64, allocated: f64) -> StoreResult<Budget> {
        let row = sqlx::query_as::<_, Budget>(
            r#"
            UPDATE budgets SET allocated = ?
            WHERE id = ?
            RETURNING id, category, allocated, spent, month
            "#,
        )
        .bind(allocated)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Atomically add `amount` to a budget's spent column
    pub async fn add_to_budget_spent(&self, id: i64, amount: f64) -> StoreResult<()> {
        sqlx::query("UPDATE budgets SET spent = spent + ? WHERE id = ?")
            .bind(amount)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ==================== Categories ====================

    /// All custom categories, ordered by name
    pub async fn categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT id, name, icon, color FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Look up one custom category
    pub async fn find_category(&self, id: &str) -> StoreResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>(
            "SELECT id, name, icon, color FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert a custom category and return the stored row
    pub async fn insert_category(&self, category: &Category) -> StoreResult<Category> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, icon, color)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, icon, color
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.icon)
        .bind(&category.color)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rename a custom category. Returns None when the id is unknown.
    pub async fn rename_category(&self, id: &str, name: &str) -> StoreResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET name = ?
            WHERE id = ?
            RETURNING id, name, icon, color
            "#,
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a custom category. Returns whether a row was removed.
    pub async fn delete_category(&self, id: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ==================== Savings goal ====================

    /// The most recently created savings goal, if any
    pub async fn latest_savings_goal(&self) -> StoreResult<Option<SavingsGoal>> {
        let row = sqlx::query_as::<_, SavingsGoal>(
            r#"
            SELECT id, title, target, current, deadline, created_at
            FROM savings_goals
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert a savings goal and return the stored row
    pub async fn insert_savings_goal(&self, new: &NewSavingsGoal) -> StoreResult<SavingsGoal> {
        let row = sqlx::query_as::<_, SavingsGoal>(
            r#"
            INSERT INTO savings_goals (title, target, current, deadline)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, target, current, deadline, created_at
            "#,
        )
        .bind(&new.title)
        .bind(new.target)
        .bind(new.current)
        .bind(new.deadline)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

// ==================== Tests ====================
