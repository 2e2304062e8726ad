//! Core tracking and business logic
//!
//! The [`Tracker`] sits between the HTTP layer and the store: it owns the
//! budget-synchronization rule, the built-in category set, seeding, and the
//! aggregation passes in [`reports`].

pub mod error;
pub mod reports;
pub mod seed;

use async_trait::async_trait;
use chrono::{Months, Utc};

use sakuweb_utils::{month_key, unique_id};

pub use error::{CoreError, CoreResult};
pub use reports::{build_export_report, build_stats, CategoryWithCount, ExportReport, Stats};
pub use sakuweb_store::{
    Budget, Category, NewSavingsGoal, NewTransaction, SavingsGoal, Store, StoreError,
    Transaction, TransactionKind,
};

/// What `/init` actually did, for logging and the response message
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOutcome {
    pub goal_created: bool,
    pub budgets_created: usize,
    pub samples_created: usize,
}

/// Operations exposed to the HTTP layer
#[async_trait]
pub trait TrackerOperations {
    /// All transactions, newest first
    async fn transactions(&self) -> CoreResult<Vec<Transaction>>;

    /// Record a transaction; expenses also update the month's budget
    async fn add_transaction(&self, new: NewTransaction) -> CoreResult<Transaction>;

    /// Budgets for one month, ordered by category
    async fn budgets(&self, month: &str) -> CoreResult<Vec<Budget>>;

    /// Create or re-allocate the budget for (category, month)
    async fn set_budget(&self, category: &str, allocated: f64, month: &str) -> CoreResult<Budget>;

    /// Built-in and custom categories with their transaction counts
    async fn categories(&self) -> CoreResult<Vec<CategoryWithCount>>;

    /// Create a custom category
    async fn add_category(&self, name: &str, icon: &str, color: &str)
        -> CoreResult<CategoryWithCount>;

    /// Rename a custom category
    async fn rename_category(&self, id: &str, name: &str) -> CoreResult<Category>;

    /// Delete a custom category; blocked while transactions reference it
    async fn remove_category(&self, id: &str) -> CoreResult<()>;

    /// Dashboard stats over the full transaction list
    async fn stats(&self) -> CoreResult<Stats>;

    /// Full data export
    async fn export(&self) -> CoreResult<ExportReport>;

    /// Idempotent seeding of goal, budgets, and sample transactions
    async fn init(&self) -> CoreResult<InitOutcome>;
}

/// Main tracker service
pub struct Tracker {
    store: Store,
}

impl Tracker {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Locate or create the month's budget for an expense, then bump spent.
    ///
    /// The spent bump is a single SQL increment, so two expenses landing in
    /// the same category-month cannot lose each other's update. No store
    /// transaction spans the insert/update pair; a failure here after the
    /// transaction row was saved surfaces as the request's error.
    async fn sync_budget(&self, tx: &Transaction) -> CoreResult<()> {
        let month = month_key(tx.date);
        let budget = self
            .store
            .ensure_budget(&tx.category, &month, seed::default_allocation(&tx.category))
            .await?;
        self.store.add_to_budget_spent(budget.id, tx.amount).await?;
        log::debug!(
            "budget {}/{} spent +{} (now tracked against {})",
            tx.category,
            month,
            tx.amount,
            budget.allocated
        );
        Ok(())
    }
}

#[async_trait]
impl TrackerOperations for Tracker {
    async fn transactions(&self) -> CoreResult<Vec<Transaction>> {
        Ok(self.store.transactions().await?)
    }

    async fn add_transaction(&self, new: NewTransaction) -> CoreResult<Transaction> {
        let tx = self.store.insert_transaction(&new).await?;
        if tx.kind == TransactionKind::Expense {
            self.sync_budget(&tx).await?;
        }
        Ok(tx)
    }

    async fn budgets(&self, month: &str) -> CoreResult<Vec<Budget>> {
        Ok(self.store.budgets_for_month(month).await?)
    }

    async fn set_budget(&self, category: &str, allocated: f64, month: &str) -> CoreResult<Budget> {
        let budget = match self.store.find_budget(category, month).await? {
            Some(existing) => {
                self.store
                    .update_budget_allocated(existing.id, allocated)
                    .await?
            }
            None => self.store.insert_budget(category, allocated, month).await?,
        };
        Ok(budget)
    }

    async fn categories(&self) -> CoreResult<Vec<CategoryWithCount>> {
        let counts = self.store.transaction_counts().await?;
        let count_for = |id: &str| counts.get(id).copied().unwrap_or(0);

        let mut result: Vec<CategoryWithCount> = seed::DEFAULT_CATEGORIES
            .iter()
            .map(|c| CategoryWithCount {
                id: c.id.to_string(),
                name: c.name.to_string(),
                icon: c.icon.to_string(),
                color: c.color.to_string(),
                is_default: true,
                transaction_count: count_for(c.id),
            })
            .collect();

        for c in self.store.categories().await? {
            let transaction_count = count_for(&c.id);
            result.push(CategoryWithCount {
                id: c.id,
                name: c.name,
                icon: c.icon,
                color: c.color,
                is_default: false,
                transaction_count,
            });
        }

        Ok(result)
    }

    async fn add_category(
        &self,
        name: &str,
        icon: &str,
        color: &str,
    ) -> CoreResult<CategoryWithCount> {
        let category = Category {
            id: unique_id(name),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        };
        let stored = self.store.insert_category(&category).await?;
        Ok(CategoryWithCount {
            id: stored.id,
            name: stored.name,
            icon: stored.icon,
            color: stored.color,
            is_default: false,
            transaction_count: 0,
        })
    }

    async fn rename_category(&self, id: &str, name: &str) -> CoreResult<Category> {
        self.store
            .rename_category(id, name)
            .await?
            .ok_or_else(|| CoreError::CategoryNotFound { id: id.to_string() })
    }

    async fn remove_category(&self, id: &str) -> CoreResult<()> {
        let referencing = self.store.count_transactions_in(id).await?;
        if referencing > 0 {
            return Err(CoreError::CategoryInUse { id: id.to_string() });
        }
        if !self.store.delete_category(id).await? {
            return Err(CoreError::CategoryNotFound { id: id.to_string() });
        }
        Ok(())
    }

    async fn stats(&self) -> CoreResult<Stats> {
        let transactions = self.store.transactions().await?;
        let goal = self.store.latest_savings_goal().await?;
        Ok(build_stats(&transactions, goal.as_ref()))
    }

    async fn export(&self) -> CoreResult<ExportReport> {
        let transactions = self.store.transactions().await?;
        Ok(build_export_report(&transactions, Utc::now()))
    }

    async fn init(&self) -> CoreResult<InitOutcome> {
        let mut outcome = InitOutcome::default();
        let today = Utc::now().date_naive();

        if self.store.latest_savings_goal().await?.is_none() {
            let deadline = today
                .checked_add_months(Months::new(seed::DEFAULT_GOAL_HORIZON_MONTHS))
                .unwrap_or(today);
            self.store
                .insert_savings_goal(&NewSavingsGoal {
                    title: seed::DEFAULT_GOAL_TITLE.to_string(),
                    target: seed::DEFAULT_GOAL_TARGET,
                    current: 0.0,
                    deadline,
                })
                .await?;
            outcome.goal_created = true;
        }

        let month = month_key(today);
        for (category, allocated) in seed::DEFAULT_BUDGETS {
            if self.store.find_budget(category, &month).await?.is_none() {
                self.store.insert_budget(category, *allocated, &month).await?;
                outcome.budgets_created += 1;
            }
        }

        if self.store.transactions_empty().await? {
            for sample in seed::sample_transactions(today) {
                self.add_transaction(sample).await?;
                outcome.samples_created += 1;
            }
        }

        log::info!(
            "init: goal_created={} budgets_created={} samples_created={}",
            outcome.goal_created,
            outcome.budgets_created,
            outcome.samples_created
        );
        Ok(outcome)
    }
}

// ==================== Tests ====================
