//! Table definitions
//!
//! Statements are idempotent so migration can run on every startup.

/// All schema statements, applied in order
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        kind        TEXT NOT NULL,
        amount      REAL NOT NULL,
        category    TEXT NOT NULL,
        description TEXT,
        date        TEXT NOT NULL,
        created_at  TEXT NOT NULL DEFAULT (datetime('now'))
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_transactions_category
        ON transactions (category)
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS budgets (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        category  TEXT NOT NULL,
        allocated REAL NOT NULL,
        spent     REAL NOT NULL DEFAULT 0,
        month     TEXT NOT NULL,
        UNIQUE (category, month)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS categories (
        id    TEXT PRIMARY KEY,
        name  TEXT NOT NULL,
        icon  TEXT NOT NULL,
        color TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS savings_goals (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        title      TEXT NOT NULL,
        target     REAL NOT NULL,
        current    REAL NOT NULL DEFAULT 0,
        deadline   TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )
    "#,
];
