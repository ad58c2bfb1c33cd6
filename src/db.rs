// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreError;
use crate::models::{Expense, Member};
use crate::store::RecordStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.famspend", "Famspend", "famspend"));

pub const DB_ENV: &str = "FAMSPEND_DB";

/// `FAMSPEND_DB` if set, else the platform data dir.
pub fn db_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var(DB_ENV) {
        let p = p.trim();
        if !p.is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("famspend.sqlite"))
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS family_members(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        is_earning INTEGER NOT NULL,
        earnings TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS expenses(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        date TEXT NOT NULL,
        member_id INTEGER,
        FOREIGN KEY(member_id) REFERENCES family_members(id) ON DELETE SET NULL
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
    "#,
    )
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn =
            Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn).context("Failed to initialize schema")?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

fn parse_decimal_col(
    table: &'static str,
    field: &'static str,
    raw: String,
) -> Result<Decimal, StoreError> {
    raw.trim().parse::<Decimal>().map_err(|_| StoreError::Decode {
        table,
        field,
        value: raw,
    })
}

type MemberRow = (i64, String, bool, String);
type ExpenseRow = (i64, String, String, Option<String>, String, Option<i64>);

pub fn member_from_row(row: MemberRow) -> Result<Member, StoreError> {
    let (id, name, is_earning, earnings) = row;
    Ok(Member {
        id: Some(id),
        name,
        is_earning,
        earnings: parse_decimal_col("family_members", "earnings", earnings)?,
    })
}

pub fn expense_from_row(row: ExpenseRow) -> Result<Expense, StoreError> {
    let (id, amount, category, description, date, member_id) = row;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| StoreError::Decode {
        table: "expenses",
        field: "date",
        value: date.clone(),
    })?;
    Ok(Expense {
        id: Some(id),
        amount: parse_decimal_col("expenses", "amount", amount)?,
        category,
        description: description.unwrap_or_default(),
        date,
        owner_member_id: member_id,
    })
}

impl RecordStore for SqliteStore {
    fn create_member(&mut self, member: &Member) -> Result<i64, StoreError> {
        // A NULL id lets sqlite assign the next rowid.
        self.conn.execute(
            "INSERT INTO family_members(id, name, is_earning, earnings) VALUES (?1, ?2, ?3, ?4)",
            params![
                member.id,
                member.name,
                member.is_earning,
                member.earnings.to_string()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, is_earning, earnings FROM family_members ORDER BY id")?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, bool>(2)?,
                r.get::<_, String>(3)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(member_from_row(row?)?);
        }
        Ok(out)
    }

    fn update_member(&mut self, member: &Member) -> Result<bool, StoreError> {
        let Some(id) = member.id else {
            return Ok(false);
        };
        let n = self.conn.execute(
            "UPDATE family_members SET name=?1, is_earning=?2, earnings=?3 WHERE id=?4",
            params![member.name, member.is_earning, member.earnings.to_string(), id],
        )?;
        Ok(n > 0)
    }

    fn delete_member(&mut self, id: i64) -> Result<bool, StoreError> {
        let n = self
            .conn
            .execute("DELETE FROM family_members WHERE id=?1", params![id])?;
        Ok(n > 0)
    }

    fn create_expense(&mut self, expense: &Expense) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO expenses(id, amount, category, description, date, member_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                expense.id,
                expense.amount.to_string(),
                expense.category,
                expense.description,
                expense.date.to_string(),
                expense.owner_member_id
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_expenses(&self) -> Result<Vec<Expense>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, amount, category, description, date, member_id FROM expenses ORDER BY id",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, Option<String>>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, Option<i64>>(5)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(expense_from_row(row?)?);
        }
        Ok(out)
    }

    fn update_expense(&mut self, expense: &Expense) -> Result<bool, StoreError> {
        let Some(id) = expense.id else {
            return Ok(false);
        };
        let n = self.conn.execute(
            "UPDATE expenses SET amount=?1, category=?2, description=?3, date=?4, member_id=?5
             WHERE id=?6",
            params![
                expense.amount.to_string(),
                expense.category,
                expense.description,
                expense.date.to_string(),
                expense.owner_member_id,
                id
            ],
        )?;
        Ok(n > 0)
    }

    fn delete_expense(&mut self, id: i64) -> Result<bool, StoreError> {
        let n = self
            .conn
            .execute("DELETE FROM expenses WHERE id=?1", params![id])?;
        Ok(n > 0)
    }
}
