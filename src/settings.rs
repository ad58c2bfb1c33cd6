// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use serde::Serialize;

pub const WEEKLY_BUDGET: &str = "weekly_budget";
pub const MONTHLY_BUDGET: &str = "monthly_budget";
pub const DAILY_BUDGET: &str = "daily_budget";

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

fn get_decimal(conn: &Connection, key: &str, default: Decimal) -> Result<Decimal> {
    match get_setting(conn, key)? {
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .with_context(|| format!("Invalid value '{}' for setting {}", s, key)),
        None => Ok(default),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetLimits {
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub daily: Decimal,
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self {
            weekly: Decimal::from(350),
            monthly: Decimal::from(1500),
            daily: Decimal::from(50),
        }
    }
}

impl BudgetLimits {
    pub fn load(conn: &Connection) -> Result<Self> {
        let d = Self::default();
        Ok(Self {
            weekly: get_decimal(conn, WEEKLY_BUDGET, d.weekly)?,
            monthly: get_decimal(conn, MONTHLY_BUDGET, d.monthly)?,
            daily: get_decimal(conn, DAILY_BUDGET, d.daily)?,
        })
    }

    pub fn save(&self, conn: &Connection) -> Result<()> {
        set_setting(conn, WEEKLY_BUDGET, &self.weekly.to_string())?;
        set_setting(conn, MONTHLY_BUDGET, &self.monthly.to_string())?;
        set_setting(conn, DAILY_BUDGET, &self.daily.to_string())?;
        Ok(())
    }
}
