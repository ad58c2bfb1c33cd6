// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregations over member and expense snapshots: totals, budgets,
//! filtering and sorting. Nothing here touches the store.

use crate::models::{Expense, Member};
use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Days under the daily budget needed for the "Budget Boss" badge.
pub const BUDGET_BOSS_DAYS: usize = 3;

pub fn total_earnings(members: &[Member]) -> Decimal {
    members
        .iter()
        .filter(|m| m.is_earning)
        .map(|m| m.earnings)
        .sum()
}

pub fn total_expenditure(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_earnings: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

pub fn summarize(members: &[Member], expenses: &[Expense]) -> Summary {
    let total_earnings = total_earnings(members);
    let total_expenses = total_expenditure(expenses);
    Summary {
        total_earnings,
        total_expenses,
        balance: total_earnings - total_expenses,
    }
}

pub fn spending_by_date(expenses: &[Expense]) -> BTreeMap<NaiveDate, Decimal> {
    let mut out = BTreeMap::new();
    for e in expenses {
        *out.entry(e.date).or_insert(Decimal::ZERO) += e.amount;
    }
    out
}

pub fn spending_by_category(expenses: &[Expense]) -> BTreeMap<String, Decimal> {
    let mut out = BTreeMap::new();
    for e in expenses {
        *out.entry(e.category.clone()).or_insert(Decimal::ZERO) += e.amount;
    }
    out
}

/// Monday..=Sunday of the week containing `date`.
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = date.weekday().num_days_from_monday() as u64;
    let start = date - Days::new(back);
    (start, start + Days::new(6))
}

/// First..=last day of the month containing `date`.
pub fn month_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let next = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let end = next.and_then(|n| n.pred_opt()).unwrap_or(start);
    (start, end)
}

pub fn total_between(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Decimal {
    expenses
        .iter()
        .filter(|e| start <= e.date && e.date <= end)
        .map(|e| e.amount)
        .sum()
}

/// Spending from seven days before `today` through `today`.
pub fn total_last_week(expenses: &[Expense], today: NaiveDate) -> Decimal {
    total_between(expenses, today - Days::new(7), today)
}

pub fn total_this_month(expenses: &[Expense], today: NaiveDate) -> Decimal {
    let (start, end) = month_range(today);
    total_between(expenses, start, end)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub usage: Decimal, // 0..=1
    pub exceeded: bool,
}

pub fn budget_status(
    expenses: &[Expense],
    (start, end): (NaiveDate, NaiveDate),
    limit: Decimal,
) -> BudgetStatus {
    let spent = total_between(expenses, start, end);
    let usage = if limit > Decimal::ZERO {
        (spent / limit).clamp(Decimal::ZERO, Decimal::ONE)
    } else {
        Decimal::ZERO
    };
    BudgetStatus {
        start,
        end,
        limit,
        spent,
        remaining: limit - spent,
        usage,
        exceeded: spent > limit,
    }
}

/// Number of distinct spending days whose total stays within `daily_limit`.
pub fn under_budget_days(expenses: &[Expense], daily_limit: Decimal) -> usize {
    spending_by_date(expenses)
        .values()
        .filter(|total| **total <= daily_limit)
        .count()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub categories: Vec<String>, // empty = any
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

impl ExpenseFilter {
    pub fn matches(&self, e: &Expense) -> bool {
        if self.start.is_some_and(|s| e.date < s) || self.end.is_some_and(|d| e.date > d) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.iter().any(|c| c == &e.category) {
            return false;
        }
        if self.min_amount.is_some_and(|m| e.amount < m)
            || self.max_amount.is_some_and(|m| e.amount > m)
        {
            return false;
        }
        true
    }

    pub fn apply(&self, expenses: Vec<Expense>) -> Vec<Expense> {
        expenses.into_iter().filter(|e| self.matches(e)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Amount,
    Date,
    Category,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amount" => Ok(SortKey::Amount),
            "date" => Ok(SortKey::Date),
            "category" => Ok(SortKey::Category),
            other => Err(format!("Unknown sort key '{}' (use amount|date|category)", other)),
        }
    }
}

/// Stable sort; equal keys keep their incoming order in both directions.
pub fn sort_expenses(mut expenses: Vec<Expense>, key: SortKey, ascending: bool) -> Vec<Expense> {
    expenses.sort_by(|a, b| {
        let (a, b) = if ascending { (a, b) } else { (b, a) };
        match key {
            SortKey::Amount => a.amount.cmp(&b.amount),
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Category => a.category.cmp(&b.category),
        }
    });
    expenses
}
