// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::expenses::{expense_table_rows, EXPENSE_HEADERS};
use super::AppSession;
use crate::reports::{
    budget_status, month_range, summarize, total_last_week, under_budget_days, week_range,
    BudgetStatus, Summary, BUDGET_BOSS_DAYS,
};
use crate::settings::BudgetLimits;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table, today};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn top(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let n = *sub.get_one::<usize>("n").unwrap_or(&3);
    let data = session.top_expenses(n)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    // the index was just rebuilt, so its size is the number of stored expenses
    println!("{}", top_heading(data.len(), session.tracker().index().len()));
    if data.is_empty() {
        return Ok(());
    }
    let members = session.tracker().members()?;
    println!(
        "{}",
        pretty_table(&EXPENSE_HEADERS, expense_table_rows(&data, &members))
    );
    Ok(())
}

fn top_heading(shown: usize, recorded: usize) -> String {
    match (shown, recorded) {
        (_, 0) => "No expenses recorded yet.".to_string(),
        (1, _) => "Top expense".to_string(),
        (n, _) => format!("Top {} expenses", n),
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub totals: Summary,
    pub last_seven_days: Decimal,
    pub week: BudgetStatus,
    pub month: BudgetStatus,
    pub under_budget_days: usize,
    pub budget_boss: bool,
}

pub fn build_summary(session: &AppSession, on: NaiveDate) -> Result<SummaryReport> {
    let tracker = session.tracker();
    let limits = BudgetLimits::load(tracker.store().conn())?;
    let members = tracker.members()?;
    let expenses = tracker.expenses()?;
    let days = under_budget_days(&expenses, limits.daily);
    Ok(SummaryReport {
        totals: summarize(&members, &expenses),
        last_seven_days: total_last_week(&expenses, on),
        week: budget_status(&expenses, week_range(on), limits.weekly),
        month: budget_status(&expenses, month_range(on), limits.monthly),
        under_budget_days: days,
        budget_boss: days >= BUDGET_BOSS_DAYS,
    })
}

fn pct(d: Decimal) -> String {
    format!("{:.0}%", (d * Decimal::from(100)).round())
}

fn budget_rows(label: &str, st: &BudgetStatus) -> Vec<Vec<String>> {
    vec![
        vec![
            format!("{} ({} to {})", label, st.start, st.end),
            format!("limit {}", fmt_money(&st.limit)),
        ],
        vec![format!("{} spent", label), fmt_money(&st.spent)],
        vec![
            format!("{} remaining", label),
            format!(
                "{} ({} used{})",
                fmt_money(&st.remaining),
                pct(st.usage),
                if st.exceeded { ", over budget" } else { "" }
            ),
        ],
    ]
}

pub fn summary(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let on = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let report = build_summary(session, on)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let mut rows = vec![
        vec!["Total earnings".into(), fmt_money(&report.totals.total_earnings)],
        vec!["Total expenses".into(), fmt_money(&report.totals.total_expenses)],
        vec!["Balance".into(), fmt_money(&report.totals.balance)],
        vec!["Last 7 days".into(), fmt_money(&report.last_seven_days)],
    ];
    rows.extend(budget_rows("Week", &report.week));
    rows.extend(budget_rows("Month", &report.month));
    rows.push(vec![
        "Days under daily budget".into(),
        format!(
            "{}{}",
            report.under_budget_days,
            if report.budget_boss { " (Budget Boss)" } else { "" }
        ),
    ]);
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}
