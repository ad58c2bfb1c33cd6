// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::AppSession;
use crate::models::{Expense, Member};
use crate::reports::{sort_expenses, ExpenseFilter, SortKey};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table, today};
use anyhow::{anyhow, Context, Result};

pub fn handle(session: &mut AppSession, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("rm", sub)) => remove(session, sub)?,
        Some(("update", sub)) => update(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let description = sub.get_one::<String>("description").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let owner = match sub.get_one::<String>("member") {
        Some(name) => {
            let m = session
                .tracker()
                .find_member_by_name(name)?
                .with_context(|| format!("Member '{}' not found", name.trim()))?;
            m.id
        }
        None => None,
    };
    let e = session.add_expense_for(amount, category, description, date, owner)?;
    println!(
        "Recorded {} {} on {} (id {})",
        fmt_money(&e.amount),
        e.category,
        e.date,
        e.id.unwrap_or_default()
    );
    Ok(())
}

/// Expenses selected and ordered by the `list` arguments.
pub fn query_rows(session: &AppSession, sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let filter = ExpenseFilter {
        start: sub.get_one::<String>("from").map(|s| parse_date(s)).transpose()?,
        end: sub.get_one::<String>("to").map(|s| parse_date(s)).transpose()?,
        categories: sub
            .get_many::<String>("category")
            .map(|v| v.map(|c| c.trim().to_string()).collect())
            .unwrap_or_default(),
        min_amount: sub.get_one::<String>("min").map(|s| parse_decimal(s)).transpose()?,
        max_amount: sub.get_one::<String>("max").map(|s| parse_decimal(s)).transpose()?,
    };
    let rows = filter.apply(session.tracker().expenses()?);
    match sub.get_one::<String>("sort") {
        Some(key) => {
            let key = key.parse::<SortKey>().map_err(|e| anyhow!(e))?;
            Ok(sort_expenses(rows, key, !sub.get_flag("desc")))
        }
        None => Ok(rows),
    }
}

fn member_name(members: &[Member], id: Option<i64>) -> String {
    id.and_then(|id| members.iter().find(|m| m.id == Some(id)))
        .map(|m| m.name.clone())
        .unwrap_or_default()
}

pub fn expense_table_rows(expenses: &[Expense], members: &[Member]) -> Vec<Vec<String>> {
    expenses
        .iter()
        .map(|e| {
            vec![
                e.id.map(|i| i.to_string()).unwrap_or_default(),
                e.date.to_string(),
                e.category.clone(),
                fmt_money(&e.amount),
                e.description.clone(),
                member_name(members, e.owner_member_id),
            ]
        })
        .collect()
}

pub const EXPENSE_HEADERS: [&str; 6] = ["ID", "Date", "Category", "Amount", "Description", "Member"];

fn list(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(session, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }
    let members = session.tracker().members()?;
    println!(
        "{}",
        pretty_table(&EXPENSE_HEADERS, expense_table_rows(&data, &members))
    );
    Ok(())
}

fn remove(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let Some(expense) = session.tracker().find_expense(id)? else {
        println!("No expense with id {}", id);
        return Ok(());
    };
    if let Some(e) = session.delete_expense(&expense)? {
        println!("Deleted expense {} ({} {})", id, fmt_money(&e.amount), e.category);
    }
    Ok(())
}

fn update(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let Some(mut expense) = session.tracker().find_expense(id)? else {
        println!("No expense with id {}", id);
        return Ok(());
    };
    if let Some(s) = sub.get_one::<String>("amount") {
        expense.amount = parse_decimal(s)?;
    }
    if let Some(s) = sub.get_one::<String>("category") {
        expense.category = s.clone();
    }
    if let Some(s) = sub.get_one::<String>("description") {
        expense.description = s.clone();
    }
    if let Some(s) = sub.get_one::<String>("date") {
        expense.date = parse_date(s)?;
    }
    if session.update_expense(&expense)? {
        println!("Updated expense {}", id);
    }
    Ok(())
}
