// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::AppSession;
use crate::models::Member;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

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
    let name = sub.get_one::<String>("name").unwrap();
    let earning = sub.get_flag("earning");
    let earnings = parse_decimal(sub.get_one::<String>("earnings").unwrap())?;
    let m = session.add_member(name, earning, earnings)?;
    println!(
        "Added member '{}' (id {}, {})",
        m.name,
        m.id.unwrap_or_default(),
        status_label(&m)
    );
    Ok(())
}

fn status_label(m: &Member) -> String {
    if m.is_earning {
        format!("earning {}", fmt_money(&m.earnings))
    } else {
        "not earning".to_string()
    }
}

fn list(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let members = session.tracker().members()?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &members)? {
        return Ok(());
    }
    if members.is_empty() {
        println!("No family members added yet.");
        return Ok(());
    }
    let rows = members
        .iter()
        .map(|m| {
            vec![
                m.id.map(|i| i.to_string()).unwrap_or_default(),
                m.name.clone(),
                if m.is_earning { "Earning" } else { "Not Earning" }.to_string(),
                fmt_money(&m.earnings),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Name", "Status", "Earnings"], rows));
    Ok(())
}

/// The member picked by `--id` or `--name`.
pub fn resolve_member(session: &AppSession, sub: &clap::ArgMatches) -> Result<Option<Member>> {
    if let Some(id) = sub.get_one::<i64>("id") {
        let members = session.tracker().members()?;
        return Ok(members.into_iter().find(|m| m.id == Some(*id)));
    }
    match sub.get_one::<String>("name") {
        Some(name) => Ok(session.tracker().find_member_by_name(name)?),
        None => Ok(None),
    }
}

fn remove(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let Some(member) = resolve_member(session, sub)? else {
        println!("No matching member");
        return Ok(());
    };
    if let Some(m) = session.delete_member(&member)? {
        println!("Removed member '{}'", m.name);
    }
    Ok(())
}

fn update(session: &mut AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let Some(member) = resolve_member(session, sub)? else {
        println!("No matching member");
        return Ok(());
    };
    let earning = *sub.get_one::<bool>("earning").unwrap();
    let earnings = parse_decimal(sub.get_one::<String>("earnings").unwrap())?;
    if let Some(m) = session.update_member(&member, earning, earnings)? {
        println!("Updated member '{}' ({})", m.name, status_label(&m));
    }
    Ok(())
}
