// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::AppSession;
use crate::settings::BudgetLimits;
use crate::utils::{fmt_money, parse_decimal, pretty_table};
use anyhow::{bail, Result};
use rust_decimal::Decimal;

pub fn handle(session: &mut AppSession, m: &clap::ArgMatches) -> Result<()> {
    let conn = session.tracker().store().conn();
    match m.subcommand() {
        Some(("show", _)) => {
            let l = BudgetLimits::load(conn)?;
            let rows = vec![
                vec!["Daily".to_string(), fmt_money(&l.daily)],
                vec!["Weekly".to_string(), fmt_money(&l.weekly)],
                vec!["Monthly".to_string(), fmt_money(&l.monthly)],
            ];
            println!("{}", pretty_table(&["Budget", "Limit"], rows));
        }
        Some(("set", sub)) => {
            let mut l = BudgetLimits::load(conn)?;
            let parse = |key: &str| -> Result<Option<Decimal>> {
                match sub.get_one::<String>(key) {
                    Some(s) => {
                        let v = parse_decimal(s)?;
                        if v < Decimal::ZERO {
                            bail!("Budget limit cannot be negative: {}", v);
                        }
                        Ok(Some(v))
                    }
                    None => Ok(None),
                }
            };
            if let Some(v) = parse("weekly")? {
                l.weekly = v;
            }
            if let Some(v) = parse("monthly")? {
                l.monthly = v;
            }
            if let Some(v) = parse("daily")? {
                l.daily = v;
            }
            l.save(conn)?;
            println!(
                "Budget limits: daily {}, weekly {}, monthly {}",
                fmt_money(&l.daily),
                fmt_money(&l.weekly),
                fmt_money(&l.monthly)
            );
        }
        _ => {}
    }
    Ok(())
}
