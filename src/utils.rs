// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays print one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

// Runs of unquoted whitespace become one space so that every empty csv
// field left afterwards was written as `""`.
fn collapse_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quoted = false;
    let mut gap = false;
    for c in line.trim().chars() {
        if c == '"' {
            quoted = !quoted;
        }
        if !quoted && c.is_whitespace() {
            if !gap {
                out.push(' ');
            }
            gap = true;
            continue;
        }
        gap = false;
        out.push(c);
    }
    out
}

/// Split a shell line into words. Double quotes group words with spaces, and
/// `""` is an empty word.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let collapsed = collapse_spaces(line);
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_reader(collapsed.as_bytes());
    let mut words = Vec::new();
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("Could not parse '{}'", line))?;
        words.extend(rec.iter().map(str::to_string));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_respects_quotes() {
        let w = split_line(r#"expense add --amount 12.5  --description "Lunch at cafe""#).unwrap();
        assert_eq!(
            w,
            vec!["expense", "add", "--amount", "12.5", "--description", "Lunch at cafe"]
        );
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn quoted_empty_word_is_kept() {
        assert_eq!(split_line(r#"a --d """#).unwrap(), vec!["a", "--d", ""]);
        assert_eq!(split_line("a \t  b").unwrap(), vec!["a", "b"]);
        assert_eq!(
            split_line(r#"x "two  spaces" """#).unwrap(),
            vec!["x", "two  spaces", ""]
        );
    }

    #[test]
    fn money_has_two_places() {
        assert_eq!(fmt_money(&"10".parse().unwrap()), "10.00");
        assert_eq!(fmt_money(&"3.14159".parse().unwrap()), "3.14");
    }
}
