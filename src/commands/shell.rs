// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive session. The undo/redo log lives exactly as long as the shell.

use super::{dispatch, AppSession};
use crate::cli::build_shell_cli;
use crate::utils::{maybe_print_json, pretty_table, split_line};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse and run one shell line.
pub fn run_line(session: &mut AppSession, line: &str) -> Result<Flow> {
    let words = split_line(line)?;
    if words.is_empty() {
        return Ok(Flow::Continue);
    }
    let matches = match build_shell_cli().try_get_matches_from(words) {
        Ok(m) => m,
        Err(e) => {
            // help and usage errors are shown, not fatal
            e.print()?;
            return Ok(Flow::Continue);
        }
    };
    match matches.subcommand() {
        Some(("quit", _)) => return Ok(Flow::Quit),
        Some(("undo", _)) => println!("{}", session.undo()?),
        Some(("redo", _)) => println!("{}", session.redo()?),
        Some(("history", sub)) => history(session, sub)?,
        Some((name, sub)) => {
            dispatch(session, name, sub)?;
        }
        None => {}
    }
    Ok(Flow::Continue)
}

fn history(session: &AppSession, sub: &clap::ArgMatches) -> Result<()> {
    let h = session.history();
    #[derive(serde::Serialize)]
    struct Stacks<'a> {
        undo: &'a [crate::history::Command],
        redo: &'a [crate::history::Command],
    }
    let stacks = Stacks {
        undo: h.undo_stack(),
        redo: h.redo_stack(),
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &stacks)? {
        return Ok(());
    }
    let mut rows = Vec::new();
    for c in h.undo_stack().iter().rev() {
        rows.push(vec!["undo".to_string(), c.describe()]);
    }
    for c in h.redo_stack().iter().rev() {
        rows.push(vec!["redo".to_string(), c.describe()]);
    }
    if rows.is_empty() {
        println!("History is empty");
    } else {
        println!("{}", pretty_table(&["Stack", "Action"], rows));
    }
    Ok(())
}

/// Read lines from `input` until EOF or `quit`. Errors from a single line are
/// reported and the session continues.
pub fn run<R: BufRead>(session: &mut AppSession, input: R, prompt: bool) -> Result<()> {
    let mut out = std::io::stdout();
    if prompt {
        write!(out, "famspend> ")?;
        out.flush()?;
    }
    for line in input.lines() {
        let line = line?;
        match run_line(session, &line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                warn!(error = %e, "shell command failed");
                eprintln!("Error: {:#}", e);
            }
        }
        if prompt {
            write!(out, "famspend> ")?;
            out.flush()?;
        }
    }
    Ok(())
}
