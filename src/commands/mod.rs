// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budget;
pub mod expenses;
pub mod members;
pub mod reports;
pub mod shell;

use crate::db::SqliteStore;
use crate::session::Session;
use anyhow::Result;

pub type AppSession = Session<SqliteStore>;

/// Run one of the subcommands shared by the binary and the shell.
/// Returns `false` when `name` is not one of them.
pub fn dispatch(session: &mut AppSession, name: &str, sub: &clap::ArgMatches) -> Result<bool> {
    match name {
        "member" => members::handle(session, sub)?,
        "expense" => expenses::handle(session, sub)?,
        "top" => reports::top(session, sub)?,
        "summary" => reports::summary(session, sub)?,
        "budget" => budget::handle(session, sub)?,
        _ => return Ok(false),
    }
    Ok(true)
}
