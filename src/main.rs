// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use famspend::{cli, commands, db, session::Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "famspend=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p),
        None => db::db_path()?,
    };
    let store = db::SqliteStore::open(&path)?;
    let mut session = Session::new(store)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("shell", _)) => {
            let stdin = std::io::stdin();
            let prompt = stdin.is_terminal();
            commands::shell::run(&mut session, stdin.lock(), prompt)?;
        }
        Some((name, sub)) => {
            commands::dispatch(&mut session, name, sub)?;
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
