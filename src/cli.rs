// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn member_cmd() -> Command {
    Command::new("member")
        .about("Manage family members")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add a family member")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("earning")
                        .long("earning")
                        .action(ArgAction::SetTrue)
                        .help("Member is earning an income"),
                )
                .arg(
                    Arg::new("earnings")
                        .long("earnings")
                        .allow_negative_numbers(true)
                        .default_value("0"),
                ),
        )
        .subcommand(json_args(Command::new("list").about("List family members")))
        .subcommand(
            Command::new("rm")
                .about("Remove a family member")
                .arg(Arg::new("id").long("id").value_parser(value_parser!(i64)))
                .arg(Arg::new("name").long("name"))
                .group(ArgGroup::new("target").args(["id", "name"]).required(true)),
        )
        .subcommand(
            Command::new("update")
                .about("Change earning status and earnings")
                .arg(Arg::new("id").long("id").value_parser(value_parser!(i64)))
                .arg(Arg::new("name").long("name"))
                .group(ArgGroup::new("target").args(["id", "name"]).required(true))
                .arg(
                    Arg::new("earning")
                        .long("earning")
                        .required(true)
                        .value_parser(value_parser!(bool)),
                )
                .arg(
                    Arg::new("earnings")
                        .long("earnings")
                        .allow_negative_numbers(true)
                        .default_value("0"),
                ),
        )
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Record and browse expenses")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .allow_negative_numbers(true)
                        .required(true),
                )
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("description").long("description").default_value(""))
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today"))
                .arg(Arg::new("member").long("member").help("Name of the member who spent it")),
        )
        .subcommand(json_args(
            Command::new("list")
                .about("List expenses")
                .arg(Arg::new("from").long("from"))
                .arg(Arg::new("to").long("to"))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .action(ArgAction::Append),
                )
                .arg(Arg::new("min").long("min").allow_negative_numbers(true))
                .arg(Arg::new("max").long("max").allow_negative_numbers(true))
                .arg(Arg::new("sort").long("sort").help("amount|date|category"))
                .arg(Arg::new("desc").long("desc").action(ArgAction::SetTrue)),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete an expense")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Edit an expense")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(Arg::new("amount").long("amount").allow_negative_numbers(true))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("description").long("description"))
                .arg(Arg::new("date").long("date")),
        )
}

fn top_cmd() -> Command {
    json_args(
        Command::new("top").about("Show the largest expenses").arg(
            Arg::new("n")
                .long("n")
                .short('n')
                .value_parser(value_parser!(usize))
                .default_value("3"),
        ),
    )
}

fn summary_cmd() -> Command {
    json_args(
        Command::new("summary")
            .about("Totals, weekly and monthly budget status")
            .arg(Arg::new("date").long("date").help("Any day in the week/month to report")),
    )
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Budget limits")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show budget limits"))
        .subcommand(
            Command::new("set")
                .about("Change budget limits")
                .arg(Arg::new("weekly").long("weekly").allow_negative_numbers(true))
                .arg(Arg::new("monthly").long("monthly").allow_negative_numbers(true))
                .arg(Arg::new("daily").long("daily").allow_negative_numbers(true)),
        )
}

pub fn build_cli() -> Command {
    Command::new("famspend")
        .about("Family earnings and expense tracker")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("SQLite database path (overrides FAMSPEND_DB)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(member_cmd())
        .subcommand(expense_cmd())
        .subcommand(top_cmd())
        .subcommand(summary_cmd())
        .subcommand(budget_cmd())
        .subcommand(Command::new("shell").about("Interactive session with undo/redo"))
}

/// Command tree accepted on each line of the interactive shell.
pub fn build_shell_cli() -> Command {
    Command::new("famspend")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_version_flag(true)
        .subcommand(member_cmd())
        .subcommand(expense_cmd())
        .subcommand(top_cmd())
        .subcommand(summary_cmd())
        .subcommand(budget_cmd())
        .subcommand(Command::new("undo").about("Undo the last action"))
        .subcommand(Command::new("redo").about("Redo the last undone action"))
        .subcommand(json_args(Command::new("history").about("Show the undo/redo stacks")))
        .subcommand(Command::new("quit").alias("exit").about("Leave the shell"))
}
