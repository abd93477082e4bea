// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
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
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("coinsight")
        .about("Personal finance tracking, savings goals, and AI consultancy")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("ledger")
                .long("ledger")
                .global(true)
                .value_name("PATH")
                .help("Ledger snapshot path (defaults to the platform data dir)"),
        )
        .subcommand(
            Command::new("init")
                .about("Create a fresh ledger snapshot")
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .action(ArgAction::SetTrue)
                        .help("Start from the sample data set"),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction (variable expenses may be split into installments)")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category name (exact match)"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("variable-expense")
                                .help("income|fixed-expense|variable-expense"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(
                            Arg::new("installments")
                                .long("installments")
                                .value_parser(value_parser!(u32))
                                .default_value("1"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, most recent first")
                        .arg(
                            Arg::new("filter")
                                .long("filter")
                                .default_value("all")
                                .help("all|income|expense"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("update")
                        .about("Replace a recorded transaction whole")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("kind").long("kind"))
                        .arg(Arg::new("date").long("date")),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage the category table (append-only)")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("icon").long("icon").default_value("Tag"))
                        .arg(
                            Arg::new("applies-to")
                                .long("applies-to")
                                .default_value("expense")
                                .help("income|expense|both"),
                        ),
                )
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("goal")
                .about("Track savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("current").long("current").default_value("0"))
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("category").long("category").default_value("")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("progress").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Income, expenses, balance, category breakdown, and goals")
                .arg(
                    Arg::new("insight")
                        .long("insight")
                        .action(ArgAction::SetTrue)
                        .help("Include the AI flash insight (needs GEMINI_API_KEY)"),
                ),
        ))
        .subcommand(
            Command::new("consult")
                .about("Generate the full AI consultancy report (needs GEMINI_API_KEY)"),
        )
        .subcommand(
            Command::new("import").about("Import records").subcommand(
                Command::new("transactions")
                    .about("Import transactions from CSV: date,description,amount,kind,category")
                    .arg(Arg::new("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export records").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
}
