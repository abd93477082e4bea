// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use coinsight::{cli, commands::transactions, store::Ledger};

#[test]
fn list_limit_respected() {
    let ledger = Ledger::seed();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["coinsight", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&ledger, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            // Most recent first: the seed's latest entry is Jantar Fora.
            assert_eq!(rows[0].date, "2023-10-12");
            assert_eq!(rows[0].description, "Jantar Fora");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_filters_income_from_expenses() {
    let ledger = Ledger::seed();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["coinsight", "tx", "list", "--filter", "income"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&ledger, list_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].description, "Salário Mensal");
            assert_eq!(rows[0].kind, "income");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_resolves_category_names_and_flags() {
    let ledger = Ledger::seed();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["coinsight", "tx", "list", "--filter", "expense"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&ledger, list_m).unwrap();
            assert_eq!(rows.len(), 4);
            let rent = rows.iter().find(|r| r.description == "Aluguel").unwrap();
            assert_eq!(rent.category, "Moradia");
            assert_eq!(rent.flags, "recurring");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}
