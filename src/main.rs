// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use coinsight::{cli, commands, snapshot, store::Ledger};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("ledger") {
        Some(p) => PathBuf::from(p),
        None => snapshot::default_path()?,
    };

    if let Some(("init", sub)) = matches.subcommand() {
        let ledger = if sub.get_flag("seed") {
            Ledger::seed()
        } else {
            Ledger::new()
        };
        snapshot::save(&path, &ledger)?;
        println!("Ledger initialized at {}", path.display());
        return Ok(());
    }

    let mut ledger = snapshot::load_or_new(&path)?;

    let mutated = match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut ledger, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut ledger, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut ledger, sub)?,
        Some(("dashboard", sub)) => {
            commands::dashboard::handle(&ledger, sub)?;
            false
        }
        Some(("consult", _)) => {
            commands::consultant::handle(&ledger)?;
            false
        }
        Some(("import", sub)) => commands::importer::handle(&mut ledger, sub)?,
        Some(("export", sub)) => {
            commands::exporter::handle(&ledger, sub)?;
            false
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
            false
        }
    };

    if mutated {
        snapshot::save(&path, &ledger)?;
    }
    Ok(())
}
