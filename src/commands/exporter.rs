// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::category_name;
use crate::store::Ledger;
use anyhow::Result;
use serde_json::json;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "description", "amount", "kind", "category", "recurring", "installment"])?;
            for t in ledger.transactions() {
                let installment = t
                    .installment
                    .map(|i| format!("{}/{}", i.current, i.total))
                    .unwrap_or_default();
                wtr.write_record([
                    t.date.to_string(),
                    t.description.clone(),
                    t.amount.to_string(),
                    t.kind.as_str().to_string(),
                    category_name(ledger.categories(), t.category_id).to_string(),
                    t.recurring.to_string(),
                    installment,
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for t in ledger.transactions() {
                items.push(json!({
                    "date": t.date.to_string(),
                    "description": t.description,
                    "amount": t.amount.to_string(),
                    "kind": t.kind.as_str(),
                    "category": category_name(ledger.categories(), t.category_id),
                    "recurring": t.recurring,
                    "installment": t.installment,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
