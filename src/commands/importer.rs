// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{TransactionDraft, TransactionKind};
use crate::store::Ledger;
use crate::utils::{parse_amount, parse_date};
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            import_transactions(ledger, sub)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// CSV columns: date, description, amount, kind, category.
///
/// Amounts accept both `1234.56` and the Brazilian `1.234,56` spelling.
/// The whole file lands or none of it does: rows are applied to a staging
/// copy that only replaces the ledger after the last row.
fn import_transactions(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut staged = ledger.clone();
    let mut count = 0usize;
    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let description = rec.get(1).context("description missing")?.trim();
        let amount_raw = rec.get(2).context("amount missing")?.trim();
        let kind_raw = rec.get(3).context("kind missing")?.trim();
        let category = rec.get(4).context("category missing")?.trim();

        let date = parse_date(date_raw)
            .with_context(|| format!("Invalid transaction date '{}'", date_raw))?;
        let amount = parse_amount(amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, description))?;
        let kind: TransactionKind = kind_raw.parse().map_err(|e: String| anyhow!(e))?;
        let category_id = staged
            .category_by_name(category)
            .ok_or_else(|| anyhow!("Category '{}' not found", category))?
            .id;

        staged.add_transaction(&TransactionDraft {
            date,
            description: description.to_string(),
            amount,
            kind,
            category_id,
            recurring: kind == TransactionKind::FixedExpense,
            installments: 1,
        })?;
        count += 1;
    }

    *ledger = staged;
    println!("Imported {} transactions from {}", count, path);
    Ok(())
}
