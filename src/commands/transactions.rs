// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::category_name;
use crate::models::{TransactionDraft, TransactionKind};
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::{anyhow, Result};
use serde::Serialize;

/// Returns whether the ledger was mutated.
pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(ledger, sub)?;
            Ok(true)
        }
        Some(("list", sub)) => {
            list(ledger, sub)?;
            Ok(false)
        }
        Some(("update", sub)) => {
            update(ledger, sub)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().trim();
    let category = sub.get_one::<String>("category").unwrap().trim();
    let kind: TransactionKind = sub
        .get_one::<String>("kind")
        .unwrap()
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let installments = *sub.get_one::<u32>("installments").unwrap();

    let category_id = ledger
        .category_by_name(category)
        .ok_or_else(|| anyhow!("Category '{}' not found (create it with `coinsight category add`)", category))?
        .id;

    let draft = TransactionDraft {
        date,
        description: description.to_string(),
        amount,
        kind,
        category_id,
        recurring: kind == TransactionKind::FixedExpense,
        installments,
    };
    let added = ledger.add_transaction(&draft)?;
    for t in added {
        println!(
            "Recorded {} on {} '{}' ({})",
            fmt_money(&t.amount),
            t.date,
            t.description,
            t.kind.as_str()
        );
    }
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.flags.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Kind", "Amount", "Flags"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub kind: String,
    pub amount: String,
    pub flags: String,
}

/// The extract view: filtered, most recent first, optionally limited.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = sub.get_one::<String>("filter").unwrap();
    let mut txs: Vec<_> = ledger
        .transactions()
        .iter()
        .filter(|t| match filter.as_str() {
            "all" => true,
            "income" => t.kind == TransactionKind::Income,
            "expense" => t.kind.is_expense(),
            _ => true,
        })
        .collect();
    txs.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }

    let data = txs
        .into_iter()
        .map(|t| {
            let mut flags = Vec::new();
            if let Some(inst) = t.installment {
                flags.push(format!("{}/{}", inst.current, inst.total));
            }
            if t.recurring {
                flags.push("recurring".to_string());
            }
            TransactionRow {
                id: t.id,
                date: t.date.to_string(),
                description: t.description.clone(),
                category: category_name(ledger.categories(), t.category_id).to_string(),
                kind: t.kind.as_str().to_string(),
                amount: fmt_money(&t.amount),
                flags: flags.join(" "),
            }
        })
        .collect();
    Ok(data)
}

/// Full-record replacement: unspecified flags keep the recorded value, and
/// the assembled record replaces the old one whole.
fn update(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut tx = ledger
        .transaction(id)
        .cloned()
        .ok_or_else(|| anyhow!("No transaction with id {}", id))?;

    if let Some(s) = sub.get_one::<String>("amount") {
        tx.amount = parse_amount(s)?;
    }
    if let Some(s) = sub.get_one::<String>("description") {
        tx.description = s.trim().to_string();
    }
    if let Some(s) = sub.get_one::<String>("category") {
        tx.category_id = ledger
            .category_by_name(s.trim())
            .ok_or_else(|| anyhow!("Category '{}' not found", s.trim()))?
            .id;
    }
    if let Some(s) = sub.get_one::<String>("kind") {
        tx.kind = s.parse().map_err(|e: String| anyhow!(e))?;
        tx.recurring = tx.kind == TransactionKind::FixedExpense;
    }
    if let Some(s) = sub.get_one::<String>("date") {
        tx.date = parse_date(s)?;
    }

    ledger.replace_transaction(tx)?;
    println!("Updated transaction {}", id);
    Ok(())
}
