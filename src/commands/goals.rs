// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::goal_progress;
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table, progress_bar};
use anyhow::{anyhow, Result};
use serde::Serialize;

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
        Some(("progress", sub)) => {
            progress(ledger, sub)?;
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let target = parse_amount(sub.get_one::<String>("target").unwrap())?;
    let current = parse_amount(sub.get_one::<String>("current").unwrap())?;
    let deadline = parse_date(sub.get_one::<String>("deadline").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();

    let id = ledger.add_goal(name, target, current, deadline, category)?;
    println!(
        "Goal {} '{}': {} of {} by {}",
        id,
        name.trim(),
        fmt_money(&current),
        fmt_money(&target),
        deadline
    );
    Ok(())
}

#[derive(Serialize)]
struct GoalRow {
    id: i64,
    name: String,
    category: String,
    current: String,
    target: String,
    percent: String,
    deadline: String,
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data = Vec::new();
    for g in ledger.goals() {
        let p = goal_progress(g)?;
        data.push(GoalRow {
            id: g.id,
            name: g.name.clone(),
            category: g.category.clone(),
            current: fmt_money(&g.current_amount),
            target: fmt_money(&g.target_amount),
            percent: format!("{:.0}%", p.percent),
            deadline: g.deadline.to_string(),
        });
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .into_iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.name,
                    r.category,
                    r.current,
                    r.target,
                    r.percent,
                    r.deadline,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Goal", "Category", "Current", "Target", "Progress", "Deadline"],
                rows,
            )
        );
    }
    Ok(())
}

fn progress(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let goal = ledger
        .goal(id)
        .ok_or_else(|| anyhow!("No goal with id {}", id))?;
    let p = goal_progress(goal)?;
    println!(
        "{} [{}] {:.0}% ({} of {}, raw ratio {:.4})",
        goal.name,
        progress_bar(p.percent, 20),
        p.percent,
        fmt_money(&goal.current_amount),
        fmt_money(&goal.target_amount),
        p.ratio
    );
    Ok(())
}
