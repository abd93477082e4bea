// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::advisor::{Advisor, GeminiAdvisor, INSIGHT_FALLBACK};
use crate::ledger::goal_progress;
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, progress_bar};
use anyhow::Result;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let summary = ledger.summary();

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    if m.get_flag("insight") {
        // The flash insight degrades to a static line; it never blocks the
        // dashboard.
        let insight = GeminiAdvisor::from_env()
            .and_then(|a| a.dashboard_insight(ledger.transactions()))
            .unwrap_or_else(|err| {
                eprintln!("advisor unavailable: {}", err);
                INSIGHT_FALLBACK.to_string()
            });
        println!("✦ {}\n", insight);
    }

    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Balance", "Fixed", "Variable"],
            vec![vec![
                fmt_money(&summary.total_income),
                fmt_money(&summary.total_expenses),
                fmt_money(&summary.balance),
                fmt_money(&summary.fixed_expenses),
                fmt_money(&summary.variable_expenses),
            ]],
        )
    );

    if !summary.category_breakdown.is_empty() {
        let rows = summary
            .category_breakdown
            .iter()
            .map(|c| vec![c.name.clone(), fmt_money(&c.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }

    for g in ledger.goals() {
        let p = goal_progress(g)?;
        println!(
            "{} [{}] {:.0}%  ({} of {})",
            g.name,
            progress_bar(p.percent, 20),
            p.percent,
            fmt_money(&g.current_amount),
            fmt_money(&g.target_amount)
        );
    }
    Ok(())
}
