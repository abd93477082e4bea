// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::advisor::{Advisor, GeminiAdvisor};
use crate::store::Ledger;
use crate::utils::pretty_table;
use anyhow::{Context, Result};

/// One consultancy round trip. No automatic retry: a failure surfaces and
/// the user re-runs the command.
pub fn handle(ledger: &Ledger) -> Result<()> {
    let advisor = GeminiAdvisor::from_env()?;
    let report = advisor
        .full_consultancy(ledger.transactions(), ledger.goals())
        .context("Consultancy request failed; re-run `coinsight consult` to retry")?;

    println!(
        "Financial health: {} ({}/100)\n",
        report.status, report.health_score
    );
    println!("{}\n", report.analysis);

    if !report.cut_suggestions.is_empty() {
        let rows = report.cut_suggestions.iter().map(|s| vec![s.clone()]).collect();
        println!("{}", pretty_table(&["Where to cut"], rows));
    }
    if !report.investment_tips.is_empty() {
        let rows = report.investment_tips.iter().map(|s| vec![s.clone()]).collect();
        println!("{}", pretty_table(&["Where to invest"], rows));
    }
    Ok(())
}
