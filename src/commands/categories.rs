// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CategoryScope;
use crate::store::Ledger;
use crate::utils::pretty_table;
use anyhow::{anyhow, Result};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<bool> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let icon = sub.get_one::<String>("icon").unwrap();
            let scope: CategoryScope = sub
                .get_one::<String>("applies-to")
                .unwrap()
                .parse()
                .map_err(|e: String| anyhow!(e))?;
            ledger.add_category(name, icon, scope)?;
            println!("Added category '{}'", name.trim());
            Ok(true)
        }
        Some(("list", _)) => {
            let data = ledger
                .categories()
                .iter()
                .map(|c| {
                    let scope = match c.applies_to {
                        CategoryScope::Income => "income",
                        CategoryScope::Expense => "expense",
                        CategoryScope::Both => "both",
                    };
                    vec![
                        c.id.to_string(),
                        c.name.clone(),
                        c.icon.clone(),
                        scope.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["ID", "Category", "Icon", "Applies To"], data)
            );
            Ok(false)
        }
        _ => Ok(false),
    }
}
