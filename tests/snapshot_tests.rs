// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use coinsight::models::{TransactionDraft, TransactionKind};
use coinsight::snapshot;
use coinsight::store::Ledger;
use rust_decimal::Decimal;

#[test]
fn reloaded_ledger_keeps_assigning_fresh_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let ledger = Ledger::seed();
    snapshot::save(&path, &ledger).unwrap();

    let mut reloaded = snapshot::load(&path).unwrap();
    assert_eq!(reloaded.transactions().len(), 5);
    assert_eq!(reloaded.categories().len(), 11);

    // Id assignment must continue past the seeded records, not restart.
    let draft = TransactionDraft {
        date: chrono::NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
        description: "Farmácia".to_string(),
        amount: Decimal::from(60),
        kind: TransactionKind::VariableExpense,
        category_id: reloaded.category_by_name("Saúde").unwrap().id,
        recurring: false,
        installments: 1,
    };
    let added = reloaded.add_transaction(&draft).unwrap();
    assert_eq!(added[0].id, 6);
}

#[test]
fn missing_snapshot_loads_as_an_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    let ledger = snapshot::load_or_new(&path).unwrap();
    assert!(ledger.transactions().is_empty());
    assert!(ledger.categories().is_empty());
}
