// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use coinsight::ledger::{compute_summary, UNCATEGORIZED};
use coinsight::models::{Category, CategoryScope, Transaction, TransactionKind};
use rust_decimal::Decimal;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, d).unwrap()
}

fn cat(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        icon: "Tag".to_string(),
        applies_to: CategoryScope::Expense,
    }
}

fn tx(id: i64, kind: TransactionKind, amount: i64, category_id: i64) -> Transaction {
    Transaction {
        id,
        date: date(1),
        description: format!("tx {}", id),
        amount: Decimal::from(amount),
        kind,
        category_id,
        recurring: false,
        installment: None,
    }
}

#[test]
fn income_minus_expenses_is_balance() {
    let cats = vec![cat(1, "Moradia")];
    let txs = vec![
        tx(1, TransactionKind::Income, 5500, 1),
        tx(2, TransactionKind::FixedExpense, 1800, 1),
    ];
    let s = compute_summary(&txs, &cats);
    assert_eq!(s.total_income, Decimal::from(5500));
    assert_eq!(s.total_expenses, Decimal::from(1800));
    assert_eq!(s.balance, Decimal::from(3700));
    assert_eq!(s.fixed_expenses, Decimal::from(1800));
    assert_eq!(s.variable_expenses, Decimal::ZERO);
}

#[test]
fn balance_identity_holds_for_mixed_sequences() {
    let cats = vec![cat(1, "Moradia"), cat(2, "Lazer")];
    let txs = vec![
        tx(1, TransactionKind::Income, 5500, 1),
        tx(2, TransactionKind::FixedExpense, 1800, 1),
        tx(3, TransactionKind::VariableExpense, 180, 2),
        tx(4, TransactionKind::Income, 750, 1),
        tx(5, TransactionKind::VariableExpense, 450, 2),
    ];
    let s = compute_summary(&txs, &cats);
    assert_eq!(s.balance, s.total_income - s.total_expenses);
    assert_eq!(s.total_expenses, s.fixed_expenses + s.variable_expenses);
}

#[test]
fn breakdown_accumulates_in_first_occurrence_order() {
    let cats = vec![cat(1, "Moradia"), cat(2, "Alimentação")];
    let txs = vec![
        tx(1, TransactionKind::FixedExpense, 1800, 1),
        tx(2, TransactionKind::VariableExpense, 450, 2),
        tx(3, TransactionKind::VariableExpense, 100, 1),
    ];
    let s = compute_summary(&txs, &cats);
    let names: Vec<&str> = s.category_breakdown.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Moradia", "Alimentação"]);
    assert_eq!(s.category_breakdown[0].total, Decimal::from(1900));
    assert_eq!(s.category_breakdown[1].total, Decimal::from(450));
}

#[test]
fn breakdown_ignores_income_and_is_deterministic() {
    let cats = vec![cat(1, "Moradia")];
    let txs = vec![
        tx(1, TransactionKind::Income, 5500, 1),
        tx(2, TransactionKind::FixedExpense, 1800, 1),
    ];
    let first = compute_summary(&txs, &cats);
    let second = compute_summary(&txs, &cats);
    assert_eq!(first.category_breakdown.len(), 1);
    assert_eq!(
        first
            .category_breakdown
            .iter()
            .map(|c| (c.name.clone(), c.total))
            .collect::<Vec<_>>(),
        second
            .category_breakdown
            .iter()
            .map(|c| (c.name.clone(), c.total))
            .collect::<Vec<_>>(),
    );
}

#[test]
fn dangling_category_id_reads_as_uncategorized() {
    let cats = vec![cat(1, "Moradia")];
    let txs = vec![tx(1, TransactionKind::VariableExpense, 90, 42)];
    let s = compute_summary(&txs, &cats);
    assert_eq!(s.category_breakdown[0].name, UNCATEGORIZED);
}

#[test]
fn category_names_match_case_sensitively() {
    let cats = vec![cat(1, "Lazer"), cat(2, "lazer")];
    let txs = vec![
        tx(1, TransactionKind::VariableExpense, 100, 1),
        tx(2, TransactionKind::VariableExpense, 50, 2),
    ];
    let s = compute_summary(&txs, &cats);
    assert_eq!(s.category_breakdown.len(), 2);
}
