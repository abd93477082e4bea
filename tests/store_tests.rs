// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use coinsight::models::{CategoryScope, TransactionDraft, TransactionKind};
use coinsight::store::Ledger;
use rust_decimal::Decimal;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, d).unwrap()
}

fn setup() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .add_category("Moradia", "Home", CategoryScope::Expense)
        .unwrap();
    ledger
        .add_category("Salário", "Wallet", CategoryScope::Income)
        .unwrap();
    ledger
}

fn expense_draft(ledger: &Ledger, amount: i64, installments: u32) -> TransactionDraft {
    TransactionDraft {
        date: date(5),
        description: "Aluguel".to_string(),
        amount: Decimal::from(amount),
        kind: TransactionKind::VariableExpense,
        category_id: ledger.category_by_name("Moradia").unwrap().id,
        recurring: false,
        installments,
    }
}

#[test]
fn appended_installments_get_sequential_ids() {
    let mut ledger = setup();
    let added = ledger
        .add_transaction(&expense_draft(&ledger, 1200, 3))
        .unwrap();
    assert_eq!(added.len(), 3);
    assert_eq!(added.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);

    // Counter keeps moving across submissions.
    let draft = expense_draft(&ledger, 50, 1);
    let next = ledger.add_transaction(&draft).unwrap();
    assert_eq!(next[0].id, 4);
    assert_eq!(ledger.transactions().len(), 4);
}

#[test]
fn rejected_drafts_leave_the_ledger_untouched() {
    let mut ledger = setup();
    let mut bad = expense_draft(&ledger, 0, 2);
    bad.amount = Decimal::ZERO;
    assert!(ledger.add_transaction(&bad).is_err());
    assert!(ledger.transactions().is_empty());

    let mut unknown_cat = expense_draft(&ledger, 100, 1);
    unknown_cat.category_id = 99;
    assert!(ledger.add_transaction(&unknown_cat).is_err());
    assert!(ledger.transactions().is_empty());
}

#[test]
fn category_applicability_gates_submissions() {
    let mut ledger = setup();
    let mut draft = expense_draft(&ledger, 100, 1);
    draft.category_id = ledger.category_by_name("Salário").unwrap().id;
    let err = ledger.add_transaction(&draft).unwrap_err();
    assert!(err.is_validation());

    // A 'both' category admits either side.
    ledger
        .add_category("Outros", "Tag", CategoryScope::Both)
        .unwrap();
    draft.category_id = ledger.category_by_name("Outros").unwrap().id;
    assert!(ledger.add_transaction(&draft).is_ok());
}

#[test]
fn replace_swaps_the_whole_record_by_id() {
    let mut ledger = setup();
    ledger
        .add_transaction(&expense_draft(&ledger, 450, 1))
        .unwrap();

    let mut replacement = ledger.transactions()[0].clone();
    replacement.description = "Supermercado".to_string();
    replacement.amount = Decimal::from(480);
    ledger.replace_transaction(replacement).unwrap();

    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.transactions()[0].description, "Supermercado");
    assert_eq!(ledger.transactions()[0].amount, Decimal::from(480));
}

#[test]
fn replace_enforces_category_applicability_too() {
    let mut ledger = setup();
    ledger
        .add_transaction(&expense_draft(&ledger, 450, 1))
        .unwrap();

    // Switching the kind to one the attached category does not admit must
    // fail the same way it would on first submission.
    let mut flipped = ledger.transactions()[0].clone();
    flipped.kind = TransactionKind::Income;
    let err = ledger.replace_transaction(flipped).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(ledger.transactions()[0].kind, TransactionKind::VariableExpense);
}

#[test]
fn replace_of_unknown_id_fails_without_mutation() {
    let mut ledger = setup();
    ledger
        .add_transaction(&expense_draft(&ledger, 450, 1))
        .unwrap();
    let mut ghost = ledger.transactions()[0].clone();
    ghost.id = 77;
    assert!(ledger.replace_transaction(ghost).is_err());
    assert_eq!(ledger.transactions()[0].amount, Decimal::from(450));
}

#[test]
fn category_names_are_unique_within_overlapping_scopes() {
    let mut ledger = setup();
    let err = ledger
        .add_category("Moradia", "Home", CategoryScope::Expense)
        .unwrap_err();
    assert!(err.is_validation());

    let err = ledger
        .add_category("Moradia", "Home", CategoryScope::Both)
        .unwrap_err();
    assert!(err.is_validation());

    // Same name on the opposite side does not collide.
    assert!(ledger
        .add_category("Moradia", "Home", CategoryScope::Income)
        .is_ok());
}

#[test]
fn goals_validate_on_create_and_replace() {
    let mut ledger = setup();
    assert!(ledger
        .add_goal("Reserva", Decimal::ZERO, Decimal::ZERO, date(1), "Segurança")
        .is_err());

    let id = ledger
        .add_goal(
            "Reserva",
            Decimal::from(15000),
            Decimal::from(3500),
            date(1),
            "Segurança",
        )
        .unwrap();

    let mut updated = ledger.goal(id).unwrap().clone();
    updated.current_amount = Decimal::from(4000);
    ledger.replace_goal(updated.clone()).unwrap();
    assert_eq!(ledger.goal(id).unwrap().current_amount, Decimal::from(4000));

    updated.id = 99;
    assert!(ledger.replace_goal(updated).is_err());
}

#[test]
fn seed_ledger_adds_up() {
    let ledger = Ledger::seed();
    assert_eq!(ledger.categories().len(), 11);
    assert_eq!(ledger.transactions().len(), 5);
    assert_eq!(ledger.goals().len(), 1);

    let s = ledger.summary();
    assert_eq!(s.total_income, Decimal::from(5500));
    assert_eq!(s.total_expenses, Decimal::from(2550));
    assert_eq!(s.balance, Decimal::from(2950));
    let names: Vec<&str> = s.category_breakdown.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Moradia", "Alimentação", "Contas", "Lazer"]);
}
