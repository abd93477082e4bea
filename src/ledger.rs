// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::errors::LedgerError;
use crate::models::{
    Category, CategoryTotal, Goal, GoalProgress, Installment, Summary, Transaction,
    TransactionDraft, TransactionKind,
};

/// Breakdown key for transactions whose category id resolves to nothing.
pub const UNCATEGORIZED: &str = "(uncategorized)";

/// Compute the dashboard summary for one ordered transaction sequence.
///
/// Pure function of its inputs: no mutation, and the same input ordering
/// always yields the same output, including breakdown order. The category
/// breakdown covers expenses only, accumulated by resolved category name
/// (case-sensitive) in first-occurrence order.
pub fn compute_summary(transactions: &[Transaction], categories: &[Category]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut fixed_expenses = Decimal::ZERO;
    let mut variable_expenses = Decimal::ZERO;
    let mut breakdown: Vec<CategoryTotal> = Vec::new();

    for t in transactions {
        if t.kind == TransactionKind::Income {
            total_income += t.amount;
            continue;
        }
        total_expenses += t.amount;
        if t.kind == TransactionKind::FixedExpense {
            fixed_expenses += t.amount;
        } else {
            variable_expenses += t.amount;
        }
        let name = category_name(categories, t.category_id);
        match breakdown.iter_mut().find(|c| c.name == name) {
            Some(slot) => slot.total += t.amount,
            None => breakdown.push(CategoryTotal {
                name: name.to_string(),
                total: t.amount,
            }),
        }
    }

    Summary {
        balance: total_income - total_expenses,
        total_income,
        total_expenses,
        fixed_expenses,
        variable_expenses,
        category_breakdown: breakdown,
    }
}

pub fn category_name(categories: &[Category], id: i64) -> &str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// Reject a draft that must not enter the ledger.
///
/// Category existence is checked by the owning store, which holds the
/// category table; everything self-contained is checked here.
pub fn validate_draft(draft: &TransactionDraft) -> Result<(), LedgerError> {
    if draft.amount <= Decimal::ZERO {
        return Err(LedgerError::validation(
            "amount",
            format!("must be positive, got {}", draft.amount),
        ));
    }
    if draft.description.trim().is_empty() {
        return Err(LedgerError::validation("description", "must not be empty"));
    }
    if draft.installments < 1 {
        return Err(LedgerError::validation(
            "installments",
            "must be at least 1",
        ));
    }
    Ok(())
}

/// Expand a draft into the dated transactions it stands for.
///
/// A variable expense with N > 1 installments becomes N transactions, one
/// calendar month apart, descriptions suffixed "(i/N)". Every other draft
/// passes through as a single transaction. The recorded `recurring` flag is
/// derived here, never taken from the draft: true exactly for fixed
/// expenses. Ids are assigned from `first_id` upward in output order.
///
/// The per-installment amount is the principal divided by N and rounded to
/// two decimal places; the division remainder lands on the final installment
/// so the parts always add back up to the principal exactly.
///
/// Month arithmetic clamps to the last valid day of the target month:
/// Jan 31 + 1 month is Feb 28 (or 29), never a rollover into March.
pub fn expand_installments(
    draft: &TransactionDraft,
    first_id: i64,
) -> Result<Vec<Transaction>, LedgerError> {
    validate_draft(draft)?;

    let n = draft.installments;
    if draft.kind != TransactionKind::VariableExpense || n == 1 {
        return Ok(vec![Transaction {
            id: first_id,
            date: draft.date,
            description: draft.description.clone(),
            amount: draft.amount,
            kind: draft.kind,
            category_id: draft.category_id,
            recurring: draft.kind == TransactionKind::FixedExpense,
            installment: None,
        }]);
    }

    let base = (draft.amount / Decimal::from(n)).round_dp(2);
    let last = draft.amount - base * Decimal::from(n - 1);
    if base <= Decimal::ZERO || last <= Decimal::ZERO {
        return Err(LedgerError::validation(
            "amount",
            format!("{} is too small to split into {} installments", draft.amount, n),
        ));
    }

    let mut out = Vec::with_capacity(n as usize);
    for i in 0..n {
        out.push(Transaction {
            id: first_id + i64::from(i),
            date: add_months_clamped(draft.date, i),
            description: format!("{} ({}/{})", draft.description, i + 1, n),
            amount: if i + 1 == n { last } else { base },
            kind: draft.kind,
            category_id: draft.category_id,
            recurring: false,
            installment: Some(Installment {
                current: i + 1,
                total: n,
            }),
        });
    }
    Ok(out)
}

/// Advance a date by whole calendar months, clamping the day-of-month to the
/// last valid day of the target month.
pub fn add_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    // checked_add_months only fails past chrono's representable range
    // (year 262143), far beyond any calendar input the ledger accepts.
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Progress toward a savings goal.
///
/// The raw ratio is kept unclamped so over-achievement stays detectable;
/// the percent is clamped to [0, 100] for display.
pub fn goal_progress(goal: &Goal) -> Result<GoalProgress, LedgerError> {
    if goal.target_amount <= Decimal::ZERO {
        return Err(LedgerError::validation(
            "target_amount",
            format!("must be positive, got {}", goal.target_amount),
        ));
    }
    let ratio = goal.current_amount / goal.target_amount;
    let percent = (ratio * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED);
    Ok(GoalProgress { ratio, percent })
}
