// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Income,
    FixedExpense,
    VariableExpense,
}

impl TransactionKind {
    pub fn is_expense(self) -> bool {
        !matches!(self, TransactionKind::Income)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::FixedExpense => "fixed-expense",
            TransactionKind::VariableExpense => "variable-expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "income" => Ok(TransactionKind::Income),
            "fixed" | "fixed-expense" => Ok(TransactionKind::FixedExpense),
            "variable" | "variable-expense" => Ok(TransactionKind::VariableExpense),
            other => Err(format!(
                "unknown transaction kind '{}', expected income|fixed-expense|variable-expense",
                other
            )),
        }
    }
}

/// Which transaction kinds a category may be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryScope {
    Income,
    Expense,
    Both,
}

impl CategoryScope {
    pub fn admits(self, kind: TransactionKind) -> bool {
        match self {
            CategoryScope::Both => true,
            CategoryScope::Income => kind == TransactionKind::Income,
            CategoryScope::Expense => kind.is_expense(),
        }
    }

    pub fn overlaps(self, other: CategoryScope) -> bool {
        self == other || self == CategoryScope::Both || other == CategoryScope::Both
    }
}

impl std::str::FromStr for CategoryScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "income" => Ok(CategoryScope::Income),
            "expense" => Ok(CategoryScope::Expense),
            "both" => Ok(CategoryScope::Both),
            other => Err(format!(
                "unknown category scope '{}', expected income|expense|both",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Symbolic icon name; not checked against any registry.
    pub icon: String,
    pub applies_to: CategoryScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub current: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    /// References a row in the category table. Categories were once linked
    /// by name; a rename would orphan historical transactions, so the link
    /// is an id. Snapshots edited by hand can still carry dangling ids,
    /// which read back as "(uncategorized)".
    pub category_id: i64,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment: Option<Installment>,
}

/// A transaction submission before validation and id assignment.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category_id: i64,
    /// Ignored on submission: the recorded flag is derived from `kind`
    /// (true exactly for fixed expenses).
    pub recurring: bool,
    /// Number of monthly installments to split into; 1 means no split.
    pub installments: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    /// Free-text label, not a category reference.
    pub category: String,
}

/// Derived dashboard figures; recomputed on demand, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub fixed_expenses: Decimal,
    pub variable_expenses: Decimal,
    pub category_breakdown: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GoalProgress {
    /// Unclamped current/target ratio; exceeds 1 on over-achievement.
    pub ratio: Decimal,
    /// Display percentage, clamped to [0, 100].
    pub percent: Decimal,
}
