// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{compute_summary, expand_installments};
use crate::models::{
    Category, CategoryScope, Goal, Summary, Transaction, TransactionDraft, TransactionKind,
};

/// The owned in-memory store: transactions, categories, and goals for one
/// user, with id assignment and the append/replace update API.
///
/// Single-threaded; callers running concurrently against one ledger are
/// responsible for serializing access. Nothing is ever deleted:
/// transactions and goals are appended or replaced whole by id, categories
/// are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    goals: Vec<Goal>,
    next_transaction_id: i64,
    next_category_id: i64,
    next_goal_id: i64,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
            categories: Vec::new(),
            goals: Vec::new(),
            next_transaction_id: 1,
            next_category_id: 1,
            next_goal_id: 1,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Exact, case-sensitive name lookup.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn goal(&self, id: i64) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn summary(&self) -> Summary {
        compute_summary(&self.transactions, &self.categories)
    }

    /// Validate and append a submission, expanding installments.
    ///
    /// All-or-nothing: a rejected draft leaves the ledger untouched.
    /// Returns the appended records in the order they entered the ledger.
    pub fn add_transaction(
        &mut self,
        draft: &TransactionDraft,
    ) -> Result<&[Transaction], LedgerError> {
        let category = self.category(draft.category_id).ok_or_else(|| {
            LedgerError::validation(
                "category",
                format!("no category with id {}", draft.category_id),
            )
        })?;
        if !category.applies_to.admits(draft.kind) {
            return Err(LedgerError::validation(
                "category",
                format!(
                    "'{}' does not apply to {} transactions",
                    category.name,
                    draft.kind.as_str()
                ),
            ));
        }

        let expanded = expand_installments(draft, self.next_transaction_id)?;
        self.next_transaction_id += expanded.len() as i64;
        let start = self.transactions.len();
        self.transactions.extend(expanded);
        Ok(&self.transactions[start..])
    }

    /// Full-record replacement keyed by id; no partial patching.
    pub fn replace_transaction(&mut self, tx: Transaction) -> Result<(), LedgerError> {
        if tx.amount <= Decimal::ZERO {
            return Err(LedgerError::validation(
                "amount",
                format!("must be positive, got {}", tx.amount),
            ));
        }
        if tx.description.trim().is_empty() {
            return Err(LedgerError::validation("description", "must not be empty"));
        }
        let category = self.category(tx.category_id).ok_or_else(|| {
            LedgerError::validation(
                "category",
                format!("no category with id {}", tx.category_id),
            )
        })?;
        if !category.applies_to.admits(tx.kind) {
            return Err(LedgerError::validation(
                "category",
                format!(
                    "'{}' does not apply to {} transactions",
                    category.name,
                    tx.kind.as_str()
                ),
            ));
        }
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == tx.id)
            .ok_or_else(|| {
                LedgerError::validation("id", format!("no transaction with id {}", tx.id))
            })?;
        *slot = tx;
        Ok(())
    }

    /// Append a category; names are unique within overlapping applicability.
    pub fn add_category(
        &mut self,
        name: &str,
        icon: &str,
        applies_to: CategoryScope,
    ) -> Result<i64, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::validation("name", "must not be empty"));
        }
        if self
            .categories
            .iter()
            .any(|c| c.name == name && c.applies_to.overlaps(applies_to))
        {
            return Err(LedgerError::validation(
                "name",
                format!("category '{}' already exists", name),
            ));
        }
        let id = self.next_category_id;
        self.next_category_id += 1;
        self.categories.push(Category {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            applies_to,
        });
        Ok(id)
    }

    pub fn add_goal(
        &mut self,
        name: &str,
        target_amount: Decimal,
        current_amount: Decimal,
        deadline: NaiveDate,
        category: &str,
    ) -> Result<i64, LedgerError> {
        if name.trim().is_empty() {
            return Err(LedgerError::validation("name", "must not be empty"));
        }
        if target_amount <= Decimal::ZERO {
            return Err(LedgerError::validation(
                "target_amount",
                format!("must be positive, got {}", target_amount),
            ));
        }
        if current_amount < Decimal::ZERO {
            return Err(LedgerError::validation(
                "current_amount",
                format!("must not be negative, got {}", current_amount),
            ));
        }
        let id = self.next_goal_id;
        self.next_goal_id += 1;
        self.goals.push(Goal {
            id,
            name: name.trim().to_string(),
            target_amount,
            current_amount,
            deadline,
            category: category.trim().to_string(),
        });
        Ok(id)
    }

    /// Full-record replacement keyed by id; no partial patching.
    pub fn replace_goal(&mut self, goal: Goal) -> Result<(), LedgerError> {
        if goal.target_amount <= Decimal::ZERO {
            return Err(LedgerError::validation(
                "target_amount",
                format!("must be positive, got {}", goal.target_amount),
            ));
        }
        if goal.current_amount < Decimal::ZERO {
            return Err(LedgerError::validation(
                "current_amount",
                format!("must not be negative, got {}", goal.current_amount),
            ));
        }
        let slot = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or_else(|| {
                LedgerError::validation("id", format!("no goal with id {}", goal.id))
            })?;
        *slot = goal;
        Ok(())
    }

    /// A starter ledger for first runs and demos.
    pub fn seed() -> Self {
        const PALETTE: &[(&str, &str, CategoryScope)] = &[
            ("Salário", "Wallet", CategoryScope::Income),
            ("Investimentos", "TrendingUp", CategoryScope::Income),
            ("Freelance/Extra", "Briefcase", CategoryScope::Income),
            ("Moradia", "Home", CategoryScope::Expense),
            ("Alimentação", "Utensils", CategoryScope::Expense),
            ("Transporte", "Car", CategoryScope::Expense),
            ("Lazer", "PartyPopper", CategoryScope::Expense),
            ("Saúde", "Heart", CategoryScope::Expense),
            ("Educação", "BookOpen", CategoryScope::Expense),
            ("Compras", "ShoppingBag", CategoryScope::Expense),
            ("Contas", "Zap", CategoryScope::Expense),
        ];

        let mut ledger = Ledger::new();
        for (name, icon, scope) in PALETTE {
            ledger.categories.push(Category {
                id: ledger.next_category_id,
                name: (*name).to_string(),
                icon: (*icon).to_string(),
                applies_to: *scope,
            });
            ledger.next_category_id += 1;
        }

        let starter: &[(&str, i64, &str, &str, bool, (i32, u32, u32))] = &[
            ("Salário Mensal", 5500, "income", "Salário", false, (2023, 10, 1)),
            ("Aluguel", 1800, "fixed-expense", "Moradia", true, (2023, 10, 5)),
            ("Supermercado Semanal", 450, "variable-expense", "Alimentação", false, (2023, 10, 7)),
            ("Internet Fibra", 120, "fixed-expense", "Contas", true, (2023, 10, 10)),
            ("Jantar Fora", 180, "variable-expense", "Lazer", false, (2023, 10, 12)),
        ];
        for (desc, amount, kind, cat, recurring, (y, m, d)) in starter {
            let Ok(kind) = kind.parse::<TransactionKind>() else {
                continue;
            };
            let Some(date) = NaiveDate::from_ymd_opt(*y, *m, *d) else {
                continue;
            };
            let Some(category) = ledger.category_by_name(cat) else {
                continue;
            };
            let category_id = category.id;
            ledger.transactions.push(Transaction {
                id: ledger.next_transaction_id,
                date,
                description: (*desc).to_string(),
                amount: Decimal::from(*amount),
                kind,
                category_id,
                recurring: *recurring,
                installment: None,
            });
            ledger.next_transaction_id += 1;
        }

        if let Some(deadline) = NaiveDate::from_ymd_opt(2024, 12, 31) {
            ledger.goals.push(Goal {
                id: ledger.next_goal_id,
                name: "Reserva de Emergência".to_string(),
                target_amount: Decimal::from(15_000),
                current_amount: Decimal::from(3_500),
                deadline,
                category: "Segurança".to_string(),
            });
            ledger.next_goal_id += 1;
        }

        ledger
    }
}
