// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Validation gate and single writer for members and expenses.
//!
//! Every mutation goes through [`Tracker`], which writes to the record store
//! and keeps the top expenses index in step with it. Expense deletions leave
//! the index stale; callers follow them with
//! [`Tracker::rebuild_index`].

use crate::error::Result;
use crate::heap::ExpenseHeap;
use crate::models::{Expense, Member};
use crate::store::RecordStore;
use crate::validation::{
    validate_category, validate_earnings, validate_expense_amount, validate_member_name,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

pub struct Tracker<S: RecordStore> {
    store: S,
    index: ExpenseHeap,
}

impl<S: RecordStore> Tracker<S> {
    /// Wrap `store` and index the expenses it already holds.
    pub fn new(store: S) -> Result<Self> {
        let mut t = Self {
            store,
            index: ExpenseHeap::new(),
        };
        t.rebuild_index()?;
        Ok(t)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> &ExpenseHeap {
        &self.index
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn members(&self) -> Result<Vec<Member>> {
        Ok(self.store.list_members()?)
    }

    pub fn expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.store.list_expenses()?)
    }

    pub fn find_member_by_name(&self, name: &str) -> Result<Option<Member>> {
        let name = name.trim();
        Ok(self.members()?.into_iter().find(|m| m.name == name))
    }

    pub fn find_expense(&self, id: i64) -> Result<Option<Expense>> {
        Ok(self.expenses()?.into_iter().find(|e| e.id == Some(id)))
    }

    pub fn add_member(&mut self, name: &str, is_earning: bool, earnings: Decimal) -> Result<Member> {
        self.add_member_record(Member::new(name, is_earning, earnings))
    }

    /// Validate and insert `member`. A pre-set id is kept by the store.
    pub fn add_member_record(&mut self, mut member: Member) -> Result<Member> {
        let checked = validate_member_name(&member.name).and_then(|_| validate_earnings(member.earnings));
        if let Err(e) = checked {
            warn!(name = %member.name, error = %e, "rejected member");
            return Err(e.into());
        }
        member.name = member.name.trim().to_string();
        let id = self.store.create_member(&member)?;
        member.id = Some(id);
        info!(id, name = %member.name, earnings = %member.earnings, "added member");
        Ok(member)
    }

    /// Remove the stored member matching `member`: by id when known, else the
    /// first record with identical fields. `Ok(None)` when nothing matched.
    pub fn delete_member(&mut self, member: &Member) -> Result<Option<Member>> {
        let members = self.store.list_members()?;
        let found = match member.id {
            Some(id) => members.into_iter().find(|m| m.id == Some(id)),
            None => members.into_iter().find(|m| m.same_fields(member)),
        };
        let Some(found) = found else {
            debug!(name = %member.name, "delete_member: no matching record");
            return Ok(None);
        };
        if let Some(id) = found.id {
            self.store.delete_member(id)?;
            info!(id, name = %found.name, "deleted member");
        }
        Ok(Some(found))
    }

    /// Change earning status and earnings of an existing member.
    pub fn update_member(
        &mut self,
        member: &Member,
        is_earning: bool,
        earnings: Decimal,
    ) -> Result<Option<Member>> {
        validate_earnings(earnings)?;
        let mut updated = member.clone();
        updated.is_earning = is_earning;
        updated.earnings = earnings;
        if !self.store.update_member(&updated)? {
            return Ok(None);
        }
        info!(id = ?updated.id, earnings = %earnings, is_earning, "updated member");
        Ok(Some(updated))
    }

    pub fn add_expense(
        &mut self,
        amount: Decimal,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> Result<Expense> {
        self.add_expense_record(Expense::new(amount, category, description, date))
    }

    /// Validate and insert `expense` into the store, then into the index.
    pub fn add_expense_record(&mut self, mut expense: Expense) -> Result<Expense> {
        let checked =
            validate_expense_amount(expense.amount).and_then(|_| validate_category(&expense.category));
        if let Err(e) = checked {
            warn!(amount = %expense.amount, category = %expense.category, error = %e, "rejected expense");
            return Err(e.into());
        }
        expense.category = expense.category.trim().to_string();
        let id = self.store.create_expense(&expense)?;
        expense.id = Some(id);
        self.index.insert(expense.clone());
        info!(
            id,
            amount = %expense.amount,
            category = %expense.category,
            date = %expense.date,
            "added expense"
        );
        Ok(expense)
    }

    /// Remove the stored expense matching `expense` (id first, then fields).
    /// The index is not touched; call [`Tracker::rebuild_index`] afterwards.
    pub fn delete_expense(&mut self, expense: &Expense) -> Result<Option<Expense>> {
        let expenses = self.store.list_expenses()?;
        let found = match expense.id {
            Some(id) => expenses.into_iter().find(|e| e.id == Some(id)),
            None => expenses.into_iter().find(|e| e.same_fields(expense)),
        };
        let Some(found) = found else {
            debug!(amount = %expense.amount, "delete_expense: no matching record");
            return Ok(None);
        };
        if let Some(id) = found.id {
            self.store.delete_expense(id)?;
            info!(id, amount = %found.amount, category = %found.category, "deleted expense");
        }
        Ok(Some(found))
    }

    /// Overwrite the fields of a stored expense and rebuild the index.
    pub fn update_expense(&mut self, expense: &Expense) -> Result<bool> {
        validate_expense_amount(expense.amount)?;
        validate_category(&expense.category)?;
        let mut clean = expense.clone();
        clean.category = clean.category.trim().to_string();
        let hit = self.store.update_expense(&clean)?;
        if hit {
            info!(id = ?clean.id, amount = %clean.amount, "updated expense");
            self.rebuild_index()?;
        }
        Ok(hit)
    }

    pub fn rebuild_index(&mut self) -> Result<()> {
        let expenses = self.store.list_expenses()?;
        debug!(count = expenses.len(), "rebuilding top expenses index");
        self.index.rebuild(expenses);
        Ok(())
    }

    /// The `n` largest expenses, read from a freshly rebuilt index.
    pub fn top_expenses(&mut self, n: usize) -> Result<Vec<Expense>> {
        self.rebuild_index()?;
        Ok(self.index.top_n(n))
    }
}
