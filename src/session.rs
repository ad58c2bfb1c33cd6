// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::history::{Command, History, Step};
use crate::models::{Expense, Member};
use crate::store::RecordStore;
use crate::tracker::Tracker;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Per-session application context: one tracker plus its undo/redo log.
///
/// Every user-initiated mutation goes through here so that it is recorded.
/// Undo and redo themselves are not recorded.
pub struct Session<S: RecordStore> {
    tracker: Tracker<S>,
    history: History,
}

impl<S: RecordStore> Session<S> {
    pub fn new(store: S) -> Result<Self> {
        Ok(Self {
            tracker: Tracker::new(store)?,
            history: History::new(),
        })
    }

    pub fn tracker(&self) -> &Tracker<S> {
        &self.tracker
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_store(self) -> S {
        self.tracker.into_store()
    }

    pub fn add_member(&mut self, name: &str, is_earning: bool, earnings: Decimal) -> Result<Member> {
        let m = self.tracker.add_member(name, is_earning, earnings)?;
        self.history.record(Command::AddMember(m.clone()));
        Ok(m)
    }

    pub fn delete_member(&mut self, member: &Member) -> Result<Option<Member>> {
        let removed = self.tracker.delete_member(member)?;
        if let Some(m) = &removed {
            self.history.record(Command::DeleteMember(m.clone()));
        }
        Ok(removed)
    }

    pub fn update_member(
        &mut self,
        member: &Member,
        is_earning: bool,
        earnings: Decimal,
    ) -> Result<Option<Member>> {
        self.tracker.update_member(member, is_earning, earnings)
    }

    pub fn add_expense(
        &mut self,
        amount: Decimal,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> Result<Expense> {
        self.add_expense_for(amount, category, description, date, None)
    }

    pub fn add_expense_for(
        &mut self,
        amount: Decimal,
        category: &str,
        description: &str,
        date: NaiveDate,
        owner: Option<i64>,
    ) -> Result<Expense> {
        let draft = Expense::new(amount, category, description, date).with_owner(owner);
        let e = self.tracker.add_expense_record(draft)?;
        self.history.record(Command::AddExpense(e.clone()));
        Ok(e)
    }

    /// Delete and rebuild the index so later reads never see the removed row.
    pub fn delete_expense(&mut self, expense: &Expense) -> Result<Option<Expense>> {
        let removed = self.tracker.delete_expense(expense)?;
        if let Some(e) = &removed {
            self.history.record(Command::DeleteExpense(e.clone()));
        }
        self.tracker.rebuild_index()?;
        Ok(removed)
    }

    pub fn update_expense(&mut self, expense: &Expense) -> Result<bool> {
        self.tracker.update_expense(expense)
    }

    pub fn top_expenses(&mut self, n: usize) -> Result<Vec<Expense>> {
        self.tracker.top_expenses(n)
    }

    pub fn undo(&mut self) -> Result<Step> {
        self.history.undo(&mut self.tracker)
    }

    pub fn redo(&mut self) -> Result<Step> {
        self.history.redo(&mut self.tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::FlakyStore;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
    }

    #[test]
    fn delete_is_recorded_even_if_rebuild_fails() {
        let mut s = Session::new(FlakyStore::new()).unwrap();
        let e = s.add_expense(Decimal::from(8), "Food", "", day()).unwrap();
        // one list for the lookup, then the rebuild fails
        s.tracker().store().fail_after(1);
        assert!(s.delete_expense(&e).is_err());
        assert_eq!(s.history().undo_len(), 2);

        s.tracker().store().heal();
        assert!(s.tracker().expenses().unwrap().is_empty());
        s.undo().unwrap();
        assert_eq!(s.tracker().expenses().unwrap(), vec![e]);
    }
}
