// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Undo/redo log of reversible tracker actions.
//!
//! A [`Command`] holds the full record it affected, identifier included.
//! Undo applies the inverse against the [`Tracker`] and moves the original
//! command onto the redo stack; redo replays it forward and moves it back.
//! Recording a new command clears the redo stack. A command moves as soon as
//! its store change succeeds; the index rebuild that follows an expense
//! command runs after the move.

use crate::error::Result;
use crate::models::{Expense, Member};
use crate::store::RecordStore;
use crate::tracker::Tracker;
use serde::Serialize;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandKind {
    AddMember,
    DeleteMember,
    AddExpense,
    DeleteExpense,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommandKind::AddMember => "add member",
            CommandKind::DeleteMember => "delete member",
            CommandKind::AddExpense => "add expense",
            CommandKind::DeleteExpense => "delete expense",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload")]
pub enum Command {
    AddMember(Member),
    DeleteMember(Member),
    AddExpense(Expense),
    DeleteExpense(Expense),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::AddMember(_) => CommandKind::AddMember,
            Command::DeleteMember(_) => CommandKind::DeleteMember,
            Command::AddExpense(_) => CommandKind::AddExpense,
            Command::DeleteExpense(_) => CommandKind::DeleteExpense,
        }
    }

    pub fn touches_expenses(&self) -> bool {
        matches!(self, Command::AddExpense(_) | Command::DeleteExpense(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Command::AddMember(m) | Command::DeleteMember(m) => {
                format!("{} '{}'", self.kind(), m.name)
            }
            Command::AddExpense(e) | Command::DeleteExpense(e) => {
                format!("{} {} {} on {}", self.kind(), e.amount, e.category, e.date)
            }
        }
    }

    fn apply<S: RecordStore>(&self, tracker: &mut Tracker<S>, dir: Direction) -> Result<()> {
        use Direction::*;
        match (self, dir) {
            (Command::AddMember(m), Forward) | (Command::DeleteMember(m), Inverse) => {
                tracker.add_member_record(m.clone())?;
            }
            (Command::AddMember(m), Inverse) | (Command::DeleteMember(m), Forward) => {
                // a miss is a no-op
                tracker.delete_member(m)?;
            }
            (Command::AddExpense(e), Forward) | (Command::DeleteExpense(e), Inverse) => {
                tracker.add_expense_record(e.clone())?;
            }
            (Command::AddExpense(e), Inverse) | (Command::DeleteExpense(e), Forward) => {
                tracker.delete_expense(e)?;
            }
        }
        Ok(())
    }
}

/// Outcome of an undo or redo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Undone(CommandKind),
    Redone(CommandKind),
    NothingToUndo,
    NothingToRedo,
}

impl Step {
    pub fn applied(&self) -> bool {
        matches!(self, Step::Undone(_) | Step::Redone(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Undone(k) => write!(f, "Undid {}", k),
            Step::Redone(k) => write!(f, "Redid {}", k),
            Step::NothingToUndo => f.write_str("Nothing to undo"),
            Step::NothingToRedo => f.write_str("Nothing to redo"),
        }
    }
}

#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Command>,
    redo: Vec<Command>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a freshly performed action. Any redo future is discarded.
    pub fn record(&mut self, command: Command) {
        self.undo.push(command);
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn peek_undo(&self) -> Option<&Command> {
        self.undo.last()
    }

    pub fn peek_redo(&self) -> Option<&Command> {
        self.redo.last()
    }

    /// Undo stack, oldest first.
    pub fn undo_stack(&self) -> &[Command] {
        &self.undo
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo<S: RecordStore>(&mut self, tracker: &mut Tracker<S>) -> Result<Step> {
        let Some(cmd) = self.undo.pop() else {
            info!("nothing to undo");
            return Ok(Step::NothingToUndo);
        };
        if let Err(e) = cmd.apply(tracker, Direction::Inverse) {
            self.undo.push(cmd);
            return Err(e);
        }
        info!(action = %cmd.describe(), "undo");
        let kind = cmd.kind();
        let touches_expenses = cmd.touches_expenses();
        self.redo.push(cmd);
        // the store already changed, so the command stays moved
        if touches_expenses {
            tracker.rebuild_index()?;
        }
        Ok(Step::Undone(kind))
    }

    pub fn redo<S: RecordStore>(&mut self, tracker: &mut Tracker<S>) -> Result<Step> {
        let Some(cmd) = self.redo.pop() else {
            info!("nothing to redo");
            return Ok(Step::NothingToRedo);
        };
        if let Err(e) = cmd.apply(tracker, Direction::Forward) {
            self.redo.push(cmd);
            return Err(e);
        }
        info!(action = %cmd.describe(), "redo");
        let kind = cmd.kind();
        let touches_expenses = cmd.touches_expenses();
        self.undo.push(cmd);
        // the store already changed, so the command stays moved
        if touches_expenses {
            tracker.rebuild_index()?;
        }
        Ok(Step::Redone(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteStore;
    use crate::store::testing::FlakyStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn tracker() -> Tracker<SqliteStore> {
        Tracker::new(SqliteStore::open_in_memory().unwrap()).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
    }

    #[test]
    fn empty_log_reports_nothing_to_do() {
        let mut t = tracker();
        let mut h = History::new();
        assert_eq!(h.undo(&mut t).unwrap(), Step::NothingToUndo);
        assert_eq!(h.redo(&mut t).unwrap(), Step::NothingToRedo);
        assert!(!Step::NothingToUndo.applied());
    }

    #[test]
    fn undo_moves_original_command_to_redo() {
        let mut t = tracker();
        let mut h = History::new();
        let e = t.add_expense(Decimal::from(50), "Food", "Lunch", day()).unwrap();
        let cmd = Command::AddExpense(e);
        h.record(cmd.clone());

        assert_eq!(h.undo(&mut t).unwrap(), Step::Undone(CommandKind::AddExpense));
        assert_eq!(h.undo_len(), 0);
        assert_eq!(h.peek_redo(), Some(&cmd));
        assert!(t.expenses().unwrap().is_empty());
        assert!(t.index().is_empty());
    }

    #[test]
    fn record_clears_redo() {
        let mut t = tracker();
        let mut h = History::new();
        let m = t.add_member("Alice", true, Decimal::from(5000)).unwrap();
        h.record(Command::AddMember(m));
        h.undo(&mut t).unwrap();
        assert!(h.can_redo());

        let m2 = t.add_member("Bob", false, Decimal::ZERO).unwrap();
        h.record(Command::AddMember(m2));
        assert!(!h.can_redo());
        assert_eq!(h.redo(&mut t).unwrap(), Step::NothingToRedo);
    }

    #[test]
    fn miss_still_moves_command() {
        let mut t = tracker();
        let mut h = History::new();
        let ghost = Member {
            id: Some(42),
            ..Member::new("Ghost", false, Decimal::ZERO)
        };
        h.record(Command::AddMember(ghost));
        assert_eq!(h.undo(&mut t).unwrap(), Step::Undone(CommandKind::AddMember));
        assert_eq!(h.redo_len(), 1);
    }

    #[test]
    fn failed_reversal_keeps_command_on_its_stack() {
        let mut t = tracker();
        let mut h = History::new();
        // invalid payload: re-adding it fails validation
        let bad = Expense::new(Decimal::ZERO, "Food", "", day());
        h.record(Command::DeleteExpense(bad.clone()));
        assert!(h.undo(&mut t).is_err());
        assert_eq!(h.undo_len(), 1);
        assert_eq!(h.redo_len(), 0);
        assert_eq!(h.peek_undo(), Some(&Command::DeleteExpense(bad)));
    }

    #[test]
    fn rebuild_failure_after_store_write_still_moves_command() {
        let mut t = Tracker::new(FlakyStore::new()).unwrap();
        let mut h = History::new();
        let e = t.add_expense(Decimal::from(30), "Food", "Soup", day()).unwrap();
        h.record(Command::AddExpense(e.clone()));
        h.undo(&mut t).unwrap();

        // re-adding succeeds, the rebuild after it does not
        t.store().fail_after(0);
        assert!(h.redo(&mut t).is_err());
        assert_eq!(h.undo_len(), 1);
        assert_eq!(h.redo_len(), 0);

        t.store().heal();
        assert_eq!(t.expenses().unwrap(), vec![e]);
        assert_eq!(h.undo(&mut t).unwrap(), Step::Undone(CommandKind::AddExpense));
        assert!(t.expenses().unwrap().is_empty());
    }

    #[test]
    fn describe_names_the_record() {
        let cmd = Command::DeleteExpense(Expense::new(Decimal::from(12), "Transport", "Bus", day()));
        assert_eq!(cmd.describe(), "delete expense 12 Transport on 2025-05-15");
    }
}
