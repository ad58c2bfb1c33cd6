// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use famspend::db::SqliteStore;
use famspend::history::{CommandKind, Step};
use famspend::models::{Expense, Member};
use famspend::session::Session;
use rust_decimal::Decimal;

fn setup() -> Session<SqliteStore> {
    Session::new(SqliteStore::open_in_memory().unwrap()).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
}

fn expenses(s: &Session<SqliteStore>) -> Vec<Expense> {
    s.tracker().expenses().unwrap()
}

fn members(s: &Session<SqliteStore>) -> Vec<Member> {
    s.tracker().members().unwrap()
}

#[test]
fn undo_then_redo_add_expense() {
    let mut s = setup();
    s.add_expense(Decimal::from(40), "Food", "Dinner", day()).unwrap();
    let before = expenses(&s);

    s.add_expense(Decimal::from(100), "Food", "Lunch", day()).unwrap();
    let after = expenses(&s);

    assert_eq!(s.undo().unwrap(), Step::Undone(CommandKind::AddExpense));
    assert_eq!(expenses(&s), before);

    assert_eq!(s.redo().unwrap(), Step::Redone(CommandKind::AddExpense));
    assert_eq!(expenses(&s), after);
}

#[test]
fn new_action_invalidates_redo() {
    let mut s = setup();
    s.add_expense(Decimal::from(10), "Food", "X", day()).unwrap();
    s.undo().unwrap();
    s.add_expense(Decimal::from(20), "Food", "Y", day()).unwrap();
    assert_eq!(s.redo().unwrap(), Step::NothingToRedo);
    assert_eq!(s.history().undo_len(), 1);
}

#[test]
fn empty_stacks_report_status() {
    let mut s = setup();
    assert_eq!(s.undo().unwrap(), Step::NothingToUndo);
    assert_eq!(s.redo().unwrap(), Step::NothingToRedo);
    assert_eq!(Step::NothingToUndo.to_string(), "Nothing to undo");
}

#[test]
fn undo_delete_expense_restores_same_record_and_index() {
    let mut s = setup();
    s.add_expense(Decimal::from(100), "Food", "", day()).unwrap();
    let big = s
        .add_expense(Decimal::from(200), "Utilities", "Electricity", day())
        .unwrap();

    s.delete_expense(&big).unwrap();
    let top: Vec<_> = s.top_expenses(1).unwrap();
    assert_eq!(top[0].amount, Decimal::from(100));

    assert_eq!(s.undo().unwrap(), Step::Undone(CommandKind::DeleteExpense));
    assert!(expenses(&s).contains(&big));
    // index rebuilt by the undo itself
    assert_eq!(s.tracker().index().peek_max(), Some(&big));

    assert_eq!(s.redo().unwrap(), Step::Redone(CommandKind::DeleteExpense));
    assert!(!expenses(&s).contains(&big));
    assert_eq!(s.tracker().index().len(), 1);
}

#[test]
fn repeated_cycles_keep_identity() {
    let mut s = setup();
    let e = s.add_expense(Decimal::from(9), "Food", "Tea", day()).unwrap();
    for _ in 0..3 {
        s.undo().unwrap();
        assert!(expenses(&s).is_empty());
        s.redo().unwrap();
        assert_eq!(expenses(&s), vec![e.clone()]);
    }
}

#[test]
fn identical_expenses_undo_the_right_one() {
    let mut s = setup();
    let first = s.add_expense(Decimal::from(5), "Food", "Gum", day()).unwrap();
    let second = s.add_expense(Decimal::from(5), "Food", "Gum", day()).unwrap();
    s.undo().unwrap();
    assert_eq!(expenses(&s), vec![first]);
    s.redo().unwrap();
    assert_eq!(expenses(&s).last(), Some(&second));
}

#[test]
fn member_round_trips() {
    let mut s = setup();
    let alice = s.add_member("Alice", true, Decimal::from(5000)).unwrap();
    assert_eq!(s.undo().unwrap(), Step::Undone(CommandKind::AddMember));
    assert!(members(&s).is_empty());
    assert_eq!(s.redo().unwrap(), Step::Redone(CommandKind::AddMember));
    assert_eq!(members(&s), vec![alice.clone()]);

    s.delete_member(&alice).unwrap();
    assert!(members(&s).is_empty());
    assert_eq!(s.undo().unwrap(), Step::Undone(CommandKind::DeleteMember));
    assert_eq!(members(&s), vec![alice]);
}

#[test]
fn member_commands_leave_index_alone() {
    let mut s = setup();
    s.add_expense(Decimal::from(30), "Food", "", day()).unwrap();
    s.add_member("Bob", false, Decimal::ZERO).unwrap();
    s.undo().unwrap();
    assert_eq!(s.tracker().index().len(), 1);
    assert_eq!(expenses(&s).len(), 1);
}

#[test]
fn lookup_miss_is_not_recorded_for_fresh_deletes() {
    let mut s = setup();
    let ghost = Member::new("Ghost", false, Decimal::ZERO);
    assert_eq!(s.delete_member(&ghost).unwrap(), None);
    assert!(!s.history().can_undo());
}

#[test]
fn validation_failure_records_nothing() {
    let mut s = setup();
    assert!(s.add_expense(Decimal::ZERO, "Food", "", day()).is_err());
    assert!(s.add_member("   ", true, Decimal::ONE).is_err());
    assert!(!s.history().can_undo());
}

#[test]
fn undo_walks_back_in_lifo_order() {
    let mut s = setup();
    s.add_member("Alice", true, Decimal::from(100)).unwrap();
    s.add_expense(Decimal::from(10), "Food", "", day()).unwrap();
    s.add_expense(Decimal::from(20), "Food", "", day()).unwrap();

    assert_eq!(s.history().peek_undo().unwrap().kind(), CommandKind::AddExpense);
    s.undo().unwrap();
    s.undo().unwrap();
    assert!(expenses(&s).is_empty());
    assert_eq!(members(&s).len(), 1);
    assert_eq!(s.undo().unwrap(), Step::Undone(CommandKind::AddMember));
    assert_eq!(s.history().redo_len(), 3);
    assert!(members(&s).is_empty());
}

#[test]
fn expense_owner_survives_undo() {
    let mut s = setup();
    let m = s.add_member("Eve", true, Decimal::from(10)).unwrap();
    let e = s
        .add_expense_for(Decimal::from(15), "Food", "", day(), m.id)
        .unwrap();
    s.delete_expense(&e).unwrap();
    s.undo().unwrap();
    assert_eq!(expenses(&s)[0].owner_member_id, m.id);
}
