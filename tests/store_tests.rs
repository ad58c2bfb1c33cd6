// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use famspend::db::SqliteStore;
use famspend::error::StoreError;
use famspend::models::{Expense, Member};
use famspend::settings::{set_setting, BudgetLimits, WEEKLY_BUDGET};
use famspend::store::RecordStore;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
}

#[test]
fn member_crud() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let id = store
        .create_member(&Member::new("Alice", true, Decimal::from(5000)))
        .unwrap();
    let members = store.list_members().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, Some(id));
    assert_eq!(members[0].name, "Alice");

    let mut bob = Member::new("Bob", false, Decimal::ZERO);
    bob.id = Some(store.create_member(&bob).unwrap());
    bob.is_earning = true;
    bob.earnings = Decimal::from(2000);
    assert!(store.update_member(&bob).unwrap());
    assert_eq!(store.list_members().unwrap()[1], bob);

    assert!(store.delete_member(id).unwrap());
    assert!(!store.delete_member(id).unwrap());
    assert_eq!(store.list_members().unwrap(), vec![bob]);
}

#[test]
fn update_without_id_is_a_miss() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let e = Expense::new(Decimal::from(1), "Food", "", day());
    assert!(!store.update_expense(&e).unwrap());
    assert!(!store.update_member(&Member::new("X", false, Decimal::ZERO)).unwrap());
}

#[test]
fn expense_amounts_keep_exact_decimals() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let amount: Decimal = "19.99".parse().unwrap();
    store
        .create_expense(&Expense::new(amount, "Food", "Pizza", day()))
        .unwrap();
    let listed = store.list_expenses().unwrap();
    assert_eq!(listed[0].amount, amount);
    assert_eq!(listed[0].amount.to_string(), "19.99");
    assert_eq!(listed[0].date, day());
}

#[test]
fn create_with_id_restores_that_id() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let a = store
        .create_expense(&Expense::new(Decimal::ONE, "Food", "a", day()))
        .unwrap();
    store
        .create_expense(&Expense::new(Decimal::TWO, "Food", "b", day()))
        .unwrap();
    assert!(store.delete_expense(a).unwrap());

    let mut back = Expense::new(Decimal::ONE, "Food", "a", day());
    back.id = Some(a);
    assert_eq!(store.create_expense(&back).unwrap(), a);
    let ids: Vec<_> = store.list_expenses().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![Some(a), Some(a + 1)]);
}

#[test]
fn deleting_member_clears_expense_owner() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let mid = store
        .create_member(&Member::new("Carol", true, Decimal::from(7000)))
        .unwrap();
    store
        .create_expense(&Expense::new(Decimal::from(3), "Food", "", day()).with_owner(Some(mid)))
        .unwrap();
    store.delete_member(mid).unwrap();
    assert_eq!(store.list_expenses().unwrap()[0].owner_member_id, None);
}

#[test]
fn bad_rows_surface_decode_errors() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .conn()
        .execute(
            "INSERT INTO expenses(amount, category, description, date) VALUES ('abc','Food','', ?1)",
            params!["2025-05-15"],
        )
        .unwrap();
    let err = store.list_expenses().unwrap_err();
    assert!(matches!(err, StoreError::Decode { field: "amount", .. }));
}

#[test]
fn data_survives_reopen() {
    let file = NamedTempFile::new().unwrap();
    {
        let mut store = SqliteStore::open(file.path()).unwrap();
        store
            .create_expense(&Expense::new(Decimal::from(42), "Other", "Gift", day()))
            .unwrap();
    }
    let store = SqliteStore::open(file.path()).unwrap();
    let listed = store.list_expenses().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].description, "Gift");
}

#[test]
fn budget_limits_default_and_persist() {
    let conn = Connection::open_in_memory().unwrap();
    let store = SqliteStore::from_connection(conn).unwrap();
    let conn = store.conn();
    assert_eq!(BudgetLimits::load(conn).unwrap(), BudgetLimits::default());

    set_setting(conn, WEEKLY_BUDGET, "400").unwrap();
    let mut l = BudgetLimits::load(conn).unwrap();
    assert_eq!(l.weekly, Decimal::from(400));

    l.monthly = Decimal::from(1200);
    l.save(conn).unwrap();
    assert_eq!(BudgetLimits::load(conn).unwrap().monthly, Decimal::from(1200));

    set_setting(conn, WEEKLY_BUDGET, "lots").unwrap();
    assert!(BudgetLimits::load(conn).is_err());
}
