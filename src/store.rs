// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record storage boundary used by the tracker.

use crate::error::StoreError;
use crate::models::{Expense, Member};

/// Durable storage for members and expenses.
///
/// `create_*` keeps a pre-set `id` (restoring a deleted record under its old
/// identifier) and otherwise lets the store assign one. `list_*` returns
/// records in insertion order. `update_*` and `delete_*` report whether a
/// record with that id existed.
pub trait RecordStore {
    fn create_member(&mut self, member: &Member) -> Result<i64, StoreError>;
    fn list_members(&self) -> Result<Vec<Member>, StoreError>;
    fn update_member(&mut self, member: &Member) -> Result<bool, StoreError>;
    fn delete_member(&mut self, id: i64) -> Result<bool, StoreError>;

    fn create_expense(&mut self, expense: &Expense) -> Result<i64, StoreError>;
    fn list_expenses(&self) -> Result<Vec<Expense>, StoreError>;
    fn update_expense(&mut self, expense: &Expense) -> Result<bool, StoreError>;
    fn delete_expense(&mut self, id: i64) -> Result<bool, StoreError>;
}
