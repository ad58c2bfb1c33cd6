// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Option<i64>, // None until saved
    pub name: String,
    pub is_earning: bool,
    pub earnings: Decimal,
}

impl Member {
    pub fn new(name: impl Into<String>, is_earning: bool, earnings: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            is_earning,
            earnings,
        }
    }

    /// Field equality ignoring the identifier.
    pub fn same_fields(&self, other: &Member) -> bool {
        self.name == other.name
            && self.is_earning == other.is_earning
            && self.earnings == other.earnings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Option<i64>,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub owner_member_id: Option<i64>,
}

impl Expense {
    pub fn new(
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            amount,
            category: category.into(),
            description: description.into(),
            date,
            owner_member_id: None,
        }
    }

    pub fn with_owner(mut self, owner: Option<i64>) -> Self {
        self.owner_member_id = owner;
        self
    }

    /// Field equality ignoring the identifier.
    pub fn same_fields(&self, other: &Expense) -> bool {
        self.amount == other.amount
            && self.category == other.category
            && self.description == other.description
            && self.date == other.date
            && self.owner_member_id == other.owner_member_id
    }
}
