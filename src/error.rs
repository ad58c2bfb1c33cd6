// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Input rejected before any store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Earnings cannot be negative")]
    NegativeEarnings,
    #[error("Expense amount cannot be zero")]
    ZeroAmount,
    #[error("Category must be selected")]
    EmptyCategory,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("invalid {field} '{value}' in {table}")]
    Decode {
        table: &'static str,
        field: &'static str,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TrackerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation(_))
    }
}
