// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use rust_decimal::Decimal;

pub fn validate_member_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn validate_earnings(earnings: Decimal) -> Result<(), ValidationError> {
    if earnings.is_sign_negative() && !earnings.is_zero() {
        return Err(ValidationError::NegativeEarnings);
    }
    Ok(())
}

pub fn validate_expense_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount.is_zero() {
        return Err(ValidationError::ZeroAmount);
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}
