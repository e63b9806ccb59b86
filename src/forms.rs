//! Input validation for the form layer.
//!
//! All validation happens here, before anything reaches the store: required
//! text must be non-empty after trimming and amounts must be positive. The
//! store trusts its callers on both points.

use crate::errors::{Error, Result};
use crate::models::{LendingKind, NewLending, NewTransaction, TransactionKind};

/// Raw transaction form input, as captured from the user.
#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

impl TransactionForm {
    /// Validates the input and converts it into the store's creation type.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` for an empty description or a
    /// non-positive (or non-finite) amount.
    pub fn validate(self) -> Result<NewTransaction> {
        let description = required_text("description", &self.description)?;
        let amount = positive_amount(self.amount)?;
        Ok(NewTransaction {
            description,
            amount,
            kind: self.kind,
        })
    }
}

/// Raw lending form input.
#[derive(Debug, Clone)]
pub struct LendingForm {
    pub person: String,
    pub description: String,
    pub amount: f64,
    pub kind: LendingKind,
}

impl LendingForm {
    /// Validates the input and converts it into the store's creation type.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` for an empty person or description, or
    /// a non-positive (or non-finite) amount.
    pub fn validate(self) -> Result<NewLending> {
        let person = required_text("person", &self.person)?;
        let description = required_text("description", &self.description)?;
        let amount = positive_amount(self.amount)?;
        Ok(NewLending {
            person,
            description,
            amount,
            kind: self.kind,
        })
    }
}

fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn positive_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidInput(
            "amount must be a positive number".to_string(),
        ));
    }
    Ok(amount)
}
