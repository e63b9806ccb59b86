//! Record types for the two collections the store owns.
//!
//! Serde output must stay compatible with the persisted JSON layout: the
//! `type` discriminant is a lowercase string, `date` is an ISO 8601 UTC
//! timestamp, and `id` is a UUID string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// An income or expense record. Immutable once created; records are only
/// ever added or deleted, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable unique identifier, assigned at creation
    pub id: Uuid,
    /// Human-readable description of the transaction
    pub description: String,
    /// Positive amount in currency units
    pub amount: f64,
    /// Whether this is income or an expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Creation timestamp, assigned at creation
    pub date: DateTime<Utc>,
}

/// Direction of a lending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LendingKind {
    Lent,
    Borrowed,
}

/// A record of money lent to or borrowed from a named person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lending {
    /// Stable unique identifier, assigned at creation
    pub id: Uuid,
    /// Counterparty name
    pub person: String,
    /// Human-readable description of the lending
    pub description: String,
    /// Positive amount in currency units
    pub amount: f64,
    /// Whether the money was lent out or borrowed
    #[serde(rename = "type")]
    pub kind: LendingKind,
    /// Creation timestamp, assigned at creation
    pub date: DateTime<Utc>,
}

/// Fields a caller supplies when creating a transaction; the store fills in
/// `id` and `date`.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

/// Fields a caller supplies when creating a lending record.
#[derive(Debug, Clone)]
pub struct NewLending {
    pub person: String,
    pub description: String,
    pub amount: f64,
    pub kind: LendingKind,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_transaction_serializes_to_persisted_layout() {
        let tx = Transaction {
            id: Uuid::nil(),
            description: "Salary".to_string(),
            amount: 1200.0,
            kind: TransactionKind::Income,
            date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["description"], "Salary");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        // chrono serializes DateTime<Utc> as RFC 3339 / ISO 8601
        assert!(
            json["date"]
                .as_str()
                .unwrap()
                .starts_with("2024-01-15T09:30:00")
        );
    }

    #[test]
    fn test_lending_round_trips_through_json() {
        let lending = Lending {
            id: Uuid::new_v4(),
            person: "Alice".to_string(),
            description: "Concert tickets".to_string(),
            amount: 85.5,
            kind: LendingKind::Borrowed,
            date: Utc::now(),
        };
        let json = serde_json::to_string(&lending).unwrap();
        let parsed: Lending = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lending);
    }

    #[test]
    fn test_kind_discriminants_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
        assert_eq!(
            serde_json::to_string(&LendingKind::Lent).unwrap(),
            "\"lent\""
        );
    }
}
