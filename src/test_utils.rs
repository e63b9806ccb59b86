//! Shared test utilities for `BudgetBuddy`.
//!
//! Provides temp-directory backed storage, tracing setup, canned records,
//! and a notifier that records what it was told for later assertions.

#![allow(clippy::unwrap_used)]

use crate::models::{Lending, LendingKind, Transaction, TransactionKind};
use crate::notify::Notifier;
use crate::storage::Storage;
use chrono::{DateTime, TimeZone, Utc};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Initializes tracing for tests. Safe to call from every test; only the
/// first call installs the subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Deletes the temp data directory when the test is done with it.
pub struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Creates a `Storage` rooted in a fresh directory under the system temp
/// dir. The returned guard removes the directory on drop.
pub fn temp_storage() -> (Storage, TempDirGuard) {
    let path = std::env::temp_dir().join(format!("budget-buddy-test-{}", Uuid::new_v4()));
    let storage = Storage::open(&path).unwrap();
    (storage, TempDirGuard { path })
}

/// Builds a transaction with a fresh id, the current timestamp, and the
/// given fields.
pub fn sample_transaction(description: &str, amount: f64, kind: TransactionKind) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount,
        kind,
        date: Utc::now(),
    }
}

/// Builds a transaction dated at noon on the given day.
pub fn dated_transaction(
    description: &str,
    amount: f64,
    kind: TransactionKind,
    year: i32,
    month: u32,
    day: u32,
) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount,
        kind,
        date: noon(year, month, day),
    }
}

/// Builds a lending record with a fresh id and the current timestamp.
pub fn sample_lending(person: &str, description: &str, amount: f64, kind: LendingKind) -> Lending {
    Lending {
        id: Uuid::new_v4(),
        person: person.to_string(),
        description: description.to_string(),
        amount,
        kind,
        date: Utc::now(),
    }
}

/// Noon UTC on the given calendar day.
pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// Notifier that stores every message it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}
