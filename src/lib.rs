//! `BudgetBuddy` - A personal budget tracker
//!
//! This crate provides a small budget-tracking system: income/expense
//! transactions and lent/borrowed records are held in an in-memory store,
//! narrowed by a month/year filter selection, summed into running totals,
//! and persisted to local JSON storage between runs.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Application configuration loading
pub mod config;
/// Error types and the crate-wide `Result` alias
pub mod errors;
/// Month/year filter selection and selector option derivation
pub mod filter;
/// Form-layer input validation
pub mod forms;
/// Record types for the two collections
pub mod models;
/// User-facing notification seam
pub mod notify;
/// JSON key-value local storage
pub mod storage;
/// The budget store: state, derived views, persistence
pub mod store;

#[cfg(test)]
pub mod test_utils;

pub use config::AppConfig;
pub use errors::{Error, Result};
pub use filter::{FilterOption, MonthFilter, YearFilter};
pub use forms::{LendingForm, TransactionForm};
pub use models::{Lending, LendingKind, NewLending, NewTransaction, Transaction, TransactionKind};
pub use notify::{LogNotifier, Notifier};
pub use storage::Storage;
pub use store::BudgetStore;
