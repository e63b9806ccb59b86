//! The budget store: in-memory state, derived views, and persistence.
//!
//! `BudgetStore` owns the two record collections plus the current filter
//! selection. Mutations are synchronous and applied in call order; every
//! mutation after the initial load writes the full collection back to
//! storage and bumps a revision that consumers can watch for re-rendering.
//!
//! Ordering rule: nothing is persisted while the initial load is still in
//! progress. Without this, a mutation arriving before the load finished
//! would write an empty collection over data that had not been read yet.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, trace};
use uuid::Uuid;

use crate::filter::{self, FilterOption, MonthFilter, YearFilter};
use crate::models::{
    Lending, LendingKind, NewLending, NewTransaction, Transaction, TransactionKind,
};
use crate::notify::Notifier;
use crate::storage::{LENDINGS_KEY, Storage, TRANSACTIONS_KEY};

pub struct BudgetStore {
    storage: Storage,
    notifier: Arc<dyn Notifier>,
    load_delay: Duration,
    transactions: Vec<Transaction>,
    lendings: Vec<Lending>,
    selected_month: MonthFilter,
    selected_year: YearFilter,
    loading: bool,
    revision: watch::Sender<u64>,
}

impl BudgetStore {
    /// Creates a store over `storage`. The store starts in the loading
    /// state; call [`load`](Self::load) before expecting persistence.
    pub fn new(storage: Storage, notifier: Arc<dyn Notifier>, load_delay: Duration) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            storage,
            notifier,
            load_delay,
            transactions: Vec::new(),
            lendings: Vec::new(),
            selected_month: MonthFilter::default(),
            selected_year: YearFilter::default(),
            loading: true,
            revision,
        }
    }

    /// Reads both collections from storage.
    ///
    /// A read or parse failure on either key is non-fatal: the failure is
    /// logged, the user is warned, and that collection stays empty. The
    /// configured load delay (cosmetic only) is applied before the store
    /// leaves the loading state.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;

        match self.storage.read::<Transaction>(TRANSACTIONS_KEY) {
            Ok(Some(records)) => self.transactions = records,
            Ok(None) => {}
            Err(e) => {
                error!("Failed to load transactions: {e}");
                self.notifier.warning("Failed to load your financial data");
            }
        }
        match self.storage.read::<Lending>(LENDINGS_KEY) {
            Ok(Some(records)) => self.lendings = records,
            Ok(None) => {}
            Err(e) => {
                error!("Failed to load lendings: {e}");
                self.notifier.warning("Failed to load your financial data");
            }
        }
        info!(
            "Loaded {} transactions and {} lendings",
            self.transactions.len(),
            self.lendings.len()
        );

        if !self.load_delay.is_zero() {
            tokio::time::sleep(self.load_delay).await;
        }
        self.loading = false;
        self.bump_revision();
    }

    /// Whether the initial load is still in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Subscribes to the revision counter; the value changes after every
    /// state mutation, signalling consumers to re-read derived views.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|r| *r += 1);
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Creates a transaction from pre-validated fields, assigning a fresh
    /// id and the current timestamp, and prepends it to the collection.
    /// Validation (non-empty description, positive amount) is the caller's
    /// contract; the form layer enforces it before calling in.
    #[instrument(skip(self, new))]
    pub fn add_transaction(&mut self, new: NewTransaction) -> Uuid {
        let record = Transaction {
            id: Uuid::new_v4(),
            description: new.description,
            amount: new.amount,
            kind: new.kind,
            date: Utc::now(),
        };
        let id = record.id;
        debug!("Adding transaction {id}: {:?} {}", record.kind, record.amount);
        self.transactions.insert(0, record);
        self.persist_transactions();
        self.bump_revision();
        self.notifier.success("Transaction added successfully");
        id
    }

    /// Removes the transaction with the given id. Unknown ids are a silent
    /// no-op; the permissive contract is deliberate.
    #[instrument(skip(self))]
    pub fn delete_transaction(&mut self, id: Uuid) {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != id);
        if self.transactions.len() < before {
            self.persist_transactions();
        } else {
            debug!("Delete of unknown transaction {id} ignored");
        }
        self.bump_revision();
        self.notifier.success("Transaction deleted");
    }

    /// Creates a lending record from pre-validated fields; symmetric to
    /// [`add_transaction`](Self::add_transaction).
    #[instrument(skip(self, new))]
    pub fn add_lending(&mut self, new: NewLending) -> Uuid {
        let record = Lending {
            id: Uuid::new_v4(),
            person: new.person,
            description: new.description,
            amount: new.amount,
            kind: new.kind,
            date: Utc::now(),
        };
        let id = record.id;
        debug!("Adding lending {id}: {:?} {}", record.kind, record.amount);
        self.lendings.insert(0, record);
        self.persist_lendings();
        self.bump_revision();
        self.notifier.success("Lending record added successfully");
        id
    }

    /// Removes the lending record with the given id; unknown ids are a
    /// silent no-op.
    #[instrument(skip(self))]
    pub fn delete_lending(&mut self, id: Uuid) {
        let before = self.lendings.len();
        self.lendings.retain(|lending| lending.id != id);
        if self.lendings.len() < before {
            self.persist_lendings();
        } else {
            debug!("Delete of unknown lending {id} ignored");
        }
        self.bump_revision();
        self.notifier.success("Lending record deleted");
    }

    /// Sets the month dimension of the filter selection.
    pub fn set_selected_month(&mut self, month: MonthFilter) {
        self.selected_month = month;
        self.bump_revision();
    }

    /// Sets the year dimension of the filter selection.
    pub fn set_selected_year(&mut self, year: YearFilter) {
        self.selected_year = year;
        self.bump_revision();
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    fn persist_transactions(&self) {
        self.persist(TRANSACTIONS_KEY, &self.transactions);
    }

    fn persist_lendings(&self) {
        self.persist(LENDINGS_KEY, &self.lendings);
    }

    fn persist<T: serde::Serialize>(&self, key: &str, records: &[T]) {
        if self.loading {
            // Initial load not finished; writing now could clobber
            // persisted data that has not been read yet.
            trace!("Skipping persist of '{key}' during initial load");
            return;
        }
        if let Err(e) = self.storage.write(key, records) {
            error!("Failed to persist '{key}': {e}");
            self.notifier.warning("Failed to save your financial data");
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// All transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All lendings, newest first.
    pub fn lendings(&self) -> &[Lending] {
        &self.lendings
    }

    pub fn selected_month(&self) -> MonthFilter {
        self.selected_month
    }

    pub fn selected_year(&self) -> YearFilter {
        self.selected_year
    }

    fn matches_selection(&self, date: &chrono::DateTime<Utc>) -> bool {
        self.selected_year.matches(date) && self.selected_month.matches(date)
    }

    /// Transactions whose date falls inside the current filter selection.
    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| self.matches_selection(&tx.date))
            .collect()
    }

    /// Lendings whose date falls inside the current filter selection.
    pub fn filtered_lendings(&self) -> Vec<&Lending> {
        self.lendings
            .iter()
            .filter(|lending| self.matches_selection(&lending.date))
            .collect()
    }

    fn sum_transactions(&self, kind: TransactionKind) -> f64 {
        self.filtered_transactions()
            .iter()
            .filter(|tx| tx.kind == kind)
            .map(|tx| tx.amount)
            .sum()
    }

    fn sum_lendings(&self, kind: LendingKind) -> f64 {
        self.filtered_lendings()
            .iter()
            .filter(|lending| lending.kind == kind)
            .map(|lending| lending.amount)
            .sum()
    }

    /// Sum of filtered income transactions.
    pub fn total_income(&self) -> f64 {
        self.sum_transactions(TransactionKind::Income)
    }

    /// Sum of filtered expense transactions.
    pub fn total_expense(&self) -> f64 {
        self.sum_transactions(TransactionKind::Expense)
    }

    /// Income minus expense over the filtered transactions.
    pub fn net_balance(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    /// Sum of filtered records of money lent out.
    pub fn total_lent_out(&self) -> f64 {
        self.sum_lendings(LendingKind::Lent)
    }

    /// Sum of filtered records of money borrowed.
    pub fn total_borrowed(&self) -> f64 {
        self.sum_lendings(LendingKind::Borrowed)
    }

    /// Lent out minus borrowed over the filtered lendings.
    pub fn net_lending(&self) -> f64 {
        self.total_lent_out() - self.total_borrowed()
    }

    fn all_dates(&self) -> impl Iterator<Item = chrono::DateTime<Utc>> + '_ {
        self.transactions
            .iter()
            .map(|tx| tx.date)
            .chain(self.lendings.iter().map(|lending| lending.date))
    }

    /// Month selector options over both unfiltered collections.
    pub fn available_months(&self) -> Vec<FilterOption> {
        filter::month_options(self.all_dates())
    }

    /// Year selector options over both unfiltered collections.
    pub fn available_years(&self) -> Vec<FilterOption> {
        filter::year_options(self.all_dates())
    }
}
