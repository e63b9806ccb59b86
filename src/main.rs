//! Console front end for `BudgetBuddy`.
//!
//! A thin view layer over the store: it parses commands, pushes input
//! through the form validation, and prints lists and summaries. No budget
//! logic lives here.

use budget_buddy::errors::Result;
use budget_buddy::filter::{MonthFilter, YearFilter};
use budget_buddy::forms::{LendingForm, TransactionForm};
use budget_buddy::models::{Lending, LendingKind, Transaction, TransactionKind};
use budget_buddy::notify::LogNotifier;
use budget_buddy::storage::Storage;
use budget_buddy::store::BudgetStore;
use budget_buddy::{AppConfig, config};
use dotenvy::dotenv;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // 2. Load .env file (env vars can also be set externally)
    dotenv().ok();

    // 3. Load configuration and open storage
    let app_config: AppConfig = config::load_app_configuration()?;
    info!("Using data directory {:?}", app_config.data_dir);
    let storage = Storage::open(&app_config.data_dir)?;

    // 4. Load the store
    let mut store = BudgetStore::new(
        storage,
        Arc::new(ConsoleNotifier),
        Duration::from_millis(app_config.load_delay_ms),
    );
    println!("Loading your financial data...");
    store.load().await;

    // 5. Command loop
    println!("BudgetBuddy ready. Type 'help' for commands.");
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match run_command(&mut store, line.trim()) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

/// Notifier that speaks to the person at the terminal.
struct ConsoleNotifier;

impl budget_buddy::Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{message}");
    }

    fn warning(&self, message: &str) {
        println!("warning: {message}");
    }
}

/// Executes one command line. Returns `Ok(true)` when the user quits.
fn run_command(store: &mut BudgetStore, line: &str) -> Result<bool> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => Ok(false),
        Some("help") => {
            print_help();
            Ok(false)
        }
        Some("income") | Some("expense") => {
            let kind = if line.starts_with("income") {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let amount = parse_amount(parts.next())?;
            let description = parts.collect::<Vec<_>>().join(" ");
            let new = TransactionForm {
                description,
                amount,
                kind,
            }
            .validate()?;
            store.add_transaction(new);
            Ok(false)
        }
        Some("lend") | Some("borrow") => {
            let kind = if line.starts_with("lend") {
                LendingKind::Lent
            } else {
                LendingKind::Borrowed
            };
            let person = parts.next().unwrap_or_default().to_string();
            let amount = parse_amount(parts.next())?;
            let description = parts.collect::<Vec<_>>().join(" ");
            let new = LendingForm {
                person,
                description,
                amount,
                kind,
            }
            .validate()?;
            store.add_lending(new);
            Ok(false)
        }
        Some("list") => {
            for tx in store.filtered_transactions() {
                print_transaction(tx);
            }
            for lending in store.filtered_lendings() {
                print_lending(lending);
            }
            Ok(false)
        }
        Some("delete") => {
            let id = parts
                .next()
                .and_then(|raw| raw.parse::<uuid::Uuid>().ok())
                .ok_or_else(|| {
                    budget_buddy::Error::InvalidInput("usage: delete <record-id>".to_string())
                })?;
            // Ids are unique across both collections, so try each; unknown
            // ids are a silent no-op by contract.
            if store.transactions().iter().any(|tx| tx.id == id) {
                store.delete_transaction(id);
            } else {
                store.delete_lending(id);
            }
            Ok(false)
        }
        Some("month") => {
            let filter: MonthFilter = parts.next().unwrap_or_default().parse()?;
            store.set_selected_month(filter);
            Ok(false)
        }
        Some("year") => {
            let filter: YearFilter = parts.next().unwrap_or_default().parse()?;
            store.set_selected_year(filter);
            Ok(false)
        }
        Some("filters") => {
            println!("Months:");
            for option in store.available_months() {
                println!("  {:<12} {}", option.value, option.label);
            }
            println!("Years:");
            for option in store.available_years() {
                println!("  {:<12} {}", option.value, option.label);
            }
            Ok(false)
        }
        Some("summary") => {
            println!("Income:    {:>10.2}", store.total_income());
            println!("Expense:   {:>10.2}", store.total_expense());
            println!("Balance:   {:>10.2}", store.net_balance());
            println!("Lent out:  {:>10.2}", store.total_lent_out());
            println!("Borrowed:  {:>10.2}", store.total_borrowed());
            println!("Net lent:  {:>10.2}", store.net_lending());
            Ok(false)
        }
        Some("quit") | Some("exit") => Ok(true),
        Some(other) => Err(budget_buddy::Error::InvalidInput(format!(
            "unknown command '{other}', try 'help'"
        ))),
    }
}

fn parse_amount(raw: Option<&str>) -> Result<f64> {
    raw.unwrap_or_default().parse().map_err(|_| {
        budget_buddy::Error::InvalidInput("amount must be a positive number".to_string())
    })
}

fn print_transaction(tx: &Transaction) {
    println!(
        "{}  {}  {:<8}  {:>10.2}  {}",
        tx.id,
        tx.date.format("%Y-%m-%d"),
        match tx.kind {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        },
        tx.amount,
        tx.description
    );
}

fn print_lending(lending: &Lending) {
    println!(
        "{}  {}  {:<8}  {:>10.2}  {} ({})",
        lending.id,
        lending.date.format("%Y-%m-%d"),
        match lending.kind {
            LendingKind::Lent => "lent",
            LendingKind::Borrowed => "borrowed",
        },
        lending.amount,
        lending.description,
        lending.person
    );
}

fn print_help() {
    println!("Commands:");
    println!("  income <amount> <description>         record income");
    println!("  expense <amount> <description>        record an expense");
    println!("  lend <person> <amount> <description>  record money lent out");
    println!("  borrow <person> <amount> <description> record money borrowed");
    println!("  list                                  show filtered records");
    println!("  delete <record-id>                    delete a record by id");
    println!("  month <0-11|all-months>               set the month filter");
    println!("  year <year|all-years>                 set the year filter");
    println!("  filters                               show available filter options");
    println!("  summary                               show totals for the selection");
    println!("  quit                                  exit");
}
