use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use spendboard::{Category, SqliteStorage, Transaction, TransactionStore, TransactionType};

/// A utility for creating a database of demo transactions for Spendboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// (days before today, type, amount, description, category)
const DEMO_TRANSACTIONS: [(i64, TransactionType, f64, &str, Category); 14] = [
    (0, TransactionType::Expense, 4.5, "Flat white", Category::FoodAndDrinks),
    (0, TransactionType::Expense, 32.8, "Groceries", Category::FoodAndDrinks),
    (0, TransactionType::Income, 120.0, "Logo design", Category::Freelance),
    (1, TransactionType::Expense, 3.2, "Bus fare", Category::Transport),
    (2, TransactionType::Expense, 59.99, "Running shoes", Category::Shopping),
    (4, TransactionType::Expense, 18.0, "Cinema", Category::Entertainment),
    (6, TransactionType::Expense, 45.0, "Pharmacy", Category::Health),
    (9, TransactionType::Income, 3200.0, "Monthly salary", Category::Salary),
    (15, TransactionType::Expense, 210.0, "Weekend away", Category::Travel),
    (40, TransactionType::Income, 3200.0, "Monthly salary", Category::Salary),
    (45, TransactionType::Expense, 89.5, "Concert tickets", Category::Entertainment),
    (70, TransactionType::Income, 85.25, "Dividends", Category::Investment),
    (120, TransactionType::Expense, 640.0, "Flights", Category::Travel),
    (400, TransactionType::Income, 150.0, "Birthday gift", Category::Other),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;
    let mut store = TransactionStore::open(Box::new(SqliteStorage::new(connection)?));

    println!("Adding demo transactions...");

    let today = OffsetDateTime::now_utc().date();

    for (days_ago, type_, amount, description, category) in DEMO_TRANSACTIONS {
        let date = today - Duration::days(days_ago);
        let transaction = Transaction::build(type_, amount, date, category)
            .description(description)
            .finalize()?;

        store.add(transaction)?;
    }

    println!("Success!");

    Ok(())
}
