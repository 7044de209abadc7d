use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use labledger::{PasswordHash, ValidatedPassword, initialize_db};

/// A utility for creating a test database for the labledger web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

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
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test user...");

    let password_hash = PasswordHash::new(
        ValidatedPassword::new_unchecked("test"),
        PasswordHash::DEFAULT_COST,
    )?;

    conn.execute(
        "INSERT INTO user (email, password) VALUES (?1, ?2)",
        ("test@example.com", password_hash.to_string()),
    )?;

    println!("Creating test transactions...");

    let sample_transactions = [
        (1200.0, "income", "Sells", "2025-06-02"),
        (300.0, "income", "Other Income", "2025-06-10"),
        (450.0, "expense", "Raw Material", "2025-06-04"),
        (120.0, "expense", "Transportation", "2025-06-07"),
        (600.0, "expense", "Employee Salary", "2025-06-28"),
        (80.0, "expense", "Vehicle Service", "2025-07-01"),
    ];

    for (amount, kind, category, date) in sample_transactions {
        conn.execute(
            "INSERT INTO \"transaction\" (amount, kind, category, date) VALUES (?1, ?2, ?3, ?4)",
            (amount, kind, category, date),
        )?;
    }

    println!("Success!");

    Ok(())
}
