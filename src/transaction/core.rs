//! Defines the core data model and database queries for transactions.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// The row ID of a transaction in the application database.
pub(crate) type TransactionId = i64;

/// Whether a transaction records money coming in or going out.
///
/// Amounts are unsigned, the direction of the money flow is captured here
/// instead of by the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// The kind as stored in the database and used as the form value.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    fn from_str(value: &str) -> Option<TransactionKind> {
        match value {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// A single financial event: money either spent or earned.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    /// The ID of the transaction.
    pub(crate) id: TransactionId,
    /// The amount of money spent or earned, always non-negative.
    pub(crate) amount: f64,
    /// Whether the transaction is income or an expense.
    pub(crate) kind: TransactionKind,
    /// The category label. Usually one of [crate::category::Category::ALL],
    /// but unknown labels are tolerated.
    pub(crate) category: String,
    /// When the transaction happened.
    pub(crate) date: Date,
}

/// The data needed to create a transaction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewTransaction {
    /// The amount of money spent or earned, must be non-negative.
    pub(crate) amount: f64,
    /// Whether the transaction is income or an expense.
    pub(crate) kind: TransactionKind,
    /// The category label for the transaction.
    pub(crate) category: String,
    /// When the transaction happened.
    pub(crate) date: Date,
}

/// Create the transaction table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub(crate) fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY,
                amount REAL NOT NULL,
                kind TEXT NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Insert a new transaction into the database.
///
/// # Errors
///
/// Returns:
/// - [Error::NegativeAmount] if the amount is negative.
/// - [Error::SqlError] if an SQL related error occurred.
pub(crate) fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    if new_transaction.amount < 0.0 {
        return Err(Error::NegativeAmount(new_transaction.amount));
    }

    connection.execute(
        "INSERT INTO \"transaction\" (amount, kind, category, date) VALUES (?1, ?2, ?3, ?4)",
        (
            new_transaction.amount,
            new_transaction.kind.as_str(),
            &new_transaction.category,
            &new_transaction.date,
        ),
    )?;

    Ok(Transaction {
        id: connection.last_insert_rowid(),
        amount: new_transaction.amount,
        kind: new_transaction.kind,
        category: new_transaction.category,
        date: new_transaction.date,
    })
}

/// Get all transactions, newest first.
///
/// # Errors
///
/// Returns [Error::SqlError] if an SQL related error occurred.
pub(crate) fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    let mut stmt = connection.prepare(
        "SELECT id, amount, kind, category, date FROM \"transaction\"
        ORDER BY date DESC, id DESC",
    )?;

    stmt.query_map((), |row| {
        let raw_kind: String = row.get(2)?;
        let kind = TransactionKind::from_str(&raw_kind).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                format!("invalid transaction kind \"{raw_kind}\"").into(),
            )
        })?;

        Ok(Transaction {
            id: row.get(0)?,
            amount: row.get(1)?,
            kind,
            category: row.get(3)?,
            date: row.get(4)?,
        })
    })?
    .collect::<Result<Vec<Transaction>, rusqlite::Error>>()
    .map_err(|error| error.into())
}

/// Delete the transaction with the given ID.
///
/// # Errors
///
/// Returns:
/// - [Error::DeleteMissingTransaction] if no transaction has the given ID.
/// - [Error::SqlError] if an SQL related error occurred.
pub(crate) fn delete_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM \"transaction\" WHERE id = ?1",
        (transaction_id,),
    )?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}
