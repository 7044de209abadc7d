//! Database initialization for the application.

use rusqlite::Connection;

use crate::{transaction::create_transaction_table, user::create_user_table};

/// Create the tables for the application's domain models.
///
/// Existing tables are left untouched, so calling this on an already
/// initialized database is a no-op.
///
/// # Errors
///
/// This function will return an error if any of the SQL queries fail.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_user_table(connection)?;
    create_transaction_table(connection)?;

    Ok(())
}
