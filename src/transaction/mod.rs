//! Transaction ledger: domain model, database queries, pages and endpoints.

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod transactions_page;

pub(crate) use core::{
    NewTransaction, Transaction, TransactionId, TransactionKind, create_transaction,
    create_transaction_table, delete_transaction, get_all_transactions,
};
pub(crate) use create_endpoint::create_transaction_endpoint;
pub(crate) use create_page::get_create_transaction_page;
pub(crate) use delete_endpoint::delete_transaction_endpoint;
pub(crate) use transactions_page::get_transactions_page;
