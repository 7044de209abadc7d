#![allow(missing_docs)]

pub(crate) mod html;

pub(crate) use html::{assert_valid_html, parse_html_document};

use rusqlite::Connection;

use crate::AppState;

/// Create an [AppState] backed by an in-memory database for tests.
pub(crate) fn new_test_state() -> AppState {
    let connection = Connection::open_in_memory().expect("Could not open in-memory database");

    AppState::new(connection, "42", "Etc/UTC").expect("Could not create app state")
}
