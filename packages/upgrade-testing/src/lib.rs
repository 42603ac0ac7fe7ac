//! Test support for upgrade helpers.
//!
//! Provides an in-memory SQLite stand-in for the production cursor,
//! placeholder translation between the two SQL dialects, metadata fixtures
//! and test logging.

pub mod fixture;
pub mod placeholder;
pub mod sqlite_cursor;

pub use fixture::{
    count_rows, create_table, init_test_logging, insert_row, seed_module_metadata,
};
pub use placeholder::translate_placeholders;
pub use sqlite_cursor::SqliteCursor;
