//! Integration tests running the rename helpers against the in-memory
//! SQLite cursor.

pub mod rename_helper_tests;
