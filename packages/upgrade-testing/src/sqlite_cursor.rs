//! In-memory SQLite cursor standing in for the production engine.

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use upgrade_core::{Cursor, Param};

use crate::placeholder::translate_placeholders;

/// Cursor over a private in-memory SQLite database.
///
/// Statements passed through [`Cursor::execute`] are written in the
/// production dialect and translated before reaching SQLite. Rows returned
/// by the last query are buffered for [`SqliteCursor::fetch_all`] and
/// [`SqliteCursor::fetch_one`].
#[derive(Debug)]
pub struct SqliteCursor {
    conn: Connection,
    rowcount: i64,
    rows: Vec<Vec<Value>>,
}

impl SqliteCursor {
    /// Opens a fresh in-memory database.
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            rowcount: -1,
            rows: Vec::new(),
        })
    }

    /// Executes a statement already written with SQLite `?` markers.
    ///
    /// Statements that change no data (DDL included) leave a row count of 0.
    pub fn execute_raw(&mut self, query: &str, params: &[Param]) -> rusqlite::Result<()> {
        let values: Vec<Value> = params.iter().map(to_sqlite_value).collect();
        let mut stmt = self.conn.prepare(query)?;
        let width = stmt.column_count();
        if width == 0 {
            // changes() keeps the last write's count across DDL, total_changes() does not
            let before = total_changes(&self.conn)?;
            stmt.execute(params_from_iter(values.iter()))?;
            self.rows.clear();
            self.rowcount = total_changes(&self.conn)? - before;
        } else {
            let rows = stmt
                .query_map(params_from_iter(values.iter()), |row| {
                    (0..width)
                        .map(|i| row.get::<_, Value>(i))
                        .collect::<rusqlite::Result<Vec<_>>>()
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            self.rowcount = rows.len() as i64;
            self.rows = rows;
        }
        Ok(())
    }

    /// Takes every buffered row of the last query.
    pub fn fetch_all(&mut self) -> Vec<Vec<Value>> {
        std::mem::take(&mut self.rows)
    }

    /// Takes the next buffered row of the last query.
    pub fn fetch_one(&mut self) -> Option<Vec<Value>> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.rows.remove(0))
        }
    }

    /// Closes the connection.
    pub fn close(self) -> rusqlite::Result<()> {
        self.conn.close().map_err(|(_, e)| e)
    }
}

impl Cursor for SqliteCursor {
    type Error = rusqlite::Error;

    fn execute(&mut self, query: &str, params: &[Param]) -> Result<(), Self::Error> {
        let query = translate_placeholders(query);
        tracing::trace!("sqlite: {}", query);
        self.execute_raw(&query, params)
    }

    fn rowcount(&self) -> i64 {
        self.rowcount
    }
}

fn total_changes(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT total_changes()", [], |row| row.get(0))
}

fn to_sqlite_value(param: &Param) -> Value {
    match param {
        Param::Null => Value::Null,
        Param::Int(v) => Value::Integer(*v),
        Param::Text(s) => Value::Text(s.clone()),
        Param::Bool(b) => Value::Integer(i64::from(*b)),
    }
}
