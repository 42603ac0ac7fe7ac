//! Storage engine boundary.
//!
//! Helpers only need to run a parameterized statement and read back how many
//! rows it touched. Anything that can do that, a production client or an
//! in-memory stand-in, implements [`Cursor`].

/// Value bound to a `%s` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// SQL NULL
    Null,
    /// 64-bit integer
    Int(i64),
    /// Text
    Text(String),
    /// Boolean
    Bool(bool),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl From<&String> for Param {
    fn from(value: &String) -> Self {
        Param::Text(value.clone())
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::Null, Into::into)
    }
}

/// Minimal cursor capability set used by every helper.
///
/// Query text uses the production dialect: `%s` marks a bound parameter and
/// `%%` is a literal percent sign.
pub trait Cursor {
    /// Error reported by the underlying engine.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes a single statement with positional parameters.
    fn execute(&mut self, query: &str, params: &[Param]) -> Result<(), Self::Error>;

    /// Row count of the last statement: affected rows for writes, returned
    /// rows for reads.
    fn rowcount(&self) -> i64;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Error = C::Error;

    fn execute(&mut self, query: &str, params: &[Param]) -> Result<(), Self::Error> {
        (**self).execute(query, params)
    }

    fn rowcount(&self) -> i64 {
        (**self).rowcount()
    }
}
