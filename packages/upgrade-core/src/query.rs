//! Statement execution with logging.

use crate::cursor::{Cursor, Param};
use crate::error::UpgradeError;

/// Executes `query` and returns the cursor's row count.
///
/// The statement and its row count are logged at debug level. Engine errors
/// are wrapped in [`UpgradeError::Storage`] without alteration.
pub fn logged_query<C>(cr: &mut C, query: &str, params: &[Param]) -> Result<i64, UpgradeError>
where
    C: Cursor + ?Sized,
{
    if let Err(e) = cr.execute(query, params) {
        tracing::error!("Query failed: {} ({})", query, e);
        return Err(UpgradeError::storage(e));
    }
    let rowcount = cr.rowcount();
    tracing::debug!(rowcount, params = ?params, "{}", query);
    Ok(rowcount)
}
