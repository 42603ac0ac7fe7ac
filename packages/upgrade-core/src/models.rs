//! Model rename propagation.

use crate::config::MetadataTables;
use crate::cursor::{Cursor, Param};
use crate::error::UpgradeError;
use crate::query::logged_query;

/// Renames data models in the model registry, field definitions and
/// external identifiers.
///
/// # Arguments
/// * `cr` - Cursor on the database being upgraded
/// * `tables` - Metadata table names
/// * `model_spec` - Ordered `(old_model, new_model)` pairs
///
/// # Returns
/// `Result<i64, UpgradeError>` with the total number of rows updated.
pub fn rename_models<C>(
    cr: &mut C,
    tables: &MetadataTables,
    model_spec: &[(&str, &str)],
) -> Result<i64, UpgradeError>
where
    C: Cursor + ?Sized,
{
    let statements = [
        format!("UPDATE {} SET model = %s WHERE model = %s", tables.model),
        format!("UPDATE {} SET model = %s WHERE model = %s", tables.model_fields),
        format!(
            "UPDATE {} SET relation = %s WHERE relation = %s",
            tables.model_fields
        ),
        format!("UPDATE {} SET model = %s WHERE model = %s", tables.model_data),
    ];

    let mut total = 0;
    for &(old, new) in model_spec {
        let params: [Param; 2] = [new.into(), old.into()];
        let mut renamed = 0;
        for statement in &statements {
            renamed += logged_query(cr, statement, &params)?;
        }
        tracing::info!("Renamed model {} to {} ({} rows updated)", old, new, renamed);
        total += renamed;
    }
    Ok(total)
}
