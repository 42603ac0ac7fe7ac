//! External identifier renames.

use crate::config::MetadataTables;
use crate::cursor::Cursor;
use crate::error::UpgradeError;
use crate::query::logged_query;

/// Splits a fully qualified external identifier into `(module, name)`.
pub fn split_xmlid(xmlid: &str) -> Result<(&str, &str), UpgradeError> {
    match xmlid.split_once('.') {
        Some((module, name)) if !module.is_empty() && !name.is_empty() => Ok((module, name)),
        _ => Err(UpgradeError::InvalidXmlid(xmlid.to_string())),
    }
}

/// Renames fully qualified external identifiers (`module.name`).
///
/// Every identifier in `xmlids_spec` is checked before the first statement
/// runs, so a malformed entry leaves the database untouched.
pub fn rename_xmlids<C>(
    cr: &mut C,
    tables: &MetadataTables,
    xmlids_spec: &[(&str, &str)],
) -> Result<i64, UpgradeError>
where
    C: Cursor + ?Sized,
{
    let mut parsed = Vec::with_capacity(xmlids_spec.len());
    for &(old, new) in xmlids_spec {
        parsed.push((split_xmlid(old)?, split_xmlid(new)?));
    }

    let query = format!(
        "UPDATE {} SET module = %s, name = %s WHERE module = %s AND name = %s",
        tables.model_data
    );
    let mut total = 0;
    for ((old_module, old_name), (new_module, new_name)) in parsed {
        let renamed = logged_query(
            cr,
            &query,
            &[
                new_module.into(),
                new_name.into(),
                old_module.into(),
                old_name.into(),
            ],
        )?;
        if renamed == 0 {
            tracing::debug!("External identifier {}.{} not found", old_module, old_name);
        }
        total += renamed;
    }
    Ok(total)
}
