//! Metadata fixtures and row-count assertions.

use rusqlite::types::Value;
use tracing_subscriber::EnvFilter;
use upgrade_core::modules::{module_xmlid_name, MODULE_MODEL};
use upgrade_core::{Cursor, Param};

use crate::sqlite_cursor::SqliteCursor;

/// Installs a fmt subscriber honouring `RUST_LOG`. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates `table` from its column definitions.
pub fn create_table(
    cr: &mut SqliteCursor,
    table: &str,
    columns: &[&str],
) -> rusqlite::Result<()> {
    cr.execute_raw(
        &format!("CREATE TABLE {}({})", table, columns.join(", ")),
        &[],
    )
}

/// Inserts a single row given as `(column, value)` pairs.
pub fn insert_row(
    cr: &mut SqliteCursor,
    table: &str,
    row: &[(&str, Param)],
) -> rusqlite::Result<()> {
    let columns: Vec<&str> = row.iter().map(|(column, _)| *column).collect();
    let markers = vec!["?"; row.len()];
    let values: Vec<Param> = row.iter().map(|(_, value)| value.clone()).collect();
    cr.execute_raw(
        &format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            markers.join(", ")
        ),
        &values,
    )
}

/// Counts rows of `table` matching `where_clause`, written in the production
/// dialect.
pub fn count_rows(
    cr: &mut SqliteCursor,
    table: &str,
    where_clause: &str,
    params: &[Param],
) -> rusqlite::Result<i64> {
    cr.execute(
        &format!("SELECT count(*) FROM {} WHERE {}", table, where_clause),
        params,
    )?;
    match cr.fetch_one().as_deref() {
        Some([Value::Integer(count)]) => Ok(*count),
        _ => Err(rusqlite::Error::QueryReturnedNoRows),
    }
}

/// Creates the module metadata tables and seeds them with two installed
/// modules, `old_module_name` and `other_module_name`.
///
/// Seeded identifiers: the `module_<name>` record of each module, two
/// `a_model` records owned by `old_module_name` and one owned by
/// `other_module_name`. Dependencies and translations exist for both modules.
/// `ir_model` and `ir_model_fields` describe `a_model` and `other_model`,
/// each holding a relation to the other.
pub fn seed_module_metadata(cr: &mut SqliteCursor) -> rusqlite::Result<()> {
    create_table(
        cr,
        "ir_module_module",
        &["id INTEGER PRIMARY KEY", "name VARCHAR NOT NULL UNIQUE", "state VARCHAR"],
    )?;
    create_table(
        cr,
        "ir_model_data",
        &[
            "id INTEGER PRIMARY KEY",
            "module VARCHAR NOT NULL",
            "name VARCHAR NOT NULL",
            "model VARCHAR",
            "res_id INTEGER",
        ],
    )?;
    create_table(
        cr,
        "ir_module_module_dependency",
        &["id INTEGER PRIMARY KEY", "module_id INTEGER", "name VARCHAR"],
    )?;
    create_table(
        cr,
        "ir_translation",
        &[
            "id INTEGER PRIMARY KEY",
            "module VARCHAR",
            "lang VARCHAR",
            "src TEXT",
            "value TEXT",
        ],
    )?;
    create_table(
        cr,
        "ir_model",
        &["id INTEGER PRIMARY KEY", "model VARCHAR NOT NULL", "name VARCHAR"],
    )?;
    create_table(
        cr,
        "ir_model_fields",
        &[
            "id INTEGER PRIMARY KEY",
            "model VARCHAR NOT NULL",
            "name VARCHAR NOT NULL",
            "relation VARCHAR",
        ],
    )?;

    for (id, module) in [(1i64, "old_module_name"), (2, "other_module_name")] {
        insert_row(
            cr,
            "ir_module_module",
            &[
                ("id", id.into()),
                ("name", module.into()),
                ("state", "installed".into()),
            ],
        )?;
        insert_row(
            cr,
            "ir_model_data",
            &[
                ("module", "base".into()),
                ("name", module_xmlid_name(module).into()),
                ("model", MODULE_MODEL.into()),
                ("res_id", id.into()),
            ],
        )?;
        insert_row(
            cr,
            "ir_module_module_dependency",
            &[("module_id", id.into()), ("name", module.into())],
        )?;
        insert_row(
            cr,
            "ir_translation",
            &[
                ("module", module.into()),
                ("lang", "fr_FR".into()),
                ("src", "Name".into()),
                ("value", "Nom".into()),
            ],
        )?;
    }

    for (module, name, res_id) in [
        ("old_module_name", "a_record_1", 1i64),
        ("old_module_name", "a_record_2", 2),
        ("other_module_name", "a_record_3", 3),
    ] {
        insert_row(
            cr,
            "ir_model_data",
            &[
                ("module", module.into()),
                ("name", name.into()),
                ("model", "a_model".into()),
                ("res_id", res_id.into()),
            ],
        )?;
    }

    for model in ["a_model", "other_model"] {
        insert_row(cr, "ir_model", &[("model", model.into()), ("name", model.into())])?;
    }
    insert_row(
        cr,
        "ir_model_fields",
        &[
            ("model", "a_model".into()),
            ("name", "other_id".into()),
            ("relation", "other_model".into()),
        ],
    )?;
    insert_row(
        cr,
        "ir_model_fields",
        &[
            ("model", "other_model".into()),
            ("name", "a_id".into()),
            ("relation", "a_model".into()),
        ],
    )?;
    Ok(())
}
