//! Model and external identifier renames.

use pretty_assertions::assert_eq;

use upgrade_core::models::rename_models;
use upgrade_core::query::logged_query;
use upgrade_core::xmlids::rename_xmlids;
use upgrade_core::{MetadataTables, UpgradeError};
use upgrade_testing::{count_rows, init_test_logging, seed_module_metadata, SqliteCursor};

fn seeded_cursor() -> SqliteCursor {
    init_test_logging();
    let mut cr = SqliteCursor::open_in_memory().unwrap();
    seed_module_metadata(&mut cr).unwrap();
    cr
}

#[test]
fn test_rename_models() {
    let mut cr = seeded_cursor();
    let tables = MetadataTables::default();

    let renamed = rename_models(&mut cr, &tables, &[("a_model", "b_model")]).unwrap();
    // ir_model, ir_model_fields.model, ir_model_fields.relation, 3 identifiers
    assert_eq!(renamed, 6);

    assert_eq!(
        count_rows(&mut cr, "ir_model", "model = %s", &["b_model".into()]).unwrap(),
        1
    );
    assert_eq!(
        count_rows(&mut cr, "ir_model_fields", "model = %s", &["b_model".into()]).unwrap(),
        1
    );
    assert_eq!(
        count_rows(&mut cr, "ir_model_fields", "relation = %s", &["b_model".into()]).unwrap(),
        1
    );
    assert_eq!(
        count_rows(&mut cr, "ir_model_data", "model = %s", &["a_model".into()]).unwrap(),
        0
    );
    assert_eq!(
        count_rows(&mut cr, "ir_model", "model = %s", &["other_model".into()]).unwrap(),
        1
    );
}

#[test]
fn test_rename_xmlids() {
    let mut cr = seeded_cursor();
    let tables = MetadataTables::default();

    let renamed = rename_xmlids(
        &mut cr,
        &tables,
        &[
            ("old_module_name.a_record_1", "other_module_name.a_record_moved"),
            ("old_module_name.not_there", "old_module_name.still_not_there"),
        ],
    )
    .unwrap();
    assert_eq!(renamed, 1);

    assert_eq!(
        count_rows(
            &mut cr,
            "ir_model_data",
            "module = %s AND name = %s",
            &["other_module_name".into(), "a_record_moved".into()],
        )
        .unwrap(),
        1
    );
    assert_eq!(
        count_rows(&mut cr, "ir_model_data", "module = %s", &["old_module_name".into()])
            .unwrap(),
        1
    );
}

#[test]
fn test_rename_xmlids_rejects_malformed_before_writing() {
    let mut cr = seeded_cursor();
    let tables = MetadataTables::default();

    let err = rename_xmlids(
        &mut cr,
        &tables,
        &[
            ("old_module_name.a_record_1", "old_module_name.renamed"),
            ("a_record_2", "old_module_name.renamed_too"),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, UpgradeError::InvalidXmlid(ref s) if s == "a_record_2"));

    assert_eq!(
        count_rows(&mut cr, "ir_model_data", "name = %s", &["a_record_1".into()]).unwrap(),
        1
    );
}

#[test]
fn test_logged_query_returns_rowcount() {
    let mut cr = seeded_cursor();
    let updated = logged_query(
        &mut cr,
        "UPDATE ir_translation SET value = %s WHERE lang = %s",
        &["Libellé".into(), "fr_FR".into()],
    )
    .unwrap();
    assert_eq!(updated, 2);

    let selected = logged_query(
        &mut cr,
        "SELECT name FROM ir_module_module WHERE name LIKE 'old%%'",
        &[],
    )
    .unwrap();
    assert_eq!(selected, 1);
}
