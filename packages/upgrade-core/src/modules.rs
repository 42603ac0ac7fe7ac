//! Module rename propagation.
//!
//! A module rename has to be mirrored everywhere the module name is stored:
//! the module record itself, the module column of external identifiers, the
//! generated `module_<name>` identifier of the module record, dependency
//! declarations and module-scoped translations.

use crate::config::{MetadataTables, UpgradeConfig};
use crate::cursor::{Cursor, Param};
use crate::error::UpgradeError;
use crate::query::logged_query;

/// Model name of module records in the identifier table.
pub const MODULE_MODEL: &str = "ir.module.module";

/// Name of the external identifier generated for a module record.
pub fn module_xmlid_name(module: &str) -> String {
    format!("module_{}", module)
}

/// Rows touched by a module rename, summed over all pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameReport {
    /// Module records renamed
    pub modules: i64,
    /// External identifiers moved to the new module
    pub identifiers: i64,
    /// `module_<name>` identifiers renamed
    pub module_identifiers: i64,
    /// Dependency declarations updated
    pub dependencies: i64,
    /// Translations moved to the new module
    pub translations: i64,
}

impl RenameReport {
    /// Total rows updated.
    pub fn total(&self) -> i64 {
        self.modules
            + self.identifiers
            + self.module_identifiers
            + self.dependencies
            + self.translations
    }

    fn absorb(&mut self, other: RenameReport) {
        self.modules += other.modules;
        self.identifiers += other.identifiers;
        self.module_identifiers += other.module_identifiers;
        self.dependencies += other.dependencies;
        self.translations += other.translations;
    }
}

/// Renames modules using the default metadata tables.
///
/// # Arguments
/// * `cr` - Cursor on the database being upgraded
/// * `namespec` - Ordered `(old_name, new_name)` pairs
///
/// # Returns
/// `Result<RenameReport, UpgradeError>` with the rows touched.
///
/// An old name that matches nothing is a no-op, so running the same rename
/// twice is harmless. Transactions are left to the caller.
pub fn update_module_names<C>(
    cr: &mut C,
    namespec: &[(&str, &str)],
) -> Result<RenameReport, UpgradeError>
where
    C: Cursor + ?Sized,
{
    update_module_names_with(cr, namespec, &UpgradeConfig::default())
}

/// Renames modules using the tables and collision policy of `config`.
pub fn update_module_names_with<C>(
    cr: &mut C,
    namespec: &[(&str, &str)],
    config: &UpgradeConfig,
) -> Result<RenameReport, UpgradeError>
where
    C: Cursor + ?Sized,
{
    let mut report = RenameReport::default();
    for &(old_name, new_name) in namespec {
        if config.check_collisions {
            check_collision(cr, &config.tables, old_name, new_name)?;
        }
        let pair = rename_module(cr, &config.tables, old_name, new_name)?;
        tracing::info!(
            "Renamed module {} to {} ({} rows updated)",
            old_name,
            new_name,
            pair.total()
        );
        report.absorb(pair);
    }
    Ok(report)
}

fn check_collision<C>(
    cr: &mut C,
    tables: &MetadataTables,
    old_name: &str,
    new_name: &str,
) -> Result<(), UpgradeError>
where
    C: Cursor + ?Sized,
{
    if old_name == new_name {
        return Ok(());
    }
    let probe = format!("SELECT name FROM {} WHERE name = %s", tables.module);
    if logged_query(cr, &probe, &[old_name.into()])? == 0 {
        return Ok(());
    }
    if logged_query(cr, &probe, &[new_name.into()])? > 0 {
        tracing::warn!(
            "Module {} cannot be renamed: {} is already installed",
            old_name,
            new_name
        );
        return Err(UpgradeError::ModuleNameCollision {
            old: old_name.to_string(),
            new: new_name.to_string(),
        });
    }
    Ok(())
}

fn rename_module<C>(
    cr: &mut C,
    tables: &MetadataTables,
    old_name: &str,
    new_name: &str,
) -> Result<RenameReport, UpgradeError>
where
    C: Cursor + ?Sized,
{
    let names: [Param; 2] = [new_name.into(), old_name.into()];
    let mut report = RenameReport {
        modules: logged_query(
            cr,
            &format!("UPDATE {} SET name = %s WHERE name = %s", tables.module),
            &names,
        )?,
        identifiers: logged_query(
            cr,
            &format!(
                "UPDATE {} SET module = %s WHERE module = %s",
                tables.model_data
            ),
            &names,
        )?,
        module_identifiers: logged_query(
            cr,
            &format!(
                "UPDATE {} SET name = %s WHERE name = %s AND model = %s",
                tables.model_data
            ),
            &[
                module_xmlid_name(new_name).into(),
                module_xmlid_name(old_name).into(),
                MODULE_MODEL.into(),
            ],
        )?,
        dependencies: logged_query(
            cr,
            &format!(
                "UPDATE {} SET name = %s WHERE name = %s",
                tables.module_dependency
            ),
            &names,
        )?,
        ..Default::default()
    };
    if let Some(translation) = &tables.translation {
        report.translations = logged_query(
            cr,
            &format!("UPDATE {} SET module = %s WHERE module = %s", translation),
            &names,
        )?;
    }
    Ok(report)
}
