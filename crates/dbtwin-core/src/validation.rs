use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::schema::DatabaseSchema;

/// Validate internal consistency of a schema snapshot.
///
/// Checks duplicate table/column names, primary-key columns, and that every
/// foreign-key edge points at a column that exists inside the snapshot.
pub fn validate_schema(schema: &DatabaseSchema) -> Result<()> {
    let mut catalog: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for table in &schema.tables {
        if catalog.contains_key(table.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }
        catalog.insert(table.name.as_str(), columns);
    }

    for table in &schema.tables {
        let columns = &catalog[table.name.as_str()];

        for pk_column in &table.primary_key {
            if !columns.contains(pk_column.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "primary key column not found: {}.{}",
                    table.name, pk_column
                )));
            }
        }

        for fk in &table.foreign_keys {
            if !columns.contains(fk.column.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "foreign key column not found: {}.{}",
                    table.name, fk.column
                )));
            }

            let referenced = catalog.get(fk.referenced_table.as_str()).ok_or_else(|| {
                Error::InvalidSchema(format!(
                    "referenced table not found: {}",
                    fk.referenced_table
                ))
            })?;

            if !referenced.contains(fk.referenced_column.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "referenced column not found: {}.{}",
                    fk.referenced_table, fk.referenced_column
                )));
            }
        }
    }

    Ok(())
}
