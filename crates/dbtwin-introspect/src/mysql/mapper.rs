use dbtwin_core::{classify, Column, ForeignKey, Index};

use super::queries::{RawColumn, RawForeignKey, RawIndex};

pub fn map_columns(raw: Vec<RawColumn>) -> Vec<Column> {
    raw.into_iter()
        .map(|col| {
            let semantic = classify(&col.name, &col.data_type, &col.column_type);
            Column {
                ordinal_position: col.ordinal_position.max(0) as u32,
                name: col.name,
                data_type: col.data_type,
                column_type: col.column_type,
                is_nullable: col.is_nullable.eq_ignore_ascii_case("YES"),
                default: col.default,
                character_max_length: col.character_max_length,
                numeric_precision: col.numeric_precision,
                numeric_scale: col.numeric_scale,
                is_auto_increment: col.extra.to_lowercase().contains("auto_increment"),
                semantic,
            }
        })
        .collect()
}

/// Map foreign keys, keeping only edges whose target lives in the
/// introspected database so every referenced table is part of the snapshot.
pub fn map_foreign_keys(raw: Vec<RawForeignKey>, database: &str) -> Vec<ForeignKey> {
    raw.into_iter()
        .filter(|fk| fk.referenced_schema == database)
        .map(|fk| ForeignKey {
            name: Some(fk.name),
            column: fk.column,
            referenced_table: fk.referenced_table,
            referenced_column: fk.referenced_column,
        })
        .collect()
}

pub fn map_indexes(raw: Vec<RawIndex>) -> Vec<Index> {
    raw.into_iter()
        .map(|idx| Index {
            name: idx.name,
            is_unique: idx.non_unique == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbtwin_core::SemanticKind;

    fn raw_column(name: &str, data_type: &str, column_type: &str, extra: &str) -> RawColumn {
        RawColumn {
            ordinal_position: 1,
            name: name.to_string(),
            data_type: data_type.to_string(),
            column_type: column_type.to_string(),
            is_nullable: "NO".to_string(),
            default: None,
            character_max_length: None,
            numeric_precision: None,
            numeric_scale: None,
            extra: extra.to_string(),
        }
    }

    #[test]
    fn columns_are_classified_at_mapping_time() {
        let columns = map_columns(vec![
            raw_column("email", "varchar", "varchar(255)", ""),
            raw_column("id", "int", "int unsigned", "auto_increment"),
        ]);
        assert_eq!(columns[0].semantic, SemanticKind::Email);
        assert!(!columns[0].is_auto_increment);
        assert_eq!(columns[1].semantic, SemanticKind::Integer);
        assert!(columns[1].is_auto_increment);
    }

    #[test]
    fn nullability_comes_from_the_catalog_flag() {
        let mut raw = raw_column("note", "text", "text", "");
        raw.is_nullable = "YES".to_string();
        let columns = map_columns(vec![raw]);
        assert!(columns[0].is_nullable);
    }

    #[test]
    fn cross_database_foreign_keys_are_dropped() {
        let raw = vec![
            RawForeignKey {
                name: "fk_local".to_string(),
                column: "customer_id".to_string(),
                referenced_schema: "shop".to_string(),
                referenced_table: "customers".to_string(),
                referenced_column: "id".to_string(),
            },
            RawForeignKey {
                name: "fk_foreign".to_string(),
                column: "audit_id".to_string(),
                referenced_schema: "audit".to_string(),
                referenced_table: "events".to_string(),
                referenced_column: "id".to_string(),
            },
        ];
        let fks = map_foreign_keys(raw, "shop");
        assert_eq!(fks.len(), 1);
        assert_eq!(fks[0].referenced_table, "customers");
    }

    #[test]
    fn unique_flag_inverts_non_unique() {
        let indexes = map_indexes(vec![
            RawIndex {
                name: "idx_email".to_string(),
                non_unique: 0,
            },
            RawIndex {
                name: "idx_city".to_string(),
                non_unique: 1,
            },
        ]);
        assert!(indexes[0].is_unique);
        assert!(!indexes[1].is_unique);
    }
}
