use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::schema::Table;

/// Table sequence respecting foreign-key precedence, used for both DDL and
/// data emission.
///
/// `cycle_tables` lists the remainder appended when a dependency cycle
/// stalled the ordering; those tables are not guaranteed to satisfy FK
/// precedence among themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationOrder {
    pub tables: Vec<String>,
    pub cycle_tables: Vec<String>,
}

impl CreationOrder {
    pub fn has_cycle(&self) -> bool {
        !self.cycle_tables.is_empty()
    }
}

/// Resolve a creation order over the foreign-key graph.
///
/// Layered scan: each pass admits every remaining table whose non-self
/// dependencies are all in the ordered prefix. A pass that admits nothing
/// means the remainder is cyclic; it is appended in its current relative
/// order and the resolver terminates. Cycles are never an error.
///
/// Self-referencing edges and edges to tables outside the snapshot do not
/// constrain the order. Output is deterministic for identical input: tables
/// are scanned in their incoming order and there is no random tie-breaking.
pub fn creation_order(tables: &[Table]) -> CreationOrder {
    let known: BTreeSet<&str> = tables.iter().map(|table| table.name.as_str()).collect();

    let mut dependencies: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for table in tables {
        let entry = dependencies.entry(table.name.as_str()).or_default();
        for fk in &table.foreign_keys {
            let target = fk.referenced_table.as_str();
            if target != table.name && known.contains(target) {
                entry.insert(target);
            }
        }
    }

    let mut ordered: Vec<String> = Vec::with_capacity(tables.len());
    let mut placed: BTreeSet<&str> = BTreeSet::new();
    let mut remaining: Vec<&str> = tables.iter().map(|table| table.name.as_str()).collect();

    while !remaining.is_empty() {
        let mut deferred = Vec::new();
        let mut progressed = false;

        for name in remaining {
            let ready = dependencies
                .get(name)
                .map(|deps| deps.iter().all(|dep| placed.contains(dep)))
                .unwrap_or(true);
            if ready {
                placed.insert(name);
                ordered.push(name.to_string());
                progressed = true;
            } else {
                deferred.push(name);
            }
        }

        if !progressed {
            let cycle_tables: Vec<String> =
                deferred.iter().map(|name| name.to_string()).collect();
            ordered.extend(cycle_tables.iter().cloned());
            return CreationOrder {
                tables: ordered,
                cycle_tables,
            };
        }

        remaining = deferred;
    }

    CreationOrder {
        tables: ordered,
        cycle_tables: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ForeignKey;
    use crate::semantics::SemanticKind;

    fn table(name: &str, fks: &[(&str, &str)]) -> Table {
        Table {
            name: name.to_string(),
            create_statement: format!("CREATE TABLE `{name}` (`id` int)"),
            columns: vec![crate::schema::Column {
                ordinal_position: 1,
                name: "id".to_string(),
                data_type: "int".to_string(),
                column_type: "int".to_string(),
                is_nullable: false,
                default: None,
                character_max_length: None,
                numeric_precision: Some(10),
                numeric_scale: Some(0),
                is_auto_increment: true,
                semantic: SemanticKind::Integer,
            }],
            primary_key: vec!["id".to_string()],
            foreign_keys: fks
                .iter()
                .map(|(column, target)| ForeignKey {
                    name: None,
                    column: column.to_string(),
                    referenced_table: target.to_string(),
                    referenced_column: "id".to_string(),
                })
                .collect(),
            indexes: Vec::new(),
        }
    }

    #[test]
    fn referenced_tables_precede_dependents() {
        let tables = vec![
            table("orders", &[("customer_id", "customers")]),
            table("customers", &[]),
            table("order_items", &[("order_id", "orders")]),
        ];
        let order = creation_order(&tables);
        assert!(!order.has_cycle());

        let pos = |name: &str| order.tables.iter().position(|t| t == name).unwrap();
        assert!(pos("customers") < pos("orders"));
        assert!(pos("orders") < pos("order_items"));
    }

    #[test]
    fn self_references_do_not_force_precedence() {
        let tables = vec![table("employees", &[("manager_id", "employees")])];
        let order = creation_order(&tables);
        assert_eq!(order.tables, vec!["employees".to_string()]);
        assert!(!order.has_cycle());
    }

    #[test]
    fn cycles_terminate_and_append_deterministically() {
        let tables = vec![
            table("a", &[("b_id", "b")]),
            table("b", &[("a_id", "a")]),
            table("standalone", &[]),
        ];
        let first = creation_order(&tables);
        let second = creation_order(&tables);

        assert_eq!(first.tables, second.tables);
        assert_eq!(
            first.tables,
            vec!["standalone".to_string(), "a".to_string(), "b".to_string()]
        );
        assert_eq!(first.cycle_tables, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn edges_to_unknown_tables_are_ignored() {
        let tables = vec![table("logs", &[("tenant_id", "tenants")])];
        let order = creation_order(&tables);
        assert_eq!(order.tables, vec!["logs".to_string()]);
        assert!(!order.has_cycle());
    }
}
