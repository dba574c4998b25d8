use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use dbtwin_core::{CreationOrder, DatabaseSchema, Table};

use crate::keypool::KeyPools;
use crate::model::{GenerateOptions, ScriptReport};
use crate::values::ValueGenerator;

/// Assemble a complete clone script: DDL for every table in creation order,
/// then synthetic INSERT statements in the same order, all wrapped in a
/// foreign-key-check disable/enable pair so the database accepts the rows
/// even where the best-effort ordering leaves gaps.
pub fn assemble(
    schema: &DatabaseSchema,
    order: &CreationOrder,
    options: &GenerateOptions,
    generated_at: NaiveDateTime,
) -> (String, ScriptReport) {
    let generator = ValueGenerator::new(options);
    let mut pools = KeyPools::new(options.records_per_table);
    let mut lines: Vec<String> = Vec::new();

    lines.push("-- Database clone script with synthetic data".to_string());
    lines.push(format!(
        "-- Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("-- Source database: {}", schema.database));
    lines.push(format!(
        "-- Records per table: {}",
        options.records_per_table
    ));
    lines.push(String::new());
    lines.push("SET FOREIGN_KEY_CHECKS = 0;".to_string());
    lines.push("SET SQL_MODE = 'NO_AUTO_VALUE_ON_ZERO';".to_string());
    lines.push("SET time_zone = '+00:00';".to_string());
    lines.push(String::new());

    let clone_db = format!("{}_clone", schema.database);
    lines.push("-- Create database".to_string());
    lines.push(format!(
        "CREATE DATABASE IF NOT EXISTS {} DEFAULT CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci;",
        quote_ident(&clone_db)
    ));
    lines.push(format!("USE {};", quote_ident(&clone_db)));
    lines.push(String::new());

    for name in &order.tables {
        let Some(table) = schema.table(name) else {
            continue;
        };
        lines.push(format!("-- Table structure for table {}", quote_ident(name)));
        lines.push(format!("DROP TABLE IF EXISTS {};", quote_ident(name)));
        lines.push(format!("{};", table.create_statement));
        lines.push(String::new());
    }

    for name in &order.tables {
        let Some(table) = schema.table(name) else {
            continue;
        };
        let table_seed = hash_seed(options.seed, name);
        let mut rng = ChaCha8Rng::seed_from_u64(table_seed);

        lines.push(format!("-- Synthetic data for table {}", quote_ident(name)));
        let statements = insert_statements(table, &generator, &mut pools, &mut rng, options);
        info!(
            table = %name,
            rows = statements.len(),
            "table data generated"
        );
        lines.extend(statements);
        lines.push(String::new());
    }

    lines.push("SET FOREIGN_KEY_CHECKS = 1;".to_string());
    lines.push(String::new());
    lines.push("-- Clone complete".to_string());
    lines.push(format!("-- Database: {clone_db}"));
    lines.push(format!("-- Total tables: {}", order.tables.len()));
    lines.push(format!(
        "-- Total records: {}",
        order.tables.len() as u64 * u64::from(options.records_per_table)
    ));

    let script = lines.join("\n");
    let report = ScriptReport {
        tables: order.tables.len(),
        records_per_table: options.records_per_table,
        total_records: order.tables.len() as u64 * u64::from(options.records_per_table),
        bytes: script.len() as u64,
        order: order.tables.clone(),
    };

    (script, report)
}

fn insert_statements(
    table: &Table,
    generator: &ValueGenerator<'_>,
    pools: &mut KeyPools,
    rng: &mut ChaCha8Rng,
    options: &GenerateOptions,
) -> Vec<String> {
    // Auto-increment columns are omitted entirely; the database assigns them.
    let insert_columns: Vec<_> = table
        .columns
        .iter()
        .filter(|column| !column.is_auto_increment)
        .collect();
    if insert_columns.is_empty() {
        return Vec::new();
    }

    let column_list = insert_columns
        .iter()
        .map(|column| quote_ident(&column.name))
        .collect::<Vec<_>>()
        .join(", ");
    let has_generated_pk = table.auto_increment_pk().is_some();

    let mut statements = Vec::with_capacity(options.records_per_table as usize);
    for row_index in 1..=options.records_per_table {
        let values = insert_columns
            .iter()
            .map(|column| generator.column_value(table, column, pools, rng).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        statements.push(format!(
            "INSERT INTO {} ({}) VALUES ({});",
            quote_ident(&table.name),
            column_list,
            values
        ));

        // The row index is what auto-increment will assign, so dependents
        // can reference it.
        if has_generated_pk {
            pools.record(&table.name, row_index);
        }
    }

    statements
}

/// Quote a MySQL identifier with backticks.
pub fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Derive a per-table seed from the run seed so each table's data is stable
/// regardless of how many other tables exist.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
