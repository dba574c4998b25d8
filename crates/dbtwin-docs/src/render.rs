use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use dbtwin_core::{DatabaseSchema, Table};

/// Rendering options.
///
/// `include_samples` gates the sample-row previews; the caller decides
/// whether live data may be exposed, the renderer never does.
#[derive(Debug, Clone, Default)]
pub struct DocsOptions {
    pub include_samples: bool,
}

/// Sample rows for one table, each row aligned to the table's column order.
pub type SampleRows = Vec<Vec<Option<String>>>;

/// Sample rows per table. `None` marks a table whose sample fetch failed;
/// it renders as "no sample data" instead of aborting the document.
pub type SampleSet = BTreeMap<String, Option<SampleRows>>;

/// Render the structure document for a schema snapshot.
///
/// Deterministic for identical input: tables render in snapshot order and
/// the timestamp is supplied by the caller.
pub fn render_markdown(
    schema: &DatabaseSchema,
    samples: &SampleSet,
    options: &DocsOptions,
    generated_at: NaiveDateTime,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Database structure: {}", schema.database));
    lines.push(String::new());
    lines.push(format!("- Engine: {}", schema.engine));
    lines.push(format!(
        "- Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("- Tables: {}", schema.tables.len()));
    lines.push(String::new());

    lines.push("## Contents".to_string());
    lines.push(String::new());
    for table in &schema.tables {
        lines.push(format!("- [{}](#{})", table.name, anchor(&table.name)));
    }
    lines.push(String::new());

    for table in &schema.tables {
        render_table(&mut lines, table, samples, options);
    }

    lines.join("\n")
}

fn render_table(lines: &mut Vec<String>, table: &Table, samples: &SampleSet, options: &DocsOptions) {
    lines.push(format!("## {}", table.name));
    lines.push(String::new());

    lines.push("| column | type | nullable | default | extra |".to_string());
    lines.push("| --- | --- | --- | --- | --- |".to_string());
    for column in &table.columns {
        let nullable = if column.is_nullable { "yes" } else { "no" };
        let default = column.default.as_deref().unwrap_or("-");
        let extra = if column.is_auto_increment {
            "auto_increment"
        } else {
            "-"
        };
        lines.push(format!(
            "| {} | {} | {} | {} | {} |",
            column.name, column.column_type, nullable, default, extra
        ));
    }
    lines.push(String::new());

    if table.primary_key.is_empty() {
        lines.push("- Primary key: none".to_string());
    } else {
        lines.push(format!("- Primary key: {}", table.primary_key.join(", ")));
    }

    for fk in &table.foreign_keys {
        lines.push(format!(
            "- Foreign key: {} -> {}.{}",
            fk.column, fk.referenced_table, fk.referenced_column
        ));
    }

    for index in &table.indexes {
        let kind = if index.is_unique { "unique index" } else { "index" };
        lines.push(format!("- {kind}: {}", index.name));
    }
    lines.push(String::new());

    if options.include_samples {
        render_samples(lines, table, samples.get(&table.name));
    }
}

fn render_samples(lines: &mut Vec<String>, table: &Table, samples: Option<&Option<SampleRows>>) {
    lines.push("### Sample rows".to_string());
    lines.push(String::new());

    let rows = match samples {
        Some(Some(rows)) if !rows.is_empty() => rows,
        _ => {
            lines.push("_No sample data available._".to_string());
            lines.push(String::new());
            return;
        }
    };

    let header: Vec<&str> = table
        .columns
        .iter()
        .map(|column| column.name.as_str())
        .collect();
    lines.push(format!("| {} |", header.join(" | ")));
    lines.push(format!(
        "|{}|",
        header.iter().map(|_| " --- ").collect::<Vec<_>>().join("|")
    ));

    for row in rows {
        let cells: Vec<&str> = row
            .iter()
            .map(|value| value.as_deref().unwrap_or("NULL"))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }
    lines.push(String::new());
}

fn anchor(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
