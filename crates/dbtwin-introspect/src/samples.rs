use sqlx::{MySqlPool, Row};

use dbtwin_core::{Error, Result, Table};

/// Fetch up to `limit` rows from a table for documentation previews.
///
/// Every column is projected through `CAST(... AS CHAR)` so values decode
/// uniformly as optional strings regardless of their declared type. Callers
/// are expected to catch failures per table and degrade to "no sample
/// data" rather than aborting the run.
pub async fn fetch_sample_rows(
    pool: &MySqlPool,
    table: &Table,
    limit: u32,
) -> Result<Vec<Vec<Option<String>>>> {
    if table.columns.is_empty() {
        return Ok(Vec::new());
    }

    let projection = table
        .columns
        .iter()
        .map(|column| {
            let quoted = quote_ident(&column.name);
            format!("CAST({quoted} AS CHAR) AS {quoted}")
        })
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "SELECT {projection} FROM {} LIMIT {limit}",
        quote_ident(&table.name)
    );

    let rows = sqlx::query(&sql)
        .fetch_all(pool)
        .await
        .map_err(|err| Error::Db(err.to_string()))?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut values = Vec::with_capacity(table.columns.len());
        for index in 0..table.columns.len() {
            let value: Option<String> = row
                .try_get(index)
                .map_err(|err| Error::Db(err.to_string()))?;
            values.push(value);
        }
        out.push(values);
    }
    Ok(out)
}

fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
