use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use dbtwin_core::{Error, Result};

// Numeric catalog columns are CAST to SIGNED and textual ones to CHAR so
// decoding stays stable across MySQL versions (8.0 exposes several of them
// as unsigned or binary types).

fn db_err(err: sqlx::Error) -> Error {
    Error::Db(err.to_string())
}

pub async fn fetch_database_name(pool: &MySqlPool) -> Result<String> {
    let row = sqlx::query("SELECT DATABASE() AS database_name")
        .fetch_one(pool)
        .await
        .map_err(db_err)?;
    let name: Option<String> = row.try_get("database_name").map_err(db_err)?;
    name.ok_or_else(|| Error::Db("connection has no default database selected".to_string()))
}

pub async fn list_tables(pool: &MySqlPool, database: &str) -> Result<Vec<String>> {
    let rows = sqlx::query(
        r"
        SELECT CAST(table_name AS CHAR) AS table_name
        FROM information_schema.tables
        WHERE table_schema = ?
          AND table_type = 'BASE TABLE'
        ORDER BY table_name
        ",
    )
    .bind(database)
    .fetch_all(pool)
    .await
    .map_err(db_err)?;

    rows.into_iter()
        .map(|row| row.try_get::<String, _>("table_name").map_err(db_err))
        .collect()
}

pub async fn get_create_statement(pool: &MySqlPool, table: &str) -> Result<String> {
    // SHOW CREATE TABLE does not accept placeholders; the name comes from
    // the catalog itself and is backtick-quoted.
    let sql = format!("SHOW CREATE TABLE `{}`", table.replace('`', "``"));
    let row = sqlx::query(&sql).fetch_one(pool).await.map_err(db_err)?;
    row.try_get::<String, _>(1).map_err(db_err)
}

pub struct RawColumn {
    pub ordinal_position: i64,
    pub name: String,
    pub data_type: String,
    pub column_type: String,
    pub is_nullable: String,
    pub default: Option<String>,
    pub character_max_length: Option<i64>,
    pub numeric_precision: Option<i64>,
    pub numeric_scale: Option<i64>,
    pub extra: String,
}

pub async fn list_columns(pool: &MySqlPool, database: &str, table: &str) -> Result<Vec<RawColumn>> {
    let rows = sqlx::query(
        r"
        SELECT
          CAST(ordinal_position AS SIGNED) AS ordinal_position,
          CAST(column_name AS CHAR) AS column_name,
          CAST(data_type AS CHAR) AS data_type,
          CAST(column_type AS CHAR) AS column_type,
          CAST(is_nullable AS CHAR) AS is_nullable,
          CAST(column_default AS CHAR) AS column_default,
          CAST(character_maximum_length AS SIGNED) AS character_max_length,
          CAST(numeric_precision AS SIGNED) AS numeric_precision,
          CAST(numeric_scale AS SIGNED) AS numeric_scale,
          CAST(extra AS CHAR) AS extra
        FROM information_schema.columns
        WHERE table_schema = ?
          AND table_name = ?
        ORDER BY ordinal_position
        ",
    )
    .bind(database)
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(db_err)?;

    rows.into_iter().map(map_raw_column).collect()
}

fn map_raw_column(row: MySqlRow) -> Result<RawColumn> {
    Ok(RawColumn {
        ordinal_position: row.try_get("ordinal_position").map_err(db_err)?,
        name: row.try_get("column_name").map_err(db_err)?,
        data_type: row.try_get("data_type").map_err(db_err)?,
        column_type: row.try_get("column_type").map_err(db_err)?,
        is_nullable: row.try_get("is_nullable").map_err(db_err)?,
        default: row.try_get("column_default").map_err(db_err)?,
        character_max_length: row.try_get("character_max_length").map_err(db_err)?,
        numeric_precision: row.try_get("numeric_precision").map_err(db_err)?,
        numeric_scale: row.try_get("numeric_scale").map_err(db_err)?,
        extra: row
            .try_get::<Option<String>, _>("extra")
            .map_err(db_err)?
            .unwrap_or_default(),
    })
}

pub async fn get_primary_key(
    pool: &MySqlPool,
    database: &str,
    table: &str,
) -> Result<Vec<String>> {
    let rows = sqlx::query(
        r"
        SELECT CAST(column_name AS CHAR) AS column_name
        FROM information_schema.key_column_usage
        WHERE table_schema = ?
          AND table_name = ?
          AND constraint_name = 'PRIMARY'
        ORDER BY ordinal_position
        ",
    )
    .bind(database)
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(db_err)?;

    rows.into_iter()
        .map(|row| row.try_get::<String, _>("column_name").map_err(db_err))
        .collect()
}

pub struct RawForeignKey {
    pub name: String,
    pub column: String,
    pub referenced_schema: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

pub async fn list_foreign_keys(
    pool: &MySqlPool,
    database: &str,
    table: &str,
) -> Result<Vec<RawForeignKey>> {
    let rows = sqlx::query(
        r"
        SELECT
          CAST(constraint_name AS CHAR) AS constraint_name,
          CAST(column_name AS CHAR) AS column_name,
          CAST(referenced_table_schema AS CHAR) AS referenced_table_schema,
          CAST(referenced_table_name AS CHAR) AS referenced_table_name,
          CAST(referenced_column_name AS CHAR) AS referenced_column_name
        FROM information_schema.key_column_usage
        WHERE table_schema = ?
          AND table_name = ?
          AND referenced_table_name IS NOT NULL
        ORDER BY constraint_name, ordinal_position
        ",
    )
    .bind(database)
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(db_err)?;

    rows.into_iter()
        .map(|row| {
            Ok(RawForeignKey {
                name: row.try_get("constraint_name").map_err(db_err)?,
                column: row.try_get("column_name").map_err(db_err)?,
                referenced_schema: row.try_get("referenced_table_schema").map_err(db_err)?,
                referenced_table: row.try_get("referenced_table_name").map_err(db_err)?,
                referenced_column: row.try_get("referenced_column_name").map_err(db_err)?,
            })
        })
        .collect()
}

pub struct RawIndex {
    pub name: String,
    pub non_unique: i64,
}

pub async fn list_indexes(pool: &MySqlPool, database: &str, table: &str) -> Result<Vec<RawIndex>> {
    let rows = sqlx::query(
        r"
        SELECT DISTINCT
          CAST(index_name AS CHAR) AS index_name,
          CAST(non_unique AS SIGNED) AS non_unique
        FROM information_schema.statistics
        WHERE table_schema = ?
          AND table_name = ?
          AND index_name <> 'PRIMARY'
        ORDER BY index_name
        ",
    )
    .bind(database)
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(db_err)?;

    rows.into_iter()
        .map(|row| {
            Ok(RawIndex {
                name: row.try_get("index_name").map_err(db_err)?,
                non_unique: row.try_get("non_unique").map_err(db_err)?,
            })
        })
        .collect()
}
