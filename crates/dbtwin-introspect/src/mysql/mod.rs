use sqlx::MySqlPool;
use tracing::{debug, warn};

use dbtwin_core::{DatabaseSchema, Result, Table, SCHEMA_VERSION};

use crate::adapter::Adapter;
use crate::options::IntrospectOptions;

mod mapper;
mod queries;

/// Adapter for MySQL databases.
#[derive(Debug, Clone)]
pub struct MysqlAdapter {
    pool: MySqlPool,
}

impl MysqlAdapter {
    /// Create a new adapter using a pre-configured pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Adapter for MysqlAdapter {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    async fn introspect(&self, opts: &IntrospectOptions) -> Result<DatabaseSchema> {
        introspect(&self.pool, opts).await
    }
}

/// Introspect MySQL with default options.
pub async fn introspect_mysql(pool: &MySqlPool) -> Result<DatabaseSchema> {
    introspect_mysql_with_options(pool, IntrospectOptions::default()).await
}

/// Introspect MySQL with caller-provided options.
pub async fn introspect_mysql_with_options(
    pool: &MySqlPool,
    opts: IntrospectOptions,
) -> Result<DatabaseSchema> {
    introspect(pool, &opts).await
}

/// Introspect the connected database according to the provided options.
///
/// Per table, catalog reads happen in a fixed sequence: DDL text, columns
/// in ordinal order, primary key, foreign keys, non-primary indexes. Reads
/// are point-in-time with no wrapping transaction, so concurrent schema
/// changes during a run are undefined behavior. Any catalog failure is
/// fatal; a database with no base tables yields an empty snapshot.
pub async fn introspect(pool: &MySqlPool, opts: &IntrospectOptions) -> Result<DatabaseSchema> {
    let database = queries::fetch_database_name(pool).await?;
    let table_names = queries::list_tables(pool, &database).await?;
    if table_names.is_empty() {
        warn!(database = %database, "no base tables found; producing an empty snapshot");
    }

    let mut tables = Vec::with_capacity(table_names.len());
    for name in table_names {
        let create_statement = queries::get_create_statement(pool, &name).await?;
        let raw_columns = queries::list_columns(pool, &database, &name).await?;
        let columns = mapper::map_columns(raw_columns);
        let primary_key = queries::get_primary_key(pool, &database, &name).await?;
        let raw_fks = queries::list_foreign_keys(pool, &database, &name).await?;
        let foreign_keys = mapper::map_foreign_keys(raw_fks, &database);
        let indexes = if opts.include_indexes {
            mapper::map_indexes(queries::list_indexes(pool, &database, &name).await?)
        } else {
            Vec::new()
        };

        debug!(
            table = %name,
            columns = columns.len(),
            foreign_keys = foreign_keys.len(),
            "table introspected"
        );

        tables.push(Table {
            name,
            create_statement,
            columns,
            primary_key,
            foreign_keys,
            indexes,
        });
    }

    Ok(DatabaseSchema {
        schema_version: SCHEMA_VERSION.to_string(),
        engine: "mysql".to_string(),
        database,
        tables,
    })
}
