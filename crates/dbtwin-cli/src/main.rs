mod config;
mod logging;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use dbtwin_core::{
    creation_order, redact_connection_string, validate_schema, Error as CoreError,
};
use dbtwin_docs::{render_markdown, DocsOptions, SampleSet};
use dbtwin_generate::{assemble, GenerateOptions, GenerationError, DEFAULT_RECORDS_PER_TABLE};
use dbtwin_introspect::{fetch_sample_rows, introspect_mysql_with_options, IntrospectOptions};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("settings error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unsupported engine: {0}")]
    UnsupportedEngine(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "dbtwin",
    version,
    about = "MySQL structure documentation and synthetic-data clone scripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a markdown structure document for a database.
    Describe(DescribeArgs),
    /// Generate a SQL script that recreates the schema with synthetic data.
    Clone(CloneArgs),
}

#[derive(Args, Debug)]
struct ConnArgs {
    /// Database connection string (flag form).
    #[arg(long, value_name = "CONNECTION_STRING", conflicts_with = "conn_pos")]
    conn: Option<String>,
    /// Database connection string (positional form).
    #[arg(value_name = "CONNECTION_STRING", required_unless_present = "conn")]
    conn_pos: Option<String>,
    /// Optional TOML settings file; explicit flags win over file values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DescribeArgs {
    #[command(flatten)]
    conn: ConnArgs,
    /// Output path for the markdown document.
    #[arg(long, default_value = "database_structure.md")]
    out: PathBuf,
    /// Include sample-row previews (may expose live data).
    #[arg(long, default_value_t = false)]
    samples: bool,
    /// Rows per table in sample previews.
    #[arg(long, value_name = "N")]
    sample_rows: Option<u32>,
    /// Skip non-primary indexes.
    #[arg(long, default_value_t = false)]
    skip_indexes: bool,
    /// Also write the raw schema snapshot as JSON.
    #[arg(long, value_name = "PATH")]
    schema_json: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CloneArgs {
    #[command(flatten)]
    conn: ConnArgs,
    /// Synthetic records per table (clamped to the configured maximum).
    #[arg(long, value_name = "N")]
    records: Option<u32>,
    /// Seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Output path for the clone script.
    #[arg(long, default_value = "database_clone.sql")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Describe(args) => run_describe(args).await,
        Command::Clone(args) => run_clone(args).await,
    }
}

async fn run_describe(args: DescribeArgs) -> Result<(), CliError> {
    let conn = resolve_conn(&args.conn)?;
    detect_engine(&conn)?;
    let settings = config::load_optional(args.conn.config.as_deref())?;

    let run_id = Uuid::new_v4();
    let redacted = redact_connection_string(&conn);
    info!(
        event = "run_started",
        run_id = %run_id,
        command = "describe",
        connection = %redacted.redacted
    );
    let timer = Instant::now();

    let pool = connect(&conn).await?;
    let options = IntrospectOptions {
        include_indexes: !args.skip_indexes,
    };
    let schema = introspect_mysql_with_options(&pool, options).await?;
    validate_schema(&schema)?;
    info!(event = "introspection_finished", tables = schema.tables.len());

    let include_samples = args.samples || settings.include_samples.unwrap_or(false);
    let sample_limit = args.sample_rows.or(settings.sample_rows).unwrap_or(5);
    let mut samples = SampleSet::new();
    if include_samples {
        for table in &schema.tables {
            match fetch_sample_rows(&pool, table, sample_limit).await {
                Ok(rows) => {
                    samples.insert(table.name.clone(), Some(rows));
                }
                Err(err) => {
                    warn!(
                        table = %table.name,
                        error = %err,
                        "sample fetch failed; continuing without samples"
                    );
                    samples.insert(table.name.clone(), None);
                }
            }
        }
    }

    let document = render_markdown(
        &schema,
        &samples,
        &DocsOptions { include_samples },
        Utc::now().naive_utc(),
    );
    std::fs::write(&args.out, &document)?;
    info!(event = "document_written", path = %args.out.display());

    if let Some(path) = &args.schema_json {
        std::fs::write(path, serde_json::to_vec_pretty(&schema)?)?;
        info!(event = "schema_written", path = %path.display());
    }

    info!(
        event = "run_finished",
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );

    println!("Structure document written to {}", args.out.display());
    println!("Tables documented: {}", schema.tables.len());
    Ok(())
}

async fn run_clone(args: CloneArgs) -> Result<(), CliError> {
    let conn = resolve_conn(&args.conn)?;
    detect_engine(&conn)?;
    let settings = config::load_optional(args.conn.config.as_deref())?;

    let run_id = Uuid::new_v4();
    let redacted = redact_connection_string(&conn);
    info!(
        event = "run_started",
        run_id = %run_id,
        command = "clone",
        connection = %redacted.redacted
    );
    let timer = Instant::now();

    let pool = connect(&conn).await?;
    let schema = introspect_mysql_with_options(&pool, IntrospectOptions::default()).await?;
    validate_schema(&schema)?;
    info!(event = "introspection_finished", tables = schema.tables.len());

    let records = args
        .records
        .or(settings.records_per_table)
        .unwrap_or(DEFAULT_RECORDS_PER_TABLE);
    // Default seed varies per run but is logged, so any run can be replayed.
    let seed = args
        .seed
        .or(settings.seed)
        .unwrap_or_else(|| Utc::now().timestamp() as u64);
    let options = GenerateOptions::new(records, seed, Utc::now().date_naive())?;
    info!(
        event = "generation_started",
        records_per_table = options.records_per_table,
        seed = options.seed
    );

    let order = creation_order(&schema.tables);
    if order.has_cycle() {
        warn!(
            tables = ?order.cycle_tables,
            "foreign key cycle detected; cycle tables appended without full ordering"
        );
    }

    let (script, report) = assemble(&schema, &order, &options, Utc::now().naive_utc());
    std::fs::write(&args.out, &script)?;
    info!(
        event = "script_written",
        path = %args.out.display(),
        bytes = report.bytes
    );
    info!(
        event = "run_finished",
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );

    println!("Clone script written to {}", args.out.display());
    println!("Tables cloned: {}", report.tables);
    println!("Records per table: {}", report.records_per_table);
    println!("Total synthetic records: {}", report.total_records);
    println!("File size: {} bytes", report.bytes);
    println!("Creation order: {}", report.order.join(", "));
    Ok(())
}

async fn connect(conn: &str) -> Result<MySqlPool, CliError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(conn)
        .await?;
    Ok(pool)
}

fn resolve_conn(args: &ConnArgs) -> Result<String, CliError> {
    match (&args.conn, &args.conn_pos) {
        (Some(value), None) => Ok(value.clone()),
        (None, Some(value)) => Ok(value.clone()),
        (Some(_), Some(_)) => Err(CliError::InvalidConfig(
            "use either --conn or the positional connection string".to_string(),
        )),
        (None, None) => Err(CliError::InvalidConfig(
            "connection string is required".to_string(),
        )),
    }
}

fn detect_engine(conn: &str) -> Result<&'static str, CliError> {
    if conn.starts_with("mysql://") {
        Ok("mysql")
    } else {
        Err(CliError::UnsupportedEngine(conn.to_string()))
    }
}
