//! Database introspection adapters.

pub mod adapter;
pub mod mysql;
pub mod options;
pub mod samples;

pub use adapter::Adapter;
pub use mysql::{introspect_mysql, introspect_mysql_with_options, MysqlAdapter};
pub use options::IntrospectOptions;
pub use samples::fetch_sample_rows;

pub use dbtwin_core::DatabaseSchema;
