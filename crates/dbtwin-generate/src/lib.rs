//! Synthetic data generation and clone-script assembly.
//!
//! Everything in this crate is pure and seeded: the caller supplies the
//! records-per-table count, a seed, and a base date, and identical inputs
//! produce a byte-identical script.

pub mod errors;
pub mod keypool;
pub mod model;
mod pools;
pub mod script;
pub mod values;

pub use errors::GenerationError;
pub use keypool::KeyPools;
pub use model::{
    GenerateOptions, ScriptReport, DEFAULT_RECORDS_PER_TABLE, MAX_RECORDS_PER_TABLE,
};
pub use script::assemble;
pub use values::{SqlLiteral, ValueGenerator};
