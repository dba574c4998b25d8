use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::GenerationError;

/// Default number of synthetic records per table.
pub const DEFAULT_RECORDS_PER_TABLE: u32 = 25;

/// Upper bound on records per table. Requests above it are clamped before
/// generation starts so key pools stay bounded on large schemas.
pub const MAX_RECORDS_PER_TABLE: u32 = 10_000;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Records generated per table; also the size of placeholder key pools.
    pub records_per_table: u32,
    /// Seed for all randomness in the run.
    pub seed: u64,
    /// Anchor for every relative date range ("within the last 5 years"
    /// means 5 years before this date). Injected so runs are reproducible.
    pub base_date: NaiveDate,
}

impl GenerateOptions {
    /// Build options, rejecting a zero record count and clamping oversized
    /// requests to [`MAX_RECORDS_PER_TABLE`].
    pub fn new(
        records_per_table: u32,
        seed: u64,
        base_date: NaiveDate,
    ) -> Result<Self, GenerationError> {
        if records_per_table == 0 {
            return Err(GenerationError::InvalidConfig(
                "records per table must be a positive integer".to_string(),
            ));
        }

        let clamped = records_per_table.min(MAX_RECORDS_PER_TABLE);
        if clamped != records_per_table {
            warn!(
                requested = records_per_table,
                clamped, "records per table clamped to configured maximum"
            );
        }

        Ok(Self {
            records_per_table: clamped,
            seed,
            base_date,
        })
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            records_per_table: DEFAULT_RECORDS_PER_TABLE,
            seed: 0,
            base_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }
}

/// Summary of an assembled clone script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptReport {
    pub tables: usize,
    pub records_per_table: u32,
    pub total_records: u64,
    pub bytes: u64,
    pub order: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_records_is_rejected() {
        let result = GenerateOptions::new(0, 1, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
    }

    #[test]
    fn oversized_requests_are_clamped_not_rejected() {
        let options = GenerateOptions::new(
            MAX_RECORDS_PER_TABLE + 1,
            1,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .expect("clamped options");
        assert_eq!(options.records_per_table, MAX_RECORDS_PER_TABLE);
    }
}
