use std::collections::BTreeMap;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Per-table sets of synthetic primary-key values produced during one run.
///
/// A pool is created lazily the first time a table is referenced as a
/// foreign-key target and is append-only afterwards. When the referenced
/// table has not generated rows yet (forward reference inside a cycle), the
/// pool is seeded with `1..=records_per_table` as a best-effort placeholder;
/// the table later appends its real 1-based row indices on top. Values may
/// then not match what the database ultimately assigns, which the clone
/// script tolerates by disabling foreign-key checks around the whole run.
#[derive(Debug, Default)]
pub struct KeyPools {
    pools: BTreeMap<String, Vec<i64>>,
    records_per_table: u32,
}

impl KeyPools {
    pub fn new(records_per_table: u32) -> Self {
        Self {
            pools: BTreeMap::new(),
            records_per_table,
        }
    }

    /// Draw a value uniformly at random from a table's pool, synthesizing
    /// the placeholder pool when the table has none yet.
    pub fn pick(&mut self, table: &str, rng: &mut ChaCha8Rng) -> i64 {
        let records = self.records_per_table;
        let pool = self
            .pools
            .entry(table.to_string())
            .or_insert_with(|| (1..=i64::from(records)).collect());
        let index = rng.random_range(0..pool.len());
        pool[index]
    }

    /// Append a generated row's 1-based index to a table's pool.
    pub fn record(&mut self, table: &str, row_index: u32) {
        self.pools
            .entry(table.to_string())
            .or_default()
            .push(i64::from(row_index));
    }

    /// The values currently in a table's pool, when one exists.
    pub fn values(&self, table: &str) -> Option<&[i64]> {
        self.pools.get(table).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn missing_pools_are_synthesized_as_sequential_placeholders() {
        let mut pools = KeyPools::new(10);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let value = pools.pick("customers", &mut rng);
            assert!((1..=10).contains(&value));
        }
        assert_eq!(
            pools.values("customers"),
            Some((1..=10).collect::<Vec<i64>>().as_slice())
        );
    }

    #[test]
    fn recorded_indices_are_appended_in_order() {
        let mut pools = KeyPools::new(5);
        for index in 1..=3 {
            pools.record("orders", index);
        }
        assert_eq!(pools.values("orders"), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn picks_only_return_pool_members() {
        let mut pools = KeyPools::new(5);
        for index in 1..=4 {
            pools.record("orders", index);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            assert!((1..=4).contains(&pools.pick("orders", &mut rng)));
        }
    }
}
