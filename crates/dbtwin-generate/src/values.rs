use std::fmt;

use chrono::{Duration, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;

use dbtwin_core::{Column, SemanticKind, Table};

use crate::keypool::KeyPools;
use crate::model::GenerateOptions;
use crate::pools;

/// A single SQL literal, ready for embedding in an INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlLiteral {
    Int(i64),
    /// Exact decimal text, emitted unquoted (e.g. `123.45`).
    Decimal(String),
    /// String contents; quoting and escaping happen on render.
    Quoted(String),
    /// Emitted verbatim, e.g. `NOW()`.
    Raw(String),
}

impl fmt::Display for SqlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlLiteral::Int(value) => write!(f, "{value}"),
            SqlLiteral::Decimal(text) | SqlLiteral::Raw(text) => f.write_str(text),
            SqlLiteral::Quoted(text) => write!(f, "'{}'", escape_string(text)),
        }
    }
}

/// Escape a string for embedding in a single-quoted MySQL literal.
pub fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "''")
}

/// Produces one literal per column, honoring foreign keys, declared
/// defaults, and the column's inferred semantic kind.
#[derive(Debug)]
pub struct ValueGenerator<'a> {
    options: &'a GenerateOptions,
    enum_alternatives: Regex,
}

impl<'a> ValueGenerator<'a> {
    pub fn new(options: &'a GenerateOptions) -> Self {
        Self {
            options,
            // Quoted alternatives inside an enum/set column type.
            enum_alternatives: Regex::new("'([^']*)'").expect("static pattern"),
        }
    }

    /// Generate a literal for one column of one row.
    ///
    /// Decision order: foreign-key columns draw from the referenced table's
    /// key pool; otherwise a declared non-null default is emitted with a
    /// fixed 30% probability; otherwise the semantic handler runs.
    pub fn column_value(
        &self,
        table: &Table,
        column: &Column,
        pools: &mut KeyPools,
        rng: &mut ChaCha8Rng,
    ) -> SqlLiteral {
        if let Some(fk) = table
            .foreign_keys
            .iter()
            .find(|fk| fk.column == column.name)
        {
            return SqlLiteral::Int(pools.pick(&fk.referenced_table, rng));
        }

        if let Some(default) = column.default.as_deref() {
            if rng.random_range(0..10) < 3 {
                return default_literal(default);
            }
        }

        self.semantic_value(column, rng)
    }

    fn semantic_value(&self, column: &Column, rng: &mut ChaCha8Rng) -> SqlLiteral {
        let base_date = self.options.base_date;
        match column.semantic {
            SemanticKind::Email => {
                let user = format!(
                    "{}{}{}",
                    pick(rng, pools::FIRST_NAMES).to_lowercase(),
                    pick(rng, pools::LAST_NAMES).to_lowercase(),
                    rng.random_range(1..=999)
                );
                SqlLiteral::Quoted(format!("{user}@{}", pick(rng, pools::EMAIL_DOMAINS)))
            }
            SemanticKind::FirstName => SqlLiteral::Quoted(pick(rng, pools::FIRST_NAMES).to_string()),
            SemanticKind::LastName => SqlLiteral::Quoted(pick(rng, pools::LAST_NAMES).to_string()),
            SemanticKind::FullName | SemanticKind::GenericName => SqlLiteral::Quoted(format!(
                "{} {}",
                pick(rng, pools::FIRST_NAMES),
                pick(rng, pools::LAST_NAMES)
            )),
            SemanticKind::Phone => SqlLiteral::Quoted(format!(
                "555-{:03}-{:04}",
                rng.random_range(100..=999),
                rng.random_range(1000..=9999)
            )),
            SemanticKind::Address => SqlLiteral::Quoted(format!(
                "{} {}",
                rng.random_range(100..=9999),
                pick(rng, pools::STREETS)
            )),
            SemanticKind::City => SqlLiteral::Quoted(pick(rng, pools::CITIES).to_string()),
            SemanticKind::State => SqlLiteral::Quoted(pick(rng, pools::STATES).to_string()),
            SemanticKind::Zipcode => {
                SqlLiteral::Quoted(format!("{:05}", rng.random_range(10000..=99999)))
            }
            SemanticKind::Company => SqlLiteral::Quoted(pick(rng, pools::COMPANIES).to_string()),
            SemanticKind::Url => {
                SqlLiteral::Quoted(format!("https://www.{}", pick(rng, pools::URL_DOMAINS)))
            }
            SemanticKind::BirthDate => {
                let days_back = rng.random_range(18 * 365..=80 * 365);
                SqlLiteral::Quoted(format_date(base_date - Duration::days(days_back)))
            }
            SemanticKind::LoremParagraph => SqlLiteral::Quoted(lorem_paragraph(column, rng)),
            SemanticKind::LoremTitle => SqlLiteral::Quoted(lorem_title(rng)),
            SemanticKind::LoremText => SqlLiteral::Quoted(lorem_text(column, rng)),
            SemanticKind::PasswordHash => {
                SqlLiteral::Quoted(format!("$2y$10${}", "a".repeat(53)))
            }
            SemanticKind::Enum => self.enum_value(column, rng),
            SemanticKind::Integer => {
                if column.column_type.to_lowercase().contains("unsigned") {
                    SqlLiteral::Int(rng.random_range(1..=1_000_000))
                } else {
                    SqlLiteral::Int(rng.random_range(-1_000_000..=1_000_000))
                }
            }
            SemanticKind::Decimal => SqlLiteral::Decimal(decimal_value(column, rng)),
            SemanticKind::Date => {
                let days_back = rng.random_range(0..=5 * 365);
                SqlLiteral::Quoted(format_date(base_date - Duration::days(days_back)))
            }
            SemanticKind::DateTime => {
                let days_back = rng.random_range(0..=2 * 365);
                let date = base_date - Duration::days(days_back);
                SqlLiteral::Quoted(format!("{} {}", format_date(date), random_time(rng)))
            }
            SemanticKind::Time => SqlLiteral::Quoted(random_time(rng)),
        }
    }

    fn enum_value(&self, column: &Column, rng: &mut ChaCha8Rng) -> SqlLiteral {
        let alternatives: Vec<&str> = self
            .enum_alternatives
            .captures_iter(&column.column_type)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        match alternatives.choose(rng) {
            Some(value) => SqlLiteral::Quoted((*value).to_string()),
            None => SqlLiteral::Quoted("active".to_string()),
        }
    }
}

fn default_literal(default: &str) -> SqlLiteral {
    if default.eq_ignore_ascii_case("current_timestamp") {
        SqlLiteral::Raw("NOW()".to_string())
    } else {
        SqlLiteral::Quoted(default.to_string())
    }
}

fn pick<'p>(rng: &mut ChaCha8Rng, pool: &[&'p str]) -> &'p str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn random_words(rng: &mut ChaCha8Rng, count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|_| pools::LOREM_WORDS.choose(rng).copied().unwrap_or("lorem"))
        .collect()
}

fn lorem_title(rng: &mut ChaCha8Rng) -> String {
    let count = rng.random_range(2..=4);
    let words: Vec<String> = pools::LOREM_WORDS
        .choose_multiple(rng, count)
        .map(|word| capitalize(word))
        .collect();
    words.join(" ")
}

fn lorem_paragraph(column: &Column, rng: &mut ChaCha8Rng) -> String {
    let mut count = rng.random_range(20..=50) as usize;
    if let Some(max) = column.character_max_length {
        count = count.min((max / 6).max(0) as usize);
    }
    let mut text = random_words(rng, count).join(" ");
    if let Some(max) = column.character_max_length {
        let max = max.max(0) as usize;
        if text.len() > max {
            if max >= 3 {
                text.truncate(max - 3);
                text.push_str("...");
            } else {
                text.truncate(max);
            }
        }
    }
    capitalize(&text)
}

fn lorem_text(column: &Column, rng: &mut ChaCha8Rng) -> String {
    let mut count = rng.random_range(1..=5) as usize;
    if let Some(max) = column.character_max_length {
        count = count.min((max / 6).max(0) as usize);
    }
    let mut text = random_words(rng, count).join(" ");
    if let Some(max) = column.character_max_length {
        text.truncate(max.max(0) as usize);
    }
    capitalize(&text)
}

fn decimal_value(column: &Column, rng: &mut ChaCha8Rng) -> String {
    let precision = column.numeric_precision.unwrap_or(10);
    let scale = column.numeric_scale.unwrap_or(2).max(0) as usize;

    // Integer digits bounded so the whole part fits an i64.
    let int_digits = (precision - scale as i64).clamp(1, 15) as u32;
    let max_whole = 10_i64.pow(int_digits) - 1;
    let whole = rng.random_range(1..=max_whole);

    if scale == 0 {
        return whole.to_string();
    }

    let fraction: String = (0..scale)
        .map(|_| char::from(b'0' + rng.random_range(0..10) as u8))
        .collect();
    format!("{whole}.{fraction}")
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn random_time(rng: &mut ChaCha8Rng) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        rng.random_range(0..=23),
        rng.random_range(0..=59),
        rng.random_range(0..=59)
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
