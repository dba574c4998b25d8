use serde::{Deserialize, Serialize};

/// Inferred real-world meaning of a column, used to pick a value generator.
///
/// Closed set: the generator matches exhaustively over it, so adding a kind
/// forces every consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticKind {
    Email,
    FirstName,
    LastName,
    FullName,
    GenericName,
    Phone,
    Address,
    City,
    State,
    Zipcode,
    Company,
    Url,
    BirthDate,
    LoremParagraph,
    LoremTitle,
    LoremText,
    PasswordHash,
    Enum,
    Integer,
    Decimal,
    Date,
    DateTime,
    Time,
}

/// Classify a column by name and type metadata.
///
/// Pure and deterministic: identical input always yields the same kind.
/// Name rules run top to bottom with first match wins, and the ordering is
/// part of the contract (specific patterns like `first_name` must win over
/// the bare `name` rule). Columns with no name match fall through to a
/// type-based default.
pub fn classify(column_name: &str, data_type: &str, column_type: &str) -> SemanticKind {
    let name = column_name.to_lowercase();

    if name.contains("email") {
        return SemanticKind::Email;
    }
    if name.contains("first_name") || name.contains("firstname") {
        return SemanticKind::FirstName;
    }
    if name.contains("last_name") || name.contains("lastname") {
        return SemanticKind::LastName;
    }
    if name.contains("name") && name.contains("user") {
        return SemanticKind::FullName;
    }
    if name.contains("name") {
        return SemanticKind::GenericName;
    }
    if name.contains("phone") || name.contains("tel") {
        return SemanticKind::Phone;
    }
    if name.contains("address") {
        return SemanticKind::Address;
    }
    if name.contains("city") {
        return SemanticKind::City;
    }
    if name.contains("state") {
        return SemanticKind::State;
    }
    if name.contains("zip") || name.contains("postal") {
        return SemanticKind::Zipcode;
    }
    if name.contains("company") || name.contains("organization") {
        return SemanticKind::Company;
    }
    if name.contains("url") || name.contains("website") {
        return SemanticKind::Url;
    }
    if name.contains("birth") {
        return SemanticKind::BirthDate;
    }
    if name.contains("description") || name.contains("content") {
        return SemanticKind::LoremParagraph;
    }
    if name.contains("title") {
        return SemanticKind::LoremTitle;
    }
    if name.contains("password") || name.contains("hash") {
        return SemanticKind::PasswordHash;
    }
    if column_type.to_lowercase().contains("enum") {
        return SemanticKind::Enum;
    }

    match data_type.to_lowercase().as_str() {
        "varchar" | "char" | "text" => SemanticKind::LoremText,
        "int" | "bigint" | "smallint" | "tinyint" => SemanticKind::Integer,
        "decimal" | "float" | "double" => SemanticKind::Decimal,
        "date" => SemanticKind::Date,
        "datetime" | "timestamp" => SemanticKind::DateTime,
        "time" => SemanticKind::Time,
        _ => SemanticKind::LoremText,
    }
}
