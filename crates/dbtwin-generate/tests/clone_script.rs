use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use dbtwin_core::{classify, creation_order, Column, DatabaseSchema, ForeignKey, Table};
use dbtwin_generate::{assemble, GenerateOptions};

fn column(position: u32, name: &str, data_type: &str, column_type: &str) -> Column {
    Column {
        ordinal_position: position,
        name: name.to_string(),
        data_type: data_type.to_string(),
        column_type: column_type.to_string(),
        is_nullable: false,
        default: None,
        character_max_length: None,
        numeric_precision: None,
        numeric_scale: None,
        is_auto_increment: false,
        semantic: classify(name, data_type, column_type),
    }
}

fn pk_column(name: &str) -> Column {
    let mut col = column(1, name, "int", "int unsigned");
    col.is_auto_increment = true;
    col.numeric_precision = Some(10);
    col.numeric_scale = Some(0);
    col
}

fn shop_schema() -> DatabaseSchema {
    let customers = Table {
        name: "customers".to_string(),
        create_statement:
            "CREATE TABLE `customers` (\n  `id` int unsigned NOT NULL AUTO_INCREMENT,\n  `name` varchar(100) NOT NULL,\n  `email` varchar(255) NOT NULL,\n  PRIMARY KEY (`id`)\n)"
                .to_string(),
        columns: vec![
            pk_column("id"),
            {
                let mut c = column(2, "name", "varchar", "varchar(100)");
                c.character_max_length = Some(100);
                c
            },
            {
                let mut c = column(3, "email", "varchar", "varchar(255)");
                c.character_max_length = Some(255);
                c
            },
        ],
        primary_key: vec!["id".to_string()],
        foreign_keys: Vec::new(),
        indexes: Vec::new(),
    };

    let orders = Table {
        name: "orders".to_string(),
        create_statement:
            "CREATE TABLE `orders` (\n  `id` int unsigned NOT NULL AUTO_INCREMENT,\n  `customer_id` int unsigned NOT NULL,\n  `total` decimal(10,2) NOT NULL,\n  `status` enum('new','shipped') NOT NULL,\n  `created_at` datetime NOT NULL,\n  PRIMARY KEY (`id`)\n)"
                .to_string(),
        columns: vec![
            pk_column("id"),
            column(2, "customer_id", "int", "int unsigned"),
            {
                let mut c = column(3, "total", "decimal", "decimal(10,2)");
                c.numeric_precision = Some(10);
                c.numeric_scale = Some(2);
                c
            },
            column(4, "status", "enum", "enum('new','shipped')"),
            column(5, "created_at", "datetime", "datetime"),
        ],
        primary_key: vec!["id".to_string()],
        foreign_keys: vec![ForeignKey {
            name: Some("fk_orders_customer".to_string()),
            column: "customer_id".to_string(),
            referenced_table: "customers".to_string(),
            referenced_column: "id".to_string(),
        }],
        indexes: Vec::new(),
    };

    DatabaseSchema {
        schema_version: dbtwin_core::SCHEMA_VERSION.to_string(),
        engine: "mysql".to_string(),
        database: "shop".to_string(),
        // Alphabetical, as the catalog reader returns them.
        tables: vec![customers, orders],
    }
}

fn options(records: u32) -> GenerateOptions {
    GenerateOptions::new(records, 42, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        .expect("valid options")
}

fn generated_at() -> NaiveDateTime {
    NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    )
}

fn insert_values<'a>(script: &'a str, table: &str) -> Vec<Vec<&'a str>> {
    let prefix = format!("INSERT INTO `{table}` ");
    script
        .lines()
        .filter(|line| line.starts_with(&prefix))
        .map(|line| {
            let start = line.find("VALUES (").expect("values clause") + "VALUES (".len();
            let end = line.rfind(");").expect("statement terminator");
            line[start..end].split(", ").collect()
        })
        .collect()
}

#[test]
fn referenced_table_comes_first_and_fk_values_stay_in_pool() {
    let schema = shop_schema();
    let order = creation_order(&schema.tables);
    assert_eq!(
        order.tables,
        vec!["customers".to_string(), "orders".to_string()]
    );

    let (script, report) = assemble(&schema, &order, &options(10), generated_at());
    assert_eq!(report.tables, 2);
    assert_eq!(report.total_records, 20);

    let rows = insert_values(&script, "orders");
    assert_eq!(rows.len(), 10);
    for row in &rows {
        let customer_id: i64 = row[0].parse().expect("fk literal is an integer");
        assert!(
            (1..=10).contains(&customer_id),
            "customer_id {customer_id} outside generated pool"
        );
    }
}

#[test]
fn auto_increment_columns_are_excluded_from_inserts() {
    let schema = shop_schema();
    let order = creation_order(&schema.tables);
    let (script, _) = assemble(&schema, &order, &options(5), generated_at());

    assert!(script.contains("INSERT INTO `customers` (`name`, `email`) VALUES"));
    assert!(script.contains("INSERT INTO `orders` (`customer_id`, `total`, `status`, `created_at`) VALUES"));
}

#[test]
fn script_wraps_inserts_in_fk_check_toggle() {
    let schema = shop_schema();
    let order = creation_order(&schema.tables);
    let (script, _) = assemble(&schema, &order, &options(3), generated_at());

    let disable = script.find("SET FOREIGN_KEY_CHECKS = 0;").unwrap();
    let enable = script.find("SET FOREIGN_KEY_CHECKS = 1;").unwrap();
    let first_insert = script.find("INSERT INTO").unwrap();
    assert!(disable < first_insert && first_insert < enable);

    let customers_ddl = script.find("DROP TABLE IF EXISTS `customers`;").unwrap();
    let orders_ddl = script.find("DROP TABLE IF EXISTS `orders`;").unwrap();
    assert!(customers_ddl < orders_ddl);

    assert!(script.contains("CREATE DATABASE IF NOT EXISTS `shop_clone`"));
    assert!(script.contains("USE `shop_clone`;"));
}

#[test]
fn decimal_and_enum_values_respect_column_declarations() {
    let schema = shop_schema();
    let order = creation_order(&schema.tables);
    let (script, _) = assemble(&schema, &order, &options(10), generated_at());

    for row in insert_values(&script, "orders") {
        let total = row[1];
        let (_, fraction) = total.split_once('.').expect("decimal fraction");
        assert_eq!(fraction.len(), 2, "total was {total}");

        let status = row[2];
        assert!(
            status == "'new'" || status == "'shipped'",
            "status was {status}"
        );
    }
}

#[test]
fn identical_input_and_seed_produce_identical_scripts() {
    let schema = shop_schema();
    let order = creation_order(&schema.tables);

    let (first, _) = assemble(&schema, &order, &options(10), generated_at());
    let (second, _) = assemble(&schema, &order, &options(10), generated_at());
    assert_eq!(first, second);
}

#[test]
fn cyclic_schemas_still_assemble_with_placeholder_pools() {
    let mut left = Table {
        name: "authors".to_string(),
        create_statement: "CREATE TABLE `authors` (`id` int)".to_string(),
        columns: vec![pk_column("id"), column(2, "favorite_book_id", "int", "int")],
        primary_key: vec!["id".to_string()],
        foreign_keys: vec![ForeignKey {
            name: None,
            column: "favorite_book_id".to_string(),
            referenced_table: "books".to_string(),
            referenced_column: "id".to_string(),
        }],
        indexes: Vec::new(),
    };
    left.columns[1].numeric_precision = Some(10);

    let right = Table {
        name: "books".to_string(),
        create_statement: "CREATE TABLE `books` (`id` int)".to_string(),
        columns: vec![pk_column("id"), column(2, "author_id", "int", "int")],
        primary_key: vec!["id".to_string()],
        foreign_keys: vec![ForeignKey {
            name: None,
            column: "author_id".to_string(),
            referenced_table: "authors".to_string(),
            referenced_column: "id".to_string(),
        }],
        indexes: Vec::new(),
    };

    let schema = DatabaseSchema {
        schema_version: dbtwin_core::SCHEMA_VERSION.to_string(),
        engine: "mysql".to_string(),
        database: "library".to_string(),
        tables: vec![left, right],
    };

    let order = creation_order(&schema.tables);
    assert!(order.has_cycle());
    assert_eq!(
        order.tables,
        vec!["authors".to_string(), "books".to_string()]
    );

    let (script, report) = assemble(&schema, &order, &options(4), generated_at());
    assert_eq!(report.tables, 2);

    // Forward reference: authors generates first, so its book ids come from
    // the synthesized placeholder pool.
    for row in insert_values(&script, "authors") {
        let book_id: i64 = row[0].parse().expect("fk literal");
        assert!((1..=4).contains(&book_id));
    }
    for row in insert_values(&script, "books") {
        let author_id: i64 = row[0].parse().expect("fk literal");
        assert!((1..=4).contains(&author_id));
    }
}
