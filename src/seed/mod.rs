use std::path::Path;

use tracing::info;

use crate::error::SeedError;
use crate::models::{Product, ProductTable};

/// Number of products in the built-in catalog.
pub const DEFAULT_PRODUCT_COUNT: i64 = 5;

/// Built-in catalog: `product N`, priced `10 * N`, sold by seller `N`.
pub fn default_products() -> Vec<Product> {
    (1..=DEFAULT_PRODUCT_COUNT)
        .map(|n| Product::new(n, format!("product {}", n), 10.0 * n as f64, n))
        .collect()
}

/// Read a JSON array of products from `path`.
pub fn load_products(path: &Path) -> Result<Vec<Product>, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), count = products.len(), "Loaded seed file");
    Ok(products)
}

/// Build the product table from `seed_file` when given, else the built-in catalog.
pub fn build_table(seed_file: Option<&Path>) -> Result<ProductTable, SeedError> {
    let products = match seed_file {
        Some(path) => load_products(path)?,
        None => default_products(),
    };
    let table = ProductTable::from_products(products)?;
    info!("Seeded product table with {} products", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("product-catalog-{}-{}.json", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn default_catalog_has_five_products() {
        let table = build_table(None).unwrap();
        assert_eq!(table.len(), 5);

        let third = table.get(3).unwrap();
        assert_eq!(third.attributes.description, "product 3");
        assert_eq!(third.attributes.price, 30.0);
        assert_eq!(third.attributes.seller_id, 3);
    }

    #[test]
    fn loads_products_from_json_file() {
        let path = temp_file(
            "ok",
            r#"[{"id": 10, "description": "lamp", "price": 12.5, "seller_id": 4},
                {"id": 11, "description": "desk", "price": 80, "seller_id": 4}]"#,
        );
        let table = build_table(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(11).unwrap().attributes.price, 80.0);
    }

    #[test]
    fn seed_file_with_duplicates_is_rejected() {
        let path = temp_file(
            "dup",
            r#"[{"id": 1, "description": "a", "price": 1, "seller_id": 1},
                {"id": 1, "description": "b", "price": 2, "seller_id": 1}]"#,
        );
        let err = build_table(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, SeedError::DuplicateId(1)));
    }

    #[test]
    fn malformed_seed_file_is_a_parse_error() {
        let path = temp_file("bad", "{not json");
        let err = build_table(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn missing_seed_file_is_an_io_error() {
        let err = build_table(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }
}
