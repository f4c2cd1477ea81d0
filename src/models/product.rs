use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

use crate::error::SeedError;

pub type ProductId = i64;

/// Core product entity. The identity lives on `id`; everything else is
/// grouped in [`ProductAttributes`] and flattened on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: ProductAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub description: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub seller_id: i64,
}

impl Product {
    pub fn new(id: ProductId, description: impl Into<String>, price: f64, seller_id: i64) -> Self {
        Self {
            id,
            attributes: ProductAttributes {
                description: description.into(),
                price,
                seller_id,
            },
        }
    }
}

/// Whole prices go out as integers (`10`, not `10.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Products matching a query, keyed by id. Ordered so responses are stable.
pub type ResultSet = BTreeMap<ProductId, Product>;

// ── Table ─────────────────────────────────────────────────────────────────────

/// Immutable id → product mapping. Every key equals the `id` of its value.
#[derive(Debug, Clone, Default)]
pub struct ProductTable {
    rows: HashMap<ProductId, Product>,
}

impl ProductTable {
    /// Build the table from a seed list, rejecting anything that would break
    /// the keying invariant or carry an impossible price.
    pub fn from_products<I>(products: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut rows = HashMap::new();

        for product in products {
            if product.id <= 0 {
                return Err(SeedError::InvalidId(product.id));
            }
            let price = product.attributes.price;
            if !price.is_finite() || price < 0.0 {
                return Err(SeedError::InvalidPrice { id: product.id, price });
            }
            if rows.contains_key(&product.id) {
                return Err(SeedError::DuplicateId(product.id));
            }
            rows.insert(product.id, product);
        }

        Ok(Self { rows })
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.rows.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ── Query ─────────────────────────────────────────────────────────────────────

/// Filter for a product search. `id == None` matches every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductQuery {
    pub id: Option<ProductId>,
}

impl ProductQuery {
    pub fn all() -> Self {
        Self::default()
    }

    /// Zero is the "unset" value and widens the query back to match-all.
    pub fn by_id(id: ProductId) -> Self {
        Self {
            id: (id != 0).then_some(id),
        }
    }
}
