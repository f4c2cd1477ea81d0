use std::collections::HashMap;

use crate::error::QueryError;
use crate::models::{ProductId, ProductQuery};

/// Collapse decoded query-string pairs into a map, keeping the first value
/// of a repeated key.
pub fn first_values<I>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut params = HashMap::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

/// Turn raw query-string parameters into a [`ProductQuery`].
///
/// A missing or empty `id` yields the match-all query. Anything else must be a
/// base-10 integer (an optional sign is accepted).
pub fn parse_product_query(params: &HashMap<String, String>) -> Result<ProductQuery, QueryError> {
    match params.get("id").map(String::as_str) {
        None | Some("") => Ok(ProductQuery::all()),
        Some(raw) => raw
            .parse::<ProductId>()
            .map(ProductQuery::by_id)
            .map_err(|_| QueryError::InvalidId),
    }
}
