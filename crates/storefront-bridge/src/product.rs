//! Product data as returned by the catalog API.
//!
//! Records are immutable once fetched. The backend hands them to the frontend
//! unchanged; the frontend keeps a lookup map for the lifetime of a listing.

use serde::{Deserialize, Serialize};

/// Labels for catalogs that ship numeric category codes instead of names.
const CATEGORY_LABELS: [(u32, &str); 4] = [
    (1, "electronics"),
    (2, "jewelery"),
    (3, "men's clothing"),
    (4, "women's clothing"),
];

/// Aggregated customer rating of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Rating {
    /// Average rating in the `0.0..=5.0` range.
    pub rate: f64,
    /// Number of ratings the average is computed from.
    pub count: u64,
}

/// Category a product belongs to.
///
/// The catalog identifies categories by name (`"electronics"`), which is
/// the authoritative form used for filtering. Some catalog deployments send a
/// small numeric code instead; those are mapped to the same names on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "RawCategory", into = "String")]
pub struct Category(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Name(String),
    Code(u32),
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Maps a numeric category code to its name.
    pub fn from_code(code: u32) -> Self {
        match CATEGORY_LABELS.iter().find(|(known, _)| *known == code) {
            Some((_, label)) => Self((*label).to_owned()),
            None => Self(format!("category {code}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        match raw {
            RawCategory::Name(name) => Self(name),
            RawCategory::Code(code) => Self::from_code(code),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// A single product from the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductRecord {
    /// Unique identifier assigned by the catalog.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Price in the catalog's currency, never negative.
    pub price: f64,
    /// URI of the product image.
    pub image: String,
    pub category: Category,
    /// Customer rating, absent for unrated products.
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl ProductRecord {
    /// Average rating, `0.0` when the product has no rating.
    pub fn rate(&self) -> f64 {
        self.rating.map(|rating| rating.rate).unwrap_or(0.0)
    }

    /// Number of ratings, `0` when the product has no rating.
    pub fn rating_count(&self) -> u64 {
        self.rating.map(|rating| rating.count).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_product() {
        let product: ProductRecord = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Fjallraven Backpack",
                "price": 109.95,
                "description": "Your perfect pack for everyday use",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg",
                "rating": { "rate": 3.9, "count": 120 }
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.category.as_str(), "men's clothing");
        assert_eq!(product.rate(), 3.9);
        assert_eq!(product.rating_count(), 120);
    }

    #[test]
    fn missing_rating_counts_as_zero() {
        let product: ProductRecord = serde_json::from_str(
            r#"{"id": 7, "title": "t", "price": 1.0, "description": "d",
                "category": "electronics", "image": "i"}"#,
        )
        .unwrap();

        assert_eq!(product.rating, None);
        assert_eq!(product.rate(), 0.0);
        assert_eq!(product.rating_count(), 0);
    }

    #[test]
    fn numeric_category_codes_map_to_names() {
        let product: ProductRecord = serde_json::from_str(
            r#"{"id": 2, "title": "t", "price": 1.0, "description": "d",
                "category": 2, "image": "i"}"#,
        )
        .unwrap();
        assert_eq!(product.category, Category::new("jewelery"));
        assert_eq!(Category::from_code(42).as_str(), "category 42");
    }

    #[test]
    fn category_serializes_as_plain_name() {
        let json = serde_json::to_string(&Category::new("electronics")).unwrap();
        assert_eq!(json, r#""electronics""#);
    }
}
