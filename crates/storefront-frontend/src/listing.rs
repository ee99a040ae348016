//! Product listings and category filtering.
//!
//! A [`Listing`] is what a page renders: the ordered cards plus a lookup map
//! from product id to the full record, used when a card's "Details" control
//! is clicked. Every new listing replaces the previous one as a whole.

use std::collections::HashMap;

use storefront_bridge::product::ProductRecord;

use crate::formatting::{format_price, format_rating};

/// Text shown in place of the cards when the catalog could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading products. Please try again later.";

/// How a list of products is turned into cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Maximum number of cards, applied after sorting.
    pub limit: Option<usize>,
    /// Sort by descending rating before applying the limit.
    pub sort_by_rating: bool,
}

impl ListingOptions {
    /// The top `limit` products by rating.
    pub fn trending(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            sort_by_rating: true,
        }
    }

    /// Every product, in catalog order.
    pub fn catalog() -> Self {
        Self::default()
    }
}

/// Display data of a single product card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u64,
    pub image: String,
    pub title: String,
    pub category_label: String,
    pub rating_text: String,
    pub price_text: String,
}

impl Card {
    pub fn from_product(product: &ProductRecord) -> Self {
        Self {
            id: product.id,
            image: product.image.clone(),
            title: product.title.clone(),
            category_label: product.category.to_string(),
            rating_text: format_rating(product.rate()),
            price_text: format_price(product.price),
        }
    }
}

/// The cards of one rendered product list and the records behind them.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    cards: Vec<Card>,
    products: HashMap<u64, ProductRecord>,
}

impl Listing {
    /// Builds a listing. With `sort_by_rating` the products are ordered by
    /// descending rating (a missing rating counts as 0), keeping catalog order
    /// between equal ratings; `limit` then keeps the first N.
    pub fn build(mut products: Vec<ProductRecord>, options: ListingOptions) -> Self {
        if options.sort_by_rating {
            // `sort_by` is stable, ties keep their catalog order
            products.sort_by(|a, b| b.rate().total_cmp(&a.rate()));
        }
        if let Some(limit) = options.limit {
            products.truncate(limit);
        }

        let cards = products.iter().map(Card::from_product).collect();
        let products = products
            .into_iter()
            .map(|product| (product.id, product))
            .collect();
        Self { cards, products }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Looks up the full record behind a card.
    pub fn product(&self, id: u64) -> Option<&ProductRecord> {
        self.products.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// What the products container currently shows.
#[derive(Debug, Clone, Default)]
pub enum ListingState {
    #[default]
    Loading,
    Ready(Listing),
    /// The fetch failed; the reason is only logged, the user sees
    /// [`LOAD_ERROR_MESSAGE`].
    Failed(String),
}

impl ListingState {
    pub fn listing(&self) -> Option<&Listing> {
        match self {
            Self::Ready(listing) => Some(listing),
            _ => None,
        }
    }
}

/// The category bar: "All" plus one entry per category, exactly one active.
///
/// `None` stands for "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: Vec<String>,
    active: Option<String>,
    pending: Option<String>,
}

impl CategoryFilter {
    /// A filter that will select `category` as soon as the category list is
    /// known. The match is case-insensitive.
    pub fn with_preselect(category: Option<String>) -> Self {
        Self {
            pending: category,
            ..Self::default()
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, category: Option<&str>) -> bool {
        self.active.as_deref() == category
    }

    /// Replaces the known categories and applies a pending preselection.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
        if let Some(pending) = self.pending.take() {
            if !self.preselect(&pending) {
                log::warn!("Unknown category {pending:?}, showing all products");
            }
        }
    }

    /// Activates the entry whose name matches `name` ignoring case. Returns
    /// `false`, leaving the selection unchanged, if there is none.
    pub fn preselect(&mut self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        match self
            .categories
            .iter()
            .find(|category| category.to_lowercase() == needle)
        {
            Some(category) => {
                self.active = Some(category.clone());
                true
            }
            None => false,
        }
    }

    /// Makes `category` the single active entry. An explicit choice wins
    /// over a preselection still waiting for the category list.
    pub fn select(&mut self, category: Option<String>) {
        self.pending = None;
        self.active = category;
    }
}

#[cfg(test)]
mod tests {
    use storefront_bridge::product::{Category, Rating};

    use super::*;

    fn product(id: u64, rate: Option<f64>) -> ProductRecord {
        ProductRecord {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            price: 12.5,
            image: format!("https://img.example/{id}.png"),
            category: Category::new("electronics"),
            rating: rate.map(|rate| Rating { rate, count: 10 }),
        }
    }

    fn ids(listing: &Listing) -> Vec<u64> {
        listing.cards().iter().map(|card| card.id).collect()
    }

    #[test]
    fn trending_keeps_top_rated_in_stable_order() {
        let products = [3.2, 4.8, 1.0, 4.8, 2.5]
            .into_iter()
            .enumerate()
            .map(|(index, rate)| product(index as u64 + 1, Some(rate)))
            .collect();

        let listing = Listing::build(products, ListingOptions::trending(3));
        assert_eq!(ids(&listing), vec![2, 4, 1]);
        assert!(listing.product(3).is_none());
    }

    #[test]
    fn missing_rating_sorts_as_zero() {
        let products = vec![product(1, None), product(2, Some(0.5)), product(3, Some(0.0))];

        let listing = Listing::build(products, ListingOptions::trending(10));
        assert_eq!(ids(&listing), vec![2, 1, 3]);
    }

    #[test]
    fn catalog_listing_keeps_order_and_everything() {
        let products = vec![product(5, Some(1.0)), product(2, Some(5.0)), product(9, None)];

        let listing = Listing::build(products, ListingOptions::catalog());
        assert_eq!(ids(&listing), vec![5, 2, 9]);
        assert_eq!(listing.product(9).map(|p| p.id), Some(9));
    }

    #[test]
    fn limit_without_sorting_truncates() {
        let products = (1..=5).map(|id| product(id, Some(id as f64))).collect();
        let options = ListingOptions {
            limit: Some(2),
            sort_by_rating: false,
        };

        assert_eq!(ids(&Listing::build(products, options)), vec![1, 2]);
    }

    #[test]
    fn empty_products_build_empty_listing() {
        let listing = Listing::build(Vec::new(), ListingOptions::catalog());
        assert!(listing.is_empty());
    }

    #[test]
    fn card_formats_display_fields() {
        let card = Card::from_product(&product(1, Some(4.26)));
        assert_eq!(card.rating_text, "4.3");
        assert_eq!(card.price_text, "$12.50");
        assert_eq!(card.category_label, "electronics");
    }

    #[test]
    fn preselect_matches_case_insensitively() {
        let mut filter = CategoryFilter::with_preselect(Some("Electronics".into()));
        assert!(filter.is_active(None));

        filter.set_categories(vec!["electronics".into(), "jewelery".into()]);
        assert_eq!(filter.active(), Some("electronics"));
        assert!(!filter.is_active(None));
    }

    #[test]
    fn selection_before_categories_drops_the_preselect() {
        let mut filter = CategoryFilter::with_preselect(Some("electronics".into()));
        filter.select(None);

        filter.set_categories(vec!["electronics".into(), "jewelery".into()]);
        assert!(filter.is_active(None));
        assert!(!filter.is_active(Some("electronics")));
    }

    #[test]
    fn unknown_preselect_keeps_all_active() {
        let mut filter = CategoryFilter::with_preselect(Some("garden".into()));
        filter.set_categories(vec!["electronics".into()]);
        assert!(filter.is_active(None));
    }

    #[test]
    fn select_keeps_a_single_active_entry() {
        let mut filter = CategoryFilter::default();
        filter.set_categories(vec!["electronics".into(), "jewelery".into()]);

        filter.select(Some("jewelery".into()));
        assert!(filter.is_active(Some("jewelery")));
        assert!(!filter.is_active(Some("electronics")));

        filter.select(None);
        assert!(filter.is_active(None));
        assert!(!filter.is_active(Some("jewelery")));
    }
}
