use gpui::{App, AppContext, Entity};
use storefront_bridge::product::ProductRecord;

use crate::{
    BackendBridge,
    listing::{Listing, ListingOptions, ListingState},
};

/// The product list shown by the active page.
#[derive(Debug, Clone, Default)]
pub struct CatalogEntity {
    pub state: ListingState,
    requested_category: Option<String>,
    options: ListingOptions,
}

impl CatalogEntity {
    /// Replaces the current list with a loading state and asks the backend for
    /// the products of `category` (`None` for the full catalog).
    pub fn request(
        entity: &Entity<Self>,
        category: Option<String>,
        options: ListingOptions,
        cx: &mut App,
    ) {
        entity.update(cx, |this, cx| {
            this.begin_request(category.clone(), options);
            cx.notify();
        });

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_| {
            bridge.request_products(category).await;
        })
        .detach();
    }

    /// Applies a backend response to the entity and notifies observers if it
    /// changed anything.
    pub fn receive<C: AppContext>(
        entity: &Entity<Self>,
        category: Option<String>,
        result: Result<Vec<ProductRecord>, String>,
        cx: &mut C,
    ) {
        let _ = entity.update(cx, |this, cx| {
            let applied = match result {
                Ok(products) => this.apply_products(category, products),
                Err(reason) => this.apply_failure(category, reason),
            };
            if applied {
                cx.notify();
            }
        });
    }

    fn begin_request(&mut self, category: Option<String>, options: ListingOptions) {
        self.state = ListingState::Loading;
        self.requested_category = category;
        self.options = options;
    }

    /// Replaces the listing with `products`. Responses for a category other
    /// than the last requested one are stale and dropped.
    fn apply_products(&mut self, category: Option<String>, products: Vec<ProductRecord>) -> bool {
        if category != self.requested_category {
            log::debug!("Discarding stale products response for {category:?}");
            return false;
        }
        self.state = ListingState::Ready(Listing::build(products, self.options));
        true
    }

    fn apply_failure(&mut self, category: Option<String>, reason: String) -> bool {
        if category != self.requested_category {
            log::debug!("Discarding stale failure for {category:?}: {reason}");
            return false;
        }
        self.state = ListingState::Failed(reason);
        true
    }

    /// Full record behind a rendered card.
    pub fn product(&self, id: u64) -> Option<&ProductRecord> {
        self.state.listing().and_then(|listing| listing.product(id))
    }
}

#[cfg(test)]
mod tests {
    use storefront_bridge::product::{Category, Rating};

    use super::*;

    fn products(rates: &[f64]) -> Vec<ProductRecord> {
        rates
            .iter()
            .enumerate()
            .map(|(index, rate)| ProductRecord {
                id: index as u64 + 1,
                title: String::new(),
                description: String::new(),
                price: 1.0,
                image: String::new(),
                category: Category::new("electronics"),
                rating: Some(Rating {
                    rate: *rate,
                    count: 1,
                }),
            })
            .collect()
    }

    #[test]
    fn response_is_built_with_requested_options() {
        let mut catalog = CatalogEntity::default();
        catalog.begin_request(None, ListingOptions::trending(3));

        assert!(catalog.apply_products(None, products(&[3.2, 4.8, 1.0, 4.8, 2.5])));
        let ids: Vec<u64> = catalog
            .state
            .listing()
            .unwrap()
            .cards()
            .iter()
            .map(|card| card.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1]);
        assert!(catalog.product(4).is_some());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut catalog = CatalogEntity::default();
        catalog.begin_request(Some("jewelery".into()), ListingOptions::catalog());

        assert!(!catalog.apply_products(Some("electronics".into()), products(&[1.0])));
        assert!(matches!(catalog.state, ListingState::Loading));
    }

    #[test]
    fn empty_category_is_ready_with_no_cards() {
        let mut catalog = CatalogEntity::default();
        catalog.begin_request(Some("electronics".into()), ListingOptions::catalog());

        assert!(catalog.apply_products(Some("electronics".into()), Vec::new()));
        assert!(catalog.state.listing().is_some_and(Listing::is_empty));
    }

    #[test]
    fn failure_replaces_listing() {
        let mut catalog = CatalogEntity::default();
        catalog.begin_request(None, ListingOptions::catalog());
        catalog.apply_products(None, products(&[1.0]));

        catalog.begin_request(None, ListingOptions::catalog());
        assert!(catalog.apply_failure(None, "connection refused".into()));
        assert!(matches!(catalog.state, ListingState::Failed(_)));
        assert!(catalog.product(1).is_none());
    }
}
