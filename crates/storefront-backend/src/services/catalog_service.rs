//! Handlers for catalog requests.
//!
//! Every fetch runs in its own task so a slow catalog never holds up the
//! dispatch loop (cart updates keep flowing while products load).

use storefront_bridge::{MessageFromBackend, notification::NotificationMessage};
use storefront_catalog::{CatalogClient, CatalogError};

async fn catalog_client(context: &super::AppContextHandle) -> CatalogClient {
    let state = context.state.read().await;
    state.catalog.clone()
}

/// Handles an incoming products request (see
/// [`storefront_bridge::MessageToBackend::ProductsRequest`]).
pub async fn handle_products_request(context: super::AppContextHandle, category: Option<String>) {
    let catalog = catalog_client(&context).await;

    tokio::spawn(async move {
        let result = match category.as_deref() {
            Some(name) => catalog.fetch_by_category(name).await,
            None => catalog.fetch_all().await,
        };

        let message = match result {
            Ok(products) => {
                log::info!(
                    "Loaded {} products (category: {category:?})",
                    products.len()
                );
                MessageFromBackend::ProductsResponse { category, products }
            }
            Err(e) => {
                log::error!("Error loading products (category: {category:?}): {e}");
                MessageFromBackend::ProductsFailed {
                    category,
                    reason: e.to_string(),
                }
            }
        };
        context.send(message).await;
    });
}

/// Handles an incoming categories request (see
/// [`storefront_bridge::MessageToBackend::CategoriesRequest`]). On failure an
/// empty list is sent, which leaves only the "All" filter.
pub async fn handle_categories_request(context: super::AppContextHandle) {
    let catalog = catalog_client(&context).await;

    tokio::spawn(async move {
        let categories = match catalog.fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                log::error!("Error loading categories: {e}");
                Vec::new()
            }
        };
        context
            .send(MessageFromBackend::CategoriesResponse(categories))
            .await;
    });
}

/// Handles a single product request (see
/// [`storefront_bridge::MessageToBackend::ProductRequest`]). Nothing is sent
/// back on failure apart from a notification, so the modal stays closed.
pub async fn handle_product_request(context: super::AppContextHandle, id: u64) {
    let catalog = catalog_client(&context).await;

    tokio::spawn(async move {
        match catalog.fetch_by_id(id).await {
            Ok(product) => {
                context
                    .send(MessageFromBackend::ProductResponse(product))
                    .await
            }
            Err(e @ CatalogError::NotFound { .. }) => {
                log::warn!("Error fetching product by id: {e}");
                context
                    .notify(NotificationMessage::warning(format!(
                        "Product {id} was not found."
                    )))
                    .await;
            }
            Err(e) => {
                log::error!("Error fetching product by id {id}: {e}");
                context
                    .notify(NotificationMessage::error(format!(
                        "Could not load product {id}."
                    )))
                    .await;
            }
        }
    });
}
