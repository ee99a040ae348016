use std::sync::PoisonError;

use storefront_bridge::{MessageFromBackend, notification::NotificationMessage};

use crate::cart::CartState;

/// Runs `f` on the cart in the blocking pool, since the file store reads and
/// writes synchronously. The mutex keeps read-modify-write cycles from
/// interleaving.
async fn with_cart<T, F>(context: &super::AppContextHandle, f: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce(&mut CartState) -> T + Send + 'static,
{
    let cart = context.state.read().await.cart.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut cart = cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    })
    .await;

    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Cart task failed: {e}");
            None
        }
    }
}

/// Handles an incoming cart count request (see
/// [`storefront_bridge::MessageToBackend::CartCountRequest`]).
pub async fn handle_cart_count_request(context: super::AppContextHandle) {
    if let Some(count) = with_cart(&context, |cart| cart.current_count()).await {
        context.send(MessageFromBackend::CartCountUpdate(count)).await;
    }
}

/// Handles an add-to-cart request (see
/// [`storefront_bridge::MessageToBackend::AddToCartRequest`]).
pub async fn handle_add_to_cart_request(context: super::AppContextHandle, product_id: u64) {
    let Some(result) = with_cart(&context, CartState::increment).await else {
        return;
    };

    match result {
        Ok(count) => {
            log::info!("Added product {product_id} to cart ({count} items)");
            context.send(MessageFromBackend::CartCountUpdate(count)).await;
        }
        Err(e) => {
            log::error!("Failed to add product {product_id} to cart: {e}");
            context
                .notify(NotificationMessage::error(format!(
                    "Could not update the cart: {e}"
                )))
                .await;
        }
    }
}
