//! Routing of frontend requests to the service handlers.

use std::sync::Arc;

use storefront_bridge::{MessageFromBackend, MessageToBackend, notification::NotificationMessage};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Everything a handler needs: the state and the way back to the window.
pub(crate) struct AppContext {
    pub state: SharedState,
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
        log::info!("Frontend bridge closed, stopping backend");
    }

    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::ProductsRequest { category } => {
                services::catalog_service::handle_products_request(self.clone(), category).await;
            }
            MessageToBackend::CategoriesRequest => {
                services::catalog_service::handle_categories_request(self.clone()).await;
            }
            MessageToBackend::ProductRequest(id) => {
                services::catalog_service::handle_product_request(self.clone(), id).await;
            }
            MessageToBackend::CartCountRequest => {
                services::cart_service::handle_cart_count_request(self.clone()).await;
            }
            MessageToBackend::AddToCartRequest(product_id) => {
                services::cart_service::handle_add_to_cart_request(self.clone(), product_id).await;
            }
        }
    }

    /// Send a message to the frontend bridge. A closed bridge means the window
    /// is gone, so the message is dropped.
    pub async fn send(&self, message: MessageFromBackend) {
        if let Err(e) = self.tx.send(message).await {
            log::warn!("Dropping message, frontend bridge is closed: {:?}", e.0);
        }
    }

    /// Send a toast to the frontend.
    pub async fn notify(&self, notification: NotificationMessage) {
        self.send(MessageFromBackend::NotificationMessage(notification))
            .await;
    }
}
