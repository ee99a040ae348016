//! Message types exchanged between the storefront window and its backend.
//!
//! The window never talks to the network or the disk itself. It sends a
//! [`MessageToBackend`] and later receives the matching [`MessageFromBackend`]
//! through the channels in [`BridgeChannels`]. Responses carry enough context
//! (e.g. the requested category) for the window to match them to the request
//! that is still current.

pub mod config;
pub mod notification;
pub mod product;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are sent in response to frontend requests. Failures that the user
/// should see are either carried by a dedicated variant (so the view can
/// degrade in place) or pushed as a notification.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// Products listing for the requested category (`None` is the full
    /// catalog).
    ProductsResponse {
        category: Option<String>,
        products: Vec<product::ProductRecord>,
    },
    /// The products listing for the requested category could not be loaded.
    ProductsFailed {
        category: Option<String>,
        reason: String,
    },
    /// Distinct category names known to the catalog.
    CategoriesResponse(Vec<String>),
    /// A single product, requested by id (deep link).
    ProductResponse(product::ProductRecord),
    /// Current number of items in the cart.
    CartCountUpdate(u64),
}

/// Commands issued by the frontend to control or query the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request for the product listing, optionally filtered by category name.
    ProductsRequest { category: Option<String> },
    /// Request for the list of category names.
    CategoriesRequest,
    /// Request for a single product by its catalog id.
    ProductRequest(u64),
    /// Request for the persisted cart count.
    CartCountRequest,
    /// Add one item of the given product to the cart.
    AddToCartRequest(u64),
}

/// Both directions of the bridge. The `frontend_*` ends go to the window,
/// the `backend_*` ends to the backend thread.
pub struct BridgeChannels {
    pub frontend_rx: Receiver<MessageFromBackend>,
    pub frontend_tx: Sender<MessageToBackend>,
    pub backend_rx: Receiver<MessageToBackend>,
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Channels holding at most `buffer` pending messages per direction.
    pub fn new(buffer: usize) -> Self {
        let (frontend_tx, backend_rx) = mpsc::channel(buffer);
        let (backend_tx, frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_rx,
            frontend_tx,
            backend_rx,
            backend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_are_cross_connected() {
        let mut channels = BridgeChannels::new(1);

        channels
            .frontend_tx
            .try_send(MessageToBackend::AddToCartRequest(7))
            .unwrap();
        assert!(matches!(
            channels.backend_rx.try_recv(),
            Ok(MessageToBackend::AddToCartRequest(7))
        ));

        channels
            .backend_tx
            .try_send(MessageFromBackend::CartCountUpdate(1))
            .unwrap();
        assert!(matches!(
            channels.frontend_rx.try_recv(),
            Ok(MessageFromBackend::CartCountUpdate(1))
        ));
    }
}
