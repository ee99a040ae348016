//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, perform side effects (network, filesystem), and send results
//! or notifications back to the frontend. Handlers never propagate errors:
//! each one logs the failure and answers with a degraded response.

pub mod cart_service;
pub mod catalog_service;
pub mod config_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use storefront_bridge::{MessageFromBackend, config::Config, notification::Severity};
    use storefront_catalog::CatalogClient;
    use tokio::sync::{RwLock, mpsc};

    use super::*;
    use crate::{
        app::AppContext,
        cart::{CartState, MemoryStore},
        state::State,
    };

    fn context(base_url: &str) -> (AppContextHandle, mpsc::Receiver<MessageFromBackend>) {
        let (tx, rx) = mpsc::channel(16);
        let state = State {
            config: Config::default(),
            catalog: CatalogClient::new(reqwest::Client::new(), base_url).unwrap(),
            cart: Arc::new(Mutex::new(CartState::new(MemoryStore::default()))),
        };
        let context = Arc::new(AppContext {
            state: Arc::new(RwLock::new(state)),
            tx,
        });
        (context, rx)
    }

    /// Address nothing listens on.
    async fn closed_port() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    /// A catalog that answers every path with 404.
    async fn empty_catalog() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, axum::Router::new()).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn failed_products_request_reports_the_category() {
        let (context, mut rx) = context(&closed_port().await);

        catalog_service::handle_products_request(context, Some("electronics".into())).await;

        match rx.recv().await {
            Some(MessageFromBackend::ProductsFailed { category, .. }) => {
                assert_eq!(category.as_deref(), Some("electronics"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_categories_request_sends_empty_list() {
        let (context, mut rx) = context(&empty_catalog().await);

        catalog_service::handle_categories_request(context).await;

        match rx.recv().await {
            Some(MessageFromBackend::CategoriesResponse(categories)) => {
                assert!(categories.is_empty());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_product_warns_and_sends_no_product() {
        let (context, mut rx) = context(&empty_catalog().await);

        catalog_service::handle_product_request(context.clone(), 42).await;

        match rx.recv().await {
            Some(MessageFromBackend::NotificationMessage(notification)) => {
                assert_eq!(notification.severity, Severity::Warning);
                assert!(notification.message.contains("42"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
        drop(context);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn unreachable_catalog_on_product_request_is_an_error() {
        let (context, mut rx) = context(&closed_port().await);

        catalog_service::handle_product_request(context, 1).await;

        match rx.recv().await {
            Some(MessageFromBackend::NotificationMessage(notification)) => {
                assert_eq!(notification.severity, Severity::Error);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn each_add_to_cart_reports_the_new_count() {
        let (context, mut rx) = context(&closed_port().await);

        for expected in 1..=3 {
            cart_service::handle_add_to_cart_request(context.clone(), 7).await;
            assert!(matches!(
                rx.recv().await,
                Some(MessageFromBackend::CartCountUpdate(count)) if count == expected
            ));
        }

        cart_service::handle_cart_count_request(context).await;
        assert!(matches!(
            rx.recv().await,
            Some(MessageFromBackend::CartCountUpdate(3))
        ));
    }

    #[tokio::test]
    async fn config_request_returns_loaded_config() {
        let (context, mut rx) = context(&closed_port().await);

        config_service::handle_config_request(context).await;

        match rx.recv().await {
            Some(MessageFromBackend::ConfigurationResponse(config)) => {
                assert_eq!(config.storefront.trending_limit, 3);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
