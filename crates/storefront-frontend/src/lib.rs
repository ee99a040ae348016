use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::{
    Root, WindowExt,
    notification::{Notification, NotificationType},
};
use storefront_bridge::{MessageFromBackend, MessageToBackend, notification::Severity};
use tokio::sync::mpsc;

use crate::{
    components::product_modal::ProductModal,
    entities::{
        cart_entity::CartEntity, catalog_entity::CatalogEntity,
        categories_entity::CategoriesEntity, settings_entity::SettingsEntity,
    },
    launch::{LaunchRoute, Page},
};

pub mod components;
pub mod entities;
pub mod formatting;
pub mod launch;
pub mod listing;
pub mod modal;
mod views;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    async fn send(&self, message: MessageToBackend) {
        if let Err(e) = self.to_backend.send(message).await {
            log::error!("Backend is gone, dropping request {:?}", e.0);
        }
    }

    pub async fn request_config(&self) {
        self.send(MessageToBackend::ConfigurationRequest).await;
    }

    pub async fn request_products(&self, category: Option<String>) {
        self.send(MessageToBackend::ProductsRequest { category })
            .await;
    }

    pub async fn request_categories(&self) {
        self.send(MessageToBackend::CategoriesRequest).await;
    }

    pub async fn request_product(&self, id: u64) {
        self.send(MessageToBackend::ProductRequest(id)).await;
    }

    pub async fn request_cart_count(&self) {
        self.send(MessageToBackend::CartCountRequest).await;
    }

    pub async fn add_to_cart(&self, product_id: u64) {
        self.send(MessageToBackend::AddToCartRequest(product_id))
            .await;
    }
}

impl Global for BackendBridge {}

pub fn run(
    launch: LaunchRoute,
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let data = entities::DataEntities {
            settings: cx.new(|_| SettingsEntity::default()),
            catalog: cx.new(|_| CatalogEntity::default()),
            categories: cx.new(|_| CategoriesEntity::default()),
            cart: cx.new(|_| CartEntity::default()),
            modal: cx.new(|_| ProductModal::new()),
        };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                let window_handle = window.window_handle();
                cx.spawn(async move |cx| {
                    while let Some(message) = rx.recv().await {
                        log::debug!("Got a message from backend: {message:?}");
                        match message {
                            MessageFromBackend::ConfigurationResponse(config) => {
                                SettingsEntity::update(&listener_data.settings, config, cx)
                            }
                            MessageFromBackend::NotificationMessage(notification) => {
                                let notification_type = match notification.severity {
                                    Severity::Warning => NotificationType::Warning,
                                    Severity::Error => NotificationType::Error,
                                };
                                let result = window_handle.update(cx, |_, window, cx| {
                                    let notification = Notification::new()
                                        .message(notification.message)
                                        .with_type(notification_type);
                                    window.push_notification(notification, cx);
                                });
                                if let Err(e) = result {
                                    log::warn!("Failed to push a notification: {e}");
                                }
                            }
                            MessageFromBackend::ProductsResponse { category, products } => {
                                CatalogEntity::receive(
                                    &listener_data.catalog,
                                    category,
                                    Ok(products),
                                    cx,
                                )
                            }
                            MessageFromBackend::ProductsFailed { category, reason } => {
                                CatalogEntity::receive(
                                    &listener_data.catalog,
                                    category,
                                    Err(reason),
                                    cx,
                                )
                            }
                            MessageFromBackend::CategoriesResponse(categories) => {
                                CategoriesEntity::update(&listener_data.categories, categories, cx)
                            }
                            MessageFromBackend::ProductResponse(product) => {
                                let _ = listener_data.modal.update(cx, |modal, cx| {
                                    modal.open(product, cx);
                                });
                            }
                            MessageFromBackend::CartCountUpdate(count) => {
                                CartEntity::update(&listener_data.cart, count, cx)
                            }
                        }
                    }
                })
                .detach();

                let deep_link = match launch.page {
                    Page::Products => launch.product_id,
                    Page::Home => None,
                };
                cx.spawn(async move |_| {
                    bridge.request_config().await;
                    bridge.request_cart_count().await;
                    if let Some(id) = deep_link {
                        bridge.request_product(id).await;
                    }
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, launch, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
