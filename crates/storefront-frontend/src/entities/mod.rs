use gpui::Entity;

use crate::components::product_modal::ProductModal;

pub mod cart_entity;
pub mod catalog_entity;
pub mod categories_entity;
pub mod settings_entity;

/// Handles to the shared UI state, cloned into every view that needs it.
#[derive(Clone)]
pub struct DataEntities {
    pub settings: Entity<settings_entity::SettingsEntity>,
    pub catalog: Entity<catalog_entity::CatalogEntity>,
    pub categories: Entity<categories_entity::CategoriesEntity>,
    pub cart: Entity<cart_entity::CartEntity>,
    /// The single details modal of the window.
    pub modal: Entity<ProductModal>,
}
