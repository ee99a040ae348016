use gpui::{App, IntoElement, ParentElement, Styled, Window, div, prelude::FluentBuilder};
use gpui_component::ActiveTheme;

use crate::{
    BackendBridge,
    components::product_card::ProductCard,
    entities::DataEntities,
    listing::{LOAD_ERROR_MESSAGE, ListingState},
};

/// The products container: one card per product of the current listing, or
/// the loading / error state in place of the cards.
#[derive(IntoElement)]
pub struct ProductGrid {
    data: DataEntities,
}

impl ProductGrid {
    pub fn new(data: &DataEntities) -> Self {
        Self { data: data.clone() }
    }
}

impl gpui::RenderOnce for ProductGrid {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let (cards, status, failed) = match &self.data.catalog.read(cx).state {
            ListingState::Loading => (Vec::new(), Some("Loading products..."), false),
            ListingState::Ready(listing) if listing.is_empty() => {
                (Vec::new(), Some("No products in this category."), false)
            }
            ListingState::Ready(listing) => (listing.cards().to_vec(), None, false),
            ListingState::Failed(_) => (Vec::new(), None, true),
        };

        let cards = cards.into_iter().map(|card| {
            let id = card.id;
            let catalog = self.data.catalog.clone();
            let modal = self.data.modal.clone();
            ProductCard::new(card)
                .on_details(move |_, _, cx| {
                    let product = catalog.read(cx).product(id).cloned();
                    match product {
                        Some(product) => modal.update(cx, |modal, cx| modal.open(product, cx)),
                        None => log::warn!("Product {id} is not part of the current listing"),
                    }
                })
                .on_add(move |_, _, cx| {
                    let bridge = cx.global::<BackendBridge>().clone();
                    cx.spawn(async move |_| {
                        bridge.add_to_cart(id).await;
                    })
                    .detach();
                })
        });

        div()
            .w_full()
            .flex()
            .flex_wrap()
            .gap_4()
            .when(failed, |this| {
                this.child(
                    div()
                        .w_full()
                        .text_center()
                        .text_color(cx.theme().danger)
                        .child(LOAD_ERROR_MESSAGE),
                )
            })
            .when_some(status, |this, status| {
                this.child(
                    div()
                        .w_full()
                        .text_center()
                        .text_color(cx.theme().muted_foreground)
                        .child(status),
                )
            })
            .children(cards)
    }
}
