//! The product details modal.
//!
//! Dismiss listeners are [`Subscription`]s owned by the [`ModalController`]:
//! the Escape key observer is a keystroke subscription, the overlay click
//! handler is only rendered while its subscription is held.

use gpui::{
    AnyElement, App, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window, div, hsla, img, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};
use storefront_bridge::product::ProductRecord;

use crate::{
    BackendBridge,
    formatting::{format_price, format_rating_summary},
    modal::{DismissListener, DismissTrigger, ModalController},
};

#[derive(Default)]
pub struct ProductModal {
    controller: ModalController<Subscription>,
}

impl ProductModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `product`, replacing whatever the modal currently shows.
    pub fn open(&mut self, product: ProductRecord, cx: &mut Context<Self>) {
        let this = cx.entity().downgrade();
        self.controller.open(product, |listener| match listener {
            DismissListener::EscapeKey => {
                let this = this.clone();
                App::observe_keystrokes(cx, move |event, _, cx| {
                    if event.keystroke.key == "escape" {
                        let _ = this.update(cx, |modal, cx| {
                            modal.dismiss(DismissTrigger::EscapeKey, cx);
                        });
                    }
                })
            }
            DismissListener::OverlayClick => {
                Subscription::new(|| log::trace!("Overlay click listener released"))
            }
        });
        cx.notify();
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger, cx: &mut Context<Self>) {
        if self.controller.dismiss(trigger) {
            cx.notify();
        }
    }

    /// Adds the shown product to the cart, then closes the modal.
    fn add_to_cart(&mut self, cx: &mut Context<Self>) {
        let Some(product_id) = self.controller.current_product().map(|product| product.id) else {
            return;
        };

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.add_to_cart(product_id).await;
        })
        .detach();

        if self.controller.close() {
            cx.notify();
        }
    }

    fn render_dialog(&self, product: &ProductRecord, cx: &mut Context<Self>) -> AnyElement {
        div()
            .w(px(640.))
            .p_6()
            .flex()
            .gap_6()
            .rounded_xl()
            .bg(cx.theme().background)
            .border_1()
            .border_color(cx.theme().border)
            .shadow_lg()
            .child(
                div()
                    .w(px(240.))
                    .h(px(240.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(img(SharedString::from(product.image.clone())).h(px(220.))),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .flex()
                            .items_start()
                            .justify_between()
                            .gap_2()
                            .child(div().text_xl().font_bold().child(product.title.clone()))
                            .child(
                                Button::new("modal-close")
                                    .icon(IconName::Close)
                                    .ghost()
                                    .small()
                                    .on_click(cx.listener(|this, _, _, cx| {
                                        this.dismiss(DismissTrigger::CloseButton, cx);
                                    })),
                            ),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(product.description.clone()),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(IconName::Star)
                            .child(format_rating_summary(product.rate(), product.rating_count())),
                    )
                    .child(div().text_2xl().font_bold().child(format_price(product.price)))
                    .child(
                        Button::new("modal-add")
                            .primary()
                            .icon(IconName::Plus)
                            .label("Add to cart")
                            .on_click(cx.listener(|this, _, _, cx| this.add_to_cart(cx))),
                    ),
            )
            .into_any_element()
    }
}

impl Render for ProductModal {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(product) = self.controller.current_product().cloned() else {
            return div().into_any_element();
        };
        let overlay_armed = self.controller.is_listening(DismissListener::OverlayClick);

        div()
            .id("product-modal-overlay")
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .bg(hsla(0., 0., 0., 0.5))
            .occlude()
            .child(
                div()
                    .id("product-modal")
                    .when(overlay_armed, |this| {
                        this.on_mouse_down_out(cx.listener(|this, _, _, cx| {
                            this.dismiss(DismissTrigger::OverlayClick, cx);
                        }))
                    })
                    .child(self.render_dialog(&product, cx)),
            )
            .into_any_element()
    }
}
