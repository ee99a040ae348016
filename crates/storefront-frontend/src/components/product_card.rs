use gpui::{
    App, ClickEvent, ElementId, IntoElement, ParentElement, SharedString, Styled, Window, div,
    img, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::listing::Card;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A single product card with "Details" and "Add" controls.
#[derive(IntoElement)]
pub struct ProductCard {
    card: Card,
    on_details: Option<ClickHandler>,
    on_add: Option<ClickHandler>,
}

impl ProductCard {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            on_details: None,
            on_add: None,
        }
    }

    pub fn on_details(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_details = Some(Box::new(handler));
        self
    }

    pub fn on_add(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_add = Some(Box::new(handler));
        self
    }
}

impl gpui::RenderOnce for ProductCard {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let card = self.card;
        let details_id = ElementId::Name(format!("details-{}", card.id).into());
        let add_id = ElementId::Name(format!("add-{}", card.id).into());

        div()
            .w(px(260.))
            .p_4()
            .flex()
            .flex_col()
            .gap_2()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .shadow_md()
            .child(
                div()
                    .h(px(180.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_lg()
                    .bg(cx.theme().muted)
                    .overflow_hidden()
                    .child(img(SharedString::from(card.image)).h(px(150.))),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_xl()
                            .text_xs()
                            .font_semibold()
                            .text_color(cx.theme().primary)
                            .child(card.category_label),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .text_sm()
                            .font_semibold()
                            .child(IconName::Star)
                            .child(card.rating_text),
                    ),
            )
            .child(div().font_semibold().line_clamp(2).child(card.title))
            .child(div().text_lg().font_bold().child(card.price_text))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap_3()
                    .child(
                        Button::new(details_id)
                            .outline()
                            .small()
                            .icon(IconName::Info)
                            .label("Details")
                            .flex_1()
                            .when_some(self.on_details, |this, handler| this.on_click(handler)),
                    )
                    .child(
                        Button::new(add_id)
                            .primary()
                            .small()
                            .icon(IconName::Plus)
                            .label("Add")
                            .when_some(self.on_add, |this, handler| this.on_click(handler)),
                    ),
            )
    }
}
