use gpui::{
    Context, ElementId, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div,
};
use gpui_component::{
    Sizable, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::{
    BackendBridge,
    components::product_grid::ProductGrid,
    entities::{DataEntities, catalog_entity::CatalogEntity},
    listing::{CategoryFilter, ListingOptions},
};

/// The full catalog with the category bar.
pub struct ProductsPage {
    data: DataEntities,
}

impl ProductsPage {
    /// Creates the page, loading the products of `category` (all products
    /// when `None`) and preselecting it once the category list arrives.
    pub fn new(data: &DataEntities, category: Option<String>, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.catalog, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.categories, |_, _, cx| cx.notify()).detach();

        data.categories.update(cx, |this, cx| {
            this.filter = CategoryFilter::with_preselect(category.clone());
            cx.notify();
        });
        CatalogEntity::request(&data.catalog, category, ListingOptions::catalog(), cx);

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_categories().await;
        })
        .detach();

        Self { data: data.clone() }
    }

    fn select_category(&mut self, category: Option<String>, cx: &mut Context<Self>) {
        self.data.categories.update(cx, |this, cx| {
            this.filter.select(category.clone());
            cx.notify();
        });
        CatalogEntity::request(&self.data.catalog, category, ListingOptions::catalog(), cx);
    }

    fn category_button(
        &self,
        id: ElementId,
        label: String,
        category: Option<String>,
        active: bool,
        cx: &mut Context<Self>,
    ) -> Button {
        let button = Button::new(id).small().label(label);
        let button = if active {
            button.primary()
        } else {
            button.outline()
        };
        button.on_click(cx.listener(move |this, _, _, cx| {
            this.select_category(category.clone(), cx);
        }))
    }
}

impl Render for ProductsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let filter = self.data.categories.read(cx).filter.clone();

        let all_button = self.category_button(
            "category-all".into(),
            "All".to_owned(),
            None,
            filter.is_active(None),
            cx,
        );
        let category_buttons: Vec<Button> = filter
            .categories()
            .iter()
            .enumerate()
            .map(|(index, name)| {
                self.category_button(
                    ElementId::Name(format!("category-{index}").into()),
                    name.clone(),
                    Some(name.clone()),
                    filter.is_active(Some(name)),
                    cx,
                )
            })
            .collect();

        div()
            .id("products-page")
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .overflow_y_scroll()
            .child(div().child("Products").text_2xl().font_bold())
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_2()
                    .child(all_button)
                    .children(category_buttons),
            )
            .child(ProductGrid::new(&self.data))
    }
}
