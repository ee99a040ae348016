use gpui::{
    Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div,
};
use gpui_component::StyledExt;

use crate::{
    components::product_grid::ProductGrid,
    entities::{DataEntities, catalog_entity::CatalogEntity, settings_entity::SettingsEntity},
    listing::ListingOptions,
};

/// Landing page: the top-rated products of the whole catalog.
pub struct HomePage {
    data: DataEntities,
    trending_limit: usize,
}

impl HomePage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.catalog, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.settings, |this: &mut Self, settings: Entity<SettingsEntity>, cx| {
            let limit = settings.read(cx).config.storefront.trending_limit;
            if limit != this.trending_limit {
                this.trending_limit = limit;
                this.load(cx);
            }
        })
        .detach();

        let mut page = Self {
            data: data.clone(),
            trending_limit: data.settings.read(cx).config.storefront.trending_limit,
        };
        page.load(cx);
        page
    }

    fn load(&mut self, cx: &mut Context<Self>) {
        CatalogEntity::request(
            &self.data.catalog,
            None,
            ListingOptions::trending(self.trending_limit),
            cx,
        );
    }
}

impl Render for HomePage {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("home-page")
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .overflow_y_scroll()
            .child(div().child("Trending products").text_2xl().font_bold())
            .child(ProductGrid::new(&self.data))
    }
}
