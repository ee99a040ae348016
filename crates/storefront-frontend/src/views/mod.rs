mod home_page;
mod products_page;

use gpui::{AnyView, AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{
    ActiveTheme, IconName, Root, Side, StyledExt,
    sidebar::{Sidebar, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuItem},
};

use crate::{
    entities::DataEntities,
    launch::{LaunchRoute, Page},
    views::{home_page::HomePage, products_page::ProductsPage},
};

pub struct FrontendUi {
    data: DataEntities,
    active_page: Page,
    active_page_view: AnyView,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, launch: LaunchRoute, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.cart, |_, _, cx| cx.notify()).detach();

        let initial_view = match launch.page {
            Page::Home => cx.new(|cx| HomePage::new(data, cx)).into(),
            Page::Products => cx
                .new(|cx| ProductsPage::new(data, launch.category, cx))
                .into(),
        };
        Self {
            data: data.clone(),
            active_page: launch.page,
            active_page_view: initial_view,
        }
    }

    pub fn change_page(&mut self, page: Page, cx: &mut Context<Self>) {
        if page == self.active_page {
            return;
        }
        let new_page = match page {
            Page::Home => cx.new(|cx| HomePage::new(&self.data, cx)).into(),
            Page::Products => cx
                .new(|cx| ProductsPage::new(&self.data, None, cx))
                .into(),
        };
        self.active_page = page;
        self.active_page_view = new_page;
        cx.notify();
    }
}

impl Render for FrontendUi {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notification_layer = Root::render_notification_layer(window, cx);
        let on_page_change = |page| {
            cx.listener(move |this, _, _, cx| {
                this.change_page(page, cx);
            })
        };
        let cart_count = self.data.cart.read(cx).badge_text();

        div()
            .flex()
            .size_full()
            .child(
                Sidebar::new(Side::Left)
                    .header(
                        SidebarHeader::new().child(
                            div()
                                .w_full()
                                .flex()
                                .items_center()
                                .justify_between()
                                .child("storefront")
                                .child(
                                    div()
                                        .px_2()
                                        .rounded_xl()
                                        .text_sm()
                                        .font_semibold()
                                        .bg(cx.theme().primary)
                                        .text_color(cx.theme().primary_foreground)
                                        .child(format!("Cart {cart_count}")),
                                ),
                        ),
                    )
                    .child(
                        SidebarGroup::new("Navigation").child(
                            SidebarMenu::new()
                                .child(
                                    SidebarMenuItem::new("Home")
                                        .active(self.active_page == Page::Home)
                                        .icon(IconName::LayoutDashboard)
                                        .on_click(on_page_change(Page::Home)),
                                )
                                .child(
                                    SidebarMenuItem::new("Products")
                                        .active(self.active_page == Page::Products)
                                        .icon(IconName::Inbox)
                                        .on_click(on_page_change(Page::Products)),
                                ),
                        ),
                    ),
            )
            .child(div().p_5().size_full().child(self.active_page_view.clone()))
            .child(self.data.modal.clone())
            .children(notification_layer)
    }
}
