use gpui::{AppContext, Entity};

use crate::listing::CategoryFilter;

#[derive(Debug, Clone, Default)]
pub struct CategoriesEntity {
    pub filter: CategoryFilter,
}

impl CategoriesEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, categories: Vec<String>, cx: &mut C) {
        let _ = entity.update(cx, |this, cx| {
            this.filter.set_categories(categories);
            cx.notify();
        });
    }
}
