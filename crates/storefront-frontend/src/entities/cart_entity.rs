use gpui::{AppContext, Entity};

/// Cart count shown in the badge. The backend owns the persisted value; this
/// entity mirrors the last count it reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartEntity {
    pub count: u64,
}

impl CartEntity {
    /// Refreshes the badge with a count reported by the backend.
    pub fn update<C: AppContext>(entity: &Entity<Self>, count: u64, cx: &mut C) {
        let _ = entity.update(cx, |this, cx| {
            this.count = count;
            cx.notify();
        });
    }

    pub fn badge_text(&self) -> String {
        self.count.to_string()
    }
}
