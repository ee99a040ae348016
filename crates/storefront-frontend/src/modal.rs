//! State machine of the product details modal.
//!
//! The modal is either closed or open with exactly one product. While it is
//! open it holds one guard per [`DismissListener`]; dropping a guard detaches
//! its listener. The guards live inside the open state, so every transition
//! out of it (close, dismiss, re-open with another product, dropping the
//! controller) releases them and a closed modal never has listeners attached.

use storefront_bridge::product::ProductRecord;

/// Whether the modal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Open,
    Closed,
}

/// Listeners that exist only while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissListener {
    /// A click on the dimmed background around the dialog.
    OverlayClick,
    /// The Escape key, anywhere in the application.
    EscapeKey,
}

impl DismissListener {
    pub const ALL: [DismissListener; 2] = [DismissListener::OverlayClick, DismissListener::EscapeKey];
}

/// What closed the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    OverlayClick,
    EscapeKey,
}

struct OpenState<G> {
    product: ProductRecord,
    listeners: Vec<(DismissListener, G)>,
}

/// Modal controller, generic over the listener guard type `G`.
pub struct ModalController<G> {
    open: Option<OpenState<G>>,
}

impl<G> Default for ModalController<G> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<G> ModalController<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `product`. `attach` is called once per [`DismissListener`] and
    /// returns the guard that keeps the listener alive.
    ///
    /// Opening an already open modal replaces its product: the previous guards
    /// are released before the new ones are attached.
    pub fn open(&mut self, product: ProductRecord, mut attach: impl FnMut(DismissListener) -> G) {
        if self.close() {
            log::debug!("Replacing the product shown in the open modal");
        }

        let listeners = DismissListener::ALL
            .into_iter()
            .map(|listener| (listener, attach(listener)))
            .collect();
        log::debug!("Opening modal for product {}", product.id);
        self.open = Some(OpenState { product, listeners });
    }

    /// Closes the modal and releases its listeners. Returns `false` if it was
    /// already closed, in which case nothing happens.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Closes the modal in response to one of its dismiss controls.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        let closed = self.close();
        if closed {
            log::debug!("Modal dismissed by {trigger:?}");
        }
        closed
    }

    pub fn visibility(&self) -> Visibility {
        match self.open {
            Some(_) => Visibility::Open,
            None => Visibility::Closed,
        }
    }

    pub fn current_product(&self) -> Option<&ProductRecord> {
        self.open.as_ref().map(|open| &open.product)
    }

    /// Listeners currently attached.
    pub fn active_listeners(&self) -> Vec<DismissListener> {
        self.open
            .iter()
            .flat_map(|open| open.listeners.iter().map(|(listener, _)| *listener))
            .collect()
    }

    pub fn is_listening(&self, listener: DismissListener) -> bool {
        self.open
            .as_ref()
            .is_some_and(|open| open.listeners.iter().any(|(attached, _)| *attached == listener))
    }
}
