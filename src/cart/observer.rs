//! Cart Observer

/// Receives the number of cart line items whenever it changes.
///
/// The count is the number of distinct line items, not the sum of their
/// quantities, which is what the cart badge shows.
pub trait CartObserver {
    /// Called after a persisted mutation changed the number of line items.
    fn on_count_changed(&mut self, count: usize);
}

impl<O: CartObserver + ?Sized> CartObserver for &mut O {
    fn on_count_changed(&mut self, count: usize) {
        (**self).on_count_changed(count);
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn on_count_changed(&mut self, _count: usize) {}
}
