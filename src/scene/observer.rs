use crate::progress::direction::NavVisibility;

/// Receives scroll-direction notifications from a [`crate::SceneDirector`].
pub trait ScrollObserver {
    /// Called when the nav bar should show or hide.
    fn on_nav_visibility(&mut self, event: &NavVisibility);
}

/// Adapts a closure into a [`ScrollObserver`].
pub struct FnObserver<F>(pub F);

impl<F> ScrollObserver for FnObserver<F>
where
    F: FnMut(&NavVisibility),
{
    fn on_nav_visibility(&mut self, event: &NavVisibility) {
        (self.0)(event)
    }
}
