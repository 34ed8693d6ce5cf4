use crate::signup::Route;

/// Screen navigation. Fire-and-forget: nothing is returned to the caller.
pub trait NavigatorPort: Send + Sync {
    /// Replace the current screen with `route`.
    fn replace(&self, route: Route);

    /// Push `route` on top of the current screen.
    fn push(&self, route: Route);
}
