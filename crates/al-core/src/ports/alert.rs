use crate::signup::Alert;

/// User notification surface. Fire-and-forget.
pub trait AlertPort: Send + Sync {
    fn show(&self, alert: &Alert);
}
