/// Blocking user notification (`window.alert` in the browser).
pub trait AlertPort: Send + Sync {
    fn alert(&self, message: &str);
}
