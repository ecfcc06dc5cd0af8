use std::time::Duration;

/// The backend rejects `limit` above this value.
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    pub page_size: u32,
    /// How long a notification stays visible before it is dismissed automatically.
    pub auto_dismiss: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            auto_dismiss: DEFAULT_AUTO_DISMISS,
        }
    }
}
