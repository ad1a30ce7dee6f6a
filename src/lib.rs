pub mod browser;
pub mod logging;
pub mod oneshot;

pub use browser::domain::models::{CatalogKind, MediaItem, StatusLabel};
pub use browser::{BrowserConfig, CatalogBrowser};
