mod ad_catalog;
mod info_lifecycle;

pub use ad_catalog::AdCatalog;
pub use info_lifecycle::{InfoCounts, InfoLifecycle, MISSING_INFO};
