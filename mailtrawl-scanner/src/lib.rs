pub mod crawler;
pub mod error;
pub mod extract;
pub mod frontier;
pub mod normalize;
pub mod result;

pub use crawler::{Crawler, ProgressCallback, DEFAULT_MAX_PAGES};
pub use error::HarvestError;
pub use frontier::{CrawlState, Frontier};
pub use result::HarvestReport;
