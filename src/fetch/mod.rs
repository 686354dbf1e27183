// Fetch module: HTTP access to the catalog site.

pub mod fetcher;
pub mod traits;

pub use fetcher::ScraperImpl;
pub use traits::Scraper;
