pub mod fetcher;
pub mod paginator;
pub mod traits;
