pub mod fetcher;
pub mod traits;

pub use fetcher::HttpClient;
pub use traits::{fetch_result, StatsClient};

#[cfg(test)]
pub mod stub;
