pub mod cache;
pub mod config;

pub use cache::{CachedQuery, TimedCache};
pub use config::CacheConfig;
