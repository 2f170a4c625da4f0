//! CLI support: reading input URLs and summarizing a run.

pub mod input;
pub mod statistics;

pub use input::collect_urls;
pub use statistics::print_bucket_statistics;
