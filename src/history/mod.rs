pub mod bucketer;
pub mod timestamp;

pub use bucketer::{bucket, DailyBucket, DateBucketer};
pub use timestamp::parse_occurred_at;
