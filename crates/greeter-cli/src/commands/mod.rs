pub mod dispatch;
pub mod utils;
pub mod wish;
