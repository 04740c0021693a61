//! Utility module - normalizers, time and logging helpers

pub mod logger;
pub mod normalize;
pub mod time;

pub use normalize::{fold, format_name, format_phone, parse_positive_int, truthy};
pub use time::now_str;
