pub mod time_utils;

pub use time_utils::{days_until, Clock, FixedClock, SystemClock};
