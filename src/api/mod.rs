pub mod time;

pub use time::{handle_time, TimeResponse, __path_handle_time};
