pub mod constants;
pub mod dates;

pub use constants::*;
pub use dates::{final_date_text, parse_date, window_start};
