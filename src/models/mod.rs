// Module exports for models

pub mod display;
pub mod page;
pub mod time_remaining;
