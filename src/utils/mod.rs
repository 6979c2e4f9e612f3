//! Utility modules for logging and terminal styling

pub mod logger;
pub mod styling;

pub use logger::init_logger;
pub use styling::*;
