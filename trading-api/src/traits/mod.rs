pub mod algo;
pub mod signal_handler;
