pub mod config;
pub mod debug;
pub mod estimate;
pub mod onboard;
pub mod pipe;
