pub mod collectors;
pub mod config;
pub mod error;
pub mod poller;
pub mod sample;
pub mod serial;
