pub mod config;
pub mod error;
pub mod legacy;
pub mod telemetry;
