pub mod config;
pub mod fetch;
pub mod refresh;
pub mod scan;
pub mod store;
pub mod telemetry;
