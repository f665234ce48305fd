pub mod configuration;
pub mod console;
pub mod domain;
pub mod store;
pub mod surface;
pub mod telemetry;
pub mod workflow;
