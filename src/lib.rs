pub mod error;
pub mod tools;
pub mod registry;
pub mod router;
pub mod catalog;
pub mod transfer;
pub mod telemetry;
pub mod invoke;
pub mod config;
pub mod swarm;
