//! Service clients and the transport they are built on.
//!
//! # Services
//! - [actuator]
//! - [sim]
//!
//! # Utils
//! - [calibration]
//! - [grpc_client]
//! - [exec]
//! - [config]

pub mod actuator;
pub mod calibration;
pub mod config;
pub mod exec;
pub mod grpc_client;
pub mod sim;

#[cfg(test)]
pub(crate) mod test_utils;
