//! Palo Alto syslog field lists to CSV headers.
//!
//! The vendor documents each log type as a human-readable list such as
//! `Format: FUTURE_USE, Receive Time, Serial Number, ...`. [`normalize`]
//! turns that into `future_use1,receive_time,serial_number,...`.

pub mod commands;
pub mod error;
pub mod file_utils;
pub mod models;
pub mod normalizer;

pub use error::HeaderError;
pub use models::{NormalizedHeader, OutputFormat};
pub use normalizer::normalize;
