//! `a380-failures` - Simulated equipment failure registry for the A380
//!
//! This library assigns every simulated A380 failure a unique numeric
//! identifier and exposes the ordered catalog of failures offered for
//! selection, each with its maintenance chapter and display label.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod a380;
pub mod cli;
pub mod config;
pub mod definition;
pub mod error;
pub mod listing;
pub mod logging;
pub mod registry;

pub use a380::{A380Failure, A380_FAILURE_DEFINITIONS};
pub use config::{Config, OutputFormat};
pub use definition::{Chapter, FailureDefinition, FailureEntry, FailureIdentifier};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use registry::FailureRegistry;
