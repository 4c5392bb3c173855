//! Income scoring engine for farm loan front ends.
//!
//! The [`scoring`] module holds the validator, the factor tables and the
//! eligibility policy. Everything else here is the plumbing a service needs
//! around it: configuration, tracing setup and the top-level error type.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
