//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the process-local store behind every repository port.
//!
//! Adapters are thin translators that hold data for the domain. They contain
//! no business logic and perform no validation.

pub mod memory;
