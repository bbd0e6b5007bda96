//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! trace identifiers and request logging.

pub mod trace;

pub use trace::Trace;
