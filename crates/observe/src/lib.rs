//! Initialization logic for logging, shared between the binaries and the
//! integration tests.

pub mod tracing;
