//! Request-level services.
//!
//! ARCHITECTURE
//! ============
//! Services own the request flow and its error mapping so the CLI (or any
//! other front end) only translates arguments and prints results.

pub mod generate;
