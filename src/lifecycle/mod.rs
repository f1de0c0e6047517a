//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Init tracing/metrics → Seed store → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Server stops accepting → In-flight requests finish → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! The catalog lives only as long as the process; nothing is flushed on exit.

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
