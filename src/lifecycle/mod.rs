//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C → signals.rs → Shutdown::trigger()
//!        → broadcast to the HTTP server (graceful drain)
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
