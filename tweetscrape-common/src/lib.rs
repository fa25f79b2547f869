//! Common utilities shared across tweetscrape crates.
//!
//! Right now this is only the centralised `tracing` setup in
//! [`observability`]; the library crates emit events and the binary decides
//! where they land.
//!
//! ```no_run
//! use tweetscrape_common::observability::{init_logging, LogConfig};
//!
//! let path = init_logging(LogConfig::default()).expect("logging");
//! println!("logging to {}", path.display());
//! ```
pub mod observability;

pub use observability::{init_logging, LogConfig, LogFormat};
