//! Typed front end for `pg_dump` and `pg_restore`.
//!
//! The crate turns connection and tool options into command lines and starts
//! the tools as child processes. The children are handed back as-is; waiting,
//! timeouts and exit status handling belong to the caller.

pub mod config;
pub mod connection;
pub mod dump;
pub mod error;
pub mod logging;
pub mod restore;

pub use config::connection_options::ConnectionOptions;
pub use config::dump_options::DumpOptions;
pub use config::restore_options::RestoreOptions;
pub use config::types::{Format, Section, SslMode};
pub use connection::{ConnectionArgs, get_connection_args};
pub use dump::core::{Dump, pg_dump};
pub use error::{Error, Result};
pub use restore::core::{Restore, pg_restore};
