pub mod connection_options;
pub mod core;
pub mod dump_options;
pub mod flags;
pub mod restore_options;
pub mod types;
