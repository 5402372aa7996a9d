// Re-export records and config from the protocol crate so they are accessible via clubhouse_core::*
pub use clubhouse_protocol::config;
pub use clubhouse_protocol::records;

pub mod competition;
pub mod consts;
pub mod course;
pub mod error;
pub mod handicap;
pub mod loader;
pub mod util;
