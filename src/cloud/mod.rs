//! OpenStack interaction.
//!
//! - [`cli`] - Command execution for the `openstack` CLI
//! - [`session`] - Authentication per cloud alias
//! - [`fetch`] - Retrieval of the raw collections
//! - [`cache`] - Caching of snapshots

mod cache;
mod cli;
mod fetch;
mod session;

// Re-export public types and functions
pub use cache::{default_cache_file, read_snapshot_cache, read_snapshot_file};
pub use cli::run;
pub use fetch::{fetch_server_names, fetch_snapshot};
pub use session::authenticate;
