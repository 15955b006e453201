//! Infrastructure layer for filesystem and environment interactions.
//!
//! Inside the Zellij sandbox the host's home directory is mounted under
//! `/host`. Paths from configuration are mapped into the sandbox here and
//! mapped back when shown to the user.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_host_path, strip_host_prefix};
