//! Sandbox path helpers.

use std::path::{Path, PathBuf};

/// Mount point of the host home directory inside the plugin sandbox.
const HOST_ROOT: &str = "/host";

/// Directory for plugin-owned files (trace exports).
///
/// Resolves to `~/.local/share/zellij/zcatalog` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("zcatalog")
}

/// Replaces a leading `~` with the sandbox host mount.
///
/// ```rust
/// use zcatalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalog.json"), "/host/catalog.json");
/// assert_eq!(expand_tilde("/tmp/catalog.json"), "/tmp/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Maps a configured path into the sandbox.
///
/// `~` is expanded and relative paths are taken relative to the host home
/// directory. Absolute paths are used as given.
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let expanded = PathBuf::from(expand_tilde(path.trim()));
    if expanded.is_absolute() {
        expanded
    } else {
        PathBuf::from(HOST_ROOT).join(expanded)
    }
}

/// Strips the sandbox mount from a path for display, e.g. in error messages.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    Path::new(path).strip_prefix(HOST_ROOT).map_or_else(
        |_| path.to_string(),
        |rest| format!("/{}", rest.display()),
    )
}
