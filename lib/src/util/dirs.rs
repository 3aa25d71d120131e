//! Locations searched for the name server configuration.
//!
//! Follows these rules, in order:
//!
//! - XDG config home (if the environment variable is set), else `~/.config`
//! - Dotfile in the home directory
//! - System-wide file under `/etc`

use std::env;
use std::path::PathBuf;

use camino::Utf8PathBuf;

const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

/// Gets the ordered list of default config file candidates for `name`.
///
/// Paths that are not valid UTF-8 are skipped.
#[must_use]
pub fn config_candidates(name: &str) -> Vec<Utf8PathBuf> {
    let home = dirs::home_dir();

    let mut paths: Vec<PathBuf> = Vec::with_capacity(3);
    if let Ok(path) = env::var(XDG_CONFIG_HOME) {
        paths.push(PathBuf::from(path).join(format!("{name}.conf")));
    } else if let Some(home) = &home {
        paths.push(home.join(".config").join(format!("{name}.conf")));
    }
    if let Some(home) = &home {
        paths.push(home.join(format!(".{name}")));
    }
    paths.push(PathBuf::from("/etc").join(format!("{name}.conf")));

    paths
        .into_iter()
        .filter_map(|path| Utf8PathBuf::try_from(path).ok())
        .collect()
}
