//! Name server configuration: a JSON array of `{"name", "address"}` objects.

use std::io;

use camino::Utf8Path;
use camino::Utf8PathBuf;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::util::dirs;

/// Base name used for every default config location.
pub const APP_NAME: &str = "ipre";

/// Sample configuration, printed by `ipre -s`.
pub const SAMPLE: &str = r#"[
    {"name": "AliDNS",    "address": "223.5.5.5"        },
    {"name": "114DNS",    "address": "114.114.114.114"  },
    {"name": "Google",    "address": "8.8.8.8"          },
    {"name": "OpenDNS",   "address": "208.67.222.222"   }
]"#;

/// A name server to query. Identity is the position in the configured list,
/// so two entries may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameServer {
    pub name: String,
    pub address: String,
}

impl NameServer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file '{0}' load error: file does not exist")]
    NotFound(Utf8PathBuf),

    #[error("Configuration file '{0}' load error: file is directory")]
    IsDirectory(Utf8PathBuf),

    #[error("Configuration file '{path}' load error: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration file '{0}' load error: file format is not correct, use '-s' to see a sample configuration")]
    Malformed(Utf8PathBuf),

    #[error("Configuration file not found")]
    NoneFound,
}

/// A loaded name server list together with where it came from.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: Utf8PathBuf,
    pub servers: Vec<NameServer>,
}

impl Config {
    /// Loads the name server list from `path`.
    ///
    /// # Errors
    ///
    /// - If the file does not exist, is a directory or cannot be read
    /// - If the content is not a non-empty JSON array of name servers
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_owned()));
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        if metadata.is_dir() {
            return Err(ConfigError::IsDirectory(path.to_owned()));
        }

        let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        let servers: Vec<NameServer> = match serde_json::from_slice(&bytes) {
            Ok(servers) => servers,
            Err(error) => {
                debug!(?error, %path, "config is not a name server list");
                return Err(ConfigError::Malformed(path.to_owned()));
            }
        };
        if servers.is_empty() {
            return Err(ConfigError::Malformed(path.to_owned()));
        }

        Ok(Self {
            path: path.to_owned(),
            servers,
        })
    }

    /// Loads the first config found among [`dirs::config_candidates`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoneFound`] if no candidate exists
    /// - Any other load error of the first existing candidate
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_in(&dirs::config_candidates(APP_NAME))
    }

    /// Same as [`Config::discover`] over an explicit list of candidates.
    ///
    /// # Errors
    ///
    /// See [`Config::discover`].
    pub fn discover_in(candidates: &[Utf8PathBuf]) -> Result<Self, ConfigError> {
        for path in candidates {
            match Self::load(path) {
                Ok(config) => return Ok(config),
                Err(ConfigError::NotFound(_)) => debug!(%path, "no config here, trying next"),
                Err(error) => return Err(error),
            }
        }
        Err(ConfigError::NoneFound)
    }

    /// Compact JSON encoding of the server list, as printed by `ipre -c`.
    ///
    /// # Errors
    ///
    /// If serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.servers)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tempfile::NamedTempFile;
    use tempfile::TempDir;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path.to_path_buf()).unwrap()
    }

    #[test]
    fn sample_loads() {
        let file = write_config(SAMPLE);
        let config = Config::load(&utf8(file.path())).unwrap();
        assert_eq!(config.servers.len(), 4);
        assert_eq!(config.servers[2], NameServer::new("Google", "8.8.8.8"));
    }

    #[rstest]
    #[case("")]
    #[case("[]")]
    #[case("not json")]
    #[case(r#"{"name": "x", "address": "1.1.1.1"}"#)]
    fn malformed_is_fatal(#[case] content: &str) {
        let file = write_config(content);
        let error = Config::load(&utf8(file.path())).unwrap_err();
        assert!(matches!(error, ConfigError::Malformed(_)), "{error:?}");
        assert!(error.to_string().contains("use '-s'"));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let error = Config::load(&utf8(dir.path())).unwrap_err();
        assert!(matches!(error, ConfigError::IsDirectory(_)));
    }

    #[test]
    fn discover_skips_missing() {
        let dir = TempDir::new().unwrap();
        let missing = utf8(&dir.path().join("nope.conf"));
        let file = write_config(SAMPLE);
        let present = utf8(file.path());

        let config = Config::discover_in(&[missing, present.clone()]).unwrap();
        assert_eq!(config.path, present);
    }

    #[test]
    fn discover_stops_on_fatal() {
        let dir = TempDir::new().unwrap();
        let bad = write_config("[]");
        let good = write_config(SAMPLE);

        let candidates = [utf8(dir.path()), utf8(bad.path()), utf8(good.path())];
        let error = Config::discover_in(&candidates).unwrap_err();
        assert!(matches!(error, ConfigError::IsDirectory(_)));
    }

    #[test]
    fn discover_none_found() {
        let dir = TempDir::new().unwrap();
        let candidates = [utf8(&dir.path().join("a")), utf8(&dir.path().join("b"))];
        let error = Config::discover_in(&candidates).unwrap_err();
        assert_eq!(error.to_string(), "Configuration file not found");
    }

    #[test]
    fn json_uses_lowercase_fields() {
        let config = Config {
            path: "x".into(),
            servers: vec![NameServer::new("Google", "8.8.8.8")],
        };
        assert_eq!(
            config.to_json().unwrap(),
            r#"[{"name":"Google","address":"8.8.8.8"}]"#
        );
    }
}
