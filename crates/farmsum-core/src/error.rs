use std::path::PathBuf;

/// Errors raised while resolving configuration and service endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot locate the home directory; set `root` under [chia] in the config file")]
    HomeDirUnavailable,
}
