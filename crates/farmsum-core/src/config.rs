//! Service endpoints and the `farmsum.toml` configuration file.
//!
//! Every setting has a default matching a stock mainnet install: all four
//! daemons on `localhost`, client certificates under
//! `~/.chia/mainnet/config/ssl/<service>/`. A missing config file is not an
//! error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root directory of a mainnet install, relative to the user's home.
pub const DEFAULT_ROOT: &str = ".chia/mainnet";

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "farmsum.toml";

/// The daemon roles queried for a farm summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    FullNode,
    Wallet,
    Farmer,
    Harvester,
}

impl ServiceKind {
    /// All services, in the order a summary queries them.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::FullNode,
        ServiceKind::Wallet,
        ServiceKind::Farmer,
        ServiceKind::Harvester,
    ];

    /// Directory name under `config/ssl/`, also the stem of the certificate
    /// file names (`private_<name>.crt`).
    pub fn ssl_dir(self) -> &'static str {
        match self {
            ServiceKind::FullNode => "full_node",
            ServiceKind::Wallet => "wallet",
            ServiceKind::Farmer => "farmer",
            ServiceKind::Harvester => "harvester",
        }
    }

    pub fn default_rpc_port(self) -> u16 {
        match self {
            ServiceKind::FullNode => 8555,
            ServiceKind::Wallet => 9256,
            ServiceKind::Farmer => 8559,
            ServiceKind::Harvester => 8560,
        }
    }

    /// Default client certificate path, relative to the root directory.
    pub fn default_private_crt(self) -> PathBuf {
        PathBuf::from(format!(
            "config/ssl/{dir}/private_{dir}.crt",
            dir = self.ssl_dir()
        ))
    }

    /// Default client key path, relative to the root directory.
    pub fn default_private_key(self) -> PathBuf {
        PathBuf::from(format!(
            "config/ssl/{dir}/private_{dir}.key",
            dir = self.ssl_dir()
        ))
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ssl_dir())
    }
}

/// A fully resolved RPC endpoint: where to connect and which client
/// identity to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub kind: ServiceKind,
    pub host: String,
    pub port: u16,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl ServiceEndpoint {
    /// URL of an RPC method on this service. The method name is the path.
    pub fn url(&self, method: &str) -> String {
        format!("https://{}:{}/{}", self.host, self.port, method)
    }
}

/// Resolved endpoints for all four services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub full_node: ServiceEndpoint,
    pub wallet: ServiceEndpoint,
    pub farmer: ServiceEndpoint,
    pub harvester: ServiceEndpoint,
}

impl Endpoints {
    pub fn get(&self, kind: ServiceKind) -> &ServiceEndpoint {
        match kind {
            ServiceKind::FullNode => &self.full_node,
            ServiceKind::Wallet => &self.wallet,
            ServiceKind::Farmer => &self.farmer,
            ServiceKind::Harvester => &self.harvester,
        }
    }
}

/// Full configuration for farmsum.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FarmsumConfig {
    /// Install location.
    #[serde(default)]
    pub chia: ChiaConfig,

    #[serde(default)]
    pub full_node: ServiceConfig,

    #[serde(default)]
    pub wallet: ServiceConfig,

    #[serde(default)]
    pub farmer: ServiceConfig,

    #[serde(default)]
    pub harvester: ServiceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChiaConfig {
    /// Root directory of the install. Defaults to `~/.chia/mainnet`.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Connection settings for one service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// RPC host name.
    #[serde(default = "default_host")]
    pub host: String,
    /// RPC port. Defaults to the service's standard port.
    #[serde(default)]
    pub port: Option<u16>,
    /// Client certificate, relative to the root unless absolute.
    #[serde(default)]
    pub private_crt: Option<PathBuf>,
    /// Client key, relative to the root unless absolute.
    #[serde(default)]
    pub private_key: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_host() -> String {
    "localhost".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
            private_crt: None,
            private_key: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl FarmsumConfig {
    /// Load config from a TOML file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn service(&self, kind: ServiceKind) -> &ServiceConfig {
        match kind {
            ServiceKind::FullNode => &self.full_node,
            ServiceKind::Wallet => &self.wallet,
            ServiceKind::Farmer => &self.farmer,
            ServiceKind::Harvester => &self.harvester,
        }
    }

    /// The install root: the configured one, or `~/.chia/mainnet`.
    pub fn root_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.chia.root {
            Some(root) => Ok(root.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_ROOT))
                .ok_or(ConfigError::HomeDirUnavailable),
        }
    }

    /// Resolve one service's endpoint against an install root.
    pub fn endpoint(&self, kind: ServiceKind, root: &Path) -> ServiceEndpoint {
        let service = self.service(kind);
        let crt = service
            .private_crt
            .clone()
            .unwrap_or_else(|| kind.default_private_crt());
        let key = service
            .private_key
            .clone()
            .unwrap_or_else(|| kind.default_private_key());

        ServiceEndpoint {
            kind,
            host: service.host.clone(),
            port: service.port.unwrap_or_else(|| kind.default_rpc_port()),
            cert_path: root.join(crt),
            key_path: root.join(key),
        }
    }

    /// Resolve all four endpoints.
    pub fn endpoints(&self) -> Result<Endpoints, ConfigError> {
        let root = self.root_dir()?;
        Ok(Endpoints {
            full_node: self.endpoint(ServiceKind::FullNode, &root),
            wallet: self.endpoint(ServiceKind::Wallet, &root),
            farmer: self.endpoint(ServiceKind::Farmer, &root),
            harvester: self.endpoint(ServiceKind::Harvester, &root),
        })
    }
}

/// Commented template written by `farmsum init`. Every value shown is the
/// built-in default.
pub const CONFIG_TEMPLATE: &str = r#"# farmsum configuration

[chia]
# Root of the install. Defaults to ~/.chia/mainnet
# root = "/home/farmer/.chia/mainnet"

# Certificate paths are relative to the root unless absolute.
[full_node]
host = "localhost"
port = 8555
# private_crt = "config/ssl/full_node/private_full_node.crt"
# private_key = "config/ssl/full_node/private_full_node.key"

[wallet]
host = "localhost"
port = 9256

[farmer]
host = "localhost"
port = 8559

[harvester]
host = "localhost"
port = 8560

[logging]
level = "info"
"#;
