use crate::error::DeploymentError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEPLOYMENT_TOML_PATH: &str = "contracts/deployment.toml";
pub const MARKET_SOURCE_PATH: &str = "crates/boundless-market/src/deployments.rs";
pub const ZKC_SOURCE_PATH: &str = "crates/zkc/src/deployments.rs";
pub const POVW_SOURCE_PATH: &str = "crates/povw/src/deployments.rs";
pub const DOCS_PATH: &str =
    "documentation/site/pages/developers/smart-contracts/deployments.mdx";

/// Top-level table holding one subtable per network.
pub const DEPLOYMENT_NAMESPACE: &str = "deployment";

/// Optional override file looked up in the repository root.
pub const CHECK_CONFIG_FILE: &str = ".deployments-check.toml";

pub const CHAIN_KEY_ENV: &str = "CHAIN_KEY";
pub const DEFAULT_CHAIN_KEY: &str = "anvil";

/// Configuration for the deployments checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub deployment_toml: PathBuf,
    pub documentation: PathBuf,
    pub groups: Vec<GroupConfig>,
}

/// One logical group of fields compared against a single source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub source: PathBuf,
    pub networks: Vec<NetworkTarget>,
    pub fields: Vec<FieldMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkTarget {
    /// Network key in the config document, e.g. `base-mainnet`.
    pub key: String,
    /// Constant name in the source file, e.g. `BASE`.
    pub constant: String,
    /// Documentation header for this network; `None` skips the docs comparison.
    #[serde(default)]
    pub docs_header: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub config: String,
    pub address: String,
}

impl NetworkTarget {
    fn new(key: &str, constant: &str, docs_header: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            constant: constant.to_string(),
            docs_header: docs_header.map(str::to_string),
        }
    }
}

impl FieldMapping {
    fn new(config: &str, address: &str) -> Self {
        Self {
            config: config.to_string(),
            address: address.to_string(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        let ethereum_networks = vec![
            NetworkTarget::new("ethereum-mainnet", "MAINNET", None),
            NetworkTarget::new("ethereum-sepolia", "SEPOLIA", None),
        ];

        Self {
            deployment_toml: PathBuf::from(DEPLOYMENT_TOML_PATH),
            documentation: PathBuf::from(DOCS_PATH),
            groups: vec![
                GroupConfig {
                    name: "boundless-market".to_string(),
                    source: PathBuf::from(MARKET_SOURCE_PATH),
                    networks: vec![
                        NetworkTarget::new("base-mainnet", "BASE", Some("### Base")),
                        NetworkTarget::new("base-sepolia", "BASE_SEPOLIA", Some("### Base Sepolia")),
                        NetworkTarget::new("ethereum-sepolia", "SEPOLIA", Some("### Ethereum Sepolia")),
                    ],
                    fields: vec![
                        FieldMapping::new("boundless-market", "boundless_market_address"),
                        FieldMapping::new("verifier", "verifier_router_address"),
                        FieldMapping::new("set-verifier", "set_verifier_address"),
                        FieldMapping::new("collateral-token", "collateral_token_address"),
                    ],
                },
                // zkc-staking-rewards is left out until deployment.toml carries it.
                GroupConfig {
                    name: "zkc".to_string(),
                    source: PathBuf::from(ZKC_SOURCE_PATH),
                    networks: ethereum_networks.clone(),
                    fields: vec![
                        FieldMapping::new("zkc", "zkc_address"),
                        FieldMapping::new("vezkc", "vezkc_address"),
                    ],
                },
                GroupConfig {
                    name: "povw".to_string(),
                    source: PathBuf::from(POVW_SOURCE_PATH),
                    networks: ethereum_networks,
                    fields: vec![
                        FieldMapping::new("zkc", "zkc_address"),
                        FieldMapping::new("vezkc", "vezkc_address"),
                        FieldMapping::new("povw-accounting", "povw_accounting_address"),
                        FieldMapping::new("povw-mint", "povw_mint_address"),
                    ],
                },
            ],
        }
    }
}

impl CheckConfig {
    /// Load `.deployments-check.toml` from `root` if present, otherwise the defaults
    pub fn load(root: &Path) -> Result<Self, DeploymentError> {
        let path = root.join(CHECK_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        log::debug!("Loading check configuration from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| DeploymentError::read(&path, e))?;
        toml::from_str(&content).map_err(|source| DeploymentError::ParseConfig { path, source })
    }

    /// Distinct source files in group order.
    pub fn source_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = Vec::new();
        for group in &self.groups {
            if !paths.contains(&group.source.as_path()) {
                paths.push(&group.source);
            }
        }
        paths
    }

    /// File name of the config document as shown in reports.
    pub fn deployment_toml_name(&self) -> String {
        self.deployment_toml
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.deployment_toml.display().to_string())
    }
}

/// Where the updater writes and which network section it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    pub toml_path: PathBuf,
    pub chain_key: String,
}

impl UpdaterConfig {
    pub fn new(toml_path: impl Into<PathBuf>, chain_key: impl Into<String>) -> Self {
        Self {
            toml_path: toml_path.into(),
            chain_key: chain_key.into(),
        }
    }

    /// Resolve the network key from `CHAIN_KEY`, falling back to `anvil`.
    pub fn from_env() -> Self {
        let chain_key = env::var(CHAIN_KEY_ENV).unwrap_or_else(|_| DEFAULT_CHAIN_KEY.to_string());
        log::debug!("Updater targeting [{}.{}]", DEPLOYMENT_NAMESPACE, chain_key);
        Self::new(DEPLOYMENT_TOML_PATH, chain_key)
    }
}
