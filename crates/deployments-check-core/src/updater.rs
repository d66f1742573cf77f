use crate::config::{UpdaterConfig, DEPLOYMENT_NAMESPACE};
use crate::error::DeploymentError;
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item, TableLike, Value};

/// Keys the updater may set under `[deployment.<network>]`, in write order.
pub const UPDATABLE_FIELDS: &[&str] = &[
    "admin",
    "verifier",
    "set-verifier",
    "boundless-market",
    "boundless-market-impl",
    "boundless-market-old-impl",
    "collateral-token",
    "assessor-image-id",
    "assessor-guest-url",
    "povw-accounting",
    "povw-accounting-impl",
    "povw-accounting-old-impl",
    "povw-mint",
    "povw-mint-impl",
    "povw-mint-old-impl",
    "povw-log-updater-id",
    "povw-mint-calculator-id",
    "povw-accounting-deployment-commit",
    "povw-mint-deployment-commit",
    "zkc",
    "vezkc",
];

/// A field written by the updater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub field: String,
    pub value: String,
}

/// Format-preserving editor for the deployment config document
pub struct DeploymentUpdater {
    path: PathBuf,
    document: DocumentMut,
}

impl DeploymentUpdater {
    /// Parse `content`; `path` is only used in error messages.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, DeploymentError> {
        let path = path.into();
        let document = content
            .parse::<DocumentMut>()
            .map_err(|source| DeploymentError::EditDeployment {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, document })
    }

    pub fn open(path: &Path) -> Result<Self, DeploymentError> {
        let content = fs::read_to_string(path).map_err(|e| DeploymentError::read(path, e))?;
        Self::parse(path, &content)
    }

    /// Write each override into `[deployment.<network>]`, trimming the value.
    ///
    /// Fails before touching anything if the network table does not exist.
    /// Values are not validated.
    pub fn apply<'a, I>(&mut self, network: &str, overrides: I) -> Result<Vec<Applied>, DeploymentError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let path = self.path.clone();
        let section = network_section(&mut self.document, network).ok_or_else(|| {
            DeploymentError::MissingSection {
                network: network.to_string(),
                path,
            }
        })?;

        let mut applied = Vec::new();
        for (field, value) in overrides {
            let value = value.trim();
            set_preserving_decor(&mut *section, field, value);
            log::debug!("Set {} = {:?} in [{}.{}]", field, value, DEPLOYMENT_NAMESPACE, network);
            applied.push(Applied {
                field: field.to_string(),
                value: value.to_string(),
            });
        }

        Ok(applied)
    }

    /// Serialized document with LF endings, no trailing whitespace and a final newline.
    pub fn render(&self) -> String {
        normalize(&self.document.to_string())
    }

    pub fn save(&self) -> Result<(), DeploymentError> {
        fs::write(&self.path, self.render()).map_err(|source| DeploymentError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Read, patch and rewrite the config document named by `config`.
///
/// The file is left untouched when the network table is missing.
pub fn update_file<'a, I>(config: &UpdaterConfig, overrides: I) -> Result<Vec<Applied>, DeploymentError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut updater = DeploymentUpdater::open(&config.toml_path)?;
    let applied = updater.apply(&config.chain_key, overrides)?;
    updater.save()?;
    log::info!(
        "Wrote {} field(s) to {}",
        applied.len(),
        config.toml_path.display()
    );
    Ok(applied)
}

fn network_section<'d>(document: &'d mut DocumentMut, network: &str) -> Option<&'d mut dyn TableLike> {
    document
        .get_mut(DEPLOYMENT_NAMESPACE)
        .and_then(Item::as_table_like_mut)?
        .get_mut(network)
        .and_then(Item::as_table_like_mut)
}

/// Replace an existing value in place, keeping its comments and spacing.
fn set_preserving_decor(section: &mut dyn TableLike, key: &str, value: &str) {
    let mut new_value = Value::from(value);
    match section.get_mut(key) {
        Some(item) => {
            if let Some(old) = item.as_value() {
                *new_value.decor_mut() = old.decor().clone();
            }
            *item = Item::Value(new_value);
        }
        None => {
            section.insert(key, Item::Value(new_value));
        }
    }
}

fn normalize(output: &str) -> String {
    let mut clean = output
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    clean.push('\n');
    clean
}
