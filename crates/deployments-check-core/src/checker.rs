use crate::config::{CheckConfig, GroupConfig, NetworkTarget, DEPLOYMENT_NAMESPACE};
use crate::diagnostic::{Diagnostic, FieldRef, Origin};
use crate::error::DeploymentError;
use crate::extract::{extract_docs_addresses, extract_source_addresses, find_todos, AddressTable};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Every file the checker reads, loaded once before any comparison.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub deployment: toml::Table,
    /// Source file contents keyed by the path configured for their group.
    pub sources: BTreeMap<PathBuf, String>,
    pub docs: String,
}

impl Inputs {
    /// Read the config document, every group's source file and the documentation
    /// page relative to `root`. The first unreadable file aborts the load.
    pub fn load(root: &Path, config: &CheckConfig) -> Result<Self, DeploymentError> {
        let toml_path = root.join(&config.deployment_toml);
        let deployment = toml::from_str(&read(&toml_path)?).map_err(|source| {
            DeploymentError::ParseDeployment {
                path: toml_path.clone(),
                source,
            }
        })?;

        let mut sources = BTreeMap::new();
        for path in config.source_paths() {
            sources.insert(path.to_path_buf(), read(&root.join(path))?);
        }

        let docs = read(&root.join(&config.documentation))?;

        Ok(Self {
            deployment,
            sources,
            docs,
        })
    }

    /// `[deployment.<network>]`, or `None` when the document has no such table.
    pub fn network_section(&self, network: &str) -> Option<&toml::Table> {
        self.deployment
            .get(DEPLOYMENT_NAMESPACE)
            .and_then(toml::Value::as_table)
            .and_then(|deployment| deployment.get(network))
            .and_then(toml::Value::as_table)
    }
}

fn read(path: &Path) -> Result<String, DeploymentError> {
    log::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|e| DeploymentError::read(path, e))
}

/// Outcome of one checker run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// TODO lines found in the documentation.
    pub fn todos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_todo())
    }

    /// Missing and mismatch findings, in check order.
    pub fn address_issues(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_todo())
    }
}

/// Compares the config document against source constants and documentation
pub struct Checker {
    config: CheckConfig,
}

impl Checker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Load every input under `root` and check it.
    pub fn run(&self, root: &Path) -> Result<Report, DeploymentError> {
        let inputs = Inputs::load(root, &self.config)?;
        Ok(self.check(&inputs))
    }

    /// Check already-loaded inputs. Every group is always checked.
    pub fn check(&self, inputs: &Inputs) -> Report {
        let mut diagnostics: Vec<Diagnostic> = find_todos(&inputs.docs)
            .into_iter()
            .map(|line| Diagnostic::Todo { line })
            .collect();

        for group in &self.config.groups {
            let source = inputs
                .sources
                .get(&group.source)
                .map(String::as_str)
                .unwrap_or_default();

            for network in &group.networks {
                let before = diagnostics.len();
                self.check_network(group, network, source, inputs, &mut diagnostics);
                log::debug!(
                    "Checked {} [{}]: {} issue(s)",
                    group.name,
                    network.key,
                    diagnostics.len() - before
                );
            }
        }

        log::info!("Deployment check finished with {} issue(s)", diagnostics.len());
        Report { diagnostics }
    }

    fn check_network(
        &self,
        group: &GroupConfig,
        network: &NetworkTarget,
        source: &str,
        inputs: &Inputs,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let config_table = inputs.network_section(&network.key);
        let source_table = extract_source_addresses(source, &network.constant);
        let docs_table = network
            .docs_header
            .as_deref()
            .map(|header| (header, extract_docs_addresses(&inputs.docs, header)));

        let config_origin = Origin::Config {
            file: self.config.deployment_toml_name(),
        };
        let source_origin = Origin::Source {
            path: group.source.display().to_string(),
        };

        for mapping in &group.fields {
            let field = FieldRef::new(&network.key, &mapping.config, &mapping.address);

            let config_value = config_table
                .and_then(|table| table.get(&mapping.config))
                .map(config_value_string)
                .unwrap_or_default()
                .to_lowercase();
            let source_value = lookup(&source_table, &mapping.address);

            if config_value.is_empty() {
                diagnostics.push(Diagnostic::missing(&field, config_origin.clone()));
            }
            if source_value.is_empty() {
                diagnostics.push(Diagnostic::missing(&field, source_origin.clone()));
            }

            let docs = docs_table
                .as_ref()
                .map(|(header, table)| (*header, lookup(table, &mapping.address)));
            if let Some((header, docs_value)) = &docs {
                if docs_value.is_empty() {
                    diagnostics.push(Diagnostic::missing(&field, docs_origin(header)));
                }
            }

            if !config_value.is_empty() && !source_value.is_empty() && config_value != source_value
            {
                diagnostics.push(Diagnostic::mismatch(
                    &field,
                    source_origin.clone(),
                    &config_value,
                    source_value,
                ));
            }

            if let Some((header, docs_value)) = docs {
                if !config_value.is_empty() && !docs_value.is_empty() && config_value != docs_value
                {
                    diagnostics.push(Diagnostic::mismatch(
                        &field,
                        docs_origin(header),
                        &config_value,
                        docs_value,
                    ));
                }
            }
        }
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(CheckConfig::default())
    }
}

fn docs_origin(header: &str) -> Origin {
    Origin::Docs {
        header: header.to_string(),
    }
}

fn lookup(table: &AddressTable, field: &str) -> String {
    table.get(field).map(|v| v.to_lowercase()).unwrap_or_default()
}

fn config_value_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
