use std::fmt;

/// Prefix printed in front of every reported issue.
pub const FAILURE_GLYPH: &str = "❌";

/// Identifies one tracked field of one network in both naming schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub network: String,
    /// Key under `[deployment.<network>]`, e.g. `set-verifier`.
    pub config_field: String,
    /// Struct field in the source constant table, e.g. `set_verifier_address`.
    pub address_field: String,
}

impl FieldRef {
    pub fn new(
        network: impl Into<String>,
        config_field: impl Into<String>,
        address_field: impl Into<String>,
    ) -> Self {
        Self {
            network: network.into(),
            config_field: config_field.into(),
            address_field: address_field.into(),
        }
    }
}

/// Which of the three sources of truth a value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The deployment config document, named by file name.
    Config { file: String },
    /// A source file holding `Deployment` constants.
    Source { path: String },
    /// A documentation section, named by its header.
    Docs { header: String },
}

/// A data-integrity issue found by the checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `origin` has no value for the field.
    Missing { field: FieldRef, origin: Origin },
    /// The config value differs from the value found in `origin`.
    Mismatch {
        field: FieldRef,
        origin: Origin,
        config_value: String,
        other_value: String,
    },
    /// A documentation line still carrying a `TODO` marker.
    Todo { line: String },
}

impl Diagnostic {
    pub fn missing(field: &FieldRef, origin: Origin) -> Self {
        Diagnostic::Missing {
            field: field.clone(),
            origin,
        }
    }

    pub fn mismatch(
        field: &FieldRef,
        origin: Origin,
        config_value: impl Into<String>,
        other_value: impl Into<String>,
    ) -> Self {
        Diagnostic::Mismatch {
            field: field.clone(),
            origin,
            config_value: config_value.into(),
            other_value: other_value.into(),
        }
    }

    pub fn is_todo(&self) -> bool {
        matches!(self, Diagnostic::Todo { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Missing { field, origin } => match origin {
                Origin::Config { file } => write!(
                    f,
                    "{} Missing [deployment.{}] {} in {}",
                    FAILURE_GLYPH, field.network, field.config_field, file
                ),
                Origin::Source { path } => write!(
                    f,
                    "{} Missing [{}] {} in {}",
                    FAILURE_GLYPH, field.network, field.address_field, path
                ),
                Origin::Docs { header } => write!(
                    f,
                    "{} Missing [{}] {} in documentation section '{}'",
                    FAILURE_GLYPH, field.network, field.address_field, header
                ),
            },
            Diagnostic::Mismatch {
                field,
                origin,
                config_value,
                other_value,
            } => {
                let (against, label) = match origin {
                    Origin::Docs { .. } => ("documentation", "DOCS"),
                    _ => ("RS", "RS  "),
                };
                writeln!(
                    f,
                    "{} Mismatch [{}] {} between TOML and {}:",
                    FAILURE_GLYPH, field.network, field.config_field, against
                )?;
                writeln!(f, "  TOML: {}", config_value)?;
                write!(f, "  {}: {}", label, other_value)
            }
            Diagnostic::Todo { line } => write!(f, "   {}", line),
        }
    }
}
