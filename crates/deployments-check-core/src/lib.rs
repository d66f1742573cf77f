pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod extract;
pub mod updater;

pub use checker::{Checker, Inputs, Report};
pub use config::{CheckConfig, FieldMapping, GroupConfig, NetworkTarget, UpdaterConfig};
pub use diagnostic::{Diagnostic, FieldRef, Origin};
pub use error::DeploymentError;
pub use extract::AddressTable;
pub use updater::{update_file, Applied, DeploymentUpdater, UPDATABLE_FIELDS};
