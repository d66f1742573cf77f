use anyhow::{Context, Result};
use clap::Parser;
use deployments_check_core::{update_file, UpdaterConfig, UPDATABLE_FIELDS};

/// Update deployment.<CHAIN_KEY> fields in contracts/deployment.toml.
///
/// The target network comes from the CHAIN_KEY environment variable
/// (default: anvil). Only the flags that are given are written.
#[derive(Parser)]
#[command(name = "update-deployment-toml")]
#[command(about = "Update deployment.<CHAIN_KEY> fields in the deployment TOML file", long_about = None)]
struct Args {
    /// Admin address
    #[arg(long)]
    admin: Option<String>,

    /// Verifier contract address
    #[arg(long)]
    verifier: Option<String>,

    /// SetVerifier contract address
    #[arg(long)]
    set_verifier: Option<String>,

    /// BoundlessMarket contract address
    #[arg(long)]
    boundless_market: Option<String>,

    /// BoundlessMarket impl contract address
    #[arg(long)]
    boundless_market_impl: Option<String>,

    /// BoundlessMarket old impl contract address
    #[arg(long)]
    boundless_market_old_impl: Option<String>,

    /// CollateralToken contract address
    #[arg(long)]
    collateral_token: Option<String>,

    /// Assessor image ID (hex)
    #[arg(long)]
    assessor_image_id: Option<String>,

    /// URL to the assessor guest package
    #[arg(long)]
    assessor_guest_url: Option<String>,

    /// PovwAccounting contract address
    #[arg(long)]
    povw_accounting: Option<String>,

    /// PovwAccounting impl contract address
    #[arg(long)]
    povw_accounting_impl: Option<String>,

    /// PovwAccounting old impl contract address
    #[arg(long)]
    povw_accounting_old_impl: Option<String>,

    /// PovwMint contract address
    #[arg(long)]
    povw_mint: Option<String>,

    /// PovwMint impl contract address
    #[arg(long)]
    povw_mint_impl: Option<String>,

    /// PovwMint old impl contract address
    #[arg(long)]
    povw_mint_old_impl: Option<String>,

    /// PoVW log updater image ID (hex)
    #[arg(long)]
    povw_log_updater_id: Option<String>,

    /// PoVW mint calculator image ID (hex)
    #[arg(long)]
    povw_mint_calculator_id: Option<String>,

    /// PoVW accounting deployment commit hash
    #[arg(long)]
    povw_accounting_deployment_commit: Option<String>,

    /// PoVW mint deployment commit hash
    #[arg(long)]
    povw_mint_deployment_commit: Option<String>,

    /// ZKC contract address
    #[arg(long)]
    zkc: Option<String>,

    /// veZKC contract address
    #[arg(long)]
    vezkc: Option<String>,
}

impl Args {
    /// Explicitly given values keyed by their TOML field name.
    fn overrides(&self) -> Vec<(&str, &str)> {
        let values = [
            &self.admin,
            &self.verifier,
            &self.set_verifier,
            &self.boundless_market,
            &self.boundless_market_impl,
            &self.boundless_market_old_impl,
            &self.collateral_token,
            &self.assessor_image_id,
            &self.assessor_guest_url,
            &self.povw_accounting,
            &self.povw_accounting_impl,
            &self.povw_accounting_old_impl,
            &self.povw_mint,
            &self.povw_mint_impl,
            &self.povw_mint_old_impl,
            &self.povw_log_updater_id,
            &self.povw_mint_calculator_id,
            &self.povw_accounting_deployment_commit,
            &self.povw_mint_deployment_commit,
            &self.zkc,
            &self.vezkc,
        ];

        UPDATABLE_FIELDS
            .iter()
            .zip(values)
            .filter_map(|(field, value)| value.as_deref().map(|v| (*field, v)))
            .collect()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = UpdaterConfig::from_env();
    let overrides = args.overrides();
    log::debug!(
        "Applying {} override(s) to {}",
        overrides.len(),
        config.toml_path.display()
    );

    let applied = update_file(&config, overrides)
        .with_context(|| format!("Failed to update {}", config.toml_path.display()))?;

    for entry in &applied {
        println!(
            "Updated '{}' to '{}' in [deployment.{}]",
            entry.field, entry.value, config.chain_key
        );
    }
    println!("{} updated successfully.", config.toml_path.display());

    Ok(())
}
