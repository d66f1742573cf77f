use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use deployments_check_core::{CheckConfig, Checker, Report};
use std::path::Path;

/// Cross-check deployment addresses between contracts/deployment.toml,
/// the deployments.rs constant tables and the documentation.
#[derive(Parser)]
#[command(name = "deployments-check")]
#[command(about = "Verify deployment addresses agree across config, source and docs", long_about = None)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let root = Path::new(".");
    let config = CheckConfig::load(root)?;
    log::debug!("Checking {} group(s)", config.groups.len());
    let report = Checker::new(config)
        .run(root)
        .context("Failed to load deployment inputs")?;

    output_human(&report);

    if report.is_clean() {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}

fn output_human(report: &Report) {
    let todos: Vec<_> = report.todos().collect();
    if !todos.is_empty() {
        println!("{}", "❌ Found TODO placeholders in documentation:".red());
        for todo in todos {
            println!("{}", todo);
        }
    }

    for diag in report.address_issues() {
        println!("{}", diag.to_string().red());
    }

    if report.is_clean() {
        println!(
            "{}",
            "✅ All deployment addresses match across deployment.toml, deployments.rs, and documentation."
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "❌ Found {} issues. Please check inconsistencies or TODO placeholders.",
                report.error_count()
            )
            .red()
            .bold()
        );
    }
}
