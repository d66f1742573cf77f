use super::{AddressTable, ADDRESS_PATTERN};
use lazy_static::lazy_static;
use regex::Regex;

/// Contract labels as they appear in the deployments page, per address field.
pub const DOCS_LABELS: &[(&str, &str)] = &[
    ("boundless_market_address", r"BoundlessMarket"),
    ("set_verifier_address", r"SetVerifier"),
    ("verifier_router_address", r"RiscZeroVerifierRouter"),
    ("collateral_token_address", r"CollateralToken"),
    ("zkc_address", r"\bZKC\b"),
    ("vezkc_address", r"\bveZKC\b"),
    ("staking_rewards_address", r"StakingRewards"),
    ("povw_accounting_address", r"\bPOVW_ACCOUNTING\b"),
    ("povw_mint_address", r"\bPOVW_MINT\b"),
];

lazy_static! {
    /// Label followed by the first address on the same line.
    static ref LABEL_REGEXES: Vec<(&'static str, Regex)> = DOCS_LABELS
        .iter()
        .map(|(field, label)| {
            let pattern = format!(r"{}.*?({})", label, ADDRESS_PATTERN);
            (*field, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Extract contract addresses listed under `header` in the documentation.
///
/// The section runs from the first case-insensitive occurrence of `header` up
/// to the next line starting with `###`, or the end of the text. Each known
/// label takes the first address following it on the same line. If a label is
/// absent its field is `""`; a missing header yields an empty table.
///
/// A label whose own address is missing still picks up any later address on
/// its line, even one that belongs to a different contract.
pub fn extract_docs_addresses(content: &str, header: &str) -> AddressTable {
    let mut addresses = AddressTable::new();

    let Some(section) = section(content, header) else {
        log::debug!("Documentation section '{}' not found", header);
        return addresses;
    };

    for (field, regex) in LABEL_REGEXES.iter() {
        let address = regex
            .captures(section)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        addresses.insert(field.to_string(), address);
    }

    addresses
}

fn section<'a>(content: &'a str, header: &str) -> Option<&'a str> {
    let pattern = format!(r"(?is){}(.*?)(?:\n###|\z)", regex::escape(header));
    let section_regex = Regex::new(&pattern).ok()?;
    section_regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
