use super::{AddressTable, ADDRESS_PATTERN};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<name>_address: <value>,` where the value runs up to the next comma.
    static ref FIELD_REGEX: Regex = Regex::new(r"(\w+_address)\s*:\s*([^,]+),").unwrap();

    /// `address!("0x...")`, possibly inside `Some(...)`.
    static ref ADDRESS_MACRO_REGEX: Regex =
        Regex::new(&format!(r#"address!\(\s*"(?P<addr>{})"\s*\)"#, ADDRESS_PATTERN)).unwrap();
}

/// Extract the `*_address` fields of `pub const <CONSTANT>: Deployment = Deployment { .. };`
///
/// `None` and values that are not an `address!` literal map to `""`. A constant
/// that does not exist yields an empty table.
pub fn extract_source_addresses(content: &str, constant: &str) -> AddressTable {
    let mut addresses = AddressTable::new();

    let Some(block) = constant_block(content, constant) else {
        log::debug!("No Deployment constant {} found", constant.to_uppercase());
        return addresses;
    };

    for caps in FIELD_REGEX.captures_iter(block) {
        let field = caps[1].to_string();
        let value = caps[2].trim();

        let address = if value == "None" {
            String::new()
        } else {
            ADDRESS_MACRO_REGEX
                .captures(value)
                .map(|m| m["addr"].to_lowercase())
                .unwrap_or_default()
        };
        addresses.insert(field, address);
    }

    addresses
}

/// Body of the named constant, matched non-greedily up to the first `};`.
fn constant_block<'a>(content: &'a str, constant: &str) -> Option<&'a str> {
    let pattern = format!(
        r"(?s)pub const {}\s*:\s*Deployment\s*=\s*Deployment\s*\{{(.*?)\}};",
        regex::escape(&constant.to_uppercase())
    );
    // The constant name is escaped, so the pattern is always valid.
    let block_regex = Regex::new(&pattern).ok()?;
    block_regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
