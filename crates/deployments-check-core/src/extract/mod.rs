//! Text extractors for the three sources of truth.
//!
//! None of these fail: a block or section that cannot be found yields an empty
//! table, and the checker reports the resulting gaps as missing values.

use std::collections::BTreeMap;

pub mod docs;
pub mod source;
pub mod todos;

pub use docs::extract_docs_addresses;
pub use source::extract_source_addresses;
pub use todos::find_todos;

/// Field name (`*_address`) to lowercase `0x` address, or `""` when unset.
pub type AddressTable = BTreeMap<String, String>;

/// Regex fragment for a 20-byte hex address with `0x` prefix.
pub(crate) const ADDRESS_PATTERN: &str = r"0x[a-fA-F0-9]{40}";
