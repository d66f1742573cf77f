use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const TOML: &str = "contracts/deployment.toml";
pub const DOCS: &str = "documentation/site/pages/developers/smart-contracts/deployments.mdx";

/// The consistent miniature repository shared by the integration tests.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/consistent")
}

/// Copy the fixture tree into a fresh temporary directory.
pub fn fixture_copy() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = fixture_root();
    for entry in WalkDir::new(&root).into_iter().filter_map(|e| e.ok()) {
        let relative = entry.path().strip_prefix(&root).unwrap();
        let target = dir.path().join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    dir
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// Rewrite one fixture file in place.
pub fn edit(root: &Path, relative: &str, f: impl FnOnce(String) -> String) {
    let content = read(root, relative);
    fs::write(root.join(relative), f(content)).unwrap();
}
