/// Every documentation line containing the literal marker `TODO`.
pub fn find_todos(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.contains("TODO"))
        .map(str::to_string)
        .collect()
}
