//! Line-set mismatch errors.

/// Expected and actual group lines differ.
///
/// Displays as the full report: a block of expected lines that never
/// appeared, then a block of lines nobody expected, each block omitted when
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{}", report)]
pub struct GroupMismatch {
    missing: Vec<String>,
    unexpected: Vec<String>,
    report: String,
    line: u32,
    file: &'static str,
}

impl GroupMismatch {
    /// Create a mismatch with caller location tracking.
    #[track_caller]
    pub fn new(missing: Vec<String>, unexpected: Vec<String>) -> Self {
        let location = std::panic::Location::caller();
        let report = format!(
            "{}{}",
            render_block("non-existent expected error(s)", &missing),
            render_block("unexpected error(s)", &unexpected)
        );
        Self {
            missing,
            unexpected,
            report,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Expected lines absent from the actual error.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Actual lines nobody expected.
    pub fn unexpected(&self) -> &[String] {
        &self.unexpected
    }

    /// Line where the comparison was made.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the comparison was made.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

fn render_block(header: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut block = format!("{} {}:\n", lines.len(), header);
    for line in lines {
        block.push_str(&format!("\t{}\n", line));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_blocks_in_order() {
        let mismatch = GroupMismatch::new(vec!["a".into()], vec!["b".into(), "c".into()]);
        assert_eq!(
            mismatch.to_string(),
            "1 non-existent expected error(s):\n\ta\n2 unexpected error(s):\n\tb\n\tc\n"
        );
    }

    #[test]
    fn records_caller_location() {
        let mismatch = GroupMismatch::new(vec![], vec!["b".into()]);
        assert!(mismatch.file().ends_with("mismatch.rs"));
        assert!(mismatch.line() > 0);
    }
}
