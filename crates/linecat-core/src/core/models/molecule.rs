use crate::core::io::fixed_width::FieldDescriptor;
use once_cell::sync::Lazy;
use std::fmt;

const TAG_WIDTH: usize = 6;

static NAME_FIELD: Lazy<FieldDescriptor> = Lazy::new(|| FieldDescriptor::fixed(7, 20, "NAME"));

/// Derives the transitions file name for a directory line.
///
/// Takes at most the first six characters, keeps the first whitespace-delimited
/// token, left-pads it with zeros to six characters and wraps it as `cNNNNNN.cat`.
/// The truncation happens before the padding, so `"32 506 ..."` gives `c000032.cat`.
pub fn molecule_file_name(line: &str) -> String {
    let prefix: String = line.chars().take(TAG_WIDTH).collect();
    let tag = prefix.split_whitespace().next().unwrap_or("");
    format!("c{:0>width$}.cat", tag, width = TAG_WIDTH)
}

/// One molecule listed in a catalog directory file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoleculeEntry {
    line: String,
}

impl MoleculeEntry {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// The directory line exactly as read.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Signed molecule tag, if the tag column holds an integer.
    pub fn tag(&self) -> Option<i64> {
        let prefix: String = self.line.chars().take(TAG_WIDTH).collect();
        prefix.split_whitespace().next()?.parse().ok()
    }

    pub fn name(&self) -> &str {
        NAME_FIELD.extract(&self.line)
    }

    pub fn file_name(&self) -> String {
        molecule_file_name(&self.line)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.line.contains(text)
    }
}

impl fmt::Display for MoleculeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_pads_short_tag() {
        assert_eq!(molecule_file_name("32 506 CH3OH"), "c000032.cat");
        assert_eq!(molecule_file_name("18003 H2O"), "c018003.cat");
    }

    #[test]
    fn file_name_skips_leading_whitespace_in_tag_column() {
        assert_eq!(molecule_file_name(" 28001 CO"), "c028001.cat");
        assert_eq!(molecule_file_name("  1001 H-atom"), "c001001.cat");
    }

    #[test]
    fn file_name_truncates_before_padding() {
        assert_eq!(molecule_file_name("1234567 X"), "c123456.cat");
        assert_eq!(molecule_file_name("     12345"), "c000001.cat");
    }

    #[test]
    fn file_name_is_total_for_degenerate_input() {
        assert_eq!(molecule_file_name(""), "c000000.cat");
        assert_eq!(molecule_file_name("      "), "c000000.cat");
        assert_eq!(molecule_file_name("é"), "c00000é.cat");
    }

    #[test]
    fn file_name_is_idempotent() {
        let line = "44004 N2O";
        assert_eq!(molecule_file_name(line), molecule_file_name(line));
    }

    #[test]
    fn entry_exposes_tag_and_name() {
        let entry = MoleculeEntry::new(" 18003 H2O            1376  3.4598");
        assert_eq!(entry.tag(), Some(18003));
        assert_eq!(entry.name(), "H2O");
        assert_eq!(entry.file_name(), "c018003.cat");
    }

    #[test]
    fn entry_name_handles_unpadded_tag() {
        let entry = MoleculeEntry::new("18003 H2O");
        assert_eq!(entry.name(), "H2O");
    }

    #[test]
    fn entry_tag_is_none_for_non_numeric_column() {
        let entry = MoleculeEntry::new("header line");
        assert_eq!(entry.tag(), None);
    }
}
