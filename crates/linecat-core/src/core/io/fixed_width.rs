use std::fmt;
use thiserror::Error;

/// A named column range within a fixed-width text record.
///
/// Columns are 1-indexed and inclusive on both ends, matching the way catalog
/// format documents describe their records (e.g. "FREQ: columns 1-13").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    start: usize,
    end: usize,
    name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Field '{name}' must start at column 1 or later")]
    ZeroStart { name: String },
    #[error("Field '{name}' ends at column {end}, before its start column {start}")]
    InvertedRange {
        name: String,
        start: usize,
        end: usize,
    },
}

impl FieldDescriptor {
    /// Declares a field spanning columns `start..=end` (1-indexed).
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ZeroStart` if `start` is 0 and
    /// `LayoutError::InvertedRange` if `end < start`.
    pub fn new(start: usize, end: usize, name: impl Into<String>) -> Result<Self, LayoutError> {
        let name = name.into();
        if start == 0 {
            return Err(LayoutError::ZeroStart { name });
        }
        if end < start {
            return Err(LayoutError::InvertedRange { name, start, end });
        }
        Ok(Self { start, end, name })
    }

    /// Builds a descriptor from columns already known to be valid.
    pub(crate) fn fixed(start: usize, end: usize, name: &str) -> Self {
        debug_assert!(start >= 1 && end >= start, "invalid layout for {name}");
        Self {
            start,
            end,
            name: name.to_string(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width of the field in columns.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    /// Returns the untrimmed text covered by this field.
    ///
    /// Short records yield whatever part of the range they do cover, and records that
    /// end before the field starts yield `""`. Never panics, including on non-ASCII
    /// input: offsets landing inside a multi-byte character move back to its boundary.
    pub fn raw<'a>(&self, record: &'a str) -> &'a str {
        let begin = self.start - 1;
        if begin >= record.len() {
            return "";
        }
        let finish = self.end.min(record.len());
        let begin = floor_char_boundary(record, begin);
        let finish = floor_char_boundary(record, finish);
        record.get(begin..finish).unwrap_or("")
    }

    /// Returns the trimmed text covered by this field.
    pub fn extract<'a>(&self, record: &'a str) -> &'a str {
        self.raw(record).trim()
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.start, self.end)
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
