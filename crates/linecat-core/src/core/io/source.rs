use crate::core::models::kind::CatalogKind;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Name of the directory file listing the molecules of a catalog.
pub const DIRECTORY_FILE: &str = "catdir.cat";

/// Defines where catalog files are read from.
///
/// The engine only ever sees catalog files through this trait, which keeps the
/// two access modes apart: [`probe`](CatalogSource::probe) is a best-effort existence
/// check used while listing molecules, [`open`](CatalogSource::open) is the fatal path
/// used for actual parsing.
pub trait CatalogSource {
    /// Opens a catalog file for line-by-line reading.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file is missing or unreadable.
    fn open(&self, kind: CatalogKind, file_name: &str) -> io::Result<Box<dyn BufRead + '_>>;

    /// Checks that a catalog file exists and can be opened, without reading it.
    fn probe(&self, kind: CatalogKind, file_name: &str) -> io::Result<()>;

    /// A human-readable location for error messages.
    fn describe(&self, kind: CatalogKind, file_name: &str) -> String {
        format!("{}/{}", kind.directory(), file_name)
    }
}

/// Reads catalogs from `<root>/JPL/` and `<root>/COLOGNE/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsCatalogSource {
    root: PathBuf,
}

impl FsCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: CatalogKind, file_name: &str) -> PathBuf {
        self.root.join(kind.directory()).join(file_name)
    }
}

impl CatalogSource for FsCatalogSource {
    fn open(&self, kind: CatalogKind, file_name: &str) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(self.path_for(kind, file_name))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn probe(&self, kind: CatalogKind, file_name: &str) -> io::Result<()> {
        let file = File::open(self.path_for(kind, file_name))?;
        if file.metadata()?.is_file() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a regular file", file_name),
            ))
        }
    }

    fn describe(&self, kind: CatalogKind, file_name: &str) -> String {
        self.path_for(kind, file_name).to_string_lossy().to_string()
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn open(&self, kind: CatalogKind, file_name: &str) -> io::Result<Box<dyn BufRead + '_>> {
        (**self).open(kind, file_name)
    }

    fn probe(&self, kind: CatalogKind, file_name: &str) -> io::Result<()> {
        (**self).probe(kind, file_name)
    }

    fn describe(&self, kind: CatalogKind, file_name: &str) -> String {
        (**self).describe(kind, file_name)
    }
}

/// Splits catalog text into lines, decoding each one leniently.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so a stray Latin-1 character in a
/// molecule name or quantum-number field does not make the whole file unreadable.
/// `\n` and `\r\n` endings are stripped. Only failed reads are errors.
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

/// Iterator returned by [`lossy_lines`].
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn path_for_uses_catalog_directory_prefix() {
        let source = FsCatalogSource::new("/data");
        assert_eq!(
            source.path_for(CatalogKind::Jpl, "c018003.cat"),
            PathBuf::from("/data/JPL/c018003.cat")
        );
        assert_eq!(
            source.path_for(CatalogKind::Cologne, DIRECTORY_FILE),
            PathBuf::from("/data/COLOGNE/catdir.cat")
        );
    }

    #[test]
    fn open_reads_existing_file_line_by_line() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("JPL")).unwrap();
        fs::write(dir.path().join("JPL/catdir.cat"), "a\nb\n").unwrap();

        let source = FsCatalogSource::new(dir.path());
        let reader = source.open(CatalogKind::Jpl, DIRECTORY_FILE).unwrap();
        let lines: Vec<String> = lossy_lines(reader).map(Result::unwrap).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn lossy_lines_strips_line_endings() {
        let input: &[u8] = b"first\r\nsecond\n\nlast";
        let lines: Vec<String> = lossy_lines(input).map(Result::unwrap).collect();
        assert_eq!(lines, vec!["first", "second", "", "last"]);
    }

    #[test]
    fn lossy_lines_replaces_invalid_utf8() {
        let input: &[u8] = b"18003 H2O\n99001 M\xe4lecule\n";
        let lines: Vec<String> = lossy_lines(input).map(Result::unwrap).collect();
        assert_eq!(lines, vec!["18003 H2O", "99001 M\u{FFFD}lecule"]);
    }

    #[test]
    fn open_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let source = FsCatalogSource::new(dir.path());
        let result = source.open(CatalogKind::Jpl, DIRECTORY_FILE);
        assert_eq!(result.err().unwrap().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn probe_succeeds_for_file_and_fails_for_directory_or_missing() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("COLOGNE/c028503.cat")).unwrap();
        fs::write(dir.path().join("COLOGNE/c028501.cat"), "").unwrap();

        let source = FsCatalogSource::new(dir.path());
        assert!(source.probe(CatalogKind::Cologne, "c028501.cat").is_ok());
        assert!(source.probe(CatalogKind::Cologne, "c028503.cat").is_err());
        assert!(source.probe(CatalogKind::Cologne, "c999999.cat").is_err());
    }
}
