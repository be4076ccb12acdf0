use super::error::CatalogError;
use super::report::{CatalogEvent, CatalogReporter};
use crate::core::io::source::{CatalogSource, DIRECTORY_FILE, lossy_lines};
use crate::core::models::kind::CatalogKind;
use crate::core::models::molecule::MoleculeEntry;
use tracing::{debug, info, instrument};

/// Reads the `catdir.cat` of a catalog and keeps the molecules whose transitions
/// file can be opened.
///
/// COLOGNE directories start with two header lines, which are always skipped.
/// A molecule whose file fails the probe is left out and reported as
/// [`CatalogEvent::MoleculeSkipped`]; only a missing or unreadable directory
/// file is an error.
#[instrument(skip_all, fields(kind = %kind))]
pub fn load_directory<S: CatalogSource + ?Sized>(
    source: &S,
    kind: CatalogKind,
    reporter: &CatalogReporter,
) -> Result<Vec<MoleculeEntry>, CatalogError> {
    let location = source.describe(kind, DIRECTORY_FILE);
    let reader = source
        .open(kind, DIRECTORY_FILE)
        .map_err(|e| CatalogError::Io {
            path: location.clone(),
            source: e,
        })?;

    let mut entries = Vec::new();
    let mut skipped = 0;

    for line_res in lossy_lines(reader).skip(kind.directory_header_lines()) {
        let line = line_res.map_err(|e| CatalogError::Io {
            path: location.clone(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let entry = MoleculeEntry::new(line);
        let file_name = entry.file_name();
        match source.probe(kind, &file_name) {
            Ok(()) => entries.push(entry),
            Err(e) => {
                debug!(
                    "Skipping molecule '{}': cannot open {}: {}",
                    entry.name(),
                    file_name,
                    e
                );
                reporter.report(CatalogEvent::MoleculeSkipped {
                    kind,
                    file: file_name,
                });
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} molecule(s) from {} ({} skipped)",
        entries.len(),
        location,
        skipped
    );
    reporter.report(CatalogEvent::DirectoryLoaded {
        kind,
        molecules: entries.len(),
        skipped,
    });
    Ok(entries)
}

/// Returns the first entry whose directory line contains `name`.
///
/// The match is a case-sensitive substring test over the whole line, so `"CO"`
/// also matches `"HCO+"` if that comes first in directory order.
pub fn find_molecule<'a>(
    entries: &'a [MoleculeEntry],
    name: &str,
    kind: CatalogKind,
) -> Result<&'a MoleculeEntry, CatalogError> {
    entries
        .iter()
        .find(|entry| entry.contains(name))
        .ok_or_else(|| CatalogError::MoleculeNotFound {
            name: name.to_string(),
            kind,
        })
}
