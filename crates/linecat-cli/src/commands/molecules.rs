use crate::error::Result;
use linecat::core::models::kind::CatalogKind;
use linecat::workflows::query::CatalogReader;
use std::io::Write;
use tracing::info;

/// Prints every listed molecule of `kind`, one directory line per row.
pub fn list(reader: &mut CatalogReader, kind: CatalogKind, out: &mut impl Write) -> Result<()> {
    let entries = reader.molecules(kind)?;
    info!("Listing {} molecule(s) from the {} catalog.", entries.len(), kind);
    for entry in entries {
        writeln!(out, "{}", entry.line())?;
    }
    Ok(())
}

pub fn show(
    reader: &mut CatalogReader,
    name: &str,
    kind: CatalogKind,
    out: &mut impl Write,
) -> Result<()> {
    let entry = reader.get_molecule(name, kind)?;
    info!(
        "Molecule '{}' uses transitions file {}.",
        name,
        entry.file_name()
    );
    writeln!(out, "{}", entry.line())?;
    Ok(())
}
