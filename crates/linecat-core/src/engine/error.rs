use crate::core::models::kind::CatalogKind;
use crate::core::models::transition::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Molecule '{name}' not found in the {kind} catalog")]
    MoleculeNotFound { name: String, kind: CatalogKind },

    #[error("Transition '{query}' not found for molecule '{molecule}'")]
    TransitionNotFound { query: String, molecule: String },

    #[error("Format error in '{file}' on line {line}: {source}")]
    Format {
        file: String,
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// True for the lookup failures a caller can fix by changing the query.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::MoleculeNotFound { .. } | CatalogError::TransitionNotFound { .. }
        )
    }
}
