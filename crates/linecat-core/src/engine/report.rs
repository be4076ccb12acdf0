use crate::core::models::kind::CatalogKind;
use std::fmt;

/// Emitted when a transitions file holds more accepted lines than the configured cap.
///
/// The parse still succeeds with the first `limit` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationWarning {
    pub file: String,
    pub limit: usize,
}

impl fmt::Display for TruncationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' has more than {} matching transitions; the rest were ignored",
            self.file, self.limit
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    DirectoryLoaded {
        kind: CatalogKind,
        molecules: usize,
        skipped: usize,
    },
    MoleculeSkipped {
        kind: CatalogKind,
        file: String,
    },
    CacheHit,
    CacheMiss,
    Truncated(TruncationWarning),
}

pub type EventCallback<'a> = Box<dyn Fn(CatalogEvent) + Send + Sync + 'a>;

#[derive(Default)]
pub struct CatalogReporter<'a> {
    callback: Option<EventCallback<'a>>,
}

impl<'a> CatalogReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: EventCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: CatalogEvent) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

impl fmt::Debug for CatalogReporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogReporter")
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
