use crate::core::io::source::{CatalogSource, FsCatalogSource};
use crate::core::models::kind::CatalogKind;
use crate::core::models::molecule::MoleculeEntry;
use crate::core::models::transition::Transition;
use crate::engine::cache::{CacheKey, TransitionCache};
use crate::engine::config::{
    ConfigError, DEFAULT_MAX_TRANSITIONS, ReaderConfig, validate_max_transitions,
};
use crate::engine::directory::{find_molecule, load_directory};
use crate::engine::error::CatalogError;
use crate::engine::report::{CatalogEvent, CatalogReporter, TruncationWarning};
use crate::engine::transitions::{TransitionFilter, TransitionSet, read_transitions};
use std::collections::HashMap;
use tracing::debug;

/// Molecule and transition lookups over a JPL/COLOGNE catalog tree.
///
/// Directories are loaded lazily, once per catalog kind, and kept for the lifetime
/// of the reader. The most recent transition set is cached under its full
/// `(kind, file, filter, cap)` tuple; a query with any other tuple re-reads the
/// file and replaces it.
///
/// Every query takes `&mut self`. Wrap the reader in a `Mutex` to share it
/// between threads.
#[derive(Debug)]
pub struct CatalogReader<'a, S: CatalogSource = FsCatalogSource> {
    source: S,
    max_transitions: usize,
    directories: HashMap<CatalogKind, Vec<MoleculeEntry>>,
    cache: TransitionCache,
    reporter: CatalogReporter<'a>,
}

impl CatalogReader<'_, FsCatalogSource> {
    pub fn from_config(config: &ReaderConfig) -> Self {
        Self {
            max_transitions: config.max_transitions,
            ..Self::new(FsCatalogSource::new(&config.root))
        }
    }
}

impl<'a, S: CatalogSource> CatalogReader<'a, S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_transitions: DEFAULT_MAX_TRANSITIONS,
            directories: HashMap::new(),
            cache: TransitionCache::new(),
            reporter: CatalogReporter::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: CatalogReporter<'a>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn max_transitions(&self) -> usize {
        self.max_transitions
    }

    /// Changes the cap for subsequent parses. The cap is part of the cache key, so the
    /// next query re-reads the file if the value changed.
    pub fn set_max_transitions(&mut self, max: usize) -> Result<(), ConfigError> {
        validate_max_transitions(max)?;
        self.max_transitions = max;
        Ok(())
    }

    /// Molecules of `kind` whose transitions file exists, in directory order.
    pub fn molecules(&mut self, kind: CatalogKind) -> Result<&[MoleculeEntry], CatalogError> {
        if !self.directories.contains_key(&kind) {
            let entries = load_directory(&self.source, kind, &self.reporter)?;
            self.directories.insert(kind, entries);
        }
        Ok(self
            .directories
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// First directory entry of `kind` whose line contains `name`.
    pub fn get_molecule(
        &mut self,
        name: &str,
        kind: CatalogKind,
    ) -> Result<MoleculeEntry, CatalogError> {
        let entries = self.molecules(kind)?;
        find_molecule(entries, name, kind).cloned()
    }

    /// All transitions of `molecule` passing `filter`, in file order.
    pub fn transitions(
        &mut self,
        molecule: &str,
        kind: CatalogKind,
        filter: TransitionFilter,
    ) -> Result<&[Transition], CatalogError> {
        let set = self.transition_set(molecule, kind, filter)?;
        Ok(&set.transitions)
    }

    /// The truncation warning of the currently cached set, if it was cut at the cap.
    pub fn last_truncation(&self) -> Option<&TruncationWarning> {
        self.cache.current().and_then(|set| set.truncation.as_ref())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// First transition of `molecule` whose line contains `key`.
    ///
    /// `key` is matched as plain text, so it can be a frequency as printed in the
    /// file (e.g. `"183310.0870"`) or a quantum number fragment.
    pub fn get_transition(
        &mut self,
        key: &str,
        molecule: &str,
        kind: CatalogKind,
        filter: TransitionFilter,
    ) -> Result<Transition, CatalogError> {
        let set = self.transition_set(molecule, kind, filter)?;
        set.transitions
            .iter()
            .find(|t| t.contains(key))
            .cloned()
            .ok_or_else(|| CatalogError::TransitionNotFound {
                query: key.to_string(),
                molecule: molecule.to_string(),
            })
    }

    /// The transition matching `key` followed by every other transition within
    /// `width_mhz / 2` of its frequency, in file order.
    pub fn get_transitions(
        &mut self,
        key: &str,
        molecule: &str,
        kind: CatalogKind,
        width_mhz: f64,
        filter: TransitionFilter,
    ) -> Result<Vec<Transition>, CatalogError> {
        let set = self.transition_set(molecule, kind, filter)?;
        let anchor = set
            .transitions
            .iter()
            .position(|t| t.contains(key))
            .ok_or_else(|| CatalogError::TransitionNotFound {
                query: key.to_string(),
                molecule: molecule.to_string(),
            })?;
        let center = set.transitions[anchor].frequency_mhz();
        Ok(window(&set.transitions, anchor, center, width_mhz))
    }

    /// The transition nearest to `frequency_mhz` followed by every other transition
    /// within `width_mhz / 2` of `frequency_mhz`, in file order.
    ///
    /// Fails if the nearest transition itself lies outside the window.
    pub fn get_transitions_at(
        &mut self,
        frequency_mhz: f64,
        molecule: &str,
        kind: CatalogKind,
        width_mhz: f64,
        filter: TransitionFilter,
    ) -> Result<Vec<Transition>, CatalogError> {
        let set = self.transition_set(molecule, kind, filter)?;
        let not_found = || CatalogError::TransitionNotFound {
            query: format!("{} MHz", frequency_mhz),
            molecule: molecule.to_string(),
        };

        let mut nearest: Option<(usize, f64)> = None;
        for (index, transition) in set.transitions.iter().enumerate() {
            let distance = (transition.frequency_mhz() - frequency_mhz).abs();
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }

        match nearest {
            Some((anchor, distance)) if distance <= width_mhz * 0.5 => {
                Ok(window(&set.transitions, anchor, frequency_mhz, width_mhz))
            }
            _ => Err(not_found()),
        }
    }

    fn transition_set(
        &mut self,
        molecule: &str,
        kind: CatalogKind,
        filter: TransitionFilter,
    ) -> Result<&TransitionSet, CatalogError> {
        let file_name = self.get_molecule(molecule, kind)?.file_name();
        let key = CacheKey {
            kind,
            file_name,
            filter,
            max_transitions: self.max_transitions,
        };

        let source = &self.source;
        let reporter = &self.reporter;
        let (set, hit) = self.cache.get_or_try_insert_with(key, |key| {
            read_transitions(
                source,
                key.kind,
                &key.file_name,
                key.filter,
                key.max_transitions,
                reporter,
            )
        })?;

        if hit {
            debug!("Transition cache hit for '{}' ({})", molecule, kind);
            reporter.report(CatalogEvent::CacheHit);
        } else {
            debug!("Transition cache miss for '{}' ({})", molecule, kind);
            reporter.report(CatalogEvent::CacheMiss);
        }
        Ok(set)
    }
}

fn window(
    transitions: &[Transition],
    anchor: usize,
    center_mhz: f64,
    width_mhz: f64,
) -> Vec<Transition> {
    let half_width = width_mhz * 0.5;
    let mut result = vec![transitions[anchor].clone()];
    result.extend(
        transitions
            .iter()
            .enumerate()
            .filter(|&(index, t)| {
                index != anchor && (t.frequency_mhz() - center_mhz).abs() <= half_width
            })
            .map(|(_, t)| t.clone()),
    );
    result
}
