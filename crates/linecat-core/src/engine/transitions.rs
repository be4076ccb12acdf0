use super::error::CatalogError;
use super::report::{CatalogEvent, CatalogReporter, TruncationWarning};
use crate::core::io::source::{CatalogSource, lossy_lines};
use crate::core::models::kind::CatalogKind;
use crate::core::models::transition::Transition;
use std::io::BufRead;
use tracing::{info, instrument, warn};

/// Temperature and intensity limits applied while parsing.
///
/// A limit of exactly 0 disables filtering on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionFilter {
    /// Keep lines whose upper-state temperature is strictly below this (K).
    pub max_temperature_k: f64,
    /// Keep lines whose log10 intensity is strictly above this.
    pub min_intensity: f64,
}

impl TransitionFilter {
    pub fn new(max_temperature_k: f64, min_intensity: f64) -> Self {
        Self {
            max_temperature_k,
            min_intensity,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn accepts(&self, transition: &Transition) -> bool {
        let intensity_ok =
            self.min_intensity == 0.0 || transition.intensity() > self.min_intensity;
        let temperature_ok =
            self.max_temperature_k == 0.0 || transition.temperature() < self.max_temperature_k;
        intensity_ok && temperature_ok
    }
}

/// The accepted lines of one transitions file, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionSet {
    pub transitions: Vec<Transition>,
    /// Set when the cap was hit and further matching lines were dropped.
    pub truncation: Option<TruncationWarning>,
}

impl TransitionSet {
    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }
}

/// Opens `file_name` from `source` and parses it.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be opened or read, and
/// `CatalogError::Format` if a numeric field does not parse. Hitting the
/// `max_transitions` cap is not an error; see [`TransitionSet::truncation`].
#[instrument(skip_all, fields(kind = %kind, file = file_name))]
pub fn read_transitions<S: CatalogSource + ?Sized>(
    source: &S,
    kind: CatalogKind,
    file_name: &str,
    filter: TransitionFilter,
    max_transitions: usize,
    reporter: &CatalogReporter,
) -> Result<TransitionSet, CatalogError> {
    let location = source.describe(kind, file_name);
    let reader = source.open(kind, file_name).map_err(|e| CatalogError::Io {
        path: location.clone(),
        source: e,
    })?;
    let set = parse_transitions(reader, kind, &location, filter, max_transitions, reporter)?;
    info!(
        "Read {} transition(s) from {}{}",
        set.transitions.len(),
        location,
        if set.is_truncated() { " (truncated)" } else { "" }
    );
    Ok(set)
}

/// Parses transition lines from any buffered reader.
///
/// `label` names the input in errors and warnings. Blank lines are skipped, and bytes
/// that are not UTF-8 are replaced rather than failing the read.
pub fn parse_transitions(
    reader: impl BufRead,
    kind: CatalogKind,
    label: &str,
    filter: TransitionFilter,
    max_transitions: usize,
    reporter: &CatalogReporter,
) -> Result<TransitionSet, CatalogError> {
    let mut set = TransitionSet::default();

    for (line_num, line_res) in lossy_lines(reader).enumerate() {
        let line = line_res.map_err(|e| CatalogError::Io {
            path: label.to_string(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let transition = Transition::parse(line, kind).map_err(|e| CatalogError::Format {
            file: label.to_string(),
            line: line_num + 1,
            source: e,
        })?;
        if !filter.accepts(&transition) {
            continue;
        }

        if set.transitions.len() >= max_transitions {
            let warning = TruncationWarning {
                file: label.to_string(),
                limit: max_transitions,
            };
            warn!("{}", warning);
            reporter.report(CatalogEvent::Truncated(warning.clone()));
            set.truncation = Some(warning);
            break;
        }
        set.transitions.push(transition);
    }

    Ok(set)
}
