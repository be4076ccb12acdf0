use super::constants::{CM_TO_K, HZ_TO_K, MHZ_TO_HZ};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The catalog family a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// The JPL Molecular Spectroscopy catalog.
    Jpl,
    /// The Cologne Database for Molecular Spectroscopy (CDMS).
    #[serde(alias = "cdms")]
    Cologne,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown catalog kind '{0}'. Expected 'jpl' or 'cologne'.")]
pub struct UnknownCatalogKind(pub String);

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Jpl, CatalogKind::Cologne];

    /// Sub-directory of the catalog root holding this family's files.
    pub fn directory(self) -> &'static str {
        match self {
            CatalogKind::Jpl => "JPL",
            CatalogKind::Cologne => "COLOGNE",
        }
    }

    /// Number of metadata lines at the top of `catdir.cat`.
    pub fn directory_header_lines(self) -> usize {
        match self {
            CatalogKind::Jpl => 0,
            CatalogKind::Cologne => 2,
        }
    }

    /// Upper-state temperature proxy in K for a line at `frequency_mhz` whose energy
    /// field holds `energy_cm` (cm^-1).
    ///
    /// The JPL field is the lower-state energy, so the photon energy is added back.
    /// COLOGNE files are used as-is, without the frequency term.
    pub fn temperature(self, frequency_mhz: f64, energy_cm: f64) -> f64 {
        match self {
            CatalogKind::Jpl => frequency_mhz * HZ_TO_K * MHZ_TO_HZ + CM_TO_K * energy_cm,
            CatalogKind::Cologne => CM_TO_K * energy_cm,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Jpl => f.write_str("JPL"),
            CatalogKind::Cologne => f.write_str("COLOGNE"),
        }
    }
}

impl FromStr for CatalogKind {
    type Err = UnknownCatalogKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jpl" => Ok(CatalogKind::Jpl),
            "cologne" | "cdms" => Ok(CatalogKind::Cologne),
            _ => Err(UnknownCatalogKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("JPL".parse::<CatalogKind>(), Ok(CatalogKind::Jpl));
        assert_eq!("Cologne".parse::<CatalogKind>(), Ok(CatalogKind::Cologne));
        assert_eq!("cdms".parse::<CatalogKind>(), Ok(CatalogKind::Cologne));
        assert!("hitran".parse::<CatalogKind>().is_err());
    }

    #[test]
    fn only_cologne_directory_has_header_lines() {
        assert_eq!(CatalogKind::Jpl.directory_header_lines(), 0);
        assert_eq!(CatalogKind::Cologne.directory_header_lines(), 2);
    }

    #[test]
    fn same_energy_gives_different_temperature_per_catalog() {
        let frequency = 115271.2018;
        let energy = 3.845;
        let jpl = CatalogKind::Jpl.temperature(frequency, energy);
        let cologne = CatalogKind::Cologne.temperature(frequency, energy);

        assert!((cologne - CM_TO_K * energy).abs() < 1e-12);
        let photon = frequency * 1.0e6 * HZ_TO_K;
        assert!((jpl - cologne - photon).abs() < 1e-9);
        assert!(jpl > cologne);
    }

    #[test]
    fn cologne_temperature_ignores_frequency() {
        let a = CatalogKind::Cologne.temperature(1.0, 10.0);
        let b = CatalogKind::Cologne.temperature(1.0e6, 10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn deserializes_from_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: CatalogKind,
        }
        let w: Wrapper = toml::from_str("kind = \"cologne\"").unwrap();
        assert_eq!(w.kind, CatalogKind::Cologne);
        let w: Wrapper = toml::from_str("kind = \"cdms\"").unwrap();
        assert_eq!(w.kind, CatalogKind::Cologne);
    }
}
