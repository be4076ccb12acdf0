use super::kind::CatalogKind;
use crate::core::io::layout::{TransitionField, TransitionLayout};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("Invalid float in field {field} (value: '{value}')")]
    InvalidFloat {
        field: TransitionField,
        value: String,
    },
}

/// One line of a transitions file.
///
/// The raw line is kept verbatim. The numeric values needed for filtering are parsed
/// once; every other field is read on demand through the [`TransitionLayout`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    line: String,
    frequency_mhz: f64,
    intensity: f64,
    energy: f64,
    temperature: f64,
}

impl Transition {
    /// Parses a record, deriving its temperature with the rules of `kind`.
    ///
    /// A blank energy field counts as 0.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidFloat` if the frequency, intensity or energy
    /// field does not hold a number.
    pub fn parse(line: impl Into<String>, kind: CatalogKind) -> Result<Self, RecordError> {
        let line = line.into();
        let layout = TransitionLayout::standard();

        let frequency_mhz = parse_float(layout, &line, TransitionField::Frequency)?;
        let intensity = parse_float(layout, &line, TransitionField::Intensity)?;
        let energy = match layout.extract(&line, TransitionField::LowerStateEnergy) {
            "" => 0.0,
            _ => parse_float(layout, &line, TransitionField::LowerStateEnergy)?,
        };
        let temperature = kind.temperature(frequency_mhz, energy);

        Ok(Self {
            line,
            frequency_mhz,
            intensity,
            energy,
            temperature,
        })
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn frequency_mhz(&self) -> f64 {
        self.frequency_mhz
    }

    /// The "rint" field: log10 of the integrated intensity.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Upper-state temperature proxy in K.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Trimmed text of any field of the record.
    pub fn field(&self, field: TransitionField) -> &str {
        TransitionLayout::standard().extract(&self.line, field)
    }

    pub fn quantum_numbers(&self) -> &str {
        self.field(TransitionField::Qn)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.line.contains(text)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

fn parse_float(
    layout: &TransitionLayout,
    line: &str,
    field: TransitionField,
) -> Result<f64, RecordError> {
    let value = layout.extract(line, field);
    value.parse().map_err(|_| RecordError::InvalidFloat {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::constants::CM_TO_K;

    const CO_LINE: &str = "  115271.2018  0.0005 -5.0105 2    0.0000  3  28001 101 1           0";

    #[test]
    fn parse_reads_numeric_fields() {
        let t = Transition::parse(CO_LINE, CatalogKind::Cologne).unwrap();
        assert_eq!(t.frequency_mhz(), 115271.2018);
        assert_eq!(t.intensity(), -5.0105);
        assert_eq!(t.energy(), 0.0);
        assert_eq!(t.temperature(), 0.0);
        assert_eq!(t.field(TransitionField::Tag), "28001");
        assert_eq!(t.line(), CO_LINE);
    }

    #[test]
    fn blank_energy_is_treated_as_zero() {
        let line = "  115271.2018  0.0005 -5.0105 2            3  28001 101";
        let t = Transition::parse(line, CatalogKind::Cologne).unwrap();
        assert_eq!(t.energy(), 0.0);
    }

    #[test]
    fn jpl_temperature_adds_photon_energy() {
        let t = Transition::parse(CO_LINE, CatalogKind::Jpl).unwrap();
        assert!((t.temperature() - 5.532).abs() < 1e-3);
    }

    #[test]
    fn cologne_temperature_uses_energy_only() {
        let line = "  230538.0000  0.0005 -4.1197 2    3.8450  5  28001 101";
        let t = Transition::parse(line, CatalogKind::Cologne).unwrap();
        assert!((t.temperature() - CM_TO_K * 3.845).abs() < 1e-12);
    }

    #[test]
    fn parse_fails_on_non_numeric_frequency() {
        let line = "  11527x.2018  0.0005 -5.0105 2    0.0000  3  28001 101";
        let err = Transition::parse(line, CatalogKind::Jpl).unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidFloat {
                field: TransitionField::Frequency,
                value: "11527x.2018".to_string()
            }
        );
    }

    #[test]
    fn parse_fails_on_non_numeric_energy() {
        let line = "  115271.2018  0.0005 -5.0105 2    abcdef  3  28001 101";
        let err = Transition::parse(line, CatalogKind::Jpl).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidFloat {
                field: TransitionField::LowerStateEnergy,
                ..
            }
        ));
    }

    #[test]
    fn parse_fails_on_missing_frequency() {
        let err = Transition::parse("", CatalogKind::Jpl).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidFloat {
                field: TransitionField::Frequency,
                ..
            }
        ));
    }
}
