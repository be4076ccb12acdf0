use super::fixed_width::FieldDescriptor;
use once_cell::sync::Lazy;
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fields of a transition record, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionField {
    Frequency,
    FrequencyError,
    Intensity,
    DegreeFreedom,
    LowerStateEnergy,
    Gu,
    Tag,
    QnCoding,
    Qn,
}

impl TransitionField {
    pub const ALL: [TransitionField; 9] = [
        TransitionField::Frequency,
        TransitionField::FrequencyError,
        TransitionField::Intensity,
        TransitionField::DegreeFreedom,
        TransitionField::LowerStateEnergy,
        TransitionField::Gu,
        TransitionField::Tag,
        TransitionField::QnCoding,
        TransitionField::Qn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransitionField::Frequency => "FREQUENCY",
            TransitionField::FrequencyError => "FREQUENCY_ERROR",
            TransitionField::Intensity => "INTENSITY",
            TransitionField::DegreeFreedom => "DEGREE_FREEDOM",
            TransitionField::LowerStateEnergy => "LOWER_STATE_ENERGY",
            TransitionField::Gu => "GU",
            TransitionField::Tag => "TAG",
            TransitionField::QnCoding => "QN_CODING",
            TransitionField::Qn => "QN",
        }
    }

    /// 1-indexed inclusive columns, as published for the JPL and CDMS catalogs
    /// (F13.4, F8.4, F8.4, I2, F10.4, I3, I7, I4, free-text quantum numbers).
    fn columns(self) -> (usize, usize) {
        match self {
            TransitionField::Frequency => (1, 13),
            TransitionField::FrequencyError => (14, 21),
            TransitionField::Intensity => (22, 29),
            TransitionField::DegreeFreedom => (30, 31),
            TransitionField::LowerStateEnergy => (32, 41),
            TransitionField::Gu => (42, 44),
            TransitionField::Tag => (45, 51),
            TransitionField::QnCoding => (52, 55),
            TransitionField::Qn => (56, 150),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

static FIELDS_BY_NAME: Map<&'static str, TransitionField> = phf_map! {
    "FREQUENCY" => TransitionField::Frequency,
    "FREQUENCY_ERROR" => TransitionField::FrequencyError,
    "INTENSITY" => TransitionField::Intensity,
    "DEGREE_FREEDOM" => TransitionField::DegreeFreedom,
    "LOWER_STATE_ENERGY" => TransitionField::LowerStateEnergy,
    "GU" => TransitionField::Gu,
    "TAG" => TransitionField::Tag,
    "QN_CODING" => TransitionField::QnCoding,
    "QN" => TransitionField::Qn,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown transition field '{0}'")]
pub struct UnknownFieldError(pub String);

impl FromStr for TransitionField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FIELDS_BY_NAME
            .get(s.trim())
            .copied()
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

impl fmt::Display for TransitionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static STANDARD: Lazy<TransitionLayout> = Lazy::new(TransitionLayout::build);

/// The resolved record layout of a transitions file.
///
/// Column ranges are the same for both catalog families and for every molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionLayout {
    descriptors: Vec<FieldDescriptor>,
}

impl TransitionLayout {
    /// The shared layout, resolved on first use.
    pub fn standard() -> &'static TransitionLayout {
        &STANDARD
    }

    fn build() -> Self {
        let descriptors = TransitionField::ALL
            .iter()
            .map(|field| {
                let (start, end) = field.columns();
                FieldDescriptor::fixed(start, end, field.name())
            })
            .collect();
        Self { descriptors }
    }

    pub fn descriptor(&self, field: TransitionField) -> &FieldDescriptor {
        &self.descriptors[field.index()]
    }

    pub fn descriptor_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        name.parse::<TransitionField>()
            .ok()
            .map(|field| self.descriptor(field))
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    pub fn extract<'a>(&self, record: &'a str, field: TransitionField) -> &'a str {
        self.descriptor(field).extract(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H2O_LINE: &str = "  183310.0870  0.0010 -3.6463 3  142.2785 13 -18003 303 3 1 3   2 2 0";

    #[test]
    fn standard_layout_is_in_record_order_and_contiguous() {
        let layout = TransitionLayout::standard();
        let descriptors = layout.descriptors();
        assert_eq!(descriptors.len(), TransitionField::ALL.len());
        assert_eq!(descriptors[0].start(), 1);
        for pair in descriptors.windows(2) {
            assert_eq!(pair[0].end() + 1, pair[1].start());
        }
    }

    #[test]
    fn descriptor_names_match_field_names() {
        let layout = TransitionLayout::standard();
        for field in TransitionField::ALL {
            assert_eq!(layout.descriptor(field).name(), field.name());
        }
    }

    #[test]
    fn field_names_round_trip_through_lookup_table() {
        for field in TransitionField::ALL {
            assert_eq!(field.name().parse::<TransitionField>(), Ok(field));
        }
        assert!("NOT_A_FIELD".parse::<TransitionField>().is_err());
    }

    #[test]
    fn extracts_every_field_of_a_jpl_record() {
        let layout = TransitionLayout::standard();
        assert_eq!(layout.extract(H2O_LINE, TransitionField::Frequency), "183310.0870");
        assert_eq!(layout.extract(H2O_LINE, TransitionField::FrequencyError), "0.0010");
        assert_eq!(layout.extract(H2O_LINE, TransitionField::Intensity), "-3.6463");
        assert_eq!(layout.extract(H2O_LINE, TransitionField::DegreeFreedom), "3");
        assert_eq!(
            layout.extract(H2O_LINE, TransitionField::LowerStateEnergy),
            "142.2785"
        );
        assert_eq!(layout.extract(H2O_LINE, TransitionField::Gu), "13");
        assert_eq!(layout.extract(H2O_LINE, TransitionField::Tag), "-18003");
        assert_eq!(layout.extract(H2O_LINE, TransitionField::QnCoding), "303");
        assert_eq!(
            layout.extract(H2O_LINE, TransitionField::Qn),
            "3 1 3   2 2 0"
        );
    }

    #[test]
    fn intensity_keeps_sign_column() {
        let line = "       5.8800  0.0080-14.1229 3 2096.6875 19  18003 303";
        let layout = TransitionLayout::standard();
        assert_eq!(layout.extract(line, TransitionField::Intensity), "-14.1229");
    }

    /// Legacy readers start most fields one or two columns later. On right-justified
    /// records that reads the same trimmed values, except when a negative intensity
    /// fills its sign column.
    #[test]
    fn legacy_ranges_read_the_same_values() {
        let legacy = [
            (TransitionField::Frequency, 1, 13),
            (TransitionField::FrequencyError, 16, 21),
            (TransitionField::Intensity, 23, 29),
            (TransitionField::DegreeFreedom, 31, 32),
            (TransitionField::LowerStateEnergy, 33, 41),
            (TransitionField::Gu, 42, 44),
            (TransitionField::Tag, 46, 51),
            (TransitionField::QnCoding, 53, 55),
            (TransitionField::Qn, 56, 150),
        ];
        let layout = TransitionLayout::standard();
        let wide_intensity = "       5.8800  0.0080-14.1229 3 2096.6875 19  18003 303";
        let co_line = "  115271.2018  0.0005 -5.0105 2    0.0000  3  28001 101 1           0";

        for (field, start, end) in legacy {
            let narrow = FieldDescriptor::new(start, end, field.name()).unwrap();
            for line in [H2O_LINE, co_line] {
                assert_eq!(
                    layout.extract(line, field),
                    narrow.extract(line),
                    "{field} differs on {line:?}"
                );
            }
            if field == TransitionField::Intensity {
                assert_eq!(layout.extract(wide_intensity, field), "-14.1229");
                assert_eq!(narrow.extract(wide_intensity), "14.1229");
            } else {
                assert_eq!(
                    layout.extract(wide_intensity, field),
                    narrow.extract(wide_intensity),
                    "{field} differs on {wide_intensity:?}"
                );
            }
        }
    }

    #[test]
    fn descriptor_by_name_resolves_known_fields() {
        let layout = TransitionLayout::standard();
        let tag = layout.descriptor_by_name("TAG").unwrap();
        assert_eq!((tag.start(), tag.end()), (45, 51));
        assert!(layout.descriptor_by_name("tag").is_none());
    }
}
